//! Fonts command — print the web fonts stylesheet URL.

use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use hivemark_core::config::Config;
use hivemark_core::fonts::{FontToggles, fonts_url};

/// Arguments for the `fonts` subcommand.
#[derive(Args, Debug, Default)]
pub struct FontsArgs {
    /// Leave out the Droid Serif family.
    #[arg(long)]
    pub no_droid_serif: bool,

    /// Leave out the Playfair Display family.
    #[arg(long)]
    pub no_playfair_display: bool,
}

#[derive(Serialize)]
struct FontsReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    droid_serif: bool,
    playfair_display: bool,
}

/// Print the stylesheet URL for the enabled font families.
///
/// Flags subtract from the configured toggles; they cannot re-enable a
/// family the config switched off.
#[instrument(name = "cmd_fonts", skip_all)]
pub fn cmd_fonts(args: FontsArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    let configured = config.font_toggles();
    let toggles = FontToggles {
        droid_serif: configured.droid_serif && !args.no_droid_serif,
        playfair_display: configured.playfair_display && !args.no_playfair_display,
    };

    debug!(?toggles, "executing fonts command");

    let url = fonts_url(toggles);

    if global_json {
        let report = FontsReport {
            url: url.as_ref().map(ToString::to_string),
            droid_serif: toggles.droid_serif,
            playfair_display: toggles.playfair_display,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if let Some(url) = url {
        println!("{url}");
    } else {
        eprintln!("{} no font families enabled", "note:".dimmed());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_prints_a_url() {
        assert!(cmd_fonts(FontsArgs::default(), false, &Config::default()).is_ok());
    }

    #[test]
    fn all_families_off_still_succeeds() {
        let args = FontsArgs {
            no_droid_serif: true,
            no_playfair_display: true,
        };
        assert!(cmd_fonts(args, true, &Config::default()).is_ok());
    }
}
