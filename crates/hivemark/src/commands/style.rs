//! Style command — run a title through the automatic styling pipeline.

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use hivemark_core::styler::StyleReport;

use super::read_input_file;

/// Arguments for the `style` subcommand.
#[derive(Args, Debug)]
pub struct StyleArgs {
    /// Title text to style.
    #[arg(conflicts_with = "file")]
    pub title: Option<String>,

    /// Read the title from a file instead (trailing newline is trimmed).
    #[arg(short, long)]
    pub file: Option<Utf8PathBuf>,

    /// Skip the styling rules and only sanitize.
    #[arg(long)]
    pub sanitize_only: bool,
}

/// Style a title and print the result.
#[instrument(name = "cmd_style", skip_all, fields(sanitize_only = args.sanitize_only))]
pub fn cmd_style(
    args: StyleArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let title = match (args.title, args.file) {
        (Some(title), None) => title,
        (None, Some(ref path)) => read_input_file(path, max_input_bytes)?
            .trim_end_matches(['\r', '\n'])
            .to_string(),
        _ => bail!("provide a title argument or --file"),
    };

    debug!(title_len = title.len(), "executing style command");

    let report = StyleReport::generate(&title, !args.sanitize_only);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.output);
        if report.changed {
            eprintln!("{} input was rewritten", "note:".dimmed());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_title_is_styled() {
        let args = StyleArgs {
            title: Some("Stop!".to_string()),
            file: None,
            sanitize_only: false,
        };
        assert!(cmd_style(args, true, None).is_ok());
    }

    #[test]
    fn missing_input_is_an_error() {
        let args = StyleArgs {
            title: None,
            file: None,
            sanitize_only: false,
        };
        assert!(cmd_style(args, false, None).is_err());
    }
}
