//! Sanitize command — clean markup against the title allow-list.

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use serde::Serialize;
use tracing::{debug, instrument};

use hivemark_core::sanitize;

use super::read_input_file;

/// Arguments for the `sanitize` subcommand.
#[derive(Args, Debug)]
pub struct SanitizeArgs {
    /// Markup to sanitize.
    #[arg(conflicts_with = "file")]
    pub input: Option<String>,

    /// Read the markup from a file instead.
    #[arg(short, long)]
    pub file: Option<Utf8PathBuf>,
}

#[derive(Serialize)]
struct SanitizeReport {
    input: String,
    output: String,
    changed: bool,
}

/// Sanitize markup and print the result.
#[instrument(name = "cmd_sanitize", skip_all)]
pub fn cmd_sanitize(
    args: SanitizeArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let input = match (args.input, args.file) {
        (Some(input), None) => input,
        (None, Some(ref path)) => read_input_file(path, max_input_bytes)?,
        _ => bail!("provide markup or --file"),
    };

    debug!(input_len = input.len(), "executing sanitize command");

    let output = sanitize::clean(&input);

    if global_json {
        let report = SanitizeReport {
            changed: output != input,
            input,
            output,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{output}");
    }

    Ok(())
}
