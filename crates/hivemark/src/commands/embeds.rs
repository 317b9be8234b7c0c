//! Embeds command — extract media embeds from a content file.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use hivemark_core::embeds::{MediaType, media_embedded_in_content};

use super::read_input_file;

/// Arguments for the `embeds` subcommand.
#[derive(Args, Debug)]
pub struct EmbedsArgs {
    /// Content file to scan.
    pub file: Utf8PathBuf,

    /// Media types to extract (default: all).
    #[arg(short, long, value_enum, value_delimiter = ',')]
    pub types: Vec<MediaType>,

    /// Print only the first embed found.
    #[arg(long)]
    pub first: bool,
}

/// Extract media embeds and print them in document order.
#[instrument(name = "cmd_embeds", skip_all, fields(file = %args.file))]
pub fn cmd_embeds(
    args: EmbedsArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, types = ?args.types, "executing embeds command");

    let content = read_input_file(&args.file, max_input_bytes)?;

    let filter = if args.types.is_empty() {
        None
    } else {
        Some(args.types.as_slice())
    };
    let mut found = media_embedded_in_content(&content, filter);
    if args.first {
        found.truncate(1);
    }

    if global_json {
        println!("{}", serde_json::to_string_pretty(&found)?);
    } else if found.is_empty() {
        eprintln!("{} no embeds found in {}", "note:".dimmed(), args.file);
    } else {
        for embed in &found {
            println!("{embed}");
        }
    }

    Ok(())
}
