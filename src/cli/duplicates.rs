use std::path::PathBuf;

use clap::Args;

use crate::cli::{load_windows, OutputFormat};
use crate::core::window::duplicate_urls;

#[derive(Args)]
pub struct DuplicatesArgs {
    /// Current windows (JSON list of windows)
    #[arg(long, required = true)]
    pub windows: PathBuf,
}

/// Execute duplicates subcommand
///
/// # Errors
///
/// Returns an error if the windows file cannot be read.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: DuplicatesArgs, format: OutputFormat) -> anyhow::Result<()> {
    let windows = load_windows(&args.windows)?;
    let duplicates = duplicate_urls(&windows);

    match format {
        OutputFormat::Text => {
            if duplicates.is_empty() {
                println!("No duplicate tabs");
            } else {
                println!("Duplicate tabs ({} URLs)", duplicates.len());
                println!("{}", "=".repeat(60));
                for (url, count) in &duplicates {
                    println!("{count:>4}  {url}");
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&duplicates)?);
        }
        OutputFormat::Tsv => {
            println!("url\tcount");
            for (url, count) in &duplicates {
                println!("{url}\t{count}");
            }
        }
    }

    Ok(())
}
