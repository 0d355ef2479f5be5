use std::path::PathBuf;

use clap::Args;

use crate::cli::{load_windows, OutputFormat};
use crate::core::window::search_tabs;

#[derive(Args)]
pub struct SearchArgs {
    /// Current windows (JSON list of windows)
    #[arg(long, required = true)]
    pub windows: PathBuf,

    /// Text to look for in tab titles and URLs (case-insensitive)
    pub query: String,
}

/// Execute search subcommand
///
/// # Errors
///
/// Returns an error if the windows file cannot be read.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: SearchArgs, format: OutputFormat) -> anyhow::Result<()> {
    let windows = load_windows(&args.windows)?;
    let hits = search_tabs(&windows, &args.query);

    match format {
        OutputFormat::Text => {
            if hits.is_empty() {
                println!("No tabs match '{}'", args.query);
            } else {
                println!("Tabs matching '{}' ({})", args.query, hits.len());
                println!("{}", "=".repeat(60));
                for (window, tab) in &hits {
                    println!("#{:<3} {}  {}", window + 1, tab.bookmark_title(), tab.url);
                }
            }
        }
        OutputFormat::Json => {
            let output: Vec<_> = hits
                .iter()
                .map(|(window, tab)| {
                    serde_json::json!({
                        "window": window + 1,
                        "url": tab.url,
                        "title": tab.title,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("window\turl\ttitle");
            for (window, tab) in &hits {
                println!("{}\t{}\t{}", window + 1, tab.url, tab.title);
            }
        }
    }

    Ok(())
}
