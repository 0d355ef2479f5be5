use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::cli::{load_windows, OutputFormat};
use crate::core::window::{TokenSequence, Window};
use crate::matching::distance::similarity;
use crate::matching::reorder::reorder_indices;
use crate::session::SnapshotFile;

#[derive(Args)]
pub struct ReorderArgs {
    /// Current windows (JSON list of windows)
    #[arg(long, required = true)]
    pub fresh: PathBuf,

    /// Stored snapshot to follow; a missing file means no stored order
    #[arg(long)]
    pub stored: Option<PathBuf>,

    /// Write the resulting order back to the snapshot file
    #[arg(long, requires = "stored")]
    pub save: bool,
}

/// A fresh window in its new position
struct Placement<'a> {
    /// 0-based index in the fresh list
    original: usize,
    window: &'a Window,
    /// Similarity to the stored window at the same position, if any
    similarity: Option<f64>,
}

/// Execute reorder subcommand
///
/// # Errors
///
/// Returns an error if the windows or snapshot cannot be read, or the
/// snapshot cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ReorderArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let windows = load_windows(&args.fresh)?;

    let stored = match &args.stored {
        Some(path) => SnapshotFile::load_if_exists(path)
            .with_context(|| format!("Reading snapshot from {}", path.display()))?
            .map(|snapshot| snapshot.windows)
            .unwrap_or_default(),
        None => Vec::new(),
    };

    if verbose {
        eprintln!(
            "Loaded {} current windows and {} stored windows",
            windows.len(),
            stored.len()
        );
    }

    let fresh: Vec<TokenSequence> = windows.iter().map(Window::tokens).collect();
    let order = reorder_indices(&fresh, &stored);

    let placements: Vec<Placement<'_>> = order
        .iter()
        .enumerate()
        .map(|(position, &idx)| Placement {
            original: idx,
            window: &windows[idx],
            similarity: stored.get(position).map(|s| similarity(s, &fresh[idx])),
        })
        .collect();

    match format {
        OutputFormat::Text => print_text(&placements),
        OutputFormat::Json => print_json(&placements)?,
        OutputFormat::Tsv => print_tsv(&placements),
    }

    if args.save {
        if let Some(path) = &args.stored {
            let ordered: Vec<TokenSequence> = order.iter().map(|&idx| fresh[idx].clone()).collect();
            SnapshotFile::new(ordered)
                .save_to_file(path)
                .with_context(|| format!("Writing snapshot to {}", path.display()))?;
            if verbose {
                eprintln!("Saved snapshot to {}", path.display());
            }
        }
    }

    Ok(())
}

fn print_text(placements: &[Placement<'_>]) {
    println!("Window Order");
    println!("{}", "=".repeat(60));

    for (position, placement) in placements.iter().enumerate() {
        let matched = match placement.similarity {
            Some(sim) => format!("{:.0}% similar to stored", sim * 100.0),
            None => "new window".to_string(),
        };
        println!(
            "\n#{} (was #{}) - {} tabs, {}",
            position + 1,
            placement.original + 1,
            placement.window.tabs.len(),
            matched
        );
        for tab in &placement.window.tabs {
            println!("  {}", tab.url);
        }
    }
}

fn print_json(placements: &[Placement<'_>]) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "order": placements.iter().map(|p| p.original).collect::<Vec<_>>(),
        "windows": placements
            .iter()
            .map(|p| {
                serde_json::json!({
                    "original_index": p.original,
                    "id": p.window.id,
                    "similarity": p.similarity,
                    "tabs": p.window.tokens(),
                })
            })
            .collect::<Vec<_>>(),
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv(placements: &[Placement<'_>]) {
    println!("position\toriginal_index\ttab_count\tsimilarity\tfirst_url");
    for (position, placement) in placements.iter().enumerate() {
        println!(
            "{}\t{}\t{}\t{}\t{}",
            position,
            placement.original,
            placement.window.tabs.len(),
            placement
                .similarity
                .map_or_else(String::new, |sim| format!("{sim:.4}")),
            placement
                .window
                .tabs
                .first()
                .map_or("", |tab| tab.url.as_str()),
        );
    }
}
