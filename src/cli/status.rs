use std::path::PathBuf;

use clap::Args;

use crate::bookmarks::resolve_path;
use crate::cli::{load_bookmarks, load_settings, load_windows, OutputFormat};
use crate::core::window::Window;
use crate::matching::{candidate_folders, find_best_match, MatchResult, WindowStatus};

#[derive(Args)]
pub struct StatusArgs {
    /// Current windows (JSON list of windows)
    #[arg(long, required = true)]
    pub windows: PathBuf,

    /// Bookmark tree (JSON)
    #[arg(long, required = true)]
    pub bookmarks: PathBuf,

    /// Folder path whose subfolders are the candidates (overrides settings)
    #[arg(long)]
    pub parent: Option<String>,

    /// Settings file
    #[arg(long)]
    pub settings: Option<PathBuf>,
}

struct WindowReport<'a> {
    window: &'a Window,
    result: MatchResult,
    status: WindowStatus,
}

/// Execute status subcommand
///
/// The bookmark file is never written; folders missing from the parent
/// path only exist for the duration of the command.
///
/// # Errors
///
/// Returns an error if an input file cannot be read or the bookmark tree
/// cannot be searched.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: StatusArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let settings = load_settings(args.settings.as_ref(), args.parent.clone())?;
    let windows = load_windows(&args.windows)?;
    let mut store = load_bookmarks(&args.bookmarks)?;

    let parent = resolve_path(&mut store, &settings.parent_folder)?;
    let folders = candidate_folders(&store, &parent)?;

    if verbose {
        eprintln!(
            "Comparing {} windows with {} folders under '{}'",
            windows.len(),
            folders.len(),
            settings.parent_folder
        );
    }

    let mut reports = Vec::with_capacity(windows.len());
    for window in &windows {
        let tabs = window.tab_set();
        let result = find_best_match(&store, &tabs, &folders)?;
        let status = WindowStatus::from_match(&tabs, &result);
        reports.push(WindowReport {
            window,
            result,
            status,
        });
    }

    match format {
        OutputFormat::Text => print_text(&reports),
        OutputFormat::Json => print_json(&reports)?,
        OutputFormat::Tsv => print_tsv(&reports),
    }

    Ok(())
}

fn print_text(reports: &[WindowReport<'_>]) {
    println!("Window Status");
    println!("{}", "=".repeat(60));

    for (idx, report) in reports.iter().enumerate() {
        let tabs = report.window.tabs.len();
        match &report.status {
            WindowStatus::Saved { folder } => {
                println!("\n#{} SAVED in '{}' ({tabs} tabs)", idx + 1, folder.title);
            }
            WindowStatus::Partial {
                folder,
                matched,
                missing,
            } => {
                println!(
                    "\n#{} PARTIAL: {matched}/{tabs} tabs in '{}'",
                    idx + 1,
                    folder.title
                );
                for url in missing {
                    println!("  missing: {url}");
                }
            }
            WindowStatus::Unsaved => {
                println!("\n#{} UNSAVED ({tabs} tabs)", idx + 1);
            }
        }
    }
}

fn print_json(reports: &[WindowReport<'_>]) -> anyhow::Result<()> {
    let output: Vec<_> = reports
        .iter()
        .enumerate()
        .map(|(idx, report)| {
            serde_json::json!({
                "window": idx + 1,
                "id": report.window.id,
                "total_tabs": report.window.tabs.len(),
                "match_count": report.result.match_count_or_sentinel(),
                "result": report.status,
            })
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv(reports: &[WindowReport<'_>]) {
    println!("window\tstatus\tfolder_id\tfolder_title\tmatch_count\ttotal_tabs");
    for (idx, report) in reports.iter().enumerate() {
        let (folder_id, folder_title) = report
            .result
            .folder
            .as_ref()
            .map_or(("", ""), |f| (f.id.as_str(), f.title.as_str()));
        println!(
            "{}\t{}\t{}\t{}\t{}\t{}",
            idx + 1,
            report.status.label(),
            folder_id,
            folder_title,
            report.result.match_count_or_sentinel(),
            report.window.tabs.len()
        );
    }
}
