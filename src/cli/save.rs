use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;

use crate::bookmarks::{override_folder, save_window, sync_folder, BookmarkError, MemoryBookmarkStore};
use crate::cli::{
    load_bookmarks, load_settings, load_windows, save_bookmarks, select_window, OutputFormat,
};
use crate::core::types::FolderId;
use crate::core::window::Window;

type FolderAction =
    fn(&mut MemoryBookmarkStore, &FolderId, &Window) -> Result<usize, BookmarkError>;

#[derive(Args)]
pub struct SaveArgs {
    /// Current windows (JSON list of windows)
    #[arg(long, required = true)]
    pub windows: PathBuf,

    /// Bookmark tree (JSON); rewritten with the new folder
    #[arg(long, required = true)]
    pub bookmarks: PathBuf,

    /// Window to save (1-based position in the windows file)
    #[arg(long, required = true)]
    pub window: usize,

    /// Group name; the folder is titled YYYY_MM_DD_<name>
    #[arg(long, required = true)]
    pub name: String,

    /// Folder path to save under (overrides settings)
    #[arg(long)]
    pub parent: Option<String>,

    /// Settings file
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Date for the folder title (default: today in UTC)
    #[arg(long)]
    pub date: Option<NaiveDate>,
}

#[derive(Args)]
pub struct FolderActionArgs {
    /// Current windows (JSON list of windows)
    #[arg(long, required = true)]
    pub windows: PathBuf,

    /// Bookmark tree (JSON); rewritten in place
    #[arg(long, required = true)]
    pub bookmarks: PathBuf,

    /// Window to take tabs from (1-based position in the windows file)
    #[arg(long, required = true)]
    pub window: usize,

    /// Id of the folder to update
    #[arg(long, required = true)]
    pub folder: String,
}

/// Execute save subcommand
///
/// # Errors
///
/// Returns an error if the group name is invalid, the window does not exist,
/// or the bookmark tree cannot be read or written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: SaveArgs, format: OutputFormat) -> anyhow::Result<()> {
    let settings = load_settings(args.settings.as_ref(), args.parent.clone())?;
    let windows = load_windows(&args.windows)?;
    let window = select_window(&windows, args.window)?;
    let mut store = load_bookmarks(&args.bookmarks)?;

    let date = args
        .date
        .unwrap_or_else(|| chrono::Utc::now().date_naive());
    let outcome = save_window(&mut store, &settings.parent_folder, window, &args.name, date)?;
    save_bookmarks(&store, &args.bookmarks)?;

    match format {
        OutputFormat::Text => {
            println!(
                "Saved {} bookmarks to '{}' (id {})",
                outcome.bookmarks, outcome.folder.title, outcome.folder.id
            );
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
        OutputFormat::Tsv => {
            println!("folder_id\tfolder_title\tbookmarks");
            println!(
                "{}\t{}\t{}",
                outcome.folder.id, outcome.folder.title, outcome.bookmarks
            );
        }
    }

    Ok(())
}

/// Execute sync subcommand
///
/// # Errors
///
/// Returns an error if the window or folder does not exist, or the bookmark
/// tree cannot be read or written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run_sync(args: FolderActionArgs, format: OutputFormat) -> anyhow::Result<()> {
    run_folder_action(&args, format, "sync", sync_folder)
}

/// Execute override subcommand
///
/// # Errors
///
/// Returns an error if the window or folder does not exist, or the bookmark
/// tree cannot be read or written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run_override(args: FolderActionArgs, format: OutputFormat) -> anyhow::Result<()> {
    run_folder_action(&args, format, "override", override_folder)
}

fn run_folder_action(
    args: &FolderActionArgs,
    format: OutputFormat,
    action: &str,
    apply: FolderAction,
) -> anyhow::Result<()> {
    let windows = load_windows(&args.windows)?;
    let window = select_window(&windows, args.window)?;
    let mut store = load_bookmarks(&args.bookmarks)?;

    let folder = FolderId::new(args.folder.as_str());
    let added = apply(&mut store, &folder, window)?;
    save_bookmarks(&store, &args.bookmarks)?;

    let title = store.title(&folder).unwrap_or_default();
    match format {
        OutputFormat::Text => {
            println!("{action}: wrote {added} bookmarks to '{title}' (id {folder})");
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "action": action,
                "folder": { "id": folder, "title": title },
                "bookmarks": added,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("action\tfolder_id\tfolder_title\tbookmarks");
            println!("{action}\t{folder}\t{title}\t{added}");
        }
    }

    Ok(())
}
