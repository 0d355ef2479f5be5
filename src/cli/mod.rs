//! Command-line interface for tabfold.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **reorder**: Order the current windows to follow a stored snapshot
//! - **status**: Report which bookmark folder, if any, holds each window
//! - **resolve**: Resolve (and create) a bookmark folder path
//! - **save**: Save a window's tabs as a new dated bookmark folder
//! - **sync** / **override**: Update an existing folder from a window
//! - **duplicates**: List URLs open in more than one tab
//! - **search**: Find tabs by title or URL
//!
//! ## Usage
//!
//! ```text
//! # Restore the stored window order and remember the new one
//! tabfold reorder --fresh windows.json --stored snapshot.json --save
//!
//! # Which windows are already bookmarked?
//! tabfold status --windows windows.json --bookmarks bookmarks.json
//!
//! # Save the second window as "2024_03_18_Research" under the parent folder
//! tabfold save --windows windows.json --bookmarks bookmarks.json --window 2 --name Research
//!
//! # JSON output for scripting
//! tabfold --format json duplicates --windows windows.json
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::bookmarks::MemoryBookmarkStore;
use crate::core::window::Window;
use crate::session::{load_windows_file, Settings};

pub mod duplicates;
pub mod reorder;
pub mod resolve;
pub mod save;
pub mod search;
pub mod status;

#[derive(Parser)]
#[command(name = "tabfold")]
#[command(version)]
#[command(about = "Reconcile browser windows against snapshots and bookmark folders")]
#[command(
    long_about = "tabfold matches the windows you have open against what was stored before.\n\nIt can:\n- Restore a stable window order after a restart\n- Tell which bookmark folder already holds a window's tabs\n- Save, sync, or override bookmark folders from a window"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Order the current windows to follow a stored snapshot
    Reorder(reorder::ReorderArgs),

    /// Show which bookmark folder best matches each window
    Status(status::StatusArgs),

    /// Resolve a bookmark folder path, creating missing folders
    Resolve(resolve::ResolveArgs),

    /// Save a window as a new dated bookmark folder
    Save(save::SaveArgs),

    /// Add a window's missing tabs to an existing folder
    Sync(save::FolderActionArgs),

    /// Replace a folder's bookmarks with a window's tabs
    Override(save::FolderActionArgs),

    /// List URLs open in more than one tab
    Duplicates(duplicates::DuplicatesArgs),

    /// Find tabs whose title or URL contains a query
    Search(search::SearchArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

fn load_windows(path: &Path) -> anyhow::Result<Vec<Window>> {
    load_windows_file(path).with_context(|| format!("Reading windows from {}", path.display()))
}

fn load_bookmarks(path: &Path) -> anyhow::Result<MemoryBookmarkStore> {
    MemoryBookmarkStore::load_from_file(path)
        .with_context(|| format!("Reading bookmarks from {}", path.display()))
}

fn save_bookmarks(store: &MemoryBookmarkStore, path: &Path) -> anyhow::Result<()> {
    store
        .save_to_file(path)
        .with_context(|| format!("Writing bookmarks to {}", path.display()))
}

fn load_settings(path: Option<&PathBuf>, parent: Option<String>) -> anyhow::Result<Settings> {
    let settings = match path {
        Some(path) => Settings::load_or_default(path)
            .with_context(|| format!("Reading settings from {}", path.display()))?,
        None => Settings::default(),
    };
    Ok(settings.with_parent_folder(parent))
}

/// Pick a window by its 1-based position
fn select_window(windows: &[Window], position: usize) -> anyhow::Result<&Window> {
    position
        .checked_sub(1)
        .and_then(|idx| windows.get(idx))
        .ok_or_else(|| {
            anyhow::anyhow!(
                "Window {position} not found ({} windows available)",
                windows.len()
            )
        })
}
