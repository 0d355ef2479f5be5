use std::path::PathBuf;

use clap::Args;

use crate::bookmarks::resolve_path;
use crate::cli::{load_bookmarks, save_bookmarks, OutputFormat};

#[derive(Args)]
pub struct ResolveArgs {
    /// Bookmark tree (JSON); rewritten if folders are created
    #[arg(long, required = true)]
    pub bookmarks: PathBuf,

    /// Slash-delimited folder path, e.g. "Bookmarks bar/_/Research"
    pub path: String,

    /// Resolve without writing created folders back
    #[arg(long)]
    pub dry_run: bool,
}

/// Execute resolve subcommand
///
/// # Errors
///
/// Returns an error if the bookmark tree cannot be read, resolved, or written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ResolveArgs, format: OutputFormat) -> anyhow::Result<()> {
    let mut store = load_bookmarks(&args.bookmarks)?;
    let before = store.len();

    let id = resolve_path(&mut store, &args.path)?;
    let created = store.len() - before;
    let title = store.title(&id).unwrap_or_default().to_string();

    if created > 0 && !args.dry_run {
        save_bookmarks(&store, &args.bookmarks)?;
    }

    match format {
        OutputFormat::Text => {
            println!("{} -> {} '{}'", args.path, id, title);
            if created > 0 {
                let suffix = if args.dry_run { " (not written)" } else { "" };
                println!("Created {created} folder(s){suffix}");
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "path": args.path,
                "id": id,
                "title": title,
                "created": created,
                "written": created > 0 && !args.dry_run,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("path\tid\ttitle\tcreated");
            println!("{}\t{}\t{}\t{}", args.path, id, title, created);
        }
    }

    Ok(())
}
