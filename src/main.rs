use clap::Parser;
use tracing_subscriber::EnvFilter;

use tabfold::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("tabfold=debug,info")
    } else {
        EnvFilter::new("tabfold=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        cli::Commands::Reorder(args) => {
            cli::reorder::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Status(args) => {
            cli::status::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Resolve(args) => {
            cli::resolve::run(args, cli.format)?;
        }
        cli::Commands::Save(args) => {
            cli::save::run(args, cli.format)?;
        }
        cli::Commands::Sync(args) => {
            cli::save::run_sync(args, cli.format)?;
        }
        cli::Commands::Override(args) => {
            cli::save::run_override(args, cli.format)?;
        }
        cli::Commands::Duplicates(args) => {
            cli::duplicates::run(args, cli.format)?;
        }
        cli::Commands::Search(args) => {
            cli::search::run(args, cli.format)?;
        }
    }

    Ok(())
}
