use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use feedsweep::cli::Cli;
use feedsweep::domain::PruneMode;
use feedsweep::store::SqliteStore;
use feedsweep::{config, prune};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries only the affected-row total
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let db_path = config::resolve_db_path(cli.db)?;
    let store = SqliteStore::open(&db_path)?;

    let mode = if cli.soft {
        PruneMode::MarkDeleted
    } else {
        PruneMode::Delete
    };

    let total = prune::run(&store, cli.keep, mode)?;
    println!("{}", total);

    Ok(())
}
