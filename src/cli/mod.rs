use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_KEEP: u32 = 100;

#[derive(Parser)]
#[command(name = "feedsweep")]
#[command(about = "Prune old read items from a newsboat cache database", long_about = None)]
pub struct Cli {
    /// Path to the cache database (default: <data dir>/newsboat/cache.db)
    #[arg(short, long)]
    pub db: Option<PathBuf>,

    /// Number of most recent read items to keep per feed
    #[arg(short, long, default_value_t = DEFAULT_KEEP)]
    pub keep: u32,

    /// Mark rows deleted instead of removing them
    #[arg(short = 'D', long)]
    pub soft: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["feedsweep"]);
        assert!(cli.db.is_none());
        assert_eq!(cli.keep, DEFAULT_KEEP);
        assert!(!cli.soft);
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::parse_from(["feedsweep", "-d", "/tmp/cache.db", "-k", "20", "-D"]);
        assert_eq!(cli.db, Some(PathBuf::from("/tmp/cache.db")));
        assert_eq!(cli.keep, 20);
        assert!(cli.soft);
    }

    #[test]
    fn test_negative_keep_rejected() {
        assert!(Cli::try_parse_from(["feedsweep", "--keep", "-1"]).is_err());
    }
}
