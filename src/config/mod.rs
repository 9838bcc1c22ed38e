//! Cache database path resolution.
//!
//! Without an explicit `--db`, the database is looked up at
//! `<data dir>/newsboat/cache.db`, where the data dir honors
//! `$XDG_DATA_HOME` and falls back to `~/.local/share` on Linux.

use std::path::PathBuf;

use crate::app::{Result, SweepError};

/// Resolve the cache database path, preferring an explicit override.
///
/// The resolved path must already exist: this tool never creates a
/// database, an empty one would have nothing to prune and a typo'd path
/// should fail loudly instead.
pub fn resolve_db_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    let path = match explicit {
        Some(p) => p,
        None => default_db_path()?,
    };

    if !path.is_file() {
        return Err(SweepError::Config(format!(
            "cache database not found: {}",
            path.display()
        )));
    }

    Ok(path)
}

fn default_db_path() -> Result<PathBuf> {
    let data_dir = dirs::data_dir()
        .ok_or_else(|| SweepError::Config("Could not find data directory".into()))?;
    Ok(data_dir.join("newsboat").join("cache.db"))
}
