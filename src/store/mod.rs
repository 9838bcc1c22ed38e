pub mod sqlite;

use crate::app::Result;
use crate::domain::PruneMode;

pub use sqlite::SqliteStore;

pub trait Store {
    /// Distinct feed URLs present among all items, prunable or not.
    fn feed_urls(&self) -> Result<Vec<String>>;

    /// Apply the retention rule to one feed: keep the `keep` most recent
    /// read items, dispose of the remaining read items per `mode`. Returns
    /// the number of rows affected.
    fn prune_feed(&self, feed_url: &str, keep: u32, mode: PruneMode) -> Result<usize>;
}
