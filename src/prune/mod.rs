use crate::app::Result;
use crate::domain::PruneMode;
use crate::store::Store;

/// Prune every feed in the store, keeping the `keep` most recent read items
/// per feed. Returns the total number of rows affected.
///
/// Feeds are processed sequentially and each feed's statement commits on
/// its own; the first failure aborts the run and already-pruned feeds stay
/// pruned.
pub fn run<S: Store>(store: &S, keep: u32, mode: PruneMode) -> Result<usize> {
    let feeds = store.feed_urls()?;

    let mut total = 0;
    for url in &feeds {
        let affected = store.prune_feed(url, keep, mode)?;
        if affected > 0 {
            tracing::debug!("Pruned {} items from {}", affected, url);
        }
        total += affected;
    }

    tracing::info!("Pruned {} items across {} feeds", total, feeds.len());
    Ok(total)
}
