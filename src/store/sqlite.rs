use std::path::Path;
use std::sync::Mutex;

use rusqlite::{params, Connection, OpenFlags};

use crate::app::{Result, SweepError};
use crate::domain::PruneMode;
use crate::store::Store;

pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open an existing cache database read-write.
    ///
    /// Never creates the file: the schema belongs to the feed reader, and
    /// pruning an empty database it just created would be meaningless.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Empty in-memory database. The `rss_item` table must be created by
    /// the caller; used by tests.
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }
}

impl Store for SqliteStore {
    fn feed_urls(&self) -> Result<Vec<String>> {
        let conn = self.conn.lock().map_err(|e| {
            SweepError::Database(rusqlite::Error::SqliteFailure(
                rusqlite::ffi::Error::new(1),
                Some(e.to_string()),
            ))
        })?;

        let mut stmt = conn.prepare("SELECT feedurl FROM rss_item GROUP BY feedurl")?;

        let urls = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(urls)
    }

    fn prune_feed(&self, feed_url: &str, keep: u32, mode: PruneMode) -> Result<usize> {
        let conn = self.conn.lock().map_err(|e| {
            SweepError::Database(rusqlite::Error::SqliteFailure(
                rusqlite::ffi::Error::new(1),
                Some(e.to_string()),
            ))
        })?;

        // Both statements rank the feed's read items by pubDate (newest
        // first, id as tie-break) and act on everything past rank `keep`.
        // User-flagged items are left alone in either mode; in soft mode
        // already-deleted rows neither count toward the kept N nor get
        // re-flagged, which is what makes a second run a no-op.
        let affected = match mode {
            PruneMode::Delete => conn.execute(
                "DELETE FROM rss_item
                 WHERE feedurl = ?1 AND unread = 0 AND (flags IS NULL OR flags = '')
                   AND id NOT IN (SELECT id FROM rss_item
                                  WHERE feedurl = ?1 AND unread = 0
                                  ORDER BY pubDate DESC, id DESC LIMIT ?2)",
                params![feed_url, keep],
            )?,
            PruneMode::MarkDeleted => conn.execute(
                "UPDATE rss_item SET deleted = 1
                 WHERE feedurl = ?1 AND unread = 0 AND deleted = 0
                   AND (flags IS NULL OR flags = '')
                   AND id NOT IN (SELECT id FROM rss_item
                                  WHERE feedurl = ?1 AND unread = 0 AND deleted = 0
                                  ORDER BY pubDate DESC, id DESC LIMIT ?2)",
                params![feed_url, keep],
            )?,
        };

        Ok(affected)
    }
}
