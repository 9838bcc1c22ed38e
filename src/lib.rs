//! # Feedsweep
//!
//! A retention pruner for newsboat-style feed caches.
//!
//! Feedsweep walks every feed in a `cache.db`, keeps the most recent N read
//! items per feed, and deletes (or soft-deletes) the rest. Unread items and
//! user-flagged items are never touched.
//!
//! ```text
//! CLI → path resolution → Store → per-feed retention statement
//! ```
//!
//! ## Quick start
//!
//! ```bash
//! # Prune the default cache, keeping 100 read items per feed
//! feedsweep
//!
//! # Keep only the 20 most recent read items, explicit database
//! feedsweep --db ~/.local/share/newsboat/cache.db --keep 20
//!
//! # Mark rows deleted instead of removing them
//! feedsweep --soft
//! ```
//!
//! On success the total number of affected rows is printed to stdout.

/// Error types shared across the crate.
pub mod app;

/// Command-line interface using clap.
pub mod cli;

/// Cache database path resolution.
pub mod config;

/// Core domain vocabulary.
///
/// - [`PruneMode`](domain::PruneMode): hard delete vs soft delete
pub mod domain;

/// Run orchestration: enumerate feeds, prune each, total up.
pub mod prune;

/// SQLite persistence layer.
///
/// - [`Store`](store::Store): trait defining the enumeration and pruning
///   operations
/// - [`SqliteStore`](store::SqliteStore): rusqlite implementation
pub mod store;
