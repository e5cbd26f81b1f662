#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/findash/findash/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Fact-store backends for the findash metric query layer.
//!
//! This crate provides implementations of the [`FactStore`] trait from
//! `findash-core`:
//!
//! - [`SqliteStore`] - Embedded SQLite backend (default, `sqlite` feature)
//! - [`PostgresStore`] - PostgreSQL backend (`postgres` feature)
//!
//! Connections are explicit and caller-owned: nothing opens as a side effect
//! of loading the crate. Open a store, hand it to the hooks as
//! `Arc<dyn FactStore>`, and drop (or `close`) it when done.

/// Shared SQL text for the metric queries.
#[cfg(any(feature = "sqlite", feature = "postgres"))]
pub(crate) mod sql;

/// SQLite-backed fact store.
#[cfg(feature = "sqlite")]
pub mod sqlite;

/// Seed helpers for populating a SQLite fact store.
#[cfg(feature = "sqlite")]
pub mod seed;

/// PostgreSQL-backed fact store.
#[cfg(feature = "postgres")]
pub mod postgres;

// Re-export the trait for convenience
pub use findash_core::FactStore;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteStore;

#[cfg(feature = "postgres")]
pub use postgres::{PostgresConfig, PostgresStore};
