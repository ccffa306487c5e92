//! `SQLite` storage for orderdesk.
//!
//! Provides [`setup_database`] and the [`SqliteKeyValueStore`] adapter that
//! backs the core's `KeyValueStore` port (session token, language preference).
#![deny(unsafe_code)]

pub mod repositories;
pub mod setup;

// Re-export repository implementations
pub use repositories::SqliteKeyValueStore;

// Re-export setup functions for convenient access
pub use setup::setup_database;
#[cfg(any(test, feature = "test-utils"))]
pub use setup::setup_test_database;

// Linked for its bundled SQLite build only
use libsqlite3_sys as _;
