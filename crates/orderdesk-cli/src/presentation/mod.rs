//! Shared CLI presentation utilities.
//!
//! Format-only helpers; text that is also spoken comes from the core's
//! announcement builders.

pub mod tables;

pub use tables::{print_order_table, print_separator, truncate_string};
