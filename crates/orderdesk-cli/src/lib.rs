//! Command-line adapter for orderdesk.
//!
//! Wires the SQLite store, a console speech engine and the environment
//! locale into `AppCore`, then dispatches one command per invocation.
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

#[cfg(test)]
use tokio_test as _;

// Used by the binary only
use dotenvy as _;
use tracing_subscriber as _;

pub mod adapters;
pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::{AnnounceTarget, Commands};
pub use error::CliError;
pub use parser::Cli;
