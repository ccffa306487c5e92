//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter:
//! - SQLite key-value store (via orderdesk-db)
//! - Console speech engine and environment locale (via `adapters`)
//! - Core services (via orderdesk-core)
//!
//! Command handlers receive the fully-composed `AppCore` through `CliContext`.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use orderdesk_core::services::AppCore;
use orderdesk_core::{FixtureOrderRepository, Ports, Settings};
use orderdesk_db::{SqliteKeyValueStore, setup_database};

use orderdesk_core::paths::{database_path, database_path_in};

use crate::adapters::{ConsoleSpeechEngine, DEFAULT_WORD_PACE, EnvDeviceLocale};
use crate::parser::Cli;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Database directory; `None` uses the platform data directory.
    pub data_dir: Option<PathBuf>,
    /// Core settings.
    pub settings: Settings,
    /// Console speech pace per word at rate 1.0.
    pub word_pace: Duration,
}

impl CliConfig {
    /// Create config with default paths and pacing.
    pub fn with_defaults() -> Self {
        Self {
            data_dir: None,
            settings: Settings::with_defaults(),
            word_pace: DEFAULT_WORD_PACE,
        }
    }

    /// Apply global command-line flags.
    pub fn from_cli(cli: &Cli) -> Self {
        let mut config = Self::with_defaults();
        config.data_dir.clone_from(&cli.data_dir);
        if cli.no_latency {
            config.settings = Settings::immediate();
            config.word_pace = Duration::ZERO;
        }
        config
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// The core application facade.
    pub app: AppCore,
    /// Where the database lives.
    pub database_path: PathBuf,
}

impl CliContext {
    /// Access the `AppCore`.
    pub const fn app(&self) -> &AppCore {
        &self.app
    }
}

/// Bootstrap the CLI application.
///
/// Opens the database, assembles `AppCore` and runs its startup sequence
/// (locale resolution, session restore, initial route guard pass).
pub async fn bootstrap(config: CliConfig) -> Result<CliContext> {
    // 1. Database with schema
    let database_path = match &config.data_dir {
        Some(dir) => database_path_in(dir)?,
        None => database_path()?,
    };
    let pool = setup_database(&database_path).await?;

    // 2. Platform adapters
    let ports = Ports::new(
        Arc::new(SqliteKeyValueStore::new(pool)),
        Arc::new(ConsoleSpeechEngine::new(config.word_pace)),
        Arc::new(EnvDeviceLocale),
        Arc::new(FixtureOrderRepository::new()),
    );

    // 3. Core
    let app = AppCore::new(ports, config.settings)?;
    app.start().await;

    Ok(CliContext { app, database_path })
}
