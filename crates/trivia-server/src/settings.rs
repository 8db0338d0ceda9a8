//! Layered configuration loading
//!
//! Order of precedence, lowest first:
//! 1. `config/default.toml`, embedded at compile time
//! 2. An optional file passed with `--config`
//! 3. `TRIVIA__<SECTION>__<KEY>` environment variables (a `.env` file is
//!    read into the environment first)

#![allow(clippy::result_large_err)]

use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use trivia_core::config::CatalogConfig;
use trivia_core::errors::{ExError, ExErrorKind, ExResult};
use trivia_core::logging_facility::Profile;

const DEFAULT_CONFIG_TOML: &str = include_str!("../config/default.toml");

/// Environment variable prefix (`TRIVIA__SERVER__PORT=8080`)
pub const ENV_PREFIX: &str = "TRIVIA";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl ServerSettings {
    /// `host:port` for the listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// SQLite database file, created on first start
    pub path: PathBuf,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingSettings {
    #[serde(default)]
    pub profile: Profile,
}

impl Settings {
    /// Load settings from every layer
    ///
    /// # Errors
    /// `Config` when a layer cannot be read or parsed, or a value is out of
    /// range.
    pub fn load(config_file: Option<&Path>) -> ExResult<Self> {
        // A missing .env is the normal case
        let _ = dotenvy::dotenv();

        let mut builder = ConfigBuilder::builder()
            .add_source(File::from_str(DEFAULT_CONFIG_TOML, FileFormat::Toml));

        if let Some(path) = config_file {
            builder = builder.add_source(File::from(path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

        Self::from_builder(builder)
    }

    /// Embedded defaults only
    ///
    /// # Errors
    /// `Config` if the embedded file is malformed.
    pub fn defaults() -> ExResult<Self> {
        Self::from_builder(
            ConfigBuilder::builder()
                .add_source(File::from_str(DEFAULT_CONFIG_TOML, FileFormat::Toml)),
        )
    }

    fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> ExResult<Self> {
        let settings: Settings = builder
            .build()
            .map_err(|e| config_error(format!("Failed to build configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| config_error(format!("Failed to deserialize configuration: {}", e)))?;

        settings.catalog.validate()?;

        Ok(settings)
    }
}

fn config_error(message: String) -> ExError {
    ExError::new(ExErrorKind::Config)
        .with_op("load_settings")
        .with_message(message)
}
