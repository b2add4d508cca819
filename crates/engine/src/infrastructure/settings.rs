//! Application configuration.
//!
//! Loaded from `CATCHDEX_`-prefixed environment variables (a `.env` file
//! is honored first), with defaults for everything. There is no other
//! persisted configuration: the catalogue snapshot is the only state.

use std::path::PathBuf;

use serde::Deserialize;

/// Default location of the published catalogue file.
const DEFAULT_CATALOGUE_URL: &str =
    "https://catchdex.github.io/data/catalogue.json";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Where to fetch the catalogue on a fresh session.
    pub catalogue_url: String,
    /// Snapshot path override; defaults to the platform data directory.
    pub data_file: Option<PathBuf>,
    /// Start with fully-caught variant groups hidden.
    pub hide_fully_caught: bool,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();
        config::Config::builder()
            .set_default("catalogue_url", DEFAULT_CATALOGUE_URL)?
            .set_default("hide_fully_caught", false)?
            .add_source(config::Environment::with_prefix("CATCHDEX"))
            .build()?
            .try_deserialize()
    }

    /// The snapshot path: the configured override, or
    /// `<platform data dir>/catchdex/catalogue.json`.
    pub fn data_file(&self) -> PathBuf {
        if let Some(path) = &self.data_file {
            return path.clone();
        }
        directories::ProjectDirs::from("io", "catchdex", "catchdex")
            .map(|dirs| dirs.data_dir().join("catalogue.json"))
            .unwrap_or_else(|| PathBuf::from("catalogue.json"))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalogue_url: DEFAULT_CATALOGUE_URL.to_string(),
            data_file: None,
            hide_fully_caught: false,
        }
    }
}
