//! 配置加载
//!
//! `config.toml` layout:
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8080"
//! connect_timeout_secs = 10
//! request_timeout_secs = 30
//! max_retries = 0
//! privileged_role = "ADMIN"
//!
//! [view]
//! date_format = "%Y-%m-%d"
//! fetch_timeout_secs = 15
//!
//! [logging]
//! level = "info"
//! ```
//!
//! Every key is optional.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use board_viewer_core::types::{DEFAULT_DATE_FORMAT, ViewOptions};
use board_viewer_core::FetchPolicy;
use board_viewer_provider::ClientOptions;
use serde::Deserialize;

const APP_DIR: &str = "board-viewer";
const CONFIG_FILE: &str = "config.toml";

/// Listing view settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ViewConfig {
    /// `strftime` pattern for the created-date column (UTC).
    #[serde(default = "default_date_format")]
    pub date_format: String,
    /// Upper bound for each fetch, in seconds.
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout_secs: u64,
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

fn default_fetch_timeout() -> u64 {
    15
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            fetch_timeout_secs: default_fetch_timeout(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset.
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

/// 应用配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ClientOptions,
    #[serde(default)]
    pub view: ViewConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// `<config_dir>/board-viewer/config.toml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Load from `path`, or from [`default_path`](Self::default_path) when `None`.
    ///
    /// A missing default file yields defaults; a missing explicit file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load_file(path);
        }
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_file(&path),
            _ => Ok(Self::default()),
        }
    }

    fn load_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("invalid config {}", path.display()))
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn fetch_policy(&self) -> Result<FetchPolicy> {
        Ok(FetchPolicy::from_secs(self.view.fetch_timeout_secs)?)
    }

    pub fn view_options(&self) -> ViewOptions {
        ViewOptions {
            date_format: self.view.date_format.clone(),
        }
    }
}
