//! Dashboard configuration: TOML file layered under CLI overrides.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::export::ExportFormat;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Initial CRM pool to dispatch
    pub crm_pool: u32,
    /// Initial Digital pool to dispatch
    pub digital_pool: u32,
    /// Objectif pre-filled in the add-agent form
    pub default_objectif: u32,
    /// Leaderboard size per channel
    pub top_n: usize,
    pub export_format: ExportFormat,
    /// Export directory; the working directory when unset
    pub export_dir: Option<PathBuf>,
    /// EnvFilter directive used when RUST_LOG is unset
    pub log_level: String,
    /// Seconds a status-line message stays visible
    pub status_secs: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            crm_pool: 100,
            digital_pool: 50,
            default_objectif: 20,
            top_n: 3,
            export_format: ExportFormat::Csv,
            export_dir: None,
            log_level: "info".to_string(),
            status_secs: 5,
        }
    }
}

impl Config {
    /// Load from `path`. A missing file yields defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&content, path)
    }

    fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }
}
