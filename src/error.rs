//! Error types for rdv-dashboard
//!
//! Domain-specific error enums using thiserror. Roster operations only fail
//! on caller contract violations; export and config wrap their I/O sources.

use crate::model::Channel;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    #[error("index out of bounds: {index} (roster has {len} agents)")]
    IndexOutOfBounds { index: usize, len: usize },
    #[error("agent at {index} is not enrolled in {channel}")]
    NotEnrolled { index: usize, channel: Channel },
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("I/O {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Non-fatal errors surfaced on the status line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DashboardError {
    #[error("export: {0}")]
    Export(String),
    #[error(transparent)]
    Roster(#[from] RosterError),
}

impl From<ExportError> for DashboardError {
    fn from(e: ExportError) -> Self {
        DashboardError::Export(e.to_string())
    }
}
