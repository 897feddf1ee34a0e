use std::fs;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ExportError;
use crate::model::Channel;
use crate::roster::Roster;

pub const EXPORT_STEM: &str = "Suivi_RDV_Agents_CRM_Digital";

/// Column order of the exported sheet.
pub const HEADERS: [&str; 5] = [
    "Agent",
    "Objectif CRM",
    "Objectif Digital",
    "RDV CRM Restants",
    "RDV Digitaux Restants",
];

// ============================================================================
// FUNCTIONAL CORE: snapshot of the roster as flat rows
// ============================================================================

/// One row per agent. Non-enrolled cells are empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRow {
    #[serde(rename = "Agent")]
    pub agent: String,
    #[serde(rename = "Objectif CRM")]
    pub objectif_crm: Option<i64>,
    #[serde(rename = "Objectif Digital")]
    pub objectif_digital: Option<i64>,
    #[serde(rename = "RDV CRM Restants")]
    pub crm_remaining: Option<i64>,
    #[serde(rename = "RDV Digitaux Restants")]
    pub digital_remaining: Option<i64>,
}

pub fn build_rows(roster: &Roster) -> Vec<ExportRow> {
    roster
        .agents()
        .iter()
        .map(|agent| ExportRow {
            agent: agent.name.clone(),
            objectif_crm: agent.participation(Channel::Crm).quota(),
            objectif_digital: agent.participation(Channel::Digital).quota(),
            crm_remaining: agent.participation(Channel::Crm).remaining(),
            digital_remaining: agent.participation(Channel::Digital).remaining(),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    pub fn file_name(self) -> String {
        format!("{}.{}", EXPORT_STEM, self.extension())
    }

    pub fn sink(self) -> Box<dyn TabularSink> {
        match self {
            ExportFormat::Csv => Box::new(CsvSink),
            ExportFormat::Json => Box::new(JsonSink),
        }
    }
}

// ============================================================================
// IMPERATIVE SHELL: writing rows to disk
// ============================================================================

/// External "write tabular file" capability.
pub trait TabularSink {
    fn write_rows(&self, rows: &[ExportRow], path: &Path) -> Result<(), ExportError>;
}

pub struct CsvSink;

impl TabularSink for CsvSink {
    fn write_rows(&self, rows: &[ExportRow], path: &Path) -> Result<(), ExportError> {
        let file = fs::File::create(path).map_err(|source| ExportError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let mut writer = csv::Writer::from_writer(file);
        // serialize() only emits headers alongside the first row
        if rows.is_empty() {
            writer.write_record(HEADERS)?;
        }
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush().map_err(|source| ExportError::Io {
            path: path.display().to_string(),
            source,
        })
    }
}

pub struct JsonSink;

impl TabularSink for JsonSink {
    fn write_rows(&self, rows: &[ExportRow], path: &Path) -> Result<(), ExportError> {
        let content = serde_json::to_string_pretty(rows)?;
        fs::write(path, content).map_err(|source| ExportError::Io {
            path: path.display().to_string(),
            source,
        })
    }
}

/// Snapshot the roster and write it into `dir` using `format`.
/// Creates `dir` if needed. Returns the written file path.
pub fn export_roster(
    roster: &Roster,
    dir: &Path,
    format: ExportFormat,
) -> Result<PathBuf, ExportError> {
    let rows = build_rows(roster);

    fs::create_dir_all(dir).map_err(|source| ExportError::Io {
        path: dir.display().to_string(),
        source,
    })?;

    let path = dir.join(format.file_name());
    format.sink().write_rows(&rows, &path)?;
    info!(path = %path.display(), rows = rows.len(), "roster exported");
    Ok(path)
}
