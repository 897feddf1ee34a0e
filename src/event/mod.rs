use std::path::PathBuf;

use chrono::{DateTime, Utc};
use crossterm::event::KeyEvent;

use crate::error::DashboardError;

/// All events that can occur in the application.
/// Sourced from keyboard input, timers, and side effects run by the event loop.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Keyboard input event
    Key(KeyEvent),

    /// Timer tick (status line expiry)
    Tick(DateTime<Utc>),

    /// Export side effect wrote the roster snapshot
    ExportFinished(PathBuf),

    /// Error occurred (non-fatal - export, roster contract)
    Error { source: String, error: DashboardError },
}
