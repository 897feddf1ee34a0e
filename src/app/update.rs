use tracing::warn;

use crate::app::state::StatusLevel;
use crate::app::{handle_key, AppState};
use crate::event::AppEvent;

/// Update function following Elm Architecture.
/// No I/O, no side effects - fully deterministic and unit testable.
pub fn update(state: &mut AppState, event: AppEvent) {
    match event {
        AppEvent::Key(key) => handle_key(state, key),

        AppEvent::Tick(now) => {
            state.ui.now = now;
            let expired = state
                .ui
                .status
                .as_ref()
                .is_some_and(|s| (now - s.at).num_seconds() >= state.ui.status_secs);
            if expired {
                state.ui.status = None;
            }
        }

        AppEvent::ExportFinished(path) => {
            state.set_status(
                StatusLevel::Info,
                format!("Exported to {}", path.display()),
            );
        }

        AppEvent::Error { source, error } => {
            warn!(%source, %error, "non-fatal error");
            state.set_status(StatusLevel::Error, format!("{}: {}", source, error));
        }
    }
}
