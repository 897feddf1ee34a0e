use ratatui::Frame;

use crate::app::{AppState, InputMode};

pub mod components;
pub mod dashboard;

pub use dashboard::render_dashboard;

/// Main view entry point.
/// Draws the dashboard, then any modal layer on top in priority order:
/// input popups, help, celebration alert.
pub fn render(state: &AppState, frame: &mut Frame) {
    dashboard::render_dashboard(frame, state, frame.area());

    match &state.ui.mode {
        InputMode::AddAgent(form) => components::render_add_agent_form(frame, form),
        InputMode::EditPool { channel, buffer } => {
            components::render_pool_editor(frame, *channel, buffer)
        }
        InputMode::Normal => {}
    }

    if state.ui.show_help {
        components::render_help_overlay(frame);
    }

    // Alerts take keys first, so they sit on top
    if !state.ui.alerts.is_empty() {
        components::render_alert_popup(frame, state);
    }
}
