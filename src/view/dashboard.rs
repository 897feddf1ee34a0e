use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

use crate::app::AppState;
use crate::model::Channel;

use super::components::{render_channel_panel, render_footer, render_header};

/// Render dashboard view into the given area.
/// Header, CRM | Digital panels side by side, footer.
pub fn render_dashboard(frame: &mut Frame, state: &AppState, area: Rect) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(6),    // Channel panels
            Constraint::Length(1), // Footer
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(main_layout[1]);

    render_header(frame, main_layout[0], state);
    render_channel_panel(frame, columns[0], state, Channel::Crm);
    render_channel_panel(frame, columns[1], state, Channel::Digital);
    render_footer(frame, main_layout[2], state);
}
