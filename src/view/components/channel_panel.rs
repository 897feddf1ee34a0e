use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{render_agent_list, render_aggregate_gauge, render_leaderboard};
use crate::app::AppState;
use crate::model::{Channel, Theme};
use crate::roster::{aggregate, top_n};

/// Render one channel column: pool line, collective gauge, leaderboard, agents.
pub fn render_channel_panel(frame: &mut Frame, area: Rect, state: &AppState, channel: Channel) {
    let is_focused = state.ui.focus == channel;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if is_focused {
            Theme::ACTIVE_BORDER
        } else {
            Theme::PANEL_BORDER
        }))
        .title(Line::from(Span::styled(
            format!(" {} RDV ", channel),
            Style::default()
                .fg(Theme::channel_color(channel))
                .add_modifier(Modifier::BOLD),
        )));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let ranked = top_n(&state.domain.roster, channel, state.ui.top_n);
    let board_height = 1 + ranked.len().max(1) as u16;

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),            // Pool line
            Constraint::Length(1),            // Gauge
            Constraint::Length(1),            // Spacer
            Constraint::Length(board_height), // Leaderboard
            Constraint::Length(1),            // Spacer
            Constraint::Min(2),               // Agent list
        ])
        .split(inner);

    let agg = aggregate(&state.domain.roster, channel);
    frame.render_widget(Paragraph::new(pool_line(state, channel)), layout[0]);
    render_aggregate_gauge(frame, layout[1], &agg);
    render_leaderboard(frame, layout[3], &ranked);
    render_agent_list(frame, layout[5], state, channel);
}

/// Pure function: pool total and dispatch hint.
fn pool_line(state: &AppState, channel: Channel) -> Line<'static> {
    Line::from(vec![
        Span::styled("Pool to dispatch: ", Style::default().fg(Theme::MUTED_TEXT)),
        Span::styled(
            state.domain.pools.get(channel).to_string(),
            Style::default().fg(Theme::TEXT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "  (d: split evenly, p: edit)",
            Style::default().fg(Theme::MUTED_TEXT),
        ),
    ])
}
