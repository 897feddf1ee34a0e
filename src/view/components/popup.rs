use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::AppState;
use crate::model::{Channel, Theme};

/// Render the oldest pending celebration as a modal.
pub fn render_alert_popup(frame: &mut Frame, state: &AppState) {
    let Some(message) = state.ui.alerts.front() else {
        return;
    };

    let area = centered_rect(50, 30, frame.area());
    frame.render_widget(Clear, area);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            message.to_string(),
            Style::default()
                .fg(Theme::ACCENT_WARM)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    let queued = state.ui.alerts.len() - 1;
    if queued > 0 {
        lines.push(Line::from(Span::styled(
            format!("(+{} more)", queued),
            Style::default().fg(Theme::MUTED_TEXT),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Theme::ACCENT_WARM))
                .title(" Objective exceeded (any key) "),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(Style::default().bg(Theme::BACKGROUND));

    frame.render_widget(paragraph, area);
}

/// Render the pool total editor.
pub fn render_pool_editor(frame: &mut Frame, channel: Channel, buffer: &str) {
    let area = centered_rect(40, 20, frame.area());
    frame.render_widget(Clear, area);

    let paragraph = Paragraph::new(vec![
        Line::from(Span::styled(
            "Total RDV to dispatch:",
            Style::default().fg(Theme::MUTED_TEXT),
        )),
        Line::from(vec![
            Span::styled(buffer.to_string(), Style::default().fg(Theme::TEXT)),
            Span::styled("█", Style::default().fg(Theme::ACCENT)),
        ]),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Theme::channel_color(channel)))
            .title(format!(" {} pool (Enter to save, Esc to cancel) ", channel)),
    )
    .style(Style::default().bg(Theme::BACKGROUND));

    frame.render_widget(paragraph, area);
}

/// Helper to create a centered rect using up certain percentage of the available rect `r`.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
