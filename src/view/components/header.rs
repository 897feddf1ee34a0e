use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::format::format_elapsed;
use crate::app::AppState;
use crate::model::{Channel, Theme};
use crate::roster::aggregate;

/// Render header bar.
/// Shows: title, per-channel agents / total objectif / remaining, elapsed time.
pub fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let header_text = build_header_text(state);

    let header = Paragraph::new(header_text).style(
        Style::default()
            .fg(Theme::TEXT)
            .bg(Theme::HEADER_BG)
            .add_modifier(Modifier::BOLD),
    );

    frame.render_widget(header, area);
}

/// Pure function: build header text from state.
fn build_header_text(state: &AppState) -> Line<'static> {
    let mut spans = vec![Span::styled(
        "📊 RDV Dashboard",
        Style::default().fg(Theme::ACCENT),
    )];

    for channel in Channel::ALL {
        let agg = aggregate(&state.domain.roster, channel);
        spans.push(Span::styled("  │  ", Style::default().fg(Theme::SEPARATOR)));
        spans.push(Span::styled(
            channel.label(),
            Style::default().fg(Theme::channel_color(channel)),
        ));
        spans.push(Span::styled(
            format!(
                " {} agents  obj {}  left {}",
                agg.agents, agg.total_quota, agg.total_remaining
            ),
            Style::default().fg(Theme::MUTED_TEXT),
        ));
    }

    spans.push(Span::styled(
        format!("  {}", format_elapsed(state.meta.started_at.elapsed().as_secs())),
        Style::default().fg(Theme::MUTED_TEXT),
    ));

    Line::from(spans)
}
