use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::format::tier_symbol;
use crate::model::Theme;
use crate::roster::Ranked;

const MEDALS: [&str; 3] = ["🥇", "🥈", "🥉"];

/// Render the top-N leaderboard for one channel.
pub fn render_leaderboard(frame: &mut Frame, area: Rect, ranked: &[Ranked]) {
    frame.render_widget(Paragraph::new(build_leaderboard_lines(ranked)), area);
}

/// Pure function: one line per ranked agent.
pub fn build_leaderboard_lines(ranked: &[Ranked]) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        "🏅 Top",
        Style::default().fg(Theme::ACCENT).add_modifier(Modifier::BOLD),
    ))];

    if ranked.is_empty() {
        lines.push(Line::from(Span::styled(
            "  No agents",
            Style::default().fg(Theme::MUTED_TEXT),
        )));
        return lines;
    }

    for (pos, entry) in ranked.iter().enumerate() {
        let place = MEDALS
            .get(pos)
            .map(|m| m.to_string())
            .unwrap_or_else(|| format!("{}.", pos + 1));
        let mut spans = vec![
            Span::raw(format!("  {} ", place)),
            Span::styled(
                entry.name.clone(),
                Style::default().fg(Theme::TEXT).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {} RDV done ", entry.completed),
                Style::default().fg(Theme::MUTED_TEXT),
            ),
            Span::raw(tier_symbol(entry.tier)),
        ];
        if entry.bonus {
            spans.push(Span::styled(" ⭐", Style::default().fg(Theme::ACCENT_WARM)));
        }
        lines.push(Line::from(spans));
    }

    lines
}
