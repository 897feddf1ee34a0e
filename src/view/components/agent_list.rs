use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState},
    Frame,
};

use super::format::{encouragement, format_rate, format_remaining, tier_symbol};
use crate::app::AppState;
use crate::model::{Channel, Theme};
use crate::roster::{rate_per_hour, Tier};

/// Render the enrolled agents of one channel as two-line cards.
/// The list scrolls to keep the selected agent visible.
pub fn render_agent_list(frame: &mut Frame, area: Rect, state: &AppState, channel: Channel) {
    let items = build_agent_items(state, channel);
    let mut list_state = ListState::default().with_selected(state.ui.selection.get(channel));
    frame.render_stateful_widget(List::new(items), area, &mut list_state);
}

/// Pure function: list items for the channel's enrolled agents.
fn build_agent_items(state: &AppState, channel: Channel) -> Vec<ListItem<'static>> {
    let roster = &state.domain.roster;
    if roster.enrolled_count(channel) == 0 {
        return vec![ListItem::new(Line::from(Span::styled(
            "No agents enrolled. Press 'a' to add one.",
            Style::default().fg(Theme::MUTED_TEXT),
        )))];
    }

    let selected = if state.ui.focus == channel {
        state.ui.selection.get(channel)
    } else {
        None
    };

    roster
        .enrolled(channel)
        .enumerate()
        .map(|(pos, (_, agent))| {
            let p = agent.participation(channel);
            let tier = Tier::of(p);
            let is_selected = selected == Some(pos);
            let bg = if is_selected {
                Theme::SELECTION_BG
            } else {
                Theme::BACKGROUND
            };
            let name_style = if is_selected {
                Style::default().fg(Theme::ACCENT).bg(bg).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Theme::TEXT).bg(bg)
            };
            let remaining = p.remaining().unwrap_or(0);
            let remaining_color = if p.is_bonus() {
                Theme::ACCENT_WARM
            } else {
                Theme::TEXT
            };

            let first = Line::from(vec![
                Span::styled(format!("{} ", tier_symbol(tier)), Style::default().bg(bg)),
                Span::styled(agent.name.clone(), name_style),
                Span::styled(
                    format!("  {}", format_remaining(remaining)),
                    Style::default().fg(remaining_color).bg(bg),
                ),
                Span::styled(
                    format!(" / {}", p.quota().unwrap_or(0)),
                    Style::default().fg(Theme::MUTED_TEXT).bg(bg),
                ),
            ]);

            let tier_color = tier.map(Theme::tier_color).unwrap_or(Theme::MUTED_TEXT);
            let second = Line::from(vec![
                Span::styled(
                    format!("   {}", encouragement(p)),
                    Style::default().fg(tier_color).bg(bg),
                ),
                Span::styled(
                    format!(
                        "  ·  {}h  {}",
                        agent.hours,
                        format_rate(rate_per_hour(agent, channel))
                    ),
                    Style::default().fg(Theme::MUTED_TEXT).bg(bg),
                ),
            ]);

            ListItem::new(vec![first, second])
        })
        .collect()
}
