use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::popup::centered_rect;
use crate::app::{AddAgentForm, FormField};
use crate::model::Theme;

/// Render the add-agent form as a centered modal.
pub fn render_add_agent_form(frame: &mut Frame, form: &AddAgentForm) {
    let area = centered_rect(50, 40, frame.area());
    frame.render_widget(Clear, area);

    let paragraph = Paragraph::new(build_form_lines(form))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Theme::ACTIVE_BORDER))
                .title(" ➕ Add agent (Esc to close) "),
        )
        .style(Style::default().bg(Theme::BACKGROUND).fg(Theme::TEXT));

    frame.render_widget(paragraph, area);
}

/// Pure function: one line per form field, focused field highlighted.
fn build_form_lines(form: &AddAgentForm) -> Vec<Line<'static>> {
    let checkbox = |on: bool| if on { "[x]" } else { "[ ]" };
    let fields = [
        (FormField::Name, "Name     ", form.name.clone()),
        (FormField::Objectif, "Objectif ", form.objectif.clone()),
        (FormField::Crm, "CRM      ", checkbox(form.crm).to_string()),
        (FormField::Digital, "Digital  ", checkbox(form.digital).to_string()),
    ];

    let mut lines = vec![Line::from("")];
    for (field, label, value) in fields {
        let focused = form.field == field;
        let marker = if focused { "▶ " } else { "  " };
        let value_style = if focused {
            Style::default()
                .fg(Theme::ACCENT)
                .bg(Theme::SELECTION_BG)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Theme::TEXT)
        };
        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(Theme::ACCENT)),
            Span::styled(label, Style::default().fg(Theme::MUTED_TEXT)),
            Span::styled(value, value_style),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Tab: next field  Space: toggle  Enter: add",
        Style::default().fg(Theme::MUTED_TEXT),
    )));
    lines
}
