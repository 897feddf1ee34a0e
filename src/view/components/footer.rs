use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{AppState, InputMode, StatusLevel};
use crate::model::Theme;

/// Render footer status bar: status message if any, else keybinding hints.
pub fn render_footer(frame: &mut Frame, area: Rect, state: &AppState) {
    let footer_text = build_footer_text(state);

    let footer = Paragraph::new(footer_text).style(
        Style::default()
            .fg(Theme::TEXT)
            .bg(Theme::FOOTER_BG)
            .add_modifier(Modifier::DIM),
    );

    frame.render_widget(footer, area);
}

/// Pure function: build footer text based on input mode and status.
fn build_footer_text(state: &AppState) -> Line<'static> {
    if let Some(status) = &state.ui.status {
        let color = match status.level {
            StatusLevel::Info => Theme::SUCCESS,
            StatusLevel::Error => Theme::ERROR,
        };
        return Line::from(Span::styled(
            status.message.clone(),
            Style::default().fg(color),
        ));
    }

    let hints: &[(&str, &str)] = match &state.ui.mode {
        InputMode::Normal => &[
            ("q", "quit"),
            ("h/l", "channel"),
            ("j/k", "select"),
            ("-/+", "rdv"),
            ("a", "add"),
            ("x", "remove"),
            ("d", "dispatch"),
            ("p", "pool"),
            ("r", "reset"),
            ("</>", "hours"),
            ("e", "export"),
            ("?", "help"),
        ],
        InputMode::AddAgent(_) => &[
            ("Tab", "next field"),
            ("Space", "toggle"),
            ("Enter", "add"),
            ("Esc", "cancel"),
        ],
        InputMode::EditPool { .. } => &[("0-9", "digits"), ("Enter", "save"), ("Esc", "cancel")],
    };

    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, label) in hints {
        spans.push(Span::styled(key.to_string(), Style::default().fg(Theme::INFO)));
        spans.push(Span::raw(format!(":{} ", label)));
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AddAgentForm;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn render_footer_does_not_panic() {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();

        let state = AppState::new();

        terminal
            .draw(|frame| {
                render_footer(frame, frame.area(), &state);
            })
            .unwrap();
    }

    #[test]
    fn build_footer_text_normal_mode_keys() {
        let state = AppState::new();
        let text = line_text(&build_footer_text(&state));

        assert!(text.contains("q:quit"));
        assert!(text.contains("d:dispatch"));
        assert!(text.contains("e:export"));
        assert!(text.contains("?:help"));
    }

    #[test]
    fn build_footer_text_form_mode_keys() {
        let mut state = AppState::new();
        state.ui.mode = InputMode::AddAgent(AddAgentForm::new(20));
        let text = line_text(&build_footer_text(&state));

        assert!(text.contains("Enter:add"));
        assert!(text.contains("Esc:cancel"));
        assert!(!text.contains("q:quit"));
    }

    #[test]
    fn build_footer_text_status_replaces_hints() {
        let mut state = AppState::new();
        state.set_status(StatusLevel::Error, "export: disk full");
        let text = line_text(&build_footer_text(&state));

        assert_eq!(text, "export: disk full");
    }
}
