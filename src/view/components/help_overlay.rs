use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::popup::centered_rect;
use crate::model::Theme;

/// Render the help overlay.
/// Lists all keybindings grouped by category.
pub fn render_help_overlay(frame: &mut Frame) {
    let area = frame.area();

    let popup_area = centered_rect(60, 80, area);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let help_text = build_help_text();

    let paragraph = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help - press any key to close ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Theme::ACTIVE_BORDER)),
        )
        .alignment(Alignment::Left)
        .style(Style::default().bg(Theme::BACKGROUND).fg(Theme::TEXT));

    frame.render_widget(paragraph, popup_area);
}

/// Build help text with keybindings grouped by category.
fn build_help_text() -> Vec<Line<'static>> {
    let heading = |title: &'static str| {
        Line::from(Span::styled(
            title,
            Style::default()
                .fg(Theme::INFO)
                .add_modifier(Modifier::BOLD),
        ))
    };

    vec![
        Line::from(""),
        heading("NAVIGATION"),
        Line::from("  Tab         - Switch channel panel"),
        Line::from("  h / l       - Focus CRM / Digital panel"),
        Line::from("  j / k       - Select next / previous agent"),
        Line::from(""),
        heading("COUNTERS"),
        Line::from("  -           - One RDV done (remaining - 1)"),
        Line::from("  + / =       - Undo one RDV (remaining + 1)"),
        Line::from("  < / >       - Working hours - / +"),
        Line::from("  r           - Reset every counter to its objectif"),
        Line::from(""),
        heading("ROSTER"),
        Line::from("  a           - Add agent"),
        Line::from("  x / Del     - Remove selected agent"),
        Line::from("  p           - Edit pool total of focused channel"),
        Line::from("  d           - Split pool evenly between enrolled agents"),
        Line::from(""),
        heading("ACTIONS"),
        Line::from("  e           - Export roster to spreadsheet"),
        Line::from("  Esc         - Clear status line"),
        Line::from("  ?           - Toggle help overlay"),
        Line::from("  q           - Quit application"),
        Line::from(""),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn test_render_help_overlay() {
        let backend = TestBackend::new(120, 40);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal.draw(|frame| render_help_overlay(frame)).unwrap();

        let buffer = terminal.backend().buffer();

        // Convert buffer to string for easier searching
        let buffer_str: String = (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer.cell((x, y)).unwrap().symbol())
                    .collect::<String>()
            })
            .collect::<Vec<String>>()
            .join("\n");

        // Check for key sections in help text
        assert!(buffer_str.contains("NAVIGATION"), "NAVIGATION section should be displayed");
        assert!(buffer_str.contains("COUNTERS"), "COUNTERS section should be displayed");
        assert!(buffer_str.contains("ACTIONS"), "ACTIONS section should be displayed");
    }

    #[test]
    fn test_help_overlay_has_quit_keybinding() {
        let backend = TestBackend::new(120, 40);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal.draw(|frame| render_help_overlay(frame)).unwrap();

        let buffer = terminal.backend().buffer();

        // Convert buffer to string for easier searching
        let buffer_str: String = (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer.cell((x, y)).unwrap().symbol())
                    .collect::<String>()
            })
            .collect::<Vec<String>>()
            .join("\n");

        // Check for quit keybinding
        assert!(buffer_str.contains("Quit application"), "Quit keybinding should be documented");
    }

    #[test]
    fn test_build_help_text_contains_all_categories() {
        let help_lines = build_help_text();
        let help_str: String = help_lines
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|span| span.content.as_ref())
                    .collect::<String>()
            })
            .collect::<Vec<String>>()
            .join("\n");

        assert!(help_str.contains("NAVIGATION"));
        assert!(help_str.contains("COUNTERS"));
        assert!(help_str.contains("ROSTER"));
        assert!(help_str.contains("ACTIONS"));
    }
}
