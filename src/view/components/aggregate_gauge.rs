use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::Gauge,
    Frame,
};

use crate::model::Theme;
use crate::roster::Aggregate;

/// Render the collective progress bar for one channel.
/// Fill is clamped to 100%; the label shows the real percentage.
pub fn render_aggregate_gauge(frame: &mut Frame, area: Rect, agg: &Aggregate) {
    let gauge = Gauge::default()
        .gauge_style(
            Style::default()
                .fg(Theme::SUCCESS)
                .bg(Theme::GAUGE_BG)
                .add_modifier(Modifier::BOLD),
        )
        .ratio(agg.gauge_ratio())
        .label(gauge_label(agg))
        .use_unicode(true);

    frame.render_widget(gauge, area);
}

/// Pure function: gauge caption.
pub fn gauge_label(agg: &Aggregate) -> String {
    format!("{}% of the collective objective reached", agg.percent())
}
