pub mod add_agent_form;
pub mod agent_list;
pub mod aggregate_gauge;
pub mod channel_panel;
pub mod footer;
pub mod format;
pub mod header;
pub mod help_overlay;
pub mod leaderboard;
pub mod popup;

pub use add_agent_form::render_add_agent_form;
pub use agent_list::render_agent_list;
pub use aggregate_gauge::render_aggregate_gauge;
pub use channel_panel::render_channel_panel;
pub use footer::render_footer;
pub use header::render_header;
pub use help_overlay::render_help_overlay;
pub use leaderboard::render_leaderboard;
pub use popup::{render_alert_popup, render_pool_editor};
