use ratatui::style::Color;

use crate::model::Channel;
use crate::roster::Tier;

pub struct Theme;

impl Theme {
    // ── Base palette ────────────────────────────────────────────
    pub const BACKGROUND: Color = Color::Rgb(18, 18, 24);
    pub const TEXT: Color = Color::Rgb(225, 225, 235);
    pub const MUTED_TEXT: Color = Color::Rgb(100, 105, 120);
    pub const SEPARATOR: Color = Color::Rgb(45, 45, 58);

    // ── Accent colors ───────────────────────────────────────────
    pub const ACCENT: Color = Color::Rgb(80, 200, 200);       // teal, primary accent
    pub const ACCENT_WARM: Color = Color::Rgb(230, 160, 60);  // amber: bonus and stars

    // ── Semantic colors ─────────────────────────────────────────
    pub const SUCCESS: Color = Color::Rgb(80, 210, 120);
    pub const ERROR: Color = Color::Rgb(230, 80, 80);
    pub const INFO: Color = Color::Rgb(80, 180, 220);

    // ── UI chrome ───────────────────────────────────────────────
    pub const HEADER_BG: Color = Color::Rgb(24, 24, 32);
    pub const FOOTER_BG: Color = Color::Rgb(24, 24, 32);
    pub const PANEL_BORDER: Color = Color::Rgb(50, 50, 65);
    pub const ACTIVE_BORDER: Color = Color::Rgb(80, 200, 200); // = ACCENT
    pub const SELECTION_BG: Color = Color::Rgb(40, 55, 75);
    pub const GAUGE_BG: Color = Color::Rgb(45, 45, 58);        // = SEPARATOR

    // ── Channels ────────────────────────────────────────────────
    pub const CHANNEL_CRM: Color = Color::Rgb(80, 180, 220);     // = INFO
    pub const CHANNEL_DIGITAL: Color = Color::Rgb(170, 130, 255); // soft purple

    // ── Progress tiers ──────────────────────────────────────────
    pub const TIER_CROWN: Color = Color::Rgb(230, 180, 60);   // gold
    pub const TIER_FIRE: Color = Color::Rgb(230, 120, 60);
    pub const TIER_STRONG: Color = Color::Rgb(80, 210, 120);  // = SUCCESS
    pub const TIER_SPARK: Color = Color::Rgb(80, 180, 220);   // = INFO
    pub const TIER_WAITING: Color = Color::Rgb(100, 105, 120); // = MUTED_TEXT

    /// Get color for a channel panel
    pub fn channel_color(channel: Channel) -> Color {
        match channel {
            Channel::Crm => Self::CHANNEL_CRM,
            Channel::Digital => Self::CHANNEL_DIGITAL,
        }
    }

    /// Get color for a progress tier
    pub fn tier_color(tier: Tier) -> Color {
        match tier {
            Tier::Crown => Self::TIER_CROWN,
            Tier::Fire => Self::TIER_FIRE,
            Tier::Strong => Self::TIER_STRONG,
            Tier::Spark => Self::TIER_SPARK,
            Tier::Waiting => Self::TIER_WAITING,
        }
    }
}
