pub mod agent;
pub mod channel;
pub mod theme;

pub use agent::{clamp_hours, Agent, Participation, MAX_HOURS, MIN_HOURS};
pub use channel::Channel;
pub use theme::Theme;
