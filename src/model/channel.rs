use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two independent appointment tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Crm,
    Digital,
}

impl Channel {
    pub const ALL: [Channel; 2] = [Channel::Crm, Channel::Digital];

    pub fn label(self) -> &'static str {
        match self {
            Channel::Crm => "CRM",
            Channel::Digital => "Digital",
        }
    }

    /// The other channel. Used for panel focus toggling.
    pub fn other(self) -> Channel {
        match self {
            Channel::Crm => Channel::Digital,
            Channel::Digital => Channel::Crm,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
