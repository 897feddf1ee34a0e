use serde::{Deserialize, Serialize};

use super::Channel;

pub const MIN_HOURS: u8 = 1;
pub const MAX_HOURS: u8 = 12;

/// Per-channel enrollment of an agent.
/// `remaining` goes negative once the agent is past their quota (bonus).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Participation {
    NotEnrolled,
    Enrolled { quota: i64, remaining: i64 },
}

impl Participation {
    /// Fresh enrollment with nothing done yet.
    pub fn enrolled(quota: i64) -> Self {
        Participation::Enrolled {
            quota,
            remaining: quota,
        }
    }

    pub fn is_enrolled(&self) -> bool {
        matches!(self, Participation::Enrolled { .. })
    }

    pub fn quota(&self) -> Option<i64> {
        match self {
            Participation::Enrolled { quota, .. } => Some(*quota),
            Participation::NotEnrolled => None,
        }
    }

    pub fn remaining(&self) -> Option<i64> {
        match self {
            Participation::Enrolled { remaining, .. } => Some(*remaining),
            Participation::NotEnrolled => None,
        }
    }

    /// Appointments done so far: quota minus remaining.
    pub fn completed(&self) -> Option<i64> {
        match self {
            Participation::Enrolled { quota, remaining } => Some(quota - remaining),
            Participation::NotEnrolled => None,
        }
    }

    pub fn is_bonus(&self) -> bool {
        matches!(self, Participation::Enrolled { remaining, .. } if *remaining < 0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    pub name: String,
    #[serde(default = "default_hours")]
    pub hours: u8,
    pub crm: Participation,
    pub digital: Participation,
}

fn default_hours() -> u8 {
    MIN_HOURS
}

impl Agent {
    /// New agent enrolled with `objectif` on every channel flagged true.
    pub fn new(name: impl Into<String>, objectif: u32, crm: bool, digital: bool) -> Self {
        let enroll = |flag: bool| {
            if flag {
                Participation::enrolled(i64::from(objectif))
            } else {
                Participation::NotEnrolled
            }
        };
        Self {
            name: name.into(),
            hours: MIN_HOURS,
            crm: enroll(crm),
            digital: enroll(digital),
        }
    }

    pub fn with_hours(mut self, hours: u8) -> Self {
        self.hours = clamp_hours(hours);
        self
    }

    pub fn participation(&self, channel: Channel) -> &Participation {
        match channel {
            Channel::Crm => &self.crm,
            Channel::Digital => &self.digital,
        }
    }

    pub fn participation_mut(&mut self, channel: Channel) -> &mut Participation {
        match channel {
            Channel::Crm => &mut self.crm,
            Channel::Digital => &mut self.digital,
        }
    }

    pub fn is_enrolled(&self, channel: Channel) -> bool {
        self.participation(channel).is_enrolled()
    }
}

pub fn clamp_hours(hours: u8) -> u8 {
    hours.clamp(MIN_HOURS, MAX_HOURS)
}
