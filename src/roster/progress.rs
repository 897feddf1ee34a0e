use super::Roster;
use crate::model::{Agent, Channel, Participation};

/// Completion fraction `1 - remaining / quota`.
/// Over-achievement yields values above 1. Undefined (`None`) for a zero quota.
pub fn ratio(remaining: i64, quota: i64) -> Option<f64> {
    if quota == 0 {
        return None;
    }
    Some(1.0 - remaining as f64 / quota as f64)
}

/// Progress tier, highest threshold first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// ratio >= 1.0
    Crown,
    /// ratio >= 0.75
    Fire,
    /// ratio >= 0.5
    Strong,
    /// ratio >= 0.25
    Spark,
    Waiting,
}

impl Tier {
    pub fn from_ratio(ratio: f64) -> Tier {
        if ratio >= 1.0 {
            Tier::Crown
        } else if ratio >= 0.75 {
            Tier::Fire
        } else if ratio >= 0.5 {
            Tier::Strong
        } else if ratio >= 0.25 {
            Tier::Spark
        } else {
            Tier::Waiting
        }
    }

    /// Tier of an enrolled participation; `None` when not enrolled or quota is zero.
    pub fn of(participation: &Participation) -> Option<Tier> {
        match participation {
            Participation::Enrolled { quota, remaining } => {
                ratio(*remaining, *quota).map(Tier::from_ratio)
            }
            Participation::NotEnrolled => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Tier::Crown => "👑",
            Tier::Fire => "🔥",
            Tier::Strong => "💪",
            Tier::Spark => "⚡",
            Tier::Waiting => "🕓",
        }
    }
}

/// Channel-wide totals over enrolled agents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aggregate {
    pub channel: Channel,
    pub agents: usize,
    pub total_quota: i64,
    pub total_remaining: i64,
    pub ratio: f64,
}

impl Aggregate {
    /// Ratio clamped to [0, 1] for gauge width.
    pub fn gauge_ratio(&self) -> f64 {
        self.ratio.clamp(0.0, 1.0)
    }

    /// Unclamped rounded percentage, may exceed 100.
    pub fn percent(&self) -> i64 {
        (self.ratio * 100.0).round() as i64
    }
}

pub fn aggregate(roster: &Roster, channel: Channel) -> Aggregate {
    let (agents, total_quota, total_remaining) = roster.enrolled(channel).fold(
        (0usize, 0i64, 0i64),
        |(n, quota, remaining), (_, agent)| {
            let p = agent.participation(channel);
            (
                n + 1,
                quota + p.quota().unwrap_or(0),
                remaining + p.remaining().unwrap_or(0),
            )
        },
    );

    let ratio = if total_quota > 0 {
        1.0 - total_remaining as f64 / total_quota as f64
    } else {
        0.0
    };

    Aggregate {
        channel,
        agents,
        total_quota,
        total_remaining,
        ratio,
    }
}

/// Pace an agent needs on `channel`: their own quota over their own hours.
/// Zero when not enrolled.
pub fn rate_per_hour(agent: &Agent, channel: Channel) -> f64 {
    match agent.participation(channel).quota() {
        Some(quota) => quota as f64 / f64::from(agent.hours.max(1)),
        None => 0.0,
    }
}
