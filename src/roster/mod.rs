//! Roster store: the agent sequence, its per-channel counters, and the
//! set of bonus celebrations already shown this session.

use std::collections::HashSet;

use tracing::{debug, info};

use crate::error::RosterError;
use crate::model::{clamp_hours, Agent, Channel, Participation};

pub mod dispatch;
pub mod progress;
pub mod ranking;

pub use dispatch::{fair_shares, DispatchSummary};
pub use progress::{aggregate, rate_per_hour, ratio, Aggregate, Tier};
pub use ranking::{top_n, Ranked};

/// Port for the one-time "objective exceeded" celebration.
pub trait Notifier {
    fn notify(&mut self, message: &str);
}

impl Notifier for Vec<String> {
    fn notify(&mut self, message: &str) {
        self.push(message.to_string());
    }
}

/// Emitted by `adjust` when an agent first crosses below zero remaining.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BonusReached {
    pub index: usize,
    pub name: String,
    pub channel: Channel,
}

impl BonusReached {
    pub fn message(&self) -> String {
        format!(
            "🎉 Bravo {}! You beat your {} objective! ⭐",
            self.name, self.channel
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct Roster {
    agents: Vec<Agent>,
    notified: HashSet<(String, Channel)>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn get(&self, index: usize) -> Option<&Agent> {
        self.agents.get(index)
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Agents enrolled in `channel`, with their roster index, in roster order.
    pub fn enrolled(&self, channel: Channel) -> impl Iterator<Item = (usize, &Agent)> + '_ {
        self.agents
            .iter()
            .enumerate()
            .filter(move |(_, a)| a.is_enrolled(channel))
    }

    pub fn enrolled_count(&self, channel: Channel) -> usize {
        self.enrolled(channel).count()
    }

    pub fn is_notified(&self, name: &str, channel: Channel) -> bool {
        self.notified.contains(&(name.to_string(), channel))
    }

    /// Append an agent. Names are trimmed; an empty name is a silent no-op.
    /// Duplicate names are accepted.
    pub fn add(&mut self, name: &str, objectif: u32, crm: bool, digital: bool) -> bool {
        let name = name.trim();
        if name.is_empty() {
            debug!("ignoring add with empty agent name");
            return false;
        }
        info!(name, objectif, crm, digital, "agent added");
        self.agents.push(Agent::new(name, objectif, crm, digital));
        true
    }

    pub fn remove(&mut self, index: usize) -> Result<Agent, RosterError> {
        self.check_index(index)?;
        let agent = self.agents.remove(index);
        info!(name = %agent.name, index, "agent removed");
        Ok(agent)
    }

    /// Restore every enrolled counter to its quota.
    /// Celebrations already shown stay recorded.
    pub fn reset(&mut self) {
        for agent in &mut self.agents {
            for channel in Channel::ALL {
                if let Participation::Enrolled { quota, remaining } =
                    agent.participation_mut(channel)
                {
                    *remaining = *quota;
                }
            }
        }
        info!(agents = self.agents.len(), "counters reset");
    }

    /// Add `delta` to the agent's remaining count on `channel`.
    ///
    /// A downward crossing from `>= 0` to `< 0` fires the notifier once per
    /// `(name, channel)` for the whole session.
    pub fn adjust(
        &mut self,
        index: usize,
        channel: Channel,
        delta: i64,
        notifier: &mut dyn Notifier,
    ) -> Result<Option<BonusReached>, RosterError> {
        let len = self.agents.len();
        let agent = self
            .agents
            .get_mut(index)
            .ok_or(RosterError::IndexOutOfBounds { index, len })?;

        let (previous, current) = match agent.participation_mut(channel) {
            Participation::Enrolled { remaining, .. } => {
                let previous = *remaining;
                *remaining = previous.saturating_add(delta);
                (previous, *remaining)
            }
            Participation::NotEnrolled => {
                return Err(RosterError::NotEnrolled { index, channel });
            }
        };
        debug!(name = %agent.name, %channel, previous, current, "counter adjusted");

        if previous < 0 || current >= 0 {
            return Ok(None);
        }
        if !self.notified.insert((agent.name.clone(), channel)) {
            return Ok(None);
        }

        let bonus = BonusReached {
            index,
            name: agent.name.clone(),
            channel,
        };
        info!(name = %bonus.name, %channel, "objective exceeded");
        notifier.notify(&bonus.message());
        Ok(Some(bonus))
    }

    pub fn set_hours(&mut self, index: usize, hours: u8) -> Result<u8, RosterError> {
        self.check_index(index)?;
        let hours = clamp_hours(hours);
        self.agents[index].hours = hours;
        Ok(hours)
    }

    fn check_index(&self, index: usize) -> Result<(), RosterError> {
        if index < self.agents.len() {
            Ok(())
        } else {
            Err(RosterError::IndexOutOfBounds {
                index,
                len: self.agents.len(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster_with(names: &[&str]) -> Roster {
        let mut roster = Roster::new();
        for name in names {
            roster.add(name, 10, true, true);
        }
        roster
    }

    #[test]
    fn add_trims_name() {
        let mut roster = Roster::new();
        assert!(roster.add("  Alice  ", 5, true, false));
        assert_eq!(roster.agents()[0].name, "Alice");
    }

    #[test]
    fn add_whitespace_name_is_noop() {
        let mut roster = Roster::new();
        assert!(!roster.add("   ", 5, true, true));
        assert!(roster.is_empty());
    }

    #[test]
    fn add_allows_duplicate_names() {
        let roster = roster_with(&["Sam", "Sam"]);
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn remove_out_of_bounds_errors() {
        let mut roster = roster_with(&["A"]);
        assert_eq!(
            roster.remove(3),
            Err(RosterError::IndexOutOfBounds { index: 3, len: 1 })
        );
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn remove_preserves_order() {
        let mut roster = roster_with(&["A", "B", "C"]);
        let removed = roster.remove(1).unwrap();
        assert_eq!(removed.name, "B");
        let names: Vec<_> = roster.agents().iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C"]);
    }

    #[test]
    fn adjust_not_enrolled_errors() {
        let mut roster = Roster::new();
        roster.add("A", 3, true, false);
        let mut sink = Vec::new();
        assert_eq!(
            roster.adjust(0, Channel::Digital, -1, &mut sink),
            Err(RosterError::NotEnrolled {
                index: 0,
                channel: Channel::Digital
            })
        );
    }

    #[test]
    fn adjust_bad_index_errors() {
        let mut roster = Roster::new();
        let mut sink = Vec::new();
        assert!(matches!(
            roster.adjust(0, Channel::Crm, 1, &mut sink),
            Err(RosterError::IndexOutOfBounds { index: 0, len: 0 })
        ));
    }

    #[test]
    fn bonus_message_names_agent_and_channel() {
        let bonus = BonusReached {
            index: 0,
            name: "Lea".into(),
            channel: Channel::Crm,
        };
        let message = bonus.message();
        assert!(message.contains("Lea"));
        assert!(message.contains("CRM"));
    }

    #[test]
    fn set_hours_clamps_and_reports() {
        let mut roster = roster_with(&["A"]);
        assert_eq!(roster.set_hours(0, 20), Ok(12));
        assert_eq!(roster.agents()[0].hours, 12);
        assert!(roster.set_hours(5, 2).is_err());
    }

    #[test]
    fn enrolled_keeps_roster_indices() {
        let mut roster = Roster::new();
        roster.add("A", 1, true, false);
        roster.add("B", 1, false, true);
        roster.add("C", 1, false, true);
        let idx: Vec<_> = roster.enrolled(Channel::Digital).map(|(i, _)| i).collect();
        assert_eq!(idx, vec![1, 2]);
    }
}
