use std::cmp::Reverse;

use super::{Roster, Tier};
use crate::model::Channel;

/// One leaderboard entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranked {
    pub index: usize,
    pub name: String,
    pub completed: i64,
    pub bonus: bool,
    pub tier: Option<Tier>,
}

/// Top `n` enrolled agents by completed count, descending.
/// Ties keep roster order (`sort_by_key` is stable).
pub fn top_n(roster: &Roster, channel: Channel, n: usize) -> Vec<Ranked> {
    let mut ranked: Vec<Ranked> = roster
        .enrolled(channel)
        .map(|(index, agent)| {
            let p = agent.participation(channel);
            Ranked {
                index,
                name: agent.name.clone(),
                completed: p.completed().unwrap_or(0),
                bonus: p.is_bonus(),
                tier: Tier::of(p),
            }
        })
        .collect();

    ranked.sort_by_key(|r| Reverse(r.completed));
    ranked.truncate(n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_n_orders_by_completed() {
        let mut roster = Roster::new();
        roster.add("A", 10, true, false);
        roster.add("B", 10, true, false);
        let mut sink = Vec::new();
        roster.adjust(1, Channel::Crm, -4, &mut sink).unwrap();

        let top = top_n(&roster, Channel::Crm, 3);
        assert_eq!(top[0].name, "B");
        assert_eq!(top[0].completed, 4);
        assert_eq!(top[1].name, "A");
    }

    #[test]
    fn top_n_truncates() {
        let mut roster = Roster::new();
        for name in ["A", "B", "C", "D"] {
            roster.add(name, 1, true, true);
        }
        assert_eq!(top_n(&roster, Channel::Digital, 3).len(), 3);
        assert!(top_n(&roster, Channel::Digital, 0).is_empty());
    }

    #[test]
    fn top_n_skips_non_enrolled() {
        let mut roster = Roster::new();
        roster.add("A", 1, false, true);
        assert!(top_n(&roster, Channel::Crm, 3).is_empty());
    }
}
