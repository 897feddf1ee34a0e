use tracing::{debug, info};

use super::Roster;
use crate::model::{Channel, Participation};

/// Outcome of a dispatch run that touched at least one agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchSummary {
    pub channel: Channel,
    pub pool: u32,
    pub agents: usize,
    pub base: i64,
    pub remainder: usize,
}

/// Split `pool` into `n` shares differing by at most one.
/// The first `pool % n` shares carry the extra unit.
pub fn fair_shares(pool: u32, n: usize) -> Vec<i64> {
    if n == 0 {
        return Vec::new();
    }
    let pool = i64::from(pool);
    let count = n as i64;
    let base = pool / count;
    let remainder = (pool % count) as usize;
    (0..n)
        .map(|i| if i < remainder { base + 1 } else { base })
        .collect()
}

impl Roster {
    /// Overwrite quota and remaining of every agent enrolled in `channel`
    /// with their fair share of `pool`. Progress on that channel is discarded;
    /// the other channel and non-enrolled agents are untouched.
    ///
    /// Returns `None` (and changes nothing) when nobody is enrolled.
    pub fn dispatch(&mut self, channel: Channel, pool: u32) -> Option<DispatchSummary> {
        let enrolled: Vec<usize> = self.enrolled(channel).map(|(i, _)| i).collect();
        if enrolled.is_empty() {
            debug!(%channel, pool, "dispatch skipped: no enrolled agents");
            return None;
        }

        let shares = fair_shares(pool, enrolled.len());
        for (&index, &share) in enrolled.iter().zip(&shares) {
            *self.agents[index].participation_mut(channel) = Participation::enrolled(share);
        }

        let summary = DispatchSummary {
            channel,
            pool,
            agents: enrolled.len(),
            base: i64::from(pool) / enrolled.len() as i64,
            remainder: (pool as usize) % enrolled.len(),
        };
        info!(
            %channel,
            pool,
            agents = summary.agents,
            base = summary.base,
            remainder = summary.remainder,
            "pool dispatched"
        );
        Some(summary)
    }
}
