use proptest::prelude::*;
use rdv_dashboard::model::{Channel, Participation};
use rdv_dashboard::roster::{fair_shares, Roster};

fn roster_of(agents: &[(&str, u32, bool, bool)]) -> Roster {
    let mut roster = Roster::new();
    for (name, objectif, crm, digital) in agents {
        assert!(roster.add(name, *objectif, *crm, *digital));
    }
    roster
}

fn remaining(roster: &Roster, index: usize, channel: Channel) -> Option<i64> {
    roster.agents()[index].participation(channel).remaining()
}

// Dispatch tests

#[test]
fn dispatch_places_remainder_on_first_agents() {
    let mut roster = roster_of(&[("A", 0, true, false), ("B", 0, true, false), ("C", 0, true, false)]);

    let summary = roster.dispatch(Channel::Crm, 100).unwrap();

    assert_eq!(summary.agents, 3);
    assert_eq!(summary.base, 33);
    assert_eq!(summary.remainder, 1);
    let quotas: Vec<_> = roster
        .agents()
        .iter()
        .map(|a| a.participation(Channel::Crm).quota().unwrap())
        .collect();
    assert_eq!(quotas, vec![34, 33, 33]);
}

#[test]
fn dispatch_leaves_non_participants_and_other_channel_alone() {
    let mut roster = roster_of(&[("A", 7, true, true), ("B", 5, false, true), ("C", 9, true, false)]);
    roster.dispatch(Channel::Crm, 11).unwrap();

    assert_eq!(roster.agents()[1].crm, Participation::NotEnrolled);
    assert_eq!(roster.agents()[0].digital, Participation::enrolled(7));
    assert_eq!(roster.agents()[1].digital, Participation::enrolled(5));
    assert_eq!(remaining(&roster, 0, Channel::Crm), Some(6));
    assert_eq!(remaining(&roster, 2, Channel::Crm), Some(5));
}

#[test]
fn dispatch_discards_progress() {
    let mut roster = roster_of(&[("A", 10, true, false)]);
    let mut sink = Vec::new();
    roster.adjust(0, Channel::Crm, -4, &mut sink).unwrap();

    roster.dispatch(Channel::Crm, 8).unwrap();
    assert_eq!(roster.agents()[0].crm, Participation::enrolled(8));
}

#[test]
fn dispatch_without_participants_changes_nothing() {
    let mut roster = roster_of(&[("A", 3, false, true)]);
    let before = roster.agents().to_vec();

    assert!(roster.dispatch(Channel::Crm, 50).is_none());
    assert_eq!(roster.agents(), before.as_slice());
}

#[test]
fn dispatch_zero_pool_zeroes_quotas() {
    let mut roster = roster_of(&[("A", 3, true, false), ("B", 4, true, false)]);
    roster.dispatch(Channel::Crm, 0).unwrap();
    assert_eq!(roster.agents()[0].crm, Participation::enrolled(0));
    assert_eq!(roster.agents()[1].crm, Participation::enrolled(0));
}

proptest! {
    #[test]
    fn fair_shares_sum_to_pool_and_differ_by_at_most_one(pool in 0u32..100_000, n in 1usize..64) {
        let shares = fair_shares(pool, n);
        prop_assert_eq!(shares.len(), n);
        prop_assert_eq!(shares.iter().sum::<i64>(), i64::from(pool));

        let max = *shares.iter().max().unwrap();
        let min = *shares.iter().min().unwrap();
        prop_assert!(max - min <= 1);

        // Larger shares come first
        prop_assert!(shares.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn dispatch_only_touches_enrolled_agents(
        flags in proptest::collection::vec(any::<bool>(), 1..20),
        pool in 0u32..10_000,
    ) {
        let mut roster = Roster::new();
        for (i, crm) in flags.iter().enumerate() {
            roster.add(&format!("agent-{}", i), 5, *crm, true);
        }
        let before = roster.agents().to_vec();

        roster.dispatch(Channel::Crm, pool);

        let total: i64 = roster
            .agents()
            .iter()
            .filter_map(|a| a.participation(Channel::Crm).quota())
            .sum();
        if flags.iter().any(|f| *f) {
            prop_assert_eq!(total, i64::from(pool));
        }
        for (after, before) in roster.agents().iter().zip(&before) {
            prop_assert_eq!(after.digital, before.digital);
            if !before.is_enrolled(Channel::Crm) {
                prop_assert_eq!(after.crm, Participation::NotEnrolled);
            }
        }
    }
}

// Adjust / bonus tests

#[test]
fn bonus_fires_once_on_downward_crossing() {
    let mut roster = roster_of(&[("Ana", 1, true, false)]);
    let mut alerts: Vec<String> = Vec::new();

    assert!(roster.adjust(0, Channel::Crm, -1, &mut alerts).unwrap().is_none());
    assert!(alerts.is_empty());

    let bonus = roster.adjust(0, Channel::Crm, -1, &mut alerts).unwrap();
    assert_eq!(bonus.map(|b| b.name), Some("Ana".to_string()));
    assert_eq!(alerts.len(), 1);
    assert!(alerts[0].contains("Ana"));

    // Deeper into bonus does not re-fire
    roster.adjust(0, Channel::Crm, -1, &mut alerts).unwrap();
    assert_eq!(alerts.len(), 1);
}

#[test]
fn bonus_does_not_refire_after_climbing_back() {
    let mut roster = roster_of(&[("Ana", 0, true, false)]);
    let mut alerts: Vec<String> = Vec::new();

    roster.adjust(0, Channel::Crm, -1, &mut alerts).unwrap();
    roster.adjust(0, Channel::Crm, 1, &mut alerts).unwrap();
    roster.adjust(0, Channel::Crm, -1, &mut alerts).unwrap();

    assert_eq!(alerts.len(), 1);
}

#[test]
fn bonus_does_not_refire_after_reset() {
    let mut roster = roster_of(&[("Ana", 1, true, false)]);
    let mut alerts: Vec<String> = Vec::new();
    roster.adjust(0, Channel::Crm, -2, &mut alerts).unwrap();
    assert_eq!(alerts.len(), 1);

    roster.reset();
    roster.adjust(0, Channel::Crm, -2, &mut alerts).unwrap();

    assert_eq!(alerts.len(), 1);
    assert!(roster.is_notified("Ana", Channel::Crm));
}

#[test]
fn bonus_is_tracked_per_channel() {
    let mut roster = roster_of(&[("Ana", 0, true, true)]);
    let mut alerts: Vec<String> = Vec::new();

    roster.adjust(0, Channel::Crm, -1, &mut alerts).unwrap();
    roster.adjust(0, Channel::Digital, -1, &mut alerts).unwrap();

    assert_eq!(alerts.len(), 2);
}

#[test]
fn bonus_key_shared_by_duplicate_names() {
    let mut roster = roster_of(&[("Ana", 0, true, false), ("Ana", 0, true, false)]);
    let mut alerts: Vec<String> = Vec::new();

    roster.adjust(0, Channel::Crm, -1, &mut alerts).unwrap();
    roster.adjust(1, Channel::Crm, -1, &mut alerts).unwrap();

    assert_eq!(alerts.len(), 1);
}

#[test]
fn adjust_rejects_bad_index_and_non_participant() {
    let mut roster = roster_of(&[("Ana", 3, true, false)]);
    let mut alerts: Vec<String> = Vec::new();

    assert!(roster.adjust(5, Channel::Crm, -1, &mut alerts).is_err());
    assert!(roster.adjust(0, Channel::Digital, -1, &mut alerts).is_err());
    assert_eq!(roster.agents()[0].digital, Participation::NotEnrolled);
}

// Reset / add / remove tests

#[test]
fn reset_is_idempotent() {
    let mut roster = roster_of(&[("A", 4, true, true), ("B", 2, false, true)]);
    let mut alerts: Vec<String> = Vec::new();
    roster.adjust(0, Channel::Crm, -3, &mut alerts).unwrap();
    roster.adjust(1, Channel::Digital, -5, &mut alerts).unwrap();

    roster.reset();
    let once = roster.agents().to_vec();
    roster.reset();

    assert_eq!(roster.agents(), once.as_slice());
    assert_eq!(remaining(&roster, 0, Channel::Crm), Some(4));
    assert_eq!(remaining(&roster, 1, Channel::Digital), Some(2));
    assert_eq!(roster.agents()[1].crm, Participation::NotEnrolled);
}

#[test]
fn add_trims_and_ignores_empty_names() {
    let mut roster = Roster::new();
    assert!(!roster.add("   ", 5, true, true));
    assert!(roster.is_empty());

    assert!(roster.add("  Léa ", 5, true, false));
    assert_eq!(roster.agents()[0].name, "Léa");
    assert_eq!(roster.agents()[0].crm, Participation::enrolled(5));
    assert_eq!(roster.agents()[0].digital, Participation::NotEnrolled);
}

#[test]
fn remove_preserves_order() {
    let mut roster = roster_of(&[("A", 1, true, true), ("B", 1, true, true), ("C", 1, true, true)]);

    let removed = roster.remove(1).unwrap();
    assert_eq!(removed.name, "B");
    let names: Vec<_> = roster.agents().iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["A", "C"]);

    assert!(roster.remove(2).is_err());
}

#[test]
fn set_hours_clamps_to_working_day() {
    let mut roster = roster_of(&[("A", 1, true, true)]);
    assert_eq!(roster.set_hours(0, 0).unwrap(), 1);
    assert_eq!(roster.set_hours(0, 30).unwrap(), 12);
    assert_eq!(roster.set_hours(0, 7).unwrap(), 7);
    assert_eq!(roster.agents()[0].hours, 7);
    assert!(roster.set_hours(3, 2).is_err());
}
