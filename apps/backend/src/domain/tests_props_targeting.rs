#![cfg(test)]

//! Property tests for the ring targeting rule (pure domain).
//!
//! Cycle contract:
//! - With at least two non-terminally-dead participants, every alive
//!   participant resolves exactly one target.
//! - Distinct alive attackers never share a target (everyone is targeted by
//!   at most one other participant).
//! - On an all-alive roster of three or more, no one targets the participant
//!   that targets them back immediately; with exactly two, they target each
//!   other.

use std::collections::HashSet;

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use time::Duration;

use crate::domain::roster::Roster;
use crate::domain::rules::HIT_COOLDOWN;
use crate::domain::test_support::t0;

/// Per-slot elimination status used to build arbitrary rosters.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Slot {
    Alive,
    /// Eliminated, dispute window still open.
    Disputable,
    /// Eliminated, dispute window expired.
    Expired,
}

fn slot_strategy() -> impl Strategy<Value = Slot> {
    prop_oneof![
        3 => Just(Slot::Alive),
        1 => Just(Slot::Disputable),
        1 => Just(Slot::Expired),
    ]
}

fn roster_from_slots(slots: &[Slot]) -> Roster {
    let mut roster = Roster::default();
    for (i, slot) in slots.iter().enumerate() {
        roster.join(&format!("p{i}")).expect("unique ids");
        if *slot != Slot::Alive {
            // Backdate the hit so Expired windows are already closed at t0.
            let hit_at = match slot {
                Slot::Disputable => t0() - Duration::seconds(1),
                _ => t0() - HIT_COOLDOWN - Duration::seconds(1),
            };
            let target = roster.len() - 1;
            let attacker = if target == 0 { 0 } else { target - 1 };
            roster.record_hit(attacker, target, hit_at);
        }
    }
    roster
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Every alive participant has exactly one target, and no two alive
    /// attackers resolve to the same one.
    #[test]
    fn prop_alive_targets_exist_and_are_distinct(
        slots in prop::collection::vec(slot_strategy(), 2..12),
    ) {
        let non_terminal = slots.iter().filter(|s| **s != Slot::Expired).count();
        prop_assume!(non_terminal >= 2);

        let roster = roster_from_slots(&slots);
        let mut targets = HashSet::new();

        for (i, slot) in slots.iter().enumerate() {
            if *slot != Slot::Alive {
                continue;
            }

            let (tindex, _) = roster
                .next_target(i, t0())
                .expect("alive participant must have a target");
            prop_assert_ne!(tindex, i, "scan must never return the origin");
            prop_assert!(
                targets.insert(tindex),
                "two attackers resolved the same target {}", tindex
            );
        }
    }

    /// Targets are never terminally dead: the scan only stops on alive or
    /// disputable participants.
    #[test]
    fn prop_scan_never_stops_on_expired(
        slots in prop::collection::vec(slot_strategy(), 2..12),
    ) {
        let non_terminal = slots.iter().filter(|s| **s != Slot::Expired).count();
        prop_assume!(non_terminal >= 2);

        let roster = roster_from_slots(&slots);
        for (i, slot) in slots.iter().enumerate() {
            if *slot != Slot::Alive {
                continue;
            }
            let (tindex, disputable) = roster.next_target(i, t0()).expect("target exists");
            prop_assert_eq!(slots[tindex] == Slot::Disputable, disputable);
            prop_assert_ne!(slots[tindex], Slot::Expired);
        }
    }

    /// On an all-alive roster the cycle closes: no immediate back-edge unless
    /// exactly two participants remain.
    #[test]
    fn prop_all_alive_cycle_has_no_short_circuit(n in 2usize..10) {
        let ids: Vec<String> = (0..n).map(|i| format!("p{i}")).collect();
        let mut roster = Roster::default();
        for id in &ids {
            roster.join(id).expect("unique ids");
        }

        for i in 0..n {
            let (tindex, disputable) = roster.next_target(i, t0()).expect("target exists");
            prop_assert!(!disputable);

            let (back, _) = roster.next_target(tindex, t0()).expect("target exists");
            if n == 2 {
                prop_assert_eq!(back, i);
            } else {
                prop_assert_ne!(back, i);
            }
        }
    }

    /// Shuffling permutes the order but never the membership.
    #[test]
    fn prop_shuffle_preserves_membership(n in 1usize..20, seed in any::<u64>()) {
        let mut roster = Roster::default();
        for i in 0..n {
            roster.join(&format!("p{i}")).expect("unique ids");
        }

        let before: HashSet<String> = roster.iter().map(|p| p.id.clone()).collect();
        roster.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));
        let after: HashSet<String> = roster.iter().map(|p| p.id.clone()).collect();

        prop_assert_eq!(roster.len(), n);
        prop_assert_eq!(before, after);
    }
}
