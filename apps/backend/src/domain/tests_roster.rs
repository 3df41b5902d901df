#![cfg(test)]

use time::Duration;

use crate::domain::rules::HIT_COOLDOWN;
use crate::domain::test_support::{roster_of, t0};
use crate::errors::GameError;

#[test]
fn find_locates_by_id() {
    let roster = roster_of(&["ann", "bob", "cat"]);
    assert_eq!(roster.find("ann"), Some(0));
    assert_eq!(roster.find("cat"), Some(2));
    assert_eq!(roster.find("dan"), None);
}

#[test]
fn join_rejects_duplicate_and_leaves_length_unchanged() {
    let mut roster = roster_of(&["ann", "bob"]);
    assert_eq!(roster.join("ann"), Err(GameError::AlreadyJoined));
    assert_eq!(roster.len(), 2);
}

#[test]
fn next_target_is_next_alive_with_wraparound() {
    let roster = roster_of(&["ann", "bob", "cat"]);
    assert_eq!(roster.next_target(0, t0()), Some((1, false)));
    assert_eq!(roster.next_target(2, t0()), Some((0, false)));
}

#[test]
fn disputable_casualty_blocks_the_scan() {
    let mut roster = roster_of(&["ann", "bob", "cat"]);
    roster.record_hit(0, 1, t0());

    // bob is down but inside his window; he still occupies the slot.
    assert_eq!(roster.next_target(0, t0()), Some((1, true)));
}

#[test]
fn expired_casualty_is_skipped() {
    let mut roster = roster_of(&["ann", "bob", "cat"]);
    roster.record_hit(0, 1, t0());

    let after_window = t0() + HIT_COOLDOWN + Duration::seconds(1);
    assert_eq!(roster.next_target(0, after_window), Some((2, false)));
}

#[test]
fn scan_exhaustion_yields_none() {
    // Two-person roster where the other participant is permanently dead.
    let mut roster = roster_of(&["ann", "bob"]);
    roster.record_hit(0, 1, t0());

    let after_window = t0() + HIT_COOLDOWN;
    assert_eq!(roster.next_target(0, after_window), None);
}

#[test]
fn record_hit_sets_elimination_state_and_credits_attacker() {
    let mut roster = roster_of(&["ann", "bob"]);
    roster.record_hit(0, 1, t0());

    let victim = roster.get(1).unwrap();
    assert!(victim.eliminated);
    assert_eq!(victim.cooldown_until, Some(t0() + HIT_COOLDOWN));
    assert_eq!(victim.eliminated_by.as_deref(), Some("ann"));

    assert_eq!(roster.get(0).unwrap().score, 1);
}

#[test]
fn revive_rolls_back_the_eliminator() {
    let mut roster = roster_of(&["ann", "bob"]);
    roster.record_hit(0, 1, t0());

    let just_before = t0() + HIT_COOLDOWN - Duration::seconds(1);
    let rolled_back = roster.revive_if_disputable(1, just_before).unwrap();
    assert_eq!(rolled_back.as_deref(), Some("ann"));

    let revived = roster.get(1).unwrap();
    assert!(!revived.eliminated);
    assert_eq!(revived.cooldown_until, None);
    assert_eq!(revived.eliminated_by, None);
    assert_eq!(roster.get(0).unwrap().score, 0);

    // A second dispute right away finds nothing to undo.
    assert_eq!(
        roster.revive_if_disputable(1, just_before),
        Err(GameError::NotEliminated)
    );
}

#[test]
fn revive_fails_at_and_after_the_deadline() {
    let mut roster = roster_of(&["ann", "bob"]);
    roster.record_hit(0, 1, t0());

    // Exactly at the deadline the window is closed.
    assert_eq!(
        roster.revive_if_disputable(1, t0() + HIT_COOLDOWN),
        Err(GameError::DisputeWindowExpired)
    );
    assert_eq!(
        roster.revive_if_disputable(1, t0() + HIT_COOLDOWN + Duration::minutes(3)),
        Err(GameError::DisputeWindowExpired)
    );

    // And the elimination state is untouched by the failed dispute.
    assert!(roster.get(1).unwrap().eliminated);
    assert_eq!(roster.get(0).unwrap().score, 1);
}

#[test]
fn revive_succeeds_strictly_before_the_deadline() {
    let mut roster = roster_of(&["ann", "bob"]);
    roster.record_hit(0, 1, t0());

    let just_before = t0() + HIT_COOLDOWN - Duration::nanoseconds(1);
    assert!(roster.revive_if_disputable(1, just_before).is_ok());
}

#[test]
fn scoreboard_sorts_descending_and_drops_zero_scores() {
    let mut roster = roster_of(&["ann", "bob", "cat", "dan"]);
    // ann downs bob and cat; dan downs ann.
    roster.record_hit(0, 1, t0());
    roster.record_hit(0, 2, t0());
    roster.record_hit(3, 0, t0());

    let board = roster.scoreboard();
    let ids: Vec<&str> = board.iter().map(|p| p.id.as_str()).collect();
    let scores: Vec<u32> = board.iter().map(|p| p.score).collect();
    assert_eq!(ids, vec!["ann", "dan"]);
    assert_eq!(scores, vec![2, 1]);
}
