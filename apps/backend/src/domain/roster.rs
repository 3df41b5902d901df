//! Roster: the ordered participant list that defines the targeting cycle.
//!
//! Targets are derived, never stored. A participant's target is the next
//! participant in roster order that is either alive or still inside its
//! dispute window, wrapping around at the end of the list. There is no
//! book-keeping outside the ordering and the elimination flags, so there is
//! no assignment table to keep consistent; every lookup is an O(n) scan over
//! a roster of at most a few hundred entries.

use rand::seq::SliceRandom;
use rand::Rng;
use time::OffsetDateTime;

use crate::domain::rules::HIT_COOLDOWN;
use crate::errors::GameError;

/// One entry in the roster.
///
/// `cooldown_until` and `eliminated_by` are `Some` exactly while `eliminated`
/// is set; all three are cleared together when a dispute succeeds. The
/// eliminator is stored by id rather than index so the link survives roster
/// reordering and is resolved by lookup at dispute time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub id: String,
    pub score: u32,
    pub eliminated: bool,
    pub cooldown_until: Option<OffsetDateTime>,
    pub eliminated_by: Option<String>,
}

impl Participant {
    fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            score: 0,
            eliminated: false,
            cooldown_until: None,
            eliminated_by: None,
        }
    }

    /// Eliminated, but the dispute window is still open at `now`.
    pub fn is_disputable(&self, now: OffsetDateTime) -> bool {
        self.eliminated && self.cooldown_until.is_some_and(|until| now < until)
    }
}

/// Ordered participant sequence for one game round.
///
/// The order is shuffled exactly once at game start and fixed for the rest
/// of the round; it implicitly defines the targeting cycle.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    pub(crate) participants: Vec<Participant>,
}

impl Roster {
    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Participant> {
        self.participants.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Participant> {
        self.participants.get(index)
    }

    /// Returns the roster index of the participant with the given id.
    pub fn find(&self, id: &str) -> Option<usize> {
        self.participants.iter().position(|p| p.id == id)
    }

    /// Returns the next target index for the participant at `from`, along
    /// with whether that target is still inside its dispute window.
    ///
    /// Scans forward from `from + 1` for up to `len - 1` steps, so the origin
    /// is never revisited. An alive candidate is the target. A disputable
    /// casualty is also returned as the target (it still blocks progress past
    /// it); only a casualty whose cooldown has expired is skipped. Returns
    /// `None` once the scan exhausts every other participant.
    pub fn next_target(&self, from: usize, now: OffsetDateTime) -> Option<(usize, bool)> {
        for step in 1..self.participants.len() {
            let tindex = (from + step) % self.participants.len();
            let target = &self.participants[tindex];

            if !target.eliminated {
                return Some((tindex, false));
            }

            if target.is_disputable(now) {
                return Some((tindex, true));
            }
        }

        None
    }

    /// Appends a new participant with zero score and no elimination state.
    pub fn join(&mut self, id: &str) -> Result<(), GameError> {
        if self.find(id).is_some() {
            return Err(GameError::AlreadyJoined);
        }

        self.participants.push(Participant::new(id));
        Ok(())
    }

    /// Randomly permutes the roster order, reassigning every target.
    pub fn shuffle(&mut self, rng: &mut impl Rng) {
        self.participants.shuffle(rng);
    }

    /// Marks the participant at `target` as eliminated by the participant at
    /// `attacker` and credits the attacker with a point.
    pub fn record_hit(&mut self, attacker: usize, target: usize, now: OffsetDateTime) {
        let attacker_id = self.participants[attacker].id.clone();

        let victim = &mut self.participants[target];
        victim.eliminated = true;
        victim.cooldown_until = Some(now + HIT_COOLDOWN);
        victim.eliminated_by = Some(attacker_id);

        self.participants[attacker].score += 1;
    }

    /// Revives the participant at `index` if its dispute window is still open
    /// at `now`, rolling back the eliminator's score.
    ///
    /// Returns the eliminator's id when a score was rolled back.
    pub fn revive_if_disputable(
        &mut self,
        index: usize,
        now: OffsetDateTime,
    ) -> Result<Option<String>, GameError> {
        let participant = &mut self.participants[index];

        if !participant.eliminated {
            return Err(GameError::NotEliminated);
        }

        if !participant.is_disputable(now) {
            return Err(GameError::DisputeWindowExpired);
        }

        participant.eliminated = false;
        participant.cooldown_until = None;
        let eliminator = participant.eliminated_by.take();

        if let Some(eliminator_id) = &eliminator {
            if let Some(attacker_index) = self.find(eliminator_id) {
                let attacker = &mut self.participants[attacker_index];
                attacker.score = attacker.score.saturating_sub(1);
            }
        }

        Ok(eliminator)
    }

    /// All participants with a nonzero score, sorted by score descending.
    ///
    /// The sort is stable, so tied scores keep roster order; since the roster
    /// is shuffled at game start, tie order is effectively unspecified.
    pub fn scoreboard(&self) -> Vec<Participant> {
        let mut scoring: Vec<Participant> = self
            .participants
            .iter()
            .filter(|p| p.score > 0)
            .cloned()
            .collect();

        scoring.sort_by(|a, b| b.score.cmp(&a.score));
        scoring
    }

    pub fn clear(&mut self) {
        self.participants.clear();
    }
}
