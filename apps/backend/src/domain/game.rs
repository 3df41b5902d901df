//! Game lifecycle state machine.
//!
//! A `Game` owns one [`Roster`] plus the lifecycle phase and enforces which
//! operations are legal in which phase. Every operation validates before it
//! mutates, so a failure always leaves the game unchanged. Time-dependent
//! operations take `now` from the caller; the domain never reads the clock
//! itself.

use rand::Rng;
use time::{Duration, OffsetDateTime};

use crate::domain::roster::{Participant, Roster};
use crate::errors::GameError;

/// Lifecycle phase of a game instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Accepting joins; no gameplay.
    Idle,
    /// Gameplay in progress.
    Active,
    /// Gameplay frozen; disputes still allowed.
    Paused,
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Active => "active",
            Phase::Paused => "paused",
        }
    }
}

/// One game instance: lifecycle phase, creation time, and the roster.
///
/// Callers are expected to hold the per-game lock across an entire operation;
/// the methods themselves are synchronous and bounded.
#[derive(Debug, Clone)]
pub struct Game {
    pub(crate) phase: Phase,
    pub(crate) created: OffsetDateTime,
    pub(crate) roster: Roster,
}

impl Game {
    pub fn new(now: OffsetDateTime) -> Self {
        Self {
            phase: Phase::Idle,
            created: now,
            roster: Roster::default(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn created(&self) -> OffsetDateTime {
        self.created
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Starts a new round from `Idle` (shuffling the roster once) or resumes
    /// a paused one without reshuffling.
    pub fn start(&mut self, rng: &mut impl Rng) -> Result<(), GameError> {
        match self.phase {
            Phase::Active => Err(GameError::AlreadyActive),
            Phase::Idle => {
                self.roster.shuffle(rng);
                self.phase = Phase::Active;
                Ok(())
            }
            Phase::Paused => {
                self.phase = Phase::Active;
                Ok(())
            }
        }
    }

    /// Freezes gameplay.
    pub fn pause(&mut self) -> Result<(), GameError> {
        match self.phase {
            Phase::Active => {
                self.phase = Phase::Paused;
                Ok(())
            }
            Phase::Idle => Err(GameError::NoActiveGame),
            Phase::Paused => Err(GameError::AlreadyPaused),
        }
    }

    /// Ends a paused round: returns the final scoreboard, clears the roster,
    /// and returns to `Idle`.
    pub fn end(&mut self) -> Result<Vec<Participant>, GameError> {
        match self.phase {
            Phase::Idle => Err(GameError::NoActiveGame),
            Phase::Active => Err(GameError::CannotEndWhileActive),
            Phase::Paused => {
                let scoreboard = self.roster.scoreboard();
                self.roster.clear();
                self.phase = Phase::Idle;
                Ok(scoreboard)
            }
        }
    }

    /// Administrative override: clears the roster and returns to `Idle` from
    /// any phase. Never fails.
    pub fn reset(&mut self) {
        self.roster.clear();
        self.phase = Phase::Idle;
    }

    /// Joins the pre-game lobby. Only legal while `Idle`.
    pub fn join(&mut self, id: &str) -> Result<(), GameError> {
        if self.phase != Phase::Idle {
            return Err(GameError::GameInProgress);
        }

        self.roster.join(id)
    }

    /// Returns the next target of the participant with `id`.
    ///
    /// Read-only; legal while `Active` or `Paused`.
    pub fn get_target(&self, id: &str, now: OffsetDateTime) -> Result<&Participant, GameError> {
        if self.phase == Phase::Idle {
            return Err(GameError::NoActiveGame);
        }

        let (_, tindex) = self.locate_target(id, now)?;
        self.roster
            .get(tindex)
            .ok_or(GameError::NoTargetsRemaining)
    }

    /// Marks the next target of the attacker with `id` as hit. Only legal
    /// while `Active`. Returns the eliminated participant.
    pub fn report_hit(&mut self, id: &str, now: OffsetDateTime) -> Result<Participant, GameError> {
        match self.phase {
            Phase::Idle => return Err(GameError::NoActiveGame),
            Phase::Paused => return Err(GameError::GameIsPaused),
            Phase::Active => {}
        }

        let (index, tindex) = self.locate_target(id, now)?;
        self.roster.record_hit(index, tindex, now);

        self.roster
            .get(tindex)
            .cloned()
            .ok_or(GameError::NoTargetsRemaining)
    }

    /// Revives the participant with `id` if its dispute window is still open,
    /// rolling back the eliminator's score.
    ///
    /// Permitted while `Paused` as well as `Active`: a casualty should not
    /// lose its dispute window to a moderator pausing the round.
    pub fn dispute_hit(
        &mut self,
        id: &str,
        now: OffsetDateTime,
    ) -> Result<Option<String>, GameError> {
        if self.phase == Phase::Idle {
            return Err(GameError::NoActiveGame);
        }

        let index = self.roster.find(id).ok_or(GameError::NotAPlayer)?;
        self.roster.revive_if_disputable(index, now)
    }

    /// Current scoreboard; read-only, legal in any phase.
    pub fn scoreboard(&self) -> Vec<Participant> {
        self.roster.scoreboard()
    }

    /// Resolves caller index and target index for a gameplay operation,
    /// surfacing the dispute cooldown when the target is a recoverable
    /// casualty blocking the cycle.
    fn locate_target(&self, id: &str, now: OffsetDateTime) -> Result<(usize, usize), GameError> {
        let index = self.roster.find(id).ok_or(GameError::NotAPlayer)?;

        if self.roster.get(index).is_some_and(|p| p.eliminated) {
            return Err(GameError::AlreadyEliminated);
        }

        let (tindex, disputable) = self
            .roster
            .next_target(index, now)
            .ok_or(GameError::NoTargetsRemaining)?;

        if disputable {
            let remaining = self
                .roster
                .get(tindex)
                .and_then(|p| p.cooldown_until)
                .map_or(Duration::ZERO, |until| until - now);

            return Err(GameError::OnDisputeCooldown {
                remaining: Duration::seconds(remaining.whole_seconds()),
            });
        }

        Ok((index, tindex))
    }
}
