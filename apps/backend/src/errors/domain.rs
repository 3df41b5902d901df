//! Domain-level error type for game operations.
//!
//! Every variant is returned synchronously from a single check-and-act under
//! the per-game lock; a failure never leaves partial mutation behind. The
//! `Display` strings are the user-facing texts the transport sends back as
//! ephemeral messages.

use thiserror::Error;
use time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// `start` while a round is already running.
    #[error("Game still in progress.")]
    AlreadyActive,

    /// Gameplay or transition attempted with no round started.
    #[error("No active game.")]
    NoActiveGame,

    /// `pause` while already paused.
    #[error("Game already paused.")]
    AlreadyPaused,

    /// `end` requires the round to be paused first.
    #[error("Cannot end active game. /ffpause first.")]
    CannotEndWhileActive,

    /// `join` outside the pre-game lobby.
    #[error("Game already in progress. Take shelter.")]
    GameInProgress,

    /// `report_hit` while the round is frozen.
    #[error("Ceasefire! Game is paused.")]
    GameIsPaused,

    /// Caller id is not in the roster.
    #[error("You can't win if you don't play.")]
    NotAPlayer,

    /// `join` with an id already in the roster.
    #[error("Already joined.")]
    AlreadyJoined,

    /// Eliminated participants cannot target or attack.
    #[error("Martyrdom isn't a perk. You're dead.")]
    AlreadyEliminated,

    /// Dispute by a participant that is not eliminated.
    #[error("It was only a scratch. You're still in this fight!")]
    NotEliminated,

    /// The forward scan exhausted every other participant.
    #[error("No targets remaining.")]
    NoTargetsRemaining,

    /// The next slot in the cycle is a casualty that can still dispute;
    /// carries the time left on its window, truncated to whole seconds.
    #[error("Slow down there, hotshot. [{remaining}]")]
    OnDisputeCooldown { remaining: Duration },

    /// Dispute at or after the cooldown deadline.
    #[error("This one's been sitting awhile and necromancy isn't my specialty.")]
    DisputeWindowExpired,
}
