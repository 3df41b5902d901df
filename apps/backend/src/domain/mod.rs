//! Domain layer: pure game logic, no I/O and no clock access.

pub mod game;
pub mod roster;
pub mod rules;
pub mod snapshot;


#[cfg(test)]
mod tests_props_targeting;
#[cfg(test)]
mod tests_roster;

// Re-exports for ergonomics
pub use game::{Game, Phase};
pub use roster::{Participant, Roster};
pub use snapshot::{snapshot, GameSnapshot};
