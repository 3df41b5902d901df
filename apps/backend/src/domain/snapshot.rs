//! Read-only status view of a game instance, for debugging and monitoring.

use serde::Serialize;
use time::format_description::well_known::Rfc2822;
use time::OffsetDateTime;

use crate::domain::game::Game;

/// Participant counts at the moment the snapshot was taken.
#[derive(Debug, Clone, Serialize)]
pub struct ParticipantStats {
    pub alive: usize,
    pub dead: usize,
    pub disputable: usize,
    pub total: usize,
}

/// Public view of one roster entry. Eliminator and cooldown deadline are
/// present only while the participant is eliminated.
#[derive(Debug, Clone, Serialize)]
pub struct ParticipantView {
    pub id: String,
    pub score: u32,
    pub eliminated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eliminated_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cooldown_until: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GameSnapshot {
    pub created: String,
    pub state: &'static str,
    pub stats: ParticipantStats,
    pub players: Vec<ParticipantView>,
}

/// Produces the full status view of `game` as of `now`.
pub fn snapshot(game: &Game, now: OffsetDateTime) -> GameSnapshot {
    let mut alive = 0;
    let mut dead = 0;
    let mut disputable = 0;

    let players: Vec<ParticipantView> = game
        .roster()
        .iter()
        .map(|p| {
            if p.eliminated {
                dead += 1;
                if p.is_disputable(now) {
                    disputable += 1;
                }
            } else {
                alive += 1;
            }

            ParticipantView {
                id: p.id.clone(),
                score: p.score,
                eliminated: p.eliminated,
                eliminated_by: p.eliminated_by.clone(),
                cooldown_until: p.cooldown_until.map(format_timestamp),
            }
        })
        .collect();

    GameSnapshot {
        created: format_timestamp(game.created()),
        state: game.phase().name(),
        stats: ParticipantStats {
            alive,
            dead,
            disputable,
            total: players.len(),
        },
        players,
    }
}

fn format_timestamp(ts: OffsetDateTime) -> String {
    ts.format(&Rfc2822).unwrap_or_else(|_| "unknown".to_string())
}
