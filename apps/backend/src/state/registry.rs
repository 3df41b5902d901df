//! Per-channel registry of game instances.
//!
//! Each Slack channel gets its own independent [`Game`] behind a single
//! reader/writer lock; the lock scope covers lifecycle state and roster
//! together so every operation observes a consistent view of both. The
//! registry itself is a concurrent map with load-or-create semantics and
//! requires no cross-instance coordination.

use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::RwLock;
use time::OffsetDateTime;
use tracing::info;

use crate::domain::Game;

pub type SharedGame = Arc<RwLock<Game>>;

#[derive(Debug, Default)]
pub struct GameRegistry {
    games: DashMap<String, SharedGame>,
}

impl GameRegistry {
    pub fn new() -> Self {
        Self {
            games: DashMap::new(),
        }
    }

    /// Returns the game for `channel_id`, creating it on first reference.
    pub fn load_or_create(&self, channel_id: &str) -> SharedGame {
        if let Some(game) = self.games.get(channel_id) {
            return game.value().clone();
        }

        let entry = self.games.entry(channel_id.to_string()).or_insert_with(|| {
            info!(channel_id, "game instance created");
            Arc::new(RwLock::new(Game::new(OffsetDateTime::now_utc())))
        });
        entry.value().clone()
    }

    /// Returns the game for `channel_id` if one has ever been referenced.
    pub fn get(&self, channel_id: &str) -> Option<SharedGame> {
        self.games.get(channel_id).map(|entry| entry.value().clone())
    }

    /// All channel ids with a game instance.
    pub fn channels(&self) -> Vec<String> {
        self.games.iter().map(|entry| entry.key().clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}
