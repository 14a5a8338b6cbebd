//! In-process game registry for hosting services.
//!
//! Games are looked up by a generated id and handed out behind their own
//! lock: placement and bombing are check-then-mutate sequences, so all
//! calls against one game must be serialized, while distinct games stay
//! fully independent.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::common::GameError;
use crate::game::Game;
use crate::player::Player;

pub type GameId = u32;

/// Concurrency-safe table from game id to game.
#[derive(Default)]
pub struct GameStore {
    games: Mutex<HashMap<GameId, Arc<Mutex<Game>>>>,
    next_id: AtomicU32,
}

impl GameStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a fresh game between two default-fleet players and return
    /// its id.
    pub fn create(&self, player_1: &str, player_2: &str) -> GameId {
        self.insert(Game::new(Player::new(player_1), Player::new(player_2)))
    }

    /// Register an already built game and return its id.
    pub fn insert(&self, game: Game) -> GameId {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        self.table().insert(id, Arc::new(Mutex::new(game)));
        id
    }

    /// Handle to the game registered under `id`. Callers lock the handle
    /// for the duration of each placement or play call.
    pub fn get(&self, id: GameId) -> Result<Arc<Mutex<Game>>, GameError> {
        self.table().get(&id).cloned().ok_or(GameError::UnknownGame)
    }

    /// Drop the game registered under `id`, e.g. once its result has been
    /// collected.
    pub fn remove(&self, id: GameId) -> Result<(), GameError> {
        self.table().remove(&id).map(|_| ()).ok_or(GameError::UnknownGame)
    }

    fn table(&self) -> MutexGuard<'_, HashMap<GameId, Arc<Mutex<Game>>>> {
        match self.games.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
