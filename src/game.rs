//! Turn orchestration: the two-player battle loop and its state machine.

use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::common::{BombOutcome, GameError};
use crate::player::Player;
use crate::position::Position;

/// Lifecycle of a game. Transitions are linear and never reversed:
/// `Initialized` -> `Started` -> `Ended`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Initialized,
    Started,
    Ended,
}

/// One completed attack: who fired, where, and what happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    attacker: String,
    outcome: BombOutcome,
    position: Position,
}

impl Turn {
    /// Name of the player who made the attack.
    pub fn attacker(&self) -> &str {
        &self.attacker
    }

    pub fn outcome(&self) -> BombOutcome {
        self.outcome
    }

    pub fn position(&self) -> Position {
        self.position
    }
}

/// Attack-position selection policy for the play loop.
///
/// Returning `None` means the selector has no target left to offer; sane
/// selectors only pick from the defender board's un-bombed cells.
pub trait TargetSelect {
    fn select_target(&mut self, board: &Board) -> Option<Position>;
}

/// Uniform-random targeting over the defender's un-bombed cells.
///
/// Sampling only from the un-bombed set (rather than the whole grid with
/// retries) keeps the play loop deterministic in its termination.
pub struct RandomTargeter {
    rng: SmallRng,
}

impl RandomTargeter {
    pub fn new(rng: SmallRng) -> Self {
        Self { rng }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl TargetSelect for RandomTargeter {
    fn select_target(&mut self, board: &Board) -> Option<Position> {
        board.unbombed_positions().choose(&mut self.rng).copied()
    }
}

/// A two-player game: both players, the lifecycle status and the ordered
/// history of completed turns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    player_1: Player,
    player_2: Player,
    status: GameStatus,
    turns: Vec<Turn>,
}

impl Game {
    /// A new game in the `Initialized` state; ships are placed through the
    /// players before (or even without) starting play.
    pub fn new(player_1: Player, player_2: Player) -> Self {
        Self {
            player_1,
            player_2,
            status: GameStatus::Initialized,
            turns: Vec::new(),
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Completed turns, oldest first. Frozen once the game ends.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn player_1(&self) -> &Player {
        &self.player_1
    }

    pub fn player_2(&self) -> &Player {
        &self.player_2
    }

    /// Look up a participant by name, for placement through a game handle.
    pub fn player_mut(&mut self, name: &str) -> Result<&mut Player, GameError> {
        if self.player_1.name() == name {
            Ok(&mut self.player_1)
        } else if self.player_2.name() == name {
            Ok(&mut self.player_2)
        } else {
            Err(GameError::UnknownPlayer)
        }
    }

    /// `true` once either side has lost all its ships. Note that a player
    /// who placed no ships has vacuously lost already.
    pub fn is_over(&self) -> bool {
        self.player_1.board().all_ships_destroyed() || self.player_2.board().all_ships_destroyed()
    }

    /// Begin play. Allowed exactly once, from `Initialized` only.
    ///
    /// If a side starts with a vacuously destroyed board the game ends on
    /// the spot, with no turns recorded.
    pub fn start(&mut self) -> Result<(), GameError> {
        if self.status != GameStatus::Initialized {
            return Err(GameError::GameAlreadyStarted);
        }
        log::info!(
            "Battle between {} and {} begins",
            self.player_1.name(),
            self.player_2.name()
        );
        self.status = GameStatus::Started;
        if self.is_over() {
            self.status = GameStatus::Ended;
        }
        Ok(())
    }

    /// Execute one turn: the current attacker bombs one cell of the
    /// defender's board and the result joins the turn history.
    ///
    /// Attacker and defender alternate with each recorded turn, player 1
    /// first. A selection the defender's board rejects is retried without
    /// recording anything. Returns the recorded turn, or `None` when the
    /// game is already over or the selector runs out of targets.
    pub fn play_turn(
        &mut self,
        selector: &mut dyn TargetSelect,
    ) -> Result<Option<&Turn>, GameError> {
        match self.status {
            GameStatus::Initialized => return Err(GameError::GameHasNotStarted),
            GameStatus::Ended => return Ok(None),
            GameStatus::Started => {}
        }
        let player_1_attacks = self.turns.len() % 2 == 0;
        let (attacker, defender) = if player_1_attacks {
            (self.player_1.name().to_owned(), &mut self.player_2)
        } else {
            (self.player_2.name().to_owned(), &mut self.player_1)
        };
        let (position, outcome) = loop {
            let Some(position) = selector.select_target(defender.board()) else {
                return Ok(None);
            };
            match defender.board_mut().bomb(position) {
                Ok(outcome) => break (position, outcome),
                Err(GameError::CannotBombPosition) => continue,
                Err(e) => return Err(e),
            }
        };
        if defender.board().all_ships_destroyed() {
            self.status = GameStatus::Ended;
        }
        self.turns.push(Turn {
            attacker,
            outcome,
            position,
        });
        Ok(self.turns.last())
    }

    /// Run the battle to completion: start, then alternate attacks until a
    /// side has no surviving ship.
    pub fn play(&mut self, selector: &mut dyn TargetSelect) -> Result<(), GameError> {
        self.start()?;
        while self.status == GameStatus::Started {
            if self.play_turn(selector)?.is_none() {
                break;
            }
        }
        Ok(())
    }

    /// The surviving player, once the game has ended.
    ///
    /// Signals `GameHasNotStarted` before play and `GameStillInProgress`
    /// during it. When both boards are destroyed (both players placed no
    /// ships) player 2, the initial defender, takes the win.
    pub fn winner(&self) -> Result<&Player, GameError> {
        match self.status {
            GameStatus::Initialized => Err(GameError::GameHasNotStarted),
            GameStatus::Started => Err(GameError::GameStillInProgress),
            GameStatus::Ended => {
                if self.player_1.board().all_ships_destroyed() {
                    Ok(&self.player_2)
                } else {
                    Ok(&self.player_1)
                }
            }
        }
    }
}
