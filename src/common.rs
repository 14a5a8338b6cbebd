//! Common types for the engine: error kinds and attack outcomes.

use serde::{Deserialize, Serialize};

/// Outcome of a resolved attack against a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BombOutcome {
    /// The targeted cell was occupied by a ship.
    pub hit: bool,
    /// The hit pushed the occupying ship to or past its length.
    pub destroyed_ship: bool,
}

/// Errors returned by engine operations.
///
/// Every failure here leaves all game state untouched; callers may retry
/// with different input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Direction input did not name a known placement axis.
    UnknownDirection,
    /// At least one target cell is out of bounds or not free.
    CannotOccupyPositions,
    /// Target cell is out of bounds or already bombed.
    CannotBombPosition,
    /// The chosen ship type has no remaining quantity.
    UnavailableShip,
    /// The ship code is not part of the player's fleet.
    UnknownShip,
    /// Random placement could not fit the ship within the attempt limit.
    UnableToPlaceShip,
    /// Play was triggered on a game that is no longer in its initial state.
    GameAlreadyStarted,
    /// Result was requested before play began.
    GameHasNotStarted,
    /// Result was requested while the battle is still running.
    GameStillInProgress,
    /// No game is registered under the given id.
    UnknownGame,
    /// No player with the given name takes part in the game.
    UnknownPlayer,
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::UnknownDirection => write!(f, "Unknown placement direction"),
            GameError::CannotOccupyPositions => {
                write!(f, "Cannot occupy the requested board positions")
            }
            GameError::CannotBombPosition => write!(f, "Cannot bomb the requested position"),
            GameError::UnavailableShip => write!(f, "Ship type has no remaining quantity"),
            GameError::UnknownShip => write!(f, "Ship code is not part of the fleet"),
            GameError::UnableToPlaceShip => write!(f, "Unable to place ship on the board"),
            GameError::GameAlreadyStarted => write!(f, "Game has already been started"),
            GameError::GameHasNotStarted => write!(f, "Game has not been started yet"),
            GameError::GameStillInProgress => write!(f, "Game is still in progress"),
            GameError::UnknownGame => write!(f, "Unknown game"),
            GameError::UnknownPlayer => write!(f, "Unknown player"),
        }
    }
}

impl std::error::Error for GameError {}
