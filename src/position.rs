//! Board coordinates and the placement axis.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::GameError;

/// A coordinate on a board: `x` is the row index, `y` the column index.
///
/// A position carries no validity of its own; whether it lies on a board
/// is decided against that board's dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Axis along which a ship extends from its front position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Horizontal,
    Vertical,
}

impl FromStr for Direction {
    type Err = GameError;

    /// Parse a direction from user input. Accepts the full spellings and
    /// the single-letter shorthands used when placing ships by hand.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "horizontal" | "h" => Ok(Direction::Horizontal),
            "vertical" | "v" => Ok(Direction::Vertical),
            _ => Err(GameError::UnknownDirection),
        }
    }
}

/// Positions a ship of `length` cells would occupy, extending from `front`
/// along `direction`: the column axis when horizontal, the row axis when
/// vertical.
///
/// Pure derivation with no bounds checking; callers validate the result
/// against a board before committing anything.
pub fn affected_positions(length: usize, front: Position, direction: Direction) -> Vec<Position> {
    match direction {
        Direction::Horizontal => (front.y..front.y + length)
            .map(|y| Position::new(front.x, y))
            .collect(),
        Direction::Vertical => (front.x..front.x + length)
            .map(|x| Position::new(x, front.y))
            .collect(),
    }
}
