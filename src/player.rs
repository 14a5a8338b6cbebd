//! Players: a named board plus the fleet still available for placement.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::common::GameError;
use crate::config::{ShipClass, DEFAULT_BOARD_LENGTH, DEFAULT_BOARD_WIDTH, DEFAULT_FLEET};
use crate::position::{Direction, Position};
use crate::ship::Ship;

/// Attempts per ship before random placement gives up.
const PLACEMENT_ATTEMPTS: usize = 100;

/// Remaining allotment of one ship class in a player's fleet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipStock {
    code: String,
    kind: String,
    length: usize,
    quantity: usize,
}

impl ShipStock {
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn quantity(&self) -> usize {
        self.quantity
    }
}

impl From<&ShipClass> for ShipStock {
    fn from(class: &ShipClass) -> Self {
        Self {
            code: class.code().to_owned(),
            kind: class.kind().to_owned(),
            length: class.length(),
            quantity: class.quantity(),
        }
    }
}

/// One of the two participants: owns its board and its ship inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    board: Board,
    fleet: Vec<ShipStock>,
}

impl Player {
    /// Player with the standard fleet on a default-sized board.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_options(name, &DEFAULT_FLEET, DEFAULT_BOARD_LENGTH, DEFAULT_BOARD_WIDTH)
    }

    /// Player with a custom fleet and board dimensions.
    pub fn with_options(
        name: impl Into<String>,
        fleet: &[ShipClass],
        length: usize,
        width: usize,
    ) -> Self {
        Self {
            name: name.into(),
            board: Board::new(length, width),
            fleet: fleet.iter().map(ShipStock::from).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn fleet(&self) -> &[ShipStock] {
        &self.fleet
    }

    /// Codes of ship classes with remaining quantity.
    pub fn available_ships(&self) -> Vec<&str> {
        self.fleet
            .iter()
            .filter(|stock| stock.quantity > 0)
            .map(|stock| stock.code.as_str())
            .collect()
    }

    /// Kinds of placed ships that have not been destroyed.
    pub fn remaining_ships(&self) -> Vec<&str> {
        self.board
            .ships()
            .iter()
            .filter(|ship| !ship.is_destroyed())
            .map(Ship::kind)
            .collect()
    }

    /// Place one ship of class `code` with its front cell at `front`.
    ///
    /// The stock is decremented only after the board accepts the placement,
    /// so a rejected position leaves the inventory untouched.
    pub fn place_ship(
        &mut self,
        code: &str,
        front: Position,
        direction: Direction,
    ) -> Result<(), GameError> {
        let index = self
            .fleet
            .iter()
            .position(|stock| stock.code == code)
            .ok_or(GameError::UnknownShip)?;
        if self.fleet[index].quantity == 0 {
            return Err(GameError::UnavailableShip);
        }
        let stock = &self.fleet[index];
        let ship = Ship::new(stock.kind.clone(), stock.length);
        self.board.place_ship(ship, front, direction)?;
        self.fleet[index].quantity -= 1;
        Ok(())
    }

    /// Place the entire remaining fleet at random, non-overlapping spots.
    ///
    /// Each ship gets a bounded number of attempts; exhausting them fails
    /// with `UnableToPlaceShip` and leaves already placed ships in place.
    pub fn place_fleet_randomly<R: Rng>(&mut self, rng: &mut R) -> Result<(), GameError> {
        for index in 0..self.fleet.len() {
            while self.fleet[index].quantity > 0 {
                self.place_one_randomly(rng, index)?;
            }
        }
        Ok(())
    }

    fn place_one_randomly<R: Rng>(&mut self, rng: &mut R, index: usize) -> Result<(), GameError> {
        let len = self.fleet[index].length;
        let code = self.fleet[index].code.clone();
        for _ in 0..PLACEMENT_ATTEMPTS {
            let direction = if rng.random() {
                Direction::Horizontal
            } else {
                Direction::Vertical
            };
            let (max_x, max_y) = match direction {
                Direction::Horizontal => (
                    self.board.length().checked_sub(1),
                    self.board.width().checked_sub(len),
                ),
                Direction::Vertical => (
                    self.board.length().checked_sub(len),
                    self.board.width().checked_sub(1),
                ),
            };
            let (Some(max_x), Some(max_y)) = (max_x, max_y) else {
                // ship longer than the board on this axis
                continue;
            };
            let front = Position::new(rng.random_range(0..=max_x), rng.random_range(0..=max_y));
            match self.place_ship(&code, front, direction) {
                Ok(()) => return Ok(()),
                Err(GameError::CannotOccupyPositions) => continue,
                Err(e) => return Err(e),
            }
        }
        Err(GameError::UnableToPlaceShip)
    }
}
