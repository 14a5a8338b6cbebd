//! Game board state: the cell grid, placement and bombing rules.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::common::{BombOutcome, GameError};
use crate::position::{affected_positions, Direction, Position};
use crate::ship::Ship;

/// Occupancy status of a single cell.
///
/// `Bombed` is terminal: a bombed cell can never be attacked again or
/// re-occupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellStatus {
    Free,
    Occupied,
    Bombed,
}

/// One grid cell: its status and, when occupied, the index of the ship
/// holding it in the board's ship list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    status: CellStatus,
    ship: Option<usize>,
}

impl Cell {
    fn free() -> Self {
        Self {
            status: CellStatus::Free,
            ship: None,
        }
    }

    pub fn status(&self) -> CellStatus {
        self.status
    }

    /// Index into the owning board's ship list, if a ship holds this cell.
    pub fn ship_index(&self) -> Option<usize> {
        self.ship
    }
}

/// A player's grid of cells plus the ships placed on it.
///
/// The grid is row-major: `grid[x][y]` with `x` in `[0, length)` and `y`
/// in `[0, width)`. Cells reference ships by index into `ships` so that
/// each ship's damage counter has a single source of truth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    length: usize,
    width: usize,
    grid: Vec<Vec<Cell>>,
    ships: Vec<Ship>,
}

impl Board {
    /// Create an empty `length` x `width` board. Both dimensions must be
    /// positive.
    pub fn new(length: usize, width: usize) -> Self {
        Self {
            length,
            width,
            grid: vec![vec![Cell::free(); width]; length],
            ships: Vec::new(),
        }
    }

    /// Number of rows.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Ships placed on the board, in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// `true` iff the position lies on the board.
    pub fn in_bounds(&self, position: Position) -> bool {
        position.x < self.length && position.y < self.width
    }

    /// Status of the cell at `position`. Callers validate bounds first.
    pub fn status_at(&self, position: Position) -> CellStatus {
        self.grid[position.x][position.y].status
    }

    /// The cell at `position`. Callers validate bounds first.
    pub fn cell_at(&self, position: Position) -> &Cell {
        &self.grid[position.x][position.y]
    }

    pub fn is_occupied(&self, position: Position) -> bool {
        self.status_at(position) == CellStatus::Occupied
    }

    pub fn is_bombed(&self, position: Position) -> bool {
        self.status_at(position) == CellStatus::Bombed
    }

    /// `true` iff every position is on the board and its cell is free.
    /// A single disqualifying cell fails the whole set.
    pub fn can_place(&self, positions: &[Position]) -> bool {
        positions
            .iter()
            .all(|&p| self.in_bounds(p) && self.status_at(p) == CellStatus::Free)
    }

    /// `true` iff the position is on the board and not already bombed.
    /// Free and occupied cells are both bombable.
    pub fn can_bomb(&self, position: Position) -> bool {
        self.in_bounds(position) && !self.is_bombed(position)
    }

    /// Place `ship` with its front cell at `front`, extending along
    /// `direction`.
    ///
    /// Validation happens before any mutation: on failure the board is
    /// untouched, on success every derived cell becomes occupied and the
    /// ship joins the board's ship list exactly once.
    pub fn place_ship(
        &mut self,
        ship: Ship,
        front: Position,
        direction: Direction,
    ) -> Result<(), GameError> {
        let positions = affected_positions(ship.length(), front, direction);
        if !self.can_place(&positions) {
            return Err(GameError::CannotOccupyPositions);
        }
        log::info!(
            "Placing {} (length {}) {:?} from {}",
            ship.kind(),
            ship.length(),
            direction,
            front
        );
        let index = self.ships.len();
        self.ships.push(ship);
        for position in positions {
            let cell = &mut self.grid[position.x][position.y];
            cell.status = CellStatus::Occupied;
            cell.ship = Some(index);
        }
        Ok(())
    }

    /// Resolve an attack against `position`.
    ///
    /// A failed attempt has no side effect, so callers may retry with a
    /// different position. On success the cell becomes bombed and, when a
    /// ship held it, that ship takes one hit.
    pub fn bomb(&mut self, position: Position) -> Result<BombOutcome, GameError> {
        if !self.can_bomb(position) {
            return Err(GameError::CannotBombPosition);
        }
        let hit = self.is_occupied(position);
        let cell = &mut self.grid[position.x][position.y];
        cell.status = CellStatus::Bombed;
        let destroyed_ship = match cell.ship {
            Some(index) if hit => {
                let ship = &mut self.ships[index];
                ship.take_hit();
                ship.is_destroyed()
            }
            _ => false,
        };
        log::debug!(
            "Bombed {}: hit {}, destroyed ship {}",
            position,
            hit,
            destroyed_ship
        );
        Ok(BombOutcome {
            hit,
            destroyed_ship,
        })
    }

    /// `true` iff every placed ship is destroyed.
    ///
    /// A board with no ships reports `true`: a player who placed nothing
    /// loses as soon as play starts.
    pub fn all_ships_destroyed(&self) -> bool {
        self.ships.iter().all(Ship::is_destroyed)
    }

    /// All positions that have not been bombed yet, in row-major order.
    /// Attack strategies sample from this set so play terminates.
    pub fn unbombed_positions(&self) -> Vec<Position> {
        (0..self.length)
            .flat_map(|x| (0..self.width).map(move |y| Position::new(x, y)))
            .filter(|&p| !self.is_bombed(p))
            .collect()
    }
}

impl fmt::Display for Board {
    /// Render the grid one row per line: `O` free, `X` occupied, `B` bombed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.grid {
            for cell in row {
                let glyph = match cell.status {
                    CellStatus::Free => 'O',
                    CellStatus::Occupied => 'X',
                    CellStatus::Bombed => 'B',
                };
                write!(f, "{}", glyph)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
