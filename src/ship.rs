//! Ships and their damage accounting.

use serde::{Deserialize, Serialize};

/// A vessel placed (or about to be placed) on a board.
///
/// Damage is a plain counter: the ship is destroyed once it has taken at
/// least as many hits as it has cells. Ships are never removed from a
/// board; destruction is implied by the counter alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ship {
    kind: String,
    length: usize,
    hits_taken: usize,
}

impl Ship {
    pub fn new(kind: impl Into<String>, length: usize) -> Self {
        Self {
            kind: kind.into(),
            length,
            hits_taken: 0,
        }
    }

    /// Ship's kind, e.g. `"destroyer"`.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Number of cells the ship occupies.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Hits the ship has taken so far. Monotonically non-decreasing.
    pub fn hits_taken(&self) -> usize {
        self.hits_taken
    }

    /// Register one hit against the ship.
    pub fn take_hit(&mut self) {
        self.hits_taken += 1;
    }

    /// `true` once the ship has taken at least `length` hits.
    pub fn is_destroyed(&self) -> bool {
        self.hits_taken >= self.length
    }
}
