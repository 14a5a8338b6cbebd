//! Default board dimensions and fleet composition.

pub const DEFAULT_BOARD_LENGTH: usize = 10;
pub const DEFAULT_BOARD_WIDTH: usize = 10;

/// A placeable ship class: short code, kind, length and how many of it a
/// player starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipClass {
    code: &'static str,
    kind: &'static str,
    length: usize,
    quantity: usize,
}

impl ShipClass {
    pub const fn new(code: &'static str, kind: &'static str, length: usize, quantity: usize) -> Self {
        Self {
            code,
            kind,
            length,
            quantity,
        }
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn quantity(&self) -> usize {
        self.quantity
    }
}

/// Standard fleet: one ship of each class.
pub const DEFAULT_FLEET: [ShipClass; 5] = [
    ShipClass::new("AIR", "aircraft-carrier", 5, 1),
    ShipClass::new("BTL", "battleship", 4, 1),
    ShipClass::new("SUB", "submarine", 3, 1),
    ShipClass::new("DES", "destroyer", 3, 1),
    ShipClass::new("PTL", "patrol-ship", 2, 1),
];
