//! Rules engine for a two-player grid-based naval combat game: board
//! model, ship placement, attack resolution and turn/win tracking.

mod board;
mod common;
mod config;
mod game;
mod logging;
mod player;
mod position;
mod ship;
mod store;

pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use logging::init_logging;
pub use player::*;
pub use position::*;
pub use ship::*;
pub use store::*;
