//! The game engine: board and piece model, per-piece move generation, and
//! the selection/turn state machine. The GUI shell consumes this through
//! the read-only snapshot accessors on [`GameState`] and the two input
//! entry points, `set_cursor` and `activate`.

pub mod board;
pub mod coord;
pub mod layout;
pub mod movegen;
pub mod piece;
pub mod state;

pub use board::{Board, Square};
pub use coord::{BOARD_SIZE, Coord};
pub use layout::{Layout, UnknownLayout};
pub use movegen::{MoveSet, MoveTable, legal_moves};
pub use piece::{Color, Piece, PieceKind};
pub use state::{GameState, MoveRecord, Player, Turn};
