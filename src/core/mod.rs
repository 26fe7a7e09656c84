//! Core module - the pure simulation engine.
//!
//! Board, pieces, bag, scoring, and the session state machine. No UI, no
//! I/O, no clocks of its own: the host feeds commands and timestamps in and
//! reads snapshots out.

pub mod bag;
pub mod board;
pub mod game;
pub mod pieces;
pub mod scoring;
pub mod snapshot;

// Re-export commonly used types.
pub use bag::SevenBag;
pub use board::Board;
pub use game::{Game, Piece};
pub use pieces::{rotate, spawn_shape, try_rotate};
pub use snapshot::{ActivePiece, GameSnapshot};
