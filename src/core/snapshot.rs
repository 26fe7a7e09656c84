//! Read-only view of the session state for rendering and UI.
//!
//! Snapshots are plain data: producing one never mutates the session, and no
//! mutation path leads back through it.

use crate::core::game::Piece;
use crate::core::pieces::PieceShape;
use crate::types::{Cell, PieceKind, BOARD_COLS, BOARD_ROWS, PREVIEW_COUNT};

/// The active falling piece as seen by consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub cells: PieceShape,
    pub x: i8,
    pub y: i8,
}

impl From<&Piece> for ActivePiece {
    fn from(piece: &Piece) -> Self {
        Self {
            kind: piece.kind,
            cells: piece.cells,
            x: piece.x,
            y: piece.y,
        }
    }
}

/// One frame's worth of game state.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    /// Locked cells, row-major, row 0 at the top.
    pub board: [[Cell; BOARD_COLS as usize]; BOARD_ROWS as usize],
    pub active: Option<ActivePiece>,
    /// Row the active piece would land on if hard-dropped now.
    pub ghost_y: Option<i8>,
    pub hold: Option<PieceKind>,
    pub queue: [PieceKind; PREVIEW_COUNT],
    pub can_hold: bool,
    pub paused: bool,
    pub over: bool,
    pub score: u32,
    pub lines: u32,
    pub level: u32,
}

impl GameSnapshot {
    /// Whether commands would currently have any effect.
    pub fn playable(&self) -> bool {
        !self.over && !self.paused
    }
}
