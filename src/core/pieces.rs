//! Pieces module - shapes, rotation transforms, and wall kicks.
//!
//! Every shape lives in a 4x4 local frame, so rotation is a pure coordinate
//! transform independent of kind. Kicks are a short per-kind candidate list
//! tried in order; this is a deliberately simplified table, not full SRS.

use crate::types::{PieceKind, Turn, BOARD_COLS};

/// Offset of a single cell relative to the piece origin.
pub type CellOffset = (i8, i8);

/// Shape of a piece - 4 cell offsets in the local 4x4 frame.
pub type PieceShape = [CellOffset; 4];

/// Spawn origin: centered horizontally, local frame starting two rows above
/// the visible board.
pub const SPAWN_X: i8 = (BOARD_COLS as i8 - 4) / 2;
pub const SPAWN_Y: i8 = -2;

/// Get the spawn-orientation shape for a piece kind.
pub fn spawn_shape(kind: PieceKind) -> PieceShape {
    match kind {
        PieceKind::I => [(0, 1), (1, 1), (2, 1), (3, 1)],
        PieceKind::O => [(1, 0), (2, 0), (1, 1), (2, 1)],
        PieceKind::T => [(1, 0), (0, 1), (1, 1), (2, 1)],
        PieceKind::S => [(1, 1), (2, 1), (0, 2), (1, 2)],
        PieceKind::Z => [(0, 1), (1, 1), (1, 2), (2, 2)],
        PieceKind::J => [(0, 0), (0, 1), (1, 1), (2, 1)],
        PieceKind::L => [(2, 0), (0, 1), (1, 1), (2, 1)],
    }
}

/// Rotate a shape inside its 4x4 frame.
///
/// CW: (x, y) -> (3-y, x); CCW: (x, y) -> (y, 3-x); 180: (x, y) -> (3-x, 3-y).
/// Applying the same quarter turn four times returns the original shape.
pub fn rotate(shape: &PieceShape, turn: Turn) -> PieceShape {
    let mut out = *shape;
    for cell in &mut out {
        let (x, y) = *cell;
        *cell = match turn {
            Turn::Cw => (3 - y, x),
            Turn::Ccw => (y, 3 - x),
            Turn::Half => (3 - x, 3 - y),
        };
    }
    out
}

/// Kick candidates tried in order to legalize a rotation.
const DEFAULT_KICKS: [CellOffset; 5] = [(0, 0), (-1, 0), (1, 0), (0, -1), (0, 1)];
const I_KICKS: [CellOffset; 5] = [(0, 0), (-1, 0), (1, 0), (0, -1), (0, 1)];
const O_KICKS: [CellOffset; 1] = [(0, 0)];

/// Get the kick candidate list for a piece kind.
pub fn kicks_for(kind: PieceKind) -> &'static [CellOffset] {
    match kind {
        PieceKind::I => &I_KICKS,
        PieceKind::O => &O_KICKS,
        _ => &DEFAULT_KICKS,
    }
}

/// Try to rotate a shape at origin (x, y), resolving placement via kicks.
///
/// Returns the rotated shape and the accepted kick offset, or `None` if every
/// candidate collides (the caller keeps the piece unchanged). O is
/// rotation-locked: in the 4x4 frame its cells are not rotation-invariant, so
/// a "rotation" would translate the block; rejecting it keeps O fixed.
pub fn try_rotate(
    kind: PieceKind,
    shape: &PieceShape,
    x: i8,
    y: i8,
    turn: Turn,
    collides: impl Fn(&PieceShape, i8, i8) -> bool,
) -> Option<(PieceShape, CellOffset)> {
    if kind == PieceKind::O {
        return None;
    }

    let rotated = rotate(shape, turn);
    for &(kx, ky) in kicks_for(kind) {
        if !collides(&rotated, x + kx, y + ky) {
            return Some((rotated, (kx, ky)));
        }
    }

    None
}
