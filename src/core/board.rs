//! Board module - the grid of locked cells.
//!
//! The board is a 10x20 grid where each cell is empty or holds a piece kind.
//! Uses a flat array for cache locality and zero allocation.
//! Coordinates: (x, y) with x in 0..10 (left to right), y in 0..20 (top to
//! bottom). Active pieces may extend above the grid (negative y) while they
//! fall; only rows 0..20 exist as storage.

use crate::types::{Cell, PieceKind, BOARD_COLS, BOARD_ROWS};

/// Total number of cells on the board.
const BOARD_SIZE: usize = (BOARD_COLS as usize) * (BOARD_ROWS as usize);

/// The game board - 10 columns x 20 rows using flat array storage.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * COLS + x).
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates.
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_COLS as i8 || y < 0 || y >= BOARD_ROWS as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_COLS as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_COLS
    }

    pub fn height(&self) -> u8 {
        BOARD_ROWS
    }

    /// Get cell at (x, y). Returns `None` if out of bounds.
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at (x, y). Returns false if out of bounds.
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check whether the given cell is occupied by a locked piece.
    ///
    /// Out-of-bounds positions (including negative rows) report unoccupied.
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Collision query for a piece shape at origin (x, y).
    ///
    /// A cell collides if it is out of horizontal bounds, at or below the
    /// bottom row, or coincides with an occupied cell at row >= 0. Rows above
    /// the grid never collide on occupancy: they are the spawn buffer.
    pub fn collides(&self, shape: &[(i8, i8)], x: i8, y: i8) -> bool {
        shape.iter().any(|&(dx, dy)| {
            let px = x + dx;
            let py = y + dy;
            if px < 0 || px >= BOARD_COLS as i8 || py >= BOARD_ROWS as i8 {
                return true;
            }
            py >= 0 && self.is_occupied(px, py)
        })
    }

    /// Lock a piece shape into the board at origin (x, y).
    ///
    /// Cells with negative row are silently dropped; the caller detects
    /// top-out from the next spawn, not from here.
    pub fn lock(&mut self, shape: &[(i8, i8)], x: i8, y: i8, kind: PieceKind) {
        for &(dx, dy) in shape {
            self.set(x + dx, y + dy, Some(kind));
        }
    }

    /// Check if a row is completely filled.
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_ROWS as usize {
            return false;
        }
        let start = y * BOARD_COLS as usize;
        let end = start + BOARD_COLS as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Remove every full row and refill the top with empty rows.
    ///
    /// Implemented as a compaction pass: non-full rows are kept in order and
    /// written bottom-up, then whatever remains above the write cursor is
    /// cleared. Handles multiple, possibly non-adjacent, full rows in one
    /// call. Returns the number of rows cleared.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = BOARD_COLS as usize;
        let mut cleared = 0;
        let mut write_y = BOARD_ROWS as usize;

        for read_y in (0..BOARD_ROWS as usize).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src = read_y * width;
                    let dst = write_y * width;
                    self.cells.copy_within(src..src + width, dst);
                }
            }
        }

        for cell in &mut self.cells[..write_y * width] {
            *cell = None;
        }

        cleared
    }

    /// Clear the entire board.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Get a reference to the internal cells array (row-major).
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
