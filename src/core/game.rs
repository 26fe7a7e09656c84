//! Game module - the session state machine.
//!
//! Ties together board, pieces, bag, and scoring. A `Game` is the single
//! writer of all session state: commands and ticks mutate it synchronously
//! and either fully apply or are rejected as no-ops. Time never blocks;
//! gravity and lock delay compare against the monotonic clock the host
//! passes to `tick`.

use arrayvec::ArrayVec;

use crate::core::bag::SevenBag;
use crate::core::board::Board;
use crate::core::pieces::{self, PieceShape, SPAWN_X, SPAWN_Y};
use crate::core::scoring::{drop_score, fall_interval_ms, level_for_lines, line_clear_score};
use crate::core::snapshot::{ActivePiece, GameSnapshot};
use crate::types::{
    GameAction, PieceKind, Turn, BOARD_COLS, BOARD_ROWS, LOCK_DELAY_MS, PREVIEW_COUNT,
};

/// The active falling piece.
///
/// `cells` is the current shape in the local 4x4 frame; rotation rewrites it
/// in place. `rot` counts quarter turns from spawn, for consumers that care
/// about orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub cells: PieceShape,
    pub x: i8,
    pub y: i8,
    pub rot: u8,
}

impl Piece {
    /// Create a piece at the spawn pose: centered, frame top two rows above
    /// the visible board.
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            cells: pieces::spawn_shape(kind),
            x: SPAWN_X,
            y: SPAWN_Y,
            rot: 0,
        }
    }
}

/// A complete game session. Created by `new`, replaced wholesale by `reset`.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    active: Option<Piece>,
    hold: Option<PieceKind>,
    can_hold: bool,
    queue: ArrayVec<PieceKind, PREVIEW_COUNT>,
    bag: SevenBag,
    score: u32,
    lines: u32,
    level: u32,
    fall_interval_ms: u64,
    /// Timestamp of the last registered gravity step.
    last_fall_at: Option<u64>,
    /// Timestamp the grounded lock-delay timer started, if armed.
    lock_started_at: Option<u64>,
    paused: bool,
    over: bool,
}

impl Game {
    /// Create a session with the given RNG seed and spawn the first piece.
    pub fn new(seed: u32) -> Self {
        let mut bag = SevenBag::new(seed);
        let mut queue = ArrayVec::new();
        for _ in 0..PREVIEW_COUNT {
            queue.push(bag.next());
        }

        let level = 1;
        let mut game = Self {
            board: Board::new(),
            active: None,
            hold: None,
            can_hold: true,
            queue,
            bag,
            score: 0,
            lines: 0,
            level,
            fall_interval_ms: fall_interval_ms(level),
            last_fall_at: None,
            lock_started_at: None,
            paused: false,
            over: false,
        };
        game.spawn();
        game
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn over(&self) -> bool {
        self.over
    }

    pub fn can_hold(&self) -> bool {
        self.can_hold
    }

    pub fn hold_kind(&self) -> Option<PieceKind> {
        self.hold
    }

    pub fn active(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn queue(&self) -> &[PieceKind] {
        &self.queue
    }

    pub fn fall_interval_ms(&self) -> u64 {
        self.fall_interval_ms
    }

    /// Dispatch a discrete command. Returns whether anything changed.
    pub fn apply(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_piece(-1, 0),
            GameAction::MoveRight => self.move_piece(1, 0),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::RotateCw => self.rotate(Turn::Cw),
            GameAction::RotateCcw => self.rotate(Turn::Ccw),
            GameAction::Rotate180 => self.rotate(Turn::Half),
            GameAction::Hold => self.hold(),
            GameAction::PauseToggle => self.toggle_pause(),
            GameAction::Reset => {
                self.reset();
                true
            }
        }
    }

    /// Dequeue the next kind, refill the queue by one, and materialize it at
    /// the spawn pose. A spawn that immediately collides ends the session.
    fn spawn(&mut self) {
        let kind = self.queue.remove(0);
        self.queue.push(self.bag.next());

        let piece = Piece::spawn(kind);
        if self.board.collides(&piece.cells, piece.x, piece.y) {
            self.over = true;
        }
        self.active = Some(piece);
        self.can_hold = true;
        self.lock_started_at = None;
    }

    /// Try to translate the active piece. No-op when paused, over, or no
    /// piece is active. A successful move re-arms the lock-delay timer.
    pub fn move_piece(&mut self, dx: i8, dy: i8) -> bool {
        if self.paused || self.over {
            return false;
        }
        let Some(piece) = self.active.as_mut() else {
            return false;
        };

        let nx = piece.x + dx;
        let ny = piece.y + dy;
        if self.board.collides(&piece.cells, nx, ny) {
            return false;
        }

        piece.x = nx;
        piece.y = ny;
        self.lock_started_at = None;
        true
    }

    /// Rotate the active piece, resolving placement through the kick table.
    /// Rejected rotations leave the piece unchanged.
    pub fn rotate(&mut self, turn: Turn) -> bool {
        if self.paused || self.over {
            return false;
        }
        let Some(piece) = self.active.as_mut() else {
            return false;
        };

        let board = &self.board;
        let result = pieces::try_rotate(
            piece.kind,
            &piece.cells,
            piece.x,
            piece.y,
            turn,
            |shape, x, y| board.collides(shape, x, y),
        );

        let Some((cells, (kx, ky))) = result else {
            return false;
        };

        piece.cells = cells;
        piece.x += kx;
        piece.y += ky;
        piece.rot = match turn {
            Turn::Cw => (piece.rot + 1) % 4,
            Turn::Ccw => (piece.rot + 3) % 4,
            Turn::Half => (piece.rot + 2) % 4,
        };
        self.lock_started_at = None;
        true
    }

    /// Drop one row, awarding the flat soft-drop bonus on success.
    pub fn soft_drop(&mut self) -> bool {
        let moved = self.move_piece(0, 1);
        if moved {
            self.score += drop_score(1, false);
        }
        moved
    }

    /// Drop to the lowest legal row, award per-row bonus, lock immediately.
    pub fn hard_drop(&mut self) -> bool {
        if self.paused || self.over || self.active.is_none() {
            return false;
        }

        let distance = self.drop_distance().unwrap_or(0);
        if let Some(piece) = self.active.as_mut() {
            piece.y += distance as i8;
        }
        self.score += drop_score(distance, true);
        self.lock_active();
        true
    }

    /// Stash or swap the active piece's kind. At most once per spawn.
    ///
    /// A swap materializes the stored kind at the fixed spawn pose; the
    /// outgoing piece's position and orientation are discarded.
    pub fn hold(&mut self) -> bool {
        if self.paused || self.over || !self.can_hold {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        match self.hold.take() {
            Some(stored) => {
                self.hold = Some(active.kind);
                let piece = Piece::spawn(stored);
                if self.board.collides(&piece.cells, piece.x, piece.y) {
                    self.over = true;
                }
                self.active = Some(piece);
                self.lock_started_at = None;
            }
            None => {
                self.hold = Some(active.kind);
                self.spawn();
            }
        }

        self.can_hold = false;
        true
    }

    /// Commit the active piece to the board, clear lines, score, respawn.
    fn lock_active(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };

        self.board.lock(&piece.cells, piece.x, piece.y, piece.kind);
        self.lock_started_at = None;

        let cleared = self.board.clear_full_rows();
        if cleared > 0 {
            // Score with the level in effect when the lines were cleared,
            // then re-derive level and gravity.
            self.score += line_clear_score(cleared, self.level);
            self.lines += cleared as u32;

            let new_level = level_for_lines(self.lines);
            if new_level != self.level {
                self.level = new_level;
                self.fall_interval_ms = fall_interval_ms(new_level);
            }
        }

        if !self.over {
            self.spawn();
        }
    }

    /// Advance time. `now` is a monotonically non-decreasing millisecond
    /// clock supplied by the host; nothing here blocks or sleeps.
    ///
    /// Gravity runs at the current fall interval. When a gravity step fails
    /// the piece is grounded: the lock-delay timer arms, and the piece locks
    /// once it has stayed grounded past the threshold. Any successful move or
    /// rotation in the meantime re-arms the timer.
    pub fn tick(&mut self, now: u64) -> bool {
        if self.paused || self.over {
            return false;
        }

        let last = *self.last_fall_at.get_or_insert(now);
        if now.saturating_sub(last) < self.fall_interval_ms {
            return false;
        }
        self.last_fall_at = Some(now);

        if self.move_piece(0, 1) {
            return true;
        }

        // Grounded: arm or continue the lock-delay timer.
        let started = *self.lock_started_at.get_or_insert(now);
        if now.saturating_sub(started) >= LOCK_DELAY_MS {
            self.lock_active();
            return true;
        }

        false
    }

    /// Freeze or unfreeze time-based transitions. Ignored once the session
    /// is over (only reset applies then).
    pub fn toggle_pause(&mut self) -> bool {
        if self.over {
            return false;
        }
        self.paused = !self.paused;
        true
    }

    /// Discard all state and start a fresh session. The new session reseeds
    /// from the current RNG state, so consecutive episodes differ but the
    /// whole run stays reproducible from the original seed.
    pub fn reset(&mut self) {
        *self = Self::new(self.bag.rng_state());
    }

    /// Rows the active piece can still descend before colliding.
    fn drop_distance(&self) -> Option<u32> {
        let piece = self.active.as_ref()?;
        let mut distance = 0u32;
        while !self
            .board
            .collides(&piece.cells, piece.x, piece.y + distance as i8 + 1)
        {
            distance += 1;
        }
        Some(distance)
    }

    /// Row the active piece would land on if hard-dropped now.
    pub fn ghost_y(&self) -> Option<i8> {
        let piece = self.active.as_ref()?;
        Some(piece.y + self.drop_distance()? as i8)
    }

    /// Produce a read-only snapshot for rendering/UI.
    pub fn snapshot(&self) -> GameSnapshot {
        let cols = BOARD_COLS as usize;
        let rows = BOARD_ROWS as usize;
        let mut board = [[None; BOARD_COLS as usize]; BOARD_ROWS as usize];
        let flat = self.board.cells();
        for y in 0..rows {
            board[y][..cols].copy_from_slice(&flat[y * cols..(y + 1) * cols]);
        }

        let mut queue = [PieceKind::I; PREVIEW_COUNT];
        queue.copy_from_slice(&self.queue);

        GameSnapshot {
            board,
            active: self.active.as_ref().map(ActivePiece::from),
            ghost_y: self.ghost_y(),
            hold: self.hold,
            queue,
            can_hold: self.can_hold,
            paused: self.paused,
            over: self.over,
            score: self.score,
            lines: self.lines,
            level: self.level,
        }
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub(crate) fn set_active(&mut self, piece: Piece) {
        self.active = Some(piece);
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(1)
    }
}
