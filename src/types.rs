//! Shared types and tuning constants.
//!
//! Pure data with no external dependencies. Board geometry, timing, and the
//! score table all live here so the rest of the crate has one place to look.

/// Board dimensions.
pub const BOARD_COLS: u8 = 10;
pub const BOARD_ROWS: u8 = 20;

/// Number of upcoming pieces shown in the preview queue.
pub const PREVIEW_COUNT: usize = 5;

/// Gravity timing (milliseconds): level-1 fall interval, per-level speedup,
/// and the floor the interval is clamped to.
pub const BASE_FALL_MS: u64 = 800;
pub const FALL_STEP_MS: u64 = 60;
pub const MIN_FALL_MS: u64 = 60;

/// Grace period between a piece grounding and it being committed to the board.
pub const LOCK_DELAY_MS: u64 = 500;

/// Line-clear rewards indexed by rows cleared in one lock.
/// Multiplied by the current level on award.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Flat per-cell soft drop bonus and per-row hard drop bonus (level-independent).
pub const SOFT_DROP_SCORE: u32 = 1;
pub const HARD_DROP_SCORE: u32 = 2;

/// The seven polyomino kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds, in bag-fill order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];
}

/// A requested rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// Quarter turn clockwise.
    Cw,
    /// Quarter turn counter-clockwise.
    Ccw,
    /// Half turn (180 degrees).
    Half,
}

/// Discrete commands accepted by the engine.
///
/// Input layers map device events onto these; the engine knows nothing about
/// key codes or repeat timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    SoftDrop,
    HardDrop,
    RotateCw,
    RotateCcw,
    Rotate180,
    Hold,
    PauseToggle,
    Reset,
}

/// A board cell: empty, or the kind of the piece locked there.
///
/// The kind carries no semantics beyond rendering color.
pub type Cell = Option<PieceKind>;
