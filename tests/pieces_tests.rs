//! Pieces tests - shapes, rotation transforms, and kick resolution.

use gridfall::core::pieces::{kicks_for, PieceShape, SPAWN_X, SPAWN_Y};
use gridfall::core::{rotate, spawn_shape, try_rotate, Board};
use gridfall::types::{PieceKind, Turn, BOARD_COLS};

fn sorted(mut shape: PieceShape) -> PieceShape {
    shape.sort_unstable();
    shape
}

#[test]
fn test_every_shape_has_four_cells_in_frame() {
    for kind in PieceKind::ALL {
        let shape = spawn_shape(kind);
        for (x, y) in shape {
            assert!((0..4).contains(&x), "kind {:?} x {}", kind, x);
            assert!((0..4).contains(&y), "kind {:?} y {}", kind, y);
        }
        // No duplicate cells.
        let s = sorted(shape);
        assert!(s.windows(2).all(|w| w[0] != w[1]), "kind {:?}", kind);
    }
}

#[test]
fn test_spawn_pose_fits_empty_board() {
    let board = Board::new();
    for kind in PieceKind::ALL {
        let shape = spawn_shape(kind);
        assert!(
            !board.collides(&shape, SPAWN_X, SPAWN_Y),
            "kind {:?} blocked at spawn",
            kind
        );
    }
}

#[test]
fn test_quarter_turn_order_four() {
    for kind in PieceKind::ALL {
        let original = spawn_shape(kind);
        let mut shape = original;
        for _ in 0..4 {
            shape = rotate(&shape, Turn::Cw);
        }
        assert_eq!(sorted(shape), sorted(original), "kind {:?}", kind);
    }
}

#[test]
fn test_ccw_inverts_cw() {
    for kind in PieceKind::ALL {
        let original = spawn_shape(kind);
        let shape = rotate(&rotate(&original, Turn::Cw), Turn::Ccw);
        assert_eq!(sorted(shape), sorted(original), "kind {:?}", kind);
    }
}

#[test]
fn test_half_turn_order_two() {
    for kind in PieceKind::ALL {
        let original = spawn_shape(kind);
        let shape = rotate(&rotate(&original, Turn::Half), Turn::Half);
        assert_eq!(sorted(shape), sorted(original), "kind {:?}", kind);
    }
}

#[test]
fn test_half_equals_two_quarter_turns() {
    for kind in PieceKind::ALL {
        let original = spawn_shape(kind);
        let two_cw = rotate(&rotate(&original, Turn::Cw), Turn::Cw);
        assert_eq!(
            sorted(rotate(&original, Turn::Half)),
            sorted(two_cw),
            "kind {:?}",
            kind
        );
    }
}

#[test]
fn test_o_never_rotates() {
    let board = Board::new();
    let shape = spawn_shape(PieceKind::O);
    for turn in [Turn::Cw, Turn::Ccw, Turn::Half] {
        let result = try_rotate(PieceKind::O, &shape, SPAWN_X, 5, turn, |s, x, y| {
            board.collides(s, x, y)
        });
        assert!(result.is_none());
    }
}

#[test]
fn test_rotation_against_left_wall_kicks_right() {
    let board = Board::new();
    // Vertical I near the left wall: the horizontal result would spill one
    // column past the wall in place.
    let vertical = rotate(&spawn_shape(PieceKind::I), Turn::Cw);
    let x = -1; // column 2 of the frame sits at board column 1

    let (_, kick) = try_rotate(PieceKind::I, &vertical, x, 5, Turn::Cw, |s, px, py| {
        board.collides(s, px, py)
    })
    .unwrap();
    assert_eq!(kick, (1, 0));
}

#[test]
fn test_kick_lists_per_kind() {
    assert_eq!(kicks_for(PieceKind::O), &[(0, 0)]);
    for kind in [PieceKind::I, PieceKind::T, PieceKind::S, PieceKind::Z] {
        let kicks = kicks_for(kind);
        assert_eq!(kicks.len(), 5);
        assert_eq!(kicks[0], (0, 0));
    }
}

#[test]
fn test_rotation_blocked_when_every_candidate_collides() {
    let mut board = Board::new();
    // Solid block everywhere below row 3.
    for y in 3..20 {
        for x in 0..BOARD_COLS as i8 {
            board.set(x, y, Some(PieceKind::L));
        }
    }

    let shape = spawn_shape(PieceKind::T);
    let result = try_rotate(PieceKind::T, &shape, 3, 4, Turn::Cw, |s, x, y| {
        board.collides(s, x, y)
    });
    assert!(result.is_none());
}
