//! Pieces tests - shapes, spawn placement and SRS rotation with wall kicks

use tetris_engine::core::shapes::{catalog, definition, max_clear_count};
use tetris_engine::core::{
    kicks, shape_at, try_rotate, ActivePiece, Board, KickFamily, Transition, WallKickCache,
};
use tetris_engine::types::{PieceKind, Rotation, RotationDirection};

// ============== Shape Tests ==============

#[test]
fn test_i_piece_shapes() {
    let north = shape_at(PieceKind::I, Rotation::North);
    assert_eq!(north.cells().as_slice(), &[(0, 1), (1, 1), (2, 1), (3, 1)]);

    let east = shape_at(PieceKind::I, Rotation::East);
    assert_eq!(east.cells().as_slice(), &[(2, 0), (2, 1), (2, 2), (2, 3)]);

    let south = shape_at(PieceKind::I, Rotation::South);
    assert_eq!(south.cells().as_slice(), &[(0, 2), (1, 2), (2, 2), (3, 2)]);

    let west = shape_at(PieceKind::I, Rotation::West);
    assert_eq!(west.cells().as_slice(), &[(1, 0), (1, 1), (1, 2), (1, 3)]);
}

#[test]
fn test_o_piece_shapes() {
    let north = shape_at(PieceKind::O, Rotation::North);
    assert_eq!(north.cells().as_slice(), &[(1, 1), (2, 1), (1, 2), (2, 2)]);

    for rotation in Rotation::ALL {
        assert_eq!(shape_at(PieceKind::O, rotation), north);
    }
    assert!(definition(PieceKind::O).is_rotation_symmetric());
}

#[test]
fn test_t_piece_shapes() {
    let north = shape_at(PieceKind::T, Rotation::North);
    assert_eq!(north.cells().as_slice(), &[(1, 0), (0, 1), (1, 1), (2, 1)]);

    let east = shape_at(PieceKind::T, Rotation::East);
    assert_eq!(east.cells().as_slice(), &[(1, 0), (1, 1), (2, 1), (1, 2)]);

    let south = shape_at(PieceKind::T, Rotation::South);
    assert_eq!(south.cells().as_slice(), &[(0, 1), (1, 1), (2, 1), (1, 2)]);

    let west = shape_at(PieceKind::T, Rotation::West);
    assert_eq!(west.cells().as_slice(), &[(1, 0), (0, 1), (1, 1), (1, 2)]);
}

#[test]
fn test_every_shape_has_four_cells() {
    for def in catalog() {
        for rotation in Rotation::ALL {
            assert_eq!(def.at(rotation).cells().len(), 4, "{:?} {:?}", def.kind, rotation);
        }
    }
}

#[test]
fn test_matrix_sizes() {
    assert_eq!(shape_at(PieceKind::I, Rotation::North).size(), 4);
    assert_eq!(shape_at(PieceKind::O, Rotation::North).size(), 4);
    for kind in [PieceKind::J, PieceKind::L, PieceKind::S, PieceKind::T, PieceKind::Z] {
        assert_eq!(shape_at(kind, Rotation::North).size(), 3);
    }
}

#[test]
fn test_max_clear_count_is_four() {
    assert_eq!(max_clear_count(), 4);
}

// ============== Spawn Tests ==============

#[test]
fn test_spawn_centres_piece() {
    // x = width / 2 - (leftmost + rightmost) / 2
    let cases = [
        (PieceKind::I, 4, -1),
        (PieceKind::J, 4, 0),
        (PieceKind::L, 4, 0),
        (PieceKind::O, 4, -1),
        (PieceKind::S, 4, 0),
        (PieceKind::T, 4, 0),
        (PieceKind::Z, 4, 0),
    ];
    for (kind, x, y) in cases {
        let piece = ActivePiece::spawn(kind, 10);
        assert_eq!((piece.x, piece.y), (x, y), "{:?}", kind);
        assert_eq!(piece.rotation, Rotation::North);
    }
}

#[test]
fn test_spawn_on_wider_grid() {
    let piece = ActivePiece::spawn(PieceKind::T, 16);
    assert_eq!(piece.x, 7);
}

// ============== Kick Table Tests ==============

#[test]
fn test_kick_families() {
    assert_eq!(KickFamily::of(PieceKind::I), KickFamily::Elongated);
    assert_eq!(KickFamily::of(PieceKind::O), KickFamily::Fixed);
    assert_eq!(KickFamily::of(PieceKind::T), KickFamily::Standard);
}

#[test]
fn test_jlstz_kicks_0_to_r() {
    let t = Transition::new(Rotation::North, Rotation::East);
    assert_eq!(t.to_string(), "0->R");
    assert_eq!(
        kicks(PieceKind::T, t),
        &[(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)]
    );
    assert_eq!(kicks(PieceKind::S, t), kicks(PieceKind::Z, t));
}

#[test]
fn test_i_kicks_r_to_2() {
    let t = Transition::new(Rotation::East, Rotation::South);
    assert_eq!(t.to_string(), "R->2");
    assert_eq!(
        kicks(PieceKind::I, t),
        &[(0, 0), (-1, 0), (2, 0), (-1, 2), (2, -1)]
    );
}

#[test]
fn test_o_and_half_turns_have_no_kicks() {
    let quarter = Transition::new(Rotation::North, Rotation::East);
    assert!(kicks(PieceKind::O, quarter).is_empty());

    let half = Transition::new(Rotation::North, Rotation::South);
    assert!(kicks(PieceKind::T, half).is_empty());
}

// ============== Rotation Tests ==============

#[test]
fn test_rotate_in_open_space() {
    let board = Board::new(10, 20);
    let piece = ActivePiece {
        kind: PieceKind::J,
        rotation: Rotation::North,
        x: 4,
        y: 8,
    };
    let mut cache = WallKickCache::new();

    let outcome = try_rotate(&piece, RotationDirection::Clockwise, &mut cache, |p| {
        p.is_valid(&board)
    })
    .unwrap();

    assert_eq!(outcome.piece.rotation, Rotation::East);
    assert_eq!((outcome.piece.x, outcome.piece.y), (4, 8));
    assert_eq!(outcome.offset, (0, 0));
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_rotate_full_cycle() {
    let board = Board::new(10, 20);
    let mut piece = ActivePiece {
        kind: PieceKind::L,
        rotation: Rotation::North,
        x: 4,
        y: 8,
    };
    let mut cache = WallKickCache::new();

    for expected in [Rotation::West, Rotation::South, Rotation::East, Rotation::North] {
        let outcome = try_rotate(&piece, RotationDirection::CounterClockwise, &mut cache, |p| {
            p.is_valid(&board)
        })
        .unwrap();
        piece = outcome.piece;
        assert_eq!(piece.rotation, expected);
    }
}

#[test]
fn test_i_wall_kick_off_right_wall() {
    let board = Board::new(10, 20);
    // Vertical I hugging the right wall (matrix column 2 at x = 9)
    let piece = ActivePiece {
        kind: PieceKind::I,
        rotation: Rotation::East,
        x: 7,
        y: 5,
    };
    let mut cache = WallKickCache::new();

    let outcome = try_rotate(&piece, RotationDirection::Clockwise, &mut cache, |p| {
        p.is_valid(&board)
    })
    .unwrap();

    // R->2 trials: (0,0) spans x 7..=10, (-1,0) spans 6..=9
    assert_eq!(outcome.offset, (-1, 0));
    assert_eq!(outcome.piece.rotation, Rotation::South);
    assert_eq!(outcome.piece.x, 6);
}

#[test]
fn test_rotate_blocked_everywhere() {
    let mut board = Board::new(10, 20);
    for y in 0..20 {
        for x in 0..10 {
            board.set(x, y, Some(PieceKind::Z));
        }
    }
    for (x, y) in [(5, 10), (4, 11), (5, 11), (6, 11)] {
        board.set(x, y, None);
    }
    let piece = ActivePiece {
        kind: PieceKind::T,
        rotation: Rotation::North,
        x: 4,
        y: 10,
    };
    assert!(piece.is_valid(&board));
    let mut cache = WallKickCache::new();

    let outcome = try_rotate(&piece, RotationDirection::Clockwise, &mut cache, |p| {
        p.is_valid(&board)
    });

    assert!(outcome.is_none());
    assert!(cache.is_empty());
}
