//! SRS wall kick tables
//!
//! Each rotation transition has an ordered list of `(dx, dy)` trials. The
//! first trial is always `(0, 0)`. Offsets are applied directly to the piece
//! position with `y` growing downward.
//! Reference: https://tetris.wiki/Super_Rotation_System

use std::fmt;

use crate::types::{PieceKind, Rotation};

/// Positional correction tried during a rotation
pub type KickOffset = (i8, i8);

/// Kick data for the eight quarter-turn transitions
pub type KickTable = [[KickOffset; 5]; 8];

/// Which kick table a piece kind uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KickFamily {
    /// J, L, S, T, Z
    Standard,
    /// I
    Elongated,
    /// O never rotates
    Fixed,
}

impl KickFamily {
    pub fn of(kind: PieceKind) -> Self {
        match kind {
            PieceKind::I => KickFamily::Elongated,
            PieceKind::O => KickFamily::Fixed,
            PieceKind::J | PieceKind::L | PieceKind::S | PieceKind::T | PieceKind::Z => {
                KickFamily::Standard
            }
        }
    }
}

/// A rotation transition, displayed as `"<from>-><to>"` (e.g. `0->R`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Transition {
    pub from: Rotation,
    pub to: Rotation,
}

impl Transition {
    pub fn new(from: Rotation, to: Rotation) -> Self {
        Self { from, to }
    }

    /// Row of the kick table for this transition; `None` unless it is a quarter turn
    fn table_index(&self) -> Option<usize> {
        use Rotation::*;
        match (self.from, self.to) {
            (North, East) => Some(0),
            (East, North) => Some(1),
            (East, South) => Some(2),
            (South, East) => Some(3),
            (South, West) => Some(4),
            (West, South) => Some(5),
            (West, North) => Some(6),
            (North, West) => Some(7),
            _ => None,
        }
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.from.label(), self.to.label())
    }
}

/// Ordered kick trials for a piece kind and transition
///
/// Returns an empty slice for kinds that never rotate and for transitions
/// that are not a quarter turn.
pub fn kicks(kind: PieceKind, transition: Transition) -> &'static [KickOffset] {
    let table = match KickFamily::of(kind) {
        KickFamily::Standard => &JLSTZ_KICKS,
        KickFamily::Elongated => &I_KICKS,
        KickFamily::Fixed => return &[],
    };
    match transition.table_index() {
        Some(i) => &table[i][..],
        None => &[],
    }
}

/// JLSTZ kick table (shared by J, L, S, T, Z)
const JLSTZ_KICKS: KickTable = [
    // 0->R
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
    // R->0
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    // R->2
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    // 2->R
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
    // 2->L
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
    // L->2
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
    // L->0
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
    // 0->L
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
];

/// I piece kick table
const I_KICKS: KickTable = [
    // 0->R
    [(0, 0), (-2, 0), (1, 0), (-2, -1), (1, 2)],
    // R->0
    [(0, 0), (2, 0), (-1, 0), (2, 1), (-1, -2)],
    // R->2
    [(0, 0), (-1, 0), (2, 0), (-1, 2), (2, -1)],
    // 2->R
    [(0, 0), (1, 0), (-2, 0), (1, -2), (-2, 1)],
    // 2->L
    [(0, 0), (2, 0), (-1, 0), (2, 1), (-1, -2)],
    // L->2
    [(0, 0), (-2, 0), (1, 0), (-2, -1), (1, 2)],
    // L->0
    [(0, 0), (1, 0), (-2, 0), (1, -2), (-2, 1)],
    // 0->L
    [(0, 0), (-1, 0), (2, 0), (-1, 2), (2, -1)],
];
