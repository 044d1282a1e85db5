//! Rotation with wall kicks and the per-piece kick cache
//!
//! A rotation request walks the kick trials of the transition in table
//! order. Trials already consumed at the same position (same kind, same
//! `(x, y)`, same transition, same offset) are skipped; the first remaining
//! trial that passes validity is committed and recorded. The cache lives for
//! exactly one piece and is cleared when the next piece is promoted.

use rustc_hash::FxHashSet;

use crate::kicks::{kicks, KickOffset, Transition};
use crate::piece::ActivePiece;
use crate::shapes::definition;
use crate::types::{PieceKind, RotationDirection};

/// Identity of one kick use: where it was tried from and what it applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KickKey {
    pub kind: PieceKind,
    pub x: i32,
    pub y: i32,
    pub transition: Transition,
    pub offset: KickOffset,
}

/// Kicks already consumed by the current piece
#[derive(Debug, Clone, Default)]
pub struct WallKickCache {
    used: FxHashSet<KickKey>,
}

impl WallKickCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &KickKey) -> bool {
        self.used.contains(key)
    }

    pub fn record(&mut self, key: KickKey) {
        self.used.insert(key);
    }

    pub fn clear(&mut self) {
        self.used.clear();
    }

    pub fn len(&self) -> usize {
        self.used.len()
    }

    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }
}

/// A committed rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationOutcome {
    pub piece: ActivePiece,
    pub transition: Transition,
    pub offset: KickOffset,
}

/// Try to rotate `piece` one quarter turn in `direction`
///
/// `is_valid` decides whether a candidate placement is legal. Returns `None`
/// when the kind is rotation-symmetric or every trial is cached or invalid;
/// the cache is only touched on success.
pub fn try_rotate(
    piece: &ActivePiece,
    direction: RotationDirection,
    cache: &mut WallKickCache,
    is_valid: impl Fn(&ActivePiece) -> bool,
) -> Option<RotationOutcome> {
    if definition(piece.kind).is_rotation_symmetric() {
        return None;
    }

    let target = piece.rotation.rotate(direction);
    let transition = Transition::new(piece.rotation, target);

    for &offset in kicks(piece.kind, transition) {
        let key = KickKey {
            kind: piece.kind,
            x: piece.x,
            y: piece.y,
            transition,
            offset,
        };
        if cache.contains(&key) {
            continue;
        }

        let candidate = ActivePiece {
            rotation: target,
            x: piece.x + offset.0 as i32,
            y: piece.y + offset.1 as i32,
            ..*piece
        };
        if is_valid(&candidate) {
            cache.record(key);
            return Some(RotationOutcome {
                piece: candidate,
                transition,
                offset,
            });
        }
    }

    None
}
