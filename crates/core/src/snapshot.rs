//! Serializable read-only view of a game for renderers and logs

use serde::Serialize;

use crate::piece::ActivePiece;
use crate::types::{GamePhase, PieceKind, Rotation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PieceSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i32,
    pub y: i32,
}

impl From<ActivePiece> for PieceSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GameSnapshot {
    pub width: usize,
    pub height: usize,
    /// Projected grid as cell codes: 0 empty, 1 active, 2.. locked kind
    pub board: Vec<Vec<u8>>,
    pub current: Option<PieceSnapshot>,
    pub next: Option<PieceSnapshot>,
    pub ghost_y: Option<i32>,
    pub score: u32,
    pub phase: GamePhase,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        !self.game_over
    }
}
