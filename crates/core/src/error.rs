//! Construction errors
//!
//! Gameplay never fails; only a malformed configuration is rejected, and
//! only when the engine is built.

use crate::types::PieceKind;

#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone, Copy)]
pub enum ConfigError {
    #[error("grid width must be positive")]
    ZeroWidth,
    #[error("grid height must be positive")]
    ZeroHeight,
    #[error("grid {width}x{height} exceeds addressable size")]
    TooLarge { width: usize, height: usize },
    #[error("grid width {width} cannot centre-spawn piece {kind:?}")]
    TooNarrow { kind: PieceKind, width: usize },
    #[error("grid height {height} cannot fit piece {kind:?} at spawn")]
    TooShort { kind: PieceKind, height: usize },
    #[error("score table has {len} entries but a lock can clear up to {max_clear} rows")]
    ScoreTableTooShort { len: usize, max_clear: usize },
    #[error("board is {actual_width}x{actual_height}, expected {width}x{height}")]
    BoardMismatch {
        width: usize,
        height: usize,
        actual_width: usize,
        actual_height: usize,
    },
}
