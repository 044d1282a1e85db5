//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the rules and state of a falling-block puzzle game.
//! It has **zero dependencies** on rendering, input, or timing, making it:
//!
//! - **Deterministic**: Same seed produces identical piece sequences
//! - **Testable**: Every rule can be driven directly through [`GameState`]
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`shapes`]: Seven piece kinds, four rotation matrices each
//! - [`kicks`]: SRS wall kick offset tables
//! - [`bag`]: 7-bag randomizer
//! - [`board`]: Locked cells, collision checks and line clearing
//! - [`piece`]: Active piece and spawn placement
//! - [`rotation`]: Kick search with the per-piece wall-kick cache
//! - [`scoring`]: Points per cleared-line count
//! - [`grid`]: Render-ready projection of board plus active piece
//! - [`game_state`]: The tick/move state machine tying it all together
//!
//! # Game Rules
//!
//! - **7-Bag Randomizer**: each run of seven draws contains every kind once
//! - **SRS Rotation**: wall kicks for all pieces except O
//! - **Immediate Lock**: a piece locks on the gravity step where it cannot fall
//! - **Hard Drop**: lands and locks in a single call
//! - **Scoring**: 0/100/300/500/800 for 0-4 lines by default
//!
//! # Example
//!
//! ```
//! use tetris_engine_core::{EngineConfig, GameState};
//! use tetris_engine_types::MoveDirection;
//!
//! let mut game = GameState::new(EngineConfig::default().with_seed(12345)).unwrap();
//!
//! game.move_piece(MoveDirection::Left);
//! game.rotate_clockwise();
//! game.move_piece(MoveDirection::Up);
//!
//! assert!(!game.is_game_over());
//! assert_eq!(game.score(), 0);
//! ```
//!
//! # Timing
//!
//! There is no clock here. The driver calls
//! [`GameState::tick`](game_state::GameState::tick) whenever gravity should
//! apply, and every other operation is a synchronous command.

pub mod bag;
pub mod board;
pub mod config;
pub mod error;
pub mod game_state;
pub mod grid;
pub mod kicks;
pub mod piece;
pub mod rotation;
pub mod scoring;
pub mod shapes;
pub mod snapshot;

pub use tetris_engine_types as types;

// Re-export commonly used types for convenience
pub use bag::Bag;
pub use board::Board;
pub use config::EngineConfig;
pub use error::ConfigError;
pub use game_state::GameState;
pub use grid::Grid;
pub use kicks::{kicks, KickFamily, KickOffset, Transition};
pub use piece::ActivePiece;
pub use rotation::{try_rotate, RotationOutcome, WallKickCache};
pub use scoring::ScoreTable;
pub use shapes::{shape_at, ShapeMatrix};
pub use snapshot::{GameSnapshot, PieceSnapshot};
