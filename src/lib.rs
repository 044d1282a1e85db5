//! Tetris engine (workspace facade crate).
//!
//! Exposes `tetris_engine::{core, types}` while the implementation lives in
//! dedicated crates under `crates/`, plus the scripted [`driver`] used by the
//! `tetris-engine` binary.

pub mod driver;

pub use tetris_engine_core as core;
pub use tetris_engine_types as types;
