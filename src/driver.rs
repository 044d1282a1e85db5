//! Scripted external driver.
//!
//! The engine has no clock and no input handling; this module plays the
//! role of the caller. It turns a whitespace separated script of action
//! words into engine calls, collects the lock events and writes them as
//! JSON lines.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::Serialize;

use crate::core::{EngineConfig, GameSnapshot, GameState};
use crate::types::{GameAction, LockEvent, DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// Driver configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DriverConfig {
    pub engine: EngineConfig,
    pub log_path: Option<String>,
}

impl DriverConfig {
    /// Create from environment variables
    ///
    /// `TETRIS_WIDTH`, `TETRIS_HEIGHT`, `TETRIS_SEED`, `TETRIS_LOG_PATH`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`DriverConfig::from_env`] with an explicit variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let width = lookup("TETRIS_WIDTH")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_WIDTH);
        let height = lookup("TETRIS_HEIGHT")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_HEIGHT);
        let seed = lookup("TETRIS_SEED").and_then(|s| s.trim().parse().ok());

        let log_path = lookup("TETRIS_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        let mut engine = EngineConfig::default().with_size(width, height);
        engine.seed = seed;

        Self { engine, log_path }
    }
}

/// Parse a script of action words
///
/// Accepts action names (`tick`, `moveLeft`, `hardDrop`, ...) and the
/// direction strings `up`, `down`, `left`, `right`.
pub fn parse_script(script: &str) -> Result<Vec<GameAction>> {
    script
        .split_whitespace()
        .map(|word| {
            GameAction::from_str(word).ok_or_else(|| anyhow!("unknown action: {}", word))
        })
        .collect()
}

/// Outcome of a scripted run
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Actions handed to the engine before the game ended or the script ran out
    pub applied: usize,
    pub events: Vec<LockEvent>,
    pub snapshot: GameSnapshot,
}

/// Apply `actions` in order, stopping once the game is over
pub fn run_script(game: &mut GameState, actions: &[GameAction]) -> RunReport {
    let mut applied = 0;
    let mut events = Vec::new();

    for &action in actions {
        if game.is_game_over() {
            break;
        }
        game.apply_action(action);
        applied += 1;

        if let Some(event) = game.take_last_event() {
            events.push(event);
        }
    }

    RunReport {
        applied,
        events,
        snapshot: game.snapshot(),
    }
}

/// Append-only JSON lines log of lock events
pub struct EventLog {
    file: File,
    buf: Vec<u8>,
}

impl EventLog {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening event log {}", path.display()))?;

        Ok(Self {
            file,
            buf: Vec::with_capacity(256),
        })
    }

    pub fn write(&mut self, event: &LockEvent) -> Result<()> {
        self.buf.clear();
        serde_json::to_writer(&mut self.buf, event)?;
        self.buf.push(b'\n');
        self.file.write_all(&self.buf)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_config_defaults_without_vars() {
        let config = DriverConfig::from_lookup(lookup(&[]));
        assert_eq!(config, DriverConfig::default());
    }

    #[test]
    fn test_config_reads_vars() {
        let config = DriverConfig::from_lookup(lookup(&[
            ("TETRIS_WIDTH", "12"),
            ("TETRIS_HEIGHT", " 24 "),
            ("TETRIS_SEED", "99"),
            ("TETRIS_LOG_PATH", "/tmp/events.jsonl"),
        ]));

        assert_eq!(config.engine.width, 12);
        assert_eq!(config.engine.height, 24);
        assert_eq!(config.engine.seed, Some(99));
        assert_eq!(config.log_path.as_deref(), Some("/tmp/events.jsonl"));
    }

    #[test]
    fn test_config_ignores_bad_values() {
        let config = DriverConfig::from_lookup(lookup(&[
            ("TETRIS_WIDTH", "wide"),
            ("TETRIS_SEED", "-1"),
            ("TETRIS_LOG_PATH", "   "),
        ]));

        assert_eq!(config.engine.width, DEFAULT_WIDTH);
        assert_eq!(config.engine.seed, None);
        assert_eq!(config.log_path, None);
    }

    #[test]
    fn test_parse_script() {
        let actions = parse_script("left  right\nup down tick rotateCw ccw").unwrap();
        assert_eq!(
            actions,
            vec![
                GameAction::MoveLeft,
                GameAction::MoveRight,
                GameAction::HardDrop,
                GameAction::SoftDrop,
                GameAction::Tick,
                GameAction::RotateCw,
                GameAction::RotateCcw,
            ]
        );

        let err = parse_script("left jump").unwrap_err();
        assert!(err.to_string().contains("jump"));
    }

    #[test]
    fn test_run_script_collects_lock_events() {
        let mut game = GameState::new(EngineConfig::default().with_seed(7)).unwrap();
        let actions = vec![GameAction::HardDrop; 3];

        let report = run_script(&mut game, &actions);

        assert_eq!(report.applied, 3);
        assert_eq!(report.events.len(), 3);
        assert!(report.events.iter().all(|e| !e.game_over));
        assert_eq!(report.snapshot.score, game.score());
    }

    #[test]
    fn test_run_script_stops_at_game_over() {
        let mut game = GameState::new(EngineConfig::default().with_seed(7)).unwrap();
        let actions = vec![GameAction::HardDrop; 200];

        let report = run_script(&mut game, &actions);

        assert!(game.is_game_over());
        assert!(report.applied < actions.len());
        assert!(report.events.last().is_some_and(|e| e.game_over));
        assert!(!report.snapshot.playable());
    }
}
