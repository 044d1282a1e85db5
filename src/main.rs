//! Scripted engine runner (default binary).
//!
//! Usage: `tetris-engine [SCRIPT...]`
//!
//! Actions are read from the arguments, or from stdin when there are none.
//! Lock events go to `TETRIS_LOG_PATH` as JSON lines; the run report (actions
//! applied, lock events, final snapshot) is printed to stdout as JSON.

use std::io::Read;

use anyhow::{Context, Result};

use tetris_engine::core::GameState;
use tetris_engine::driver::{parse_script, run_script, DriverConfig, EventLog};

fn main() -> Result<()> {
    let config = DriverConfig::from_env();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let script = if args.is_empty() {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading script from stdin")?;
        buf
    } else {
        args.join(" ")
    };

    let actions = parse_script(&script)?;
    let mut game = GameState::new(config.engine.clone()).context("invalid engine configuration")?;
    let report = run_script(&mut game, &actions);

    if let Some(path) = config.log_path.as_deref() {
        let mut log = EventLog::open(path)?;
        for event in &report.events {
            log.write(event)?;
        }
    }

    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}
