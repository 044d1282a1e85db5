//! Engine configuration and its construction-time validation

use crate::error::ConfigError;
use crate::piece::ActivePiece;
use crate::scoring::ScoreTable;
use crate::shapes::{catalog, max_clear_count};
use crate::types::{DEFAULT_HEIGHT, DEFAULT_WIDTH};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub width: usize,
    pub height: usize,
    pub line_scores: ScoreTable,
    /// Bag seed; `None` seeds from OS entropy
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            line_scores: ScoreTable::default(),
            seed: None,
        }
    }
}

impl EngineConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_line_scores(mut self, points: Vec<u32>) -> Self {
        self.line_scores = ScoreTable::new(points);
        self
    }

    /// Reject configurations that would corrupt state later
    ///
    /// - both dimensions positive, within `i32` and with an addressable area
    /// - every kind, centre-spawned at rotation 0, stays inside the columns
    ///   and its occupied rows fit in the height
    /// - the score table has an entry for every clear count a lock can produce
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if self.height == 0 {
            return Err(ConfigError::ZeroHeight);
        }
        // Coordinates are i32 and the board is one flat buffer
        let max_side = i32::MAX as usize;
        if self.width > max_side
            || self.height > max_side
            || self.width.checked_mul(self.height).is_none()
        {
            return Err(ConfigError::TooLarge {
                width: self.width,
                height: self.height,
            });
        }

        for def in catalog() {
            let spawn = ActivePiece::spawn(def.kind, self.width);
            if spawn
                .cells()
                .any(|(x, _)| x < 0 || x as usize >= self.width)
            {
                return Err(ConfigError::TooNarrow {
                    kind: def.kind,
                    width: self.width,
                });
            }
            if spawn.shape().vertical_extent() > self.height {
                return Err(ConfigError::TooShort {
                    kind: def.kind,
                    height: self.height,
                });
            }
        }

        let max_clear = max_clear_count();
        if !self.line_scores.covers(max_clear) {
            return Err(ConfigError::ScoreTableTooShort {
                len: self.line_scores.len(),
                max_clear,
            });
        }

        Ok(())
    }
}
