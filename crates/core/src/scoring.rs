//! Scoring - points per lock indexed by rows cleared at once
//!
//! The table is shared data: the default is a `'static` slice and a custom
//! table is stored once per game. Score itself only ever grows.

use std::borrow::Cow;

use crate::types::DEFAULT_LINE_SCORES;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreTable {
    points: Cow<'static, [u32]>,
}

impl ScoreTable {
    pub fn new(points: Vec<u32>) -> Self {
        Self {
            points: Cow::Owned(points),
        }
    }

    /// Points for clearing `lines` rows in one lock
    ///
    /// Counts beyond the table (only reachable on a hand-prepared board)
    /// score as the last entry.
    pub fn points_for(&self, lines: usize) -> u32 {
        self.points
            .get(lines)
            .or_else(|| self.points.last())
            .copied()
            .unwrap_or(0)
    }

    /// True when every clear count `0..=max_clear` has an entry
    pub fn covers(&self, max_clear: usize) -> bool {
        self.points.len() > max_clear
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.points
    }
}

impl Default for ScoreTable {
    fn default() -> Self {
        Self {
            points: Cow::Borrowed(&DEFAULT_LINE_SCORES),
        }
    }
}
