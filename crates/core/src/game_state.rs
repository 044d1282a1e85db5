//! Game state module - the tick/move state machine
//!
//! This module ties together all core components: board, bag, rotation
//! and scoring. Every public operation runs to completion before returning
//! and ends by re-projecting the grid, so the readable state is always
//! consistent. Rejected moves and rotations are ordinary no-ops; the only
//! terminal condition is a freshly promoted piece that does not fit.
//!
//! Timing is not handled here: the external driver decides when to call
//! [`GameState::tick`].

use crate::bag::Bag;
use crate::board::Board;
use crate::config::EngineConfig;
use crate::error::ConfigError;
use crate::grid::Grid;
use crate::piece::ActivePiece;
use crate::rotation::{try_rotate, WallKickCache};
use crate::scoring::ScoreTable;
use crate::snapshot::{GameSnapshot, PieceSnapshot};
use crate::types::*;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    current: Option<ActivePiece>,
    next: Option<ActivePiece>,
    bag: Bag,
    kick_cache: WallKickCache,
    line_scores: ScoreTable,
    score: u32,
    phase: GamePhase,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
    /// Derived view, rebuilt at the end of every mutating call.
    grid: Grid,
}

impl GameState {
    /// Create a game on an empty board and spawn the first piece
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let board = Board::new(config.width, config.height);
        Self::with_board(config, board)
    }

    /// Create a game on a prepared board
    ///
    /// If the first piece does not fit, the game starts in the game-over phase.
    pub fn with_board(config: EngineConfig, board: Board) -> Result<Self, ConfigError> {
        config.validate()?;
        if board.width() != config.width || board.height() != config.height {
            return Err(ConfigError::BoardMismatch {
                width: config.width,
                height: config.height,
                actual_width: board.width(),
                actual_height: board.height(),
            });
        }

        let bag = match config.seed {
            Some(seed) => Bag::new(seed),
            None => Bag::from_entropy(),
        };
        let grid = Grid::project(&board, None);

        let mut state = Self {
            board,
            current: None,
            next: None,
            bag,
            kick_cache: WallKickCache::new(),
            line_scores: config.line_scores,
            score: 0,
            phase: GamePhase::Falling,
            last_event: None,
            grid,
        };
        state.spawn_first();
        state.project();
        Ok(state)
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn current_piece(&self) -> Option<ActivePiece> {
        self.current
    }

    pub fn next_piece(&self) -> Option<ActivePiece> {
        self.next
    }

    /// Persisted locked cells
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Render-ready grid: locked cells plus the active overlay
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn line_scores(&self) -> &ScoreTable {
        &self.line_scores
    }

    pub fn kick_cache(&self) -> &WallKickCache {
        &self.kick_cache
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            width: self.grid.width(),
            height: self.grid.height(),
            board: self.grid.to_codes(),
            current: self.current.map(PieceSnapshot::from),
            next: self.next.map(PieceSnapshot::from),
            ghost_y: self.ghost_y(),
            score: self.score,
            phase: self.phase,
            game_over: self.is_game_over(),
        }
    }

    /// Would the current piece fit at `(x, y)` with `rotation`?
    ///
    /// Always false when there is no current piece.
    pub fn is_valid(&self, x: i32, y: i32, rotation: Rotation) -> bool {
        self.current.is_some_and(|piece| {
            ActivePiece {
                rotation,
                x,
                y,
                ..piece
            }
            .is_valid(&self.board)
        })
    }

    /// Row the current piece would land on if hard-dropped
    pub fn ghost_y(&self) -> Option<i32> {
        let mut landing = self.current?;
        while landing.moved(0, 1).is_valid(&self.board) {
            landing = landing.moved(0, 1);
        }
        Some(landing.y)
    }

    /// Gravity step: fall one row, or lock and advance when blocked
    ///
    /// Returns false only when the game is frozen.
    pub fn tick(&mut self) -> bool {
        if self.playable_piece().is_none() {
            return false;
        }

        if !self.try_shift(0, 1) {
            self.lock_and_advance();
        }

        self.project();
        true
    }

    /// Apply a move command; returns whether the state changed
    ///
    /// - `Up`: hard drop, lands and locks within this call
    /// - `Down`: soft drop, one row at most and never locks
    /// - `Left` / `Right`: one column at most
    pub fn move_piece(&mut self, direction: MoveDirection) -> bool {
        if self.playable_piece().is_none() {
            return false;
        }

        let changed = match direction {
            MoveDirection::Up => self.hard_drop(),
            MoveDirection::Down => self.try_shift(0, 1),
            MoveDirection::Left => self.try_shift(-1, 0),
            MoveDirection::Right => self.try_shift(1, 0),
        };

        self.project();
        changed
    }

    pub fn move_left(&mut self) -> bool {
        self.move_piece(MoveDirection::Left)
    }

    pub fn move_right(&mut self) -> bool {
        self.move_piece(MoveDirection::Right)
    }

    pub fn move_down(&mut self) -> bool {
        self.move_piece(MoveDirection::Down)
    }

    pub fn move_up(&mut self) -> bool {
        self.move_piece(MoveDirection::Up)
    }

    pub fn rotate_clockwise(&mut self) -> bool {
        self.rotate(RotationDirection::Clockwise)
    }

    pub fn rotate_counter_clockwise(&mut self) -> bool {
        self.rotate(RotationDirection::CounterClockwise)
    }

    /// Rotate with wall kicks; returns whether the piece rotated
    pub fn rotate(&mut self, direction: RotationDirection) -> bool {
        let Some(piece) = self.playable_piece() else {
            return false;
        };

        let board = &self.board;
        let outcome = try_rotate(&piece, direction, &mut self.kick_cache, |candidate| {
            candidate.is_valid(board)
        });

        let rotated = match outcome {
            Some(outcome) => {
                self.current = Some(outcome.piece);
                true
            }
            None => false,
        };

        self.project();
        rotated
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Tick => self.tick(),
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::SoftDrop => self.move_down(),
            GameAction::HardDrop => self.move_up(),
            GameAction::RotateCw => self.rotate_clockwise(),
            GameAction::RotateCcw => self.rotate_counter_clockwise(),
        }
    }

    /// Current piece unless the game is frozen
    fn playable_piece(&self) -> Option<ActivePiece> {
        if self.is_game_over() {
            return None;
        }
        self.current
    }

    fn draw_piece(&mut self) -> ActivePiece {
        let kind = self.bag.draw();
        ActivePiece::spawn(kind, self.board.width())
    }

    fn spawn_first(&mut self) {
        let current = self.draw_piece();
        self.current = Some(current);
        if self.next.is_none() {
            self.next = Some(self.draw_piece());
        }
        self.kick_cache.clear();

        if !current.is_valid(&self.board) {
            self.phase = GamePhase::GameOver;
        }
    }

    /// Promote the lookahead piece, draw its replacement, reset the kick cache
    fn promote_next(&mut self) {
        let promoted = match self.next.take() {
            Some(piece) => piece,
            None => self.draw_piece(),
        };
        self.current = Some(promoted);
        self.next = Some(self.draw_piece());
        self.kick_cache.clear();
    }

    /// Move the current piece if the target fits
    fn try_shift(&mut self, dx: i32, dy: i32) -> bool {
        let Some(piece) = self.playable_piece() else {
            return false;
        };

        let moved = piece.moved(dx, dy);
        if moved.is_valid(&self.board) {
            self.current = Some(moved);
            return true;
        }

        false
    }

    /// Descend until blocked, then lock; completes in one call
    fn hard_drop(&mut self) -> bool {
        while self.try_shift(0, 1) {}
        self.lock_and_advance();
        true
    }

    /// Lock, clear rows, promote the next piece and check the spawn
    fn lock_and_advance(&mut self) {
        let Some(piece) = self.current else {
            return;
        };

        self.phase = GamePhase::Locking;
        self.lock();
        let (lines_cleared, score_delta) = self.clear_lines();
        self.promote_next();

        let spawned = self
            .current
            .is_some_and(|next| next.is_valid(&self.board));
        self.phase = if spawned {
            GamePhase::Falling
        } else {
            GamePhase::GameOver
        };

        self.last_event = Some(LockEvent {
            kind: piece.kind,
            lines_cleared,
            score_delta,
            game_over: !spawned,
        });
    }

    /// Commit the current piece's cells to the board
    fn lock(&mut self) {
        if let Some(piece) = self.current {
            self.board
                .lock_shape(&piece.shape(), piece.x, piece.y, piece.kind);
        }
    }

    /// Remove full rows from the persisted board and score them
    ///
    /// Runs before re-projection, so overlay cells can never count as locked.
    fn clear_lines(&mut self) -> (u32, u32) {
        let cleared = self.board.clear_full_rows().len();
        if cleared == 0 {
            return (0, 0);
        }

        let points = self.line_scores.points_for(cleared);
        self.score = self.score.saturating_add(points);
        (cleared as u32, points)
    }

    fn project(&mut self) {
        self.grid.reproject(&self.board, self.current.as_ref());
    }
}
