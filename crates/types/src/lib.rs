//! Shared types for the falling-block engine
//!
//! Pure data with no game logic, usable by the engine core, the scripted
//! driver and any rendering/input layer sitting on top.
//!
//! # Coordinates
//!
//! - `x` grows left to right, `y` grows top to bottom.
//! - A piece position is the top-left corner of its bounding box and `y` may
//!   be negative while the piece is still entering from above the grid.
//!
//! # Examples
//!
//! ```
//! use tetris_engine_types::{GameAction, MoveDirection, PieceKind, Rotation, RotationDirection};
//!
//! // Parse a piece kind (case-insensitive)
//! assert_eq!(PieceKind::from_str("t"), Some(PieceKind::T));
//!
//! // Rotation indices wrap in both directions
//! assert_eq!(Rotation::North.rotate(RotationDirection::CounterClockwise), Rotation::West);
//! assert_eq!(Rotation::West.label(), "L");
//!
//! // Direction strings double as actions
//! assert_eq!(MoveDirection::from_str("up"), Some(MoveDirection::Up));
//! assert_eq!(GameAction::from_str("left"), Some(GameAction::MoveLeft));
//! ```

use serde::{Deserialize, Serialize};

/// Default grid width in cells
pub const DEFAULT_WIDTH: usize = 10;

/// Default grid height in cells
pub const DEFAULT_HEIGHT: usize = 20;

/// Default points per lock, indexed by the number of rows cleared at once.
///
/// - 0 lines: 0
/// - 1 line: 100
/// - 2 lines: 300
/// - 3 lines: 500
/// - 4 lines: 800
pub const DEFAULT_LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// The seven piece kinds
///
/// `I` is the elongated piece with its own kick table, `O` is the
/// rotation-symmetric square, the other five share the standard table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// Number of canonical piece kinds (one bag cycle)
    pub const COUNT: usize = 7;

    /// Every kind, in catalog order
    pub const ALL: [PieceKind; Self::COUNT] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_engine_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "o" => Some(PieceKind::O),
            "s" => Some(PieceKind::S),
            "t" => Some(PieceKind::T),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Uppercase single-letter name
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::J => "J",
            PieceKind::L => "L",
            PieceKind::O => "O",
            PieceKind::S => "S",
            PieceKind::T => "T",
            PieceKind::Z => "Z",
        }
    }

    /// Position in [`PieceKind::ALL`]
    pub fn index(&self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::J => 1,
            PieceKind::L => 2,
            PieceKind::O => 3,
            PieceKind::S => 4,
            PieceKind::T => 5,
            PieceKind::Z => 6,
        }
    }
}

/// Direction of a rotation request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotationDirection {
    Clockwise,
    CounterClockwise,
}

impl RotationDirection {
    /// Signed step applied to the rotation index (+1 / -1)
    pub fn step(&self) -> i8 {
        match self {
            RotationDirection::Clockwise => 1,
            RotationDirection::CounterClockwise => -1,
        }
    }
}

/// Rotation states following the Super Rotation System (SRS)
///
/// - **North**: spawn orientation, index 0, label `0`
/// - **East**: one step clockwise, index 1, label `R`
/// - **South**: two steps, index 2, label `2`
/// - **West**: one step counter-clockwise, index 3, label `L`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// All rotation states in index order
    pub const ALL: [Rotation; 4] = [
        Rotation::North,
        Rotation::East,
        Rotation::South,
        Rotation::West,
    ];

    /// Rotation index 0..=3
    pub fn index(&self) -> usize {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }

    /// Build from any index; wraps modulo 4
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 4]
    }

    /// Target state of a rotation request: `(current + step + 4) mod 4`
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_engine_types::{Rotation, RotationDirection};
    ///
    /// assert_eq!(Rotation::North.rotate(RotationDirection::Clockwise), Rotation::East);
    /// assert_eq!(Rotation::West.rotate(RotationDirection::Clockwise), Rotation::North);
    /// assert_eq!(Rotation::North.rotate(RotationDirection::CounterClockwise), Rotation::West);
    /// ```
    pub fn rotate(&self, direction: RotationDirection) -> Self {
        let next = (self.index() as i8 + direction.step() + 4) % 4;
        Self::from_index(next as usize)
    }

    /// Rotate clockwise (90°)
    pub fn rotate_cw(&self) -> Self {
        self.rotate(RotationDirection::Clockwise)
    }

    /// Rotate counter-clockwise (-90°)
    pub fn rotate_ccw(&self) -> Self {
        self.rotate(RotationDirection::CounterClockwise)
    }

    /// SRS state label used in kick-table transitions (`0`, `R`, `2`, `L`)
    pub fn label(&self) -> &'static str {
        match self {
            Rotation::North => "0",
            Rotation::East => "R",
            Rotation::South => "2",
            Rotation::West => "L",
        }
    }

    /// Parse rotation from string
    ///
    /// Accepts full names, compass letters or SRS labels (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "north" | "n" | "0" | "spawn" => Some(Rotation::North),
            "east" | "e" | "r" | "1" => Some(Rotation::East),
            "south" | "s" | "2" => Some(Rotation::South),
            "west" | "w" | "l" | "3" => Some(Rotation::West),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Rotation::North => "north",
            Rotation::East => "east",
            Rotation::South => "south",
            Rotation::West => "west",
        }
    }
}

/// Move command accepted by `GameState::move_piece`
///
/// - `Up`: hard drop (descend until blocked, then lock)
/// - `Down`: soft drop (at most one step, never locks)
/// - `Left` / `Right`: at most one lateral step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveDirection {
    Up,
    Down,
    Left,
    Right,
}

impl MoveDirection {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(MoveDirection::Up),
            "down" => Some(MoveDirection::Down),
            "left" => Some(MoveDirection::Left),
            "right" => Some(MoveDirection::Right),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MoveDirection::Up => "up",
            MoveDirection::Down => "down",
            MoveDirection::Left => "left",
            MoveDirection::Right => "right",
        }
    }
}

/// Game actions an external driver can apply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// One gravity step (locks when blocked)
    Tick,
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down without locking
    SoftDrop,
    /// Drop to the lowest valid position and lock
    HardDrop,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Rotate piece 90° counter-clockwise
    RotateCcw,
}

impl GameAction {
    /// Parse an action name or a move direction string
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_engine_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("up"), Some(GameAction::HardDrop));
    /// assert_eq!(GameAction::from_str("rotateCw"), Some(GameAction::RotateCw));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        if let Some(direction) = MoveDirection::from_str(s) {
            return Some(direction.into());
        }
        match s.to_lowercase().as_str() {
            "tick" => Some(GameAction::Tick),
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "movedown" | "softdrop" => Some(GameAction::SoftDrop),
            "moveup" | "harddrop" => Some(GameAction::HardDrop),
            "rotatecw" | "rotateclockwise" | "cw" => Some(GameAction::RotateCw),
            "rotateccw" | "rotatecounterclockwise" | "ccw" => Some(GameAction::RotateCcw),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Tick => "tick",
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::RotateCw => "rotateCw",
            GameAction::RotateCcw => "rotateCcw",
        }
    }
}

impl From<MoveDirection> for GameAction {
    fn from(direction: MoveDirection) -> Self {
        match direction {
            MoveDirection::Up => GameAction::HardDrop,
            MoveDirection::Down => GameAction::SoftDrop,
            MoveDirection::Left => GameAction::MoveLeft,
            MoveDirection::Right => GameAction::MoveRight,
        }
    }
}

/// A cell of the projected (render-ready) grid
///
/// The persisted board only ever stores empty or locked cells; `Active` is
/// produced by projection and never written back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cell {
    #[default]
    Empty,
    Active,
    Locked(PieceKind),
}

impl Cell {
    /// Compact code for snapshots: 0 empty, 1 active, 2.. locked kind
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_engine_types::{Cell, PieceKind};
    ///
    /// assert_eq!(Cell::Empty.code(), 0);
    /// assert_eq!(Cell::Active.code(), 1);
    /// assert_eq!(Cell::Locked(PieceKind::I).code(), 2);
    /// assert_eq!(Cell::Locked(PieceKind::Z).code(), 8);
    /// ```
    pub fn code(&self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Active => 1,
            Cell::Locked(kind) => 2 + kind.index() as u8,
        }
    }

    pub fn is_locked(&self) -> bool {
        matches!(self, Cell::Locked(_))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

impl From<Option<PieceKind>> for Cell {
    fn from(value: Option<PieceKind>) -> Self {
        match value {
            Some(kind) => Cell::Locked(kind),
            None => Cell::Empty,
        }
    }
}

/// State machine phase of the engine
///
/// `Locking` only exists inside a single call (lock, clear, promote) and is
/// never observed between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GamePhase {
    Falling,
    Locking,
    GameOver,
}

/// Event emitted after a piece locks.
///
/// Consumed by observers through `GameState::take_last_event`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockEvent {
    pub kind: PieceKind,
    pub lines_cleared: u32,
    pub score_delta: u32,
    pub game_over: bool,
}
