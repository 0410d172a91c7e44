//! Shared types module - plain data structures and constants
//!
//! Everything in here is pure data with no behavior beyond parsing and naming,
//! so the same definitions can be used by the core rules, the engine scheduler,
//! and any renderer or input layer sitting outside the engine.
//!
//! # Coordinates
//!
//! The playfield uses a bottom-left origin:
//!
//! - **Rows** grow upward (row 0 is the floor row)
//! - **Columns** grow rightward (col 0 is the left wall)
//! - **Standard size**: 10 columns x 20 rows
//!
//! # Drop Intervals by Level
//!
//! Automatic gravity follows the NES frame table converted to milliseconds
//! (frames x 16.67ms, rounded):
//!
//! | Level | Interval |
//! |-------|----------|
//! | 0 | 800ms |
//! | 1 | 717ms |
//! | 2 | 633ms |
//! | 5 | 383ms |
//! | 9 | 100ms |
//! | 10-12 | 83ms |
//! | 13-15 | 67ms |
//! | 16-18 | 50ms |
//! | 19-28 | 33ms |
//! | 29+ | 17ms |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Color, GameAction, ShapeKind, BoardSize};
//!
//! assert_eq!(ShapeKind::from_str("t"), Some(ShapeKind::T));
//! assert_eq!(ShapeKind::T.color(), Color::Purple);
//!
//! assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
//!
//! let size = BoardSize::standard();
//! assert_eq!((size.width, size.height), (10, 20));
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: usize = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: usize = 20;

/// Largest bounding box side among the canonical shapes (the I piece)
pub const MAX_PIECE_SIZE: usize = 4;

/// Cleared lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Line clear scoring table
///
/// Base points for clearing N lines at once, multiplied by (level + 1):
/// - 1 line: 100
/// - 2 lines: 300
/// - 3 lines: 500
/// - 4 lines: 800
pub const LINE_SCORES: [u64; 5] = [0, 100, 300, 500, 800];

/// Drop interval per level in milliseconds (index = level)
///
/// Levels past the end of the table use [`DROP_INTERVAL_FLOOR_MS`].
pub const DROP_INTERVALS_MS: [u32; 29] = [
    800, 717, 633, 550, 467, 383, 300, 217, 133, 100, // 0-9
    83, 83, 83, 67, 67, 67, 50, 50, 50, // 10-18
    33, 33, 33, 33, 33, 33, 33, 33, 33, 33, // 19-28
];

/// Drop interval from level 29 onward
pub const DROP_INTERVAL_FLOOR_MS: u32 = 17;

/// Time rows stay on the board (blinking) before they are removed
pub const DEFAULT_LINE_CLEAR_DELAY_MS: u32 = 400;

/// Playfield dimensions in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoardSize {
    pub width: usize,
    pub height: usize,
}

impl BoardSize {
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Standard 10x20 playfield
    pub const fn standard() -> Self {
        Self::new(BOARD_WIDTH, BOARD_HEIGHT)
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        Self::standard()
    }
}

/// Block palette
///
/// `None` is carried by the empty sentinel piece only; board cells store
/// `Option<Color>` and never hold `Color::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Color {
    #[default]
    None,
    Cyan,
    Red,
    Yellow,
    Green,
    Blue,
    Purple,
    Orange,
}

impl Color {
    pub const ALL: [Color; 8] = [
        Color::None,
        Color::Cyan,
        Color::Red,
        Color::Yellow,
        Color::Green,
        Color::Blue,
        Color::Purple,
        Color::Orange,
    ];

    /// Parse color from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "none" => Some(Color::None),
            "cyan" => Some(Color::Cyan),
            "red" => Some(Color::Red),
            "yellow" => Some(Color::Yellow),
            "green" => Some(Color::Green),
            "blue" => Some(Color::Blue),
            "purple" => Some(Color::Purple),
            "orange" => Some(Color::Orange),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Color::None => "none",
            Color::Cyan => "cyan",
            Color::Red => "red",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Purple => "purple",
            Color::Orange => "orange",
        }
    }

    /// Compact numeric code used by snapshots (0 = none)
    pub fn code(&self) -> u8 {
        match self {
            Color::None => 0,
            Color::Cyan => 1,
            Color::Red => 2,
            Color::Yellow => 3,
            Color::Green => 4,
            Color::Blue => 5,
            Color::Purple => 6,
            Color::Orange => 7,
        }
    }
}

/// The seven canonical shapes
///
/// - **I**: Cyan, 4-wide bar
/// - **J**: Blue
/// - **L**: Orange (mirror of J)
/// - **O**: Yellow, 2x2 square
/// - **S**: Green
/// - **T**: Purple
/// - **Z**: Red (mirror of S)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ShapeKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl ShapeKind {
    /// Every shape once, in bag-fill order
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::J,
        ShapeKind::L,
        ShapeKind::O,
        ShapeKind::S,
        ShapeKind::T,
        ShapeKind::Z,
    ];

    pub fn color(&self) -> Color {
        match self {
            ShapeKind::I => Color::Cyan,
            ShapeKind::J => Color::Blue,
            ShapeKind::L => Color::Orange,
            ShapeKind::O => Color::Yellow,
            ShapeKind::S => Color::Green,
            ShapeKind::T => Color::Purple,
            ShapeKind::Z => Color::Red,
        }
    }

    /// Side of the bounding square
    pub fn size(&self) -> usize {
        match self {
            ShapeKind::I => 4,
            ShapeKind::O => 2,
            ShapeKind::J | ShapeKind::L | ShapeKind::S | ShapeKind::T | ShapeKind::Z => 3,
        }
    }

    /// Parse shape kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(ShapeKind::I),
            "j" => Some(ShapeKind::J),
            "l" => Some(ShapeKind::L),
            "o" => Some(ShapeKind::O),
            "s" => Some(ShapeKind::S),
            "t" => Some(ShapeKind::T),
            "z" => Some(ShapeKind::Z),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::I => "i",
            ShapeKind::J => "j",
            ShapeKind::L => "l",
            ShapeKind::O => "o",
            ShapeKind::S => "s",
            ShapeKind::T => "t",
            ShapeKind::Z => "z",
        }
    }
}

/// Game status state machine
///
/// `Playing -> Scoring -> Scored -> Playing`, with `Playing <-> Pause`.
/// `GameOver` is terminal and is only reached when a spawn fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Status {
    #[default]
    Playing,
    Pause,
    Scoring,
    Scored,
    GameOver,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Playing => "playing",
            Status::Pause => "pause",
            Status::Scoring => "scoring",
            Status::Scored => "scored",
            Status::GameOver => "gameover",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Status::GameOver)
    }
}

/// Discrete player commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Rotate clockwise (button A)
    RotateClockwise,
    /// Rotate reverse-clockwise (button B)
    RotateReverse,
    /// Drive the piece to its resting position and land it
    SoftDrop,
    /// Force a single downward tick
    StepDown,
    /// Toggle pause
    Pause,
}

impl GameAction {
    /// Parse action from string (camelCase or lowercase)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("rotateClockwise"), Some(GameAction::RotateClockwise));
    /// assert_eq!(GameAction::from_str("softdrop"), Some(GameAction::SoftDrop));
    /// assert_eq!(GameAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "rotateclockwise" => Some(GameAction::RotateClockwise),
            "rotatereverse" => Some(GameAction::RotateReverse),
            "softdrop" => Some(GameAction::SoftDrop),
            "stepdown" => Some(GameAction::StepDown),
            "pause" => Some(GameAction::Pause),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::RotateClockwise => "rotateClockwise",
            GameAction::RotateReverse => "rotateReverse",
            GameAction::SoftDrop => "softDrop",
            GameAction::StepDown => "stepDown",
            GameAction::Pause => "pause",
        }
    }
}

/// Kind of event the engine emits to observers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum EventKind {
    /// Automatic downward tick
    Tick,
    /// Player action applied
    Action,
    /// Completed rows scored and removed
    Scoring,
    /// Next piece spawned after scoring
    Scored,
    /// Spawn failed; session over
    GameOver,
    /// Fresh session started
    Restart,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Tick => "tick",
            EventKind::Action => "action",
            EventKind::Scoring => "scoring",
            EventKind::Scored => "scored",
            EventKind::GameOver => "gameover",
            EventKind::Restart => "restart",
        }
    }
}
