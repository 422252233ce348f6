//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no engine logic, so they can be shared by the
//! engine, the key mapping and any presentation layer.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Spawn position**: (3, 0) for every piece
//!
//! # Game Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_DROP_MS` | 1000 | Gravity interval at level 1 |
//! | `DROP_STEP_MS` | 100 | Interval reduction per level |
//! | `DROP_INTERVAL_MIN_MS` | 100 | Fastest gravity |
//! | `LOCK_DELAY_MS` | 500 | Grace period once a piece rests |
//! | `LOCK_RESET_LIMIT` | 15 | Max lock timer resets per piece |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{GameAction, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let piece = PieceKind::from_str("t").unwrap();
//! assert_eq!(piece, PieceKind::T);
//!
//! assert_eq!(Rotation::R0.rotate_cw(), Rotation::R1);
//! assert_eq!(GameAction::from_str("hardDrop"), Some(GameAction::HardDrop));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

use serde::Serialize;

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Anchor column for newly spawned pieces
pub const SPAWN_X: i8 = 3;

/// Anchor row for newly spawned pieces
pub const SPAWN_Y: i8 = 0;

/// Number of upcoming pieces kept in the lookahead queue
pub const NEXT_QUEUE_LEN: usize = 5;

/// Gravity interval at level 1 (1000ms = 1 second per row)
pub const BASE_DROP_MS: u32 = 1000;

/// Gravity interval reduction per level above 1
pub const DROP_STEP_MS: u32 = 100;

/// Fastest gravity interval
pub const DROP_INTERVAL_MIN_MS: u32 = 100;

/// Lock delay once the active piece rests on something (500ms)
pub const LOCK_DELAY_MS: u32 = 500;

/// Maximum number of lock timer resets per piece life (15)
pub const LOCK_RESET_LIMIT: u8 = 15;

/// Lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Line clear points for 0..=4 simultaneous lines, multiplied by level
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// T-spin points for 0..=3 lines, multiplied by level
pub const SPIN_SCORES: [u32; 4] = [400, 800, 1200, 1600];

/// The seven tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
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
    /// Every kind, in catalog order. A fresh bag starts from this list.
    pub const ALL: [PieceKind; 7] = [
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
    /// ```
    /// use blockfall_types::PieceKind;
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

    /// Single uppercase letter
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

    /// Display color of this kind
    pub fn color(&self) -> Color {
        match self {
            PieceKind::I => Color::Cyan,
            PieceKind::J => Color::Blue,
            PieceKind::L => Color::Orange,
            PieceKind::O => Color::Yellow,
            PieceKind::S => Color::Green,
            PieceKind::T => Color::Purple,
            PieceKind::Z => Color::Red,
        }
    }
}

/// Display color identifier stored in board cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Color {
    Cyan,
    Blue,
    Orange,
    Yellow,
    Green,
    Purple,
    Red,
}

impl Color {
    /// CSS hex string for this color
    pub fn hex(&self) -> &'static str {
        match self {
            Color::Cyan => "#00f0ff",
            Color::Blue => "#0000ff",
            Color::Orange => "#ff7f00",
            Color::Yellow => "#ffff00",
            Color::Green => "#00ff00",
            Color::Purple => "#a000f0",
            Color::Red => "#ff0000",
        }
    }

    /// (r, g, b) components of [`Color::hex`]
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Color::Cyan => (0x00, 0xf0, 0xff),
            Color::Blue => (0x00, 0x00, 0xff),
            Color::Orange => (0xff, 0x7f, 0x00),
            Color::Yellow => (0xff, 0xff, 0x00),
            Color::Green => (0x00, 0xff, 0x00),
            Color::Purple => (0xa0, 0x00, 0xf0),
            Color::Red => (0xff, 0x00, 0x00),
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(Color)`: Cell filled by a locked piece of that color
pub type Cell = Option<Color>;

/// Rotation index, 0 = spawn orientation, advancing clockwise.
///
/// The cycle goes: R0 → R1 → R2 → R3 → R0
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Rotation {
    R0,
    R1,
    R2,
    R3,
}

impl Rotation {
    /// Rotate clockwise (90°)
    ///
    /// ```
    /// use blockfall_types::Rotation;
    ///
    /// assert_eq!(Rotation::R0.rotate_cw(), Rotation::R1);
    /// assert_eq!(Rotation::R3.rotate_cw(), Rotation::R0);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Rotate counter-clockwise (-90°)
    ///
    /// ```
    /// use blockfall_types::Rotation;
    ///
    /// assert_eq!(Rotation::R0.rotate_ccw(), Rotation::R3);
    /// assert_eq!(Rotation::R1.rotate_ccw(), Rotation::R0);
    /// ```
    pub fn rotate_ccw(&self) -> Self {
        Self::from_index(self.index() + 3)
    }

    /// Numeric index 0..=3
    pub fn index(&self) -> u8 {
        match self {
            Rotation::R0 => 0,
            Rotation::R1 => 1,
            Rotation::R2 => 2,
            Rotation::R3 => 3,
        }
    }

    /// Build from any index, taken modulo 4
    pub fn from_index(index: u8) -> Self {
        match index % 4 {
            0 => Rotation::R0,
            1 => Rotation::R1,
            2 => Rotation::R2,
            _ => Rotation::R3,
        }
    }
}

/// Commands accepted by the engine.
///
/// These are produced by the input collaborator and applied synchronously.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one cell down
    SoftDrop,
    /// Drop piece to the lowest valid row and lock it
    HardDrop,
    /// Rotate piece 90° counter-clockwise
    RotateLeft,
    /// Rotate piece 90° clockwise
    RotateRight,
    /// Hold current piece (once per piece)
    Hold,
    /// Toggle pause state
    Pause,
    /// Restart the game
    Restart,
    /// Start button: restart after game over, otherwise toggle pause
    StartOrPause,
}

impl GameAction {
    /// Parse action from its camelCase name (case-insensitive)
    ///
    /// ```
    /// use blockfall_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("ROTATERIGHT"), Some(GameAction::RotateRight));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "harddrop" => Some(GameAction::HardDrop),
            "rotateleft" => Some(GameAction::RotateLeft),
            "rotateright" => Some(GameAction::RotateRight),
            "hold" => Some(GameAction::Hold),
            "pause" => Some(GameAction::Pause),
            "restart" => Some(GameAction::Restart),
            "startorpause" => Some(GameAction::StartOrPause),
            _ => None,
        }
    }

    /// camelCase name
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::RotateLeft => "rotateLeft",
            GameAction::RotateRight => "rotateRight",
            GameAction::Hold => "hold",
            GameAction::Pause => "pause",
            GameAction::Restart => "restart",
            GameAction::StartOrPause => "startOrPause",
        }
    }
}

/// Kind of the last successful player action, used for spin detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum LastAction {
    #[default]
    None,
    Move,
    Rotate,
}

/// Label of a scoring lock.
///
/// Spin variants are awarded when a T piece locks right after a rotation
/// with three of its four bounding-box corners blocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ClearKind {
    Single,
    Double,
    Triple,
    Tetris,
    /// Spin lock that cleared no lines
    TSpin,
    TSpinSingle,
    TSpinDouble,
    TSpinTriple,
}

impl ClearKind {
    /// Label for a lock clearing `lines` rows. `None` when nothing scores.
    pub fn from_lines(lines: usize, spin: bool) -> Option<Self> {
        match (spin, lines) {
            (false, 1) => Some(ClearKind::Single),
            (false, 2) => Some(ClearKind::Double),
            (false, 3) => Some(ClearKind::Triple),
            (false, 4) => Some(ClearKind::Tetris),
            (true, 0) => Some(ClearKind::TSpin),
            (true, 1) => Some(ClearKind::TSpinSingle),
            (true, 2) => Some(ClearKind::TSpinDouble),
            (true, _) => Some(ClearKind::TSpinTriple),
            _ => None,
        }
    }

    pub fn is_spin(&self) -> bool {
        matches!(
            self,
            ClearKind::TSpin | ClearKind::TSpinSingle | ClearKind::TSpinDouble | ClearKind::TSpinTriple
        )
    }

    /// Display text shown by the presentation layer
    pub fn as_str(&self) -> &'static str {
        match self {
            ClearKind::Single => "SINGLE",
            ClearKind::Double => "DOUBLE",
            ClearKind::Triple => "TRIPLE",
            ClearKind::Tetris => "TETRIS",
            ClearKind::TSpin => "T-SPIN",
            ClearKind::TSpinSingle => "T-SPIN SINGLE",
            ClearKind::TSpinDouble => "T-SPIN DOUBLE",
            ClearKind::TSpinTriple => "T-SPIN TRIPLE",
        }
    }
}
