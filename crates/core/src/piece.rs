//! Active piece instance
//!
//! A `Piece` is a plain value: the game state owns exactly one, and ghost
//! projection works on throwaway copies.

use serde::Serialize;

use crate::board::Board;
use crate::pieces::{spawn_shape, Shape};
use crate::types::{Color, PieceKind, Rotation, SPAWN_X, SPAWN_Y};

/// A tetromino with its current shape, anchor and rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    /// Shape matrix for the current rotation
    pub shape: Shape,
    /// Anchor column of the matrix' top-left corner
    pub x: i8,
    /// Anchor row of the matrix' top-left corner
    pub y: i8,
    pub rotation: Rotation,
    pub color: Color,
}

impl Piece {
    /// Create a piece in rotation 0 at the spawn coordinate
    pub fn new(kind: PieceKind) -> Self {
        Self::at(kind, SPAWN_X, SPAWN_Y)
    }

    /// Create a piece in rotation 0 at an arbitrary anchor
    pub fn at(kind: PieceKind, x: i8, y: i8) -> Self {
        Self {
            kind,
            shape: spawn_shape(kind),
            x,
            y,
            rotation: Rotation::R0,
            color: kind.color(),
        }
    }

    /// Board coordinates of the four filled cells
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .minos()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// Whether any filled cell is blocked on `board`
    pub fn collides(&self, board: &Board) -> bool {
        self.cells().any(|(x, y)| board.is_blocked(x, y))
    }

    /// Whether a one-row descent would collide
    pub fn is_resting(&self, board: &Board) -> bool {
        self.shifted(0, 1).collides(board)
    }

    /// Copy translated by `(dx, dy)`
    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Apply a clockwise matrix rotation and advance the rotation index
    pub fn rotate_cw(&mut self) {
        self.shape = self.shape.rotate_cw();
        self.rotation = self.rotation.rotate_cw();
    }

    /// Apply a counter-clockwise matrix rotation and retreat the rotation index
    pub fn rotate_ccw(&mut self) {
        self.shape = self.shape.rotate_ccw();
        self.rotation = self.rotation.rotate_ccw();
    }

    /// Row the piece would come to rest on if dropped straight down.
    ///
    /// Works on a copy; `self` is never touched.
    pub fn drop_row(&self, board: &Board) -> i8 {
        let mut ghost = *self;
        loop {
            ghost.y += 1;
            if ghost.collides(board) {
                return ghost.y - 1;
            }
        }
    }
}

/// Serializable view of a piece for collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PieceView {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
    pub color: Color,
    /// Absolute board cells covered by the piece
    pub cells: Vec<(i8, i8)>,
}

impl From<&Piece> for PieceView {
    fn from(piece: &Piece) -> Self {
        Self {
            kind: piece.kind,
            rotation: piece.rotation,
            x: piece.x,
            y: piece.y,
            color: piece.color,
            cells: piece.cells().collect(),
        }
    }
}
