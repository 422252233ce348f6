//! Pieces module - tetromino catalog and SRS wall kick tables
//!
//! Shapes are stored as square occupancy matrices for rotation state 0.
//! Other states are produced by rotating the matrix, so the catalog only has
//! to get seven spawn shapes right.
//!
//! Reference: https://tetris.wiki/SRS

use crate::types::{PieceKind, Rotation};

/// Largest matrix side in the catalog (the I piece)
pub const MAX_SHAPE_SIZE: usize = 4;

/// Square occupancy matrix of side 2, 3 or 4.
///
/// Only the top-left `size x size` block of `cells` is meaningful; the rest
/// stays `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    size: u8,
    cells: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl Shape {
    /// Build from rows of `'#'` (filled) and any other char (empty).
    ///
    /// Panics if the rows are not square or larger than 4x4; the catalog is
    /// the only caller and its tables are fixed.
    pub fn from_rows(rows: &[&str]) -> Self {
        let size = rows.len();
        assert!(size <= MAX_SHAPE_SIZE, "shape larger than 4x4");
        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (y, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), size, "shape rows must be square");
            for (x, ch) in row.chars().enumerate() {
                cells[y][x] = ch == '#';
            }
        }
        Self {
            size: size as u8,
            cells,
        }
    }

    /// Matrix side length
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Whether the cell at column `x`, row `y` of the matrix is filled
    pub fn get(&self, x: usize, y: usize) -> bool {
        x < self.size as usize && y < self.size as usize && self.cells[y][x]
    }

    /// Rotate 90° clockwise: `new[r][c] = old[n-1-c][r]`
    pub fn rotate_cw(&self) -> Self {
        let n = self.size as usize;
        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (r, row) in cells.iter_mut().enumerate().take(n) {
            for (c, cell) in row.iter_mut().enumerate().take(n) {
                *cell = self.cells[n - 1 - c][r];
            }
        }
        Self {
            size: self.size,
            cells,
        }
    }

    /// Rotate 90° counter-clockwise: `new[r][c] = old[c][n-1-r]`
    pub fn rotate_ccw(&self) -> Self {
        let n = self.size as usize;
        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (r, row) in cells.iter_mut().enumerate().take(n) {
            for (c, cell) in row.iter_mut().enumerate().take(n) {
                *cell = self.cells[c][n - 1 - r];
            }
        }
        Self {
            size: self.size,
            cells,
        }
    }

    /// Offsets `(dx, dy)` of the filled cells, row-major.
    pub fn minos(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        let n = self.size as usize;
        (0..n).flat_map(move |y| {
            (0..n).filter_map(move |x| self.cells[y][x].then_some((x as i8, y as i8)))
        })
    }
}

/// Spawn (rotation 0) shape for a piece kind
pub fn spawn_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => Shape::from_rows(&["....", "####", "....", "...."]),
        PieceKind::J => Shape::from_rows(&["#..", "###", "..."]),
        PieceKind::L => Shape::from_rows(&["..#", "###", "..."]),
        PieceKind::O => Shape::from_rows(&["##", "##"]),
        PieceKind::S => Shape::from_rows(&[".##", "##.", "..."]),
        PieceKind::T => Shape::from_rows(&[".#.", "###", "..."]),
        PieceKind::Z => Shape::from_rows(&["##.", ".##", "..."]),
    }
}

/// Wall kick class a piece belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KickClass {
    I,
    Jlstz,
    /// The square piece: never rotates, never kicks
    O,
}

impl KickClass {
    pub fn of(kind: PieceKind) -> Self {
        match kind {
            PieceKind::I => KickClass::I,
            PieceKind::O => KickClass::O,
            _ => KickClass::Jlstz,
        }
    }
}

/// SRS wall kick data, one row per transition.
///
/// Offsets use the y-up convention of the published tables: a positive `dy`
/// moves the piece *up*, so it is subtracted from the board row.
/// The first entry of every row is the unkicked attempt.
pub type KickTable = [[(i8, i8); 5]; 8];

/// JLSTZ kick table (shared by J, L, S, T, Z)
const JLSTZ_KICKS: KickTable = [
    // 0->1
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
    // 1->0
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
    // 1->2
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    // 2->1
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
    // 2->3
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
    // 3->2
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
    // 3->0
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
    // 0->3
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
];

/// I piece kick table
const I_KICKS: KickTable = [
    // 0->1
    [(0, 0), (-2, 0), (1, 0), (-2, -1), (1, 2)],
    // 1->0
    [(0, 0), (2, 0), (-1, 0), (2, 1), (-1, -2)],
    // 1->2
    [(0, 0), (-1, 0), (2, 0), (-1, 2), (2, -1)],
    // 2->1
    [(0, 0), (1, 0), (-2, 0), (1, -2), (-2, 1)],
    // 2->3
    [(0, 0), (2, 0), (-1, 0), (2, 1), (-1, -2)],
    // 3->2
    [(0, 0), (-2, 0), (1, 0), (-2, -1), (1, 2)],
    // 3->0
    [(0, 0), (1, 0), (-2, 0), (1, -2), (-2, 1)],
    // 0->3
    [(0, 0), (-1, 0), (2, 0), (-1, 2), (2, -1)],
];

/// Row of the kick tables for a transition, `None` if the pair is not a
/// single quarter turn.
fn kick_index(from: Rotation, to: Rotation) -> Option<usize> {
    match (from, to) {
        (Rotation::R0, Rotation::R1) => Some(0),
        (Rotation::R1, Rotation::R0) => Some(1),
        (Rotation::R1, Rotation::R2) => Some(2),
        (Rotation::R2, Rotation::R1) => Some(3),
        (Rotation::R2, Rotation::R3) => Some(4),
        (Rotation::R3, Rotation::R2) => Some(5),
        (Rotation::R3, Rotation::R0) => Some(6),
        (Rotation::R0, Rotation::R3) => Some(7),
        _ => None,
    }
}

/// Candidate offsets to try for a rotation, in priority order.
///
/// Empty for the O piece and for transitions that are not a quarter turn.
pub fn kicks(kind: PieceKind, from: Rotation, to: Rotation) -> &'static [(i8, i8)] {
    let table = match KickClass::of(kind) {
        KickClass::O => return &[],
        KickClass::I => &I_KICKS,
        KickClass::Jlstz => &JLSTZ_KICKS,
    };
    match kick_index(from, to) {
        Some(idx) => &table[idx],
        None => &[],
    }
}
