//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell is empty or holds the color of
//! the piece that filled it. Uses a flat array for cache locality and
//! zero-allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom).
//! Rows above the top (y < 0) are a virtual, always-empty buffer that pieces
//! may poke into before they lock.

use arrayvec::ArrayVec;

use crate::types::{Cell, Color, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Row indices, sized for the whole board
pub type RowList = ArrayVec<usize, { BOARD_HEIGHT as usize }>;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Occupancy test used for collision.
    ///
    /// - Anything above the top (y < 0) is free, whatever the column.
    /// - Otherwise anything left, right or below the well is occupied.
    /// - Inside the well, a cell is occupied iff it holds a color.
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        if y < 0 {
            return false;
        }
        match Self::index(x, y) {
            Some(idx) => self.cells[idx].is_some(),
            None => true,
        }
    }

    /// Collision primitive for pieces: horizontally out of bounds (at any
    /// height) or occupied.
    pub fn is_blocked(&self, x: i8, y: i8) -> bool {
        x < 0 || x >= BOARD_WIDTH as i8 || self.is_occupied(x, y)
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y).is_some_and(|row| row.iter().all(Option::is_some))
    }

    /// Cells of row `y`, `None` if out of range
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= BOARD_HEIGHT as usize {
            return None;
        }
        let start = y * BOARD_WIDTH as usize;
        Some(&self.cells[start..start + BOARD_WIDTH as usize])
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(BOARD_WIDTH as usize)
    }

    /// Write locked cells into the grid.
    ///
    /// Cells above the top are skipped: that part of the piece never entered
    /// the well. Cells outside the columns or below the floor are ignored too.
    pub fn commit<I>(&mut self, cells: I)
    where
        I: IntoIterator<Item = (i8, i8, Color)>,
    {
        for (x, y, color) in cells {
            if y < 0 {
                continue;
            }
            self.set(x, y, Some(color));
        }
    }

    /// Full rows, top to bottom
    pub fn find_full_rows(&self) -> RowList {
        (0..BOARD_HEIGHT as usize)
            .filter(|&y| self.is_row_full(y))
            .collect()
    }

    /// Remove the given rows.
    ///
    /// Surviving rows keep their relative order and settle at the bottom;
    /// empty rows are added on top so the height stays 20. Uses a
    /// bottom-up two-pointer copy, so no allocation.
    pub fn clear_rows(&mut self, rows: &[usize]) {
        if rows.is_empty() {
            return;
        }

        let width = BOARD_WIDTH as usize;
        let mut write_y = BOARD_HEIGHT as usize;

        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if rows.contains(&read_y) {
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src_start = read_y * width;
                self.cells
                    .copy_within(src_start..src_start + width, write_y * width);
            }
        }

        for cell in &mut self.cells[..write_y * width] {
            *cell = None;
        }
    }

    /// Find and clear full rows, returning the cleared indices (top to bottom)
    pub fn clear_full_rows(&mut self) -> RowList {
        let rows = self.find_full_rows();
        self.clear_rows(&rows);
        rows
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells = [None; BOARD_SIZE];
    }

    /// Build a board from text rows, bottom-aligned.
    ///
    /// `'#'` fills a cell with [`Color::Cyan`], anything else leaves it empty.
    pub fn from_rows(rows: &[&str]) -> Self {
        let mut board = Self::new();
        let offset = BOARD_HEIGHT as usize - rows.len().min(BOARD_HEIGHT as usize);
        for (i, row) in rows.iter().take(BOARD_HEIGHT as usize).enumerate() {
            for (x, ch) in row.chars().take(BOARD_WIDTH as usize).enumerate() {
                if ch == '#' {
                    board.set(x as i8, (offset + i) as i8, Some(Color::Cyan));
                }
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn test_occupied_above_top_is_free() {
        let board = Board::new();
        assert!(!board.is_occupied(-5, -1));
        assert!(!board.is_occupied(15, -3));
        assert!(board.is_blocked(-1, -1));
        assert!(board.is_blocked(10, -2));
    }

    #[test]
    fn test_from_rows_is_bottom_aligned() {
        let board = Board::from_rows(&["#.........", "##########"]);
        assert!(board.is_occupied(0, 18));
        assert!(!board.is_occupied(1, 18));
        assert!(board.is_row_full(19));
        assert_eq!(board.filled_count(), 11);
    }

    #[test]
    fn test_clear_rows_middle() {
        let mut board = Board::from_rows(&["#.........", "##########", ".#........"]);
        board.clear_rows(&[18]);
        assert!(board.is_occupied(0, 18));
        assert!(board.is_occupied(1, 19));
        assert_eq!(board.filled_count(), 2);
    }
}
