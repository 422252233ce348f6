//! Read-only game snapshot for renderers and the `--dump` output.
//!
//! Building a snapshot never touches the game: it copies what a presenter
//! needs for one frame and serializes cleanly with serde.

use serde::Serialize;

use crate::game_state::GameState;
use crate::piece::PieceView;
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

pub type BoardGrid = [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameSnapshot {
    /// Settled cells, `board[y][x]`, row 0 at the top
    pub board: BoardGrid,
    /// `None` once the game is over
    pub active: Option<PieceView>,
    pub ghost_y: Option<i8>,
    pub next_queue: Vec<PieceKind>,
    pub hold: Option<PieceKind>,
    pub can_hold: bool,
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub paused: bool,
    pub game_over: bool,
    pub locking: bool,
}

impl From<&GameState> for GameSnapshot {
    fn from(state: &GameState) -> Self {
        let mut board: BoardGrid = [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        for (dst, src) in board.iter_mut().zip(state.board().rows()) {
            dst.copy_from_slice(src);
        }

        let playing_piece = !state.game_over();

        Self {
            board,
            active: playing_piece.then(|| PieceView::from(state.active())),
            ghost_y: playing_piece.then(|| state.ghost_y()),
            next_queue: state.next_queue().iter().copied().collect(),
            hold: state.hold_piece(),
            can_hold: state.can_hold(),
            score: state.score(),
            lines: state.lines(),
            level: state.level(),
            paused: state.paused(),
            game_over: state.game_over(),
            locking: state.is_locking(),
        }
    }
}

impl GameSnapshot {
    /// Cell to draw at `(x, y)`: settled block, active piece, or empty.
    pub fn cell_at(&self, x: usize, y: usize) -> Cell {
        if let Some(active) = &self.active {
            if active
                .cells
                .iter()
                .any(|&(cx, cy)| cx as usize == x && cy >= 0 && cy as usize == y)
            {
                return Some(active.color);
            }
        }
        self.board.get(y).and_then(|row| row.get(x).copied()).flatten()
    }

    /// Whether `(x, y)` is covered by the ghost preview
    pub fn is_ghost(&self, x: usize, y: usize) -> bool {
        let (Some(active), Some(ghost_y)) = (&self.active, self.ghost_y) else {
            return false;
        };
        let dy = ghost_y - active.y;
        active
            .cells
            .iter()
            .any(|&(cx, cy)| cx >= 0 && cx as usize == x && cy + dy >= 0 && (cy + dy) as usize == y)
    }
}
