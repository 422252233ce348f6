//! Engine events - the notification side of the engine.
//!
//! The game state queues events as things happen; the presentation layer
//! drains them once per frame. The engine never touches UI itself.

use serde::Serialize;

use crate::board::RowList;
use crate::scoring::ScoreAward;
use crate::types::PieceKind;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    /// A new piece entered play from the queue
    Spawned { kind: PieceKind },
    /// The active piece went to the hold slot
    Held { kind: PieceKind },
    /// Hard drop finished at this anchor, right before locking
    HardDropped { kind: PieceKind, x: i8, y: i8 },
    /// A piece was committed to the board
    Locked { kind: PieceKind, spin: bool },
    /// Rows removed by the last lock, top to bottom
    LinesCleared { rows: Vec<usize> },
    Scored(ScoreAward),
    ScoreChanged { score: u32 },
    LinesChanged { lines: u32 },
    LevelChanged { level: u32 },
    PauseChanged { paused: bool },
    GameOver { score: u32 },
    Restarted,
}

impl GameEvent {
    pub(crate) fn lines_cleared(rows: &RowList) -> Self {
        GameEvent::LinesCleared {
            rows: rows.to_vec(),
        }
    }
}
