//! TextView: maps a `GameSnapshot` into plain text lines.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Glyphs for one board cell (each two columns wide)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub block: &'static str,
    pub ghost: &'static str,
    pub empty: &'static str,
}

impl Default for Glyphs {
    fn default() -> Self {
        // 2 columns per cell compensate for the terminal glyph aspect ratio
        Self {
            block: "[]",
            ghost: "::",
            empty: " .",
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TextView {
    glyphs: Glyphs,
}

impl TextView {
    pub fn new(glyphs: Glyphs) -> Self {
        Self { glyphs }
    }

    /// Render the board with a side panel, one string per terminal row.
    pub fn render(&self, snap: &GameSnapshot) -> Vec<String> {
        let panel = Self::panel(snap);
        let mut lines = Vec::with_capacity(BOARD_HEIGHT as usize + 2);

        let border = format!("+{}+", "-".repeat(BOARD_WIDTH as usize * 2));
        lines.push(border.clone());
        for y in 0..BOARD_HEIGHT as usize {
            let mut row = String::from("|");
            for x in 0..BOARD_WIDTH as usize {
                let glyph = if snap.cell_at(x, y).is_some() {
                    self.glyphs.block
                } else if snap.is_ghost(x, y) {
                    self.glyphs.ghost
                } else {
                    self.glyphs.empty
                };
                row.push_str(glyph);
            }
            row.push('|');
            if let Some(side) = panel.get(y) {
                row.push_str("  ");
                row.push_str(side);
            }
            lines.push(row);
        }
        lines.push(border);
        lines
    }

    fn panel(snap: &GameSnapshot) -> Vec<String> {
        let next: Vec<&str> = snap.next_queue.iter().map(|k| k.as_str()).collect();
        let hold = snap.hold.map(|k| k.as_str()).unwrap_or("-");
        let status = if snap.game_over {
            "GAME OVER  (R / Enter to restart)"
        } else if snap.paused {
            "PAUSED"
        } else {
            ""
        };

        vec![
            format!("Score: {}", snap.score),
            format!("Lines: {}", snap.lines),
            format!("Level: {}", snap.level),
            String::new(),
            format!("Next:  {}", next.join(" ")),
            format!("Hold:  {}{}", hold, if snap.can_hold { "" } else { " (used)" }),
            String::new(),
            status.to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameState;

    #[test]
    fn test_render_dimensions() {
        let snap = GameState::new(5).snapshot();
        let lines = TextView::default().render(&snap);

        assert_eq!(lines.len(), BOARD_HEIGHT as usize + 2);
        assert!(lines[0].starts_with('+'));
        assert!(lines[1].starts_with("|"));
        assert!(lines[1].contains("Score: 0"));
    }

    #[test]
    fn test_active_piece_and_ghost_drawn() {
        let snap = GameState::new(5).snapshot();
        let text = TextView::default().render(&snap).join("\n");

        assert_eq!(text.matches("[]").count(), 4);
        assert_eq!(text.matches("::").count(), 4);
    }

    #[test]
    fn test_status_lines() {
        let mut state = GameState::new(5);
        state.toggle_pause();
        let text = TextView::default().render(&state.snapshot()).join("\n");
        assert!(text.contains("PAUSED"));
    }
}
