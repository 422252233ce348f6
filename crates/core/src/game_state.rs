//! Game state module - manages the complete game state
//!
//! This module ties together all core components: board, pieces, randomizer
//! and scoring. It handles gravity, lock delay, piece movement, rotation with
//! wall kicks, hold, line clears and the game lifecycle.
//!
//! Every tentative change to the active piece is checked against the board
//! before it is kept, so the active piece never rests in a colliding position.
//! The one exception is the piece that ended the game: it stays installed,
//! but snapshots stop showing it once `game_over` is set.

use std::collections::VecDeque;

use crate::board::Board;
use crate::config::EngineConfig;
use crate::events::GameEvent;
use crate::piece::Piece;
use crate::pieces::kicks;
use crate::rng::Randomizer;
use crate::scoring::{calculate_level, calculate_score, get_drop_interval_ms, ScoreAward};
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// Bounding-box corners probed by spin detection, relative to the anchor
const SPIN_CORNERS: [(i8, i8); 4] = [(0, 0), (2, 0), (0, 2), (2, 2)];

/// Events kept when nobody drains them; older ones are dropped first
const MAX_PENDING_EVENTS: usize = 256;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    config: EngineConfig,
    board: Board,
    active: Piece,
    hold: Option<PieceKind>,
    can_hold: bool,
    next_queue: VecDeque<PieceKind>,
    randomizer: Randomizer,
    score: u32,
    lines: u32,
    level: u32,
    drop_interval_ms: u32,
    /// Gravity accumulator
    drop_timer_ms: u32,
    lock_timer_ms: u32,
    /// Piece is resting and the lock timer runs
    locking: bool,
    lock_reset_count: u8,
    last_action: LastAction,
    paused: bool,
    game_over: bool,
    events: VecDeque<GameEvent>,
}

impl GameState {
    /// Create a new game with the given seed and default rules
    pub fn new(seed: u64) -> Self {
        Self::with_config(EngineConfig::seeded(seed))
    }

    /// Create a new game and spawn the first piece
    pub fn with_config(config: EngineConfig) -> Self {
        let randomizer = match config.seed {
            Some(seed) => Randomizer::new(seed),
            None => Randomizer::from_entropy(),
        };
        let mut state = Self::fresh(config, randomizer);
        state.spawn_piece();
        state
    }

    /// Empty run state. The active piece is a placeholder until the first spawn.
    fn fresh(config: EngineConfig, randomizer: Randomizer) -> Self {
        Self {
            config,
            board: Board::new(),
            active: Piece::new(PieceKind::T),
            hold: None,
            can_hold: true,
            next_queue: VecDeque::with_capacity(NEXT_QUEUE_LEN + 1),
            randomizer,
            score: 0,
            lines: 0,
            level: 1,
            drop_interval_ms: get_drop_interval_ms(1),
            drop_timer_ms: 0,
            lock_timer_ms: 0,
            locking: false,
            lock_reset_count: 0,
            last_action: LastAction::None,
            paused: false,
            game_over: false,
            events: VecDeque::new(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn can_hold(&self) -> bool {
        self.can_hold
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn hold_piece(&self) -> Option<PieceKind> {
        self.hold
    }

    pub fn next_queue(&self) -> &VecDeque<PieceKind> {
        &self.next_queue
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn is_locking(&self) -> bool {
        self.locking
    }

    pub fn lock_timer_ms(&self) -> u32 {
        self.lock_timer_ms
    }

    pub fn lock_reset_count(&self) -> u8 {
        self.lock_reset_count
    }

    pub fn last_action(&self) -> LastAction {
        self.last_action
    }

    /// Current gravity interval
    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    /// Whether commands and ticks currently have any effect
    pub fn is_playing(&self) -> bool {
        !self.paused && !self.game_over
    }

    /// Take every event queued since the last call, oldest first.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain(..).collect()
    }

    fn emit(&mut self, event: GameEvent) {
        if self.events.len() >= MAX_PENDING_EVENTS {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from(self)
    }

    /// Landing row of the active piece (ghost preview). Pure.
    pub fn ghost_y(&self) -> i8 {
        self.active.drop_row(&self.board)
    }

    /// Top the lookahead queue up from the randomizer
    fn fill_next_queue(&mut self) {
        while self.next_queue.len() < NEXT_QUEUE_LEN {
            let kind = self.randomizer.next_type();
            self.next_queue.push_back(kind);
        }
    }

    /// Make `piece` the active piece with fresh per-piece timers
    fn install(&mut self, piece: Piece) {
        self.active = piece;
        self.drop_timer_ms = 0;
        self.lock_timer_ms = 0;
        self.locking = false;
        self.lock_reset_count = 0;
        self.last_action = LastAction::None;
    }

    /// Spawn a new piece from the queue.
    ///
    /// Returns false (and ends the game) if the spawn position is blocked.
    pub fn spawn_piece(&mut self) -> bool {
        self.fill_next_queue();
        let kind = match self.next_queue.pop_front() {
            Some(kind) => kind,
            None => self.randomizer.next_type(),
        };
        self.fill_next_queue();

        self.install(Piece::new(kind));
        self.can_hold = true;
        self.emit(GameEvent::Spawned { kind });

        if self.active.collides(&self.board) {
            self.end_game();
            return false;
        }
        true
    }

    fn end_game(&mut self) {
        self.game_over = true;
        self.locking = false;
        log::debug!(
            "game over: score={} lines={} level={}",
            self.score,
            self.lines,
            self.level
        );
        self.emit(GameEvent::GameOver { score: self.score });
    }

    /// Translate the active piece if the target is free
    fn try_shift(&mut self, dx: i8, dy: i8) -> bool {
        let moved = self.active.shifted(dx, dy);
        if moved.collides(&self.board) {
            return false;
        }
        self.active = moved;
        true
    }

    /// Bookkeeping after a successful player move or rotation.
    ///
    /// While locking, the lock timer restarts, at most `lock_reset_limit`
    /// times per piece.
    fn on_move(&mut self) {
        if self.locking && self.lock_reset_count < self.config.lock_reset_limit {
            self.lock_timer_ms = 0;
            self.lock_reset_count += 1;
        }
        self.last_action = LastAction::Move;
    }

    pub fn move_left(&mut self) -> bool {
        self.move_horizontal(-1)
    }

    pub fn move_right(&mut self) -> bool {
        self.move_horizontal(1)
    }

    fn move_horizontal(&mut self, dx: i8) -> bool {
        if !self.is_playing() || !self.try_shift(dx, 0) {
            return false;
        }
        self.on_move();
        true
    }

    /// Move down one row. Never locks, even when the piece lands.
    pub fn soft_drop(&mut self) -> bool {
        if !self.is_playing() || !self.try_shift(0, 1) {
            return false;
        }
        self.drop_timer_ms = 0;
        self.on_move();
        true
    }

    /// Drop to the landing row and lock immediately
    pub fn hard_drop(&mut self) -> bool {
        if !self.is_playing() {
            return false;
        }
        self.active.y = self.ghost_y();
        self.emit(GameEvent::HardDropped {
            kind: self.active.kind,
            x: self.active.x,
            y: self.active.y,
        });
        self.lock_piece();
        true
    }

    pub fn rotate_right(&mut self) -> bool {
        self.rotate(true)
    }

    pub fn rotate_left(&mut self) -> bool {
        self.rotate(false)
    }

    /// Rotate with SRS wall kicks.
    ///
    /// Kick offsets are tried in table order against the pre-rotation anchor;
    /// the first free placement wins. When none fits, the piece is unchanged.
    fn rotate(&mut self, clockwise: bool) -> bool {
        if !self.is_playing() || self.active.kind == PieceKind::O {
            return false;
        }

        let original = self.active;
        let mut rotated = original;
        if clockwise {
            rotated.rotate_cw();
        } else {
            rotated.rotate_ccw();
        }

        for &(dx, dy) in kicks(original.kind, original.rotation, rotated.rotation) {
            // Kick tables are y-up, the board is y-down
            let candidate = Piece {
                x: original.x + dx,
                y: original.y - dy,
                ..rotated
            };
            if !candidate.collides(&self.board) {
                self.active = candidate;
                self.on_move();
                self.last_action = LastAction::Rotate;
                return true;
            }
        }

        false
    }

    /// Swap the active piece with the hold slot, once per piece
    pub fn hold(&mut self) -> bool {
        if !self.is_playing() || !self.can_hold {
            return false;
        }

        let current = self.active.kind;
        match self.hold.replace(current) {
            None => {
                self.emit(GameEvent::Held { kind: current });
                self.spawn_piece();
            }
            Some(held) => {
                // Swapped in at spawn; the queue is not touched
                self.install(Piece::new(held));
                self.emit(GameEvent::Held { kind: current });
                if self.active.collides(&self.board) {
                    self.end_game();
                }
            }
        }

        self.can_hold = false;
        true
    }

    /// Toggle pause. Ignored once the game is over.
    pub fn toggle_pause(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        self.paused = !self.paused;
        self.emit(GameEvent::PauseChanged {
            paused: self.paused,
        });
        true
    }

    /// Reset the whole run: board, queue, hold, score, timers and flags.
    pub fn restart(&mut self) {
        let mut randomizer = self.randomizer.clone();
        randomizer.discard_bag();
        let config = self.config;
        *self = Self::fresh(config, randomizer);
        self.emit(GameEvent::Restarted);
        self.spawn_piece();
    }

    /// Start button semantics: restart a finished game, otherwise toggle pause
    pub fn start_or_pause(&mut self) -> bool {
        if self.game_over {
            self.restart();
            true
        } else {
            self.toggle_pause()
        }
    }

    /// Per-frame update: gravity, then lock delay.
    ///
    /// Returns true if the active piece locked during this tick.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if !self.is_playing() {
            return false;
        }

        self.apply_gravity(elapsed_ms);
        self.update_lock_delay(elapsed_ms)
    }

    fn apply_gravity(&mut self, elapsed_ms: u32) {
        self.drop_timer_ms = self.drop_timer_ms.saturating_add(elapsed_ms);
        if self.drop_timer_ms > self.drop_interval_ms && self.try_shift(0, 1) {
            self.drop_timer_ms = 0;
        }
    }

    fn update_lock_delay(&mut self, elapsed_ms: u32) -> bool {
        if !self.active.is_resting(&self.board) {
            self.locking = false;
            return false;
        }

        if !self.locking {
            self.locking = true;
            self.lock_timer_ms = 0;
            return false;
        }

        self.lock_timer_ms = self.lock_timer_ms.saturating_add(elapsed_ms);
        if self.lock_timer_ms > self.config.lock_delay_ms {
            self.lock_piece();
            return true;
        }
        false
    }

    /// T piece locking right after a rotation with 3+ corners blocked
    fn is_spin(&self, piece: &Piece) -> bool {
        if piece.kind != PieceKind::T || self.last_action != LastAction::Rotate {
            return false;
        }

        let blocked = SPIN_CORNERS
            .iter()
            .filter(|&&(cx, cy)| self.board.is_blocked(piece.x + cx, piece.y + cy))
            .count();
        blocked >= 3
    }

    /// Commit the active piece, clear lines, score, and spawn the next piece
    pub fn lock_piece(&mut self) {
        if self.game_over {
            return;
        }

        let piece = self.active;
        let spin = self.is_spin(&piece);

        self.board
            .commit(piece.cells().map(|(x, y)| (x, y, piece.color)));
        self.emit(GameEvent::Locked {
            kind: piece.kind,
            spin,
        });

        let rows = self.board.clear_full_rows();
        let cleared = rows.len();
        if cleared > 0 {
            self.emit(GameEvent::lines_cleared(&rows));
        }

        // Scored at the level in effect before this clear
        if let Some((kind, points)) = calculate_score(cleared, self.level, spin) {
            self.score = self.score.saturating_add(points);
            log::debug!("{} for {} points (level {})", kind.as_str(), points, self.level);
            self.emit(GameEvent::Scored(ScoreAward {
                kind,
                lines: cleared as u32,
                points,
                x: piece.x + 1,
                y: piece.y,
            }));
            self.emit(GameEvent::ScoreChanged { score: self.score });
        }

        if cleared > 0 {
            self.lines += cleared as u32;
            self.emit(GameEvent::LinesChanged { lines: self.lines });

            let level = calculate_level(self.lines);
            if level != self.level {
                self.level = level;
                self.emit(GameEvent::LevelChanged { level });
            }
            self.drop_interval_ms = get_drop_interval_ms(self.level);
        }

        self.spawn_piece();
    }

    /// Apply a game action.
    ///
    /// While paused only `Pause`, `StartOrPause` and `Restart` do anything;
    /// after game over only `Restart` and `StartOrPause` do.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::RotateLeft => self.rotate_left(),
            GameAction::RotateRight => self.rotate_right(),
            GameAction::Hold => self.hold(),
            GameAction::Pause => self.toggle_pause(),
            GameAction::Restart => {
                self.restart();
                true
            }
            GameAction::StartOrPause => self.start_or_pause(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}
