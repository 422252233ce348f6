//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains all the game rules, state management, and simulation logic.
//! It has no dependencies on UI or terminal I/O, so it runs the same in the
//! terminal runner, in tests, and headless.
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 playfield with collision queries and line clearing
//! - [`pieces`]: tetromino shapes, matrix rotation and SRS wall kick tables
//! - [`piece`]: the active piece (shape, anchor, rotation)
//! - [`rng`]: 7-bag random piece generation
//! - [`scoring`]: line and T-spin points, level and gravity curve
//! - [`game_state`]: the engine state machine
//! - [`events`]: notifications queued for the presentation layer
//! - [`snapshot`]: read-only frame data for renderers
//! - [`frame`]: clock-to-tick driver with panic containment
//!
//! # Game Rules
//!
//! - **7-Bag Randomizer**: every window of 7 draws from a bag boundary holds each piece once
//! - **SRS Rotation**: wall kicks for all pieces; O never rotates
//! - **Lock Delay**: 500ms once the piece rests, reset by moves and rotations up to 15 times
//! - **Ghost Piece**: the landing row of the active piece
//! - **Hold**: once per piece
//! - **T-Spin**: T locked right after a rotation with 3 of 4 box corners blocked
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_core::types::GameAction;
//!
//! let mut game = GameState::new(12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::RotateRight);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert_eq!(game.board().filled_count(), 4);
//! assert_eq!(game.next_queue().len(), 5);
//! ```
//!
//! Call [`GameState::tick`](game_state::GameState::tick) every frame with the
//! elapsed time, or let [`FrameDriver`](frame::FrameDriver) do it.

pub mod board;
pub mod config;
pub mod events;
pub mod frame;
pub mod game_state;
pub mod piece;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::EngineConfig;
pub use events::GameEvent;
pub use frame::{panic_message, FrameDriver, FrameOutcome};
pub use game_state::GameState;
pub use piece::{Piece, PieceView};
pub use pieces::{kicks, spawn_shape, Shape};
pub use rng::Randomizer;
pub use scoring::{calculate_score, ScoreAward};
pub use snapshot::GameSnapshot;
