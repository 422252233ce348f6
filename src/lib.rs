//! Blockfall (workspace facade crate).
//!
//! Re-exports the engine crates under short names and adds the pieces the
//! terminal runner needs: environment configuration and a text view.

pub mod config;
pub mod view;

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_types as types;
