//! # Connect Four
//!
//! Two-player Connect Four for the terminal: a presentation-agnostic rules
//! engine (board, turn state machine, cross-session win tally) behind a
//! Ratatui front end. Board sizes are configurable down to the 4x4 minimum
//! on which a four-in-a-row is still possible.
//!
//! ## Modules
//!
//! - [`game`] — Core rules: board, player identities, state machine, win tally
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types
//! - [`ui`] — Terminal UI: game view and key handling

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
