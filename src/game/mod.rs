//! Core Connect Four game logic: board representation, player identities,
//! the turn state machine, and the cross-session win tally.

mod board;
mod player;
mod session;
mod tally;

pub use board::{Board, Cell, InvalidDimension, MIN_DIMENSION};
pub use player::{PlayerIdentity, Slot};
pub use session::{GameOutcome, GameSession, MoveError, Placement, SessionState};
pub use tally::ScoreTally;
