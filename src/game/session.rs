use super::board::{Board, DropError, InvalidDimension};
use super::player::{PlayerIdentity, Slot};
use super::tally::ScoreTally;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Slot),
    Tie,
}

/// Snapshot of the state machine, for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    InProgress(Slot),
    Won(Slot),
    Tie,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("that column is already full")]
    ColumnFull,

    #[error("there is no such column")]
    InvalidColumn,

    #[error("the game is already over")]
    GameOver,
}

/// Where a piece landed and whether it ended the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub row: usize,
    pub column: usize,
    pub outcome: Option<GameOutcome>,
}

/// One game from first move to win or tie: a board, the ordered pair of
/// player identities, whose turn it is, and the terminal outcome once set.
/// A terminal session accepts no further moves; the next game is a fresh
/// instance (see [`GameSession::rematch`]), never this one reopened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    board: Board,
    players: [PlayerIdentity; 2],
    current: Slot,
    outcome: Option<GameOutcome>,
}

impl GameSession {
    /// Start a session on an empty `width` x `height` board. The first
    /// listed player moves first.
    pub fn new(
        width: usize,
        height: usize,
        players: [PlayerIdentity; 2],
    ) -> Result<Self, InvalidDimension> {
        Ok(GameSession {
            board: Board::new(width, height)?,
            players,
            current: Slot::First,
            outcome: None,
        })
    }

    /// Fresh session with the same board size and players. The first slot
    /// opens again; the old instance keeps its outcome.
    pub fn rematch(&self) -> GameSession {
        GameSession {
            board: self.board.cleared(),
            players: self.players.clone(),
            current: Slot::First,
            outcome: None,
        }
    }

    /// Get current slot
    pub fn current_player(&self) -> Slot {
        self.current
    }

    /// Display identity of a slot
    pub fn player(&self, slot: Slot) -> &PlayerIdentity {
        &self.players[slot.index()]
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Pure read of the state machine; calling it never changes anything.
    pub fn state(&self) -> SessionState {
        match self.outcome {
            Some(GameOutcome::Winner(slot)) => SessionState::Won(slot),
            Some(GameOutcome::Tie) => SessionState::Tie,
            None => SessionState::InProgress(self.current),
        }
    }

    /// Drop the current player's piece into `column`.
    ///
    /// A winning move credits the current slot in `tally` before the session
    /// goes terminal, so a decisive game counts exactly once; the caller owns
    /// the tally so it can span many sessions. On a win the current slot
    /// stays on the winner; only a non-terminal move passes the turn.
    pub fn play_turn(
        &mut self,
        column: usize,
        tally: &mut ScoreTally,
    ) -> Result<Placement, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let row = self
            .board
            .drop_piece(column, self.current)
            .map_err(|e| match e {
                DropError::ColumnFull => MoveError::ColumnFull,
                DropError::InvalidColumn => MoveError::InvalidColumn,
            })?;

        if self.board.check_win(row, column) {
            self.outcome = Some(GameOutcome::Winner(self.current));
            tally.record_win(self.current);
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Tie);
        } else {
            self.current = self.current.other();
        }

        Ok(Placement {
            row,
            column,
            outcome: self.outcome,
        })
    }
}
