use crate::game::{GameOutcome, GameSession, MoveError, ScoreTally};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;

pub struct App {
    session: GameSession,
    tally: ScoreTally,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    /// Wrap a freshly created session. The tally starts at zero and survives
    /// rematches for as long as the app runs.
    pub fn new(session: GameSession) -> Self {
        let selected_column = session.board().width() / 2;
        App {
            session,
            tally: ScoreTally::new(),
            selected_column,
            should_quit: false,
            message: None,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column < self.session.board().width() - 1 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                // Same players, same board size, empty board; wins carry over
                self.session = self.session.rematch();
                self.selected_column = self.session.board().width() / 2;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        match self.session.play_turn(self.selected_column, &mut self.tally) {
            Ok(placement) => {
                if let Some(outcome) = placement.outcome {
                    self.message = Some(match outcome {
                        GameOutcome::Winner(slot) => {
                            format!("{} wins!", self.session.player(slot))
                        }
                        GameOutcome::Tie => "Tie!".to_string(),
                    });
                }
            }
            Err(MoveError::ColumnFull) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(MoveError::InvalidColumn) => {
                self.message = Some("Invalid column!".to_string());
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game is over! Press 'r' for a rematch.".to_string());
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.session,
            &self.tally,
            self.selected_column,
            &self.message,
        );
    }
}
