use crate::game::{Board, Cell, GameSession, PlayerIdentity, ScoreTally, SessionState, Slot};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Terminal color for a display identity. Identities are free-form labels;
/// anything the terminal cannot name falls back to white rather than failing.
fn identity_color(identity: &PlayerIdentity) -> Color {
    identity.as_str().parse().unwrap_or(Color::White)
}

pub fn render(
    frame: &mut Frame,
    session: &GameSession,
    tally: &ScoreTally,
    selected_column: usize,
    message: &Option<String>,
) {
    let board_height = session.board().height() as u16;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                // Header
            Constraint::Min(board_height + 4),    // Board
            Constraint::Length(3),                // Score
            Constraint::Length(3),                // Message
            Constraint::Length(3),                // Controls
        ])
        .split(frame.area());

    render_header(frame, session, chunks[0]);
    render_board(frame, session, selected_column, chunks[1]);
    render_scores(frame, session, tally, chunks[2]);
    render_message(frame, message, chunks[3]);
    render_controls(frame, chunks[4]);
}

fn render_header(frame: &mut Frame, session: &GameSession, area: ratatui::layout::Rect) {
    let one = session.player(Slot::First);
    let two = session.player(Slot::Second);

    let (status, color) = match session.state() {
        SessionState::InProgress(slot) => {
            let current = session.player(slot);
            (
                format!("{} versus {}  |  {} to move", one, two, current),
                identity_color(current),
            )
        }
        SessionState::Won(slot) => {
            let winner = session.player(slot);
            (
                format!("Game Over  |  {} wins", winner),
                identity_color(winner),
            )
        }
        SessionState::Tie => ("Game Over  |  Tie".to_string(), Color::White),
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    session: &GameSession,
    selected_column: usize,
    area: ratatui::layout::Rect,
) {
    let board: &Board = session.board();
    let slot_colors = [
        identity_color(session.player(Slot::First)),
        identity_color(session.player(Slot::Second)),
    ];

    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..board.width() {
        if col == selected_column {
            col_line.push(Span::styled(
                format!("{:^3}", col + 1),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(format!("{:^3}", col + 1)));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    // Top border
    lines.push(Line::from(format!(
        "  ╔{}╗",
        "═".repeat(board.width() * 3 + 1)
    )));

    // Board rows
    for row in 0..board.height() {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..board.width() {
            let (symbol, color) = match board.get(row, col) {
                Cell::Empty => (" . ", Color::DarkGray),
                Cell::Taken(slot) => (" ● ", slot_colors[slot.index()]),
            };
            row_spans.push(Span::styled(symbol, Style::default().fg(color)));
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    // Bottom border
    lines.push(Line::from(format!(
        "  ╚{}╝",
        "═".repeat(board.width() * 3 + 1)
    )));

    // Selection indicator
    let mut indicator_line = vec![Span::raw("   ")]; // Align with board (3 chars to match "  ║")
    for col in 0..board.width() {
        if col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_scores(
    frame: &mut Frame,
    session: &GameSession,
    tally: &ScoreTally,
    area: ratatui::layout::Rect,
) {
    let mut spans = Vec::new();
    for slot in [Slot::First, Slot::Second] {
        let identity = session.player(slot);
        spans.push(Span::styled(
            identity.to_string(),
            Style::default()
                .fg(identity_color(identity))
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(format!(": {}", tally.wins(slot))));
        if slot == Slot::First {
            spans.push(Span::raw("   "));
        }
    }

    let scores = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Wins"));

    frame.render_widget(scores, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: ratatui::layout::Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: ratatui::layout::Rect) {
    let controls = Paragraph::new("←/→: Move  |  Enter: Drop  |  R: Rematch  |  Q: Quit")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
