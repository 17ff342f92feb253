use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use connect_four::config::AppConfig;
use connect_four::game::{GameSession, PlayerIdentity};
use connect_four::ui::App;

/// Two-player Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Two-player Connect Four in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override the number of board rows
    #[arg(long)]
    rows: Option<usize>,

    /// Override the number of board columns
    #[arg(long)]
    cols: Option<usize>,

    /// Override the first player's color
    #[arg(long)]
    player_one: Option<String>,

    /// Override the second player's color
    #[arg(long)]
    player_two: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(rows) = cli.rows {
        config.board.rows = rows;
    }
    if let Some(cols) = cli.cols {
        config.board.cols = cols;
    }
    if let Some(one) = cli.player_one {
        config.players.one = one;
    }
    if let Some(two) = cli.player_two {
        config.players.two = two;
    }
    config.validate()?;

    let players = [
        PlayerIdentity::new(config.players.one),
        PlayerIdentity::new(config.players.two),
    ];
    let session = GameSession::new(config.board.cols, config.board.rows, players)?;
    let mut app = App::new(session);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal before reporting any error from the app
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res.context("running game loop")
}
