//! Terminal UI: interactive game view for two players at one keyboard.

mod app;
mod game_view;

pub use app::App;
