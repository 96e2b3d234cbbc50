//! Terminal UI: the crossterm key loop, the ratatui game view, and the
//! renderer adapter shared with the blink thread.

mod app;
mod game_view;
mod terminal;

pub use app::App;
pub use terminal::TerminalRenderer;
