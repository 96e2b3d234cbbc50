use ratatui::{backend::Backend, Terminal};
use tracing::warn;

use crate::render::{FrameSnapshot, Renderer};

use super::game_view;

/// Paints frame snapshots through a ratatui terminal. Shared behind a mutex
/// between the key loop and the blink thread, hence the `Send` bound.
pub struct TerminalRenderer<B: Backend> {
    terminal: Terminal<B>,
}

impl<B: Backend> TerminalRenderer<B> {
    pub fn new(terminal: Terminal<B>) -> Self {
        TerminalRenderer { terminal }
    }
}

impl<B: Backend + Send> Renderer for TerminalRenderer<B> {
    fn draw(&mut self, frame: &FrameSnapshot) {
        // A failed repaint is not worth tearing the game down over.
        if let Err(err) = self.terminal.draw(|f| game_view::render(f, frame)) {
            warn!(%err, "terminal draw failed");
        }
    }
}
