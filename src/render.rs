//! Collaborator seams between the game core and the outside world: the
//! renderer read model, the clock used for fixed-interval sleeps, and the
//! input source yielding column selections.

use std::time::Duration;

use crate::game::{Board, Coord, Player};

/// Owned read model handed to the renderer, one per animation frame or
/// blink toggle. Carrying a board clone keeps the renderer free of any
/// locking against the session.
#[derive(Debug, Clone)]
pub struct FrameSnapshot {
    pub board: Board,
    pub current_player: Player,
    pub winner: Option<Player>,
    /// Cells of the winning line, empty when the game is still open.
    pub highlight: Vec<Coord>,
    /// Blink phase for the highlight and the winner banner.
    pub highlight_on: bool,
}

/// Paints frames. Invoked from the foreground drop animation and from the
/// blink thread, hence `Send`. Makes no game-logic decisions.
pub trait Renderer: Send {
    fn draw(&mut self, frame: &FrameSnapshot);
}

/// Renderer that discards every frame, for headless use.
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn draw(&mut self, _frame: &FrameSnapshot) {}
}

/// Fixed-interval sleeps. The drop animation and the blink loop are the
/// only suspension points in the core.
pub trait Clock: Send + Sync {
    fn sleep(&self, duration: Duration);
}

/// Clock backed by `std::thread::sleep`.
pub struct SystemClock;

impl Clock for SystemClock {
    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Yields one column selection per call, serialized by contract. None means
/// the source is exhausted.
pub trait InputSource {
    fn next_column(&mut self) -> Option<usize>;
}

/// Input source over a fixed move list.
pub struct ScriptedInput {
    columns: std::vec::IntoIter<usize>,
}

impl ScriptedInput {
    pub fn new(columns: Vec<usize>) -> Self {
        ScriptedInput {
            columns: columns.into_iter(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn next_column(&mut self) -> Option<usize> {
        self.columns.next()
    }
}

#[cfg(test)]
pub use test_doubles::{InstantClock, RecordingRenderer};

#[cfg(test)]
mod test_doubles {
    use std::sync::{Arc, Mutex};

    use super::*;

    /// Clock that never sleeps, keeping animation tests instant.
    pub struct InstantClock;

    impl Clock for InstantClock {
        fn sleep(&self, _duration: Duration) {}
    }

    /// Renderer that records every frame it is asked to draw. The frame
    /// store is shared so tests can inspect it while a blink thread still
    /// owns the renderer.
    #[derive(Default)]
    pub struct RecordingRenderer {
        frames: Arc<Mutex<Vec<FrameSnapshot>>>,
    }

    impl RecordingRenderer {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn frames_handle(&self) -> Arc<Mutex<Vec<FrameSnapshot>>> {
            self.frames.clone()
        }

        pub fn frames(&self) -> Vec<FrameSnapshot> {
            self.frames.lock().unwrap().clone()
        }
    }

    impl Renderer for RecordingRenderer {
        fn draw(&mut self, frame: &FrameSnapshot) {
            self.frames.lock().unwrap().push(frame.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_input_yields_in_order_then_exhausts() {
        let mut input = ScriptedInput::new(vec![3, 0, 6]);
        assert_eq!(input.next_column(), Some(3));
        assert_eq!(input.next_column(), Some(0));
        assert_eq!(input.next_column(), Some(6));
        assert_eq!(input.next_column(), None);
        assert_eq!(input.next_column(), None);
    }
}
