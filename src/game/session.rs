use std::time::Duration;

use crate::blink::CancelToken;
use crate::error::GameError;
use crate::render::{Clock, FrameSnapshot, InputSource, Renderer};

use super::board::Board;
use super::executor;
use super::player::Player;
use super::win::WinLine;

/// Default pause between drop animation frames.
pub const DEFAULT_DROP_INTERVAL: Duration = Duration::from_millis(30);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    OutOfRange,
    ColumnFull,
    GameOver,
}

/// Result of a drop attempt. Invalid input is absorbed as `Rejected`, never
/// raised as an error; only construction can fail.
#[derive(Debug, Clone, PartialEq)]
pub enum DropOutcome {
    Rejected(RejectReason),
    Placed { row: usize },
    PlacedAndWon { row: usize, line: WinLine },
}

/// One game from first move to win: the board, whose turn it is, the
/// recorded winner and winning line, and the cancellation token any blink
/// loop attached to this session polls.
///
/// The session is terminal the instant a winner is recorded; every later
/// `input` is rejected and the board stays frozen.
pub struct Session {
    board: Board,
    current_player: Player,
    winner: Option<Player>,
    win_line: Option<WinLine>,
    cancel: CancelToken,
    drop_interval: Duration,
}

impl Session {
    /// Create a fresh session with an empty board. Red moves first.
    pub fn new(width: usize, height: usize) -> Result<Self, GameError> {
        Ok(Session {
            board: Board::new(width, height)?,
            current_player: Player::Red,
            winner: None,
            win_line: None,
            cancel: CancelToken::new(),
            drop_interval: DEFAULT_DROP_INTERVAL,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    pub fn win_line(&self) -> Option<&WinLine> {
        self.win_line.as_ref()
    }

    pub fn is_terminal(&self) -> bool {
        self.winner.is_some()
    }

    /// Handle to this session's cancellation token. Level-triggered: once
    /// cancelled it stays cancelled for the session's lifetime.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    pub fn drop_interval(&self) -> Duration {
        self.drop_interval
    }

    pub fn set_drop_interval(&mut self, interval: Duration) {
        self.drop_interval = interval;
    }

    /// The single mutation entrypoint: drop the current player's token into
    /// `column`. Blocks for the full falling animation (one repaint and one
    /// sleep per row traversed); no second drop can interleave.
    pub fn input(
        &mut self,
        column: usize,
        renderer: &mut dyn Renderer,
        clock: &dyn Clock,
    ) -> DropOutcome {
        executor::execute_drop(self, column, renderer, clock)
    }

    /// Feed moves from an input source until it is exhausted or someone
    /// wins. Returns the winner, if any.
    pub fn drive<I: InputSource>(
        &mut self,
        input: &mut I,
        renderer: &mut dyn Renderer,
        clock: &dyn Clock,
    ) -> Option<Player> {
        while let Some(column) = input.next_column() {
            if let DropOutcome::PlacedAndWon { .. } = self.input(column, renderer, clock) {
                break;
            }
        }
        self.winner
    }

    /// Build the renderer read model for the current state.
    pub fn snapshot(&self, highlight_on: bool) -> FrameSnapshot {
        FrameSnapshot {
            board: self.board.clone(),
            current_player: self.current_player,
            winner: self.winner,
            highlight: self
                .win_line
                .as_ref()
                .map(|line| line.cells().to_vec())
                .unwrap_or_default(),
            highlight_on,
        }
    }

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub(crate) fn record_win(&mut self, line: WinLine) {
        self.winner = Some(self.current_player);
        self.win_line = Some(line);
    }

    pub(crate) fn toggle_player(&mut self) {
        self.current_player = self.current_player.other();
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        // Tearing a session down releases any blink loop still polling it.
        self.cancel.cancel();
    }
}
