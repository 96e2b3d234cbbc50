//! The move executor: validates a column drop and plays out the falling
//! animation frame by frame before settling the token and checking for a
//! win.

use tracing::debug;

use crate::render::{Clock, Renderer};

use super::board::Cell;
use super::session::{DropOutcome, RejectReason, Session};
use super::win;

/// Apply one drop for the session's current player. Deliberately blocking:
/// the caller gets control back only after the token has settled, which is
/// the backpressure point keeping drops serialized.
pub(crate) fn execute_drop(
    session: &mut Session,
    column: usize,
    renderer: &mut dyn Renderer,
    clock: &dyn Clock,
) -> DropOutcome {
    if session.is_terminal() {
        debug!(column, "drop rejected: game already over");
        return DropOutcome::Rejected(RejectReason::GameOver);
    }
    if column >= session.board().width() {
        debug!(column, "drop rejected: column out of range");
        return DropOutcome::Rejected(RejectReason::OutOfRange);
    }
    let Some(landing) = session.board().landing_row(column) else {
        debug!(column, "drop rejected: column full");
        return DropOutcome::Rejected(RejectReason::ColumnFull);
    };

    let player = session.current_player();
    let cell = player.to_cell();

    // Walk the token down one row per frame. The gravity invariant is
    // suspended for the column until the token reaches the landing row.
    for row in 0..=landing {
        if row > 0 {
            session.board_mut().set(row - 1, column, Cell::Empty);
        }
        session.board_mut().set(row, column, cell);
        renderer.draw(&session.snapshot(true));
        clock.sleep(session.drop_interval());
    }

    match win::check_win(session.board(), landing, column, player) {
        Some(line) => {
            debug!(
                player = player.name(),
                column,
                row = landing,
                run = line.cells().len(),
                "winning drop"
            );
            session.record_win(line.clone());
            renderer.draw(&session.snapshot(true));
            DropOutcome::PlacedAndWon { row: landing, line }
        }
        None => {
            debug!(player = player.name(), column, row = landing, "token placed");
            session.toggle_player();
            // Repaint after the toggle so the idle screen names the player
            // whose turn it now is, not the one who just moved.
            renderer.draw(&session.snapshot(true));
            DropOutcome::Placed { row: landing }
        }
    }
}
