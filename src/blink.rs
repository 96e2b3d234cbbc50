//! The cancellable background blink loop: a thread that toggles a transient
//! visual state at a fixed cadence. One instance flashes the winning line
//! after a game ends; another cycles the idle splash pattern before a game
//! starts. At most one loop is active per session.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::debug;

use crate::game::{Cell, Session};
use crate::render::{Clock, Renderer};

/// Default blink cadence.
pub const BLINK_INTERVAL: Duration = Duration::from_millis(500);

/// Level-triggered cancellation flag shared between a session and its blink
/// loop. The loop polls it at the top of every iteration, so cancellation
/// latency is bounded by one blink interval.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Signal cancellation. Stays signalled; cancelling twice is a no-op.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Sent by a blink loop to its owner once it has observed cancellation and
/// exited. The owner holds the authoritative session slot and performs the
/// swap to a fresh session; the loop itself never constructs one.
#[derive(Debug, PartialEq, Eq)]
pub struct RestartRequest;

/// Handle to a running blink loop thread.
pub struct BlinkLoop {
    handle: JoinHandle<()>,
}

impl BlinkLoop {
    /// Spawn a blink loop over a shared session. Each iteration polls the
    /// session's cancellation token; when signalled the loop sends a
    /// `RestartRequest` on `restart_tx` and exits. Otherwise it runs
    /// `producer` with the current show flag, snapshots the session, draws
    /// it, flips the flag, and sleeps one `interval`. The flag starts true.
    pub fn spawn<F>(
        session: Arc<Mutex<Session>>,
        renderer: Arc<Mutex<dyn Renderer>>,
        clock: Arc<dyn Clock>,
        interval: Duration,
        mut producer: F,
        restart_tx: mpsc::Sender<RestartRequest>,
    ) -> Self
    where
        F: FnMut(&mut Session, bool) + Send + 'static,
    {
        let token = session
            .lock()
            .expect("session lock poisoned")
            .cancel_token();
        debug!(interval_ms = interval.as_millis() as u64, "blink loop started");

        let handle = thread::spawn(move || {
            let mut show = true;
            loop {
                if token.is_cancelled() {
                    debug!("blink loop cancelled, requesting restart");
                    let _ = restart_tx.send(RestartRequest);
                    break;
                }
                let frame = {
                    let mut session = session.lock().expect("session lock poisoned");
                    producer(&mut session, show);
                    session.snapshot(show)
                };
                renderer
                    .lock()
                    .expect("renderer lock poisoned")
                    .draw(&frame);
                show = !show;
                clock.sleep(interval);
            }
        });

        BlinkLoop { handle }
    }

    /// Wait for the loop thread to exit. Call after cancelling the token.
    pub fn join(self) {
        let _ = self.handle.join();
    }
}

/// Producer for the win flash: the winning line is already recorded on the
/// session and carried by every snapshot, so the blink phase alone drives
/// the highlight on and off.
pub fn win_flash_producer() -> impl FnMut(&mut Session, bool) + Send {
    |_session, _show| {}
}

/// Producer for the idle splash: paint the splash pattern on the show
/// frame, wipe the board on the hide frame.
pub fn splash_producer() -> impl FnMut(&mut Session, bool) + Send {
    |session, show| {
        if show {
            paint_splash(session);
        } else {
            session.board_mut().clear();
        }
    }
}

/// Token pattern drawn while idle: a big "4" built from alternating player
/// tokens, as (row, col, cell). Assumes a board of at least 9 rows and 8
/// columns; cells outside a smaller board are skipped.
const SPLASH_PATTERN: [(usize, usize, Cell); 17] = [
    (1, 5, Cell::Red),
    (2, 4, Cell::Red),
    (2, 5, Cell::Yellow),
    (3, 4, Cell::Red),
    (3, 5, Cell::Yellow),
    (4, 3, Cell::Yellow),
    (4, 5, Cell::Red),
    (5, 3, Cell::Yellow),
    (5, 5, Cell::Red),
    (6, 2, Cell::Yellow),
    (6, 3, Cell::Red),
    (6, 4, Cell::Yellow),
    (6, 5, Cell::Red),
    (6, 6, Cell::Yellow),
    (6, 7, Cell::Red),
    (7, 5, Cell::Yellow),
    (8, 5, Cell::Yellow),
];

fn paint_splash(session: &mut Session) {
    let board = session.board_mut();
    for &(row, col, cell) in SPLASH_PATTERN.iter() {
        if board.in_bounds(row as i64, col as i64) {
            board.set(row, col, cell);
        }
    }
}
