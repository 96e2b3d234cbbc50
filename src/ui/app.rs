use std::io;
use std::sync::{mpsc, Arc, Mutex};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent};
use tracing::info;

use crate::blink::{self, BlinkLoop, RestartRequest};
use crate::config::GameConfig;
use crate::error::GameError;
use crate::game::{DropOutcome, Session};
use crate::render::{Clock, Renderer, SystemClock};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Owns the authoritative session slot, the shared renderer, and whichever
/// blink loop is currently running. All session swaps happen here: a blink
/// loop only ever asks for a restart, it never installs one itself.
pub struct App {
    config: GameConfig,
    session: Arc<Mutex<Session>>,
    renderer: Arc<Mutex<dyn Renderer>>,
    clock: Arc<dyn Clock>,
    blink: Option<BlinkLoop>,
    restart_tx: mpsc::Sender<RestartRequest>,
    restart_rx: mpsc::Receiver<RestartRequest>,
    should_quit: bool,
}

impl App {
    pub fn new(config: GameConfig, renderer: Arc<Mutex<dyn Renderer>>) -> Result<Self, GameError> {
        let mut session = Session::new(config.width, config.height)?;
        session.set_drop_interval(config.drop_interval());
        let (restart_tx, restart_rx) = mpsc::channel();

        Ok(App {
            config,
            session: Arc::new(Mutex::new(session)),
            renderer,
            clock: Arc::new(SystemClock),
            blink: None,
            restart_tx,
            restart_rx,
            should_quit: false,
        })
    }

    /// Main application loop: idle splash until the first key press, then
    /// the game until quit.
    pub fn run(&mut self) -> io::Result<()> {
        self.start_blink(blink::splash_producer());

        // Any key leaves the splash; q quits outright.
        loop {
            if event::poll(POLL_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                        self.stop_blink();
                        return Ok(());
                    }
                    break;
                }
            }
        }
        self.restart();

        while !self.should_quit {
            if event::poll(POLL_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key);
                }
            }
        }
        self.stop_blink();
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.restart();
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                self.drop_into(c as usize - '0' as usize);
            }
            _ => {}
        }
    }

    /// Forward one column selection to the session. Blocks for the falling
    /// animation; a win hands the session over to the flash loop.
    fn drop_into(&mut self, column: usize) {
        if self.blink.is_some() {
            // A flash loop owns the repaints; the session is terminal and
            // would reject the drop anyway.
            return;
        }
        let outcome = {
            let mut session = self.session.lock().expect("session lock poisoned");
            let mut renderer = self.renderer.lock().expect("renderer lock poisoned");
            session.input(column, &mut *renderer, &*self.clock)
        };
        if let DropOutcome::PlacedAndWon { .. } = outcome {
            info!("game won, starting win flash");
            self.start_blink(blink::win_flash_producer());
        }
    }

    fn start_blink<F>(&mut self, producer: F)
    where
        F: FnMut(&mut Session, bool) + Send + 'static,
    {
        self.blink = Some(BlinkLoop::spawn(
            self.session.clone(),
            self.renderer.clone(),
            self.clock.clone(),
            self.config.blink_interval(),
            producer,
            self.restart_tx.clone(),
        ));
    }

    /// Cancel the running blink loop, if any, and wait for it to confirm.
    fn stop_blink(&mut self) {
        if let Some(blink) = self.blink.take() {
            self.session
                .lock()
                .expect("session lock poisoned")
                .cancel_token()
                .cancel();
            // The loop notices within one blink interval and confirms.
            let _ = self
                .restart_rx
                .recv_timeout(self.config.blink_interval() * 4);
            blink.join();
        }
    }

    /// Swap a fresh session into the shared slot and repaint. This is the
    /// owner side of the restart handoff.
    fn restart(&mut self) {
        self.stop_blink();

        let mut fresh = Session::new(self.config.width, self.config.height)
            .expect("config dimensions validated at startup");
        fresh.set_drop_interval(self.config.drop_interval());

        let frame = {
            let mut session = self.session.lock().expect("session lock poisoned");
            *session = fresh;
            session.snapshot(true)
        };
        self.renderer
            .lock()
            .expect("renderer lock poisoned")
            .draw(&frame);
        info!("session restarted");
    }
}
