//! Core game logic: board representation with the gravity invariant, the
//! animated move executor, four-axis win detection, and the session state
//! machine.

mod board;
mod executor;
mod player;
mod session;
mod win;

pub use board::{Board, Cell, Coord};
pub use player::Player;
pub use session::{DropOutcome, RejectReason, Session, DEFAULT_DROP_INTERVAL};
pub use win::WinLine;
