//! # Connect Four TUI
//!
//! A two-player, gravity-based grid game for the terminal: drop a token
//! into a column, tokens stack, first to align four in a row, column, or
//! diagonal wins. Built with Ratatui and crossterm.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, players, move executor, win
//!   detection, session state machine
//! - [`blink`] — Cancellable background loop driving the win flash and the
//!   idle splash overlays
//! - [`render`] — Collaborator seams: renderer read model, clock, input
//!   source
//! - [`ui`] — Terminal UI: key handling and ratatui painting
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod blink;
pub mod config;
pub mod error;
pub mod game;
pub mod render;
pub mod ui;
