//! Deterministic grid Snake.
//!
//! The simulation core lives in [`game`]: [`game::GameState::new`],
//! [`game::GameState::request_direction`] and [`game::GameState::step`] each
//! return a fresh state value and never fail. The remaining modules are the
//! collaborators that drive it from a terminal.

pub mod clock;
pub mod config;
pub mod food;
pub mod game;
pub mod input;
pub mod random;
pub mod renderer;
pub mod score;
pub mod session;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
