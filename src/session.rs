use std::time::Instant;

use log::{debug, info};

use crate::clock::TickClock;
use crate::game::{DeathReason, GameState, GameStatus};
use crate::input::GameInput;
use crate::random::{RandomSource, SeededSource};

/// Status line shown while the clock is paused.
pub const PAUSED_MESSAGE: &str = "Paused";

/// Status line shown after the snake dies of an unrecorded cause.
pub const GAME_OVER_MESSAGE: &str = "Game over! Press R to restart";

/// Builds the game-over status line from what ended the run.
#[must_use]
pub fn game_over_message(reason: Option<DeathReason>, steps: u64) -> String {
    let cause = match reason {
        Some(DeathReason::WallCollision) => "Hit the wall",
        Some(DeathReason::SelfCollision) => "Bit yourself",
        None => return GAME_OVER_MESSAGE.to_owned(),
    };
    let unit = if steps == 1 { "step" } else { "steps" };
    format!("{cause} after {steps} {unit}! Press R to restart")
}

/// Whether the caller should keep running after an input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Notable outcome of [`Session::advance`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SessionEvent {
    Stepped,
    GameOver { score: u32, new_best: bool },
}

/// Owns the current game and drives it from input and the tick clock.
#[derive(Debug, Clone)]
pub struct Session<R = SeededSource> {
    state: GameState<R>,
    clock: TickClock,
    best_score: u32,
}

impl<R: RandomSource + Clone> Session<R> {
    /// Wraps a fresh game; `best_score` comes from earlier runs.
    #[must_use]
    pub fn new(state: GameState<R>, clock: TickClock, best_score: u32) -> Self {
        Self {
            state,
            clock,
            best_score,
        }
    }

    /// Applies one external input event.
    pub fn handle_input(&mut self, input: GameInput) -> Flow {
        match input {
            GameInput::Direction(direction) => {
                self.state = self.state.request_direction(direction);
            }
            GameInput::Pause => {
                if self.state.status() == GameStatus::Dead {
                    return Flow::Continue;
                }
                if self.clock.is_paused() {
                    self.clock.resume();
                } else {
                    self.clock.pause();
                }
                debug!("paused: {}", self.clock.is_paused());
            }
            GameInput::Reset => self.reset(),
            GameInput::Quit => return Flow::Quit,
        }

        Flow::Continue
    }

    /// Steps the game when the clock says a tick is due.
    pub fn advance(&mut self, now: Instant) -> Option<SessionEvent> {
        if !self.state.alive || !self.clock.due(now) {
            return None;
        }

        self.state = self.state.step();
        if self.state.alive {
            return Some(SessionEvent::Stepped);
        }

        self.clock.pause();
        let score = self.state.score;
        let new_best = score > self.best_score;
        if new_best {
            self.best_score = score;
        }
        info!(
            "game over after {} steps with score {score} (best {})",
            self.state.steps, self.best_score
        );

        Some(SessionEvent::GameOver { score, new_best })
    }

    /// Starts a new game on the same grid, continuing the random stream.
    pub fn reset(&mut self) {
        let bounds = self.state.bounds();
        let rng = self.state.rng().clone();
        self.state = GameState::new(bounds, rng);
        self.clock.reset();
        info!("new game on {0}x{0} grid", bounds.side());
    }

    /// Returns the message the front end should overlay, if any.
    #[must_use]
    pub fn status_message(&self) -> Option<String> {
        match self.state.status() {
            GameStatus::Dead => Some(game_over_message(
                self.state.death_reason,
                self.state.steps,
            )),
            GameStatus::Active if self.clock.is_paused() => Some(PAUSED_MESSAGE.to_owned()),
            GameStatus::Active => None,
        }
    }

    #[must_use]
    pub fn state(&self) -> &GameState<R> {
        &self.state
    }

    #[must_use]
    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.clock.is_paused()
    }
}
