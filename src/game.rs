use log::debug;

use crate::config::GridSize;
use crate::food::random_cell;
use crate::input::{Direction, direction_change_is_valid};
use crate::random::{RandomSource, SeededSource};
use crate::snake::{Position, Snake};

/// Coarse lifecycle of a game.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Active,
    Dead,
}

/// What ended the game.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

/// Complete simulation state for one game.
///
/// Every transition returns a new value and leaves `self` untouched. Once
/// `alive` is false the state is terminal: both [`GameState::step`] and
/// [`GameState::request_direction`] hand back an equal copy.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState<R = SeededSource> {
    pub snake: Snake,
    /// Direction used by the most recent step.
    pub direction: Direction,
    /// Direction the next step will use.
    pub pending_direction: Direction,
    pub food: Option<Position>,
    pub score: u32,
    pub alive: bool,
    /// Number of completed, non-fatal steps.
    pub steps: u64,
    pub death_reason: Option<DeathReason>,
    bounds: GridSize,
    rng: R,
}

impl GameState<SeededSource> {
    /// Creates a deterministic state for tests and reproducible simulations.
    #[must_use]
    pub fn new_with_seed(bounds: GridSize, seed: u64) -> Self {
        Self::new(bounds, SeededSource::from_seed(seed))
    }
}

impl<R: RandomSource + Clone> GameState<R> {
    /// Starts a game: a two-cell snake in the middle facing right, with the
    /// head at the center cell and food on a random free cell.
    #[must_use]
    pub fn new(bounds: GridSize, mut rng: R) -> Self {
        let center = i32::from(bounds.side() / 2);
        let snake = Snake::from_segments(vec![
            Position::new(center, center),
            Position::new(center - 1, center),
        ]);
        let food = random_cell(bounds, &snake, &mut rng);

        Self {
            snake,
            direction: Direction::Right,
            pending_direction: Direction::Right,
            food,
            score: 0,
            alive: true,
            steps: 0,
            death_reason: None,
            bounds,
            rng,
        }
    }

    /// Queues `direction` for the next step.
    ///
    /// Reversing the committed direction would run the head into the neck,
    /// so such requests are ignored. Later requests overwrite earlier ones.
    /// A dead state ignores every request.
    #[must_use]
    pub fn request_direction(&self, direction: Direction) -> Self {
        if !self.alive || !direction_change_is_valid(self.direction, direction) {
            return self.clone();
        }

        Self {
            pending_direction: direction,
            ..self.clone()
        }
    }

    /// Like [`GameState::request_direction`] but takes a direction name;
    /// unknown names leave the state unchanged.
    #[must_use]
    pub fn request_direction_named(&self, name: &str) -> Self {
        match name.parse::<Direction>() {
            Ok(direction) => self.request_direction(direction),
            Err(error) => {
                debug!("ignoring direction request: {error}");
                self.clone()
            }
        }
    }

    /// Advances the simulation by one tick.
    #[must_use]
    pub fn step(&self) -> Self {
        if !self.alive {
            return self.clone();
        }

        let direction = self.pending_direction;
        let next_head = self.snake.head().stepped(direction);

        if !next_head.is_within_bounds(self.bounds) {
            return self.killed(direction, DeathReason::WallCollision);
        }

        if self.snake.blocks(next_head) {
            return self.killed(direction, DeathReason::SelfCollision);
        }

        let mut next = self.clone();
        next.direction = direction;
        next.steps += 1;

        if self.food == Some(next_head) {
            next.snake = self.snake.advanced(next_head, true);
            next.score += 1;
            next.food = random_cell(self.bounds, &next.snake, &mut next.rng);
            if next.food.is_none() {
                debug!(
                    "grid {side}x{side} is full, continuing without food",
                    side = self.bounds.side()
                );
            }
        } else {
            next.snake = self.snake.advanced(next_head, false);
        }

        next
    }

    /// Returns the game's lifecycle status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.alive {
            GameStatus::Active
        } else {
            GameStatus::Dead
        }
    }

    /// Returns the grid this game is played on.
    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    /// Returns the random source carried by this state.
    #[must_use]
    pub fn rng(&self) -> &R {
        &self.rng
    }

    fn killed(&self, direction: Direction, reason: DeathReason) -> Self {
        debug!(
            "snake died at step {} with score {}: {reason:?}",
            self.steps, self.score
        );

        Self {
            direction,
            alive: false,
            death_reason: Some(reason),
            ..self.clone()
        }
    }
}
