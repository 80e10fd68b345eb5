use std::time::Duration;

use ratatui::style::Color;
use thiserror::Error;

/// Default side length of the square grid.
pub const DEFAULT_GRID_SIZE: u16 = 20;

/// Smallest grid that fits the two starting segments.
pub const MIN_GRID_SIZE: u16 = 2;

/// Largest grid the terminal front end is willing to draw.
pub const MAX_GRID_SIZE: u16 = 64;

/// Default tick interval in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 140;

/// Input poll timeout per frame in milliseconds.
pub const FRAME_POLL_MS: u64 = 16;

/// Terminal columns used to draw one grid cell.
pub const CELL_WIDTH: u16 = 2;

/// Errors raised while validating game configuration.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum ConfigError {
    #[error("grid size {0} is too small, the snake needs at least 2 cells per side")]
    GridTooSmall(u16),
    #[error("grid size {0} is too large, at most 64 cells per side are supported")]
    GridTooLarge(u16),
    #[error("tick interval must be greater than zero")]
    ZeroTickInterval,
}

/// Side length of the square play field, validated on construction.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct GridSize(u16);

impl GridSize {
    /// Validates `side` and wraps it.
    pub fn new(side: u16) -> Result<Self, ConfigError> {
        if side < MIN_GRID_SIZE {
            return Err(ConfigError::GridTooSmall(side));
        }
        if side > MAX_GRID_SIZE {
            return Err(ConfigError::GridTooLarge(side));
        }
        Ok(Self(side))
    }

    /// Returns the number of cells along one side.
    #[must_use]
    pub fn side(self) -> u16 {
        self.0
    }

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.0) * usize::from(self.0)
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self(DEFAULT_GRID_SIZE)
    }
}

/// Validated runtime settings for one program run.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GameConfig {
    pub grid_size: GridSize,
    pub tick_interval: Duration,
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Builds a config from raw values, rejecting unusable ones.
    pub fn new(grid_side: u16, tick_ms: u64, seed: Option<u64>) -> Result<Self, ConfigError> {
        if tick_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }

        Ok(Self {
            grid_size: GridSize::new(grid_side)?,
            tick_interval: Duration::from_millis(tick_ms),
            seed,
        })
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: GridSize::default(),
            tick_interval: Duration::from_millis(DEFAULT_TICK_INTERVAL_MS),
            seed: None,
        }
    }
}

/// Colors applied to the board and HUD.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub snake_head: Color,
    pub snake_body: Color,
    pub food: Color,
    pub field_bg: Color,
    pub grid_line: Color,
    pub border_fg: Color,
    pub hud_score: Color,
    pub hud_muted: Color,
    pub status_fg: Color,
}

/// Forest green snake on a paper background.
pub const THEME_PAPER: Theme = Theme {
    snake_head: Color::Rgb(0x15, 0x3d, 0x26),
    snake_body: Color::Rgb(0x1f, 0x5d, 0x3a),
    food: Color::Rgb(0xc0, 0x39, 0x2b),
    field_bg: Color::Rgb(0xf6, 0xf3, 0xea),
    grid_line: Color::Rgb(0xe3, 0xe0, 0xd7),
    border_fg: Color::Rgb(0x8a, 0x86, 0x7c),
    hud_score: Color::White,
    hud_muted: Color::DarkGray,
    status_fg: Color::Yellow,
};

/// Glyph drawn for each occupied half of a cell.
pub const GLYPH_BLOCK: &str = "██";

/// Glyph drawn for empty cells.
pub const GLYPH_EMPTY: &str = " ·";
