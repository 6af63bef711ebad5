use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width of the game grid in cells
    pub grid_width: usize,
    /// Height of the game grid in cells
    pub grid_height: usize,
    /// Initial length of the snake
    pub initial_snake_length: usize,

    /// Milliseconds between logic ticks
    pub tick_ms: u64,

    /// Points for eating normal food
    pub food_points: u32,
    /// Points for eating bonus food
    pub bonus_points: u32,
    /// Probability of a bonus food spawning after a normal food regeneration
    pub bonus_chance: f64,
    /// How long a bonus food stays on the grid before expiring
    pub bonus_duration_ms: u64,
    /// How long the consumption flash stays visible
    pub flash_duration_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 20,
            grid_height: 20,
            initial_snake_length: 1,
            tick_ms: 150,
            food_points: 1,
            bonus_points: 2,
            bonus_chance: 0.15,
            bonus_duration_ms: 4000,
            flash_duration_ms: 100,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn bonus_duration(&self) -> Duration {
        Duration::from_millis(self.bonus_duration_ms)
    }

    pub fn flash_duration(&self) -> Duration {
        Duration::from_millis(self.flash_duration_ms)
    }

    /// Create a small grid for testing
    #[cfg(test)]
    pub fn small() -> Self {
        Self::new(10, 10)
    }
}
