//! Core game logic module
//!
//! Everything here is free of I/O and rendering dependencies: a tick is a
//! pure function of the current state, the latest directional input, and the
//! current time.

pub mod config;
pub mod direction;
pub mod engine;
pub mod state;

// Re-export commonly used types
pub use config::GameConfig;
pub use direction::Direction;
pub use engine::{GameEngine, StepInfo, StepResult};
pub use state::{BonusFood, CollisionType, Flash, FoodKind, GameState, Position, Snake};
