//! High score tracking and persistence

pub mod store;
pub mod tracker;

pub use store::{FileHighScoreStore, HighScoreStore};
pub use tracker::HighScoreTracker;
