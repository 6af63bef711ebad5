//! Neon Snake - a terminal Snake game with bonus food and a persistent
//! high score
//!
//! This library provides:
//! - Core game logic (game module): fixed-tick movement, collision
//!   detection, and the food lifecycle, free of any I/O
//! - Keyboard input mapping (input module)
//! - TUI rendering (render module)
//! - High score tracking and file persistence (scores module)
//! - The event loop tying them together (app module)

pub mod app;
pub mod game;
pub mod input;
pub mod render;
pub mod scores;
