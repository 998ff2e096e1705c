//! Flappy - a terminal Flappy Bird.
//!
//! This module exposes the game logic for testing and external use.

pub mod core;
pub mod game;
pub mod input;
pub mod ui;
pub mod utils;

pub use crate::core::config::GameConfig;
pub use game::{FlappyGame, GameLoop, GamePhase, PlayArea, SceneView};
