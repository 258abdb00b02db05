//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! Whatever draws the game listens through [`GameObserver`] and feeds input back with
//! [`GameEngine::enqueue_input`] and [`GameEngine::reset`].

pub mod config;
pub mod direction;
pub mod engine;
pub mod error;
pub mod grid;
pub mod observer;
pub mod state;

// Re-export commonly used types
pub use config::GameConfig;
pub use direction::Direction;
pub use engine::{GameEngine, StepInfo, StepResult};
pub use error::{ConfigError, EngineError, GameOverReason};
pub use grid::{Cell, Grid};
pub use observer::{GameObserver, NullObserver};
pub use state::{GameStatus, Snake};
