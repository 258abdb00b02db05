//! Tile Snake - a grid Snake game driven one tick at a time
//!
//! This library provides:
//! - Core game logic (game module): grid arithmetic, the tick engine and its
//!   error kinds, and the observer trait renderers listen on
//! - TUI rendering (render module) built from engine notifications
//! - Keyboard mapping (input module) and session statistics (metrics module)
//! - The interactive terminal mode (modes module)

pub mod game;
pub mod input;
pub mod logging;
pub mod metrics;
pub mod modes;
pub mod render;
