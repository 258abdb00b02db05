use thiserror::Error;

use super::grid::Cell;

/// Why a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOverReason {
    /// Snake hit a wall
    WallCollision,
    /// Snake bit itself
    SelfCollision,
}

impl GameOverReason {
    pub fn message(self) -> &'static str {
        match self {
            GameOverReason::WallCollision => "The snake has hit the wall",
            GameOverReason::SelfCollision => "The snake has bit itself",
        }
    }
}

/// Failures raised while advancing the simulation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("the snake has hit the wall")]
    WallCollision,
    #[error("the snake has bit itself")]
    SelfCollision,
    #[error("snake segments {neck} and {head} are not connected")]
    DisconnectedSegments { head: Cell, neck: Cell },
    #[error("no free cell left for an apple")]
    NoSpaceAvailable,
}

impl EngineError {
    /// The game-over reason for expected terminal events, `None` for
    /// invariant failures.
    pub fn game_over_reason(&self) -> Option<GameOverReason> {
        match self {
            EngineError::WallCollision => Some(GameOverReason::WallCollision),
            EngineError::SelfCollision => Some(GameOverReason::SelfCollision),
            EngineError::DisconnectedSegments { .. } | EngineError::NoSpaceAvailable => None,
        }
    }

    /// Invariant failures must be propagated, never shown as a normal loss
    pub fn is_fatal(&self) -> bool {
        self.game_over_reason().is_none()
    }
}

/// Errors raised when validating a [`GameConfig`](super::GameConfig)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid dimensions must be non-zero, got {width}x{height}")]
    ZeroSizedGrid { width: usize, height: usize },
    #[error("grid {width}x{height} exceeds {max_cells} cells")]
    GridTooLarge {
        width: usize,
        height: usize,
        max_cells: usize,
    },
    #[error("tick interval must be non-zero")]
    ZeroTickInterval,
    #[error("apple placement needs at least one attempt")]
    ZeroAppleAttempts,
    #[error("initial snake must have at least one segment")]
    EmptySnake,
    #[error("initial snake segment {cell} is outside a grid of {cells} cells")]
    SnakeOutOfBounds { cell: Cell, cells: usize },
    #[error("initial snake visits cell {cell} twice")]
    DuplicateSegment { cell: Cell },
    #[error("initial snake segments {from} and {to} are not adjacent")]
    DisconnectedSnake { from: Cell, to: Cell },
    #[error("initial snake leaves no room for an apple")]
    SnakeFillsGrid,
    #[error("initial apple {cell} is outside a grid of {cells} cells")]
    AppleOutOfBounds { cell: Cell, cells: usize },
    #[error("initial apple {cell} is on the snake")]
    AppleOnSnake { cell: Cell },
}
