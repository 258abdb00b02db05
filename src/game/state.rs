use std::collections::VecDeque;

use super::error::GameOverReason;
use super::grid::Cell;

/// The snake in the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    /// Body segments, oldest (tail) first and head last
    body: VecDeque<Cell>,
}

impl Snake {
    /// Create a snake from its segments, tail first
    pub fn new(segments: impl IntoIterator<Item = Cell>) -> Self {
        Self {
            body: segments.into_iter().collect(),
        }
    }

    /// Get the head position
    pub fn head(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    /// The segment right behind the head, if the snake is long enough
    pub fn neck(&self) -> Option<Cell> {
        self.body.len().checked_sub(2).map(|i| self.body[i])
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Segments from tail to head
    pub fn segments(&self) -> impl Iterator<Item = Cell> + '_ {
        self.body.iter().copied()
    }

    /// Append a new head
    pub fn push_head(&mut self, cell: Cell) {
        self.body.push_back(cell);
    }

    /// Drop the oldest segment and return it
    pub fn pop_tail(&mut self) -> Option<Cell> {
        self.body.pop_front()
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }
}

/// Where the game is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    GameOver(GameOverReason),
    /// An internal invariant broke; the engine refuses further ticks
    Faulted,
}

impl GameStatus {
    pub fn is_running(self) -> bool {
        self == GameStatus::Running
    }

    pub fn is_terminal(self) -> bool {
        !self.is_running()
    }
}
