//! Notifications the engine sends to whoever draws the game.

use super::error::GameOverReason;
use super::grid::Cell;

/// Receives state changes produced by [`GameEngine::tick_with`](super::GameEngine::tick_with).
///
/// Every method defaults to doing nothing so implementors only handle what
/// they draw.
pub trait GameObserver {
    /// The snake gained `added` as its new head and, unless it grew, lost
    /// `removed` from its tail
    fn on_snake_moved(&mut self, _added: Cell, _removed: Option<Cell>) {}

    fn on_apple_moved(&mut self, _old: Cell, _new: Cell) {}

    fn on_score_changed(&mut self, _score: u32) {}

    fn on_game_over(&mut self, _reason: GameOverReason) {}
}

/// Observer that ignores every notification
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl GameObserver for NullObserver {}

/// Forwards every notification to two observers in order
impl<A: GameObserver, B: GameObserver> GameObserver for (A, B) {
    fn on_snake_moved(&mut self, added: Cell, removed: Option<Cell>) {
        self.0.on_snake_moved(added, removed);
        self.1.on_snake_moved(added, removed);
    }

    fn on_apple_moved(&mut self, old: Cell, new: Cell) {
        self.0.on_apple_moved(old, new);
        self.1.on_apple_moved(old, new);
    }

    fn on_score_changed(&mut self, score: u32) {
        self.0.on_score_changed(score);
        self.1.on_score_changed(score);
    }

    fn on_game_over(&mut self, reason: GameOverReason) {
        self.0.on_game_over(reason);
        self.1.on_game_over(reason);
    }
}

impl<T: GameObserver + ?Sized> GameObserver for &mut T {
    fn on_snake_moved(&mut self, added: Cell, removed: Option<Cell>) {
        (**self).on_snake_moved(added, removed);
    }

    fn on_apple_moved(&mut self, old: Cell, new: Cell) {
        (**self).on_apple_moved(old, new);
    }

    fn on_score_changed(&mut self, score: u32) {
        (**self).on_score_changed(score);
    }

    fn on_game_over(&mut self, reason: GameOverReason) {
        (**self).on_game_over(reason);
    }
}
