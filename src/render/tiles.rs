use crate::game::{Cell, GameEngine, GameObserver, GameOverReason, GameStatus, Grid};

/// What a single grid tile currently shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Empty,
    Snake,
    Head,
    Apple,
}

/// Renderer-side copy of the grid.
///
/// Built once from the engine, then kept current only through
/// [`GameObserver`] notifications, touching just the tiles that changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileBoard {
    grid: Grid,
    tiles: Vec<Tile>,
    head: Option<Cell>,
    score: u32,
    game_over: Option<GameOverReason>,
}

impl TileBoard {
    pub fn from_engine(engine: &GameEngine) -> Self {
        let grid = engine.grid();
        let mut board = Self {
            grid,
            tiles: vec![Tile::Empty; grid.cell_count()],
            head: None,
            score: 0,
            game_over: None,
        };
        board.rebuild(engine);
        board
    }

    /// Repaint every tile from the engine, used after a reset
    pub fn rebuild(&mut self, engine: &GameEngine) {
        self.tiles.fill(Tile::Empty);
        for cell in engine.snake().segments() {
            self.tiles[cell] = Tile::Snake;
        }
        let head = engine.snake().head();
        self.tiles[head] = Tile::Head;
        self.tiles[engine.apple()] = Tile::Apple;
        self.head = Some(head);
        self.score = engine.score();
        self.game_over = match engine.status() {
            GameStatus::GameOver(reason) => Some(reason),
            _ => None,
        };
    }

    /// Tiles grouped by row, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.tiles.chunks(self.grid.width())
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn game_over(&self) -> Option<GameOverReason> {
        self.game_over
    }
}

impl GameObserver for TileBoard {
    fn on_snake_moved(&mut self, added: Cell, removed: Option<Cell>) {
        if let Some(old_head) = self.head {
            self.tiles[old_head] = Tile::Snake;
        }
        if let Some(tail) = removed {
            self.tiles[tail] = Tile::Empty;
        }
        self.tiles[added] = Tile::Head;
        self.head = Some(added);
    }

    fn on_apple_moved(&mut self, old: Cell, new: Cell) {
        // The eaten apple's tile is usually the head by now
        if self.tiles[old] == Tile::Apple {
            self.tiles[old] = Tile::Empty;
        }
        self.tiles[new] = Tile::Apple;
    }

    fn on_score_changed(&mut self, score: u32) {
        self.score = score;
    }

    fn on_game_over(&mut self, reason: GameOverReason) {
        self.game_over = Some(reason);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, GameConfig};

    fn tile(board: &TileBoard, cell: Cell) -> Tile {
        *board.rows().flatten().nth(cell).unwrap()
    }

    fn engine(seed: u64) -> GameEngine {
        let config = GameConfig {
            initial_apple: 172,
            ..GameConfig::default()
        };
        GameEngine::with_seed(config, seed).unwrap()
    }

    #[test]
    fn test_initial_board() {
        let engine = engine(1);
        let board = TileBoard::from_engine(&engine);

        assert_eq!(tile(&board, 168), Tile::Snake);
        assert_eq!(tile(&board, 171), Tile::Head);
        assert_eq!(tile(&board, 172), Tile::Apple);
        assert_eq!(tile(&board, 0), Tile::Empty);
        assert_eq!(board.rows().count(), 15);
        assert!(board.rows().all(|row| row.len() == 15));
    }

    #[test]
    fn test_notifications_keep_board_in_sync() {
        let mut engine = engine(3);
        let mut board = TileBoard::from_engine(&engine);

        let moves = [
            Direction::Right,
            Direction::Up,
            Direction::Up,
            Direction::Left,
            Direction::Left,
            Direction::Left,
            Direction::Down,
        ];
        for direction in moves {
            engine.enqueue_input(direction);
            engine.tick_with(&mut board).unwrap();

            let expected = TileBoard::from_engine(&engine);
            assert_eq!(board, expected);
        }
        assert!(board.score() >= 1);
    }

    #[test]
    fn test_game_over_is_recorded() {
        let mut engine = engine(1);
        let mut board = TileBoard::from_engine(&engine);

        engine.enqueue_input(Direction::Left);
        assert!(engine.tick_with(&mut board).is_err());

        assert_eq!(board.game_over(), Some(GameOverReason::SelfCollision));

        engine.reset();
        board.rebuild(&engine);
        assert_eq!(board.game_over(), None);
        assert_eq!(board, TileBoard::from_engine(&engine));
    }
}
