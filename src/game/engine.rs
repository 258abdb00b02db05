use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;
use tracing::{debug, error, info, instrument, trace, warn};

use super::{
    config::GameConfig,
    direction::Direction,
    error::{ConfigError, EngineError},
    grid::{Cell, Grid},
    observer::{GameObserver, NullObserver},
    state::{GameStatus, Snake},
};

/// Information about a step that moved the snake
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepInfo {
    /// Direction the head moved in
    pub direction: Direction,
    /// New head cell
    pub head: Cell,
    /// Cell freed at the tail, `None` when the snake grew
    pub vacated: Option<Cell>,
    /// Whether the snake ate the apple this step
    pub ate_apple: bool,
}

/// Result of a game step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    /// The snake moved one cell
    Advanced(StepInfo),
    /// A single-segment snake has no heading until the first input arrives
    Waiting,
    /// The game has already ended; nothing changed
    Halted,
}

/// The game engine that owns the whole simulation state
pub struct GameEngine {
    config: GameConfig,
    grid: Grid,
    snake: Snake,
    apple: Cell,
    inputs: VecDeque<Direction>,
    score: u32,
    steps: u32,
    status: GameStatus,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine; apple placement is seeded from
    /// `config.seed` when present
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }

    /// Create an engine whose apple placement is fully determined by `seed`
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, rng: StdRng) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            grid: config.grid(),
            snake: Snake::new(config.initial_snake.iter().copied()),
            apple: config.initial_apple,
            inputs: VecDeque::new(),
            score: 0,
            steps: 0,
            status: GameStatus::Running,
            config,
            rng,
        })
    }

    /// Reset the game to its initial state
    pub fn reset(&mut self) {
        self.snake = Snake::new(self.config.initial_snake.iter().copied());
        self.apple = self.config.initial_apple;
        self.inputs.clear();
        self.score = 0;
        self.steps = 0;
        self.status = GameStatus::Running;
        info!(apple = self.apple, len = self.snake.len(), "game reset");
    }

    /// Queue a direction to be applied on a future tick.
    ///
    /// Reversals are not filtered here; turning back into the neck shows up
    /// as a self collision when the input is applied.
    pub fn enqueue_input(&mut self, direction: Direction) {
        trace!(%direction, queued = self.inputs.len(), "input queued");
        self.inputs.push_back(direction);
    }

    /// Execute one step of the game
    pub fn tick(&mut self) -> Result<StepResult, EngineError> {
        self.tick_with(&mut NullObserver)
    }

    /// Execute one step of the game and report what changed to `observer`
    #[instrument(level = "trace", skip_all)]
    pub fn tick_with<O: GameObserver + ?Sized>(
        &mut self,
        observer: &mut O,
    ) -> Result<StepResult, EngineError> {
        if self.status.is_terminal() {
            return Ok(StepResult::Halted);
        }

        match self.advance() {
            Ok(StepResult::Advanced(info)) => {
                observer.on_snake_moved(info.head, info.vacated);
                if info.ate_apple {
                    observer.on_score_changed(self.score);
                    observer.on_apple_moved(info.head, self.apple);
                }
                Ok(StepResult::Advanced(info))
            }
            Ok(other) => Ok(other),
            Err(err) => {
                self.fail(&err, observer);
                Err(err)
            }
        }
    }

    fn advance(&mut self) -> Result<StepResult, EngineError> {
        let direction = match self.inputs.pop_front() {
            Some(direction) => direction,
            None => match self.heading()? {
                Some(direction) => direction,
                None => return Ok(StepResult::Waiting),
            },
        };

        let next = self.next_head(direction)?;
        let ate_apple = next == self.apple;

        // Growing onto the last free cell leaves nowhere for the next apple;
        // fail before touching any state
        if ate_apple && self.snake.len() + 1 >= self.grid.cell_count() {
            return Err(EngineError::NoSpaceAvailable);
        }

        self.snake.push_head(next);
        let vacated = if ate_apple {
            None
        } else {
            self.snake.pop_tail()
        };
        self.steps += 1;

        if ate_apple {
            self.score += 1;
            let apple = self.place_apple()?;
            debug!(score = self.score, eaten = next, apple, "apple eaten");
        }

        Ok(StepResult::Advanced(StepInfo {
            direction,
            head: next,
            vacated,
            ate_apple,
        }))
    }

    /// Cell the head would move into, checked against walls and the body
    fn next_head(&self, direction: Direction) -> Result<Cell, EngineError> {
        let next = self
            .grid
            .neighbor(self.snake.head(), direction)
            .ok_or(EngineError::WallCollision)?;

        if self.snake.contains(next) {
            return Err(EngineError::SelfCollision);
        }

        Ok(next)
    }

    fn fail<O: GameObserver + ?Sized>(&mut self, err: &EngineError, observer: &mut O) {
        match err.game_over_reason() {
            Some(reason) => {
                self.status = GameStatus::GameOver(reason);
                warn!(?reason, score = self.score, steps = self.steps, "game over");
                observer.on_game_over(reason);
            }
            None => {
                self.status = GameStatus::Faulted;
                error!(%err, score = self.score, steps = self.steps, "engine fault");
            }
        }
    }

    /// Current heading inferred from the last two segments.
    ///
    /// `Ok(None)` for a single-segment snake, which has no heading.
    pub fn heading(&self) -> Result<Option<Direction>, EngineError> {
        let head = self.snake.head();
        let Some(neck) = self.snake.neck() else {
            return Ok(None);
        };

        self.grid
            .direction_between(neck, head)
            .map(Some)
            .ok_or(EngineError::DisconnectedSegments { head, neck })
    }

    /// Move the apple to a uniformly random cell not covered by the snake.
    ///
    /// Random draws are bounded by `apple_attempts`; after that the free
    /// cells are enumerated and one is picked directly, so this never spins.
    pub fn place_apple(&mut self) -> Result<Cell, EngineError> {
        let cells = self.grid.cell_count();
        if self.snake.len() >= cells {
            return Err(EngineError::NoSpaceAvailable);
        }

        for _ in 0..self.config.apple_attempts {
            let cell = self.rng.gen_range(0..cells);
            if !self.snake.contains(cell) {
                self.apple = cell;
                return Ok(cell);
            }
        }

        let snake = &self.snake;
        let cell = (0..cells)
            .filter(|&cell| !snake.contains(cell))
            .choose(&mut self.rng)
            .ok_or(EngineError::NoSpaceAvailable)?;
        debug!(cell, attempts = self.config.apple_attempts, "apple placed by scan");
        self.apple = cell;
        Ok(cell)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn apple(&self) -> Cell {
        self.apple
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Directions waiting to be applied, oldest first
    pub fn pending_inputs(&self) -> impl Iterator<Item = Direction> + '_ {
        self.inputs.iter().copied()
    }
}
