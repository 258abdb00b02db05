use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;

use super::error::ConfigError;
use super::grid::{Cell, Grid};

/// Upper bound on rejection-sampling draws before apple placement falls back
/// to scanning the free cells
pub const DEFAULT_APPLE_ATTEMPTS: usize = 256;

/// Largest playable grid, in cells
pub const MAX_GRID_CELLS: usize = 1 << 16;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the game grid
    pub width: usize,
    /// Height of the game grid
    pub height: usize,
    /// Time between two ticks, in milliseconds
    pub tick_interval_ms: u64,
    /// Starting snake, tail first, head last
    pub initial_snake: Vec<Cell>,
    /// Starting apple cell
    pub initial_apple: Cell,
    /// Random draws tried before apple placement scans for free cells
    pub apple_attempts: usize,
    /// Seed for apple placement; random when absent
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 15,
            height: 15,
            tick_interval_ms: 200,
            initial_snake: vec![168, 169, 170, 171],
            initial_apple: 100,
            apple_attempts: DEFAULT_APPLE_ATTEMPTS,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a configuration for a custom grid size.
    ///
    /// The starting snake and apple are laid out at the same relative spots
    /// as on the default 15x15 board.
    pub fn new(width: usize, height: usize) -> Self {
        let (initial_snake, initial_apple) = starting_layout(width, height);
        Self {
            width,
            height,
            initial_snake,
            initial_apple,
            ..Default::default()
        }
    }

    /// Load a configuration from a JSON file; missing fields keep their
    /// defaults
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let config: GameConfig = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;
        Ok(config)
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.width, self.height)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Check that the configuration describes a playable starting position
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ZeroSizedGrid {
                width: self.width,
                height: self.height,
            });
        }
        if grid_cells(self.width, self.height).is_none() {
            return Err(ConfigError::GridTooLarge {
                width: self.width,
                height: self.height,
                max_cells: MAX_GRID_CELLS,
            });
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        if self.apple_attempts == 0 {
            return Err(ConfigError::ZeroAppleAttempts);
        }
        if self.initial_snake.is_empty() {
            return Err(ConfigError::EmptySnake);
        }

        let grid = self.grid();
        let cells = grid.cell_count();
        let mut seen = HashSet::with_capacity(self.initial_snake.len());
        for &cell in &self.initial_snake {
            if !grid.contains(cell) {
                return Err(ConfigError::SnakeOutOfBounds { cell, cells });
            }
            if !seen.insert(cell) {
                return Err(ConfigError::DuplicateSegment { cell });
            }
        }
        for pair in self.initial_snake.windows(2) {
            if grid.direction_between(pair[0], pair[1]).is_none() {
                return Err(ConfigError::DisconnectedSnake {
                    from: pair[0],
                    to: pair[1],
                });
            }
        }
        if self.initial_snake.len() >= cells {
            return Err(ConfigError::SnakeFillsGrid);
        }

        if !grid.contains(self.initial_apple) {
            return Err(ConfigError::AppleOutOfBounds {
                cell: self.initial_apple,
                cells,
            });
        }
        if seen.contains(&self.initial_apple) {
            return Err(ConfigError::AppleOnSnake {
                cell: self.initial_apple,
            });
        }

        Ok(())
    }
}

/// Cell count of a `width` x `height` grid, `None` when it exceeds
/// [`MAX_GRID_CELLS`]
fn grid_cells(width: usize, height: usize) -> Option<usize> {
    width
        .checked_mul(height)
        .filter(|&cells| cells <= MAX_GRID_CELLS)
}

fn starting_layout(width: usize, height: usize) -> (Vec<Cell>, Cell) {
    // Unplayable sizes are reported by `validate`
    let grid = Grid::new(width, height);
    match grid_cells(width, height) {
        Some(cells) if cells > 0 => {}
        _ => return (Vec::new(), 0),
    }

    let snake_row = height * 3 / 4;
    let first_col = width / 5;
    let len = 4usize.min(width - first_col).min(grid.cell_count() - 1);
    let snake: Vec<Cell> = (first_col..first_col + len)
        .map(|col| grid.cell_at(snake_row, col))
        .collect();

    let mut apple = grid.cell_at(height * 2 / 5, width * 2 / 3);
    if snake.contains(&apple) {
        apple = (0..grid.cell_count())
            .find(|cell| !snake.contains(cell))
            .unwrap_or(apple);
    }

    (snake, apple)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.width, 15);
        assert_eq!(config.height, 15);
        assert_eq!(config.tick_interval(), Duration::from_millis(200));
        assert_eq!(config.initial_snake, vec![168, 169, 170, 171]);
        assert_eq!(config.initial_apple, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_new_matches_default_layout() {
        assert_eq!(GameConfig::new(15, 15), GameConfig::default());
    }

    #[test]
    fn test_custom_config_is_playable() {
        for (width, height) in [(20, 20), (30, 10), (5, 5), (3, 1), (2, 2)] {
            let config = GameConfig::new(width, height);
            assert_eq!(config.validate(), Ok(()), "{}x{}", width, height);
        }
    }

    #[test]
    fn test_rejects_zero_sized_grid() {
        let config = GameConfig::new(0, 10);
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroSizedGrid {
                width: 0,
                height: 10
            })
        );
    }

    #[test]
    fn test_rejects_oversized_grid() {
        let config: GameConfig =
            serde_json::from_str(r#"{ "width": 4294967296, "height": 4294967296 }"#).unwrap();
        assert_eq!(
            config.validate(),
            Err(ConfigError::GridTooLarge {
                width: 4294967296,
                height: 4294967296,
                max_cells: MAX_GRID_CELLS
            })
        );

        let config = GameConfig::new(100_000, 100_000);
        assert!(config.initial_snake.is_empty());
        assert!(matches!(
            config.validate(),
            Err(ConfigError::GridTooLarge { .. })
        ));

        let config = GameConfig::new(usize::MAX, 2);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::GridTooLarge { .. })
        ));
    }

    #[test]
    fn test_largest_grid_is_accepted() {
        let config = GameConfig::new(256, 256);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_rejects_broken_snakes() {
        let mut config = GameConfig::default();
        config.initial_snake = vec![];
        assert_eq!(config.validate(), Err(ConfigError::EmptySnake));

        config.initial_snake = vec![168, 169, 169];
        assert_eq!(
            config.validate(),
            Err(ConfigError::DuplicateSegment { cell: 169 })
        );

        config.initial_snake = vec![14, 15];
        assert_eq!(
            config.validate(),
            Err(ConfigError::DisconnectedSnake { from: 14, to: 15 })
        );

        config.initial_snake = vec![224, 225];
        assert_eq!(
            config.validate(),
            Err(ConfigError::SnakeOutOfBounds {
                cell: 225,
                cells: 225
            })
        );
    }

    #[test]
    fn test_rejects_misplaced_apple() {
        let mut config = GameConfig::default();
        config.initial_apple = 170;
        assert_eq!(
            config.validate(),
            Err(ConfigError::AppleOnSnake { cell: 170 })
        );

        config.initial_apple = 500;
        assert_eq!(
            config.validate(),
            Err(ConfigError::AppleOutOfBounds {
                cell: 500,
                cells: 225
            })
        );
    }

    #[test]
    fn test_rejects_snake_without_room_for_apple() {
        let config = GameConfig {
            width: 2,
            height: 1,
            initial_snake: vec![0, 1],
            initial_apple: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::SnakeFillsGrid));
    }

    #[test]
    fn test_load_partial_json_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("snake.json");
        std::fs::write(&path, r#"{ "tick_interval_ms": 120, "seed": 7 }"#).unwrap();

        let config = GameConfig::from_json_file(&path).unwrap();
        assert_eq!(config.tick_interval_ms, 120);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.initial_snake, vec![168, 169, 170, 171]);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.json");
        assert!(GameConfig::from_json_file(&path).is_err());
    }
}
