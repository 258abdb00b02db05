use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tile_snake::game::GameConfig;
use tile_snake::logging::init_file_logging;
use tile_snake::modes::HumanMode;

#[derive(Parser)]
#[command(name = "tile_snake")]
#[command(version, about = "Grid snake game for the terminal")]
struct Cli {
    /// JSON file with game settings; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid width
    #[arg(long)]
    width: Option<usize>,

    /// Grid height
    #[arg(long)]
    height: Option<usize>,

    /// Milliseconds between two snake moves
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Seed for apple placement
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_json_file(path)?,
            None => match (self.width, self.height) {
                (None, None) => GameConfig::default(),
                (width, height) => GameConfig::new(width.unwrap_or(15), height.unwrap_or(15)),
            },
        };

        if self.config.is_some() {
            if let Some(width) = self.width {
                config.width = width;
            }
            if let Some(height) = self.height {
                config.height = height;
            }
        }
        if let Some(tick_ms) = self.tick_ms {
            config.tick_interval_ms = tick_ms;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_file_logging(path)?;
    }

    let config = cli.game_config()?;
    let mut human_mode = HumanMode::new(config)?;
    human_mode.run().await?;

    Ok(())
}
