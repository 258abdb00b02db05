use std::time::{Duration, Instant};

use crate::game::{GameObserver, GameOverReason};

/// Session statistics shown in the header
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub high_score: u32,
    pub games_played: u32,
    /// Clock stops when a game ends and restarts with the next one
    pub clock_running: bool,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            high_score: 0,
            games_played: 0,
            clock_running: true,
        }
    }

    pub fn update(&mut self) {
        if self.clock_running {
            self.elapsed_time = self.start_time.elapsed();
        }
    }

    pub fn on_game_start(&mut self) {
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
        self.clock_running = true;
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl GameObserver for GameMetrics {
    fn on_score_changed(&mut self, score: u32) {
        self.high_score = self.high_score.max(score);
    }

    fn on_game_over(&mut self, _reason: GameOverReason) {
        self.update();
        self.clock_running = false;
        self.games_played += 1;
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}
