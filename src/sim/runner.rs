//! Running batches of games.

use serde::{Deserialize, Serialize};

use super::config::SimulationConfig;
use super::stats::BatchSummary;
use crate::core::GameRng;
use crate::engine::{GameRecord, Table};
use crate::error::ConfigError;

/// Where a running batch is, passed to progress callbacks after each game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Progress {
    pub player_count: usize,
    /// Games finished at this table size, including failures.
    pub finished: usize,
    pub games: usize,
}

/// Every game played at one table size.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    pub player_count: usize,
    pub names: Vec<String>,
    pub records: Vec<GameRecord>,
    /// Games that hit the redeal limit, as error messages.
    pub failures: Vec<String>,
}

impl BatchReport {
    #[must_use]
    pub fn summary(&self) -> BatchSummary {
        BatchSummary::from_report(self)
    }
}

/// Plays `games_per_count` games at each configured table size.
///
/// Each table size gets its own table, seeded from the batch seed and the
/// size, so adding or removing a size never changes the others' games.
#[derive(Clone, Debug)]
pub struct Simulator {
    config: SimulationConfig,
}

impl Simulator {
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Total games the batch will play.
    #[must_use]
    pub fn total_games(&self) -> usize {
        self.config.player_counts.len() * self.config.games_per_count
    }

    pub fn run(&self) -> Result<Vec<BatchReport>, ConfigError> {
        self.run_with(|_| {})
    }

    /// Run every table size in order, calling `on_game` after each game.
    pub fn run_with<F>(&self, mut on_game: F) -> Result<Vec<BatchReport>, ConfigError>
    where
        F: FnMut(Progress),
    {
        self.config
            .player_counts
            .iter()
            .map(|&count| self.run_count(count, &mut on_game))
            .collect()
    }

    /// Play every game for one table size.
    pub fn run_count<F>(&self, count: usize, on_game: &mut F) -> Result<BatchReport, ConfigError>
    where
        F: FnMut(Progress),
    {
        let seats = self.config.seats(count);
        let names = seats.iter().map(|s| s.name.clone()).collect();
        let rng = GameRng::new(self.config.seed).for_context(&format!("table-{count}"));
        let mut table = Table::with_rng(seats, self.config.table.clone(), rng)?;

        let games = self.config.games_per_count;
        log::info!("simulating {} games with {} players", games, count);

        let mut records = Vec::with_capacity(games);
        let mut failures = Vec::new();
        for game in 0..games {
            match table.play_game() {
                Ok(record) => records.push(record),
                Err(err) => {
                    log::error!("{} players, game {}: {}", count, game + 1, err);
                    failures.push(err.to_string());
                }
            }
            on_game(Progress {
                player_count: count,
                finished: game + 1,
                games,
            });
        }

        log::info!(
            "{} players: {} games played, {} failed",
            count,
            records.len(),
            failures.len()
        );
        Ok(BatchReport {
            player_count: count,
            names,
            records,
            failures,
        })
    }
}
