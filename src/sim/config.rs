//! Batch configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{PlayerConfig, Skill, Strategy, TableConfig, MAX_PLAYERS, ROSTER};
use crate::error::ConfigError;

/// What to simulate: which table sizes, how many games each, and how the
/// seats play.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Table sizes to simulate, in order.
    pub player_counts: Vec<usize>,

    /// Games played at each table size.
    pub games_per_count: usize,

    /// Batch seed; each table size derives its own stream from it.
    pub seed: u64,

    pub skill: Skill,

    /// Strategy per seat. Seats past the end of the list use the first
    /// entry; an empty list means `never` for everyone.
    pub strategies: Vec<Strategy>,

    pub table: TableConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            player_counts: vec![3, 4, 5, 6],
            games_per_count: 100,
            seed: 10,
            skill: Skill::Best,
            strategies: vec![Strategy::Never],
            table: TableConfig::default(),
        }
    }
}

impl SimulationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.player_counts.is_empty() {
            return Err(ConfigError::NoPlayerCounts);
        }
        if let Some(&bad) = self
            .player_counts
            .iter()
            .find(|&&n| n == 0 || n > MAX_PLAYERS)
        {
            return Err(ConfigError::InvalidPlayerCount(bad));
        }
        if self.games_per_count == 0 {
            return Err(ConfigError::NoGames);
        }
        Ok(())
    }

    #[must_use]
    pub fn with_player_counts(mut self, counts: Vec<usize>) -> Self {
        self.player_counts = counts;
        self
    }

    #[must_use]
    pub fn with_games(mut self, games: usize) -> Self {
        self.games_per_count = games;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_strategies(mut self, strategies: Vec<Strategy>) -> Self {
        self.strategies = strategies;
        self
    }

    #[must_use]
    pub fn with_table(mut self, table: TableConfig) -> Self {
        self.table = table;
        self
    }

    /// Strategy for a seat.
    #[must_use]
    pub fn strategy_for(&self, seat: usize) -> Strategy {
        self.strategies
            .get(seat)
            .or_else(|| self.strategies.first())
            .copied()
            .unwrap_or_default()
    }

    /// Seat configurations for a table of `count` players, named from the
    /// roster.
    #[must_use]
    pub fn seats(&self, count: usize) -> Vec<PlayerConfig> {
        ROSTER
            .iter()
            .take(count)
            .enumerate()
            .map(|(seat, name)| {
                PlayerConfig::new(*name)
                    .with_skill(self.skill)
                    .with_strategy(self.strategy_for(seat))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        SimulationConfig::default().validate().unwrap();
    }

    #[test]
    fn test_validation_errors() {
        let none = SimulationConfig::new().with_player_counts(vec![]);
        assert!(matches!(none.validate(), Err(ConfigError::NoPlayerCounts)));

        let too_many = SimulationConfig::new().with_player_counts(vec![4, 11]);
        assert!(matches!(too_many.validate(), Err(ConfigError::InvalidPlayerCount(11))));

        let zero = SimulationConfig::new().with_player_counts(vec![0]);
        assert!(matches!(zero.validate(), Err(ConfigError::InvalidPlayerCount(0))));

        let no_games = SimulationConfig::new().with_games(0);
        assert!(matches!(no_games.validate(), Err(ConfigError::NoGames)));
    }

    #[test]
    fn test_strategy_fallback() {
        let config = SimulationConfig::new().with_strategies(vec![Strategy::Always, Strategy::OneDeep]);
        assert_eq!(config.strategy_for(0), Strategy::Always);
        assert_eq!(config.strategy_for(1), Strategy::OneDeep);
        assert_eq!(config.strategy_for(5), Strategy::Always);

        let empty = SimulationConfig::new().with_strategies(vec![]);
        assert_eq!(empty.strategy_for(2), Strategy::Never);
    }

    #[test]
    fn test_seats_use_roster() {
        let seats = SimulationConfig::new().seats(3);
        let names: Vec<_> = seats.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Alf", "Bob", "Cat"]);
    }

    #[test]
    fn test_json_partial_config() {
        let json = r#"{"player_counts": [2], "strategies": ["always", "bogus"], "table": {"tick_limit": 200}}"#;
        let config: SimulationConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.player_counts, vec![2]);
        assert_eq!(config.games_per_count, 100);
        assert_eq!(config.strategies, vec![Strategy::Always, Strategy::Never]);
        assert_eq!(config.table.tick_limit, 200);
        assert_eq!(config.table.win_score, 100);
    }
}
