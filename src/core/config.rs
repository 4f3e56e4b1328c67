//! Player and table configuration.
//!
//! Players are configured once, when they sit down, and never change during
//! play. Tables carry the round limits. Both follow the same pattern: a serde
//! struct with a `Default` and `with_*` builder methods.

use serde::{Deserialize, Serialize};

/// Largest table the batch runner will seat (one per roster name).
pub const MAX_PLAYERS: usize = 10;

/// Seat names handed out in order by the batch runner.
pub const ROSTER: [&str; MAX_PLAYERS] = [
    "Alf", "Bob", "Cat", "Dog", "Ela", "Flo", "Gob", "Hal", "Ike", "Joe",
];

/// Ticks a round may run before it is abandoned and redealt.
pub const DEFAULT_TICK_LIMIT: u32 = 1000;

/// Score that ends a game.
pub const DEFAULT_WIN_SCORE: i32 = 100;

/// When a player moves a Hand card onto a Solitaire stack.
///
/// Labels are kebab-case (`never`, `one-deep`, `two-deep`, `always`);
/// `1-deep` and `2-deep` are accepted too. Parsing is lenient: an unknown
/// label means `Never`.
///
/// ```
/// use nertz_sim::core::Strategy;
///
/// assert_eq!(Strategy::parse("two-deep"), Strategy::TwoDeep);
/// assert_eq!(Strategy::parse("sometimes"), Strategy::Never);
/// assert_eq!(Strategy::OneDeep.lookahead_depth(), Some(1));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Strategy {
    /// Never play Hand cards onto Solitaire.
    #[default]
    Never,
    /// Only when the Nertz top could follow directly after the Hand card.
    OneDeep,
    /// Like `OneDeep`, or when the Nertz top could follow one card later.
    TwoDeep,
    /// Whenever the placement is legal.
    Always,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [Strategy::Never, Strategy::OneDeep, Strategy::TwoDeep, Strategy::Always];

    /// Parse a label; unknown labels fall back to `Never`.
    pub fn parse(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "never" => Strategy::Never,
            "one-deep" | "1-deep" => Strategy::OneDeep,
            "two-deep" | "2-deep" => Strategy::TwoDeep,
            "always" => Strategy::Always,
            other => {
                log::warn!("unknown strategy {:?}, playing as never", other);
                Strategy::Never
            }
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Strategy::Never => "never",
            Strategy::OneDeep => "one-deep",
            Strategy::TwoDeep => "two-deep",
            Strategy::Always => "always",
        }
    }

    /// Look-ahead depth for the n-deep strategies.
    #[must_use]
    pub const fn lookahead_depth(self) -> Option<u8> {
        match self {
            Strategy::OneDeep => Some(1),
            Strategy::TwoDeep => Some(2),
            Strategy::Never | Strategy::Always => None,
        }
    }
}

impl From<String> for Strategy {
    fn from(label: String) -> Self {
        Strategy::parse(&label)
    }
}

impl From<Strategy> for String {
    fn from(strategy: Strategy) -> Self {
        strategy.label().to_string()
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Skill label. Carried through configuration and results; the decision
/// procedure does not read it yet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Skill {
    Bad,
    Good,
    Better,
    #[default]
    Best,
}

/// Fixed configuration of one seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub name: String,
    #[serde(default)]
    pub skill: Skill,
    #[serde(default)]
    pub strategy: Strategy,
}

impl PlayerConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            skill: Skill::default(),
            strategy: Strategy::default(),
        }
    }

    #[must_use]
    pub fn with_skill(mut self, skill: Skill) -> Self {
        self.skill = skill;
        self
    }

    #[must_use]
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }
}

/// Round and game limits for a table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Ticks before a round times out and is redealt.
    pub tick_limit: u32,

    /// Score at or above which a player wins the game.
    pub win_score: i32,

    /// Consecutive redeals (timeouts or aborted rounds) allowed before a
    /// single scored round; exceeding it fails the game.
    pub max_redeals: u32,

    /// Keep a log of every granted Middle-stack play.
    pub record_grants: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            tick_limit: DEFAULT_TICK_LIMIT,
            win_score: DEFAULT_WIN_SCORE,
            max_redeals: 10_000,
            record_grants: false,
        }
    }
}

impl TableConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_tick_limit(mut self, ticks: u32) -> Self {
        self.tick_limit = ticks;
        self
    }

    #[must_use]
    pub fn with_win_score(mut self, score: i32) -> Self {
        self.win_score = score;
        self
    }

    #[must_use]
    pub fn with_max_redeals(mut self, redeals: u32) -> Self {
        self.max_redeals = redeals;
        self
    }

    #[must_use]
    pub fn with_grant_log(mut self, enabled: bool) -> Self {
        self.record_grants = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_labels_round_trip() {
        for strategy in Strategy::ALL {
            assert_eq!(Strategy::parse(strategy.label()), strategy);
        }
    }

    #[test]
    fn test_strategy_numeric_aliases() {
        assert_eq!(Strategy::parse("1-deep"), Strategy::OneDeep);
        assert_eq!(Strategy::parse("2-Deep"), Strategy::TwoDeep);
        assert_eq!(Strategy::parse("3-deep"), Strategy::Never);
    }

    #[test]
    fn test_strategy_parse_is_lenient() {
        assert_eq!(Strategy::parse("  Always "), Strategy::Always);
        assert_eq!(Strategy::parse("three-deep"), Strategy::Never);
        assert_eq!(Strategy::parse(""), Strategy::Never);
    }

    #[test]
    fn test_strategy_serde_uses_labels() {
        let json = serde_json::to_string(&Strategy::TwoDeep).unwrap();
        assert_eq!(json, "\"two-deep\"");

        let unknown: Strategy = serde_json::from_str("\"yolo\"").unwrap();
        assert_eq!(unknown, Strategy::Never);
    }

    #[test]
    fn test_player_config_defaults() {
        let config: PlayerConfig = serde_json::from_str(r#"{"name": "Alf"}"#).unwrap();
        assert_eq!(config, PlayerConfig::new("Alf"));
        assert_eq!(config.skill, Skill::Best);
        assert_eq!(config.strategy, Strategy::Never);
    }

    #[test]
    fn test_table_config_defaults() {
        let config = TableConfig::default();
        assert_eq!(config.tick_limit, 1000);
        assert_eq!(config.win_score, 100);
        assert!(!config.record_grants);

        let partial: TableConfig = serde_json::from_str(r#"{"tick_limit": 50}"#).unwrap();
        assert_eq!(partial.tick_limit, 50);
        assert_eq!(partial.win_score, 100);
    }

    #[test]
    fn test_table_config_builder() {
        let config = TableConfig::new()
            .with_tick_limit(10)
            .with_win_score(20)
            .with_max_redeals(3)
            .with_grant_log(true);

        assert_eq!(config.tick_limit, 10);
        assert_eq!(config.win_score, 20);
        assert_eq!(config.max_redeals, 3);
        assert!(config.record_grants);
    }
}
