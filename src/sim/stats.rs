//! Win-rate and round-length statistics over a batch.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::runner::BatchReport;
use crate::engine::GameRecord;

/// Aggregate results for one table size.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub player_count: usize,
    pub games: usize,

    /// Wins per seat, in seat order, as `(name, wins)`.
    pub wins: Vec<(String, usize)>,

    /// Scored rounds per game.
    pub mean_rounds: f64,
    pub median_rounds: f64,
    pub min_rounds: u32,
    pub max_rounds: u32,

    /// Games in which at least one deal timed out.
    pub games_with_timeouts: usize,
    pub failed_games: usize,
}

impl BatchSummary {
    #[must_use]
    pub fn from_report(report: &BatchReport) -> Self {
        let mut summary = Self::from_records(&report.names, &report.records);
        summary.player_count = report.player_count;
        summary.failed_games = report.failures.len();
        summary
    }

    /// Summarise finished games for seats named `names`.
    #[must_use]
    pub fn from_records(names: &[String], records: &[GameRecord]) -> Self {
        let mut wins: Vec<(String, usize)> = names.iter().map(|n| (n.clone(), 0)).collect();
        for record in records {
            if let Some(slot) = wins.get_mut(record.winner.index()) {
                slot.1 += 1;
            }
        }

        let mut rounds: Vec<u32> = records.iter().map(|r| r.round_count).collect();
        rounds.sort_unstable();

        Self {
            player_count: names.len(),
            games: records.len(),
            wins,
            mean_rounds: mean(&rounds),
            median_rounds: median(&rounds),
            min_rounds: rounds.first().copied().unwrap_or(0),
            max_rounds: rounds.last().copied().unwrap_or(0),
            games_with_timeouts: records.iter().filter(|r| r.timeout_occurred).count(),
            failed_games: 0,
        }
    }

    /// Fraction of games won by a seat.
    #[must_use]
    pub fn win_rate(&self, seat: usize) -> f64 {
        match self.wins.get(seat) {
            Some((_, wins)) if self.games > 0 => *wins as f64 / self.games as f64,
            _ => 0.0,
        }
    }
}

fn mean(sorted: &[u32]) -> f64 {
    if sorted.is_empty() {
        0.0
    } else {
        sorted.iter().map(|&r| f64::from(r)).sum::<f64>() / sorted.len() as f64
    }
}

fn median(sorted: &[u32]) -> f64 {
    let n = sorted.len();
    match n {
        0 => 0.0,
        _ if n % 2 == 1 => f64::from(sorted[n / 2]),
        _ => (f64::from(sorted[n / 2 - 1]) + f64::from(sorted[n / 2])) / 2.0,
    }
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} players, {} games", self.player_count, self.games)?;
        for (seat, (name, wins)) in self.wins.iter().enumerate() {
            writeln!(
                f,
                "  {:<4} {:>6} wins ({:5.1}%)",
                name,
                wins,
                100.0 * self.win_rate(seat)
            )?;
        }
        writeln!(
            f,
            "  rounds: mean {:.2}, median {:.1}, min {}, max {}",
            self.mean_rounds, self.median_rounds, self.min_rounds, self.max_rounds
        )?;
        write!(
            f,
            "  games with timeouts: {}, failed games: {}",
            self.games_with_timeouts, self.failed_games
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameRng, PlayerId};
    use crate::engine::GameOpening;

    fn record(winner: u8, rounds: u32, timeout: bool) -> GameRecord {
        GameRecord {
            round_count: rounds,
            winner: PlayerId::new(winner),
            winner_name: String::new(),
            timeout_occurred: timeout,
            timed_out_rounds: u32::from(timeout),
            aborted_rounds: 0,
            final_scores: vec![],
            opening: GameOpening {
                rng: GameRng::new(0).state(),
                starting_player: 0,
            },
        }
    }

    fn names() -> Vec<String> {
        vec!["Alf".into(), "Bob".into(), "Cat".into()]
    }

    #[test]
    fn test_empty_summary() {
        let summary = BatchSummary::from_records(&names(), &[]);
        assert_eq!(summary.games, 0);
        assert_eq!(summary.mean_rounds, 0.0);
        assert_eq!(summary.win_rate(0), 0.0);
        assert_eq!(summary.wins[2], ("Cat".to_string(), 0));
    }

    #[test]
    fn test_counts_and_rounds() {
        let records = [
            record(0, 4, false),
            record(2, 7, true),
            record(0, 5, false),
            record(1, 6, false),
        ];
        let summary = BatchSummary::from_records(&names(), &records);

        assert_eq!(summary.games, 4);
        assert_eq!(summary.wins[0].1, 2);
        assert_eq!(summary.wins[1].1, 1);
        assert_eq!(summary.wins[2].1, 1);
        assert_eq!(summary.win_rate(0), 0.5);
        assert_eq!(summary.mean_rounds, 5.5);
        assert_eq!(summary.median_rounds, 5.5);
        assert_eq!(summary.min_rounds, 4);
        assert_eq!(summary.max_rounds, 7);
        assert_eq!(summary.games_with_timeouts, 1);
    }

    #[test]
    fn test_odd_median() {
        let records = [record(0, 9, false), record(0, 3, false), record(0, 4, false)];
        assert_eq!(BatchSummary::from_records(&names(), &records).median_rounds, 4.0);
    }

    #[test]
    fn test_display_lists_every_seat() {
        let summary = BatchSummary::from_records(&names(), &[record(1, 3, false)]);
        let text = summary.to_string();
        assert!(text.contains("3 players, 1 games"));
        assert!(text.contains("Bob"));
        assert!(text.contains("100.0%"));
    }
}
