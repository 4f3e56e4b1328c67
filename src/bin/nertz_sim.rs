//! Command-line batch runner.
//!
//! ```text
//! nertz-sim --players 3,4,5 --games 500 --seed 7 --strategy always
//! ```

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::Parser;
use flexi_logger::Logger;
use indicatif::{ProgressBar, ProgressStyle};

use nertz_sim::{BatchSummary, SimulationConfig, Simulator, Strategy};

#[derive(Parser, Debug)]
#[command(name = "nertz-sim", version, about = "Simulate Nertz games and report win rates")]
struct Cli {
    /// JSON file with a full simulation config; flags below override it
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Table sizes to simulate, comma separated
    #[arg(short = 'p', long, value_delimiter = ',')]
    players: Vec<usize>,

    /// Games per table size
    #[arg(short = 'g', long)]
    games: Option<usize>,

    #[arg(short = 's', long)]
    seed: Option<u64>,

    /// Strategy per seat (never, one-deep, two-deep, always); repeat for each
    /// seat, the first one fills any remaining seats
    #[arg(long = "strategy")]
    strategies: Vec<String>,

    /// Ticks before a deal is abandoned and redealt
    #[arg(long)]
    tick_limit: Option<u32>,

    #[arg(long)]
    win_score: Option<i32>,

    /// Print summaries as JSON
    #[arg(long)]
    json: bool,

    /// Fallback log level when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Cli {
    fn simulation_config(&self) -> Result<SimulationConfig, Box<dyn std::error::Error>> {
        let mut config = match &self.config {
            Some(path) => SimulationConfig::from_json_file(path)?,
            None => SimulationConfig::default(),
        };

        if !self.players.is_empty() {
            config.player_counts = self.players.clone();
        }
        if let Some(games) = self.games {
            config.games_per_count = games;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if !self.strategies.is_empty() {
            config.strategies = self.strategies.iter().map(|s| Strategy::parse(s)).collect();
        }
        if let Some(ticks) = self.tick_limit {
            config.table.tick_limit = ticks;
        }
        if let Some(score) = self.win_score {
            config.table.win_score = score;
        }
        Ok(config)
    }
}

fn progress_bar(total: usize) -> Result<Option<ProgressBar>, Box<dyn std::error::Error>> {
    if !std::io::stderr().is_terminal() {
        return Ok(None);
    }
    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} games {msg} ({eta})")?
            .progress_chars("#>-"),
    );
    Ok(Some(pb))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    Logger::try_with_env_or_str(&cli.log_level)?
        .format(flexi_logger::colored_default_format)
        .start()?;

    let simulator = Simulator::new(cli.simulation_config()?)?;
    let progress = progress_bar(simulator.total_games())?;

    let reports = simulator.run_with(|p| {
        if let Some(pb) = &progress {
            pb.set_message(format!("({} players)", p.player_count));
            pb.inc(1);
        }
    })?;
    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    let summaries: Vec<BatchSummary> = reports.iter().map(|r| r.summary()).collect();
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
    } else {
        for summary in &summaries {
            println!("{summary}\n");
        }
    }
    Ok(())
}
