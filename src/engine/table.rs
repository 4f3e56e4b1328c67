//! The table: players, Middle stacks, and the tick/round/game loops.
//!
//! ## Tick
//!
//! Every player takes one turn, starting from a seat that advances by one
//! each tick. Turns that want a Middle stack only leave a request; once all
//! players have moved, [`arbitrate`] grants at most one request per stack and
//! the winners commit. A player's turn therefore sees every committed move of
//! this tick but never another player's pending request.
//!
//! ## Round
//!
//! Ticks repeat until someone declares Nertz or the tick budget runs out.
//! A timed-out round is thrown away and redealt; it is never scored.
//!
//! ## Game
//!
//! Scored rounds repeat until a player reaches the win score.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::arbiter::{arbitrate, Request, Requests};
use super::game::{Game, GameOpening, GameRecord, RoundOutcome};
use super::player::{Player, Turn};
use crate::core::{
    ActionRecord, GameRng, MiddleStackId, PlayerConfig, PlayerId, PlayerMap, TableConfig, MAX_PLAYERS,
};
use crate::error::{ConfigError, NertzError, Result};
use crate::rules::{apply_score_jump, pick_winner, round_deltas};
use crate::stack::{MiddleStacks, Stack};

/// What happened in one tick.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickReport {
    /// Turns in the order they were taken.
    pub turns: SmallVec<[(PlayerId, Turn); 8]>,
    /// Requests that were granted and committed.
    pub granted: Vec<(PlayerId, MiddleStackId)>,
}

#[derive(Clone, Debug)]
pub struct Table {
    players: PlayerMap<Player>,
    middle: MiddleStacks,
    config: TableConfig,
    rng: GameRng,

    /// Seat that acts first in the next tick.
    starting_player: usize,

    /// Deals so far in the current game, counting redeals.
    deal_number: u32,

    /// Ticks played in the current deal.
    tick: u32,

    grants: Vec<ActionRecord>,
}

impl Table {
    /// Seat players in the given order. Names must be unique.
    pub fn new(players: Vec<PlayerConfig>, config: TableConfig, seed: u64) -> std::result::Result<Self, ConfigError> {
        Self::with_rng(players, config, GameRng::new(seed))
    }

    pub fn with_rng(
        players: Vec<PlayerConfig>,
        config: TableConfig,
        rng: GameRng,
    ) -> std::result::Result<Self, ConfigError> {
        if players.is_empty() || players.len() > MAX_PLAYERS {
            return Err(ConfigError::InvalidPlayerCount(players.len()));
        }
        let mut names = FxHashSet::default();
        for player in &players {
            if !names.insert(player.name.as_str()) {
                return Err(ConfigError::DuplicateName(player.name.clone()));
            }
        }

        let seated = players
            .into_iter()
            .enumerate()
            .map(|(i, config)| Player::new(PlayerId::new(i as u8), config))
            .collect();

        Ok(Self {
            players: PlayerMap::from_vec(seated),
            middle: MiddleStacks::new(),
            config,
            rng,
            starting_player: 0,
            deal_number: 0,
            tick: 0,
            grants: Vec::new(),
        })
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    /// Mutable access for arranging positions by hand.
    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id]
    }

    #[must_use]
    pub fn middle(&self) -> &MiddleStacks {
        &self.middle
    }

    /// Mutable access for arranging positions by hand.
    pub fn middle_mut(&mut self) -> &mut MiddleStacks {
        &mut self.middle
    }

    #[must_use]
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    #[must_use]
    pub fn starting_player(&self) -> usize {
        self.starting_player
    }

    /// Ticks played in the current deal.
    #[must_use]
    pub fn tick(&self) -> u32 {
        self.tick
    }

    /// Granted Middle plays of the current game, if recording is enabled.
    #[must_use]
    pub fn grants(&self) -> &[ActionRecord] {
        &self.grants
    }

    /// Every card of `player`'s deck that is somewhere on the table.
    #[must_use]
    pub fn cards_in_play(&self, player: PlayerId) -> usize {
        self.players[player].cards_held() + self.middle.count_owned_by(player)
    }

    /// Clear the Middle and give every player a fresh shuffle and deal.
    pub fn deal(&mut self) {
        self.middle.clear();
        self.tick = 0;
        self.deal_number += 1;
        for player in self.players.values_mut() {
            player.deal(&mut self.rng);
        }
    }

    /// Play one tick: every player moves once, then contested Middle plays
    /// are arbitrated and committed.
    pub fn play_tick(&mut self) -> Result<TickReport> {
        let count = self.players.player_count();
        let order: SmallVec<[PlayerId; 8]> = PlayerId::rotated(count, self.starting_player).collect();
        self.starting_player = (self.starting_player + 1) % count;

        let mut turns = SmallVec::new();
        let mut requests = Requests::new();
        for &id in &order {
            let player = &mut self.players[id];
            let turn = player.take_turn(&mut self.middle)?;
            log::trace!("{} {}", player.name(), turn);

            if let Turn::Requested { target, source } = turn {
                requests.push(Request {
                    player: id,
                    target,
                    source,
                });
            }
            turns.push((id, turn));
        }

        for request in arbitrate(&requests, &mut self.rng) {
            self.players[request.player].action_mut().set_granted();
        }

        let mut granted = Vec::new();
        for &id in &order {
            if let Some((target, source)) = self.players[id].commit_granted(&mut self.middle)? {
                if self.config.record_grants {
                    self.grants
                        .push(ActionRecord::new(id, target, source, self.deal_number, self.tick));
                }
                granted.push((id, target));
            }
        }

        self.tick += 1;
        Ok(TickReport { turns, granted })
    }

    /// Deal and play one round until someone declares Nertz or time runs out.
    pub fn play_round(&mut self) -> Result<RoundOutcome> {
        self.deal();
        self.run_round()
    }

    /// Play ticks on the current deal until it ends.
    pub fn run_round(&mut self) -> Result<RoundOutcome> {
        while self.tick < self.config.tick_limit {
            self.play_tick()?;

            let declared: SmallVec<[PlayerId; 2]> = self
                .players
                .iter()
                .filter(|(_, p)| p.declared_nertz())
                .map(|(id, _)| id)
                .collect();
            if !declared.is_empty() {
                return Ok(RoundOutcome::Completed {
                    ticks: self.tick,
                    declared,
                });
            }
        }
        Ok(RoundOutcome::TimedOut { ticks: self.tick })
    }

    /// Apply the current Middle and Nertz stacks to the scores, then the
    /// score jump. Returns the winner if anyone reached the win score.
    pub fn score_round(&mut self) -> Option<PlayerId> {
        let nertz_left = self.players.map(|p| p.nertz().len());
        let deltas = round_deltas(self.middle.cards(), &nertz_left);

        for (id, player) in self.players.iter_mut() {
            let raw = player.score() + deltas[id];
            let score = apply_score_jump(raw);
            if score != raw {
                log::debug!("{} jumped from {} to {}", player.name(), raw, score);
            }
            player.set_score(score);
        }

        let scores = self.players.map(Player::score);
        pick_winner(&scores, self.config.win_score)
    }

    /// Where the next game will start; pass to [`Table::rewind`] to replay it.
    #[must_use]
    pub fn opening(&self) -> GameOpening {
        GameOpening {
            rng: self.rng.state(),
            starting_player: self.starting_player,
        }
    }

    /// Return the RNG and seat rotation to a recorded opening.
    pub fn rewind(&mut self, opening: &GameOpening) {
        self.rng = GameRng::from_state(&opening.rng);
        self.starting_player = opening.starting_player % self.player_count();
    }

    /// Play a full game from zero scores.
    ///
    /// Timed-out deals and deals aborted by a recoverable error are redealt.
    /// Running out of redeals for a single scored round fails the game.
    pub fn play_game(&mut self) -> Result<GameRecord> {
        for player in self.players.values_mut() {
            player.set_score(0);
        }
        self.grants.clear();
        self.deal_number = 0;

        let opening = self.opening();
        let mut game = Game::new();
        let mut redeals = 0;

        while !game.is_over {
            match self.play_round() {
                Ok(RoundOutcome::Completed { ticks, declared }) => {
                    redeals = 0;
                    game.timeout = false;
                    game.round_count += 1;
                    log::debug!(
                        "round {} over after {} ticks, Nertz by {:?}",
                        game.round_count,
                        ticks,
                        declared
                    );
                    if let Some(winner) = self.score_round() {
                        game.finish(winner);
                    }
                }
                Ok(RoundOutcome::TimedOut { ticks }) => {
                    redeals += 1;
                    game.timeout = true;
                    game.timed_out_rounds += 1;
                    log::debug!("deal {} timed out after {} ticks, redealing", self.deal_number, ticks);
                }
                Err(err) if err.is_recoverable() => {
                    redeals += 1;
                    game.aborted_rounds += 1;
                    log::warn!("deal {} aborted: {}, redealing", self.deal_number, err);
                }
                Err(err) => return Err(err),
            }

            if redeals > self.config.max_redeals {
                return Err(NertzError::RedealLimit { attempts: redeals });
            }
        }

        let winner = game.winner.ok_or(NertzError::RedealLimit { attempts: redeals })?;
        let record = GameRecord {
            round_count: game.round_count,
            winner,
            winner_name: self.players[winner].name().to_string(),
            timeout_occurred: game.timed_out_rounds > 0,
            timed_out_rounds: game.timed_out_rounds,
            aborted_rounds: game.aborted_rounds,
            final_scores: self.players.values().map(Player::score).collect(),
            opening,
        };
        log::debug!("game over in {} rounds, won by {}", record.round_count, record.winner_name);
        Ok(record)
    }
}
