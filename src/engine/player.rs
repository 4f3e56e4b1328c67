//! A seated player and its decision procedure.
//!
//! Each tick a player takes exactly one turn, trying these in order and
//! stopping at the first that applies:
//!
//! 1. Send every playable Ace (Nertz top, Solitaire tops, exposed Hand card)
//!    to a new Middle stack.
//! 2. Request Nertz top -> Middle.
//! 3. Nertz top -> Solitaire.
//! 4. Consolidate two Solitaire stacks.
//! 5. Request Solitaire top -> Middle.
//! 6. Request exposed Hand card -> Middle.
//! 7. Exposed Hand card -> Solitaire, if the strategy allows it.
//! 8. Flip three Hand cards.
//!
//! Requests (steps 2, 5, 6) change nothing until the table grants them; the
//! player then commits through [`Player::commit_granted`]. Every other step
//! commits immediately. A Solitaire stack that empties is refilled from the
//! Nertz stack straight away.

use serde::{Deserialize, Serialize};

use crate::cards::{full_deck, Card, Zone, DECK_SIZE};
use crate::core::{Action, ActionSource, GameRng, MiddleStackId, PlayerConfig, PlayerId, Strategy};
use crate::error::{NertzError, Result};
use crate::rules::can_stack_after;
use crate::stack::{
    HandStack, MiddleStacks, NertzStack, Placement, SolitaireStack, Stack, SOLITAIRE_STACKS,
};

/// What a player did with its turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Turn {
    /// Started this many new Middle stacks with Aces.
    MovedAces(u8),
    /// Asked to play onto a Middle stack; nothing moved yet.
    Requested {
        target: MiddleStackId,
        source: ActionSource,
    },
    NertzToSolitaire { to: u8 },
    Consolidated { from: u8, to: u8 },
    HandToSolitaire { to: u8 },
    Flipped,
}

impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Turn::MovedAces(n) => write!(f, "moved {} ace(s) to the middle", n),
            Turn::Requested { target, source } => write!(f, "can play {} to {}", source, target),
            Turn::NertzToSolitaire { to } => write!(f, "played Nertz on Solitaire {}", to),
            Turn::Consolidated { from, to } => write!(f, "consolidated Solitaire {} onto {}", from, to),
            Turn::HandToSolitaire { to } => write!(f, "played Hand on Solitaire {}", to),
            Turn::Flipped => f.write_str("flipped 3 cards"),
        }
    }
}

/// An explicit arrangement of a player's stacks, for setting up positions.
///
/// Cards are listed bottom first. The last `hand_face_up` Hand cards are
/// dealt face-up.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Layout {
    pub nertz: Vec<Card>,
    pub solitaire: [Vec<Card>; SOLITAIRE_STACKS],
    pub hand: Vec<Card>,
    pub hand_face_up: usize,
}

/// A player: configuration, score and the stacks dealt to it.
#[derive(Clone, Debug)]
pub struct Player {
    id: PlayerId,
    config: PlayerConfig,
    score: i32,
    declared_nertz: bool,

    /// All 52 cards in suit-rank order; each deal shuffles a copy.
    deck: Vec<Card>,

    nertz: NertzStack,
    solitaire: [SolitaireStack; SOLITAIRE_STACKS],
    hand: HandStack,

    /// The card left over after dealing; out of play until the next deal.
    set_aside: Option<Card>,

    action: Action,
}

impl Player {
    /// Seat a player with a fresh, unshuffled deck and empty stacks.
    pub fn new(id: PlayerId, config: PlayerConfig) -> Self {
        Self {
            id,
            config,
            score: 0,
            declared_nertz: false,
            deck: full_deck(id),
            nertz: NertzStack::new(),
            solitaire: Default::default(),
            hand: HandStack::new(),
            set_aside: None,
            action: Action::default(),
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.config.name
    }

    #[must_use]
    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    #[must_use]
    pub fn strategy(&self) -> Strategy {
        self.config.strategy
    }

    #[must_use]
    pub fn score(&self) -> i32 {
        self.score
    }

    pub(crate) fn set_score(&mut self, score: i32) {
        self.score = score;
    }

    #[must_use]
    pub fn declared_nertz(&self) -> bool {
        self.declared_nertz
    }

    #[must_use]
    pub fn nertz(&self) -> &NertzStack {
        &self.nertz
    }

    #[must_use]
    pub fn solitaire(&self) -> &[SolitaireStack; SOLITAIRE_STACKS] {
        &self.solitaire
    }

    #[must_use]
    pub fn hand(&self) -> &HandStack {
        &self.hand
    }

    #[must_use]
    pub fn set_aside(&self) -> Option<&Card> {
        self.set_aside.as_ref()
    }

    #[must_use]
    pub fn action(&self) -> &Action {
        &self.action
    }

    pub(crate) fn action_mut(&mut self) -> &mut Action {
        &mut self.action
    }

    /// Cards still held by the player (everything not in the Middle).
    #[must_use]
    pub fn cards_held(&self) -> usize {
        self.nertz.len()
            + self.solitaire.iter().map(Stack::len).sum::<usize>()
            + self.hand.len()
            + usize::from(self.set_aside.is_some())
    }

    /// Shuffle and deal a new round: 13 to Nertz, one to each Solitaire
    /// stack, 34 to the Hand (then flip three), one set aside.
    pub fn deal(&mut self, rng: &mut GameRng) {
        self.reset_stacks();
        // Shuffle a copy of the ordered deck so a deal depends only on the RNG.
        let mut deck = self.deck.clone();
        rng.shuffle(&mut deck);

        let mut cards = deck.into_iter();
        for card in cards.by_ref().take(NertzStack::DEAL) {
            self.nertz.push(card);
        }
        for stack in &mut self.solitaire {
            if let Some(card) = cards.next() {
                stack.push(card);
            }
        }
        for card in cards.by_ref().take(HandStack::DEAL) {
            self.hand.push_face_down(card);
        }
        self.set_aside = cards.next().map(|mut card| {
            card.zone = Zone::Unassigned;
            card
        });
        debug_assert!(cards.next().is_none(), "deck larger than {}", DECK_SIZE);

        self.hand.flip_three();
    }

    /// Replace the player's stacks with an explicit arrangement.
    pub fn arrange(&mut self, layout: Layout) {
        self.reset_stacks();

        for card in layout.nertz {
            self.nertz.push(card);
        }
        for (stack, cards) in self.solitaire.iter_mut().zip(layout.solitaire) {
            for card in cards {
                stack.push(card);
            }
        }
        let face_down = layout.hand.len().saturating_sub(layout.hand_face_up);
        for (i, card) in layout.hand.into_iter().enumerate() {
            if i < face_down {
                self.hand.push_face_down(card);
            } else {
                self.hand.push_face_up(card);
            }
        }
        self.check_nertz();
    }

    fn reset_stacks(&mut self) {
        self.declared_nertz = false;
        self.action.clear();
        self.nertz = NertzStack::new();
        self.solitaire = Default::default();
        self.hand = HandStack::new();
        self.set_aside = None;
    }

    /// Take one turn. Middle plays other than Aces are only requested.
    pub fn take_turn(&mut self, middle: &mut MiddleStacks) -> Result<Turn> {
        self.action.clear();

        let aces = self.move_aces(middle)?;
        if aces > 0 {
            return Ok(Turn::MovedAces(aces));
        }
        if let Some(turn) = self.request_nertz_to_middle(middle) {
            return Ok(turn);
        }
        if let Some(turn) = self.play_nertz_on_solitaire()? {
            return Ok(turn);
        }
        if let Some(turn) = self.consolidate_solitaire()? {
            return Ok(turn);
        }
        if let Some(turn) = self.request_solitaire_to_middle(middle) {
            return Ok(turn);
        }
        if let Some(turn) = self.request_hand_to_middle(middle) {
            return Ok(turn);
        }
        if let Some(turn) = self.play_hand_on_solitaire()? {
            return Ok(turn);
        }

        self.hand.flip_three();
        Ok(Turn::Flipped)
    }

    /// Carry out a granted request against the current table.
    ///
    /// Returns the committed request, or `None` if the action was not granted.
    pub fn commit_granted(&mut self, middle: &mut MiddleStacks) -> Result<Option<(MiddleStackId, ActionSource)>> {
        if !self.action.is_granted() {
            return Ok(None);
        }
        let Some((target, source)) = self.action.request() else {
            return Ok(None);
        };

        let card = *self.source_card(source)?;
        middle.get_mut(target)?.try_add(card)?;

        match source {
            ActionSource::Nertz => {
                self.nertz.pop()?;
                self.check_nertz();
            }
            ActionSource::Solitaire(i) => {
                self.solitaire_mut(i)?.pop()?;
                self.backfill_solitaire()?;
            }
            ActionSource::Hand => {
                self.hand.pop()?;
            }
        }

        log::trace!("{} played {} from {} to {}", self.name(), card, source, target);
        Ok(Some((target, source)))
    }

    fn source_card(&self, source: ActionSource) -> Result<&Card> {
        match source {
            ActionSource::Nertz => self.nertz.try_top(),
            ActionSource::Solitaire(i) => self
                .solitaire
                .get(usize::from(i))
                .ok_or(NertzError::EmptyStack { zone: Zone::Solitaire })?
                .try_top(),
            ActionSource::Hand => self.hand.exposed().ok_or(NertzError::EmptyStack { zone: Zone::Hand }),
        }
    }

    fn solitaire_mut(&mut self, index: u8) -> Result<&mut SolitaireStack> {
        self.solitaire
            .get_mut(usize::from(index))
            .ok_or(NertzError::EmptyStack { zone: Zone::Solitaire })
    }

    /// Declare Nertz the first time the Nertz stack is seen empty.
    fn check_nertz(&mut self) {
        if self.nertz.is_empty() && !self.declared_nertz {
            self.declared_nertz = true;
            log::debug!("{} declared Nertz!", self.name());
        }
    }

    /// Refill empty Solitaire stacks from the Nertz top.
    fn backfill_solitaire(&mut self) -> Result<()> {
        for stack in &mut self.solitaire {
            if stack.is_empty() && !self.nertz.is_empty() {
                stack.push(self.nertz.pop()?);
            }
        }
        self.check_nertz();
        Ok(())
    }

    fn move_aces(&mut self, middle: &mut MiddleStacks) -> Result<u8> {
        let mut moved = 0;

        if self.nertz.top().is_some_and(Card::is_ace) {
            middle.start(self.nertz.pop()?)?;
            moved += 1;
            self.check_nertz();
        }

        for i in 0..SOLITAIRE_STACKS {
            if self.solitaire[i].top().is_some_and(Card::is_ace) {
                middle.start(self.solitaire[i].pop()?)?;
                moved += 1;
                self.backfill_solitaire()?;
            }
        }

        if self.hand.exposed().is_some_and(Card::is_ace) {
            middle.start(self.hand.pop()?)?;
            moved += 1;
        }

        Ok(moved)
    }

    fn request(&mut self, target: MiddleStackId, source: ActionSource) -> Turn {
        self.action.set_waiting(target, source);
        Turn::Requested { target, source }
    }

    fn request_nertz_to_middle(&mut self, middle: &MiddleStacks) -> Option<Turn> {
        let target = middle.find_accepting(self.nertz.top()?)?;
        Some(self.request(target, ActionSource::Nertz))
    }

    fn play_nertz_on_solitaire(&mut self) -> Result<Option<Turn>> {
        let Some(card) = self.nertz.top().copied() else {
            return Ok(None);
        };
        let Some(to) = self.solitaire.iter().position(|s| s.can_add(&card)) else {
            return Ok(None);
        };

        self.solitaire[to].push(self.nertz.pop()?);
        self.check_nertz();
        Ok(Some(Turn::NertzToSolitaire { to: to as u8 }))
    }

    /// Move a whole Solitaire run onto another stack when its bottom card
    /// fits there, freeing a slot for the Nertz stack.
    fn consolidate_solitaire(&mut self) -> Result<Option<Turn>> {
        for from in 0..SOLITAIRE_STACKS {
            let Some(bottom) = self.solitaire[from].bottom().copied() else {
                continue;
            };
            let target = (0..SOLITAIRE_STACKS).find(|&to| {
                to != from && !self.solitaire[to].is_empty() && self.solitaire[to].can_add(&bottom)
            });

            if let Some(to) = target {
                let run = self.solitaire[from].take_run();
                self.solitaire[to].place_run(run)?;
                self.backfill_solitaire()?;
                return Ok(Some(Turn::Consolidated {
                    from: from as u8,
                    to: to as u8,
                }));
            }
        }
        Ok(None)
    }

    fn request_solitaire_to_middle(&mut self, middle: &MiddleStacks) -> Option<Turn> {
        let (index, target) = self.solitaire.iter().enumerate().find_map(|(i, stack)| {
            let target = middle.find_accepting(stack.top()?)?;
            Some((i as u8, target))
        })?;
        Some(self.request(target, ActionSource::Solitaire(index)))
    }

    fn request_hand_to_middle(&mut self, middle: &MiddleStacks) -> Option<Turn> {
        let target = middle.find_accepting(self.hand.exposed()?)?;
        Some(self.request(target, ActionSource::Hand))
    }

    /// The only step that depends on strategy.
    fn play_hand_on_solitaire(&mut self) -> Result<Option<Turn>> {
        let Some(card) = self.hand.exposed().copied() else {
            return Ok(None);
        };

        let allowed = match self.config.strategy {
            Strategy::Never => false,
            Strategy::Always => true,
            Strategy::OneDeep | Strategy::TwoDeep => {
                let depth = self.config.strategy.lookahead_depth().unwrap_or(0);
                self.nertz
                    .top()
                    .is_some_and(|nertz| can_stack_after(&card, nertz, depth))
            }
        };
        if !allowed {
            return Ok(None);
        }

        let Some(to) = self.solitaire.iter().position(|s| s.can_add(&card)) else {
            return Ok(None);
        };
        self.solitaire[to].push(self.hand.pop()?);
        Ok(Some(Turn::HandToSolitaire { to: to as u8 }))
    }
}
