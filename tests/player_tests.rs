//! Player decision tests.
//!
//! Each test arranges a position by hand and checks which step of the
//! fixed precedence a single turn takes.

use nertz_sim::cards::{Card, Suit};
use nertz_sim::core::{ActionSource, MiddleStackId, PlayerConfig, PlayerId, Strategy, TableConfig};
use nertz_sim::engine::{Layout, Player, Table, Turn};
use nertz_sim::stack::{MiddleStacks, Stack};

fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank, PlayerId::new(0))
}

fn player(strategy: Strategy, layout: Layout) -> Player {
    let mut p = Player::new(PlayerId::new(0), PlayerConfig::new("Alf").with_strategy(strategy));
    p.arrange(layout);
    p
}

/// Solitaire stacks whose tops accept nothing in these tests and whose
/// bottoms fit on no other stack.
fn dead_solitaire() -> [Vec<Card>; 4] {
    [
        vec![card(Suit::Clubs, 5)],
        vec![card(Suit::Hearts, 12)],
        vec![card(Suit::Spades, 9)],
        vec![card(Suit::Hearts, 11)],
    ]
}

// =============================================================================
// Precedence
// =============================================================================

/// Aces go first, even when a Middle play is available.
#[test]
fn test_aces_before_everything() {
    let mut middle = MiddleStacks::new();
    middle.start(card(Suit::Hearts, 1)).unwrap();

    let mut solitaire = dead_solitaire();
    solitaire[1] = vec![card(Suit::Spades, 1)];
    let mut p = player(
        Strategy::Never,
        Layout {
            nertz: vec![card(Suit::Clubs, 13), card(Suit::Hearts, 2)],
            solitaire,
            ..Layout::default()
        },
    );

    assert_eq!(p.take_turn(&mut middle).unwrap(), Turn::MovedAces(1));
    assert_eq!(middle.len(), 2);
    // Nertz refilled the emptied Solitaire stack.
    assert_eq!(p.solitaire()[1].top().map(|c| c.rank), Some(2));
    assert_eq!(p.nertz().len(), 1);
}

/// With no Aces, the Nertz top is requested onto the Middle.
#[test]
fn test_nertz_to_middle_is_requested() {
    let mut middle = MiddleStacks::new();
    middle.start(card(Suit::Diamonds, 1)).unwrap();

    let mut p = player(
        Strategy::Never,
        Layout {
            nertz: vec![card(Suit::Clubs, 13), card(Suit::Diamonds, 2)],
            solitaire: dead_solitaire(),
            ..Layout::default()
        },
    );

    let turn = p.take_turn(&mut middle).unwrap();
    assert_eq!(
        turn,
        Turn::Requested {
            target: MiddleStackId::new(0),
            source: ActionSource::Nertz
        }
    );
    assert!(p.action().is_waiting());
    // Nothing moves until the request is granted.
    assert_eq!(p.nertz().len(), 2);
    assert_eq!(middle.get(MiddleStackId::new(0)).unwrap().len(), 1);
}

#[test]
fn test_nertz_to_solitaire() {
    let mut middle = MiddleStacks::new();
    let mut solitaire = dead_solitaire();
    solitaire[2] = vec![card(Suit::Spades, 8)];

    let mut p = player(
        Strategy::Never,
        Layout {
            nertz: vec![card(Suit::Clubs, 13), card(Suit::Hearts, 7)],
            solitaire,
            ..Layout::default()
        },
    );

    assert_eq!(p.take_turn(&mut middle).unwrap(), Turn::NertzToSolitaire { to: 2 });
    assert_eq!(p.solitaire()[2].len(), 2);
    assert_eq!(p.nertz().len(), 1);
}

/// A run whose bottom fits elsewhere is moved, and Nertz fills the gap.
#[test]
fn test_consolidation_frees_a_stack() {
    let mut middle = MiddleStacks::new();
    let mut solitaire = dead_solitaire();
    solitaire[0] = vec![card(Suit::Clubs, 9), card(Suit::Diamonds, 8)];
    solitaire[1] = vec![card(Suit::Hearts, 10)];

    let mut p = player(
        Strategy::Never,
        Layout {
            nertz: vec![card(Suit::Diamonds, 13), card(Suit::Hearts, 13)],
            solitaire,
            ..Layout::default()
        },
    );

    assert_eq!(p.take_turn(&mut middle).unwrap(), Turn::Consolidated { from: 0, to: 1 });
    let ranks: Vec<u8> = p.solitaire()[1].cards().iter().map(|c| c.rank).collect();
    assert_eq!(ranks, vec![10, 9, 8]);
    assert_eq!(p.solitaire()[0].top().map(|c| (c.suit, c.rank)), Some((Suit::Hearts, 13)));
    assert_eq!(p.nertz().len(), 1);
}

#[test]
fn test_solitaire_to_middle_is_requested() {
    let mut middle = MiddleStacks::new();
    middle.start(card(Suit::Diamonds, 1)).unwrap();

    let mut solitaire = dead_solitaire();
    solitaire[3] = vec![card(Suit::Diamonds, 2)];
    let mut p = player(
        Strategy::Never,
        Layout {
            nertz: vec![card(Suit::Clubs, 13), card(Suit::Spades, 13)],
            solitaire,
            ..Layout::default()
        },
    );

    assert_eq!(
        p.take_turn(&mut middle).unwrap(),
        Turn::Requested {
            target: MiddleStackId::new(0),
            source: ActionSource::Solitaire(3)
        }
    );
}

#[test]
fn test_hand_to_middle_is_requested() {
    let mut middle = MiddleStacks::new();
    middle.start(card(Suit::Diamonds, 1)).unwrap();

    let mut p = player(
        Strategy::Never,
        Layout {
            nertz: vec![card(Suit::Clubs, 13), card(Suit::Spades, 13)],
            solitaire: dead_solitaire(),
            hand: vec![card(Suit::Spades, 6), card(Suit::Diamonds, 2)],
            hand_face_up: 1,
        },
    );

    assert_eq!(
        p.take_turn(&mut middle).unwrap(),
        Turn::Requested {
            target: MiddleStackId::new(0),
            source: ActionSource::Hand
        }
    );
}

// =============================================================================
// Strategy
// =============================================================================

fn hand_position(strategy: Strategy, nertz_top: Card) -> Player {
    let mut solitaire = dead_solitaire();
    solitaire[0] = vec![card(Suit::Clubs, 6)];
    player(
        strategy,
        Layout {
            nertz: vec![card(Suit::Clubs, 13), nertz_top],
            solitaire,
            hand: vec![card(Suit::Spades, 2), card(Suit::Hearts, 5)],
            hand_face_up: 1,
        },
    )
}

/// `never` flips instead of playing the Hand onto Solitaire.
#[test]
fn test_never_flips() {
    let mut p = hand_position(Strategy::Never, card(Suit::Spades, 13));
    assert_eq!(p.take_turn(&mut MiddleStacks::new()).unwrap(), Turn::Flipped);
}

#[test]
fn test_always_plays_hand_on_solitaire() {
    let mut p = hand_position(Strategy::Always, card(Suit::Spades, 13));
    assert_eq!(
        p.take_turn(&mut MiddleStacks::new()).unwrap(),
        Turn::HandToSolitaire { to: 0 }
    );
    assert_eq!(p.solitaire()[0].len(), 2);
}

/// Look-ahead strategies only play when the Nertz top could follow.
#[test]
fn test_lookahead_strategies() {
    // 4 black fits directly on the red 5.
    let mut one = hand_position(Strategy::OneDeep, card(Suit::Spades, 4));
    assert_eq!(one.take_turn(&mut MiddleStacks::new()).unwrap(), Turn::HandToSolitaire { to: 0 });

    // 3 red needs one card in between: only the 2-deep player sees it.
    let mut one = hand_position(Strategy::OneDeep, card(Suit::Diamonds, 3));
    assert_eq!(one.take_turn(&mut MiddleStacks::new()).unwrap(), Turn::Flipped);

    let mut two = hand_position(Strategy::TwoDeep, card(Suit::Diamonds, 3));
    assert_eq!(two.take_turn(&mut MiddleStacks::new()).unwrap(), Turn::HandToSolitaire { to: 0 });
}

// =============================================================================
// Granting Through the Table
// =============================================================================

fn seat(table: &mut Table, id: u8, layout: Layout) {
    table.player_mut(PlayerId::new(id)).arrange(layout);
}

fn waiting_layout(owner: u8) -> Layout {
    let own = |suit, rank| Card::new(suit, rank, PlayerId::new(owner));
    Layout {
        nertz: vec![own(Suit::Clubs, 13), own(Suit::Diamonds, 2)],
        solitaire: [
            vec![own(Suit::Clubs, 5)],
            vec![own(Suit::Hearts, 12)],
            vec![own(Suit::Spades, 9)],
            vec![own(Suit::Hearts, 11)],
        ],
        ..Layout::default()
    }
}

/// An uncontested request is granted and committed in the same tick.
#[test]
fn test_uncontested_request_commits() {
    let configs = vec![PlayerConfig::new("Alf")];
    let mut table = Table::new(configs, TableConfig::default(), 3).unwrap();
    seat(&mut table, 0, waiting_layout(0));
    let id = table.middle_mut().start(card(Suit::Diamonds, 1)).unwrap();

    let report = table.play_tick().unwrap();
    assert_eq!(report.granted, vec![(PlayerId::new(0), id)]);
    assert_eq!(table.middle().get(id).unwrap().len(), 2);
    assert_eq!(table.player(PlayerId::new(0)).nertz().len(), 1);
}

/// Two players after the same stack: exactly one card lands on it.
#[test]
fn test_contested_request_grants_one() {
    let configs = vec![PlayerConfig::new("Alf"), PlayerConfig::new("Bob")];
    let mut table = Table::new(configs, TableConfig::default(), 3).unwrap();
    seat(&mut table, 0, waiting_layout(0));
    seat(&mut table, 1, waiting_layout(1));
    let id = table.middle_mut().start(card(Suit::Diamonds, 1)).unwrap();

    let report = table.play_tick().unwrap();
    assert_eq!(report.granted.len(), 1);
    assert_eq!(table.middle().get(id).unwrap().len(), 2);

    let winner = report.granted[0].0;
    let loser = PlayerId::new(1 - winner.index() as u8);
    assert_eq!(table.player(winner).nertz().len(), 1);
    assert_eq!(table.player(loser).nertz().len(), 2);
    assert_eq!(table.middle().get(id).unwrap().top().map(|c| c.owner), Some(winner));
}

/// A granted Solitaire play empties the stack, and the Nertz top refills it
/// in the same commit.
#[test]
fn test_solitaire_commit_backfills_from_nertz() {
    let config = TableConfig::default().with_grant_log(true);
    let mut table = Table::new(vec![PlayerConfig::new("Alf")], config, 3).unwrap();
    let mut solitaire = dead_solitaire();
    solitaire[3] = vec![card(Suit::Diamonds, 2)];
    seat(
        &mut table,
        0,
        Layout {
            nertz: vec![card(Suit::Clubs, 13), card(Suit::Spades, 13)],
            solitaire,
            ..Layout::default()
        },
    );
    let id = table.middle_mut().start(card(Suit::Diamonds, 1)).unwrap();

    let report = table.play_tick().unwrap();
    assert_eq!(report.granted, vec![(PlayerId::new(0), id)]);
    assert_eq!(table.grants()[0].source, ActionSource::Solitaire(3));
    assert_eq!(table.middle().get(id).unwrap().len(), 2);

    let alf = table.player(PlayerId::new(0));
    assert_eq!(alf.solitaire()[3].len(), 1);
    assert_eq!(alf.solitaire()[3].top().map(|c| (c.suit, c.rank)), Some((Suit::Spades, 13)));
    assert_eq!(alf.nertz().len(), 1);
    assert!(!alf.declared_nertz());
}

/// A granted Hand play removes the exposed card, leaving the face-down
/// card below it unexposed.
#[test]
fn test_hand_commit_plays_exposed_card() {
    let config = TableConfig::default().with_grant_log(true);
    let mut table = Table::new(vec![PlayerConfig::new("Alf")], config, 3).unwrap();
    seat(
        &mut table,
        0,
        Layout {
            nertz: vec![card(Suit::Clubs, 13), card(Suit::Spades, 13)],
            solitaire: dead_solitaire(),
            hand: vec![card(Suit::Spades, 6), card(Suit::Diamonds, 2)],
            hand_face_up: 1,
        },
    );
    let id = table.middle_mut().start(card(Suit::Diamonds, 1)).unwrap();

    let report = table.play_tick().unwrap();
    assert_eq!(report.granted, vec![(PlayerId::new(0), id)]);
    assert_eq!(table.grants()[0].source, ActionSource::Hand);
    assert_eq!(
        table.middle().get(id).unwrap().top().map(|c| (c.suit, c.rank)),
        Some((Suit::Diamonds, 2))
    );

    let hand = table.player(PlayerId::new(0)).hand();
    assert_eq!(hand.len(), 1);
    assert!(hand.exposed().is_none());
    assert_eq!(table.player(PlayerId::new(0)).nertz().len(), 2);
}
