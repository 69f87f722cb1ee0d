use eights_rs::cards::{parse_cards, Card, Rank, Suit};
use eights_rs::config::{ConfigError, GameConfig, MAX_HAND_SIZE};
use eights_rs::deck::build_deck;
use eights_rs::game::{Actor, DeckError, Game, Phase};
use std::collections::HashSet;

fn mk_game(hand_size: usize) -> Game {
    Game::with_config(GameConfig::default().with_hand_size(hand_size).with_seed(7)).unwrap()
}

/// `front` in order, then every other card in suit-major order.
fn stacked(front: &str) -> Vec<Card> {
    let mut cards = parse_cards(front).unwrap();
    for c in build_deck() {
        if !cards.contains(&c) {
            cards.push(c);
        }
    }
    cards
}

#[test]
fn standard_deal_partitions_the_deck() {
    let mut g = mk_game(8);
    g.initialize();
    let snap = g.snapshot();

    assert_eq!(snap.player_hand.len(), 8);
    assert_eq!(snap.opponent_hand.len(), 8);
    assert_eq!(snap.discard_pile.len(), 1);
    assert_eq!(snap.deck.len(), 52 - 17);
    assert_eq!(snap.card_count(), 52);

    let all: HashSet<Card> = snap
        .deck
        .iter()
        .chain(&snap.player_hand)
        .chain(&snap.opponent_hand)
        .chain(&snap.discard_pile)
        .copied()
        .collect();
    assert_eq!(all.len(), 52);

    let top = g.top_discard().unwrap();
    assert_ne!(top.rank(), Rank::Eight);
    assert_eq!(snap.current_suit, Some(top.suit()));
    assert_eq!(snap.current_rank, Some(top.rank()));
    assert_eq!(snap.turn, Actor::Player);
    assert_eq!(snap.winner, None);
    assert_eq!(snap.phase, Phase::Playing);
}

#[test]
fn same_seed_deals_same_match() {
    let mut a = mk_game(8);
    let mut b = mk_game(8);
    a.initialize();
    b.initialize();
    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn seed_card_skips_wilds() {
    let mut g = mk_game(2);
    g.initialize_with_deck(stacked("2c 3c 2d 3d 8c 8d 4h")).unwrap();

    assert_eq!(g.player_hand().as_slice(), parse_cards("2c 3c").unwrap().as_slice());
    assert_eq!(g.opponent_hand().as_slice(), parse_cards("2d 3d").unwrap().as_slice());
    assert_eq!(g.discard_pile(), parse_cards("4h").unwrap().as_slice());
    assert_eq!(g.current_suit(), Some(Suit::Hearts));
    assert_eq!(g.current_rank(), Some(Rank::Four));

    // Skipped wilds stay in the draw pile.
    let deck = g.deck().as_slice();
    assert_eq!(deck.len(), 52 - 5);
    assert!(deck.contains(&"8c".parse().unwrap()));
    assert!(deck.contains(&"8d".parse().unwrap()));
}

#[test]
fn all_wild_pool_falls_back_to_first_card() {
    let eh: Card = "8h".parse().unwrap();
    let es: Card = "8s".parse().unwrap();
    let mut cards: Vec<Card> = build_deck().into_iter().filter(|&c| c != eh && c != es).collect();
    cards.extend([eh, es]);

    let mut g = mk_game(MAX_HAND_SIZE);
    g.initialize_with_deck(cards).unwrap();

    assert_eq!(g.top_discard(), Some(eh));
    assert_eq!(g.current_suit(), None);
    assert_eq!(g.current_rank(), Some(Rank::Eight));
    assert_eq!(g.deck().as_slice(), &[es]);
    // Open suit: every card in hand can be played.
    assert_eq!(g.playable_cards(Actor::Player).len(), MAX_HAND_SIZE);
}

#[test]
fn bad_decks_are_rejected_without_dealing() {
    let mut g = mk_game(8);

    let short = build_deck()[..51].to_vec();
    assert_eq!(
        g.initialize_with_deck(short),
        Err(DeckError::WrongSize { expected: 52, got: 51 })
    );

    let mut dup = build_deck();
    dup[51] = dup[0];
    assert_eq!(g.initialize_with_deck(dup), Err(DeckError::DuplicateCard(build_deck()[0])));

    assert_eq!(g.phase(), Phase::Rules);
    assert_eq!(g.generation(), 0);
}

#[test]
fn config_rejects_out_of_range_hand_sizes() {
    assert!(matches!(
        Game::with_config(GameConfig::default().with_hand_size(0)),
        Err(ConfigError::HandSizeOutOfRange { got: 0, .. })
    ));
    assert!(matches!(
        Game::with_config(GameConfig::default().with_hand_size(MAX_HAND_SIZE + 1)),
        Err(ConfigError::HandSizeOutOfRange { max: MAX_HAND_SIZE, .. })
    ));
    assert!(Game::with_config(GameConfig::default().with_hand_size(MAX_HAND_SIZE)).is_ok());
}

#[test]
fn custom_wild_rank_is_skipped_for_seed() {
    let cfg = GameConfig::default().with_hand_size(1).with_wild_rank(Rank::Two);
    let mut g = Game::with_config(cfg).unwrap();
    g.initialize_with_deck(stacked("Ah Ad 2c 8c")).unwrap();

    assert_eq!(g.top_discard(), Some("8c".parse().unwrap()));
    assert_eq!(g.current_suit(), Some(Suit::Clubs));
}

#[test]
fn reinitialize_starts_a_fresh_match() {
    let mut g = mk_game(1);
    g.initialize_with_deck(stacked("8h 3c 5d")).unwrap();
    g.play_card("8h".parse().unwrap(), Actor::Player, None).unwrap();
    assert_eq!(g.winner(), Some(Actor::Player));
    let gen = g.generation();

    g.initialize();
    assert_eq!(g.winner(), None);
    assert_eq!(g.phase(), Phase::Playing);
    assert_eq!(g.turn(), Actor::Player);
    assert_eq!(g.generation(), gen + 1);
    assert!(g.history().is_empty());
    assert_eq!(g.snapshot().card_count(), 52);
}
