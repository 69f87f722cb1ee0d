use eights_rs::cards::{parse_cards, Card, Rank, Suit};
use eights_rs::config::{GameConfig, MAX_HAND_SIZE};
use eights_rs::deck::build_deck;
use eights_rs::game::{ActionError, Actor, DrawOutcome, Game, MoveVerb, Phase, PlayOutcome};

fn card(s: &str) -> Card {
    s.parse().expect("valid card")
}

fn stacked(front: &str) -> Vec<Card> {
    let mut cards = parse_cards(front).unwrap();
    for c in build_deck() {
        if !cards.contains(&c) {
            cards.push(c);
        }
    }
    cards
}

fn dealt(hand_size: usize, front: &str) -> Game {
    let mut g = Game::with_config(GameConfig::default().with_hand_size(hand_size)).unwrap();
    g.initialize_with_deck(stacked(front)).unwrap();
    g
}

#[test]
fn full_match_to_opponent_win() {
    // You: 8h 5c 2d   Opponent: 9c 3s 4s   Starter: 7c
    let mut g = dealt(3, "8h 5c 2d 9c 3s 4s 7c");
    assert_eq!((g.current_suit(), g.current_rank()), (Some(Suit::Clubs), Some(Rank::Seven)));

    assert_eq!(g.play_card(card("5c"), Actor::Player, None), Ok(PlayOutcome::TurnPassed));
    assert_eq!(g.turn(), Actor::Opponent);
    assert_eq!(g.play_card(card("9c"), Actor::Opponent, None), Ok(PlayOutcome::TurnPassed));

    assert_eq!(
        g.play_card(card("8h"), Actor::Player, Some(Suit::Spades)),
        Ok(PlayOutcome::TurnPassed)
    );
    assert_eq!(g.current_suit(), Some(Suit::Spades));
    assert_eq!(g.current_rank(), Some(Rank::Eight));

    assert_eq!(g.play_card(card("3s"), Actor::Opponent, None), Ok(PlayOutcome::TurnPassed));
    assert_eq!(g.play_card(card("2d"), Actor::Player, None), Err(ActionError::NotPlayable(card("2d"))));
    assert!(matches!(g.draw_card(Actor::Player), Ok(DrawOutcome::Drew(_))));
    assert_eq!(g.play_card(card("4s"), Actor::Opponent, None), Ok(PlayOutcome::Won));

    assert_eq!(g.winner(), Some(Actor::Opponent));
    assert_eq!(g.phase(), Phase::GameOver);
    assert!(g.opponent_hand().is_empty());
    assert_eq!(g.history().last().map(|m| m.verb), Some(MoveVerb::Win));
}

#[test]
fn finished_match_rejects_every_command() {
    let mut g = dealt(1, "3c 9d 5c");
    g.play_card(card("3c"), Actor::Player, None).unwrap();
    assert_eq!(g.winner(), Some(Actor::Player));
    let before = g.snapshot();

    assert_eq!(g.play_card(card("9d"), Actor::Opponent, None), Err(ActionError::GameOver));
    assert_eq!(g.draw_card(Actor::Opponent), Err(ActionError::GameOver));
    assert_eq!(g.draw_card(Actor::Player), Err(ActionError::GameOver));
    assert_eq!(g.choose_suit(Suit::Hearts), Err(ActionError::GameOver));
    assert_eq!(g.snapshot(), before);
}

#[test]
fn wild_as_last_card_wins_without_suit_choice() {
    let mut g = dealt(1, "8h 3c 5d");
    assert_eq!(g.play_card(card("8h"), Actor::Player, None), Ok(PlayOutcome::Won));
    assert_eq!(g.phase(), Phase::GameOver);
    assert_eq!(g.choose_suit(Suit::Clubs), Err(ActionError::GameOver));
}

#[test]
fn wrong_actor_is_rejected_without_change() {
    let mut g = dealt(2, "2h 3h 2s 3s 4h");
    let before = g.snapshot();

    assert_eq!(
        g.play_card(card("2s"), Actor::Opponent, None),
        Err(ActionError::NotYourTurn(Actor::Opponent))
    );
    assert_eq!(g.draw_card(Actor::Opponent), Err(ActionError::NotYourTurn(Actor::Opponent)));
    assert_eq!(g.snapshot(), before);
}

#[test]
fn card_outside_hand_is_rejected() {
    let mut g = dealt(2, "2h 3h 2s 3s 4h");
    let before = g.snapshot();
    assert_eq!(
        g.play_card(card("2s"), Actor::Player, None),
        Err(ActionError::CardNotInHand(card("2s")))
    );
    assert_eq!(g.snapshot(), before);
}

#[test]
fn suit_choice_belongs_to_the_wild_player() {
    let mut g = dealt(2, "8h 3h 2s 3s 4d");
    assert_eq!(g.play_card(card("8h"), Actor::Player, None), Ok(PlayOutcome::AwaitingSuitChoice));
    assert_eq!(g.phase(), Phase::AwaitingSuitChoice);
    assert_eq!(g.turn(), Actor::Player);

    assert_eq!(g.draw_card(Actor::Player), Err(ActionError::SuitChoicePending));
    assert_eq!(g.play_card(card("2s"), Actor::Opponent, None), Err(ActionError::SuitChoicePending));

    g.choose_suit(Suit::Spades).unwrap();
    assert_eq!(g.phase(), Phase::Playing);
    assert_eq!(g.turn(), Actor::Opponent);
    assert_eq!(g.current_suit(), Some(Suit::Spades));
    assert_eq!(g.choose_suit(Suit::Hearts), Err(ActionError::NoSuitChoicePending));
    assert!(g.is_playable(card("2s")));
}

#[test]
fn empty_draw_pile_only_passes_the_turn() {
    let mut g = dealt(MAX_HAND_SIZE, "");
    assert_eq!(g.deck().len(), 1);
    g.draw_card(Actor::Player).unwrap();
    assert!(g.deck().is_empty());

    let before = g.snapshot();
    assert_eq!(g.draw_card(Actor::Opponent), Ok(DrawOutcome::Skipped));
    let mut expected = before.clone();
    expected.turn = Actor::Player;
    assert_eq!(g.snapshot(), expected);
    assert_eq!(g.history().last().map(|m| m.verb), Some(MoveVerb::Skip));
}

#[test]
fn draw_takes_the_top_card() {
    let mut g = dealt(2, "2h 3h 2s 3s 4d");
    let top = g.deck().top().unwrap();
    assert_eq!(g.draw_card(Actor::Player), Ok(DrawOutcome::Drew(top)));
    assert!(g.player_hand().contains(top));
    assert_eq!(g.player_hand().len(), 3);
    assert_eq!(g.turn(), Actor::Opponent);
}

#[test]
fn plain_card_keeps_its_own_suit_whatever_is_declared() {
    let mut g = dealt(2, "2h 3s 2s 3d 4h");
    assert_eq!(g.play_card(card("2h"), Actor::Player, Some(Suit::Spades)), Ok(PlayOutcome::TurnPassed));
    assert_eq!(g.current_suit(), Some(Suit::Hearts));
    assert_eq!(g.current_rank(), Some(Rank::Two));
    assert_eq!(g.turn(), Actor::Opponent);
    assert_eq!(g.phase(), Phase::Playing);
}
