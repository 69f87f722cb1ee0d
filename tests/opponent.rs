use eights_rs::agents::{
    Action, AgentKind, AgentTable, BotAgent, BotProfile, OpponentPolicy, PlayerAgent, PolicyView,
};
use eights_rs::cards::{parse_cards, Card, Suit};
use eights_rs::config::GameConfig;
use eights_rs::deck::build_deck;
use eights_rs::game::{Actor, Game, Phase};
use std::thread;
use std::time::Duration;

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

/// Deal `front`, then let the player draw so the opponent holds the turn.
fn opponent_to_move(hand_size: usize, front: &str) -> Game {
    let mut g = Game::with_config(GameConfig::default().with_hand_size(hand_size)).unwrap();
    g.initialize_with_deck(stacked(front)).unwrap();
    g.draw_card(Actor::Player).unwrap();
    g
}

#[test]
fn wild_declares_most_common_remaining_suit() {
    // Opponent holds 8h 5h 9c 10c against 9s.
    let g = opponent_to_move(4, "2d 3d 4d 5d 8h 5h 9c 10c 9s");
    let view = PolicyView::of(&g, Actor::Opponent).unwrap();
    assert!(view.hand.contains(card("8h")));

    // 10c is not playable on 9s and still counts toward clubs.
    let decision = OpponentPolicy::decide(&view);
    assert_eq!(decision.action, Action::Play { card: card("8h"), declared: Some(Suit::Clubs) });
}

#[test]
fn first_playable_in_hand_order_without_wild() {
    let g = opponent_to_move(3, "2d 3d 4d Kc 7s 7c 7h");
    let decision = OpponentPolicy::decide(&PolicyView::of(&g, Actor::Opponent).unwrap());
    assert_eq!(decision.action, Action::Play { card: card("7s"), declared: None });
}

#[test]
fn draws_when_nothing_matches() {
    let g = opponent_to_move(2, "2d 3d Kc Qc 7h");
    let decision = OpponentPolicy::decide(&PolicyView::of(&g, Actor::Opponent).unwrap());
    assert_eq!(decision.action, Action::Draw);
}

#[test]
fn no_view_before_first_deal() {
    let g = Game::new();
    assert!(PolicyView::of(&g, Actor::Opponent).is_none());
}

#[test]
fn bot_waits_out_its_delay() {
    let mut g = opponent_to_move(2, "2d 3d 7h Qc 7c");
    let mut bot = BotAgent::new(BotProfile::with_delay_ms(30));

    assert!(!bot.on_turn(&mut g, Actor::Opponent).unwrap());
    assert!(bot.is_thinking());
    assert_eq!(g.turn(), Actor::Opponent);

    thread::sleep(Duration::from_millis(40));
    assert!(bot.on_turn(&mut g, Actor::Opponent).unwrap());
    assert!(!bot.is_thinking());
    assert_eq!(g.turn(), Actor::Player);
    assert_eq!(g.top_discard(), Some(card("7h")));
}

#[test]
fn scheduled_move_from_an_old_match_never_fires() {
    let mut g = opponent_to_move(2, "2d 3d 7h Qc 7c");
    let mut bot = BotAgent::new(BotProfile::with_delay_ms(30));
    assert!(!bot.on_turn(&mut g, Actor::Opponent).unwrap());
    let old = bot.pending().unwrap();

    g.initialize();
    g.draw_card(Actor::Player).unwrap();
    thread::sleep(Duration::from_millis(40));

    // The stale move is dropped and a new one is scheduled for this match.
    assert!(!bot.on_turn(&mut g, Actor::Opponent).unwrap());
    let fresh = bot.pending().unwrap();
    assert_eq!(fresh.generation, g.generation());
    assert_ne!(fresh.generation, old.generation);
    assert_eq!(g.turn(), Actor::Opponent);
}

#[test]
fn bot_idles_when_match_is_over() {
    let mut g = Game::with_config(GameConfig::default().with_hand_size(1)).unwrap();
    g.initialize_with_deck(stacked("3c 9d 5c")).unwrap();
    g.play_card(card("3c"), Actor::Player, None).unwrap();

    let mut bot = BotAgent::new(BotProfile::instant());
    assert!(!bot.on_turn(&mut g, Actor::Opponent).unwrap());
    assert_eq!(g.phase(), Phase::GameOver);
}

#[test]
fn table_runs_human_then_bot() {
    let mut g = Game::with_config(GameConfig::default().with_hand_size(2)).unwrap();
    g.initialize_with_deck(stacked("2d 3d 7h Qc 7c")).unwrap();
    let mut table = AgentTable::human_vs_bot(BotProfile::instant());
    assert_eq!(table.agent_kind(Actor::Opponent), Some(AgentKind::Bot));

    // Nothing queued for the human yet.
    assert!(!table.on_turn(&mut g).unwrap());
    assert!(table.receive(Actor::Player, Action::Draw));
    assert!(table.on_turn(&mut g).unwrap());
    assert_eq!(g.turn(), Actor::Opponent);

    assert!(table.on_turn(&mut g).unwrap());
    assert_eq!(g.turn(), Actor::Player);
    assert_eq!(g.top_discard(), Some(card("7h")));
}

#[test]
fn cancel_all_drops_thinking_bot() {
    let mut g = opponent_to_move(2, "2d 3d 7h Qc 7c");
    let mut table = AgentTable::human_vs_bot(BotProfile::with_delay_ms(500));
    assert!(!table.on_turn(&mut g).unwrap());
    assert!(table.is_thinking(Actor::Opponent));

    table.cancel_all();
    assert!(!table.is_thinking(Actor::Opponent));
}

#[test]
fn game_over_cancels_scheduled_move() {
    let mut g = opponent_to_move(1, "2d 9c 7h");
    let mut bot = BotAgent::new(BotProfile::with_delay_ms(30));
    assert!(!bot.on_turn(&mut g, Actor::Opponent).unwrap());
    assert!(bot.is_thinking());

    g.initialize_with_deck(stacked("3c 9d 5c")).unwrap();
    g.play_card(card("3c"), Actor::Player, None).unwrap();
    thread::sleep(Duration::from_millis(40));

    assert!(!bot.on_turn(&mut g, Actor::Opponent).unwrap());
    assert!(!bot.is_thinking());
    assert_eq!(g.winner(), Some(Actor::Player));
}

#[test]
fn bot_declares_suit_for_a_wild_played_without_one() {
    // Opponent holds 8h 5c 6c against 7h.
    let mut g = opponent_to_move(3, "2d 3d 4d 8h 5c 6c 7h");
    g.play_card(card("8h"), Actor::Opponent, None).unwrap();
    assert_eq!(g.phase(), Phase::AwaitingSuitChoice);

    let mut bot = BotAgent::new(BotProfile::with_delay_ms(500));
    assert!(bot.on_turn(&mut g, Actor::Opponent).unwrap());
    assert!(!bot.is_thinking());
    assert_eq!(g.current_suit(), Some(Suit::Clubs));
    assert_eq!(g.phase(), Phase::Playing);
    assert_eq!(g.turn(), Actor::Player);
}
