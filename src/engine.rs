// Game engine API boundary. This trait exposes the match commands and the
// queries agents need so front ends (TUI, bots, tests) can drive a match
// without depending on engine internals. It is implemented for `Game`.

use crate::cards::{Card, Rank, Suit};
use crate::game::{ActionError, Actor, DrawOutcome, Phase, PlayOutcome};
use crate::hand::Hand;

pub trait GameEngine {
    // Commands
    fn play_card(
        &mut self,
        card: Card,
        actor: Actor,
        declared: Option<Suit>,
    ) -> Result<PlayOutcome, ActionError>;
    fn draw_card(&mut self, actor: Actor) -> Result<DrawOutcome, ActionError>;
    fn choose_suit(&mut self, suit: Suit) -> Result<(), ActionError>;

    // Queries
    fn hand(&self, actor: Actor) -> &Hand;
    fn current_suit(&self) -> Option<Suit>;
    fn current_rank(&self) -> Option<Rank>;
    fn wild_rank(&self) -> Rank;
    fn turn(&self) -> Actor;
    fn phase(&self) -> Phase;
    fn winner(&self) -> Option<Actor>;
    fn generation(&self) -> u64;
}

impl GameEngine for crate::game::Game {
    fn play_card(
        &mut self,
        card: Card,
        actor: Actor,
        declared: Option<Suit>,
    ) -> Result<PlayOutcome, ActionError> {
        self.play_card(card, actor, declared)
    }
    fn draw_card(&mut self, actor: Actor) -> Result<DrawOutcome, ActionError> {
        self.draw_card(actor)
    }
    fn choose_suit(&mut self, suit: Suit) -> Result<(), ActionError> {
        self.choose_suit(suit)
    }

    fn hand(&self, actor: Actor) -> &Hand {
        self.hand(actor)
    }
    fn current_suit(&self) -> Option<Suit> {
        self.current_suit
    }
    fn current_rank(&self) -> Option<Rank> {
        self.current_rank
    }
    fn wild_rank(&self) -> Rank {
        self.config.wild_rank
    }
    fn turn(&self) -> Actor {
        self.turn
    }
    fn phase(&self) -> Phase {
        self.phase
    }
    fn winner(&self) -> Option<Actor> {
        self.winner
    }
    fn generation(&self) -> u64 {
        self.generation
    }
}
