use crate::cards::{Card, Rank, Suit};
use rand::seq::SliceRandom;
use rand::Rng;

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;

/// The 52 cards in suit-major order: hearts, diamonds, clubs, spades, each Ace to King.
///
/// ```
/// use eights_rs::deck::build_deck;
///
/// let cards = build_deck();
/// assert_eq!(cards.len(), 52);
/// assert_eq!(cards[0].to_string(), "Ah");
/// ```
pub fn build_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for &s in &Suit::ALL {
        for &r in &Rank::ALL {
            cards.push(Card::new(r, s));
        }
    }
    cards
}

/// Return a uniformly shuffled copy of `cards`; the input is left as is.
pub fn shuffle<R: Rng + ?Sized>(cards: &[Card], rng: &mut R) -> Vec<Card> {
    let mut out = cards.to_vec();
    out.shuffle(rng);
    out
}

/// Face-down draw pile. The top of the pile is the end of the sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards bottom-first; the last element is the next to be drawn.
    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Peek at the next card to be drawn.
    pub fn top(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// Draw one card from the top of the deck.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }
}
