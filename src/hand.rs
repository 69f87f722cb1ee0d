use crate::cards::{parse_cards, Card, CardParseError, Suit};
use std::str::FromStr;

/// A player's hand. Order is the order cards were received and is kept for display.
///
/// ```
/// use eights_rs::cards::{Card, Rank, Suit};
/// use eights_rs::hand::Hand;
///
/// let mut hand: Hand = "8h 5h 9c".parse().unwrap();
/// assert!(hand.remove(Card::new(Rank::Five, Suit::Hearts)));
/// assert_eq!(hand.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    pub fn get(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Remove the first occurrence of `card`, keeping the order of the rest.
    /// Returns false if the card is not held.
    pub fn remove(&mut self, card: Card) -> bool {
        match self.cards.iter().position(|&c| c == card) {
            Some(idx) => {
                self.cards.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Count of cards per suit, indexed by `Suit::index`.
    pub fn suit_counts(&self) -> [usize; 4] {
        let mut counts = [0usize; 4];
        for c in &self.cards {
            counts[c.suit().index()] += 1;
        }
        counts
    }

    /// Suit held most often; ties go to the earliest suit in `Suit::ALL`.
    /// An empty hand yields the first suit.
    pub fn dominant_suit(&self) -> Suit {
        let counts = self.suit_counts();
        let mut best = Suit::ALL[0];
        for &s in &Suit::ALL[1..] {
            if counts[s.index()] > counts[best.index()] {
                best = s;
            }
        }
        best
    }
}

impl FromStr for Hand {
    type Err = CardParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_cards(s).map(Self::new)
    }
}
