use crate::cards::{Card, Rank, Suit};
use crate::config::{ConfigError, GameConfig};
use crate::deck::{build_deck, shuffle, Deck, DECK_SIZE};
use crate::hand::Hand;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;
use std::fmt;

/// The two sides of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Actor {
    Player,
    Opponent,
}

impl Actor {
    pub const BOTH: [Actor; 2] = [Actor::Player, Actor::Opponent];

    pub const fn other(self) -> Actor {
        match self {
            Actor::Player => Actor::Opponent,
            Actor::Opponent => Actor::Player,
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Actor::Player => 0,
            Actor::Opponent => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Actor::Player => "You",
            Actor::Opponent => "Opponent",
        }
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Phase {
    /// Fresh engine; no match has been dealt yet.
    Rules,
    Playing,
    /// A wild card was played without a suit; the same actor must declare one.
    AwaitingSuitChoice,
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum PlayOutcome {
    TurnPassed,
    AwaitingSuitChoice,
    Won,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum DrawOutcome {
    Drew(Card),
    /// Draw pile was empty; the turn passed without a card.
    Skipped,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ActionError {
    #[error("no match in progress")]
    NotStarted,
    #[error("the match is over")]
    GameOver,
    #[error("not {0}'s turn")]
    NotYourTurn(Actor),
    #[error("a suit must be chosen first")]
    SuitChoicePending,
    #[error("no suit choice is pending")]
    NoSuitChoicePending,
    #[error("{0} is not in hand")]
    CardNotInHand(Card),
    #[error("{0} does not match the active suit or rank")]
    NotPlayable(Card),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("expected {expected} cards, got {got}")]
    WrongSize { expected: usize, got: usize },
    #[error("duplicate card in deck: {0}")]
    DuplicateCard(Card),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum MoveVerb {
    Play,
    DeclareSuit,
    Draw,
    Skip,
    Win,
}

impl MoveVerb {
    pub fn label(self) -> &'static str {
        match self {
            MoveVerb::Play => "Play",
            MoveVerb::DeclareSuit => "Declare",
            MoveVerb::Draw => "Draw",
            MoveVerb::Skip => "Skip",
            MoveVerb::Win => "Win",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct MoveRecord {
    pub actor: Actor,
    pub verb: MoveVerb,
    pub card: Option<Card>,
    pub suit: Option<Suit>,
}

/// An owned copy of everything a front end needs to render one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Snapshot {
    pub deck: Vec<Card>,
    pub player_hand: Vec<Card>,
    pub opponent_hand: Vec<Card>,
    pub discard_pile: Vec<Card>,
    pub current_suit: Option<Suit>,
    pub current_rank: Option<Rank>,
    pub turn: Actor,
    pub winner: Option<Actor>,
    pub phase: Phase,
    pub generation: u64,
}

impl Snapshot {
    /// Total cards across all four zones.
    pub fn card_count(&self) -> usize {
        self.deck.len() + self.player_hand.len() + self.opponent_hand.len() + self.discard_pile.len()
    }
}

/// Whether `card` may be played on the active suit and rank.
///
/// `current_suit` is `None` only when the opening discard was itself wild; any suit matches then.
///
/// ```
/// use eights_rs::cards::{Card, Rank, Suit};
/// use eights_rs::game::is_playable;
///
/// let seven_hearts = (Some(Suit::Hearts), Rank::Seven);
/// let check = |c: &str| is_playable(c.parse().unwrap(), seven_hearts.0, seven_hearts.1, Rank::Eight);
/// assert!(check("2h"));
/// assert!(check("7c"));
/// assert!(check("8s"));
/// assert!(!check("3d"));
/// ```
pub fn is_playable(
    card: Card,
    current_suit: Option<Suit>,
    current_rank: Rank,
    wild_rank: Rank,
) -> bool {
    card.rank() == wild_rank
        || current_suit.map_or(true, |s| card.suit() == s)
        || card.rank() == current_rank
}

#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Game {
    pub(crate) config: GameConfig,
    rng: ChaCha8Rng,

    pub(crate) deck: Deck,
    pub(crate) player_hand: Hand,
    pub(crate) opponent_hand: Hand,
    pub(crate) discard_pile: Vec<Card>,
    pub(crate) current_suit: Option<Suit>,
    pub(crate) current_rank: Option<Rank>,
    pub(crate) turn: Actor,
    pub(crate) winner: Option<Actor>,
    pub(crate) phase: Phase,
    /// Bumped by every deal so deferred moves can tell they belong to an older match.
    pub(crate) generation: u64,
    history: Vec<MoveRecord>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Engine with the standard rules, waiting on the rules screen.
    pub fn new() -> Self {
        Self::build(GameConfig::default())
    }

    pub fn with_config(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => {
                let mut seed = [0u8; 32];
                rand::rng().fill_bytes(&mut seed);
                ChaCha8Rng::from_seed(seed)
            }
        };
        Self {
            config,
            rng,
            deck: Deck::default(),
            player_hand: Hand::default(),
            opponent_hand: Hand::default(),
            discard_pile: Vec::new(),
            current_suit: None,
            current_rank: None,
            turn: Actor::Player,
            winner: None,
            phase: Phase::Rules,
            generation: 0,
            history: Vec::new(),
        }
    }

    /// Shuffle a fresh deck and deal a new match, discarding any match in progress.
    pub fn initialize(&mut self) {
        let cards = shuffle(&build_deck(), &mut self.rng);
        self.deal(cards);
    }

    /// Deal a new match from a caller-ordered deck. Hands are dealt from the front.
    pub fn initialize_with_deck(&mut self, cards: Vec<Card>) -> Result<(), DeckError> {
        if cards.len() != DECK_SIZE {
            return Err(DeckError::WrongSize { expected: DECK_SIZE, got: cards.len() });
        }
        let mut seen = HashSet::with_capacity(DECK_SIZE);
        for &c in &cards {
            if !seen.insert(c) {
                return Err(DeckError::DuplicateCard(c));
            }
        }
        self.deal(cards);
        Ok(())
    }

    fn deal(&mut self, mut cards: Vec<Card>) {
        let n = self.config.hand_size;
        let mut rest = cards.split_off(2 * n);
        let opponent = cards.split_off(n);
        let player = cards;

        // First non-wild card from the front; all-wild pools fall back to the first card.
        let wild = self.config.wild_rank;
        let seed_idx = rest.iter().position(|c| c.rank() != wild).unwrap_or(0);
        let seed = rest.remove(seed_idx);

        self.deck = Deck::new(rest);
        self.player_hand = Hand::new(player);
        self.opponent_hand = Hand::new(opponent);
        self.discard_pile = vec![seed];
        self.current_suit = if seed.rank() == wild { None } else { Some(seed.suit()) };
        self.current_rank = Some(seed.rank());
        self.turn = Actor::Player;
        self.winner = None;
        self.phase = Phase::Playing;
        self.generation += 1;
        self.history.clear();
        log::info!("match {} dealt, starter {}", self.generation, seed);
    }

    fn ensure_can_act(&self, actor: Actor) -> Result<(), ActionError> {
        match self.phase {
            Phase::Rules => return Err(ActionError::NotStarted),
            Phase::GameOver => return Err(ActionError::GameOver),
            Phase::AwaitingSuitChoice => return Err(ActionError::SuitChoicePending),
            Phase::Playing => {}
        }
        if self.turn != actor {
            return Err(ActionError::NotYourTurn(actor));
        }
        Ok(())
    }

    /// Play `card` from `actor`'s hand. A wild card may carry the suit it declares;
    /// without one the match pauses in [`Phase::AwaitingSuitChoice`].
    ///
    /// Every check runs before any mutation, so an error leaves the game untouched.
    pub fn play_card(
        &mut self,
        card: Card,
        actor: Actor,
        declared: Option<Suit>,
    ) -> Result<PlayOutcome, ActionError> {
        self.ensure_can_act(actor)?;
        if !self.hand(actor).contains(card) {
            return Err(ActionError::CardNotInHand(card));
        }
        if !self.is_playable(card) {
            return Err(ActionError::NotPlayable(card));
        }

        // Only a wild card names a suit; anything declared with a plain card is dropped.
        let is_wild = card.rank() == self.config.wild_rank;
        let declared = declared.filter(|_| is_wild);

        self.hand_mut(actor).remove(card);
        self.discard_pile.push(card);
        self.current_rank = Some(card.rank());
        if !is_wild {
            self.current_suit = Some(card.suit());
        } else if declared.is_some() {
            self.current_suit = declared;
        }
        self.record(actor, MoveVerb::Play, Some(card), declared);
        log::debug!("{actor} played {card}");

        if self.hand(actor).is_empty() {
            self.winner = Some(actor);
            self.phase = Phase::GameOver;
            self.record(actor, MoveVerb::Win, None, None);
            log::info!("match {} won by {actor}", self.generation);
            return Ok(PlayOutcome::Won);
        }

        if is_wild && declared.is_none() {
            self.phase = Phase::AwaitingSuitChoice;
            return Ok(PlayOutcome::AwaitingSuitChoice);
        }
        if let Some(s) = declared {
            log::debug!("{actor} declared {}", s.name());
        }
        self.turn = actor.other();
        Ok(PlayOutcome::TurnPassed)
    }

    /// Declare the active suit after a wild card played without one.
    pub fn choose_suit(&mut self, suit: Suit) -> Result<(), ActionError> {
        match self.phase {
            Phase::AwaitingSuitChoice => {}
            Phase::GameOver => return Err(ActionError::GameOver),
            _ => return Err(ActionError::NoSuitChoicePending),
        }
        let actor = self.turn;
        self.current_suit = Some(suit);
        self.phase = Phase::Playing;
        self.turn = actor.other();
        self.record(actor, MoveVerb::DeclareSuit, None, Some(suit));
        log::debug!("{actor} declared {}", suit.name());
        Ok(())
    }

    /// Draw the top card into `actor`'s hand. Drawing always ends the turn; on an
    /// empty pile the turn is skipped instead.
    pub fn draw_card(&mut self, actor: Actor) -> Result<DrawOutcome, ActionError> {
        self.ensure_can_act(actor)?;
        let outcome = match self.deck.draw() {
            Some(card) => {
                self.hand_mut(actor).push(card);
                self.record(actor, MoveVerb::Draw, Some(card), None);
                log::debug!("{actor} drew ({} left)", self.deck.len());
                DrawOutcome::Drew(card)
            }
            None => {
                self.record(actor, MoveVerb::Skip, None, None);
                log::debug!("{actor} skipped: draw pile empty");
                DrawOutcome::Skipped
            }
        };
        self.turn = actor.other();
        Ok(outcome)
    }

    fn record(&mut self, actor: Actor, verb: MoveVerb, card: Option<Card>, suit: Option<Suit>) {
        self.history.push(MoveRecord { actor, verb, card, suit });
    }

    fn hand_mut(&mut self, actor: Actor) -> &mut Hand {
        match actor {
            Actor::Player => &mut self.player_hand,
            Actor::Opponent => &mut self.opponent_hand,
        }
    }

    /// Whether `card` matches the active suit or rank (or is wild). Always false
    /// before the first deal.
    pub fn is_playable(&self, card: Card) -> bool {
        match self.current_rank {
            Some(rank) => is_playable(card, self.current_suit, rank, self.config.wild_rank),
            None => false,
        }
    }

    /// Playable cards in `actor`'s hand, in hand order.
    pub fn playable_cards(&self, actor: Actor) -> Vec<Card> {
        self.hand(actor).as_slice().iter().copied().filter(|&c| self.is_playable(c)).collect()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            deck: self.deck.as_slice().to_vec(),
            player_hand: self.player_hand.as_slice().to_vec(),
            opponent_hand: self.opponent_hand.as_slice().to_vec(),
            discard_pile: self.discard_pile.clone(),
            current_suit: self.current_suit,
            current_rank: self.current_rank,
            turn: self.turn,
            winner: self.winner,
            phase: self.phase,
            generation: self.generation,
        }
    }

    /// Returns the configuration this engine was built with
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn wild_rank(&self) -> Rank {
        self.config.wild_rank
    }

    pub fn hand(&self, actor: Actor) -> &Hand {
        match actor {
            Actor::Player => &self.player_hand,
            Actor::Opponent => &self.opponent_hand,
        }
    }

    pub fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    pub fn opponent_hand(&self) -> &Hand {
        &self.opponent_hand
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn discard_pile(&self) -> &[Card] {
        &self.discard_pile
    }

    pub fn top_discard(&self) -> Option<Card> {
        self.discard_pile.last().copied()
    }

    pub fn current_suit(&self) -> Option<Suit> {
        self.current_suit
    }

    pub fn current_rank(&self) -> Option<Rank> {
        self.current_rank
    }

    pub fn turn(&self) -> Actor {
        self.turn
    }

    pub fn winner(&self) -> Option<Actor> {
        self.winner
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Moves of the current match, oldest first.
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}
