use crate::cards::{Rank, Suit};
use crate::engine::GameEngine;
use crate::game::{is_playable, ActionError, Actor, Phase};
use crate::hand::Hand;
use rand::{rngs::StdRng, Rng, RngCore, SeedableRng};
use std::time::{Duration, Instant};

use super::{Action, AgentKind, PlayerAgent};

/// Timing configuration for the opponent. The policy itself has no knobs.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct BotProfile {
    pub min_delay_ms: u64,
    pub max_delay_ms: u64,
    pub rng_seed: Option<u64>,
}

impl BotProfile {
    pub const DEFAULT_DELAY_MS: u64 = 1500;

    /// Fixed thinking delay of `delay_ms`.
    pub fn with_delay_ms(delay_ms: u64) -> Self {
        Self { min_delay_ms: delay_ms, max_delay_ms: delay_ms, rng_seed: None }
    }

    /// No thinking delay: the bot moves on the first tick of its turn.
    pub fn instant() -> Self {
        Self::with_delay_ms(0)
    }

    /// Thinking delay drawn uniformly from `min_ms..=max_ms` for each move.
    pub fn with_delay_range(mut self, min_ms: u64, max_ms: u64) -> Self {
        self.min_delay_ms = min_ms;
        self.max_delay_ms = max_ms;
        self
    }

    /// Set a deterministic RNG seed for reproducible delays.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }
}

impl Default for BotProfile {
    fn default() -> Self {
        Self::with_delay_ms(Self::DEFAULT_DELAY_MS)
    }
}

#[derive(Debug)]
struct BotState {
    rng: StdRng,
}

impl BotState {
    fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(v) => StdRng::seed_from_u64(v),
            None => {
                let mut seed = [0u8; 32];
                rand::rng().fill_bytes(&mut seed);
                StdRng::from_seed(seed)
            }
        };
        Self { rng }
    }
}

/// What the policy sees: its own hand and the active suit and rank.
#[derive(Debug, Clone, Copy)]
pub struct PolicyView<'a> {
    pub hand: &'a Hand,
    pub current_suit: Option<Suit>,
    pub current_rank: Rank,
    pub wild_rank: Rank,
}

impl<'a> PolicyView<'a> {
    /// View of `seat`'s hand; `None` before the first deal.
    pub fn of(engine: &'a dyn GameEngine, seat: Actor) -> Option<Self> {
        Some(Self {
            hand: engine.hand(seat),
            current_suit: engine.current_suit(),
            current_rank: engine.current_rank()?,
            wild_rank: engine.wild_rank(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BotDecision {
    pub action: Action,
    pub reason: &'static str,
}

/// The opponent's move selection. Deterministic for a given view, no lookahead.
pub struct OpponentPolicy;

impl OpponentPolicy {
    pub fn decide(view: &PolicyView<'_>) -> BotDecision {
        let mut playable = view
            .hand
            .as_slice()
            .iter()
            .copied()
            .filter(|&c| is_playable(c, view.current_suit, view.current_rank, view.wild_rank))
            .peekable();

        let Some(&first) = playable.peek() else {
            return BotDecision { action: Action::Draw, reason: "no_playable" };
        };

        let Some(wild) = playable.find(|c| c.rank() == view.wild_rank) else {
            return BotDecision {
                action: Action::Play { card: first, declared: None },
                reason: "first_playable",
            };
        };

        let mut rest = view.hand.clone();
        rest.remove(wild);
        BotDecision {
            action: Action::Play { card: wild, declared: Some(rest.dominant_suit()) },
            reason: "wild",
        }
    }
}

/// A deferred opponent move. It only fires for the match it was scheduled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingMove {
    pub generation: u64,
    pub due: Instant,
}

pub struct BotAgent {
    profile: BotProfile,
    state: BotState,
    pending: Option<PendingMove>,
}

impl BotAgent {
    pub fn new(profile: BotProfile) -> Self {
        let state = BotState::new(profile.rng_seed);
        Self { profile, state, pending: None }
    }

    /// The scheduled move, if one is waiting for its delay to elapse.
    pub fn pending(&self) -> Option<PendingMove> {
        self.pending
    }
}

impl PlayerAgent for BotAgent {
    fn kind(&self) -> AgentKind {
        AgentKind::Bot
    }
    fn is_thinking(&self) -> bool {
        self.pending.is_some()
    }
    fn cancel(&mut self) {
        self.pending = None;
    }
    fn on_turn(&mut self, engine: &mut dyn GameEngine, seat: Actor) -> Result<bool, ActionError> {
        if engine.turn() != seat || engine.winner().is_some() {
            self.pending = None;
            return Ok(false);
        }
        match engine.phase() {
            Phase::Playing => {}
            // Only reachable when a caller played a wild for this seat without a suit.
            Phase::AwaitingSuitChoice => {
                self.pending = None;
                let suit = engine.hand(seat).dominant_suit();
                return engine.choose_suit(suit).map(|_| true);
            }
            _ => {
                self.pending = None;
                return Ok(false);
            }
        }

        let generation = engine.generation();
        if self.pending.is_some_and(|p| p.generation != generation) {
            log::debug!("dropping move scheduled for an earlier match");
            self.pending = None;
        }

        let now = Instant::now();
        match self.pending {
            None => {
                let delay = choose_delay_ms(&self.profile, &mut self.state);
                if delay > 0 {
                    self.pending =
                        Some(PendingMove { generation, due: now + Duration::from_millis(delay) });
                    return Ok(false);
                }
            }
            Some(p) if now < p.due => return Ok(false),
            Some(_) => {}
        }
        self.pending = None;

        let Some(view) = PolicyView::of(engine, seat) else {
            return Ok(false);
        };
        let decision = OpponentPolicy::decide(&view);
        log::debug!("{seat} bot: {:?} ({})", decision.action, decision.reason);
        decision.action.apply(engine, seat).map(|_| true)
    }
}

fn choose_delay_ms(profile: &BotProfile, state: &mut BotState) -> u64 {
    let min = profile.min_delay_ms;
    let max = profile.max_delay_ms.max(min);
    if max == min {
        min
    } else {
        state.rng.random_range(min..=max)
    }
}
