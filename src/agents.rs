//! Agents: pluggable controllers for the two seats.
//!
//! This module introduces a small trait `PlayerAgent` and a minimal manager
//! `AgentTable` that coordinates which agent controls which seat. It lives in
//! the library so UIs remain thin and do not need to implement opponent
//! scheduling themselves.

use crate::cards::{Card, Suit};
use crate::engine::GameEngine;
use crate::game::{ActionError, Actor, Phase};
use core::fmt;
use std::time::{Duration, Instant};

/// Kinds of agents attached to seats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AgentKind {
    Human,
    Bot,
}

/// Seat-level move intents, produced by a UI for a human or by the opponent policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Action {
    Play { card: Card, declared: Option<Suit> },
    Draw,
    ChooseSuit(Suit),
}

impl Action {
    /// Send this intent to the engine on behalf of `seat`.
    pub fn apply(self, engine: &mut dyn GameEngine, seat: Actor) -> Result<(), ActionError> {
        match self {
            Action::Play { card, declared } => engine.play_card(card, seat, declared).map(|_| ()),
            Action::Draw => engine.draw_card(seat).map(|_| ()),
            Action::ChooseSuit(suit) => engine.choose_suit(suit),
        }
    }
}

/// A seat controller that can act for a side when it is their turn.
pub trait PlayerAgent {
    /// Called when `seat` holds the turn. Implementations may throttle internally.
    fn on_turn(&mut self, engine: &mut dyn GameEngine, seat: Actor) -> Result<bool, ActionError>;
    /// The kind of this agent (human, bot, etc.).
    fn kind(&self) -> AgentKind {
        AgentKind::Human
    }
    /// Optionally receive a seat-intent action; default is to ignore and return false.
    fn receive(&mut self, _action: Action) -> bool {
        false
    }
    /// Whether a move is scheduled but has not fired yet.
    fn is_thinking(&self) -> bool {
        false
    }
    /// Drop any queued or scheduled move.
    fn cancel(&mut self) {}
}

mod bots;

pub use bots::{BotAgent, BotDecision, BotProfile, OpponentPolicy, PendingMove, PolicyView};

/// A simple agent that executes user-intended actions when it's their turn.
pub struct HumanAgent {
    pending: Option<Action>,
}

impl HumanAgent {
    pub fn new() -> Self {
        Self { pending: None }
    }
}

impl Default for HumanAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerAgent for HumanAgent {
    fn kind(&self) -> AgentKind {
        AgentKind::Human
    }
    fn receive(&mut self, action: Action) -> bool {
        if self.pending.is_some() {
            return false;
        }
        self.pending = Some(action);
        true
    }
    fn on_turn(&mut self, engine: &mut dyn GameEngine, seat: Actor) -> Result<bool, ActionError> {
        if matches!(engine.phase(), Phase::GameOver | Phase::Rules) {
            self.pending = None;
            return Ok(false);
        }
        if engine.turn() != seat {
            return Ok(false);
        }
        if let Some(act) = self.pending.take() {
            return act.apply(engine, seat).map(|_| true);
        }
        Ok(false)
    }
    fn cancel(&mut self) {
        self.pending = None;
    }
}

/// Holds the agent for each seat and drives the one whose turn it is.
pub struct AgentTable {
    seats: [Option<Box<dyn PlayerAgent>>; 2],
    min_action_delay: Duration,
    next_action_at: Option<Instant>,
}

impl fmt::Debug for AgentTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flags: String = self
            .seats
            .iter()
            .map(|a| match a.as_deref().map(|ag| ag.kind()) {
                Some(AgentKind::Bot) => 'B',
                Some(AgentKind::Human) => 'H',
                None => '-',
            })
            .collect();
        write!(f, "AgentTable({flags})")
    }
}

impl Default for AgentTable {
    fn default() -> Self {
        Self::new()
    }
}

impl AgentTable {
    /// Create a table with both seats empty.
    pub fn new() -> Self {
        Self { seats: [None, None], min_action_delay: Duration::from_millis(0), next_action_at: None }
    }

    /// Human at the player seat, bot with `profile` at the opponent seat.
    pub fn human_vs_bot(profile: BotProfile) -> Self {
        let mut table = Self::new();
        table.set_agent(Actor::Player, Some(Box::new(HumanAgent::new())));
        table.set_agent(Actor::Opponent, Some(Box::new(BotAgent::new(profile))));
        table
    }

    /// Assign an agent to a seat (or remove when `None`).
    pub fn set_agent(&mut self, seat: Actor, agent: Option<Box<dyn PlayerAgent>>) {
        self.seats[seat.index()] = agent;
    }

    /// Get immutable access to an agent for inspection.
    pub fn agent(&self, seat: Actor) -> Option<&dyn PlayerAgent> {
        self.seats[seat.index()].as_deref()
    }

    /// Return the kind of agent at a seat, if any.
    pub fn agent_kind(&self, seat: Actor) -> Option<AgentKind> {
        self.agent(seat).map(|ag| ag.kind())
    }

    /// Send an action intent to a specific seat agent, if any.
    pub fn receive(&mut self, seat: Actor, action: Action) -> bool {
        match self.seats[seat.index()].as_mut() {
            Some(agent) => agent.receive(action),
            None => false,
        }
    }

    /// Whether the agent at `seat` has a move scheduled.
    pub fn is_thinking(&self, seat: Actor) -> bool {
        self.agent(seat).is_some_and(|ag| ag.is_thinking())
    }

    /// Set a global minimum delay between any actions at the table.
    pub fn set_min_action_delay_ms(&mut self, delay_ms: u64) {
        self.min_action_delay = Duration::from_millis(delay_ms);
    }

    /// Drive the agent assigned to the seat holding the turn, if any.
    pub fn on_turn(&mut self, engine: &mut dyn GameEngine) -> Result<bool, ActionError> {
        let seat = engine.turn();
        if let Some(agent) = self.seats[seat.index()].as_mut() {
            let is_bot = matches!(agent.kind(), AgentKind::Bot);
            let now = Instant::now();
            if is_bot {
                if let Some(next) = self.next_action_at {
                    if now < next {
                        return Ok(false);
                    }
                }
            }
            let acted = agent.on_turn(engine, seat)?;
            if acted && self.min_action_delay > Duration::from_millis(0) {
                self.next_action_at = Some(now + self.min_action_delay);
            }
            return Ok(acted);
        }
        Ok(false)
    }

    /// Drop queued intents and scheduled moves on both seats.
    pub fn cancel_all(&mut self) {
        for agent in self.seats.iter_mut().flatten() {
            agent.cancel();
        }
        self.next_action_at = None;
    }
}
