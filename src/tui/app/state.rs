use crate::agents::{Action, AgentTable, BotProfile};
use crate::cards::{Card, Rank, Suit};
use crate::config::GameConfig;
use crate::game::{Actor, Game, Phase};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Scene {
    /// Rules and match settings; shown before the first deal.
    Menu,
    Table,
}

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    MenuNext,
    MenuPrev,
    MenuInc,
    MenuDec,
    MenuApply,
    MenuCancel,
    ToggleMenu,
    ToggleHistory,
    ToggleLog,
    HistoryUp,
    HistoryDown,
    NewGame,
    SelectNext,
    SelectPrev,
    SelectCard(usize),
    PlaySelected,
    Draw,
    ChooseSuit(Suit),
}

pub struct AppState {
    pub scene: Scene,
    // Core game engine instance
    pub game: Game,
    pub agents: AgentTable,
    // Cursor into the player's hand
    pub selected: usize,
    // Menu config being edited
    pub menu_index: usize,
    pub cfg_hand_size: usize,
    pub cfg_wild_rank: Rank,
    pub cfg_bot_delay_ms: u64,
    pub bot_delay_ms: u64,
    history_open: bool,
    history_offset: usize,
    log_open: bool,
    log_buffer: Option<Arc<Mutex<Vec<String>>>>,
    action_error: Option<String>,
    action_error_at: Option<Instant>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("scene", &self.scene)
            .field("phase", &self.game.phase())
            .field("agents", &self.agents)
            .field("selected", &self.selected)
            .finish_non_exhaustive()
    }
}

impl Default for AppState {
    fn default() -> Self {
        let default_delay = BotProfile::DEFAULT_DELAY_MS;
        Self {
            scene: Scene::Menu,
            game: Game::new(),
            agents: AgentTable::human_vs_bot(BotProfile::with_delay_ms(default_delay)),
            selected: 0,
            menu_index: 0,
            cfg_hand_size: GameConfig::DEFAULT_HAND_SIZE,
            cfg_wild_rank: Rank::Eight,
            cfg_bot_delay_ms: default_delay,
            bot_delay_ms: default_delay,
            history_open: false,
            history_offset: 0,
            log_open: false,
            log_buffer: None,
            action_error: None,
            action_error_at: None,
        }
    }
}

impl AppState {
    pub const HISTORY_PAGE_SIZE: usize = 20;
    pub const LOG_PAGE_SIZE: usize = 12;
    const ACTION_ERROR_TTL: Duration = Duration::from_secs(3);

    /// Route engine log records into the log panel.
    pub fn attach_log(&mut self, buffer: Arc<Mutex<Vec<String>>>) {
        self.log_buffer = Some(buffer);
    }

    /// Most recent log lines, oldest first.
    pub fn log_lines(&self) -> Vec<String> {
        let Some(buffer) = self.log_buffer.as_ref() else {
            return Vec::new();
        };
        match buffer.lock() {
            Ok(lines) => {
                let skip = lines.len().saturating_sub(Self::LOG_PAGE_SIZE);
                lines[skip..].to_vec()
            }
            Err(_) => Vec::new(),
        }
    }

    fn can_act(&self) -> bool {
        self.scene == Scene::Table
            && self.game.turn() == Actor::Player
            && matches!(self.game.phase(), Phase::Playing | Phase::AwaitingSuitChoice)
    }

    fn queue_action(&mut self, action: Action) -> bool {
        if !self.can_act() {
            return false;
        }
        self.clear_action_error();
        self.agents.receive(Actor::Player, action)
    }

    pub fn selected_card(&self) -> Option<Card> {
        self.game.player_hand().get(self.selected)
    }

    /// Whether the suit picker overlay is up.
    pub fn suit_picker_open(&self) -> bool {
        self.scene == Scene::Table
            && self.game.phase() == Phase::AwaitingSuitChoice
            && self.game.turn() == Actor::Player
    }

    /// Whether the opponent has a move scheduled.
    pub fn opponent_thinking(&self) -> bool {
        self.agents.is_thinking(Actor::Opponent)
    }

    pub fn action_error(&self) -> Option<&str> {
        self.action_error.as_deref()
    }

    fn clear_action_error(&mut self) {
        self.action_error = None;
        self.action_error_at = None;
    }

    pub(crate) fn set_action_error(&mut self, msg: String) {
        self.action_error = Some(msg);
        self.action_error_at = Some(Instant::now());
    }

    pub fn history_open(&self) -> bool {
        self.history_open
    }

    pub fn history_offset(&self) -> usize {
        self.history_offset
    }

    pub fn log_open(&self) -> bool {
        self.log_open
    }

    pub(crate) fn close_overlays(&mut self) {
        self.history_open = false;
        self.log_open = false;
    }

    fn clamp_selection(&mut self) {
        let n = self.game.player_hand().len();
        if n == 0 {
            self.selected = 0;
        } else if self.selected >= n {
            self.selected = n - 1;
        }
    }

    pub fn handle_input(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::ToggleMenu => {
                self.toggle_menu();
                false
            }
            InputAction::ToggleHistory => {
                if self.scene == Scene::Table {
                    self.log_open = false;
                    if !self.history_open {
                        self.history_offset = 0;
                    }
                    self.history_open = !self.history_open;
                }
                false
            }
            InputAction::ToggleLog => {
                if self.scene == Scene::Table {
                    self.history_open = false;
                    self.log_open = !self.log_open;
                }
                false
            }
            InputAction::HistoryUp => {
                if self.scene == Scene::Table && self.history_open {
                    let max_offset =
                        self.game.history_len().saturating_sub(Self::HISTORY_PAGE_SIZE);
                    self.history_offset = (self.history_offset + 1).min(max_offset);
                }
                false
            }
            InputAction::HistoryDown => {
                if self.scene == Scene::Table && self.history_open && self.history_offset > 0 {
                    self.history_offset -= 1;
                }
                false
            }
            InputAction::MenuNext => {
                if self.scene == Scene::Menu {
                    self.menu_next();
                }
                false
            }
            InputAction::MenuPrev => {
                if self.scene == Scene::Menu {
                    self.menu_prev();
                }
                false
            }
            InputAction::MenuInc => {
                if self.scene == Scene::Menu {
                    self.menu_inc();
                }
                false
            }
            InputAction::MenuDec => {
                if self.scene == Scene::Menu {
                    self.menu_dec();
                }
                false
            }
            InputAction::MenuApply => {
                if self.scene == Scene::Menu {
                    self.apply_menu();
                }
                false
            }
            InputAction::MenuCancel => {
                if self.scene == Scene::Menu {
                    self.cancel_menu();
                }
                false
            }
            InputAction::NewGame => {
                if self.scene == Scene::Table {
                    self.new_game();
                }
                false
            }
            InputAction::SelectNext => {
                let n = self.game.player_hand().len();
                if self.scene == Scene::Table && n > 0 {
                    self.selected = (self.selected + 1) % n;
                }
                false
            }
            InputAction::SelectPrev => {
                let n = self.game.player_hand().len();
                if self.scene == Scene::Table && n > 0 {
                    self.selected = (self.selected + n - 1) % n;
                }
                false
            }
            InputAction::SelectCard(idx) => {
                if self.scene == Scene::Table && idx < self.game.player_hand().len() {
                    self.selected = idx;
                }
                false
            }
            InputAction::PlaySelected => {
                if self.game.phase() != Phase::Playing {
                    return false;
                }
                match self.selected_card() {
                    Some(card) => self.queue_action(Action::Play { card, declared: None }),
                    None => false,
                }
            }
            InputAction::Draw => {
                if self.game.phase() != Phase::Playing {
                    return false;
                }
                self.queue_action(Action::Draw)
            }
            InputAction::ChooseSuit(suit) => {
                if !self.suit_picker_open() {
                    return false;
                }
                self.queue_action(Action::ChooseSuit(suit))
            }
        }
    }

    /// Deal a fresh match with the current settings. Any scheduled opponent move
    /// from the previous match is dropped.
    pub fn new_game(&mut self) {
        self.agents.cancel_all();
        self.game.initialize();
        self.selected = 0;
        self.history_offset = 0;
        self.clear_action_error();
    }

    pub fn agents_on_turn(&mut self) {
        if self.scene != Scene::Table {
            return;
        }
        if let Some(at) = self.action_error_at {
            if at.elapsed() >= Self::ACTION_ERROR_TTL {
                self.clear_action_error();
            }
        }
        match self.agents.on_turn(&mut self.game) {
            Ok(true) => self.clear_action_error(),
            Ok(false) => {}
            Err(err) => self.set_action_error(err.to_string()),
        }
        self.clamp_selection();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_ignored_before_turn() {
        let mut app = AppState::default();
        app.apply_menu();
        app.game.draw_card(Actor::Player).unwrap();
        let before = app.game.snapshot();

        assert!(!app.handle_input(InputAction::Draw));
        app.agents_on_turn();

        // Opponent is still thinking, the player's draw was never queued.
        assert_eq!(app.game.player_hand().len(), before.player_hand.len());
    }

    #[test]
    fn rejected_play_surfaces_error() {
        let mut app = AppState::default();
        app.apply_menu();
        app.game.player_hand = "3d".parse().unwrap();
        app.game.current_suit = Some(Suit::Hearts);
        app.game.current_rank = Some(Rank::Seven);
        app.selected = 0;

        assert!(app.handle_input(InputAction::PlaySelected));
        app.agents_on_turn();
        assert!(app.action_error().is_some());
        assert_eq!(app.game.turn(), Actor::Player);
    }
}
