use crate::agents::{AgentTable, BotProfile};
use crate::config::{GameConfig, MAX_HAND_SIZE};
use crate::game::{Game, Phase};

use super::AppState;

#[derive(Debug, Clone, Copy)]
enum MenuItem {
    HandSize,
    WildRank,
    BotDelayMs,
}

const MENU_ITEMS: [MenuItem; 3] = [MenuItem::HandSize, MenuItem::WildRank, MenuItem::BotDelayMs];

impl MenuItem {
    fn display(self, app: &AppState) -> String {
        match self {
            MenuItem::HandSize => format!("Hand Size: {}", app.cfg_hand_size),
            MenuItem::WildRank => format!("Wild Rank: {}", app.cfg_wild_rank),
            MenuItem::BotDelayMs => format!("Opponent Delay (ms): {}", app.cfg_bot_delay_ms),
        }
    }

    fn inc(self, app: &mut AppState) {
        match self {
            MenuItem::HandSize => {
                if app.cfg_hand_size < MAX_HAND_SIZE {
                    app.cfg_hand_size += 1;
                }
            }
            MenuItem::WildRank => {
                app.cfg_wild_rank = app.cfg_wild_rank.next();
            }
            MenuItem::BotDelayMs => {
                app.cfg_bot_delay_ms = app.cfg_bot_delay_ms.saturating_add(100);
            }
        }
    }

    fn dec(self, app: &mut AppState) {
        match self {
            MenuItem::HandSize => {
                if app.cfg_hand_size > 1 {
                    app.cfg_hand_size -= 1;
                }
            }
            MenuItem::WildRank => {
                app.cfg_wild_rank = app.cfg_wild_rank.prev();
            }
            MenuItem::BotDelayMs => {
                app.cfg_bot_delay_ms = app.cfg_bot_delay_ms.saturating_sub(100);
            }
        }
    }
}

impl AppState {
    pub fn menu_items_display(&self) -> Vec<String> {
        MENU_ITEMS.iter().map(|item| item.display(self)).collect()
    }

    /// Whether a match has been dealt, so the table has something to show.
    pub fn match_started(&self) -> bool {
        self.game.phase() != Phase::Rules
    }

    pub fn toggle_menu(&mut self) {
        self.close_overlays();
        match self.scene {
            super::Scene::Menu => self.cancel_menu(),
            _ => self.open_menu(),
        }
    }

    // --- Menu operations ---
    pub fn open_menu(&mut self) {
        self.close_overlays();
        self.menu_index = 0;
        self.cfg_hand_size = self.game.config().hand_size;
        self.cfg_wild_rank = self.game.wild_rank();
        self.cfg_bot_delay_ms = self.bot_delay_ms;
        self.scene = super::Scene::Menu;
    }

    /// Rebuild the engine and agents from the edited settings and deal a match.
    pub fn apply_menu(&mut self) {
        let config = GameConfig::default()
            .with_hand_size(self.cfg_hand_size)
            .with_wild_rank(self.cfg_wild_rank);
        let game = match Game::with_config(config) {
            Ok(g) => g,
            Err(err) => {
                self.set_action_error(err.to_string());
                return;
            }
        };

        self.bot_delay_ms = self.cfg_bot_delay_ms;
        self.game = game;
        self.agents = AgentTable::human_vs_bot(BotProfile::with_delay_ms(self.bot_delay_ms));
        self.agents.set_min_action_delay_ms(150);
        self.scene = super::Scene::Table;
        self.new_game();
    }

    /// Leave the menu without applying; only possible once a match exists.
    pub fn cancel_menu(&mut self) {
        if self.match_started() {
            self.scene = super::Scene::Table;
        }
    }

    pub fn menu_next(&mut self) {
        self.menu_index = (self.menu_index + 1) % MENU_ITEMS.len();
    }
    pub fn menu_prev(&mut self) {
        self.menu_index = (self.menu_index + MENU_ITEMS.len() - 1) % MENU_ITEMS.len();
    }
    pub fn menu_inc(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.inc(self);
    }
    pub fn menu_dec(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.dec(self);
    }
}
