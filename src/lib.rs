//! eights-rs: Crazy Eights rules engine
//!
//! Goals:
//! - One authoritative state machine for a human vs. computer match
//! - Every command validates before it mutates; rejected commands change nothing
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: play a wild card
//! ```
//! use eights_rs::cards::{Rank, Suit};
//! use eights_rs::config::GameConfig;
//! use eights_rs::game::{Actor, Game, Phase};
//!
//! let mut game = Game::with_config(GameConfig::default().with_seed(7)).unwrap();
//! game.initialize();
//! assert_eq!(game.phase(), Phase::Playing);
//! assert_eq!(game.player_hand().len(), 8);
//!
//! match game.playable_cards(Actor::Player).first() {
//!     Some(&card) if card.rank() == Rank::Eight => {
//!         game.play_card(card, Actor::Player, Some(Suit::Clubs)).unwrap();
//!     }
//!     Some(&card) => {
//!         game.play_card(card, Actor::Player, None).unwrap();
//!     }
//!     None => {
//!         game.draw_card(Actor::Player).unwrap();
//!     }
//! }
//! assert_eq!(game.turn(), Actor::Opponent);
//! ```
//!
//! ## TUI
//! Run the interactive TUI with:
//! ```sh
//! cargo run --bin eights-rs
//! ```

pub mod agents;
pub mod cards;
pub mod config;
pub mod deck;
pub mod engine;
pub mod game;
pub mod hand;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
