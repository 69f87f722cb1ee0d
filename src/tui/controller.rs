use crate::cards::Suit;
use crate::tui::app::{AppState, InputAction, Scene};
use crate::tui::ui;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

pub fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut AppState,
    tick_rate: Duration,
) -> io::Result<()> {
    let mut last_tick = Instant::now();
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_key(app, key.code) {
                    break;
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.agents_on_turn();
            last_tick = Instant::now();
        }
    }
    Ok(())
}

/// Map a key press to app input. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, code: KeyCode) -> bool {
    if app.suit_picker_open() {
        let suit = match code {
            KeyCode::Char('1') | KeyCode::Char('h') | KeyCode::Char('H') => Some(Suit::Hearts),
            KeyCode::Char('2') | KeyCode::Char('d') | KeyCode::Char('D') => Some(Suit::Diamonds),
            KeyCode::Char('3') | KeyCode::Char('c') | KeyCode::Char('C') => Some(Suit::Clubs),
            KeyCode::Char('4') | KeyCode::Char('s') | KeyCode::Char('S') => Some(Suit::Spades),
            KeyCode::Char('q') | KeyCode::Char('Q') => return true,
            _ => None,
        };
        if let Some(suit) = suit {
            if app.handle_input(InputAction::ChooseSuit(suit)) {
                app.agents_on_turn();
            }
        }
        return false;
    }
    if app.scene == Scene::Table {
        match code {
            KeyCode::Char('h') | KeyCode::Char('H') => {
                let _ = app.handle_input(InputAction::ToggleHistory);
                return false;
            }
            KeyCode::Char('l') | KeyCode::Char('L') => {
                let _ = app.handle_input(InputAction::ToggleLog);
                return false;
            }
            _ => {}
        }
    }
    if app.history_open() {
        match code {
            KeyCode::Up => {
                let _ = app.handle_input(InputAction::HistoryUp);
            }
            KeyCode::Down => {
                let _ = app.handle_input(InputAction::HistoryDown);
            }
            KeyCode::Esc => {
                let _ = app.handle_input(InputAction::ToggleHistory);
            }
            _ => {}
        }
        return false;
    }
    if app.log_open() && matches!(code, KeyCode::Esc) {
        let _ = app.handle_input(InputAction::ToggleLog);
        return false;
    }

    match app.scene {
        Scene::Menu => match code {
            KeyCode::Up => {
                let _ = app.handle_input(InputAction::MenuPrev);
            }
            KeyCode::Down => {
                let _ = app.handle_input(InputAction::MenuNext);
            }
            KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') => {
                let _ = app.handle_input(InputAction::MenuInc);
            }
            KeyCode::Left | KeyCode::Char('-') | KeyCode::Char('_') => {
                let _ = app.handle_input(InputAction::MenuDec);
            }
            KeyCode::Enter => {
                let _ = app.handle_input(InputAction::MenuApply);
            }
            KeyCode::Esc => {
                let _ = app.handle_input(InputAction::MenuCancel);
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => return true,
            _ => {}
        },
        Scene::Table => match code {
            KeyCode::Char('m') | KeyCode::Char('M') => {
                let _ = app.handle_input(InputAction::ToggleMenu);
            }
            KeyCode::Char('n') | KeyCode::Char('N') => {
                let _ = app.handle_input(InputAction::NewGame);
            }
            KeyCode::Left => {
                let _ = app.handle_input(InputAction::SelectPrev);
            }
            KeyCode::Right => {
                let _ = app.handle_input(InputAction::SelectNext);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if app.handle_input(InputAction::PlaySelected) {
                    app.agents_on_turn();
                }
            }
            KeyCode::Char('d') | KeyCode::Char('D') => {
                if app.handle_input(InputAction::Draw) {
                    app.agents_on_turn();
                }
            }
            KeyCode::Char(c) if c.is_ascii_digit() && c != '0' => {
                let idx = (c as u8 - b'1') as usize;
                let _ = app.handle_input(InputAction::SelectCard(idx));
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => return true,
            _ => {}
        },
    }
    false
}
