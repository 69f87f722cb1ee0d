use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use eights_rs::tui::{app::AppState, controller, logger::TuiLogger};
use log::LevelFilter;
use ratatui::prelude::*;
use std::io::{self, IsTerminal, Stdout};
use std::time::Duration;

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), crossterm::terminal::LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn main() -> io::Result<()> {
    if !io::stdout().is_terminal() {
        println!(
            "eights-rs TUI requires a real terminal (TTY).\nRun in Terminal and press q to quit. Version: {}",
            eights_rs::VERSION
        );
        return Ok(());
    }

    let mut app = AppState::default();
    match TuiLogger::install(LevelFilter::Debug) {
        Ok(buffer) => app.attach_log(buffer),
        Err(err) => eprintln!("log panel disabled: {err}"),
    }

    let mut terminal = setup_terminal()?;
    let tick_rate = Duration::from_millis(100);

    let res = controller::run(&mut terminal, &mut app, tick_rate);

    // Always attempt to restore terminal
    restore_terminal(terminal)?;
    res
}
