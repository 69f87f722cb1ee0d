use crate::cards::{Card, Suit};
use crate::game::{Actor, MoveRecord, MoveVerb, Phase};
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, inner};

const CARD_WIDTH: u16 = 6;
const CARD_HEIGHT: u16 = 3;

pub(super) fn draw_table(f: &mut Frame, app: &AppState) {
    let size = f.area();
    let header_height: u16 = 1 + 2;
    let status_height: u16 = 2 + 2; // content + borders

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height),   // header
            Constraint::Length(CARD_HEIGHT + 2), // opponent
            Constraint::Length(CARD_HEIGHT + 2), // deck + discard
            Constraint::Min(CARD_HEIGHT + 2),    // player hand
            Constraint::Length(status_height),   // status bar
        ])
        .split(size);

    let header_line = if let Some(winner) = app.game.winner() {
        Line::from(Span::styled(
            format!("{winner} won the match"),
            Style::default().add_modifier(Modifier::BOLD),
        ))
    } else if app.opponent_thinking() {
        Line::from(Span::styled(
            "Opponent is thinking...",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::ITALIC),
        ))
    } else {
        let who = match app.game.turn() {
            Actor::Player => "Your turn",
            Actor::Opponent => "Opponent's turn",
        };
        Line::from(format!("{who}   Wild: {}s", app.game.wild_rank()))
    };
    let header =
        Paragraph::new(header_line).block(Block::default().title("eights-rs").borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    draw_opponent(f, chunks[1], app);
    draw_piles(f, chunks[2], app);
    draw_player_hand(f, chunks[3], app);
    draw_status(f, chunks[4], app);

    if app.suit_picker_open() {
        draw_suit_picker(f, size);
    } else if app.game.is_over() {
        draw_game_over(f, size, app);
    }
    if app.history_open() {
        draw_history(f, size, app);
    } else if app.log_open() {
        draw_log(f, size, app);
    }
}

fn draw_opponent(f: &mut Frame, area: Rect, app: &AppState) {
    let n = app.game.opponent_hand().len();
    let border = if app.game.turn() == Actor::Opponent && !app.game.is_over() {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let block =
        Block::default().title(format!("Opponent ({n})")).borders(Borders::ALL).border_style(border);
    let area_inner = inner(area);
    f.render_widget(block, area);
    for (i, slot) in card_slots(area_inner, n).into_iter().enumerate() {
        if i + 1 == slot_capacity(area_inner) && n > slot_capacity(area_inner) {
            let more = Paragraph::new(format!("+{}", n - i)).alignment(Alignment::Center);
            f.render_widget(more, slot);
            break;
        }
        render_card_back(f, slot);
    }
}

fn draw_piles(f: &mut Frame, area: Rect, app: &AppState) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let deck_len = app.game.deck().len();
    let deck_block = Block::default().title(format!("Deck ({deck_len})")).borders(Borders::ALL);
    let deck_inner = inner(cols[0]);
    f.render_widget(deck_block, cols[0]);
    if let Some(slot) = card_slots(deck_inner, 1).into_iter().next() {
        if deck_len > 0 {
            render_card_back(f, slot);
        } else {
            render_card_widget(f, slot, None, Some(Color::DarkGray));
        }
    }

    let suit_label = match app.game.current_suit() {
        Some(s) => {
            let (glyph, _) = suit_glyph_and_style(s);
            format!("{glyph} {}", s.name())
        }
        None => "any".to_string(),
    };
    let discard_block =
        Block::default().title(format!("Discard  Suit: {suit_label}")).borders(Borders::ALL);
    let discard_inner = inner(cols[1]);
    f.render_widget(discard_block, cols[1]);
    if let Some(slot) = card_slots(discard_inner, 1).into_iter().next() {
        render_card_widget(f, slot, app.game.top_discard(), Some(Color::Cyan));
    }
}

fn draw_player_hand(f: &mut Frame, area: Rect, app: &AppState) {
    let hand = app.game.player_hand().as_slice();
    let your_turn = app.game.turn() == Actor::Player && app.game.phase() == Phase::Playing;
    let border = if your_turn { Style::default().fg(Color::Yellow) } else { Style::default() };
    let block = Block::default()
        .title(format!("Your hand ({})", hand.len()))
        .borders(Borders::ALL)
        .border_style(border);
    let area_inner = inner(area);
    f.render_widget(block, area);

    // Keep the selection on screen when the hand is wider than the panel.
    let cap = slot_capacity(area_inner).max(1);
    let start = app.selected.saturating_sub(cap - 1).min(hand.len().saturating_sub(cap));
    let visible = &hand[start.min(hand.len())..];
    for (offset, slot) in card_slots(area_inner, visible.len()).into_iter().enumerate() {
        let idx = start + offset;
        let card = visible[offset];
        let color = if idx == app.selected && your_turn {
            Some(Color::Yellow)
        } else if your_turn && app.game.is_playable(card) {
            Some(Color::Green)
        } else {
            None
        };
        render_card_widget(f, slot, Some(card), color);
    }
}

fn draw_status(f: &mut Frame, area: Rect, app: &AppState) {
    f.render_widget(Block::default().borders(Borders::ALL).title("Status"), area);
    let status_inner = inner(area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(status_inner);

    let mut left_info = match app.game.phase() {
        Phase::GameOver => vec![Line::from("Match over. Press N for a new game.")],
        Phase::AwaitingSuitChoice => vec![Line::from("Wild played. Choose the next suit.")],
        _ => match app.selected_card() {
            Some(card) if app.game.turn() == Actor::Player => {
                let hint = if app.game.is_playable(card) { "playable" } else { "no match" };
                vec![Line::from(format!("Selected: {}  ({hint})", short_card(card)))]
            }
            _ => vec![Line::from("Waiting for the opponent.")],
        },
    };
    if let Some(err) = app.action_error() {
        left_info.push(Line::from(Span::styled(
            format!("Error: {err}"),
            Style::default().fg(Color::Red),
        )));
    }
    f.render_widget(Paragraph::new(left_info).wrap(Wrap { trim: true }), cols[0]);

    let keys = vec![
        Line::from("[←/→|1-9] Select  [Enter] Play  [D] Draw"),
        Line::from("[N] New  [M] Menu  [H] History  [L] Log  [Q] Quit"),
    ];
    let keys_para = Paragraph::new(keys)
        .style(Style::default().add_modifier(Modifier::DIM))
        .alignment(Alignment::Right);
    f.render_widget(keys_para, cols[1]);
}

fn draw_suit_picker(f: &mut Frame, size: Rect) {
    let area = centered_rect(40, 30, size);
    f.render_widget(Clear, area);
    let mut lines = vec![Line::from("Declare the next suit:"), Line::from("")];
    for (i, s) in Suit::ALL.iter().enumerate() {
        let (glyph, style) = suit_glyph_and_style(*s);
        lines.push(Line::from(vec![
            Span::raw(format!("[{}] ", i + 1)),
            Span::styled(format!("{glyph} {}", s.name()), style),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("[Q] Quit", Style::default().add_modifier(Modifier::DIM))));
    let para = Paragraph::new(lines)
        .block(Block::default().title("Wild").borders(Borders::ALL))
        .alignment(Alignment::Center);
    f.render_widget(para, area);
}

fn draw_game_over(f: &mut Frame, size: Rect, app: &AppState) {
    let area = centered_rect(50, 30, size);
    f.render_widget(Clear, area);
    let (headline, color) = match app.game.winner() {
        Some(Actor::Player) => ("You win!", Color::Green),
        _ => ("The opponent wins.", Color::Red),
    };
    let lines = vec![
        Line::from(Span::styled(headline, Style::default().fg(color).add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from(format!(
            "Cards left: you {}, opponent {}",
            app.game.player_hand().len(),
            app.game.opponent_hand().len()
        )),
        Line::from(""),
        Line::from("[N] New game  [M] Menu  [Q] Quit"),
    ];
    let para = Paragraph::new(lines)
        .block(Block::default().title("Game over").borders(Borders::ALL))
        .alignment(Alignment::Center);
    f.render_widget(para, area);
}

fn draw_history(f: &mut Frame, size: Rect, app: &AppState) {
    let area = centered_rect(60, 70, size);
    f.render_widget(Clear, area);
    let history = app.game.history();
    let end = history.len().saturating_sub(app.history_offset());
    let start = end.saturating_sub(AppState::HISTORY_PAGE_SIZE);
    let mut lines: Vec<Line> =
        history[start..end].iter().enumerate().map(|(i, m)| history_line(start + i + 1, m)).collect();
    if lines.is_empty() {
        lines.push(Line::from("No moves yet."));
    }
    let para = Paragraph::new(lines)
        .block(Block::default().title("History  [↑/↓] Scroll  [Esc] Close").borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    f.render_widget(para, area);
}

fn history_line(n: usize, m: &MoveRecord) -> Line<'static> {
    let mut spans = vec![Span::raw(format!("{n:>3}. {:<8} {:<7}", m.actor.label(), m.verb.label()))];
    // Opponent draws stay hidden.
    let hide_card = m.verb == MoveVerb::Draw && m.actor == Actor::Opponent;
    if let Some(card) = m.card.filter(|_| !hide_card) {
        let (_, style) = suit_glyph_and_style(card.suit());
        spans.push(Span::styled(short_card(card), style));
    }
    if let Some(s) = m.suit {
        let (glyph, style) = suit_glyph_and_style(s);
        spans.push(Span::styled(format!(" -> {glyph}"), style));
    }
    Line::from(spans)
}

fn draw_log(f: &mut Frame, size: Rect, app: &AppState) {
    let area = centered_rect(70, 50, size);
    f.render_widget(Clear, area);
    let lines: Vec<Line> = app.log_lines().into_iter().map(Line::from).collect();
    let para = Paragraph::new(lines)
        .block(Block::default().title("Log  [Esc] Close").borders(Borders::ALL))
        .wrap(Wrap { trim: false });
    f.render_widget(para, area);
}

fn slot_capacity(area: Rect) -> usize {
    (area.width / CARD_WIDTH) as usize
}

fn card_slots(area: Rect, n: usize) -> Vec<Rect> {
    let n = n.min(slot_capacity(area));
    (0..n as u16)
        .map(|i| Rect {
            x: area.x + i * CARD_WIDTH,
            y: area.y,
            width: CARD_WIDTH,
            height: CARD_HEIGHT.min(area.height),
        })
        .collect()
}

fn suit_glyph_and_style(s: Suit) -> (char, Style) {
    let glyph = match s {
        Suit::Hearts => '♥',
        Suit::Diamonds => '♦',
        Suit::Clubs => '♣',
        Suit::Spades => '♠',
    };
    let color = if s.is_red() { Color::Red } else { Color::White };
    (glyph, Style::default().fg(color))
}

fn render_card_widget(f: &mut Frame, area: Rect, card: Option<Card>, border: Option<Color>) {
    let mut block = Block::default().borders(Borders::ALL);
    if let Some(color) = border {
        block = block.border_style(Style::default().fg(color));
    }
    let inner = inner(area);
    f.render_widget(block, area);
    let content = if let Some(c) = card {
        let (_, style) = suit_glyph_and_style(c.suit());
        Line::from(Span::styled(short_card(c), style))
    } else {
        Line::from("  ")
    };
    f.render_widget(Paragraph::new(content).alignment(Alignment::Center), inner);
}

fn render_card_back(f: &mut Frame, area: Rect) {
    let block = Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::Blue));
    let inner = inner(area);
    f.render_widget(block, area);
    let back = Paragraph::new(Span::styled("▒▒", Style::default().fg(Color::Blue)))
        .alignment(Alignment::Center);
    f.render_widget(back, inner);
}

fn short_card(c: Card) -> String {
    let (sg, _) = suit_glyph_and_style(c.suit());
    format!("{}{}", c.rank().label(), sg)
}
