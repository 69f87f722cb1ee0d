use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, inner};

pub(super) fn draw_menu(f: &mut Frame, app: &AppState) {
    let size = f.area();
    let area = centered_rect(80, 90, size);
    let block = Block::default().title("eights-rs").borders(Borders::ALL);
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    let inner_all = inner(area);

    let logo = r#"
  _____ _       _     _
 | ____(_) __ _| |__ | |_ ___
 |  _| | |/ _` | '_ \| __/ __|
 | |___| | (_| | | | | |_\__ \
 |_____|_|\__, |_| |_|\__|___/
          |___/                "#;

    let logo_lines: Vec<Line> = logo
        .lines()
        .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(Color::Magenta))))
        .collect();

    let wild = app.cfg_wild_rank;
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let rules: Vec<Line> = vec![
        Line::from(Span::styled("Goal", bold)),
        Line::from("Be the first to empty your hand."),
        Line::from(Span::styled("Deal", bold)),
        Line::from(format!(
            "52 cards. You and the opponent get {} cards each; one card starts the discard pile.",
            app.cfg_hand_size
        )),
        Line::from(Span::styled("Play", bold)),
        Line::from("Match the top discard by suit or by rank."),
        Line::from(format!("Every {wild} is wild: play it any time, then name the next suit.")),
        Line::from(Span::styled("Draw", bold)),
        Line::from("Draw one card instead of playing; that ends your turn."),
        Line::from("If the draw pile is empty, your turn is skipped."),
    ];

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(logo_lines.len() as u16 + 1),
            Constraint::Length(rules.len() as u16 + 1),
            Constraint::Min(3),
        ])
        .split(inner_all);

    let logo_para =
        Paragraph::new(logo_lines).wrap(Wrap { trim: false }).alignment(Alignment::Center);
    f.render_widget(logo_para, rows[0]);
    f.render_widget(Paragraph::new(rules).wrap(Wrap { trim: true }), rows[1]);

    // Configuration section (centered text)
    let config_items = app.menu_items_display();
    let hint = if app.match_started() {
        "[Enter] New match  [Esc] Back  [Q] Quit  [↑/↓] Move  [←/→] Adjust"
    } else {
        "[Enter] Start  [Q] Quit  [↑/↓] Move  [←/→] Adjust"
    };
    let mut cfg_lines: Vec<Line> = Vec::new();
    cfg_lines.push(Line::from(Span::styled("Settings:", bold)));
    for (i, it) in config_items.iter().enumerate() {
        let style = if i == app.menu_index {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        cfg_lines.push(Line::from(Span::styled(it.clone(), style)));
    }
    cfg_lines.push(Line::from(""));
    cfg_lines.push(Line::from(Span::styled(hint, Style::default().add_modifier(Modifier::DIM))));
    if let Some(err) = app.action_error() {
        cfg_lines.push(Line::from(Span::styled(err.to_string(), Style::default().fg(Color::Red))));
    }
    let cfg_para = Paragraph::new(cfg_lines).wrap(Wrap { trim: true }).alignment(Alignment::Center);
    f.render_widget(cfg_para, rows[2]);
}
