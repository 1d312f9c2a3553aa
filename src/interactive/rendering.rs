//! TUI rendering with ratatui
//!
//! Board, word list and round summary views.

use super::app::{App, InputMode, MessageStyle};
use crate::core::Path;
use crate::output::formatters::format_word_set;
use crate::round::{WordSet, points_for_length};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎲 BOGGLE ENGINE - Practice Board")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    render_board(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn tile_style(path: Option<&Path>, pos: usize) -> Style {
    match path.and_then(|p| p.step_of(pos)) {
        Some(0) => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Some(_) => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        None => Style::default().fg(Color::White),
    }
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let grid = app.grid();
    let path = app.live_path();

    let mut lines = vec![Line::from("")];
    for (row, tiles) in grid.rows().enumerate() {
        let spans: Vec<Span> = tiles
            .iter()
            .enumerate()
            .flat_map(|(col, tile)| {
                let pos = row * grid.dim() + col;
                [
                    Span::styled(format!(" {tile:<2} "), tile_style(path.as_ref(), pos)),
                    Span::raw(" "),
                ]
            })
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let title = match (&path, app.input_buffer.is_empty()) {
        (_, true) => " Board ".to_string(),
        (Some(_), false) => format!(" Board - {} traced ", app.input_buffer),
        (None, false) => format!(" Board - {} not found ", app.input_buffer),
    };

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    match (&app.input_mode, &app.last_result) {
        (InputMode::RoundOver, Some(result)) => {
            let section = |label: &str, words: &WordSet, color: Color| {
                Line::from(vec![
                    Span::styled(format!("{label:<18}"), Style::default().fg(Color::DarkGray)),
                    Span::styled(format_word_set(words), Style::default().fg(color)),
                ])
            };

            let content = vec![
                Line::from(vec![
                    Span::raw("Round score: "),
                    Span::styled(
                        format!("+{}", result.score()),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(""),
                section("Scored", result.scored(), Color::Green),
                section("Not on board", result.not_on_board(), Color::Red),
                section("Not in dictionary", result.not_in_dictionary(), Color::Yellow),
            ];

            let paragraph = Paragraph::new(content)
                .block(
                    Block::default()
                        .title(" Round Results ")
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded),
                )
                .wrap(Wrap { trim: false });
            f.render_widget(paragraph, area);
        }
        _ => render_word_list(f, app, area),
    }
}

fn render_word_list(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .found
        .iter()
        .rev()
        .map(|found| {
            let (marker, style) = match (found.on_board, found.in_dictionary) {
                (true, true) => ("✓", Style::default().fg(Color::Green)),
                (true, false) => ("?", Style::default().fg(Color::Yellow)),
                (false, _) => ("✗", Style::default().fg(Color::Red)),
            };
            let points = found.potential_points();
            ListItem::new(format!("{marker} {:<16} {points:>2}", found.word)).style(style)
        })
        .collect();

    let title = format!(" Your Words ({}) ", app.found.len());
    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(list, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::RoundOver => (
            " Round over | 'n' new board, 't' teach rejected, 'q' quit ",
            String::new(),
            Color::Green,
        ),
        InputMode::Typing => {
            let len = app.input_buffer.chars().count();
            let hint = if len == 0 {
                String::new()
            } else {
                format!("  ({} pt)", points_for_length(len))
            };
            (
                " Type a word | Enter to add, TAB to finish round ",
                format!("{}{hint}", app.input_buffer),
                Color::Yellow,
            )
        }
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let round = Paragraph::new(format!("Round: {}", app.session.round_number()))
        .alignment(Alignment::Center);
    f.render_widget(round, chunks[0]);

    let pending = Paragraph::new(format!("This round: {} pts", app.round_points()))
        .alignment(Alignment::Center);
    f.render_widget(pending, chunks[1]);

    let total =
        Paragraph::new(format!("Total: {} pts", app.total_score())).alignment(Alignment::Center);
    f.render_widget(total, chunks[2]);

    let help = Paragraph::new("ESC: Quit | Enter: Add | TAB: Finish")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
