//! TUI rendering with ratatui
//!
//! Layout for the wildcard search interface.

use super::app::{App, MessageStyle};
use crate::output::formatters::format_columns;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(65), // Results
            Constraint::Percentage(35), // Info panel
        ])
        .split(chunks[1]);

    render_results(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔎 WORD WILDCARD - Dictionary Search")
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

fn render_results(f: &mut Frame, app: &App, area: Rect) {
    let title = match &app.current_query {
        Some(info) => format!(" {}: {} matches ", info.pattern, info.matches),
        None => " Results ".to_string(),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    // Inner width minus borders
    let width = area.width.saturating_sub(2) as usize;
    let lines = format_columns(&app.results, width);
    app.result_rows.set(lines.len());

    let content: Vec<Line> = if app.current_query.is_some() && lines.is_empty() {
        vec![Line::from(Span::styled(
            "No matching words in the dictionary",
            Style::default().fg(Color::Yellow),
        ))]
    } else {
        // Scroll is counted in rows, clamped to the last one
        let skip = app.scroll.min(lines.len().saturating_sub(1));
        lines
            .into_iter()
            .skip(skip)
            .map(|line| Line::from(Span::styled(line, Style::default().fg(Color::White))))
            .collect()
    };

    f.render_widget(Paragraph::new(content).block(block), area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Selectivity gauge
            Constraint::Length(6),      // Query details
            Constraint::Percentage(50), // History
            Constraint::Percentage(50), // Messages
        ])
        .split(area);

    render_selectivity(f, app, chunks[0]);
    render_query_details(f, app, chunks[1]);
    render_history(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
}

fn render_selectivity(f: &mut Frame, app: &App, area: Rect) {
    let (percent, label) = match &app.current_query {
        Some(info) if info.candidates > 0 => (
            (info.matches * 100 / info.candidates) as u16,
            format!("{}/{} words of length {}", info.matches, info.candidates, info.length),
        ),
        Some(info) => (0, format!("no words of length {}", info.length)),
        None => (0, "no query yet".to_string()),
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Selectivity ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent.min(100))
        .label(label);

    f.render_widget(gauge, area);
}

fn render_query_details(f: &mut Frame, app: &App, area: Rect) {
    let content = match &app.current_query {
        Some(info) => vec![
            Line::from(vec![
                Span::raw("Pattern:   "),
                Span::styled(
                    info.pattern.clone(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(format!("Length:    {}", info.length)),
            Line::from(format!("Wildcards: {}", info.wildcards)),
            Line::from(format!("Matches:   {}", info.matches)),
        ],
        None => vec![Line::from("Enter a pattern below")],
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Query ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let history_items: Vec<ListItem> = app
        .history
        .iter()
        .rev()
        .map(|entry| ListItem::new(format!("{:<12} {:>6}", entry.pattern, entry.matches)))
        .collect();

    let history =
        List::new(history_items).block(Block::default().title(" History ").borders(Borders::ALL));

    f.render_widget(history, area);
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
    let title = format!(
        " Pattern ({} = any letter) | Enter: search | q + Enter or Esc: quit ",
        app.matcher.wildcard()
    );

    let input = Paragraph::new(app.input_buffer.as_str())
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Yellow)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(area);

    let index = app.matcher.index();
    let words = Paragraph::new(format!("Dictionary: {} words", index.len()))
        .alignment(Alignment::Center);
    f.render_widget(words, chunks[0]);

    let lengths = index.lengths();
    let range = match (lengths.first(), lengths.last()) {
        (Some(min), Some(max)) => format!("Lengths: {min}–{max}"),
        _ => "Lengths: none".to_string(),
    };
    f.render_widget(Paragraph::new(range).alignment(Alignment::Center), chunks[1]);

    let help = Paragraph::new("↑/↓ PgUp/PgDn: scroll | Ctrl-L: clear")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
