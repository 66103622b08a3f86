//! TUI application state and logic

use crate::commands::QUIT_SENTINEL;
use crate::search::Matcher;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::cell::Cell;
use std::io;

/// Most recent queries kept in the history panel
const HISTORY_LIMIT: usize = 20;

/// Application state
pub struct App<'a> {
    pub matcher: Matcher<'a>,
    pub input_buffer: String,
    pub results: Vec<String>,
    pub current_query: Option<QueryInfo>,
    pub history: Vec<HistoryEntry>,
    pub messages: Vec<Message>,
    /// First visible row of the results panel
    pub scroll: usize,
    /// Rows the results took at the last draw, which depends on the panel width
    pub result_rows: Cell<usize>,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub pattern: String,
    pub matches: usize,
}

/// Details of the query whose results are on screen
#[derive(Debug, Clone)]
pub struct QueryInfo {
    pub pattern: String,
    pub length: usize,
    pub wildcards: usize,
    pub matches: usize,
    /// Number of dictionary words of the pattern's length
    pub candidates: usize,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(matcher: Matcher<'a>) -> Self {
        let wildcard = matcher.wildcard();
        let mut app = Self {
            matcher,
            input_buffer: String::new(),
            results: Vec::new(),
            current_query: None,
            history: Vec::new(),
            messages: Vec::new(),
            scroll: 0,
            result_rows: Cell::new(0),
            should_quit: false,
        };

        app.add_message(
            &format!("{} words loaded.", matcher.index().len()),
            MessageStyle::Info,
        );
        app.add_message(
            &format!("Type a pattern with {wildcard} for each missing letter, then Enter."),
            MessageStyle::Info,
        );
        app
    }

    /// Run the query currently in the input buffer
    pub fn submit(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);

        if input == QUIT_SENTINEL {
            self.should_quit = true;
            return;
        }

        match self.matcher.parse(&input) {
            Ok(pattern) => {
                let matches = self.matcher.find_pattern(&pattern);
                let candidates = self
                    .matcher
                    .index()
                    .words_of_length(pattern.len())
                    .map_or(0, |bucket| bucket.len());

                self.results = matches.texts();
                self.scroll = 0;
                // One word per row until the next draw lays them out
                self.result_rows.set(self.results.len());
                self.current_query = Some(QueryInfo {
                    pattern: pattern.text().to_string(),
                    length: pattern.len(),
                    wildcards: pattern.wildcard_count(),
                    matches: matches.len(),
                    candidates,
                });

                self.history.push(HistoryEntry {
                    pattern: pattern.text().to_string(),
                    matches: matches.len(),
                });
                if self.history.len() > HISTORY_LIMIT {
                    self.history.remove(0);
                }

                if matches.is_empty() {
                    self.add_message(
                        &format!("{pattern}: no matching words"),
                        MessageStyle::Error,
                    );
                } else {
                    self.add_message(
                        &format!("{pattern}: {} found", matches.len()),
                        MessageStyle::Success,
                    );
                }
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn scroll_down(&mut self, rows: usize) {
        let max = self.result_rows.get().saturating_sub(1);
        self.scroll = (self.scroll + rows).min(max);
    }

    pub fn scroll_up(&mut self, rows: usize) {
        self.scroll = self.scroll.saturating_sub(rows);
    }

    pub fn clear(&mut self) {
        self.results.clear();
        self.current_query = None;
        self.scroll = 0;
        self.result_rows.set(0);
        self.input_buffer.clear();
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.clear();
                }
                KeyCode::Esc => app.should_quit = true,
                KeyCode::Char(c) => app.input_buffer.push(c),
                KeyCode::Backspace => {
                    app.input_buffer.pop();
                }
                KeyCode::Enter => app.submit(),
                KeyCode::Down => app.scroll_down(1),
                KeyCode::Up => app.scroll_up(1),
                KeyCode::PageDown => app.scroll_down(10),
                KeyCode::PageUp => app.scroll_up(10),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
