//! TUI application state and logic

use crate::core::{Grid, Path};
use crate::dictionary::{Dictionary, normalize};
use crate::round::{PlayerId, PlayerResult, Session, SubmitOutcome, word_points};
use crate::solver::{find_path, is_on_board};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub session: Session,
    pub player: PlayerId,
    pub input_buffer: String,
    pub found: Vec<FoundWord>,
    pub messages: Vec<Message>,
    pub last_result: Option<PlayerResult>,
    pub input_mode: InputMode,
    pub should_quit: bool,
    rng: StdRng,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Typing,
    RoundOver,
}

/// A word entered during the current round
#[derive(Debug, Clone)]
pub struct FoundWord {
    pub word: String,
    pub on_board: bool,
    pub in_dictionary: bool,
}

impl FoundWord {
    /// Points the word earns if it survives resolution
    #[must_use]
    pub fn potential_points(&self) -> u32 {
        if self.on_board && self.in_dictionary {
            word_points(&self.word)
        } else {
            0
        }
    }
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    #[must_use]
    pub fn new(dictionary: Dictionary, seed: u64) -> Self {
        let player = PlayerId::from("you");
        let mut session = Session::new(dictionary);
        session.join(player.clone());

        let mut app = Self {
            session,
            player,
            input_buffer: String::new(),
            found: Vec::new(),
            messages: Vec::new(),
            last_result: None,
            input_mode: InputMode::Typing,
            should_quit: false,
            rng: StdRng::seed_from_u64(seed),
        };
        app.new_round();
        app
    }

    /// The board for the current round
    ///
    /// # Panics
    /// Will not panic - a round is started on construction.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        self.session.grid().expect("a round is always in progress")
    }

    /// Path of the word being typed, for live highlighting
    #[must_use]
    pub fn live_path(&self) -> Option<Path> {
        find_path(self.grid(), &self.input_buffer).ok().flatten()
    }

    #[must_use]
    pub fn round_points(&self) -> u32 {
        self.found.iter().map(FoundWord::potential_points).sum()
    }

    #[must_use]
    pub fn total_score(&self) -> u32 {
        self.session.scores().get(&self.player).copied().unwrap_or(0)
    }

    pub fn new_round(&mut self) {
        self.session.roll(&mut self.rng);
        self.found.clear();
        self.input_buffer.clear();
        self.last_result = None;
        self.input_mode = InputMode::Typing;
        let round = self.session.round_number();
        self.add_message(
            &format!("Round {round} - type words, Enter to add, Tab to finish"),
            MessageStyle::Info,
        );
    }

    /// Add the typed word to this round's list
    pub fn add_word(&mut self) {
        let word = normalize(&self.input_buffer);
        self.input_buffer.clear();

        if word.is_empty() {
            return;
        }
        if self.found.iter().any(|f| f.word == word) {
            self.add_message(&format!("{word} is already on your list"), MessageStyle::Error);
            return;
        }

        let on_board = is_on_board(self.grid(), &word);
        let in_dictionary = self.session.dictionary().contains(&word);

        let (text, style) = match (on_board, in_dictionary) {
            (true, true) => (format!("{word} added"), MessageStyle::Success),
            (false, _) => (format!("{word} is not on the board"), MessageStyle::Error),
            (true, false) => (format!("{word} is not in the dictionary"), MessageStyle::Error),
        };
        self.add_message(&text, style);

        self.found.push(FoundWord {
            word,
            on_board,
            in_dictionary,
        });
    }

    /// Submit this round's words and bank the score
    pub fn finish_round(&mut self) {
        let words: Vec<&str> = self.found.iter().map(|f| f.word.as_str()).collect();
        match self.session.submit(&self.player, words) {
            SubmitOutcome::RoundComplete(mut results) => {
                self.session.confirm();
                let result = results.pop();
                if let Some(ref result) = result {
                    self.add_message(
                        &format!("Round over: +{} points", result.score()),
                        MessageStyle::Success,
                    );
                }
                self.last_result = result;
                self.add_message(
                    "Press 'n' for a new board, 't' to teach rejected words, 'q' to quit.",
                    MessageStyle::Info,
                );
                self.input_mode = InputMode::RoundOver;
            }
            other => {
                let text = format!("Could not finish round: {other:?}");
                self.add_message(&text, MessageStyle::Error);
            }
        }
    }

    /// Teach the dictionary every word rejected as unknown last round
    pub fn teach_rejected(&mut self) {
        let Some(result) = &self.last_result else {
            return;
        };
        let rejected: Vec<String> = result.not_in_dictionary().iter().cloned().collect();
        let added = self.session.teach(&rejected);
        self.add_message(
            &format!("Taught {added} word(s); they count from the next round"),
            MessageStyle::Info,
        );
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
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
            }

            match app.input_mode {
                InputMode::Typing => match key.code {
                    KeyCode::Esc => app.should_quit = true,
                    KeyCode::Tab => app.finish_round(),
                    KeyCode::Enter => app.add_word(),
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                    }
                    KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                        app.input_buffer.push(c.to_ascii_uppercase());
                    }
                    _ => {}
                },
                InputMode::RoundOver => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                    KeyCode::Char('n') => app.new_round(),
                    KeyCode::Char('t') => app.teach_rejected(),
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
