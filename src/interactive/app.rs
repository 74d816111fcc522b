//! TUI application state and logic

use crate::game::{GameStatus, Session, SubmitError};
use crate::providers::{DictionaryValidator, SourceError, WordSource};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

/// A transient line in the message panel
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

/// Per-run play statistics
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins by attempt count; index 1-6 used
    pub guess_distribution: [usize; 7],
}

/// Application state
pub struct App<S, V> {
    source: S,
    validator: V,
    pub session: Session<V>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

impl<S, V> App<S, V>
where
    S: WordSource,
    V: DictionaryValidator + Clone,
{
    /// Fetch a secret and build the initial state
    ///
    /// # Errors
    /// Returns [`SourceError`] if the word source fails; there is nothing to
    /// show without a secret.
    pub async fn start(source: S, validator: V) -> Result<Self, SourceError> {
        let session = Session::start(&source, validator.clone()).await?;

        Ok(Self {
            source,
            validator,
            session,
            messages: vec![
                Message {
                    text: "Guess the 5-letter word in six tries.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type letters, Enter submits, Backspace deletes.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
        })
    }

    /// Discard the finished session and fetch a fresh secret
    ///
    /// On word-source failure the old session is kept so the player can
    /// retry.
    pub async fn new_game(&mut self) {
        match Session::start(&self.source, self.validator.clone()).await {
            Ok(session) => {
                self.session = session;
                self.messages.clear();
                self.add_message("New game started!", MessageStyle::Info);
            }
            Err(err) => {
                self.add_message(
                    &format!("Couldn't start a new game: {err}"),
                    MessageStyle::Error,
                );
            }
        }
    }

    pub async fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            code if self.session.status().is_over() => match code {
                KeyCode::Char('n' | 'N') => self.new_game().await,
                KeyCode::Char('q' | 'Q') => self.should_quit = true,
                _ => {}
            },
            KeyCode::Char(c) if c.is_ascii_alphabetic() => self.session.push_letter(c),
            KeyCode::Backspace => self.session.pop_letter(),
            KeyCode::Enter => self.submit().await,
            _ => {}
        }
    }

    async fn submit(&mut self) {
        match self.session.submit_row().await {
            Ok(scored) => {
                if scored.status.is_over() {
                    self.stats.total_games += 1;
                    if scored.status == GameStatus::Won {
                        self.stats.games_won += 1;
                        let attempts = self.session.attempts().min(6);
                        self.stats.guess_distribution[attempts] += 1;
                    }

                    let style = if scored.status == GameStatus::Won {
                        MessageStyle::Success
                    } else {
                        MessageStyle::Error
                    };
                    if let Some(message) = &scored.message {
                        self.add_message(message, style);
                    }
                    self.add_message("Press 'n' for a new game or Esc to quit.", MessageStyle::Info);
                }
            }
            Err(err @ SubmitError::IncompleteRow) => {
                self.add_message(&err.to_string(), MessageStyle::Info);
            }
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
        }
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
pub async fn run_tui<S, V>(app: App<S, V>) -> Result<()>
where
    S: WordSource,
    V: DictionaryValidator + Clone,
{
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app).await;

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

async fn run_app<B, S, V>(terminal: &mut Terminal<B>, mut app: App<S, V>) -> Result<()>
where
    B: ratatui::backend::Backend,
    S: WordSource,
    V: DictionaryValidator + Clone,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Poll so the loop stays responsive without spinning
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                app.handle_key(key).await;
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
