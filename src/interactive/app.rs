//! TUI application state and logic

use crate::config::Services;
use crate::game::{
    GameTicket, NOT_A_WORD_NOTICE, Panel, Progress, RevealSource, RoundSequencer, SequencerStatus,
    SubmissionTicket,
};
use crate::services::ServiceError;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tracing::debug;

const TICK: Duration = Duration::from_millis(50);

/// A service answer delivered back to the event loop
pub enum Reply {
    Words(GameTicket, Result<String, ServiceError>),
    Verdict(SubmissionTicket, Result<bool, ServiceError>),
}

/// Application state
pub struct App<R = StdRng> {
    pub sequencer: RoundSequencer<R>,
    /// Slot of the active panel that typed letters go to
    pub cursor: usize,
    pub messages: Vec<Message>,
    pub show_popup: bool,
    pub should_quit: bool,
    pub stats: Statistics,
    services: Services,
    runtime: Handle,
    tx: UnboundedSender<Reply>,
    rx: UnboundedReceiver<Reply>,
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

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub games_started: usize,
    pub games_won: usize,
}

impl App<StdRng> {
    #[must_use]
    pub fn new(runtime: Handle, services: Services) -> Self {
        Self::with_sequencer(runtime, services, RoundSequencer::new())
    }
}

impl<R: RevealSource> App<R> {
    #[must_use]
    pub fn with_sequencer(runtime: Handle, services: Services, sequencer: RoundSequencer<R>) -> Self {
        let (tx, rx) = unbounded_channel();
        Self {
            sequencer,
            cursor: 0,
            messages: vec![Message {
                text: "Guess each word. One letter is given away in green.".to_string(),
                style: MessageStyle::Info,
            }],
            show_popup: false,
            should_quit: false,
            stats: Statistics::default(),
            services,
            runtime,
            tx,
            rx,
        }
    }

    /// Throw away the current game and request new words
    pub fn new_game(&mut self) {
        let ticket = self.sequencer.begin_new_game();
        self.show_popup = false;
        self.cursor = 0;
        self.add_message("Fetching new words...", MessageStyle::Info);

        let words = Arc::clone(&self.services.words);
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let result = words.fetch_triple().await;
            // The receiver only goes away when the app is shutting down
            let _ = tx.send(Reply::Words(ticket, result));
        });
    }

    /// Send the active round's letters to the dictionary
    pub fn submit(&mut self) {
        let Some(round) = self.sequencer.active_round() else {
            self.add_message("No round to submit yet", MessageStyle::Error);
            return;
        };

        match self.sequencer.submit(round) {
            Ok(ticket) => {
                debug!(round, candidate = ticket.candidate(), "submitting");
                let dictionary = Arc::clone(&self.services.dictionary);
                let tx = self.tx.clone();
                self.runtime.spawn(async move {
                    let result = dictionary.is_word(ticket.candidate()).await;
                    let _ = tx.send(Reply::Verdict(ticket, result));
                });
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    /// Apply a service answer to the game
    pub fn apply(&mut self, reply: Reply) {
        match reply {
            Reply::Words(ticket, result) => {
                let was_loading = self.sequencer.status() == SequencerStatus::Loading;
                match self.sequencer.finish_loading(ticket, result) {
                    Ok(()) => {
                        if was_loading && let Some(panel) = self.sequencer.active_panel() {
                            self.cursor = panel.first_slot();
                            self.stats.games_started += 1;
                            self.add_message("New puzzle ready. Round 1!", MessageStyle::Success);
                        }
                    }
                    Err(err) => {
                        self.add_message(&err.to_string(), MessageStyle::Error);
                        self.add_message("Press Ctrl+N to try again", MessageStyle::Info);
                    }
                }
            }
            Reply::Verdict(ticket, result) => match self.sequencer.resolve(&ticket, result) {
                Ok(Progress::Stale) => {}
                Ok(Progress::NotAWord { .. }) => {
                    self.add_message(NOT_A_WORD_NOTICE, MessageStyle::Error);
                }
                Ok(Progress::Retry { feedback, .. }) => {
                    let text = format!("{} {}", ticket.candidate(), feedback.to_emoji());
                    self.add_message(&text, MessageStyle::Info);
                }
                Ok(Progress::Advanced { solved, next }) => {
                    if let Some(panel) = self.sequencer.active_panel() {
                        self.cursor = panel.first_slot();
                    }
                    let text = format!("Round {} solved! On to round {}.", solved + 1, next + 1);
                    self.add_message(&text, MessageStyle::Success);
                }
                Ok(Progress::GameComplete) => {
                    self.stats.games_won += 1;
                    self.show_popup = true;
                    self.add_message("All three words found!", MessageStyle::Success);
                }
                Err(err) => {
                    let text = format!("Could not check '{}': {err}", ticket.candidate());
                    self.add_message(&text, MessageStyle::Error);
                }
            },
        }
    }

    /// Apply every answer that has arrived without waiting
    pub fn drain_replies(&mut self) {
        while let Ok(reply) = self.rx.try_recv() {
            self.apply(reply);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }
        if self.show_popup {
            self.show_popup = false;
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.new_game(),
            KeyCode::Char('r') if ctrl => self.reset_round(),
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Left => {
                if let Some(prev) = self.active_panel().and_then(|p| p.prev_slot(self.cursor)) {
                    self.cursor = prev;
                }
            }
            KeyCode::Right => {
                if let Some(next) = self.active_panel().and_then(|p| p.next_slot(self.cursor)) {
                    self.cursor = next;
                }
            }
            KeyCode::Char(c) if !ctrl && c.is_alphabetic() => self.type_letter(c),
            _ => {}
        }
    }

    fn type_letter(&mut self, letter: char) {
        let Some(round) = self.sequencer.active_round() else {
            return;
        };
        if self.sequencer.set_letter(round, self.cursor, &letter.to_string())
            && let Some(next) = self.active_panel().and_then(|p| p.next_slot(self.cursor))
        {
            self.cursor = next;
        }
    }

    fn backspace(&mut self) {
        let Some(round) = self.sequencer.active_round() else {
            return;
        };
        let cursor = self.cursor;
        let Some(panel) = self.active_panel() else {
            return;
        };

        if panel.buffer().get(cursor).is_some() {
            self.sequencer.set_letter(round, cursor, "");
        } else if let Some(prev) = panel.prev_slot(cursor) {
            self.cursor = prev;
        }
    }

    fn reset_round(&mut self) {
        self.sequencer.reset_active();
        if let Some(panel) = self.sequencer.active_panel() {
            self.cursor = panel.first_slot();
            self.add_message("Round cleared", MessageStyle::Info);
        }
    }

    #[must_use]
    pub fn active_panel(&self) -> Option<&Panel> {
        self.sequencer.active_panel()
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
pub fn run_tui<R: RevealSource>(app: App<R>) -> Result<()> {
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

fn run_app<B: ratatui::backend::Backend, R: RevealSource>(
    terminal: &mut Terminal<B>,
    mut app: App<R>,
) -> Result<()> {
    app.new_game();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(TICK)?
            && let Event::Key(key) = event::read()?
            // Only process key press events (fixes Windows double-input bug)
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key);
        }

        app.drain_replies();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
