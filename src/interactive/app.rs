//! TUI application state and logic

use crate::commands::{LoadedGame, persist_session};
use crate::core::Role;
use crate::game::{Game, GameState};
use crate::store::Store;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
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
    pub game: Game,
    pub store: Store,
    pub hint_dots: bool,
    /// Position in the tile bank of the tile picked up, if any
    pub selected: Option<usize>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    rng: StdRng,
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
    pub fn new(loaded: LoadedGame, store: Store) -> Self {
        Self::with_rng(loaded, store, StdRng::from_rng(&mut rand::rng()))
    }

    /// Build the app with an explicit RNG, starting the game unless resumed
    #[must_use]
    pub fn with_rng(loaded: LoadedGame, store: Store, rng: StdRng) -> Self {
        let hint_dots = store.hint_dots();
        let mut app = Self {
            game: loaded.game,
            store,
            hint_dots,
            selected: None,
            messages: Vec::new(),
            should_quit: false,
            rng,
        };

        if loaded.resumed {
            app.add_message("Resumed your saved session.", MessageStyle::Info);
        } else {
            if loaded.fallbacks > 0 {
                app.add_message(
                    &format!(
                        "{} word(s) segmented locally: analysis service unavailable",
                        loaded.fallbacks
                    ),
                    MessageStyle::Error,
                );
            }
            match app.game.start(&mut app.rng) {
                Ok(()) => app.add_message(
                    "Pick a tile with 1-9, then drop it with p / r / s.",
                    MessageStyle::Info,
                ),
                Err(e) => app.add_message(&e.to_string(), MessageStyle::Error),
            }
        }
        app.persist();
        app
    }

    fn persist(&mut self) {
        persist_session(&mut self.store, &self.game);
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

    /// Number of tiles still in the bank
    #[must_use]
    pub fn bank_len(&self) -> usize {
        self.game.trial().map_or(0, |t| t.bank().count())
    }

    /// Pick up bank tile `position` (0-based); picking it again drops it
    pub fn select_tile(&mut self, position: usize) {
        if position >= self.bank_len() {
            return;
        }
        self.selected = if self.selected == Some(position) {
            None
        } else {
            Some(position)
        };
    }

    /// Place the picked-up tile into `role`, or empty the slot if none is held
    pub fn slot_pressed(&mut self, role: Role) {
        let result = match self.selected.take() {
            Some(position) => {
                let id = self
                    .game
                    .trial()
                    .and_then(|t| t.bank().nth(position))
                    .map(|t| t.id.clone());
                match id {
                    Some(id) => self.game.place(role, &id),
                    None => return,
                }
            }
            None => self.game.remove(role).map(|_| ()),
        };

        match result {
            Ok(()) => {
                self.persist();
                if self.game.can_check() {
                    self.add_message("All slots filled. Press c to check.", MessageStyle::Info);
                }
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn hint(&mut self) {
        match self.game.hint() {
            Ok(Some(fragment)) => {
                let text = match fragment.meaning() {
                    Some(meaning) => format!(
                        "Hint: {} is \"{}\" ({meaning})",
                        fragment.role().label(),
                        fragment.text()
                    ),
                    None => format!(
                        "Hint: {} is \"{}\"",
                        fragment.role().label(),
                        fragment.text()
                    ),
                };
                self.add_message(&text, MessageStyle::Info);
            }
            Ok(None) => self.add_message("Everything placed is already correct.", MessageStyle::Info),
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        }
        self.persist();
    }

    pub fn check(&mut self) {
        let outcome = self.game.check().map(|event| event.correct);
        match outcome {
            Ok(true) => self.add_message("✅ Correct!", MessageStyle::Success),
            Ok(false) => self.add_message("❌ Not quite. Review the answer.", MessageStyle::Error),
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        }
        self.selected = None;
        self.persist();
    }

    pub fn next(&mut self) {
        match self.game.next(&mut self.rng) {
            Ok(GameState::Done) => {
                let summary = self.game.summary();
                self.add_message(
                    &format!(
                        "Session complete: {}/{} correct. Press n to play again.",
                        summary.correct, summary.items
                    ),
                    MessageStyle::Success,
                );
            }
            Ok(_) => {}
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        }
        self.persist();
    }

    pub fn restart(&mut self) {
        self.game.restart();
        self.selected = None;
        match self.game.start(&mut self.rng) {
            Ok(()) => self.add_message("New session started.", MessageStyle::Info),
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
        self.persist();
    }

    pub fn toggle_hint_dots(&mut self) {
        self.hint_dots = !self.hint_dots;
        self.store.set_hint_dots(self.hint_dots);
        let state = if self.hint_dots { "on" } else { "off" };
        self.add_message(&format!("Hint dots {state}"), MessageStyle::Info);
    }

    /// React to one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.restart();
                return;
            }
            KeyCode::Char('q') => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('d') => {
                self.toggle_hint_dots();
                return;
            }
            _ => {}
        }

        match self.game.state() {
            GameState::InTrial => match key.code {
                KeyCode::Char(c @ '1'..='9') => {
                    let position = c as usize - '1' as usize;
                    self.select_tile(position);
                }
                KeyCode::Char('p') => self.slot_pressed(Role::Prefix),
                KeyCode::Char('r') => self.slot_pressed(Role::Root),
                KeyCode::Char('s') => self.slot_pressed(Role::Suffix),
                KeyCode::Char('h') => self.hint(),
                KeyCode::Char('c') | KeyCode::Enter => self.check(),
                KeyCode::Esc => self.selected = None,
                _ => {}
            },
            GameState::Feedback => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char('n' | ' ')) {
                    self.next();
                }
            }
            GameState::Done | GameState::Ready => {
                if key.code == KeyCode::Char('n') {
                    self.restart();
                }
            }
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
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::practice::seed_entries;

    fn press(app: &mut App, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
    }

    fn app() -> App {
        let loaded = LoadedGame {
            game: Game::new(seed_entries()),
            resumed: false,
            fallbacks: 0,
        };
        App::with_rng(loaded, Store::in_memory(), StdRng::seed_from_u64(9))
    }

    fn bank_position(app: &App, text: &str) -> char {
        let position = app
            .game
            .trial()
            .unwrap()
            .bank()
            .position(|t| t.text() == text)
            .unwrap();
        char::from(b'1' + position as u8)
    }

    fn place(app: &mut App, text: &str, slot: char) {
        let key = bank_position(app, text);
        press(app, key);
        press(app, slot);
    }

    #[test]
    fn new_app_starts_and_persists() {
        let app = app();
        assert_eq!(app.game.state(), GameState::InTrial);
        assert!(app.store.session().is_some());
        assert!(app.hint_dots);
    }

    #[test]
    fn select_twice_deselects() {
        let mut app = app();
        press(&mut app, '2');
        assert_eq!(app.selected, Some(1));
        press(&mut app, '2');
        assert_eq!(app.selected, None);
        press(&mut app, '9');
        assert_eq!(app.selected, None);
    }

    #[test]
    fn keyboard_round() {
        let mut app = app();
        let word = app.game.entry().unwrap().clone();
        for fragment in &word.morphemes {
            let slot = match fragment.role() {
                Role::Prefix => 'p',
                Role::Root => 'r',
                Role::Suffix => 's',
            };
            place(&mut app, fragment.text(), slot);
        }
        assert!(app.game.can_check());

        press(&mut app, 'c');
        assert_eq!(app.game.state(), GameState::Feedback);
        assert_eq!(app.game.score(), 1);

        press(&mut app, 'n');
        assert_eq!(app.game.state(), GameState::InTrial);
        assert_eq!(app.game.index(), 1);
        assert_eq!(app.store.session().unwrap().index, 1);
    }

    #[test]
    fn slot_without_selection_clears_it() {
        let mut app = app();
        let root = app.game.entry().unwrap().morphemes[1].text().to_string();
        place(&mut app, &root, 'r');
        assert!(app.game.trial().unwrap().placed(Role::Root).is_some());

        press(&mut app, 'r');
        assert!(app.game.trial().unwrap().placed(Role::Root).is_none());
    }

    #[test]
    fn hint_dots_toggle_is_saved() {
        let mut app = app();
        press(&mut app, 'd');
        assert!(!app.hint_dots);
        assert!(!app.store.hint_dots());
    }

    #[test]
    fn check_before_complete_reports_error() {
        let mut app = app();
        press(&mut app, 'c');
        assert_eq!(app.game.state(), GameState::InTrial);
        assert!(matches!(
            app.messages.last().map(|m| &m.style),
            Some(MessageStyle::Error)
        ));
    }
}
