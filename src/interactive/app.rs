//! TUI application state and logic

use crate::core::Tier;
use crate::game::{MAX_THRESHOLD, MIN_THRESHOLD, Session};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a, R = StdRng> {
    pub session: Session<'a, R>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
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

impl<'a, R: Rng> App<'a, R> {
    #[must_use]
    pub fn new(session: Session<'a, R>) -> Self {
        Self {
            session,
            messages: vec![Message {
                text: "Welcome! Press 's' to create a letter swap, Enter for the next word."
                    .to_string(),
                style: MessageStyle::Info,
            }],
            should_quit: false,
        }
    }

    pub fn select_tier(&mut self, tier: Tier) {
        if tier == self.session.tier() {
            return;
        }
        self.session.set_tier(tier);
        self.add_message(
            &format!(
                "Switched to {tier} words ({} words)",
                self.session.words().len()
            ),
            MessageStyle::Info,
        );
    }

    pub fn create_swap(&mut self) {
        match self.session.create_swap() {
            Some(swap) => self.add_message(&format!("Created swap {swap}"), MessageStyle::Success),
            None => self.add_message("Not enough letters left to swap!", MessageStyle::Error),
        }
    }

    pub fn change_threshold(&mut self, delta: isize) {
        let target = self
            .session
            .threshold()
            .saturating_add_signed(delta)
            .clamp(MIN_THRESHOLD, MAX_THRESHOLD);
        if target != self.session.threshold() {
            self.session.set_threshold(target);
        }
    }

    pub fn next_word(&mut self) {
        if !self.session.is_selection_enabled() {
            self.add_message(
                "Choose next word is disabled. Create a swap or change the difficulty.",
                MessageStyle::Error,
            );
            return;
        }

        let threshold = self.session.threshold();
        let picked = self.session.select_next().map(str::to_uppercase);
        match picked {
            Some(word) => self.add_message(&format!("Next word: {word}"), MessageStyle::Success),
            None => self.add_message(
                &format!("No words left with difficulty ≤ {threshold}"),
                MessageStyle::Error,
            ),
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

    /// Apply a key press
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        match code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('1' | 'e') => self.select_tier(Tier::Easy),
            KeyCode::Char('2' | 'm') => self.select_tier(Tier::Medium),
            KeyCode::Char('3' | 'h') => self.select_tier(Tier::Hard),
            KeyCode::Char('s') => self.create_swap(),
            KeyCode::Char('+' | '=') | KeyCode::Right | KeyCode::Up => self.change_threshold(1),
            KeyCode::Char('-' | '_') | KeyCode::Left | KeyCode::Down => {
                self.change_threshold(-1);
            }
            KeyCode::Enter | KeyCode::Char('n' | ' ') => self.next_word(),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<R: Rng>(app: App<'_, R>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "TUI exited with an error");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, R>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key.code, key.modifiers);
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
    use crate::wordlists::WordLists;
    use rand::SeedableRng;

    fn app(lists: &WordLists) -> App<'_> {
        App::new(Session::new(lists, StdRng::seed_from_u64(0)))
    }

    fn press(app: &mut App<'_>, code: KeyCode) {
        app.handle_key(code, KeyModifiers::NONE);
    }

    #[test]
    fn quit_keys() {
        let lists = WordLists::uniform(&["cat"]);
        let mut a = app(&lists);
        press(&mut a, KeyCode::Char('q'));
        assert!(a.should_quit);

        let mut b = app(&lists);
        b.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(b.should_quit);
    }

    #[test]
    fn tier_keys_switch_lists() {
        let lists = WordLists::new(
            vec!["cat".to_string()],
            vec!["apple".to_string()],
            vec!["rhythm".to_string()],
        );
        let mut app = app(&lists);

        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.session.tier(), Tier::Hard);
        press(&mut app, KeyCode::Char('m'));
        assert_eq!(app.session.tier(), Tier::Medium);
        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.session.tier(), Tier::Easy);
    }

    #[test]
    fn swap_then_enter_picks_word() {
        let lists = WordLists::uniform(&["cat", "dog"]);
        let mut app = app(&lists);

        press(&mut app, KeyCode::Enter);
        assert!(app.session.current_word().is_none());
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);

        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.session.swaps().len(), 1);

        press(&mut app, KeyCode::Char('+'));
        press(&mut app, KeyCode::Char('+'));
        press(&mut app, KeyCode::Enter);
        assert!(app.session.current_word().is_some());
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Success);
    }

    #[test]
    fn threshold_keys_clamp() {
        let lists = WordLists::uniform(&["cat"]);
        let mut app = app(&lists);

        press(&mut app, KeyCode::Left);
        assert_eq!(app.session.threshold(), MIN_THRESHOLD);

        for _ in 0..20 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.session.threshold(), MAX_THRESHOLD);
    }

    #[test]
    fn swap_reports_empty_pool() {
        let lists = WordLists::uniform(&["ab"]);
        let mut app = app(&lists);

        press(&mut app, KeyCode::Char('s'));
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.session.swaps().len(), 1);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn messages_are_capped() {
        let lists = WordLists::uniform(&["cat"]);
        let mut app = app(&lists);
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[0].text, "message 5");
    }
}
