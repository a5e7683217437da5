//! Main application state and logic

use buddies_core::{GameDriver, GameStatus, Session};

use crate::ui::theme::GameTheme;
use crate::ui::widgets::{KeypadKey, KeypadState};

/// Arrow-key movement on the keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    Left,
    Right,
    Up,
    Down,
}

/// Main application state
pub struct App {
    pub driver: GameDriver,

    // UI state
    pub theme: GameTheme,
    pub keypad: KeypadState,
    /// Set by arrow navigation; Enter then presses the selected key.
    pub keypad_active: bool,

    // Status
    status_message: Option<String>,

    // Animation
    pub animation_frame: u8,
}

impl App {
    pub fn new(driver: GameDriver) -> Self {
        Self {
            driver,
            theme: GameTheme::default(),
            keypad: KeypadState::default(),
            keypad_active: false,
            status_message: None,
            animation_frame: 0,
        }
    }

    pub fn session(&self) -> &Session {
        self.driver.session()
    }

    pub fn is_playing(&self) -> bool {
        self.session().status() == GameStatus::Playing
    }

    /// Whether the keypad currently takes input.
    pub fn keypad_enabled(&self) -> bool {
        self.is_playing() && !self.session().is_advancing()
    }

    pub fn start(&mut self) {
        if self.driver.start() {
            self.keypad = KeypadState::default();
            self.keypad_active = false;
            self.clear_status();
        }
    }

    pub fn exit_to_menu(&mut self) {
        if self.driver.exit() {
            self.set_status(format!("Back to the menu. Score: {}", self.session().score()));
        }
    }

    pub fn press_digit(&mut self, c: char) {
        if self.driver.press_digit(c) {
            self.keypad.select(KeypadKey::Digit(c));
            self.clear_status();
        } else if self.keypad_enabled() && c.is_ascii_digit() {
            self.set_status("Two digits is the most you need!");
        }
    }

    /// A digit typed on the keyboard rather than picked on the keypad.
    pub fn type_digit(&mut self, c: char) {
        self.keypad_active = false;
        self.press_digit(c);
    }

    pub fn navigate(&mut self, nav: Nav) {
        if !self.keypad_enabled() {
            return;
        }
        match nav {
            Nav::Left => self.keypad.move_left(),
            Nav::Right => self.keypad.move_right(),
            Nav::Up => self.keypad.move_up(),
            Nav::Down => self.keypad.move_down(),
        }
        self.keypad_active = true;
    }

    /// Enter: press the selected key after arrow navigation, otherwise check.
    pub fn confirm(&mut self) {
        if self.keypad_active {
            self.activate_selected();
        } else {
            self.submit();
        }
    }

    pub fn clear_input(&mut self) {
        self.driver.clear_input();
        self.clear_status();
    }

    pub fn submit(&mut self) {
        if self.driver.submit().is_some() {
            self.clear_status();
        }
    }

    /// Press the key under the keypad cursor.
    pub fn activate_selected(&mut self) {
        match self.keypad.selected() {
            KeypadKey::Digit(c) => self.press_digit(c),
            KeypadKey::Clear => self.clear_input(),
            KeypadKey::Check => self.submit(),
        }
    }

    /// Apply finished background work. Returns whether anything changed.
    pub fn pump(&mut self) -> bool {
        self.driver.pump()
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    /// Tick animations
    pub fn tick(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use buddies_core::testing::MockEncourager;
    use buddies_core::GameConfig;

    fn app() -> App {
        let driver = GameDriver::new(
            Session::seeded(3),
            Arc::new(MockEncourager::replying("Wow!")),
            &GameConfig::default(),
        );
        App::new(driver)
    }

    fn answer(app: &App) -> u32 {
        app.session().problem().map(|p| p.answer()).unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn test_keypad_enters_and_checks_answer() {
        let mut app = app();
        app.start();
        assert!(app.keypad_enabled());

        let digits = answer(&app).to_string();
        for c in digits.chars() {
            app.keypad.select(KeypadKey::Digit(c));
            app.activate_selected();
        }
        assert_eq!(app.session().input().as_str(), digits);

        app.keypad.select(KeypadKey::Check);
        app.activate_selected();
        assert_eq!(app.session().score(), 10);
        assert!(!app.keypad_enabled());
    }

    #[tokio::test(start_paused = true)]
    async fn test_keypad_clear() {
        let mut app = app();
        app.start();
        app.press_digit('4');
        app.keypad.select(KeypadKey::Clear);
        app.activate_selected();
        assert!(app.session().input().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_third_digit_sets_status() {
        let mut app = app();
        app.start();
        app.press_digit('1');
        app.press_digit('2');
        app.press_digit('3');
        assert_eq!(app.session().input().as_str(), "12");
        assert!(app.status_message().is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_exit_to_menu_reports_score() {
        let mut app = app();
        app.start();
        app.exit_to_menu();
        assert!(!app.is_playing());
        assert_eq!(app.status_message(), Some("Back to the menu. Score: 0"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_enter_follows_keypad_focus() {
        let mut app = app();
        app.start();

        app.navigate(Nav::Down);
        app.confirm();
        assert_eq!(app.session().input().as_str(), "6");

        app.type_digit('1');
        assert!(!app.keypad_active);
        app.confirm();
        assert_eq!(
            app.session().feedback().map(|f| f.is_success()),
            Some(false)
        );
    }

    #[test]
    fn test_tick_wraps() {
        let mut app = app();
        app.animation_frame = u8::MAX;
        app.tick();
        assert_eq!(app.animation_frame, 0);
    }
}
