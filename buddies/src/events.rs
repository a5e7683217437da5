//! Event handling for the Math Buddies TUI

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{App, Nav};

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Continue,
    Quit,
    NeedsRedraw,
}

/// Handle a terminal event
pub fn handle_event(app: &mut App, event: Event) -> EventResult {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(app, key),
        Event::Resize(_, _) => EventResult::NeedsRedraw,
        _ => EventResult::Continue,
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> EventResult {
    // Global shortcuts (always work)
    if let (KeyCode::Char('c'), KeyModifiers::CONTROL) = (key.code, key.modifiers) {
        return EventResult::Quit;
    }

    if app.is_playing() {
        handle_playing(app, key)
    } else {
        handle_menu(app, key)
    }
}

/// Handle keys on the menu
fn handle_menu(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Enter | KeyCode::Char('s') | KeyCode::Char('S') => {
            app.start();
            EventResult::NeedsRedraw
        }
        KeyCode::Char('q') | KeyCode::Esc => EventResult::Quit,
        _ => EventResult::Continue,
    }
}

/// Handle keys while a problem is on screen
fn handle_playing(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Esc => app.exit_to_menu(),
        KeyCode::Char(c) if c.is_ascii_digit() => app.type_digit(c),
        KeyCode::Backspace | KeyCode::Delete => {
            app.keypad_active = false;
            app.clear_input();
        }
        KeyCode::Enter => app.confirm(),
        KeyCode::Char(' ') => app.activate_selected(),
        KeyCode::Left => app.navigate(Nav::Left),
        KeyCode::Right => app.navigate(Nav::Right),
        KeyCode::Up => app.navigate(Nav::Up),
        KeyCode::Down => app.navigate(Nav::Down),
        _ => return EventResult::Continue,
    }
    EventResult::NeedsRedraw
}
