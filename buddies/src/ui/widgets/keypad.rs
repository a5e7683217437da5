//! On-screen number pad

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::ui::theme::GameTheme;

/// A key on the pad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeypadKey {
    Digit(char),
    Clear,
    Check,
}

impl KeypadKey {
    pub fn label(&self) -> String {
        match self {
            KeypadKey::Digit(c) => c.to_string(),
            KeypadKey::Clear => "Clear".to_string(),
            KeypadKey::Check => "Check".to_string(),
        }
    }

    fn is_action(&self) -> bool {
        !matches!(self, KeypadKey::Digit(_))
    }
}

const DIGITS_TOP: [KeypadKey; 5] = [
    KeypadKey::Digit('1'),
    KeypadKey::Digit('2'),
    KeypadKey::Digit('3'),
    KeypadKey::Digit('4'),
    KeypadKey::Digit('5'),
];

const DIGITS_BOTTOM: [KeypadKey; 5] = [
    KeypadKey::Digit('6'),
    KeypadKey::Digit('7'),
    KeypadKey::Digit('8'),
    KeypadKey::Digit('9'),
    KeypadKey::Digit('0'),
];

const ACTIONS: [KeypadKey; 2] = [KeypadKey::Clear, KeypadKey::Check];

/// Key rows, top to bottom.
pub const ROWS: [&[KeypadKey]; 3] = [&DIGITS_TOP, &DIGITS_BOTTOM, &ACTIONS];

/// Cursor position on the pad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeypadState {
    row: usize,
    col: usize,
}

impl KeypadState {
    pub fn selected(&self) -> KeypadKey {
        ROWS[self.row][self.col]
    }

    pub fn is_selected(&self, row: usize, col: usize) -> bool {
        self.row == row && self.col == col
    }

    pub fn move_left(&mut self) {
        self.col = self.col.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.col = (self.col + 1).min(ROWS[self.row].len() - 1);
    }

    pub fn move_up(&mut self) {
        if self.row > 0 {
            self.row -= 1;
            self.clamp_col();
        }
    }

    pub fn move_down(&mut self) {
        if self.row + 1 < ROWS.len() {
            self.row += 1;
            self.clamp_col();
        }
    }

    /// Put the cursor on `key`, if it is on the pad.
    pub fn select(&mut self, key: KeypadKey) {
        for (row, keys) in ROWS.iter().enumerate() {
            if let Some(col) = keys.iter().position(|k| *k == key) {
                self.row = row;
                self.col = col;
                return;
            }
        }
    }

    fn clamp_col(&mut self) {
        self.col = self.col.min(ROWS[self.row].len() - 1);
    }
}

/// Widget for the number pad
pub struct KeypadWidget<'a> {
    state: &'a KeypadState,
    theme: &'a GameTheme,
    enabled: bool,
}

impl<'a> KeypadWidget<'a> {
    pub fn new(state: &'a KeypadState, theme: &'a GameTheme) -> Self {
        Self {
            state,
            theme,
            enabled: true,
        }
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(self.enabled))
            .title(" Keypad ");

        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = Vec::new();
        for (row, keys) in ROWS.iter().enumerate() {
            let mut spans = Vec::new();
            for (col, key) in keys.iter().enumerate() {
                if col > 0 {
                    spans.push(Span::raw(" "));
                }
                let selected = self.state.is_selected(row, col);
                spans.push(Span::styled(
                    format!("[ {} ]", key.label()),
                    self.theme.key_style(selected, key.is_action(), self.enabled),
                ));
            }
            lines.push(Line::from(spans));
            if row + 1 < ROWS.len() {
                lines.push(Line::default());
            }
        }

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}
