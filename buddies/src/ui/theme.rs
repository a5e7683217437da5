//! Color theme and styling for the Math Buddies TUI

use ratatui::style::{Color, Modifier, Style};

use buddies_core::Theme;

/// Game UI color theme
#[derive(Debug, Clone)]
pub struct GameTheme {
    // Base colors
    pub foreground: Color,
    pub border: Color,
    pub border_focused: Color,
    pub title: Color,

    // Feedback colors
    pub success: Color,
    pub error: Color,
    pub encouragement: Color,

    // Header colors
    pub score: Color,
    pub streak: Color,

    // Keypad colors
    pub key: Color,
    pub key_selected: Color,
    pub key_action: Color,
    pub disabled: Color,

    pub footer: Color,
}

impl Default for GameTheme {
    fn default() -> Self {
        Self {
            foreground: Color::White,
            border: Color::DarkGray,
            border_focused: Color::Cyan,
            title: Color::LightMagenta,

            success: Color::Green,
            error: Color::LightRed,
            encouragement: Color::LightYellow,

            score: Color::Yellow,
            streak: Color::LightRed,

            key: Color::White,
            key_selected: Color::Cyan,
            key_action: Color::LightGreen,
            disabled: Color::DarkGray,

            footer: Color::DarkGray,
        }
    }
}

impl GameTheme {
    /// Accent color for a problem card.
    pub fn card_color(&self, theme: Theme) -> Color {
        match theme {
            Theme::Blue => Color::LightBlue,
            Theme::Pink => Color::LightMagenta,
            Theme::Lime => Color::LightGreen,
            Theme::Yellow => Color::Yellow,
            Theme::Purple => Color::Magenta,
            Theme::Orange => Color::Rgb(255, 165, 0),
            Theme::Teal => Color::Cyan,
        }
    }

    pub fn text_style(&self) -> Style {
        Style::default().fg(self.foreground)
    }

    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.title)
            .add_modifier(Modifier::BOLD)
    }

    /// Get border style
    pub fn border_style(&self, focused: bool) -> Style {
        Style::default().fg(if focused {
            self.border_focused
        } else {
            self.border
        })
    }

    pub fn card_style(&self, theme: Theme) -> Style {
        Style::default()
            .fg(self.card_color(theme))
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the answer slot. Green once the answer is accepted.
    pub fn slot_style(&self, solved: bool) -> Style {
        if solved {
            Style::default()
                .fg(self.success)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(self.foreground)
                .add_modifier(Modifier::BOLD)
        }
    }

    pub fn feedback_style(&self, success: bool) -> Style {
        Style::default()
            .fg(if success { self.success } else { self.error })
            .add_modifier(Modifier::BOLD)
    }

    pub fn encouragement_style(&self) -> Style {
        Style::default()
            .fg(self.encouragement)
            .add_modifier(Modifier::ITALIC)
    }

    pub fn score_style(&self) -> Style {
        Style::default()
            .fg(self.score)
            .add_modifier(Modifier::BOLD)
    }

    pub fn streak_style(&self) -> Style {
        Style::default().fg(self.streak)
    }

    /// Style for a keypad key.
    pub fn key_style(&self, selected: bool, action: bool, enabled: bool) -> Style {
        if !enabled {
            return Style::default()
                .fg(self.disabled)
                .add_modifier(Modifier::DIM);
        }
        let color = if action { self.key_action } else { self.key };
        if selected {
            Style::default()
                .fg(Color::Black)
                .bg(self.key_selected)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(color)
        }
    }

    pub fn footer_style(&self) -> Style {
        Style::default()
            .fg(self.footer)
            .add_modifier(Modifier::DIM)
    }
}
