//! Score and streak header

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::ui::theme::GameTheme;

/// Most flames shown for a streak.
pub const MAX_FLAMES: u32 = 5;

/// One flame per streak point, capped.
pub fn flames(streak: u32) -> String {
    "🔥".repeat(streak.min(MAX_FLAMES) as usize)
}

/// Header showing the score, the streak and the exit hint
pub struct HeaderWidget<'a> {
    score: u32,
    streak: u32,
    playing: bool,
    theme: &'a GameTheme,
}

impl<'a> HeaderWidget<'a> {
    pub fn new(score: u32, streak: u32, theme: &'a GameTheme) -> Self {
        Self {
            score,
            streak,
            playing: true,
            theme,
        }
    }

    pub fn playing(mut self, playing: bool) -> Self {
        self.playing = playing;
        self
    }
}

impl Widget for HeaderWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(false));
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(33),
                Constraint::Percentage(34),
                Constraint::Percentage(33),
            ])
            .split(inner);

        Paragraph::new(Line::from(vec![
            Span::raw("🏆 "),
            Span::styled(self.score.to_string(), self.theme.score_style()),
        ]))
        .render(chunks[0], buf);

        if self.playing && self.streak > 0 {
            Paragraph::new(Span::styled(flames(self.streak), self.theme.streak_style()))
                .alignment(Alignment::Center)
                .render(chunks[1], buf);
        }

        if self.playing {
            Paragraph::new(Span::styled("Esc: Menu", self.theme.footer_style()))
                .alignment(Alignment::Right)
                .render(chunks[2], buf);
        }
    }
}
