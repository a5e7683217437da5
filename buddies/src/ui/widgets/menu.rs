//! Title screen

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::ui::glyphs::menu_icon_row;
use crate::ui::layout::centered_rect_fixed;
use crate::ui::theme::GameTheme;

pub const TITLE: &str = "Math Buddies!";
pub const TAGLINE: &str =
    "Solve fun math problems with your favorite toys and yummy cakes! Can you reach 20?";
pub const START_LABEL: &str = "START PLAYING";

const MENU_WIDTH: u16 = 56;
const MENU_HEIGHT: u16 = 15;

/// Menu view with the start action
pub struct MenuWidget<'a> {
    theme: &'a GameTheme,
    last_score: u32,
    animation_frame: u8,
}

impl<'a> MenuWidget<'a> {
    pub fn new(theme: &'a GameTheme) -> Self {
        Self {
            theme,
            last_score: 0,
            animation_frame: 0,
        }
    }

    /// Score of the game that just ended, shown when non-zero.
    pub fn last_score(mut self, score: u32) -> Self {
        self.last_score = score;
        self
    }

    pub fn animation_frame(mut self, frame: u8) -> Self {
        self.animation_frame = frame;
        self
    }
}

impl Widget for MenuWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let menu_area = centered_rect_fixed(MENU_WIDTH, MENU_HEIGHT, area);
        Clear.render(menu_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_style(true));
        let inner = block.inner(menu_area);
        block.render(menu_area, buf);

        // Blink the start button a few frames out of every ten.
        let start_style = if self.animation_frame % 10 < 7 {
            self.theme.key_style(true, true, true)
        } else {
            self.theme.key_style(false, true, true)
        };

        let mut lines = vec![
            Line::default(),
            Line::styled(TITLE, self.theme.title_style()),
            Line::default(),
            Line::styled(TAGLINE, self.theme.text_style()),
            Line::default(),
            Line::raw(menu_icon_row()),
            Line::default(),
            Line::styled(format!("[ {START_LABEL} ]"), start_style),
            Line::default(),
            Line::from(vec![
                Span::styled("Enter", self.theme.text_style().add_modifier(Modifier::BOLD)),
                Span::styled(" / ", self.theme.footer_style()),
                Span::styled("s", self.theme.text_style().add_modifier(Modifier::BOLD)),
                Span::styled(" to start   ", self.theme.footer_style()),
                Span::styled("q", self.theme.text_style().add_modifier(Modifier::BOLD)),
                Span::styled(" to quit", self.theme.footer_style()),
            ]),
        ];

        if self.last_score > 0 {
            lines.push(Line::from(vec![
                Span::styled("Last score: ", self.theme.footer_style()),
                Span::styled(self.last_score.to_string(), self.theme.score_style()),
            ]));
        }

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}
