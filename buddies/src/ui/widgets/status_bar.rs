//! Feedback banner, status bar and footer

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use buddies_core::Banner;

use crate::ui::theme::GameTheme;

/// Footer tagline.
pub const FOOTER_TEXT: &str = "Learn with Joy • Count to 20";

/// Feedback area under the problem card
pub struct BannerWidget<'a> {
    banner: Banner<'a>,
    theme: &'a GameTheme,
}

impl<'a> BannerWidget<'a> {
    pub fn new(banner: Banner<'a>, theme: &'a GameTheme) -> Self {
        Self { banner, theme }
    }
}

impl Widget for BannerWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(false));
        let inner = block.inner(area);
        block.render(area, buf);

        let line = match self.banner {
            Banner::Feedback(feedback) => {
                let mark = if feedback.is_success() { "✔ " } else { "✘ " };
                let style = self.theme.feedback_style(feedback.is_success());
                Line::from(vec![
                    Span::styled(mark, style),
                    Span::styled(feedback.message.as_str(), style),
                ])
            }
            Banner::Encouragement(text) => Line::styled(
                format!("\u{201c}{text}\u{201d}"),
                self.theme.encouragement_style(),
            ),
            Banner::Empty => Line::default(),
        };

        Paragraph::new(line)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}

/// One-line status: a transient message or the latest encouragement
pub struct StatusBarWidget<'a> {
    message: Option<&'a str>,
    encouragement: Option<&'a str>,
    theme: &'a GameTheme,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(theme: &'a GameTheme) -> Self {
        Self {
            message: None,
            encouragement: None,
            theme,
        }
    }

    pub fn message(mut self, message: Option<&'a str>) -> Self {
        self.message = message;
        self
    }

    pub fn encouragement(mut self, encouragement: Option<&'a str>) -> Self {
        self.encouragement = encouragement;
        self
    }
}

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = match (self.message, self.encouragement) {
            (Some(message), _) => Line::styled(message, self.theme.text_style()),
            (None, Some(text)) => Line::from(vec![
                Span::styled("Buddy says: ", self.theme.text_style()),
                Span::styled(text, self.theme.encouragement_style()),
            ]),
            (None, None) => Line::default(),
        };
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

pub struct FooterWidget<'a> {
    theme: &'a GameTheme,
}

impl<'a> FooterWidget<'a> {
    pub fn new(theme: &'a GameTheme) -> Self {
        Self { theme }
    }
}

impl Widget for FooterWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Span::styled(FOOTER_TEXT, self.theme.footer_style()))
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use buddies_core::Feedback;

    fn rendered(widget: impl Widget, area: Rect) -> String {
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
        buf.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_banner_feedback() {
        let theme = GameTheme::default();
        let feedback = Feedback::error();
        let text = rendered(
            BannerWidget::new(Banner::Feedback(&feedback), &theme),
            Rect::new(0, 0, 40, 3),
        );
        assert!(text.contains("Not quite! Try again."));
    }

    #[test]
    fn test_banner_quotes_encouragement() {
        let theme = GameTheme::default();
        let text = rendered(
            BannerWidget::new(Banner::Encouragement("You rock!"), &theme),
            Rect::new(0, 0, 40, 3),
        );
        assert!(text.contains("\u{201c}You rock!\u{201d}"));
    }

    #[test]
    fn test_status_prefers_message() {
        let theme = GameTheme::default();
        let text = rendered(
            StatusBarWidget::new(&theme)
                .message(Some("Hello"))
                .encouragement(Some("Yay")),
            Rect::new(0, 0, 30, 1),
        );
        assert!(text.contains("Hello"));
        assert!(!text.contains("Yay"));
    }
}
