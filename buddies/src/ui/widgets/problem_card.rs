//! The problem card: `num1 op [visual] = [answer]`

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use buddies_core::{render, AnswerInput, Problem};

use crate::ui::glyphs::{object_caption, visual_lines};
use crate::ui::theme::GameTheme;

/// Text in the answer slot.
pub fn slot_text(input: &AnswerInput) -> &str {
    if input.is_empty() {
        "?"
    } else {
        input.as_str()
    }
}

/// Widget for the current problem
pub struct ProblemCardWidget<'a> {
    problem: &'a Problem,
    input: &'a AnswerInput,
    solved: bool,
    wide: bool,
    theme: &'a GameTheme,
}

impl<'a> ProblemCardWidget<'a> {
    pub fn new(problem: &'a Problem, input: &'a AnswerInput, theme: &'a GameTheme) -> Self {
        Self {
            problem,
            input,
            solved: false,
            wide: false,
            theme,
        }
    }

    pub fn solved(mut self, solved: bool) -> Self {
        self.solved = solved;
        self
    }

    pub fn wide(mut self, wide: bool) -> Self {
        self.wide = wide;
        self
    }
}

/// Pad `lines` with blank lines so they sit in the vertical middle of `height`.
fn vertically_centered(lines: Vec<Line<'_>>, height: u16) -> Vec<Line<'_>> {
    let padding = (height as usize).saturating_sub(lines.len()) / 2;
    let mut padded = vec![Line::default(); padding];
    padded.extend(lines);
    padded
}

impl Widget for ProblemCardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let card_style = self.theme.card_style(self.problem.theme());
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(card_style)
            .title(format!(" Count the {} ", object_caption(self.problem.object_type())));
        let inner = block.inner(area);
        block.render(area, buf);

        let visual = visual_lines(
            &render(self.problem.object_type(), self.problem.num2()),
            self.wide,
        );

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(6),
                Constraint::Length(3),
                Constraint::Min(10),
                Constraint::Length(3),
                Constraint::Length(8),
            ])
            .split(inner);

        let cell = |text: String, style| {
            Paragraph::new(vertically_centered(
                vec![Line::styled(text, style)],
                inner.height,
            ))
            .alignment(Alignment::Center)
        };

        cell(self.problem.num1().to_string(), card_style).render(chunks[0], buf);
        cell(self.problem.operator().symbol().to_string(), self.theme.text_style())
            .render(chunks[1], buf);

        let drawing: Vec<Line> = visual
            .into_iter()
            .map(|line| Line::styled(line, card_style))
            .collect();
        Paragraph::new(vertically_centered(drawing, inner.height))
            .alignment(Alignment::Center)
            .render(chunks[2], buf);

        cell("=".to_string(), self.theme.text_style()).render(chunks[3], buf);
        cell(
            format!("[{:^4}]", slot_text(self.input)),
            self.theme.slot_style(self.solved),
        )
        .render(chunks[4], buf);
    }
}
