//! Render orchestration for the Math Buddies TUI

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

use crate::app::App;
use crate::ui::layout::{is_wide, PlayLayout};
use crate::ui::widgets::{
    BannerWidget, FooterWidget, HeaderWidget, KeypadWidget, MenuWidget, ProblemCardWidget,
    StatusBarWidget,
};

/// Main render function
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    if app.is_playing() {
        render_playing(frame, app, area);
    } else {
        render_menu(frame, app, area);
    }
}

fn render_menu(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Score
            Constraint::Min(15),   // Menu
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Footer
        ])
        .split(area);

    let session = app.session();
    frame.render_widget(
        HeaderWidget::new(session.score(), session.streak(), &app.theme).playing(false),
        chunks[0],
    );

    let menu = MenuWidget::new(&app.theme)
        .last_score(session.score())
        .animation_frame(app.animation_frame);
    frame.render_widget(menu, chunks[1]);

    frame.render_widget(
        StatusBarWidget::new(&app.theme).message(app.status_message()),
        chunks[2],
    );
    frame.render_widget(FooterWidget::new(&app.theme), chunks[3]);
}

fn render_playing(frame: &mut Frame, app: &App, area: Rect) {
    let layout = PlayLayout::calculate(area);
    let session = app.session();

    frame.render_widget(
        HeaderWidget::new(session.score(), session.streak(), &app.theme),
        layout.header,
    );

    if let Some(problem) = session.problem() {
        let solved = session.feedback().is_some_and(|f| f.is_success());
        let card = ProblemCardWidget::new(problem, session.input(), &app.theme)
            .solved(solved)
            .wide(is_wide(area));
        frame.render_widget(card, layout.card);
    }

    frame.render_widget(BannerWidget::new(session.banner(), &app.theme), layout.banner);

    frame.render_widget(
        KeypadWidget::new(&app.keypad, &app.theme).enabled(app.keypad_enabled()),
        layout.keypad,
    );

    frame.render_widget(
        StatusBarWidget::new(&app.theme)
            .message(app.status_message())
            .encouragement(session.encouragement()),
        layout.status_bar,
    );
    frame.render_widget(FooterWidget::new(&app.theme), layout.footer);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use buddies_core::testing::MockEncourager;
    use buddies_core::{GameConfig, GameDriver, Session};
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn app() -> App {
        let driver = GameDriver::new(
            Session::seeded(9),
            Arc::new(MockEncourager::replying("Brilliant!")),
            &GameConfig::default(),
        );
        App::new(driver)
    }

    #[tokio::test(start_paused = true)]
    async fn test_menu_screen() {
        let app = app();
        let screen = draw(&app);
        assert!(screen.contains("Math Buddies!"));
        assert!(screen.contains("Learn with Joy"));
        assert!(screen.contains("🏆"));
        assert!(!screen.contains("Esc: Menu"));
        assert!(!screen.contains("Keypad"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_play_screen() {
        let mut app = app();
        app.start();
        let screen = draw(&app);
        assert!(screen.contains("Keypad"));
        assert!(screen.contains("Count the"));
        assert!(screen.contains("Esc: Menu"));
        assert!(!screen.contains("Math Buddies!"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_wrong_answer_shows_feedback_then_status() {
        let mut app = app();
        app.start();
        app.type_digit('9');
        app.type_digit('9');
        app.submit();
        app.driver.settle().await;

        let screen = draw(&app);
        assert!(screen.contains("Not quite! Try again."));
        assert!(screen.contains("Buddy says: Brilliant!"));
    }
}
