//! TUI widgets for the game

pub mod header;
pub mod keypad;
pub mod menu;
pub mod problem_card;
pub mod status_bar;

pub use header::HeaderWidget;
pub use keypad::{KeypadKey, KeypadState, KeypadWidget};
pub use menu::MenuWidget;
pub use problem_card::ProblemCardWidget;
pub use status_bar::{BannerWidget, FooterWidget, StatusBarWidget};
