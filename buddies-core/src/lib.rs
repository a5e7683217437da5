//! Counting and arithmetic game engine for young learners.
//!
//! This crate provides:
//! - A problem generator with a score-based difficulty curve
//! - Countable layouts (hands or icon grids) for the visualised operand
//! - A session state machine for menu, play, scoring and streaks
//! - Best-effort encouragement phrases from Claude, with local fallbacks
//!
//! # Quick Start
//!
//! ```ignore
//! use buddies_core::{encourager_from_config, GameConfig, GameDriver, Session};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = GameConfig::from_env();
//!     let mut driver = GameDriver::new(Session::new(), encourager_from_config(&config), &config);
//!
//!     driver.start();
//!     let problem = driver.session().problem().cloned().unwrap();
//!     println!("{problem}");
//!
//!     for c in problem.answer().to_string().chars() {
//!         driver.press_digit(c);
//!     }
//!     driver.submit();
//!     driver.settle().await;
//! }
//! ```

pub mod config;
pub mod driver;
pub mod encourage;
pub mod problem;
pub mod session;
pub mod testing;
pub mod visual;

// Primary public API
pub use config::GameConfig;
pub use driver::{DriverEvent, GameDriver};
pub use encourage::{
    encourager_from_config, fallback_phrase, fetch_encouragement, ClaudeEncourager,
    EncourageError, Encourager, FallbackEncourager,
};
pub use problem::{generate, ObjectType, Operator, Problem, ProblemId, Theme, Tier, MAX_VISUAL};
pub use session::{
    AnswerInput, Banner, Feedback, FeedbackKind, GameStatus, Session, SessionEffect, Ticket,
};
pub use testing::{MockEncourager, SessionHarness};
pub use visual::{render, Digit, Hand, IconGrid, Visual};
