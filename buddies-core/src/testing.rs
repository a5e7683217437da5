//! Testing utilities for the game.
//!
//! This module provides tools for integration testing:
//! - `MockEncourager` for deterministic phrases without API calls
//! - `SessionHarness` for scripted sessions driven end to end
//! - Helpers for typing answers

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::config::GameConfig;
use crate::driver::GameDriver;
use crate::encourage::{EncourageError, Encourager};
use crate::problem::Problem;
use crate::session::Session;

/// How a [`MockEncourager`] answers.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Reply immediately with this text.
    Reply(String),
    /// Fail every request.
    Fail,
    /// Reply with this text after a delay.
    Delayed(Duration, String),
}

/// An encourager with scripted behaviour that counts its calls.
pub struct MockEncourager {
    behavior: MockBehavior,
    correct_calls: AtomicUsize,
    incorrect_calls: AtomicUsize,
}

impl MockEncourager {
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            correct_calls: AtomicUsize::new(0),
            incorrect_calls: AtomicUsize::new(0),
        }
    }

    pub fn replying(text: impl Into<String>) -> Self {
        Self::new(MockBehavior::Reply(text.into()))
    }

    pub fn failing() -> Self {
        Self::new(MockBehavior::Fail)
    }

    pub fn delayed(delay: Duration, text: impl Into<String>) -> Self {
        Self::new(MockBehavior::Delayed(delay, text.into()))
    }

    /// Requests made for correct answers.
    pub fn correct_calls(&self) -> usize {
        self.correct_calls.load(Ordering::SeqCst)
    }

    /// Requests made for wrong answers.
    pub fn incorrect_calls(&self) -> usize {
        self.incorrect_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Encourager for MockEncourager {
    async fn encourage(&self, correct: bool) -> Result<String, EncourageError> {
        let counter = if correct {
            &self.correct_calls
        } else {
            &self.incorrect_calls
        };
        counter.fetch_add(1, Ordering::SeqCst);

        match &self.behavior {
            MockBehavior::Reply(text) => Ok(text.clone()),
            MockBehavior::Fail => Err(EncourageError::Client(claude::Error::Network(
                "connection refused".to_string(),
            ))),
            MockBehavior::Delayed(delay, text) => {
                tokio::time::sleep(*delay).await;
                Ok(text.clone())
            }
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}

/// Anything that accepts keypad digits.
pub trait DigitEntry {
    fn press_digit(&mut self, c: char) -> bool;
}

impl DigitEntry for Session {
    fn press_digit(&mut self, c: char) -> bool {
        Session::press_digit(self, c)
    }
}

impl DigitEntry for GameDriver {
    fn press_digit(&mut self, c: char) -> bool {
        GameDriver::press_digit(self, c)
    }
}

/// Press the digits of `value` in order.
pub fn type_number<D: DigitEntry + ?Sized>(target: &mut D, value: u32) {
    for c in value.to_string().chars() {
        target.press_digit(c);
    }
}

/// An answer that is guaranteed wrong for `problem`.
pub fn wrong_answer(problem: &Problem) -> u32 {
    problem.answer() + 1
}

/// A driver wired to a mock encourager, for scripted scenarios.
pub struct SessionHarness {
    pub driver: GameDriver,
    pub encourager: Arc<MockEncourager>,
}

impl SessionHarness {
    /// Create a harness with the default two-second advance delay.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(encourager: MockEncourager) -> Self {
        Self::with_config(encourager, &GameConfig::default())
    }

    pub fn with_config(encourager: MockEncourager, config: &GameConfig) -> Self {
        let encourager = Arc::new(encourager);
        let driver = GameDriver::new(
            Session::seeded(42),
            Arc::clone(&encourager) as Arc<dyn Encourager>,
            config,
        );
        Self { driver, encourager }
    }

    pub fn session(&self) -> &Session {
        self.driver.session()
    }

    pub fn current_answer(&self) -> Option<u32> {
        self.session().problem().map(Problem::answer)
    }

    /// Type and submit `value`. Returns whether it was correct.
    pub fn answer(&mut self, value: u32) -> Option<bool> {
        self.driver.clear_input();
        type_number(&mut self.driver, value);
        self.driver.submit()
    }

    pub fn answer_correctly(&mut self) -> Option<bool> {
        let value = self.current_answer()?;
        self.answer(value)
    }

    pub fn answer_wrong(&mut self) -> Option<bool> {
        let value = self.session().problem().map(wrong_answer)?;
        self.answer(value)
    }
}
