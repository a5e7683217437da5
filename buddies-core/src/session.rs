//! The game session state machine.
//!
//! A [`Session`] owns all mutable game state. Every transition is a method
//! call that mutates the session synchronously and returns the
//! [`SessionEffect`]s the caller must run (an encouragement request, the
//! advance timer). Results of those effects come back tagged with the
//! [`Ticket`] that was current when they were requested; a result whose
//! ticket is no longer current is dropped.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::problem::{generate_with_rng, Problem, Tier};

/// Longest answer the learner can type.
pub const MAX_INPUT_DIGITS: usize = 2;

/// Points awarded per correct answer.
pub const POINTS_PER_CORRECT: u32 = 10;

/// Top-level state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    Menu,
    Playing,
    /// Reserved. No transition currently reaches it.
    GameOver,
}

/// Digits typed so far, at most [`MAX_INPUT_DIGITS`] long.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerInput {
    digits: String,
}

impl AnswerInput {
    /// Append a digit. Returns false if the buffer is full or `c` is not a digit.
    pub fn push(&mut self, c: char) -> bool {
        if !c.is_ascii_digit() || self.digits.len() >= MAX_INPUT_DIGITS {
            return false;
        }
        self.digits.push(c);
        true
    }

    pub fn clear(&mut self) {
        self.digits.clear();
    }

    pub fn as_str(&self) -> &str {
        &self.digits
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Parsed value, or `None` when empty.
    pub fn value(&self) -> Option<u32> {
        self.digits.parse().ok()
    }
}

/// Kind of feedback shown after a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Success,
    Error,
}

/// Feedback banner content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub message: String,
}

impl Feedback {
    pub fn success() -> Self {
        Self {
            kind: FeedbackKind::Success,
            message: "Correct!".to_string(),
        }
    }

    pub fn error() -> Self {
        Self {
            kind: FeedbackKind::Error,
            message: "Not quite! Try again.".to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == FeedbackKind::Success
    }
}

/// What the feedback area shows. Feedback wins over encouragement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Banner<'a> {
    Feedback(&'a Feedback),
    Encouragement(&'a str),
    Empty,
}

/// Identity of the state an asynchronous result belongs to.
///
/// Bumped on every problem load, submission and exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

/// Work the caller must perform after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEffect {
    /// Fetch a phrase and hand it to [`Session::deliver_encouragement`].
    RequestEncouragement { ticket: Ticket, correct: bool },
    /// After the advance delay, call [`Session::advance`].
    ScheduleAdvance { ticket: Ticket },
}

/// Result of a submission that was not ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub correct: bool,
    pub effects: Vec<SessionEffect>,
}

/// A single-learner game session.
pub struct Session {
    status: GameStatus,
    problem: Option<Problem>,
    input: AnswerInput,
    score: u32,
    streak: u32,
    feedback: Option<Feedback>,
    encouragement: Option<String>,
    epoch: u64,
    advancing: Option<Ticket>,
    rng: StdRng,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Create a session at the menu.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Create a session whose problems come from a seeded RNG.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            status: GameStatus::Menu,
            problem: None,
            input: AnswerInput::default(),
            score: 0,
            streak: 0,
            feedback: None,
            encouragement: None,
            epoch: 0,
            advancing: None,
            rng,
        }
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Start a new game from the menu. Returns false if already playing.
    pub fn start(&mut self) -> bool {
        if self.status == GameStatus::Playing {
            return false;
        }
        self.score = 0;
        self.streak = 0;
        self.advancing = None;
        self.status = GameStatus::Playing;
        tracing::info!("Session started");
        self.load_problem();
        true
    }

    /// Abandon the current problem and return to the menu.
    ///
    /// Any pending advance or encouragement becomes stale. The score is kept
    /// for display until the next start.
    pub fn exit(&mut self) -> bool {
        if self.status != GameStatus::Playing {
            return false;
        }
        self.status = GameStatus::Menu;
        self.problem = None;
        self.input.clear();
        self.feedback = None;
        self.encouragement = None;
        self.advancing = None;
        self.bump();
        tracing::info!(score = self.score, "Session exited to menu");
        true
    }

    /// Append a digit to the answer buffer.
    ///
    /// Ignored outside play, while waiting for the next problem, and once the
    /// buffer holds two digits.
    pub fn press_digit(&mut self, c: char) -> bool {
        if !self.accepts_input() {
            return false;
        }
        self.input.push(c)
    }

    pub fn clear_input(&mut self) {
        if self.accepts_input() {
            self.input.clear();
        }
    }

    /// Check the typed answer against the current problem.
    ///
    /// Returns `None` (and changes nothing) when there is no input, no active
    /// problem, or a correct answer is already waiting to advance.
    pub fn submit_answer(&mut self) -> Option<Submission> {
        if !self.accepts_input() {
            return None;
        }
        let value = self.input.value()?;
        let correct = self.problem.as_ref()?.is_correct(value);

        // Earlier phrases belong to the previous attempt.
        self.encouragement = None;
        let ticket = self.bump();

        let effects = if correct {
            self.score = self.score.saturating_add(POINTS_PER_CORRECT);
            self.streak += 1;
            self.feedback = Some(Feedback::success());
            self.advancing = Some(ticket);
            vec![
                SessionEffect::RequestEncouragement {
                    ticket,
                    correct: true,
                },
                SessionEffect::ScheduleAdvance { ticket },
            ]
        } else {
            self.streak = 0;
            self.feedback = Some(Feedback::error());
            self.input.clear();
            vec![SessionEffect::RequestEncouragement {
                ticket,
                correct: false,
            }]
        };

        tracing::info!(
            answer = value,
            correct,
            score = self.score,
            streak = self.streak,
            "Answer checked"
        );

        Some(Submission { correct, effects })
    }

    /// Apply an encouragement phrase. Returns false if the ticket is stale.
    pub fn deliver_encouragement(&mut self, ticket: Ticket, text: String) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!(?ticket, current = ?self.ticket(), "Discarding stale encouragement");
            return false;
        }
        self.encouragement = Some(text);
        true
    }

    /// Load the next problem after a correct answer. Returns false if the
    /// ticket does not match the pending advance.
    pub fn advance(&mut self, ticket: Ticket) -> bool {
        if self.status != GameStatus::Playing || self.advancing != Some(ticket) {
            tracing::debug!(?ticket, "Discarding stale advance");
            return false;
        }
        self.advancing = None;
        self.load_problem();
        true
    }

    fn load_problem(&mut self) {
        let problem = generate_with_rng(self.score, &mut self.rng);
        tracing::debug!(
            id = %problem.id(),
            num1 = problem.num1(),
            operator = %problem.operator(),
            num2 = problem.num2(),
            tier = ?Tier::for_score(self.score),
            "Problem generated"
        );
        self.problem = Some(problem);
        self.input.clear();
        self.feedback = None;
        self.encouragement = None;
        self.bump();
    }

    fn bump(&mut self) -> Ticket {
        self.epoch += 1;
        Ticket(self.epoch)
    }

    fn accepts_input(&self) -> bool {
        self.status == GameStatus::Playing && self.problem.is_some() && self.advancing.is_none()
    }

    fn is_current(&self, ticket: Ticket) -> bool {
        self.status == GameStatus::Playing && ticket == self.ticket()
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn problem(&self) -> Option<&Problem> {
        self.problem.as_ref()
    }

    pub fn input(&self) -> &AnswerInput {
        &self.input
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    pub fn encouragement(&self) -> Option<&str> {
        self.encouragement.as_deref()
    }

    /// The ticket asynchronous results must carry to be applied.
    pub fn ticket(&self) -> Ticket {
        Ticket(self.epoch)
    }

    /// True between a correct answer and the next problem.
    pub fn is_advancing(&self) -> bool {
        self.advancing.is_some()
    }

    /// Contents of the feedback area.
    pub fn banner(&self) -> Banner<'_> {
        match (&self.feedback, &self.encouragement) {
            (Some(feedback), _) => Banner::Feedback(feedback),
            (None, Some(text)) => Banner::Encouragement(text),
            (None, None) => Banner::Empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{type_number, wrong_answer};

    fn playing() -> Session {
        let mut session = Session::seeded(7);
        assert!(session.start());
        session
    }

    fn answer(session: &mut Session, value: u32) -> Option<Submission> {
        type_number(session, value);
        session.submit_answer()
    }

    fn answer_correctly(session: &mut Session) {
        let value = session.problem().map(Problem::answer).unwrap();
        let submission = answer(session, value).unwrap();
        assert!(submission.correct);
        let ticket = match submission.effects[1] {
            SessionEffect::ScheduleAdvance { ticket } => ticket,
            other => panic!("unexpected effect {other:?}"),
        };
        assert!(session.advance(ticket));
    }

    #[test]
    fn test_new_session_is_at_menu() {
        let session = Session::new();
        assert_eq!(session.status(), GameStatus::Menu);
        assert!(session.problem().is_none());
        assert_eq!(session.banner(), Banner::Empty);
    }

    #[test]
    fn test_start_loads_problem() {
        let session = playing();
        assert_eq!(session.status(), GameStatus::Playing);
        assert!(session.problem().is_some());
        assert_eq!(session.score(), 0);
        assert_eq!(session.streak(), 0);
        assert!(session.input().is_empty());
    }

    #[test]
    fn test_start_while_playing_is_noop() {
        let mut session = playing();
        let id = session.problem().unwrap().id();
        assert!(!session.start());
        assert_eq!(session.problem().unwrap().id(), id);
    }

    #[test]
    fn test_correct_answer_scores_and_advances() {
        let mut session = playing();
        let first = session.problem().unwrap().clone();

        let submission = answer(&mut session, first.answer()).unwrap();
        assert!(submission.correct);
        assert_eq!(session.score(), 10);
        assert_eq!(session.streak(), 1);
        assert!(session.feedback().unwrap().is_success());
        assert!(session.is_advancing());
        // Problem stays up while success feedback shows.
        assert_eq!(session.problem().unwrap().id(), first.id());

        let ticket = session.ticket();
        assert_eq!(
            submission.effects,
            vec![
                SessionEffect::RequestEncouragement {
                    ticket,
                    correct: true
                },
                SessionEffect::ScheduleAdvance { ticket },
            ]
        );

        assert!(session.deliver_encouragement(ticket, "Wow!".to_string()));
        assert!(session.advance(ticket));

        let next = session.problem().unwrap();
        assert_ne!(next.id(), first.id());
        assert!(session.input().is_empty());
        assert!(session.feedback().is_none());
        assert!(session.encouragement().is_none());
        assert!(!session.is_advancing());
    }

    #[test]
    fn test_incorrect_answer_resets_streak() {
        let mut session = playing();
        for _ in 0..3 {
            answer_correctly(&mut session);
        }
        assert_eq!(session.streak(), 3);
        assert_eq!(session.score(), 30);

        let problem = session.problem().unwrap().clone();
        let submission = answer(&mut session, wrong_answer(&problem)).unwrap();
        assert!(!submission.correct);
        assert_eq!(
            submission.effects,
            vec![SessionEffect::RequestEncouragement {
                ticket: session.ticket(),
                correct: false
            }]
        );

        assert_eq!(session.streak(), 0);
        assert_eq!(session.score(), 30);
        assert_eq!(session.feedback(), Some(&Feedback::error()));
        assert_eq!(session.problem(), Some(&problem));
        assert!(session.input().is_empty());
        assert!(!session.is_advancing());
    }

    #[test]
    fn test_retry_after_wrong_answer() {
        let mut session = playing();
        let problem = session.problem().unwrap().clone();
        answer(&mut session, wrong_answer(&problem)).unwrap();

        let submission = answer(&mut session, problem.answer()).unwrap();
        assert!(submission.correct);
        assert_eq!(session.score(), 10);
        assert_eq!(session.streak(), 1);
    }

    #[test]
    fn test_keypad_caps_at_two_digits() {
        let mut session = playing();
        assert!(session.press_digit('1'));
        assert!(session.press_digit('2'));
        assert!(!session.press_digit('3'));
        assert_eq!(session.input().as_str(), "12");

        session.clear_input();
        assert_eq!(session.input().as_str(), "");

        assert!(session.press_digit('0'));
        assert!(!session.press_digit('x'));
        assert_eq!(session.input().as_str(), "0");
    }

    #[test]
    fn test_submit_without_input_is_noop() {
        let mut session = playing();
        let ticket = session.ticket();
        assert!(session.submit_answer().is_none());
        assert_eq!(session.ticket(), ticket);
        assert!(session.feedback().is_none());
    }

    #[test]
    fn test_input_ignored_at_menu() {
        let mut session = Session::seeded(1);
        assert!(!session.press_digit('4'));
        assert!(session.submit_answer().is_none());
    }

    #[test]
    fn test_input_ignored_while_advancing() {
        let mut session = playing();
        let value = session.problem().unwrap().answer();
        answer(&mut session, value).unwrap();

        assert!(!session.press_digit('1'));
        assert!(session.submit_answer().is_none());
        assert_eq!(session.score(), 10);
    }

    #[test]
    fn test_stale_encouragement_is_discarded() {
        let mut session = playing();
        let problem = session.problem().unwrap().clone();

        answer(&mut session, wrong_answer(&problem)).unwrap();
        let first = session.ticket();
        answer(&mut session, wrong_answer(&problem)).unwrap();
        let second = session.ticket();

        assert!(!session.deliver_encouragement(first, "old".to_string()));
        assert!(session.encouragement().is_none());
        assert!(session.deliver_encouragement(second, "new".to_string()));
        assert_eq!(session.encouragement(), Some("new"));
    }

    #[test]
    fn test_encouragement_after_advance_is_discarded() {
        let mut session = playing();
        let value = session.problem().unwrap().answer();
        answer(&mut session, value).unwrap();
        let ticket = session.ticket();

        assert!(session.advance(ticket));
        assert!(!session.deliver_encouragement(ticket, "late".to_string()));
        assert!(session.encouragement().is_none());
    }

    #[test]
    fn test_exit_cancels_pending_work() {
        let mut session = playing();
        let value = session.problem().unwrap().answer();
        answer(&mut session, value).unwrap();
        let ticket = session.ticket();

        assert!(session.exit());
        assert_eq!(session.status(), GameStatus::Menu);
        assert!(session.problem().is_none());
        assert!(!session.advance(ticket));
        assert!(!session.deliver_encouragement(ticket, "late".to_string()));
        assert!(session.problem().is_none());
        assert_eq!(session.score(), 10);

        assert!(session.start());
        assert_eq!(session.score(), 0);
        assert!(session.exit());
        assert!(!session.exit());
    }

    #[test]
    fn test_banner_priority() {
        let mut session = playing();
        let problem = session.problem().unwrap().clone();
        answer(&mut session, wrong_answer(&problem)).unwrap();
        let ticket = session.ticket();
        session.deliver_encouragement(ticket, "You can do it!".to_string());

        assert!(matches!(session.banner(), Banner::Feedback(f) if !f.is_success()));
        assert_eq!(session.encouragement(), Some("You can do it!"));
    }

    #[test]
    fn test_score_reaches_hard_tier() {
        let mut session = playing();
        for _ in 0..5 {
            answer_correctly(&mut session);
        }
        assert_eq!(session.score(), 50);
        assert_eq!(Tier::for_score(session.score()), Tier::Hard);
        let problem = session.problem().unwrap();
        assert!(problem.answer() <= 20);
    }

    #[test]
    fn test_game_over_is_unreachable_default() {
        assert_eq!(GameStatus::default(), GameStatus::Menu);
    }
}
