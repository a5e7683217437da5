//! Runs session effects on the tokio runtime.
//!
//! The driver owns the [`Session`] and is the only thing that mutates it.
//! Encouragement requests and the advance timer run as spawned tasks that
//! report back over a channel; results are applied when the owner calls
//! [`GameDriver::pump`] or awaits [`GameDriver::next_event`], so state changes
//! stay on the owner's task.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::config::GameConfig;
use crate::encourage::{fetch_encouragement, Encourager};
use crate::session::{Session, SessionEffect, Ticket};

/// Completion of a spawned effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriverEvent {
    Encouragement { ticket: Ticket, text: String },
    AdvanceDue { ticket: Ticket },
}

/// Owns a session and executes its effects.
pub struct GameDriver {
    session: Session,
    encourager: Arc<dyn Encourager>,
    advance_delay: Duration,
    encouragement_timeout: Duration,
    events_tx: mpsc::UnboundedSender<DriverEvent>,
    events_rx: mpsc::UnboundedReceiver<DriverEvent>,
    tasks: Vec<JoinHandle<()>>,
}

impl GameDriver {
    /// Create a driver. Must be called from within a tokio runtime before any
    /// effect runs.
    pub fn new(session: Session, encourager: Arc<dyn Encourager>, config: &GameConfig) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            session,
            encourager,
            advance_delay: config.advance_delay,
            encouragement_timeout: config.encouragement_timeout,
            events_tx,
            events_rx,
            tasks: Vec::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn start(&mut self) -> bool {
        self.session.start()
    }

    /// Return to the menu, cancelling in-flight requests and timers.
    pub fn exit(&mut self) -> bool {
        if !self.session.exit() {
            return false;
        }
        for task in self.tasks.drain(..) {
            task.abort();
        }
        // Anything already queued is stale now.
        while self.events_rx.try_recv().is_ok() {}
        true
    }

    pub fn press_digit(&mut self, c: char) -> bool {
        self.session.press_digit(c)
    }

    pub fn clear_input(&mut self) {
        self.session.clear_input();
    }

    /// Submit the typed answer. Returns whether it was correct, or `None` if
    /// the submission was ignored.
    pub fn submit(&mut self) -> Option<bool> {
        let submission = self.session.submit_answer()?;
        for effect in submission.effects {
            self.run_effect(effect);
        }
        Some(submission.correct)
    }

    fn run_effect(&mut self, effect: SessionEffect) {
        self.tasks.retain(|task| !task.is_finished());
        let tx = self.events_tx.clone();

        let task = match effect {
            SessionEffect::RequestEncouragement { ticket, correct } => {
                let encourager = Arc::clone(&self.encourager);
                let timeout = self.encouragement_timeout;
                tokio::spawn(async move {
                    let text = fetch_encouragement(encourager.as_ref(), correct, timeout).await;
                    let _ = tx.send(DriverEvent::Encouragement { ticket, text });
                })
            }
            SessionEffect::ScheduleAdvance { ticket } => {
                let delay = self.advance_delay;
                tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    let _ = tx.send(DriverEvent::AdvanceDue { ticket });
                })
            }
        };
        self.tasks.push(task);
    }

    /// Apply one completed effect. Returns whether the session changed.
    pub fn apply(&mut self, event: DriverEvent) -> bool {
        match event {
            DriverEvent::Encouragement { ticket, text } => {
                self.session.deliver_encouragement(ticket, text)
            }
            DriverEvent::AdvanceDue { ticket } => {
                let advanced = self.session.advance(ticket);
                if advanced {
                    tracing::debug!(?ticket, "Advanced to next problem");
                }
                advanced
            }
        }
    }

    /// Apply every completed effect without waiting. Returns whether the
    /// session changed.
    pub fn pump(&mut self) -> bool {
        let mut changed = false;
        while let Ok(event) = self.events_rx.try_recv() {
            changed |= self.apply(event);
        }
        changed
    }

    /// Apply one completed effect if one is queued. Returns whether the
    /// session changed, or `None` if nothing was queued.
    pub fn try_next_event(&mut self) -> Option<bool> {
        let event = self.events_rx.try_recv().ok()?;
        Some(self.apply(event))
    }

    /// Wait for the next completed effect and apply it. Returns whether the
    /// session changed.
    pub async fn next_event(&mut self) -> bool {
        match self.events_rx.recv().await {
            Some(event) => self.apply(event),
            None => false,
        }
    }

    /// True while a spawned effect has not reported back.
    pub fn has_pending(&mut self) -> bool {
        self.tasks.retain(|task| !task.is_finished());
        !self.tasks.is_empty()
    }

    /// Wait until every in-flight effect has been applied.
    pub async fn settle(&mut self) {
        loop {
            self.pump();
            if !self.has_pending() {
                self.pump();
                return;
            }
            self.next_event().await;
        }
    }
}

impl Drop for GameDriver {
    fn drop(&mut self) {
        for task in &self.tasks {
            task.abort();
        }
    }
}
