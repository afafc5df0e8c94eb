//! Loading sequencer - transient holding screen while the backend
//! generates a session.
//!
//! Cycles display strings on a fixed interval and posts
//! [`TimerSignal::LoadingDeadline`] exactly once after the fixed total
//! duration, however many message cycles occurred. Purely time- and
//! message-driven; no game-state coupling.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio_util::sync::CancellationToken;

use crate::application::dto::{ControlMsg, GameEvent, TimerSignal};
use crate::infrastructure::EventBus;

pub const MESSAGE_INTERVAL: Duration = Duration::from_secs(2);
pub const TOTAL_DURATION: Duration = Duration::from_secs(10);

pub const DEFAULT_MESSAGES: &[&str] = &[
    "Reticulating splines...",
    "Generating narrative paradoxes...",
    "Hiding keys in obvious places...",
    "Polishing virtual dust...",
    "Teaching AI to count on its fingers...",
    "Finalizing your impending doom...",
];

pub struct LoadingService {
    bus: EventBus,
    signals: UnboundedSender<ControlMsg>,
    messages: Vec<String>,
    running: Option<CancellationToken>,
}

impl LoadingService {
    pub fn new(bus: EventBus, signals: UnboundedSender<ControlMsg>) -> Self {
        Self::with_messages(
            bus,
            signals,
            DEFAULT_MESSAGES.iter().map(|m| m.to_string()).collect(),
        )
    }

    /// Use a server-supplied message list instead of the built-in one.
    pub fn with_messages(
        bus: EventBus,
        signals: UnboundedSender<ControlMsg>,
        messages: Vec<String>,
    ) -> Self {
        Self {
            bus,
            signals,
            messages,
            running: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// Begin a loading sequence. A sequence already running is cancelled
    /// first so two cyclers never overlap. An empty message list still
    /// honors the deadline.
    pub fn start(&mut self) {
        self.cancel();
        let token = CancellationToken::new();
        let child = token.clone();
        let bus = self.bus.clone();
        let signals = self.signals.clone();
        let messages = self.messages.clone();
        self.running = Some(token);

        tokio::spawn(async move {
            let deadline = tokio::time::sleep(TOTAL_DURATION);
            tokio::pin!(deadline);
            let mut cycle = tokio::time::interval(MESSAGE_INTERVAL);
            let mut index = 0usize;
            loop {
                tokio::select! {
                    _ = child.cancelled() => return,
                    _ = &mut deadline => {
                        let _ = signals.send(ControlMsg::Timer(TimerSignal::LoadingDeadline));
                        return;
                    }
                    _ = cycle.tick() => {
                        if !messages.is_empty() {
                            let message = messages[index % messages.len()].clone();
                            index += 1;
                            bus.dispatch(GameEvent::LoadingMessage(message)).await;
                        }
                    }
                }
            }
        });
    }

    /// Stop the sequence without signalling completion. Idempotent.
    pub fn cancel(&mut self) {
        if let Some(token) = self.running.take() {
            token.cancel();
        }
    }

    /// Called by the controller when the deadline signal arrives, so a
    /// replaced token is not kept around.
    pub fn mark_finished(&mut self) {
        self.running = None;
    }
}
