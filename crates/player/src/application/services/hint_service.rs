//! Hint economy - budget and cooldown, mirrored from the backend.
//!
//! The budget is server-authoritative: nothing is decremented locally. The
//! countdown between authoritative refreshes is display-only; when it
//! reaches zero it posts [`TimerSignal::CooldownElapsed`] so the controller
//! reconciles with one `fetch_state` instead of assuming `Available`.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::application::dto::{ControlMsg, GameEvent, HintPhase, HintStatus, TimerSignal};
use crate::infrastructure::EventBus;

pub struct HintService {
    bus: EventBus,
    signals: UnboundedSender<ControlMsg>,
    phase: HintPhase,
    hints_remaining: u32,
    cooldown_seconds: u32,
    countdown: Option<CancellationToken>,
}

impl HintService {
    pub fn new(bus: EventBus, signals: UnboundedSender<ControlMsg>) -> Self {
        Self {
            bus,
            signals,
            phase: HintPhase::Exhausted,
            hints_remaining: 0,
            cooldown_seconds: 0,
            countdown: None,
        }
    }

    pub fn status(&self) -> HintStatus {
        HintStatus {
            phase: self.phase,
            hints_remaining: self.hints_remaining,
            cooldown_seconds: self.cooldown_seconds,
        }
    }

    /// Whether a hint request is currently permitted.
    pub fn can_request(&self) -> bool {
        self.phase == HintPhase::Available
    }

    /// Authoritative values from a session fetch. Supersedes any running
    /// countdown and restarts it when a cooldown remains.
    pub async fn sync_from_session(&mut self, hints_remaining: u32, cooldown_seconds: u32) {
        self.cancel_countdown();
        self.hints_remaining = hints_remaining;
        self.cooldown_seconds = cooldown_seconds;
        self.phase = phase_for(hints_remaining, cooldown_seconds);
        if cooldown_seconds > 0 {
            self.start_countdown(cooldown_seconds);
        }
        self.publish_status().await;
    }

    /// Enter the transient `Requesting` sub-state. Returns `false` (and
    /// changes nothing) unless a hint is currently available, so a request
    /// outside `Available` produces no network call and no state change.
    pub async fn begin_request(&mut self) -> bool {
        if !self.can_request() {
            debug!(phase = ?self.phase, "hint request ignored");
            return false;
        }
        self.phase = HintPhase::Requesting;
        self.publish_status().await;
        true
    }

    /// Apply a granted hint: show the text verbatim, adopt the
    /// server-returned budget and cooldown, and start the local countdown
    /// when one applies.
    pub async fn apply_grant(&mut self, hint: &str, hints_remaining: u32, cooldown_seconds: u32) {
        self.bus
            .dispatch(GameEvent::HintRevealed(hint.to_string()))
            .await;
        self.sync_from_session(hints_remaining, cooldown_seconds).await;
    }

    /// A failed request re-enables the affordance; budget and cooldown are
    /// left exactly as they were.
    pub async fn fail_request(&mut self) {
        if self.phase == HintPhase::Requesting {
            self.phase = phase_for(self.hints_remaining, self.cooldown_seconds);
            self.publish_status().await;
        }
    }

    /// Stop the countdown without touching budget/cooldown values.
    /// Explicit and idempotent; used when leaving the session view.
    pub fn cancel_countdown(&mut self) {
        if let Some(token) = self.countdown.take() {
            token.cancel();
        }
    }

    /// Drop all hint state (session ended).
    pub async fn reset(&mut self) {
        self.cancel_countdown();
        self.hints_remaining = 0;
        self.cooldown_seconds = 0;
        self.phase = HintPhase::Exhausted;
        self.publish_status().await;
    }

    fn start_countdown(&mut self, seconds: u32) {
        let token = CancellationToken::new();
        let child = token.clone();
        let bus = self.bus.clone();
        let signals = self.signals.clone();
        self.countdown = Some(token);

        tokio::spawn(async move {
            let mut remaining = seconds;
            let mut tick = tokio::time::interval(Duration::from_secs(1));
            // The first tick of a tokio interval completes immediately.
            tick.tick().await;
            loop {
                tokio::select! {
                    _ = child.cancelled() => return,
                    _ = tick.tick() => {
                        remaining = remaining.saturating_sub(1);
                        bus.dispatch(GameEvent::HintCooldownTick(remaining)).await;
                        if remaining == 0 {
                            let _ = signals.send(ControlMsg::Timer(TimerSignal::CooldownElapsed));
                            return;
                        }
                    }
                }
            }
        });
    }

    async fn publish_status(&self) {
        self.bus
            .dispatch(GameEvent::HintStatusChanged(self.status()))
            .await;
    }
}

fn phase_for(hints_remaining: u32, cooldown_seconds: u32) -> HintPhase {
    if cooldown_seconds > 0 {
        HintPhase::OnCooldown
    } else if hints_remaining == 0 {
        HintPhase::Exhausted
    } else {
        HintPhase::Available
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tokio::sync::mpsc;

    async fn service() -> (
        HintService,
        mpsc::UnboundedReceiver<ControlMsg>,
        Arc<Mutex<Vec<GameEvent>>>,
    ) {
        let bus = EventBus::new();
        let (tx, rx) = mpsc::unbounded_channel();
        let events = Arc::new(Mutex::new(Vec::new()));
        let service = HintService::new(bus.clone(), tx);
        let sink = Arc::clone(&events);
        bus.subscribe(move |event| sink.lock().expect("lock").push(event))
            .await;
        (service, rx, events)
    }

    #[tokio::test]
    async fn phases_follow_budget_and_cooldown() {
        let (mut hints, _rx, _events) = service().await;
        hints.sync_from_session(3, 0).await;
        assert_eq!(hints.status().phase, HintPhase::Available);
        hints.sync_from_session(0, 0).await;
        assert_eq!(hints.status().phase, HintPhase::Exhausted);
        hints.sync_from_session(2, 15).await;
        assert_eq!(hints.status().phase, HintPhase::OnCooldown);
        hints.cancel_countdown();
    }

    #[tokio::test]
    async fn requests_are_only_permitted_when_available() {
        let (mut hints, _rx, _events) = service().await;
        hints.sync_from_session(0, 0).await;
        assert!(!hints.begin_request().await);

        hints.sync_from_session(1, 10).await;
        assert!(!hints.begin_request().await);
        hints.cancel_countdown();

        hints.sync_from_session(1, 0).await;
        assert!(hints.begin_request().await);
        // A second request while one is in flight is also refused.
        assert!(!hints.begin_request().await);
    }

    #[tokio::test]
    async fn a_grant_that_exhausts_the_budget_lands_in_exhausted() {
        let (mut hints, _rx, _events) = service().await;
        hints.sync_from_session(1, 0).await;
        assert!(hints.begin_request().await);
        hints.apply_grant("The torch is more than light.", 0, 0).await;
        assert_eq!(hints.status().phase, HintPhase::Exhausted);
        assert!(!hints.begin_request().await);
    }

    #[tokio::test]
    async fn a_failed_request_restores_the_previous_phase() {
        let (mut hints, _rx, _events) = service().await;
        hints.sync_from_session(2, 0).await;
        assert!(hints.begin_request().await);
        hints.fail_request().await;
        let status = hints.status();
        assert_eq!(status.phase, HintPhase::Available);
        assert_eq!(status.hints_remaining, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn the_countdown_ticks_once_per_second_and_signals_at_zero() {
        let (mut hints, mut rx, events) = service().await;
        tokio::task::yield_now().await;
        hints.sync_from_session(2, 3).await;

        // Let the spawned countdown task start waiting.
        tokio::task::yield_now().await;
        tokio::time::advance(Duration::from_secs(3)).await;
        tokio::task::yield_now().await;

        let signal = rx.recv().await.expect("signal");
        assert_eq!(signal, ControlMsg::Timer(TimerSignal::CooldownElapsed));

        let ticks: Vec<u32> = events
            .lock()
            .expect("lock")
            .iter()
            .filter_map(|event| match event {
                GameEvent::HintCooldownTick(remaining) => Some(*remaining),
                _ => None,
            })
            .collect();
        assert_eq!(ticks, vec![2, 1, 0]);
    }

    #[tokio::test(start_paused = true)]
    async fn a_fresh_sync_supersedes_the_running_countdown() {
        let (mut hints, mut rx, _events) = service().await;
        hints.sync_from_session(2, 30).await;
        tokio::task::yield_now().await;

        // Authoritative refresh arrives with a shorter cooldown.
        hints.sync_from_session(2, 1).await;
        tokio::task::yield_now().await;
        tokio::time::advance(Duration::from_secs(2)).await;
        tokio::task::yield_now().await;

        // Only the replacement countdown signals; the first was cancelled.
        let signal = rx.recv().await.expect("signal");
        assert_eq!(signal, ControlMsg::Timer(TimerSignal::CooldownElapsed));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn cancel_is_idempotent() {
        let (mut hints, _rx, _events) = service().await;
        hints.sync_from_session(1, 20).await;
        hints.cancel_countdown();
        hints.cancel_countdown();
        assert_eq!(hints.status().phase, HintPhase::OnCooldown);
    }
}
