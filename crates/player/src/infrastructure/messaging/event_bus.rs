//! Event bus for state-change notifications.
//!
//! Push-based: subscribers register callbacks that are invoked for every
//! [`GameEvent`] a component publishes. The bus holds strong references to
//! subscribers, so they persist until the bus is dropped.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::application::dto::GameEvent;

#[derive(Clone, Default)]
pub struct EventBus {
    subscribers: Arc<Mutex<Vec<Box<dyn FnMut(GameEvent) + Send + 'static>>>>,
}

impl EventBus {
    /// Create a new EventBus with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to all events.
    ///
    /// The callback is invoked for every event published by any component.
    pub async fn subscribe(&self, callback: impl FnMut(GameEvent) + Send + 'static) {
        self.subscribers.lock().await.push(Box::new(callback));
    }

    /// Dispatch an event to all subscribers.
    pub async fn dispatch(&self, event: GameEvent) {
        let mut subscribers = self.subscribers.lock().await;
        for subscriber in subscribers.iter_mut() {
            subscriber(event.clone());
        }
    }

    /// Get the number of subscribers.
    pub async fn subscriber_count(&self) -> usize {
        self.subscribers.lock().await.len()
    }
}
