//! Page navigator - finite-state controller over pages and wizard steps.
//!
//! Modal-style pages (settings, load-game) do not overwrite the remembered
//! return page, so closing them goes back to wherever the player was.

use tracing::debug;

use crate::application::dto::{GameEvent, Page};
use crate::infrastructure::EventBus;

pub const WIZARD_STEPS: u8 = 3;

pub struct NavigationService {
    bus: EventBus,
    current: Page,
    last_non_modal: Page,
    wizard_step: u8,
}

impl NavigationService {
    pub fn new(bus: EventBus) -> Self {
        Self {
            bus,
            current: Page::Start,
            last_non_modal: Page::Start,
            wizard_step: 1,
        }
    }

    pub fn current_page(&self) -> Page {
        self.current
    }

    /// Valid only while the design page is active.
    pub fn wizard_step(&self) -> u8 {
        self.wizard_step
    }

    /// Activate `page` and deactivate every other. The previous page is
    /// recorded for modal return unless it was itself modal-style.
    /// Entering the design page always resets the wizard to step 1.
    pub async fn show_page(&mut self, page: Page) {
        if !self.current.is_modal() {
            self.last_non_modal = self.current;
        }
        self.current = page;
        debug!(page = page.as_str(), "page changed");
        self.bus.dispatch(GameEvent::PageChanged(page)).await;

        if page == Page::Design {
            self.wizard_step = 1;
            self.bus.dispatch(GameEvent::WizardStepChanged(1)).await;
        }
    }

    /// Jump to a wizard step. A step that does not exist, or a jump while
    /// the design page is not active, is a no-op.
    pub async fn go_to_step(&mut self, step: u8) {
        if self.current != Page::Design || step == 0 || step > WIZARD_STEPS {
            debug!(step, "ignoring invalid wizard step");
            return;
        }
        self.wizard_step = step;
        self.bus.dispatch(GameEvent::WizardStepChanged(step)).await;
    }

    /// Return from a modal-style page to the page beneath it. A no-op when
    /// the current page is not modal.
    pub async fn close_modal(&mut self) {
        if self.current.is_modal() {
            self.show_page(self.last_non_modal).await;
        }
    }

    /// Drop back to the start page (used when no active session exists).
    pub async fn reset(&mut self) {
        self.last_non_modal = Page::Start;
        self.show_page(Page::Start).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    async fn subscribed(service: &NavigationService) -> Arc<Mutex<Vec<GameEvent>>> {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);
        service
            .bus
            .subscribe(move |event| sink.lock().expect("lock").push(event))
            .await;
        events
    }

    #[tokio::test]
    async fn modal_pages_do_not_overwrite_the_return_page() {
        let mut nav = NavigationService::new(EventBus::new());
        nav.show_page(Page::GameMode).await;
        nav.show_page(Page::Settings).await;
        nav.show_page(Page::LoadGame).await;
        nav.close_modal().await;
        assert_eq!(nav.current_page(), Page::GameMode);
    }

    #[tokio::test]
    async fn close_modal_outside_a_modal_is_a_no_op() {
        let mut nav = NavigationService::new(EventBus::new());
        nav.show_page(Page::Design).await;
        nav.close_modal().await;
        assert_eq!(nav.current_page(), Page::Design);
    }

    #[tokio::test]
    async fn entering_the_design_page_resets_the_wizard_step() {
        let mut nav = NavigationService::new(EventBus::new());
        nav.show_page(Page::Design).await;
        nav.go_to_step(3).await;
        assert_eq!(nav.wizard_step(), 3);
        nav.show_page(Page::Start).await;
        nav.show_page(Page::Design).await;
        assert_eq!(nav.wizard_step(), 1);
    }

    #[tokio::test]
    async fn out_of_range_steps_are_ignored() {
        let mut nav = NavigationService::new(EventBus::new());
        nav.show_page(Page::Design).await;
        nav.go_to_step(0).await;
        assert_eq!(nav.wizard_step(), 1);
        nav.go_to_step(4).await;
        assert_eq!(nav.wizard_step(), 1);
    }

    #[tokio::test]
    async fn steps_are_ignored_outside_the_design_page() {
        let mut nav = NavigationService::new(EventBus::new());
        nav.show_page(Page::Session).await;
        nav.go_to_step(2).await;
        assert_eq!(nav.wizard_step(), 1);
    }

    #[tokio::test]
    async fn page_changes_are_published() {
        let mut nav = NavigationService::new(EventBus::new());
        let events = subscribed(&nav).await;
        nav.show_page(Page::Design).await;
        let seen = events.lock().expect("lock").clone();
        assert_eq!(
            seen,
            vec![
                GameEvent::PageChanged(Page::Design),
                GameEvent::WizardStepChanged(1),
            ]
        );
    }
}
