use crate::catalogue::Catalogue;
use crate::session::{Effect, ShelfEvent, ShelfSession};
use crate::timer::VirtualTimers;

/// Headless host for a [`ShelfSession`].
///
/// Performs every [`Effect`] against a [`VirtualTimers`] clock so interaction
/// sequences can be replayed deterministically.
#[derive(Debug, Clone)]
pub struct ShelfDriver {
    session: ShelfSession,
    timers: VirtualTimers<ShelfEvent>,
    honor_cancellations: bool,
}

impl Default for ShelfDriver {
    fn default() -> Self {
        Self {
            session: ShelfSession::new(),
            timers: VirtualTimers::new(),
            honor_cancellations: true,
        }
    }
}

impl ShelfDriver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_catalogue(catalogue: Catalogue) -> Self {
        let mut driver = Self::new();
        driver.dispatch(ShelfEvent::CatalogueLoaded(catalogue));
        driver
    }

    /// Keep every armed hide timer alive, even after it was cancelled or
    /// replaced. Stale timers then really fire and must be rejected by ticket.
    #[must_use]
    pub const fn lenient(mut self) -> Self {
        self.honor_cancellations = false;
        self
    }

    #[must_use]
    pub const fn session(&self) -> &ShelfSession {
        &self.session
    }

    #[must_use]
    pub const fn now_ms(&self) -> u64 {
        self.timers.now_ms()
    }

    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.pending_count()
    }

    pub fn dispatch(&mut self, event: ShelfEvent) {
        let effects = self.session.apply(event);
        self.perform(effects);
    }

    /// Move the clock forward, firing due timers in order.
    pub fn advance(&mut self, ms: u32) {
        let until = self.timers.now_ms() + u64::from(ms);
        while let Some(event) = self.timers.pop_due(until) {
            self.dispatch(event);
        }
        self.timers.set_now(until);
    }

    /// Dispatch for the shelved item with `id`. Unknown ids are ignored.
    pub fn dispatch_for(&mut self, id: &str, event: impl FnOnce(usize) -> ShelfEvent) {
        if let Some(index) = self.session.index_of(id) {
            self.dispatch(event(index));
        }
    }

    fn perform(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::ScheduleHide(hide) => {
                    if self.honor_cancellations {
                        self.timers
                            .cancel_matching(|event| matches!(event, ShelfEvent::HideElapsed(_)));
                    }
                    self.timers
                        .arm(hide.delay_ms, ShelfEvent::HideElapsed(hide.ticket));
                }
                Effect::CancelHide(ticket) => {
                    if self.honor_cancellations {
                        self.timers
                            .cancel_matching(|event| *event == ShelfEvent::HideElapsed(ticket));
                    }
                }
                Effect::StartPickup { index, delay_ms } => {
                    self.timers
                        .cancel_matching(|event| matches!(event, ShelfEvent::PickupFinished(_)));
                    self.timers.arm(delay_ms, ShelfEvent::PickupFinished(index));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{HIDE_DELAY_MS, PICKUP_DURATION_MS};

    fn driver() -> ShelfDriver {
        let catalogue = Catalogue::from_json(
            r#"{"books": [{"id": "a", "title": "A"}, {"id": "b", "title": "B"}]}"#,
        )
        .unwrap();
        ShelfDriver::with_catalogue(catalogue)
    }

    #[test]
    fn hide_fires_after_delay() {
        let mut driver = driver();
        driver.dispatch_for("a", ShelfEvent::TileEnter);
        driver.dispatch_for("a", ShelfEvent::TileLeave);
        driver.advance(HIDE_DELAY_MS - 1);
        assert!(driver.session().popup().is_open());
        driver.advance(1);
        assert!(!driver.session().popup().is_open());
        assert_eq!(driver.pending_timers(), 0);
    }

    #[test]
    fn cancellation_clears_timer() {
        let mut driver = driver();
        driver.dispatch_for("a", ShelfEvent::TileEnter);
        driver.dispatch_for("a", ShelfEvent::TileLeave);
        driver.dispatch(ShelfEvent::PopupEnter);
        assert_eq!(driver.pending_timers(), 0);
    }

    #[test]
    fn lenient_driver_keeps_stale_timers() {
        let mut driver = driver().lenient();
        driver.dispatch_for("a", ShelfEvent::TileEnter);
        driver.dispatch_for("a", ShelfEvent::TileLeave);
        driver.dispatch_for("b", ShelfEvent::TileEnter);
        assert_eq!(driver.pending_timers(), 1);
        driver.advance(HIDE_DELAY_MS);
        assert_eq!(driver.pending_timers(), 0);
        assert!(driver.session().popup().is_open());
    }

    #[test]
    fn pickup_opens_detail_after_transition() {
        let mut driver = driver();
        driver.dispatch_for("b", ShelfEvent::TileClick);
        driver.advance(PICKUP_DURATION_MS);
        assert_eq!(driver.session().detail_view().unwrap().title, "B");
        assert_eq!(driver.now_ms(), u64::from(PICKUP_DURATION_MS));
    }
}
