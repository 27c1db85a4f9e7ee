//! Timer bookkeeping shared by every host.
//!
//! The core never sleeps. It hands out [`HideTicket`]s and the host arms a
//! real timer (browser `setTimeout`) or a [`VirtualTimers`] entry, reporting
//! back with the ticket when it fires.

use serde::{Deserialize, Serialize};

/// Identity of one armed auto-hide. Only the most recent ticket is live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HideTicket(u64);

impl HideTicket {
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

/// Request to call back with `ticket` after `delay_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledHide {
    pub ticket: HideTicket,
    pub delay_ms: u32,
}

/// Monotonic ticket source owned by the popup controller.
#[derive(Debug, Clone, Default)]
pub(crate) struct TicketCounter {
    next: u64,
}

impl TicketCounter {
    pub(crate) const fn issue(&mut self) -> HideTicket {
        self.next = self.next.wrapping_add(1);
        HideTicket(self.next)
    }
}

/// Handle for an entry in [`VirtualTimers`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

#[derive(Debug, Clone)]
struct PendingTimer<T> {
    id: TimerId,
    due_ms: u64,
    payload: T,
}

/// Deterministic millisecond clock with one-shot timers.
///
/// Timers due at the same instant fire in the order they were armed.
#[derive(Debug, Clone)]
pub struct VirtualTimers<T> {
    now_ms: u64,
    next_id: u64,
    pending: Vec<PendingTimer<T>>,
}

impl<T> Default for VirtualTimers<T> {
    fn default() -> Self {
        Self {
            now_ms: 0,
            next_id: 0,
            pending: Vec::new(),
        }
    }
}

impl<T> VirtualTimers<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn now_ms(&self) -> u64 {
        self.now_ms
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn arm(&mut self, delay_ms: u32, payload: T) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        self.pending.push(PendingTimer {
            id,
            due_ms: self.now_ms + u64::from(delay_ms),
            payload,
        });
        id
    }

    /// Returns `true` if the timer was still pending.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|timer| timer.id != id);
        before != self.pending.len()
    }

    pub fn cancel_matching(&mut self, mut predicate: impl FnMut(&T) -> bool) -> usize {
        let before = self.pending.len();
        self.pending.retain(|timer| !predicate(&timer.payload));
        before - self.pending.len()
    }

    /// Pop the earliest timer due at or before `until_ms`, moving the clock to
    /// its due time. The clock never moves backwards.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<T> {
        let position = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, timer)| timer.due_ms <= until_ms)
            .min_by_key(|(_, timer)| (timer.due_ms, timer.id.0))
            .map(|(position, _)| position)?;
        let timer = self.pending.remove(position);
        self.now_ms = self.now_ms.max(timer.due_ms);
        Some(timer.payload)
    }

    pub fn set_now(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tickets_are_unique_and_increasing() {
        let mut counter = TicketCounter::default();
        let first = counter.issue();
        let second = counter.issue();
        assert!(second > first);
        assert_ne!(first, second);
    }

    #[test]
    fn pops_in_due_order_then_arm_order() {
        let mut timers = VirtualTimers::new();
        timers.arm(400, "late");
        timers.arm(100, "early");
        timers.arm(100, "early-second");

        assert_eq!(timers.pop_due(50), None);
        assert_eq!(timers.pop_due(1_000), Some("early"));
        assert_eq!(timers.now_ms(), 100);
        assert_eq!(timers.pop_due(1_000), Some("early-second"));
        assert_eq!(timers.pop_due(1_000), Some("late"));
        assert_eq!(timers.now_ms(), 400);
        assert_eq!(timers.pop_due(1_000), None);
    }

    #[test]
    fn cancelled_timers_never_fire() {
        let mut timers = VirtualTimers::new();
        let id = timers.arm(10, 1);
        timers.arm(10, 2);
        assert!(timers.cancel(id));
        assert!(!timers.cancel(id));
        assert_eq!(timers.cancel_matching(|n| *n == 2), 1);
        assert_eq!(timers.pop_due(100), None);
    }

    #[test]
    fn arming_is_relative_to_current_time() {
        let mut timers = VirtualTimers::new();
        timers.set_now(1_000);
        timers.arm(400, ());
        assert_eq!(timers.pop_due(1_399), None);
        assert_eq!(timers.pop_due(1_400), Some(()));
    }
}
