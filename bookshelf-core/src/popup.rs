use crate::catalogue::Item;
use crate::constants::HIDE_DELAY_MS;
use crate::timer::{HideTicket, ScheduledHide, TicketCounter};

/// Text shown in the summary popup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryView {
    pub title: String,
    pub price: String,
    pub summary: String,
}

impl SummaryView {
    #[must_use]
    pub fn from_item(item: &Item) -> Self {
        Self {
            title: item.title.clone(),
            price: item.price_label(),
            summary: item.summary_text().to_string(),
        }
    }
}

/// Hover/touch preview shared by every tile.
///
/// Holds at most one active item and at most one live [`HideTicket`]. A hide
/// only takes effect when the ticket that fires is still the live one, so a
/// timer armed for a previous hover can never close a newer preview.
#[derive(Debug, Clone, Default)]
pub struct SummaryPopup {
    active: Option<Item>,
    pending: Option<HideTicket>,
    tickets: TicketCounter,
}

impl SummaryPopup {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.active.is_some()
    }

    #[must_use]
    pub const fn active(&self) -> Option<&Item> {
        self.active.as_ref()
    }

    #[must_use]
    pub const fn pending_hide(&self) -> Option<HideTicket> {
        self.pending
    }

    /// Show `item`, replacing whatever was shown. Returns the hide that was
    /// cancelled, if any.
    pub fn show(&mut self, item: Item) -> Option<HideTicket> {
        let cancelled = self.pending.take();
        self.active = Some(item);
        cancelled
    }

    /// Arm the delayed hide. Does nothing while the popup is closed.
    pub fn schedule_hide(&mut self) -> Option<ScheduledHide> {
        self.active.as_ref()?;
        let ticket = self.tickets.issue();
        self.pending = Some(ticket);
        Some(ScheduledHide {
            ticket,
            delay_ms: HIDE_DELAY_MS,
        })
    }

    pub fn cancel_hide(&mut self) -> Option<HideTicket> {
        self.pending.take()
    }

    /// Close immediately. Returns the hide that no longer needs to fire.
    pub fn close(&mut self) -> Option<HideTicket> {
        self.active = None;
        self.pending.take()
    }

    /// Timer callback. Returns `true` when the popup was closed by it.
    pub fn hide_elapsed(&mut self, ticket: HideTicket) -> bool {
        if self.pending != Some(ticket) {
            return false;
        }
        self.close();
        true
    }

    /// Item a click on the popup body should open in detail.
    #[must_use]
    pub const fn click_target(&self) -> Option<&Item> {
        self.active.as_ref()
    }

    #[must_use]
    pub fn view(&self) -> Option<SummaryView> {
        self.active.as_ref().map(SummaryView::from_item)
    }
}
