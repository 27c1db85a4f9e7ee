//! Escape and outside-click rules for both overlays.
//!
//! The handler never reaches into controller state; it only calls their
//! `close()` operations and reports what changed.

use crate::constants::ESCAPE_KEY;
use crate::modal::DetailModal;
use crate::popup::SummaryPopup;
use crate::timer::HideTicket;

/// Where a click on the detail modal landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The dimmed overlay around the dialog.
    Backdrop,
    /// Anything inside the dialog itself.
    Content,
}

/// Outcome of one dismissal attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dismissal {
    pub modal_closed: bool,
    pub popup_closed: bool,
    /// Popup hide made obsolete by the dismissal.
    pub cancelled_hide: Option<HideTicket>,
}

impl Dismissal {
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        !self.modal_closed && !self.popup_closed
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DismissalHandler;

impl DismissalHandler {
    /// Document-level key handler. Escape closes both overlays every time.
    pub fn key_down(key: &str, popup: &mut SummaryPopup, modal: &mut DetailModal) -> Dismissal {
        if key != ESCAPE_KEY {
            return Dismissal::default();
        }
        let popup_was_open = popup.is_open();
        let modal_closed = modal.close();
        let cancelled_hide = popup.close();
        Dismissal {
            modal_closed,
            popup_closed: popup_was_open,
            cancelled_hide,
        }
    }

    /// Click handler for the modal layer: only the backdrop dismisses.
    pub fn modal_click(target: ClickTarget, modal: &mut DetailModal) -> Dismissal {
        match target {
            ClickTarget::Backdrop => Dismissal {
                modal_closed: modal.close(),
                ..Dismissal::default()
            },
            ClickTarget::Content => Dismissal::default(),
        }
    }

    /// The popup's own close control. Never opens detail.
    pub fn popup_close_control(popup: &mut SummaryPopup) -> Dismissal {
        let popup_closed = popup.is_open();
        Dismissal {
            popup_closed,
            cancelled_hide: popup.close(),
            ..Dismissal::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::Item;

    fn item() -> Item {
        Item {
            id: Some(String::from("a")),
            ..Item::default()
        }
    }

    #[test]
    fn escape_closes_both_overlays() {
        let mut popup = SummaryPopup::new();
        let mut modal = DetailModal::new();
        modal.open(item(), &mut popup);
        popup.show(item());

        let outcome = DismissalHandler::key_down("Escape", &mut popup, &mut modal);
        assert!(outcome.modal_closed);
        assert!(outcome.popup_closed);
        assert!(!popup.is_open());
        assert!(!modal.is_open());
    }

    #[test]
    fn escape_with_nothing_open_is_noop() {
        let mut popup = SummaryPopup::new();
        let mut modal = DetailModal::new();
        let outcome = DismissalHandler::key_down("Escape", &mut popup, &mut modal);
        assert!(outcome.is_noop());
    }

    #[test]
    fn other_keys_are_ignored() {
        let mut popup = SummaryPopup::new();
        let mut modal = DetailModal::new();
        popup.show(item());
        let outcome = DismissalHandler::key_down("Enter", &mut popup, &mut modal);
        assert!(outcome.is_noop());
        assert!(popup.is_open());
    }

    #[test]
    fn escape_reports_cancelled_hide() {
        let mut popup = SummaryPopup::new();
        let mut modal = DetailModal::new();
        popup.show(item());
        let hide = popup.schedule_hide().unwrap();
        let outcome = DismissalHandler::key_down("Escape", &mut popup, &mut modal);
        assert_eq!(outcome.cancelled_hide, Some(hide.ticket));
        assert!(!outcome.modal_closed);
    }

    #[test]
    fn only_backdrop_clicks_close_modal() {
        let mut popup = SummaryPopup::new();
        let mut modal = DetailModal::new();
        modal.open(item(), &mut popup);

        assert!(DismissalHandler::modal_click(ClickTarget::Content, &mut modal).is_noop());
        assert!(modal.is_open());

        let outcome = DismissalHandler::modal_click(ClickTarget::Backdrop, &mut modal);
        assert!(outcome.modal_closed);
        assert!(!modal.is_open());
    }

    #[test]
    fn popup_close_control_closes_only_popup() {
        let mut popup = SummaryPopup::new();
        let mut modal = DetailModal::new();
        popup.show(item());
        let outcome = DismissalHandler::popup_close_control(&mut popup);
        assert!(outcome.popup_closed);
        assert!(!modal.is_open());
        assert!(!popup.is_open());
        assert!(!modal.close());
    }
}
