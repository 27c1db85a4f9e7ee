use std::cell::RefCell;
use std::rc::Rc;

use bookshelf_core::{Effect, ShelfEvent, ShelfSession};
use yew::prelude::*;

use crate::dom;

/// Live browser timers. A timer leaves its slot when it fires or is cleared,
/// which drops its callback.
#[derive(Debug, Default)]
struct HostTimers {
    hide: Option<dom::Timeout>,
    pickup: Option<dom::Timeout>,
}

/// Shared handle to the page session.
///
/// Event handlers and timer callbacks all dispatch through the same handle;
/// every dispatch re-renders the page.
#[derive(Clone)]
pub struct SessionHandle {
    session: Rc<RefCell<ShelfSession>>,
    timers: Rc<RefCell<HostTimers>>,
    refresh: Callback<()>,
}

impl PartialEq for SessionHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.session, &other.session)
    }
}

impl SessionHandle {
    #[must_use]
    pub fn new(session: ShelfSession, refresh: Callback<()>) -> Self {
        Self {
            session: Rc::new(RefCell::new(session)),
            timers: Rc::new(RefCell::new(HostTimers::default())),
            refresh,
        }
    }

    /// Read the session without holding the borrow past `f`.
    pub fn with<R>(&self, f: impl FnOnce(&ShelfSession) -> R) -> R {
        f(&self.session.borrow())
    }

    pub fn dispatch(&self, event: ShelfEvent) {
        let effects = self.session.borrow_mut().apply(event);
        for effect in effects {
            self.perform(effect);
        }
        self.refresh.emit(());
    }

    #[must_use]
    pub fn dispatcher(&self) -> Callback<ShelfEvent> {
        let handle = self.clone();
        Callback::from(move |event| handle.dispatch(event))
    }

    fn perform(&self, effect: Effect) {
        match effect {
            Effect::ScheduleHide(hide) => {
                self.clear_hide_timer();
                let handle = self.clone();
                match dom::set_timeout(hide.delay_ms, move || {
                    let fired = handle.timers.borrow_mut().hide.take();
                    handle.dispatch(ShelfEvent::HideElapsed(hide.ticket));
                    drop(fired);
                }) {
                    Ok(timeout) => self.timers.borrow_mut().hide = Some(timeout),
                    Err(err) => log::warn!("Failed to schedule popup hide: {err}"),
                }
            }
            Effect::CancelHide(_) => self.clear_hide_timer(),
            Effect::StartPickup { index, delay_ms } => {
                let superseded = self.timers.borrow_mut().pickup.take();
                drop(superseded);
                let handle = self.clone();
                match dom::set_timeout(delay_ms, move || {
                    let fired = handle.timers.borrow_mut().pickup.take();
                    handle.dispatch(ShelfEvent::PickupFinished(index));
                    drop(fired);
                }) {
                    Ok(timeout) => self.timers.borrow_mut().pickup = Some(timeout),
                    Err(err) => {
                        log::warn!("Pickup transition unavailable, opening detail: {err}");
                        self.dispatch(ShelfEvent::PickupFinished(index));
                    }
                }
            }
        }
    }

    fn clear_hide_timer(&self) {
        let cleared = self.timers.borrow_mut().hide.take();
        drop(cleared);
    }

    /// Number of handles sharing this session, pending timer callbacks included.
    #[must_use]
    pub fn live_clones(&self) -> usize {
        Rc::strong_count(&self.session)
    }

    #[cfg(test)]
    fn armed_timers(&self) -> usize {
        let timers = self.timers.borrow();
        usize::from(timers.hide.is_some()) + usize::from(timers.pickup.is_some())
    }
}

/// Session for the lifetime of the calling component.
#[hook]
pub fn use_shelf_session() -> SessionHandle {
    let update = use_force_update();
    let handle = use_state(move || {
        SessionHandle::new(
            ShelfSession::new(),
            Callback::from(move |()| update.force_update()),
        )
    });
    (*handle).clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookshelf_core::Catalogue;
    use std::cell::Cell;

    fn handle_with_counter() -> (SessionHandle, Rc<Cell<usize>>) {
        let renders = Rc::new(Cell::new(0));
        let counter = renders.clone();
        let handle = SessionHandle::new(
            ShelfSession::new(),
            Callback::from(move |()| counter.set(counter.get() + 1)),
        );
        let catalogue =
            Catalogue::from_json(r#"{"books": [{"id": "a", "title": "Alpha"}]}"#).unwrap();
        handle.dispatch(ShelfEvent::CatalogueLoaded(catalogue));
        (handle, renders)
    }

    #[test]
    fn every_dispatch_requests_a_render() {
        let (handle, renders) = handle_with_counter();
        handle.dispatch(ShelfEvent::TileEnter(0));
        assert_eq!(renders.get(), 2);
        assert!(handle.with(|session| session.popup().is_open()));
    }

    #[test]
    fn pickup_without_timers_opens_detail_immediately() {
        let (handle, _) = handle_with_counter();
        handle.dispatch(ShelfEvent::TileClick(0));
        assert!(handle.with(|session| session.modal().is_open()));
        assert_eq!(handle.with(ShelfSession::pickup), None);
    }

    #[test]
    fn failed_hide_timer_leaves_popup_open() {
        let (handle, _) = handle_with_counter();
        handle.dispatch(ShelfEvent::TileEnter(0));
        handle.dispatch(ShelfEvent::TileLeave(0));
        assert!(handle.with(|session| session.popup().is_open()));
        handle.dispatch(ShelfEvent::PopupCloseClick);
        assert!(!handle.with(|session| session.popup().is_open()));
    }

    #[test]
    fn unscheduled_timers_hold_no_session_references() {
        let (handle, _) = handle_with_counter();
        handle.dispatch(ShelfEvent::TileEnter(0));
        handle.dispatch(ShelfEvent::TileLeave(0));
        handle.dispatch(ShelfEvent::PopupEnter);
        handle.dispatch(ShelfEvent::TileClick(0));
        assert_eq!(handle.armed_timers(), 0);
        assert_eq!(handle.live_clones(), 1);
        assert_eq!(Rc::strong_count(&handle.timers), 1);
    }

    #[test]
    fn handles_compare_by_session_identity() {
        let (handle, _) = handle_with_counter();
        let other = SessionHandle::new(ShelfSession::new(), Callback::noop());
        assert!(handle == handle.clone());
        assert!(handle != other);
    }
}
