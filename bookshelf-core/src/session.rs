use crate::catalogue::{Catalogue, Item};
use crate::constants::PICKUP_DURATION_MS;
use crate::dismissal::{ClickTarget, DismissalHandler};
use crate::loader::{CatalogueError, LoadState};
use crate::modal::{DetailModal, DetailView};
use crate::popup::{SummaryPopup, SummaryView};
use crate::shelf::ShelfLayout;
use crate::timer::{HideTicket, ScheduledHide};

/// Everything that can happen to the page, in host-neutral terms.
///
/// Tile events carry the item's catalogue index (see `ShelfTile::index`).
#[derive(Debug, Clone, PartialEq)]
pub enum ShelfEvent {
    CatalogueLoaded(Catalogue),
    CatalogueFailed(String),
    /// Pointer entered a tile, or a touch started on it.
    TileEnter(usize),
    /// Pointer left a tile, or a touch on it ended.
    TileLeave(usize),
    TileClick(usize),
    PickupFinished(usize),
    /// Open detail straight away, skipping the pickup transition.
    OpenDetail(usize),
    PopupEnter,
    PopupLeave,
    PopupBodyClick,
    PopupCloseClick,
    ModalClick(ClickTarget),
    ModalCloseClick,
    KeyDown(String),
    HideElapsed(HideTicket),
}

impl ShelfEvent {
    #[must_use]
    pub fn from_load(result: Result<Catalogue, CatalogueError>) -> Self {
        match result {
            Ok(catalogue) => Self::CatalogueLoaded(catalogue),
            Err(err) => Self::CatalogueFailed(err.to_string()),
        }
    }
}

/// Side effects the host must carry out after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Arm a one-shot timer that reports `HideElapsed(ticket)`. Replaces any
    /// earlier hide timer.
    ScheduleHide(ScheduledHide),
    /// The timer for `ticket` no longer matters and may be cleared.
    CancelHide(HideTicket),
    /// Play the pickup transition on a tile, then report `PickupFinished`.
    StartPickup { index: usize, delay_ms: u32 },
}

/// Interaction state for one page lifetime.
#[derive(Debug, Clone, Default)]
pub struct ShelfSession {
    load: LoadState,
    catalogue: Catalogue,
    layout: ShelfLayout,
    popup: SummaryPopup,
    modal: DetailModal,
    pickup: Option<usize>,
}

impl ShelfSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn load_state(&self) -> &LoadState {
        &self.load
    }

    #[must_use]
    pub const fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    #[must_use]
    pub const fn layout(&self) -> &ShelfLayout {
        &self.layout
    }

    #[must_use]
    pub const fn popup(&self) -> &SummaryPopup {
        &self.popup
    }

    #[must_use]
    pub const fn modal(&self) -> &DetailModal {
        &self.modal
    }

    /// Tile currently playing the pickup transition.
    #[must_use]
    pub const fn pickup(&self) -> Option<usize> {
        self.pickup
    }

    #[must_use]
    pub fn summary_view(&self) -> Option<SummaryView> {
        self.popup.view()
    }

    #[must_use]
    pub fn detail_view(&self) -> Option<DetailView> {
        self.modal.view()
    }

    /// Catalogue index of the shelved item with `id`.
    #[must_use]
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.layout
            .tiles()
            .find(|tile| tile.id.as_deref() == Some(id))
            .map(|tile| tile.index)
    }

    fn tracked_item(&self, index: usize) -> Option<&Item> {
        self.catalogue
            .item(index)
            .filter(|item| !item.is_sold() && item.tracking_id().is_some())
    }

    pub fn apply(&mut self, event: ShelfEvent) -> Vec<Effect> {
        let mut effects = Vec::new();
        match event {
            ShelfEvent::CatalogueLoaded(catalogue) => self.accept_catalogue(catalogue),
            ShelfEvent::CatalogueFailed(message) => self.reject_catalogue(message),
            ShelfEvent::TileEnter(index) => {
                if let Some(item) = self.tracked_item(index).cloned() {
                    push_cancel(&mut effects, self.popup.show(item));
                }
            }
            ShelfEvent::TileLeave(index) => {
                if self.tracked_item(index).is_some() {
                    self.schedule_hide(&mut effects);
                }
            }
            ShelfEvent::TileClick(index) => {
                if self.tracked_item(index).is_some() {
                    self.pickup = Some(index);
                    effects.push(Effect::StartPickup {
                        index,
                        delay_ms: PICKUP_DURATION_MS,
                    });
                }
            }
            ShelfEvent::PickupFinished(index) => {
                if self.pickup == Some(index) {
                    self.open_detail(index, &mut effects);
                }
            }
            ShelfEvent::OpenDetail(index) => self.open_detail(index, &mut effects),
            ShelfEvent::PopupEnter => push_cancel(&mut effects, self.popup.cancel_hide()),
            ShelfEvent::PopupLeave => self.schedule_hide(&mut effects),
            ShelfEvent::PopupBodyClick => {
                if let Some(item) = self.popup.click_target().cloned() {
                    self.show_detail(item, &mut effects);
                }
            }
            ShelfEvent::PopupCloseClick => {
                let outcome = DismissalHandler::popup_close_control(&mut self.popup);
                push_cancel(&mut effects, outcome.cancelled_hide);
            }
            ShelfEvent::ModalClick(target) => {
                if !DismissalHandler::modal_click(target, &mut self.modal).is_noop() {
                    self.pickup = None;
                }
            }
            ShelfEvent::ModalCloseClick => {
                self.modal.close();
                self.pickup = None;
            }
            ShelfEvent::KeyDown(key) => {
                let outcome = DismissalHandler::key_down(&key, &mut self.popup, &mut self.modal);
                if !outcome.is_noop() {
                    self.pickup = None;
                }
                push_cancel(&mut effects, outcome.cancelled_hide);
            }
            ShelfEvent::HideElapsed(ticket) => {
                self.popup.hide_elapsed(ticket);
            }
        }
        effects
    }

    fn accept_catalogue(&mut self, catalogue: Catalogue) {
        if !self.load.is_pending() {
            log::warn!("Ignoring catalogue delivered after load already resolved");
            return;
        }
        self.layout = ShelfLayout::from_catalogue(&catalogue);
        self.catalogue = catalogue;
        self.load = LoadState::Ready;
    }

    fn reject_catalogue(&mut self, message: String) {
        if !self.load.is_pending() {
            log::warn!("Ignoring late catalogue failure: {message}");
            return;
        }
        self.load = LoadState::Failed(message);
    }

    fn schedule_hide(&mut self, effects: &mut Vec<Effect>) {
        if let Some(hide) = self.popup.schedule_hide() {
            effects.push(Effect::ScheduleHide(hide));
        }
    }

    fn open_detail(&mut self, index: usize, effects: &mut Vec<Effect>) {
        if let Some(item) = self.tracked_item(index).cloned() {
            self.show_detail(item, effects);
        }
    }

    /// Single entry into the detail view. Drops any pending pickup.
    fn show_detail(&mut self, item: Item, effects: &mut Vec<Effect>) {
        self.pickup = None;
        let cancelled = self.modal.open(item, &mut self.popup);
        push_cancel(effects, cancelled);
    }
}

fn push_cancel(effects: &mut Vec<Effect>, ticket: Option<HideTicket>) {
    if let Some(ticket) = ticket {
        effects.push(Effect::CancelHide(ticket));
    }
}
