//! Bookshelf Core
//!
//! Platform-agnostic catalogue model and interaction logic for the bookshelf
//! page. Hosts feed [`ShelfEvent`]s into a [`ShelfSession`] and carry out the
//! returned [`Effect`]s; nothing here touches a DOM or a real clock.

pub mod catalogue;
pub mod constants;
pub mod dismissal;
pub mod driver;
pub mod loader;
pub mod modal;
pub mod popup;
pub mod session;
pub mod shelf;
pub mod timer;

// Re-export commonly used types
pub use catalogue::{Catalogue, Item, ItemStatus};
pub use dismissal::{ClickTarget, Dismissal, DismissalHandler};
pub use driver::ShelfDriver;
pub use loader::{CatalogueError, CatalogueSource, LoadState, load_catalogue};
pub use modal::{DetailModal, DetailView, Gallery, GalleryImage};
pub use popup::{SummaryPopup, SummaryView};
pub use session::{Effect, ShelfEvent, ShelfSession};
pub use shelf::{ShelfLayout, ShelfRow, ShelfTile};
pub use timer::{HideTicket, ScheduledHide, TimerId, VirtualTimers};
