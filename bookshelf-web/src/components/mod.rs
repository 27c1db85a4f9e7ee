pub mod book_tile;
pub mod detail_modal;
pub mod header;
pub mod shelf;
pub mod status_banner;
pub mod summary_popup;
