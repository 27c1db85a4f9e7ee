//! Fixed layout, timing and fallback values for the bookshelf.
//!
//! None of these come from the catalogue document.

// Shelf geometry -----------------------------------------------------------
/// Tiles per shelf row; the final row may hold fewer.
pub const ROW_CAPACITY: usize = 4;
/// Rows always rendered, padded with empty rows when the catalogue is small.
pub const MIN_ROWS: usize = 4;

// Timing -------------------------------------------------------------------
/// Delay before the summary popup hides after the pointer leaves.
pub const HIDE_DELAY_MS: u32 = 400;
/// Length of the cosmetic "pickup" transition played before opening detail.
pub const PICKUP_DURATION_MS: u32 = 230;

// Fallbacks ----------------------------------------------------------------
/// Currency code shown when an item does not carry one.
pub const DEFAULT_CURRENCY: &str = "SGD";
/// Purchase form used when an item has no link of its own.
pub const DEFAULT_PURCHASE_URL: &str = "https://forms.gle/tCc7eWueQTcFyh488";
/// Gallery placeholder for items without photos.
pub const NO_PHOTOS_TEXT: &str = "No photos yet";

// Catalogue ----------------------------------------------------------------
/// Catalogue document path, relative to the deployment base.
pub const CATALOGUE_PATH: &str = "books.json";
/// Status value that removes an item from the shelf and counts it as sold.
pub const SOLD_STATUS: &str = "sold";
/// Status assumed when the document omits one.
pub const AVAILABLE_STATUS: &str = "available";

// Keys ---------------------------------------------------------------------
pub const ESCAPE_KEY: &str = "Escape";
