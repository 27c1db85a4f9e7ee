use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::catalogue::{Catalogue, Item};
use crate::constants::{MIN_ROWS, ROW_CAPACITY};

/// A rendered book on the shelf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShelfTile {
    /// Position of the item in the catalogue, used to route tile events.
    pub index: usize,
    pub id: Option<String>,
    pub title: String,
}

impl ShelfTile {
    fn from_item(index: usize, item: &Item) -> Self {
        Self {
            index,
            id: item.tracking_id().map(str::to_string),
            title: item.title.clone(),
        }
    }

    /// Tiles without an id render but do not take part in interaction.
    #[must_use]
    pub const fn is_interactive(&self) -> bool {
        self.id.is_some()
    }
}

/// One shelf row. Padding rows have no tiles.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ShelfRow {
    pub tiles: SmallVec<[ShelfTile; ROW_CAPACITY]>,
}

impl ShelfRow {
    #[must_use]
    pub fn is_padding(&self) -> bool {
        self.tiles.is_empty()
    }
}

/// Row partition of the visible catalogue plus the sold counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShelfLayout {
    pub rows: Vec<ShelfRow>,
    pub sold_count: usize,
}

impl Default for ShelfLayout {
    fn default() -> Self {
        Self::build(&[])
    }
}

impl ShelfLayout {
    /// Standard shelf: four books per row, at least four rows.
    #[must_use]
    pub fn build(items: &[Item]) -> Self {
        Self::with_limits(items, ROW_CAPACITY, MIN_ROWS)
    }

    #[must_use]
    pub fn from_catalogue(catalogue: &Catalogue) -> Self {
        Self::build(catalogue.items())
    }

    /// Partition with a custom geometry. A zero capacity is treated as one.
    #[must_use]
    pub fn with_limits(items: &[Item], capacity: usize, min_rows: usize) -> Self {
        let capacity = capacity.max(1);
        let visible: Vec<ShelfTile> = items
            .iter()
            .enumerate()
            .filter(|(_, item)| !item.is_sold())
            .map(|(index, item)| ShelfTile::from_item(index, item))
            .collect();

        let mut rows: Vec<ShelfRow> = visible
            .chunks(capacity)
            .map(|chunk| ShelfRow {
                tiles: chunk.iter().cloned().collect(),
            })
            .collect();
        if rows.len() < min_rows {
            rows.resize_with(min_rows, ShelfRow::default);
        }

        Self {
            rows,
            sold_count: items.iter().filter(|item| item.is_sold()).count(),
        }
    }

    pub fn tiles(&self) -> impl Iterator<Item = &ShelfTile> {
        self.rows.iter().flat_map(|row| row.tiles.iter())
    }

    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.rows.iter().map(|row| row.tiles.len()).sum()
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn padding_rows(&self) -> usize {
        self.rows.iter().filter(|row| row.is_padding()).count()
    }
}
