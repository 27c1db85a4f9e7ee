use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::constants::{
    AVAILABLE_STATUS, DEFAULT_CURRENCY, DEFAULT_PURCHASE_URL, SOLD_STATUS,
};

/// Listing status of a catalogue item.
///
/// Only `sold` has meaning to the shelf; every other value stays visible and is
/// kept verbatim so it can be echoed back.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ItemStatus {
    #[default]
    Available,
    Sold,
    Other(String),
}

impl ItemStatus {
    #[must_use]
    pub const fn is_sold(&self) -> bool {
        matches!(self, Self::Sold)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Available => AVAILABLE_STATUS,
            Self::Sold => SOLD_STATUS,
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for ItemStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            AVAILABLE_STATUS => Self::Available,
            SOLD_STATUS => Self::Sold,
            _ => Self::Other(raw),
        }
    }
}

impl From<ItemStatus> for String {
    fn from(status: ItemStatus) -> Self {
        status.as_str().to_string()
    }
}

/// One book on the shelf, exactly as the catalogue document describes it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(default, deserialize_with = "opaque_id")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: ItemStatus,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub condition: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<String>,
    #[serde(default, alias = "googleFormUrl")]
    pub purchase_link_url: Option<String>,
}

impl Item {
    /// Identifier used for interaction tracking; blank ids count as missing.
    #[must_use]
    pub fn tracking_id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.trim().is_empty())
    }

    #[must_use]
    pub const fn is_sold(&self) -> bool {
        self.status.is_sold()
    }

    /// Price if it is a usable, non-negative number.
    #[must_use]
    pub fn listed_price(&self) -> Option<f64> {
        self.price
            .filter(|price| price.is_finite() && *price >= 0.0)
            .map(|price| if price == 0.0 { 0.0 } else { price })
    }

    #[must_use]
    pub fn currency_code(&self) -> &str {
        non_blank(self.currency.as_deref()).unwrap_or(DEFAULT_CURRENCY)
    }

    /// Display price such as `SGD 12`, or an empty string when unpriced.
    #[must_use]
    pub fn price_label(&self) -> String {
        self.listed_price().map_or_else(String::new, |price| {
            format!("{currency} {price}", currency = self.currency_code())
        })
    }

    /// Purchase link target; falls back to the shared order form.
    #[must_use]
    pub fn purchase_url(&self) -> &str {
        non_blank(self.purchase_link_url.as_deref()).unwrap_or(DEFAULT_PURCHASE_URL)
    }

    #[must_use]
    pub fn summary_text(&self) -> &str {
        self.summary.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn condition_text(&self) -> &str {
        self.condition.as_deref().unwrap_or_default()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Accepts string or numeric ids; anything else is treated as missing.
fn opaque_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(raw)) => Some(raw),
        Some(Value::Number(num)) => Some(num.to_string()),
        _ => None,
    })
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// The whole catalogue document: `{ "books": [...] }`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Catalogue {
    #[serde(default, deserialize_with = "null_as_default")]
    pub books: Vec<Item>,
}

impl Catalogue {
    #[must_use]
    pub const fn empty() -> Self {
        Self { books: Vec::new() }
    }

    /// Parse a catalogue document. A missing `books` list is an empty catalogue.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not JSON or an entry has the wrong shape.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub const fn from_items(books: Vec<Item>) -> Self {
        Self { books }
    }

    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.books
    }

    #[must_use]
    pub fn item(&self, index: usize) -> Option<&Item> {
        self.books.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Items that belong on the shelf, with their catalogue index, in order.
    pub fn visible_items(&self) -> impl Iterator<Item = (usize, &Item)> {
        self.books
            .iter()
            .enumerate()
            .filter(|(_, item)| !item.is_sold())
    }

    #[must_use]
    pub fn sold_count(&self) -> usize {
        self.books.iter().filter(|item| item.is_sold()).count()
    }
}
