use crate::catalogue::Item;
use crate::popup::SummaryPopup;
use crate::timer::HideTicket;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
}

/// Photos in catalogue order, or the "no photos" placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gallery {
    Photos(Vec<GalleryImage>),
    Empty,
}

impl Gallery {
    fn from_item(item: &Item) -> Self {
        if item.images.is_empty() {
            return Self::Empty;
        }
        Self::Photos(
            item.images
                .iter()
                .map(|src| GalleryImage {
                    src: src.clone(),
                    alt: item.title.clone(),
                })
                .collect(),
        )
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Photos(images) => images.len(),
            Self::Empty => 0,
        }
    }
}

/// Everything the detail modal displays for one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub title: String,
    pub price: String,
    pub condition: String,
    pub summary: String,
    /// Item link, or the shared order form when the item has none.
    pub purchase_url: String,
    pub gallery: Gallery,
}

impl DetailView {
    #[must_use]
    pub fn from_item(item: &Item) -> Self {
        Self {
            title: item.title.clone(),
            price: item.price_label(),
            condition: item.condition_text().to_string(),
            summary: item.summary_text().to_string(),
            purchase_url: item.purchase_url().to_string(),
            gallery: Gallery::from_item(item),
        }
    }
}

/// Full-detail overlay shared by every tile.
#[derive(Debug, Clone, Default)]
pub struct DetailModal {
    active: Option<Item>,
}

impl DetailModal {
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

    /// Close the summary popup, then show `item` in place of any prior content.
    /// Returns the popup hide that no longer needs to fire.
    pub fn open(&mut self, item: Item, popup: &mut SummaryPopup) -> Option<HideTicket> {
        let cancelled = popup.close();
        self.active = Some(item);
        cancelled
    }

    /// Returns `true` if the modal was open.
    pub fn close(&mut self) -> bool {
        self.active.take().is_some()
    }

    #[must_use]
    pub fn view(&self) -> Option<DetailView> {
        self.active.as_ref().map(DetailView::from_item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_PURCHASE_URL;

    fn dune() -> Item {
        Item {
            id: Some(String::from("b1")),
            title: String::from("Dune"),
            price: Some(12.0),
            condition: Some(String::from("Worn spine")),
            images: vec![String::from("front.jpg"), String::from("back.jpg")],
            ..Item::default()
        }
    }

    #[test]
    fn open_closes_popup_first() {
        let mut popup = SummaryPopup::new();
        let mut modal = DetailModal::new();
        popup.show(dune());
        let hide = popup.schedule_hide().unwrap();

        assert_eq!(modal.open(dune(), &mut popup), Some(hide.ticket));
        assert!(!popup.is_open());
        assert!(modal.is_open());
    }

    #[test]
    fn view_lists_images_in_order_with_title_alt() {
        let mut popup = SummaryPopup::new();
        let mut modal = DetailModal::new();
        modal.open(dune(), &mut popup);
        let view = modal.view().unwrap();
        assert_eq!(view.price, "SGD 12");
        assert_eq!(view.condition, "Worn spine");
        let Gallery::Photos(images) = view.gallery else {
            panic!("expected photos");
        };
        assert_eq!(images[0].src, "front.jpg");
        assert_eq!(images[1].src, "back.jpg");
        assert!(images.iter().all(|img| img.alt == "Dune"));
    }

    #[test]
    fn empty_images_use_placeholder_and_default_link() {
        let item = Item {
            id: Some(String::from("x")),
            ..Item::default()
        };
        let view = DetailView::from_item(&item);
        assert!(view.gallery.is_empty());
        assert_eq!(view.gallery.len(), 0);
        assert_eq!(view.purchase_url, DEFAULT_PURCHASE_URL);
    }

    #[test]
    fn open_replaces_prior_content() {
        let mut popup = SummaryPopup::new();
        let mut modal = DetailModal::new();
        modal.open(dune(), &mut popup);
        let other = Item {
            id: Some(String::from("b2")),
            title: String::from("Foundation"),
            ..Item::default()
        };
        modal.open(other, &mut popup);
        let view = modal.view().unwrap();
        assert_eq!(view.title, "Foundation");
        assert!(view.gallery.is_empty());
    }

    #[test]
    fn close_leaves_popup_alone() {
        let mut popup = SummaryPopup::new();
        let mut modal = DetailModal::new();
        modal.open(dune(), &mut popup);
        popup.show(dune());
        assert!(modal.close());
        assert!(!modal.close());
        assert!(popup.is_open());
    }
}
