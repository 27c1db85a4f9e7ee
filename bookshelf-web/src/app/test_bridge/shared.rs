use bookshelf_core::ShelfSession;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeTile {
    pub id: Option<String>,
    pub title: String,
}

/// Snapshot returned by `window.__bookshelfTest.state()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BridgeState {
    pub load: String,
    pub tiles: Vec<BridgeTile>,
    pub rows: usize,
    pub sold: usize,
    pub popup: Option<String>,
    pub modal: Option<String>,
    pub pickup: Option<usize>,
}

impl BridgeState {
    #[must_use]
    pub fn capture(session: &ShelfSession) -> Self {
        let layout = session.layout();
        let active_id = |item: Option<&bookshelf_core::Item>| {
            item.and_then(|item| item.tracking_id().map(str::to_string))
        };
        Self {
            load: session.load_state().label().to_string(),
            tiles: layout
                .tiles()
                .map(|tile| BridgeTile {
                    id: tile.id.clone(),
                    title: tile.title.clone(),
                })
                .collect(),
            rows: layout.row_count(),
            sold: layout.sold_count,
            popup: active_id(session.popup().active()),
            modal: active_id(session.modal().active()),
            pickup: session.pickup(),
        }
    }
}

/// `true` when the page query asks for the test bridge (`test=1`).
#[must_use]
pub fn test_mode_requested(search: &str) -> bool {
    search
        .trim_start_matches('?')
        .split('&')
        .any(|pair| pair == "test=1")
}
