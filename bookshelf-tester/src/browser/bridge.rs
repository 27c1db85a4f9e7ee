use std::time::{Duration, Instant};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use thirtyfour::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BridgeTile {
    pub id: Option<String>,
    pub title: String,
}

/// Mirror of the page's `__bookshelfTest.state()` snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ShelfState {
    pub load: String,
    pub tiles: Vec<BridgeTile>,
    pub rows: usize,
    pub sold: usize,
    pub popup: Option<String>,
    pub modal: Option<String>,
    pub pickup: Option<usize>,
}

impl ShelfState {
    pub fn is_loaded(&self) -> bool {
        self.load != "pending"
    }
}

const POLL_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug, Clone)]
pub struct TestBridge<'a> {
    driver: &'a WebDriver,
}

impl<'a> TestBridge<'a> {
    pub const fn new(driver: &'a WebDriver) -> Self {
        Self { driver }
    }

    pub async fn ensure_available(&self) -> Result<()> {
        let result = self
            .driver
            .execute("return !!window.__bookshelfTest", vec![])
            .await?;
        let ok = result.json().as_bool().unwrap_or(false);
        if !ok {
            bail!("__bookshelfTest is not available. Did you pass ?test=1 in the base URL?");
        }
        Ok(())
    }

    pub async fn state(&self) -> Result<ShelfState> {
        let result = self
            .driver
            .execute("return window.__bookshelfTest.state()", vec![])
            .await?;
        let v = result.json().clone();
        serde_json::from_value(v).context("parsing ShelfState")
    }

    pub async fn escape(&self) -> Result<()> {
        self.driver
            .execute("window.__bookshelfTest.escape()", vec![])
            .await?;
        Ok(())
    }

    /// Open the detail modal for `id` without the pickup transition.
    pub async fn open(&self, id: &str) -> Result<()> {
        self.driver
            .execute("window.__bookshelfTest.open(arguments[0])", vec![id.into()])
            .await?;
        Ok(())
    }

    /// Poll `state()` until `predicate` holds or `timeout` passes.
    pub async fn wait_for(
        &self,
        what: &str,
        timeout: Duration,
        predicate: impl Fn(&ShelfState) -> bool,
    ) -> Result<ShelfState> {
        let deadline = Instant::now() + timeout;
        loop {
            let state = self.state().await?;
            if predicate(&state) {
                return Ok(state);
            }
            if Instant::now() >= deadline {
                bail!("timed out after {timeout:?} waiting for {what}; last state: {state:?}");
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_bridge_snapshot() {
        let state: ShelfState = serde_json::from_value(json!({
            "load": "ready",
            "tiles": [{ "id": "b1", "title": "Dune" }],
            "rows": 4,
            "sold": 1,
            "popup": "b1",
            "modal": null,
            "pickup": null
        }))
        .expect("parse state");
        assert!(state.is_loaded());
        assert_eq!(state.tiles[0].title, "Dune");
        assert_eq!(state.popup.as_deref(), Some("b1"));
    }

    #[test]
    fn pending_state_is_not_loaded() {
        let state = ShelfState {
            load: String::from("pending"),
            ..ShelfState::default()
        };
        assert!(!state.is_loaded());
    }
}
