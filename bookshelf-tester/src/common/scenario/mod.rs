use anyhow::Result;
use bookshelf_core::Catalogue;
use thirtyfour::prelude::*;

use crate::browser::TestBridge;

pub mod interaction;
pub mod smoke;

use interaction::{BrowserFlow, InteractionScenario};

#[derive(Debug, Clone)]
pub struct ScenarioCtx<'a> {
    pub base_url: String,
    pub catalogue: &'a Catalogue,
    pub bridge: TestBridge<'a>,
    pub verbose: bool,
}

/// Replays an interaction against the headless driver for `catalogue`.
pub type LogicCheck = fn(&Catalogue) -> Result<()>;

// Logic test scenario
#[derive(Debug, Clone)]
pub struct TestScenario {
    pub name: String,
    pub check: LogicCheck,
}

impl TestScenario {
    #[must_use]
    pub fn new(name: impl Into<String>, check: LogicCheck) -> Self {
        Self {
            name: name.into(),
            check,
        }
    }
}

// Browser test scenario
#[async_trait::async_trait]
pub trait BrowserScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()>;
}

// Combined scenario that can run both logic and browser tests
pub trait CombinedScenario: BrowserScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario>;
}

pub const SCENARIO_KEYS: &[&str] = &[
    "smoke",
    "shelf-layout",
    "hover-preview",
    "hover-cancel",
    "stale-timer",
    "detail-open",
    "popup-close-control",
    "escape-dismissal",
    "backdrop-dismissal",
    "purchase-fallback",
];

pub fn get_scenario(name: &str) -> Option<Box<dyn CombinedScenario + Send + Sync>> {
    let scenario = match name.to_lowercase().as_str() {
        "smoke" => return Some(Box::new(smoke::SmokeScenario)),
        "shelf-layout" | "layout" => InteractionScenario::new(
            "Shelf Layout",
            interaction::shelf_layout_check,
            BrowserFlow::ShelfLayout,
        ),
        "hover-preview" | "hover" => InteractionScenario::new(
            "Hover Preview",
            interaction::hover_preview_check,
            BrowserFlow::HoverPreview,
        ),
        "hover-cancel" => InteractionScenario::new(
            "Hover Into Popup Cancels Hide",
            interaction::hover_cancel_check,
            BrowserFlow::HoverCancel,
        ),
        "stale-timer" | "stale" => InteractionScenario::new(
            "Stale Hide Timer Ignored",
            interaction::stale_timer_check,
            BrowserFlow::StaleTimer,
        ),
        "detail-open" | "detail" => InteractionScenario::new(
            "Detail Opens From Tile",
            interaction::detail_open_check,
            BrowserFlow::DetailOpen,
        ),
        "popup-close-control" | "popup-close" => InteractionScenario::new(
            "Popup Close Control",
            interaction::popup_close_check,
            BrowserFlow::PopupCloseControl,
        ),
        "escape-dismissal" | "escape" => InteractionScenario::new(
            "Escape Dismissal",
            interaction::escape_dismissal_check,
            BrowserFlow::EscapeDismissal,
        ),
        "backdrop-dismissal" | "backdrop" => InteractionScenario::new(
            "Backdrop Dismissal",
            interaction::backdrop_dismissal_check,
            BrowserFlow::BackdropDismissal,
        ),
        "purchase-fallback" | "purchase" => InteractionScenario::new(
            "Purchase Link Fallback",
            interaction::purchase_fallback_check,
            BrowserFlow::PurchaseFallback,
        ),
        _ => return None,
    };
    Some(Box::new(scenario))
}

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    vec![
        ("smoke", "Smoke Test"),
        ("shelf-layout", "Shelf Layout"),
        ("hover-preview", "Hover Preview"),
        ("hover-cancel", "Hover Into Popup Cancels Hide"),
        ("stale-timer", "Stale Hide Timer Ignored"),
        ("detail-open", "Detail Opens From Tile"),
        ("popup-close-control", "Popup Close Control"),
        ("escape-dismissal", "Escape Dismissal"),
        ("backdrop-dismissal", "Backdrop Dismissal"),
        ("purchase-fallback", "Purchase Link Fallback"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_scenario_resolves() {
        for (key, title) in list_scenarios() {
            let scenario = get_scenario(key).unwrap_or_else(|| panic!("missing {key}"));
            let logic = scenario.as_logic_scenario().expect("logic scenario");
            assert_eq!(logic.name, title);
        }
    }

    #[test]
    fn keys_match_listing() {
        let listed: Vec<&str> = list_scenarios().into_iter().map(|(key, _)| key).collect();
        assert_eq!(listed, SCENARIO_KEYS);
    }

    #[test]
    fn aliases_and_case_are_accepted() {
        assert!(get_scenario("ESCAPE").is_some());
        assert!(get_scenario("backdrop").is_some());
        assert!(get_scenario("teleport").is_none());
    }
}
