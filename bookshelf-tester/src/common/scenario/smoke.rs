use anyhow::Result;
use bookshelf_core::{Catalogue, ShelfDriver, ShelfLayout};
use std::collections::HashSet;
use std::time::Duration;
use thirtyfour::prelude::*;

use super::{BrowserScenario, CombinedScenario, ScenarioCtx, TestScenario};

pub struct SmokeScenario;

const LOAD_TIMEOUT: Duration = Duration::from_secs(10);

#[async_trait::async_trait]
impl BrowserScenario for SmokeScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        driver.goto(&ctx.base_url).await?;

        let _shelf = driver.find(By::Id("bookshelf")).await?;

        ctx.bridge.ensure_available().await?;

        let state = ctx
            .bridge
            .wait_for("catalogue load", LOAD_TIMEOUT, |s| s.is_loaded())
            .await?;
        if ctx.verbose {
            println!("  🌐 Page loaded, bridge connected, state: {state:?}");
        }

        anyhow::ensure!(
            state.load == "ready",
            "Catalogue should load, got '{}'",
            state.load
        );

        let expected = ShelfLayout::from_catalogue(ctx.catalogue);
        anyhow::ensure!(
            state.tiles.len() == expected.tile_count(),
            "Expected {} tiles on the shelf, got {}",
            expected.tile_count(),
            state.tiles.len()
        );
        anyhow::ensure!(
            state.popup.is_none() && state.modal.is_none(),
            "No overlay should be open after load"
        );

        let hidden_popup = driver.find(By::Css("#summary-popup.hidden")).await;
        anyhow::ensure!(hidden_popup.is_ok(), "Summary popup should start hidden");

        Ok(())
    }
}

impl CombinedScenario for SmokeScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new("Smoke Test", smoke_expectation))
    }
}

fn smoke_expectation(catalogue: &Catalogue) -> Result<()> {
    let driver = ShelfDriver::with_catalogue(catalogue.clone());
    let session = driver.session();

    anyhow::ensure!(
        session.load_state().label() == "ready",
        "Catalogue should be accepted, got '{}'",
        session.load_state().label()
    );
    anyhow::ensure!(
        session.popup().active().is_none() && !session.modal().is_open(),
        "No overlay should be open after load"
    );
    anyhow::ensure!(
        driver.pending_timers() == 0,
        "Loading should not arm timers, found {}",
        driver.pending_timers()
    );

    let mut seen = HashSet::new();
    for item in catalogue.items() {
        if let Some(id) = item.tracking_id() {
            anyhow::ensure!(seen.insert(id), "Duplicate book id '{id}'");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smoke_scenario_exposes_logic_check() {
        let logic = SmokeScenario.as_logic_scenario().expect("logic scenario");
        assert_eq!(logic.name, "Smoke Test");
    }

    #[test]
    fn smoke_expectation_accepts_distinct_ids() {
        let catalogue =
            Catalogue::from_json(r#"{"books": [{"id": "a"}, {"id": "b"}, {"title": "no id"}]}"#)
                .unwrap();
        smoke_expectation(&catalogue).expect("smoke ok");
    }

    #[test]
    fn smoke_expectation_rejects_duplicate_ids() {
        let catalogue =
            Catalogue::from_json(r#"{"books": [{"id": "a"}, {"id": "a"}]}"#).unwrap();
        let err = smoke_expectation(&catalogue).expect_err("duplicate should fail");
        assert!(err.to_string().contains("Duplicate book id 'a'"));
    }
}
