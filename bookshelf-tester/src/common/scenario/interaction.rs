//! Scenarios for the shelf's pointer, keyboard and dismissal behaviour.
//!
//! Each one has a headless check replayed through [`ShelfDriver`] and a
//! browser flow that drives the real page.

use anyhow::{Context, Result};
use bookshelf_core::constants::{
    DEFAULT_PURCHASE_URL, ESCAPE_KEY, HIDE_DELAY_MS, MIN_ROWS, NO_PHOTOS_TEXT, PICKUP_DURATION_MS,
    ROW_CAPACITY,
};
use bookshelf_core::{Catalogue, ClickTarget, Gallery, ShelfDriver, ShelfEvent, ShelfLayout, ShelfTile};
use std::time::{Duration, Instant};
use thirtyfour::prelude::*;

use super::{BrowserScenario, CombinedScenario, LogicCheck, ScenarioCtx, TestScenario};

const STATE_TIMEOUT: Duration = Duration::from_secs(5);
const SETTLE: Duration = Duration::from_millis(150);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserFlow {
    ShelfLayout,
    HoverPreview,
    HoverCancel,
    StaleTimer,
    DetailOpen,
    PopupCloseControl,
    EscapeDismissal,
    BackdropDismissal,
    PurchaseFallback,
}

#[derive(Debug, Clone)]
pub struct InteractionScenario {
    name: &'static str,
    check: LogicCheck,
    flow: BrowserFlow,
}

impl InteractionScenario {
    pub const fn new(name: &'static str, check: LogicCheck, flow: BrowserFlow) -> Self {
        Self { name, check, flow }
    }
}

#[async_trait::async_trait]
impl BrowserScenario for InteractionScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        driver.goto(&ctx.base_url).await?;
        ctx.bridge.ensure_available().await?;
        ctx.bridge
            .wait_for("catalogue load", STATE_TIMEOUT, |s| s.is_loaded())
            .await?;

        match self.flow {
            BrowserFlow::ShelfLayout => shelf_layout_flow(driver, ctx).await,
            BrowserFlow::HoverPreview => hover_preview_flow(driver, ctx).await,
            BrowserFlow::HoverCancel => hover_cancel_flow(driver, ctx).await,
            BrowserFlow::StaleTimer => stale_timer_flow(driver, ctx).await,
            BrowserFlow::DetailOpen => detail_open_flow(driver, ctx).await,
            BrowserFlow::PopupCloseControl => popup_close_flow(driver, ctx).await,
            BrowserFlow::EscapeDismissal => escape_dismissal_flow(driver, ctx).await,
            BrowserFlow::BackdropDismissal => backdrop_dismissal_flow(driver, ctx).await,
            BrowserFlow::PurchaseFallback => purchase_fallback_flow(driver, ctx).await,
        }
    }
}

impl CombinedScenario for InteractionScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new(self.name, self.check))
    }
}

fn tracked_tiles(catalogue: &Catalogue, needed: usize) -> Result<Vec<ShelfTile>> {
    let tiles: Vec<ShelfTile> = ShelfLayout::from_catalogue(catalogue)
        .tiles()
        .filter(|tile| tile.is_interactive())
        .cloned()
        .collect();
    anyhow::ensure!(
        tiles.len() >= needed,
        "Catalogue needs at least {needed} unsold books with ids, found {}",
        tiles.len()
    );
    Ok(tiles)
}

fn tile_id(tile: &ShelfTile) -> &str {
    tile.id.as_deref().unwrap_or_default()
}

fn popup_id(driver: &ShelfDriver) -> Option<&str> {
    driver
        .session()
        .popup()
        .active()
        .and_then(|item| item.tracking_id())
}

fn modal_id(driver: &ShelfDriver) -> Option<&str> {
    driver
        .session()
        .modal()
        .active()
        .and_then(|item| item.tracking_id())
}

// Headless checks -----------------------------------------------------------

pub fn shelf_layout_check(catalogue: &Catalogue) -> Result<()> {
    let layout = ShelfLayout::from_catalogue(catalogue);
    let unsold: Vec<&str> = catalogue
        .items()
        .iter()
        .filter(|item| !item.is_sold())
        .map(|item| item.title.as_str())
        .collect();

    anyhow::ensure!(
        layout.row_count() >= MIN_ROWS,
        "Shelf should have at least {MIN_ROWS} rows, got {}",
        layout.row_count()
    );
    anyhow::ensure!(
        layout.row_count() == MIN_ROWS.max(unsold.len().div_ceil(ROW_CAPACITY)),
        "Unexpected row count {} for {} books",
        layout.row_count(),
        unsold.len()
    );
    for (i, row) in layout.rows.iter().enumerate() {
        anyhow::ensure!(
            row.tiles.len() <= ROW_CAPACITY,
            "Row {i} holds {} books",
            row.tiles.len()
        );
    }

    let shelved: Vec<&str> = layout.tiles().map(|tile| tile.title.as_str()).collect();
    anyhow::ensure!(
        shelved == unsold,
        "Shelf order {shelved:?} should follow catalogue order {unsold:?}"
    );
    anyhow::ensure!(
        layout.sold_count == catalogue.sold_count(),
        "Sold counter {} should be {}",
        layout.sold_count,
        catalogue.sold_count()
    );
    Ok(())
}

pub fn hover_preview_check(catalogue: &Catalogue) -> Result<()> {
    let tiles = tracked_tiles(catalogue, 1)?;
    let id = tile_id(&tiles[0]);
    let mut driver = ShelfDriver::with_catalogue(catalogue.clone());

    driver.dispatch_for(id, ShelfEvent::TileEnter);
    anyhow::ensure!(popup_id(&driver) == Some(id), "Popup should show '{id}'");
    let view = driver.session().summary_view().context("summary view")?;
    anyhow::ensure!(
        view.title == tiles[0].title,
        "Popup title '{}' should be '{}'",
        view.title,
        tiles[0].title
    );

    driver.dispatch_for(id, ShelfEvent::TileLeave);
    driver.advance(HIDE_DELAY_MS - 1);
    anyhow::ensure!(
        popup_id(&driver) == Some(id),
        "Popup should survive until {HIDE_DELAY_MS}ms"
    );
    driver.advance(1);
    anyhow::ensure!(
        popup_id(&driver).is_none(),
        "Popup should hide at {HIDE_DELAY_MS}ms"
    );
    Ok(())
}

pub fn hover_cancel_check(catalogue: &Catalogue) -> Result<()> {
    let tiles = tracked_tiles(catalogue, 1)?;
    let id = tile_id(&tiles[0]);
    let mut driver = ShelfDriver::with_catalogue(catalogue.clone());

    driver.dispatch_for(id, ShelfEvent::TileEnter);
    driver.dispatch_for(id, ShelfEvent::TileLeave);
    driver.advance(HIDE_DELAY_MS / 2);
    driver.dispatch(ShelfEvent::PopupEnter);
    driver.advance(HIDE_DELAY_MS * 3);
    anyhow::ensure!(
        popup_id(&driver) == Some(id),
        "Entering the popup should cancel the hide"
    );

    driver.dispatch(ShelfEvent::PopupLeave);
    driver.advance(HIDE_DELAY_MS);
    anyhow::ensure!(
        popup_id(&driver).is_none(),
        "Leaving the popup should hide it after the delay"
    );
    Ok(())
}

pub fn stale_timer_check(catalogue: &Catalogue) -> Result<()> {
    let tiles = tracked_tiles(catalogue, 2)?;
    let (first, second) = (tile_id(&tiles[0]), tile_id(&tiles[1]));
    let mut driver = ShelfDriver::with_catalogue(catalogue.clone()).lenient();

    driver.dispatch_for(first, ShelfEvent::TileEnter);
    driver.dispatch_for(first, ShelfEvent::TileLeave);
    driver.dispatch_for(second, ShelfEvent::TileEnter);
    anyhow::ensure!(
        driver.pending_timers() == 1,
        "The stale hide timer should still be armed"
    );
    driver.advance(HIDE_DELAY_MS);
    anyhow::ensure!(
        popup_id(&driver) == Some(second),
        "Stale timer must not close the popup for '{second}', popup is {:?}",
        popup_id(&driver)
    );
    Ok(())
}

pub fn detail_open_check(catalogue: &Catalogue) -> Result<()> {
    for tile in tracked_tiles(catalogue, 1)? {
        let id = tile_id(&tile);
        let item = catalogue.item(tile.index).context("tile outside catalogue")?;
        let mut driver = ShelfDriver::with_catalogue(catalogue.clone());

        driver.dispatch_for(id, ShelfEvent::TileEnter);
        driver.dispatch_for(id, ShelfEvent::TileClick);
        anyhow::ensure!(
            driver.session().pickup() == Some(tile.index),
            "Click on '{id}' should start the pickup"
        );
        driver.advance(PICKUP_DURATION_MS);

        anyhow::ensure!(modal_id(&driver) == Some(id), "Detail should show '{id}'");
        anyhow::ensure!(
            popup_id(&driver).is_none(),
            "Opening detail should close the popup"
        );
        let view = driver.session().detail_view().context("detail view")?;
        match &view.gallery {
            Gallery::Empty => anyhow::ensure!(
                item.images.is_empty(),
                "'{id}' has photos but shows the placeholder"
            ),
            Gallery::Photos(images) => {
                let srcs: Vec<&str> = images.iter().map(|img| img.src.as_str()).collect();
                anyhow::ensure!(
                    srcs == item.images,
                    "'{id}' gallery {srcs:?} should match {:?}",
                    item.images
                );
            }
        }
    }
    Ok(())
}

pub fn popup_close_check(catalogue: &Catalogue) -> Result<()> {
    let tiles = tracked_tiles(catalogue, 1)?;
    let id = tile_id(&tiles[0]);
    let mut driver = ShelfDriver::with_catalogue(catalogue.clone());

    driver.dispatch_for(id, ShelfEvent::TileEnter);
    driver.dispatch_for(id, ShelfEvent::TileLeave);
    driver.dispatch(ShelfEvent::PopupEnter);
    driver.dispatch(ShelfEvent::PopupCloseClick);

    anyhow::ensure!(popup_id(&driver).is_none(), "Close control should hide the popup");
    anyhow::ensure!(
        !driver.session().modal().is_open(),
        "Close control must not open detail"
    );
    anyhow::ensure!(
        driver.pending_timers() == 0,
        "Close control should leave no timers, found {}",
        driver.pending_timers()
    );
    Ok(())
}

pub fn escape_dismissal_check(catalogue: &Catalogue) -> Result<()> {
    let tiles = tracked_tiles(catalogue, 1)?;
    let id = tile_id(&tiles[0]);
    let mut driver = ShelfDriver::with_catalogue(catalogue.clone());

    driver.dispatch_for(id, ShelfEvent::OpenDetail);
    driver.dispatch_for(id, ShelfEvent::TileEnter);
    anyhow::ensure!(
        modal_id(&driver).is_some() && popup_id(&driver).is_some(),
        "Both overlays should be open before Escape"
    );

    driver.dispatch(ShelfEvent::KeyDown(String::from("Enter")));
    anyhow::ensure!(modal_id(&driver).is_some(), "Other keys must not dismiss");

    driver.dispatch(ShelfEvent::KeyDown(ESCAPE_KEY.to_string()));
    anyhow::ensure!(
        modal_id(&driver).is_none() && popup_id(&driver).is_none(),
        "Escape should close both overlays"
    );

    driver.dispatch(ShelfEvent::KeyDown(ESCAPE_KEY.to_string()));
    anyhow::ensure!(
        modal_id(&driver).is_none() && popup_id(&driver).is_none(),
        "A second Escape should be harmless"
    );
    Ok(())
}

pub fn backdrop_dismissal_check(catalogue: &Catalogue) -> Result<()> {
    let tiles = tracked_tiles(catalogue, 1)?;
    let id = tile_id(&tiles[0]);
    let mut driver = ShelfDriver::with_catalogue(catalogue.clone());

    driver.dispatch_for(id, ShelfEvent::OpenDetail);
    driver.dispatch(ShelfEvent::ModalClick(ClickTarget::Content));
    anyhow::ensure!(
        modal_id(&driver) == Some(id),
        "Clicks inside the dialog must keep it open"
    );
    driver.dispatch(ShelfEvent::ModalClick(ClickTarget::Backdrop));
    anyhow::ensure!(modal_id(&driver).is_none(), "Backdrop click should close detail");
    Ok(())
}

pub fn purchase_fallback_check(catalogue: &Catalogue) -> Result<()> {
    for tile in tracked_tiles(catalogue, 1)? {
        let id = tile_id(&tile);
        let item = catalogue.item(tile.index).context("tile outside catalogue")?;
        let mut driver = ShelfDriver::with_catalogue(catalogue.clone());
        driver.dispatch_for(id, ShelfEvent::OpenDetail);

        let view = driver.session().detail_view().context("detail view")?;
        let expected = item
            .purchase_link_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(DEFAULT_PURCHASE_URL);
        anyhow::ensure!(
            view.purchase_url == expected,
            "'{id}' links to '{}' instead of '{expected}'",
            view.purchase_url
        );
    }
    Ok(())
}

// Browser flows -------------------------------------------------------------

async fn tile_element(driver: &WebDriver, tile: &ShelfTile) -> Result<WebElement> {
    let css = format!(".book[data-book-id='{}']", tile_id(tile));
    driver
        .find(By::Css(css))
        .await
        .with_context(|| format!("tile for '{}'", tile.title))
}

async fn hover(driver: &WebDriver, element: &WebElement) -> Result<()> {
    driver
        .action_chain()
        .move_to_element_center(element)
        .perform()
        .await?;
    Ok(())
}

/// Park the pointer on the page header, away from tiles and overlays.
async fn move_away(driver: &WebDriver) -> Result<()> {
    let header = driver.find(By::Id("sold-count")).await?;
    hover(driver, &header).await
}

async fn open_detail(ctx: &ScenarioCtx<'_>, id: &str) -> Result<()> {
    ctx.bridge.open(id).await?;
    ctx.bridge
        .wait_for("detail to open", STATE_TIMEOUT, |s| {
            s.modal.as_deref() == Some(id)
        })
        .await?;
    Ok(())
}

async fn shelf_layout_flow(driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
    let state = ctx.bridge.state().await?;
    let rows = driver.find_all(By::Css(".shelf-row")).await?.len();
    let books = driver.find_all(By::Css(".book")).await?.len();
    let sold = driver.find(By::Id("sold-count")).await?.text().await?;

    anyhow::ensure!(rows == state.rows, "Page shows {rows} rows, state says {}", state.rows);
    anyhow::ensure!(rows >= MIN_ROWS, "Shelf should have at least {MIN_ROWS} rows");
    anyhow::ensure!(
        books == state.tiles.len(),
        "Page shows {books} books, state says {}",
        state.tiles.len()
    );
    anyhow::ensure!(
        sold.trim() == ctx.catalogue.sold_count().to_string(),
        "Sold counter shows '{sold}', expected {}",
        ctx.catalogue.sold_count()
    );
    Ok(())
}

async fn hover_preview_flow(driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
    let tiles = tracked_tiles(ctx.catalogue, 1)?;
    let id = tile_id(&tiles[0]);

    hover(driver, &tile_element(driver, &tiles[0]).await?).await?;
    ctx.bridge
        .wait_for("popup to open", STATE_TIMEOUT, |s| {
            s.popup.as_deref() == Some(id)
        })
        .await?;
    let title = driver.find(By::Id("summary-title")).await?.text().await?;
    anyhow::ensure!(
        title == tiles[0].title,
        "Popup title '{title}' should be '{}'",
        tiles[0].title
    );

    let left_at = Instant::now();
    move_away(driver).await?;
    ctx.bridge
        .wait_for("popup to hide", STATE_TIMEOUT, |s| s.popup.is_none())
        .await?;
    let elapsed = left_at.elapsed();
    if ctx.verbose {
        println!("  ⏱️  Popup hid after {elapsed:?}");
    }
    anyhow::ensure!(
        elapsed >= Duration::from_millis(u64::from(HIDE_DELAY_MS / 2)),
        "Popup hid after {elapsed:?}, expected a {HIDE_DELAY_MS}ms delay"
    );
    Ok(())
}

async fn hover_cancel_flow(driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
    let tiles = tracked_tiles(ctx.catalogue, 1)?;
    let id = tile_id(&tiles[0]);

    hover(driver, &tile_element(driver, &tiles[0]).await?).await?;
    ctx.bridge
        .wait_for("popup to open", STATE_TIMEOUT, |s| {
            s.popup.as_deref() == Some(id)
        })
        .await?;

    let popup = driver.find(By::Id("summary-popup")).await?;
    hover(driver, &popup).await?;
    tokio::time::sleep(Duration::from_millis(u64::from(HIDE_DELAY_MS * 2))).await;

    let state = ctx.bridge.state().await?;
    anyhow::ensure!(
        state.popup.as_deref() == Some(id),
        "Popup should stay open while hovered, state: {state:?}"
    );
    Ok(())
}

async fn stale_timer_flow(driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
    let tiles = tracked_tiles(ctx.catalogue, 2)?;
    let second = tile_id(&tiles[1]);
    let first_el = tile_element(driver, &tiles[0]).await?;
    let second_el = tile_element(driver, &tiles[1]).await?;

    hover(driver, &first_el).await?;
    move_away(driver).await?;
    hover(driver, &second_el).await?;
    tokio::time::sleep(Duration::from_millis(u64::from(HIDE_DELAY_MS)) + SETTLE).await;

    let state = ctx.bridge.state().await?;
    anyhow::ensure!(
        state.popup.as_deref() == Some(second),
        "Popup for '{second}' should survive the earlier hide, state: {state:?}"
    );
    Ok(())
}

async fn detail_open_flow(driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
    let tiles = tracked_tiles(ctx.catalogue, 1)?;
    let tile = &tiles[0];
    let id = tile_id(tile);
    let item = ctx
        .catalogue
        .item(tile.index)
        .context("tile outside catalogue")?;

    tile_element(driver, tile).await?.click().await?;
    let state = ctx
        .bridge
        .wait_for("detail to open", STATE_TIMEOUT, |s| {
            s.modal.as_deref() == Some(id)
        })
        .await?;
    anyhow::ensure!(state.popup.is_none(), "Popup should close when detail opens");

    let title = driver.find(By::Id("detail-title")).await?.text().await?;
    anyhow::ensure!(title == item.title, "Detail title '{title}' should be '{}'", item.title);

    let images = driver.find_all(By::Css("#book-images img")).await?.len();
    if item.images.is_empty() {
        let gallery = driver.find(By::Id("book-images")).await?.text().await?;
        anyhow::ensure!(
            gallery.contains(NO_PHOTOS_TEXT),
            "Gallery should show '{NO_PHOTOS_TEXT}', got '{gallery}'"
        );
    } else {
        anyhow::ensure!(
            images == item.images.len(),
            "Gallery shows {images} photos, expected {}",
            item.images.len()
        );
    }
    Ok(())
}

async fn popup_close_flow(driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
    let tiles = tracked_tiles(ctx.catalogue, 1)?;
    let id = tile_id(&tiles[0]);

    hover(driver, &tile_element(driver, &tiles[0]).await?).await?;
    ctx.bridge
        .wait_for("popup to open", STATE_TIMEOUT, |s| {
            s.popup.as_deref() == Some(id)
        })
        .await?;

    driver
        .find(By::Css("[data-close-summary]"))
        .await?
        .click()
        .await?;
    ctx.bridge
        .wait_for("popup to close", STATE_TIMEOUT, |s| s.popup.is_none())
        .await?;

    tokio::time::sleep(Duration::from_millis(u64::from(PICKUP_DURATION_MS)) + SETTLE).await;
    let state = ctx.bridge.state().await?;
    anyhow::ensure!(
        state.modal.is_none(),
        "Close control must not open detail, state: {state:?}"
    );
    Ok(())
}

async fn escape_dismissal_flow(driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
    let tiles = tracked_tiles(ctx.catalogue, 1)?;
    open_detail(ctx, tile_id(&tiles[0])).await?;

    let body = driver.find(By::Tag("body")).await?;
    if body.send_keys(Key::Escape).await.is_err() {
        ctx.bridge.escape().await?;
        if ctx.verbose {
            println!("  ⌨️  Sent Escape via bridge");
        }
    } else if ctx.verbose {
        println!("  ⌨️  Sent Escape via keyboard");
    }

    ctx.bridge
        .wait_for("overlays to close", STATE_TIMEOUT, |s| {
            s.modal.is_none() && s.popup.is_none()
        })
        .await?;
    driver.find(By::Css("#book-modal.hidden")).await?;
    Ok(())
}

async fn backdrop_dismissal_flow(driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
    let tiles = tracked_tiles(ctx.catalogue, 1)?;
    let id = tile_id(&tiles[0]);
    open_detail(ctx, id).await?;

    driver.find(By::Id("detail-title")).await?.click().await?;
    tokio::time::sleep(SETTLE).await;
    let state = ctx.bridge.state().await?;
    anyhow::ensure!(
        state.modal.as_deref() == Some(id),
        "Clicking inside the dialog closed it"
    );

    driver
        .execute(
            "document.getElementById('book-modal').dispatchEvent(new MouseEvent('click', { bubbles: true }))",
            vec![],
        )
        .await?;
    ctx.bridge
        .wait_for("detail to close", STATE_TIMEOUT, |s| s.modal.is_none())
        .await?;
    Ok(())
}

async fn purchase_fallback_flow(driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
    for tile in tracked_tiles(ctx.catalogue, 1)? {
        let id = tile_id(&tile);
        let item = ctx
            .catalogue
            .item(tile.index)
            .context("tile outside catalogue")?;
        open_detail(ctx, id).await?;

        let link = driver.find(By::Id("buy-link")).await?;
        let href = link.attr("href").await?.unwrap_or_default();
        anyhow::ensure!(
            href == item.purchase_url(),
            "'{id}' links to '{href}' instead of '{}'",
            item.purchase_url()
        );

        ctx.bridge.escape().await?;
        ctx.bridge
            .wait_for("detail to close", STATE_TIMEOUT, |s| s.modal.is_none())
            .await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHELF: &str = r#"{"books": [
        {"id": "b1", "title": "Dune", "price": 12, "images": []},
        {"id": "b2", "title": "Foo", "status": "sold"},
        {"id": "b3", "title": "Emma", "images": ["e1.jpg", "e2.jpg"], "purchaseLinkUrl": "https://shop.example/emma"},
        {"title": "Untitled copy"},
        {"id": "b5", "title": "Kindred", "purchaseLinkUrl": "  "}
    ]}"#;

    fn shelf() -> Catalogue {
        Catalogue::from_json(SHELF).unwrap()
    }

    #[test]
    fn every_check_passes_on_a_mixed_shelf() {
        let catalogue = shelf();
        let checks: [(&str, LogicCheck); 9] = [
            ("layout", shelf_layout_check),
            ("hover", hover_preview_check),
            ("cancel", hover_cancel_check),
            ("stale", stale_timer_check),
            ("detail", detail_open_check),
            ("popup-close", popup_close_check),
            ("escape", escape_dismissal_check),
            ("backdrop", backdrop_dismissal_check),
            ("purchase", purchase_fallback_check),
        ];
        for (label, check) in checks {
            check(&catalogue).unwrap_or_else(|err| panic!("{label}: {err:#}"));
        }
    }

    #[test]
    fn tracked_tiles_skip_sold_and_anonymous_books() {
        let tiles = tracked_tiles(&shelf(), 1).unwrap();
        let ids: Vec<&str> = tiles.iter().map(tile_id).collect();
        assert_eq!(ids, vec!["b1", "b3", "b5"]);
    }

    #[test]
    fn checks_report_catalogues_that_are_too_small() {
        let single = Catalogue::from_json(r#"{"books": [{"id": "a", "title": "A"}]}"#).unwrap();
        let err = stale_timer_check(&single).expect_err("needs two books");
        assert!(err.to_string().contains("at least 2"));

        let err = hover_preview_check(&Catalogue::empty()).expect_err("needs a book");
        assert!(err.to_string().contains("at least 1"));
    }

    #[test]
    fn layout_check_accepts_an_empty_catalogue() {
        shelf_layout_check(&Catalogue::empty()).expect("padding rows only");
    }

    #[test]
    fn scenario_exposes_its_check() {
        let scenario =
            InteractionScenario::new("Hover Preview", hover_preview_check, BrowserFlow::HoverPreview);
        let logic = scenario.as_logic_scenario().expect("logic scenario");
        (logic.check)(&shelf()).expect("check runs");
    }
}
