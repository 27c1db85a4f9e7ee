use bookshelf_core::{CatalogueSource, ShelfEvent, load_catalogue};
use yew::prelude::*;

use crate::app::session::SessionHandle;

/// Load the catalogue once and hand the outcome to the session.
#[allow(clippy::future_not_send)]
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub(crate) async fn bootstrap_load<S: CatalogueSource>(handle: &SessionHandle, source: &S) {
    let result = load_catalogue(source).await;
    handle.dispatch(ShelfEvent::from_load(result));
}

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_bootstrap(handle: &SessionHandle) {
    let handle = handle.clone();
    use_effect_with((), move |()| {
        wasm_bindgen_futures::spawn_local(async move {
            let source = crate::catalogue::WebCatalogueSource::deployed();
            bootstrap_load(&handle, &source).await;
        });
        || {}
    });
}

#[cfg(not(target_arch = "wasm32"))]
#[hook]
pub fn use_bootstrap(handle: &SessionHandle) {
    let _ = handle;
}
