use super::shared::{BridgeState, test_mode_requested};
use crate::app::session::SessionHandle;
use crate::dom;
use bookshelf_core::ShelfEvent;
use bookshelf_core::constants::ESCAPE_KEY;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use yew::prelude::*;

struct BridgeBindings {
    _state: Closure<dyn FnMut() -> JsValue>,
    _escape: Closure<dyn FnMut()>,
    _open: Closure<dyn FnMut(JsValue)>,
}

fn test_mode_enabled() -> bool {
    dom::location_search().is_some_and(|search| test_mode_requested(&search))
}

fn build_bridge(handle: &SessionHandle) -> BridgeBindings {
    let state_handle = handle.clone();
    let state = Closure::wrap(Box::new(move || {
        let snapshot = state_handle.with(BridgeState::capture);
        serde_wasm_bindgen::to_value(&snapshot).unwrap_or(JsValue::NULL)
    }) as Box<dyn FnMut() -> JsValue>);

    let escape_handle = handle.clone();
    let escape = Closure::wrap(Box::new(move || {
        escape_handle.dispatch(ShelfEvent::KeyDown(ESCAPE_KEY.to_string()));
    }) as Box<dyn FnMut()>);

    let open_handle = handle.clone();
    let open = Closure::wrap(Box::new(move |value: JsValue| {
        let Some(id) = value.as_string() else {
            return;
        };
        if let Some(index) = open_handle.with(|session| session.index_of(&id)) {
            open_handle.dispatch(ShelfEvent::OpenDetail(index));
        }
    }) as Box<dyn FnMut(JsValue)>);

    BridgeBindings {
        _state: state,
        _escape: escape,
        _open: open,
    }
}

fn attach_bridge(bindings: &BridgeBindings) {
    let Some(window) = dom::window() else {
        return;
    };
    let bridge = js_sys::Object::new();
    let _ = js_sys::Reflect::set(
        &bridge,
        &JsValue::from_str("state"),
        bindings._state.as_ref().unchecked_ref(),
    );
    let _ = js_sys::Reflect::set(
        &bridge,
        &JsValue::from_str("escape"),
        bindings._escape.as_ref().unchecked_ref(),
    );
    let _ = js_sys::Reflect::set(
        &bridge,
        &JsValue::from_str("open"),
        bindings._open.as_ref().unchecked_ref(),
    );
    let _ = js_sys::Reflect::set(&window, &JsValue::from_str("__bookshelfTest"), &bridge);
}

#[hook]
pub fn use_test_bridge(handle: &SessionHandle) {
    let bridge_handle = use_mut_ref(|| None::<BridgeBindings>);
    let handle = handle.clone();

    use_effect_with((), move |()| {
        if test_mode_enabled() {
            let bindings = build_bridge(&handle);
            attach_bridge(&bindings);
            log::info!("Test bridge installed at window.__bookshelfTest");
            *bridge_handle.borrow_mut() = Some(bindings);
        }
        || {}
    });
}
