use bookshelf_core::ClickTarget;
#[cfg(target_arch = "wasm32")]
use bookshelf_core::ShelfEvent;
use yew::prelude::*;

use crate::app::session::SessionHandle;

/// Classify a click on the modal overlay: only clicks whose target is the
/// overlay element itself count as backdrop clicks.
#[must_use]
pub fn click_target(event: &MouseEvent) -> ClickTarget {
    match (event.target(), event.current_target()) {
        (Some(target), Some(current)) if js_sys::Object::is(&target, &current) => {
            ClickTarget::Backdrop
        }
        _ => ClickTarget::Content,
    }
}

/// Install the document-level Escape listener for the page lifetime.
#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_escape_dismissal(handle: &SessionHandle) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let handle = handle.clone();
    use_effect_with((), move |()| {
        let listener = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            handle.dispatch(ShelfEvent::KeyDown(event.key()));
        });
        let document = crate::dom::document();
        if let Some(doc) = document.as_ref()
            && let Err(err) = doc
                .add_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref())
        {
            log::error!(
                "Failed to install Escape listener: {}",
                crate::dom::js_error_message(&err)
            );
        }
        move || {
            if let Some(doc) = document {
                let _ = doc.remove_event_listener_with_callback(
                    "keydown",
                    listener.as_ref().unchecked_ref(),
                );
            }
        }
    });
}

#[cfg(not(target_arch = "wasm32"))]
#[hook]
pub fn use_escape_dismissal(handle: &SessionHandle) {
    let _ = handle;
}
