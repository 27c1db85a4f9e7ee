use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Response, Window};

/// Retrieve the global `window` object, if running in a browser.
#[must_use]
pub fn window() -> Option<Window> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// Query string of the current page, including the leading `?`.
#[must_use]
pub fn location_search() -> Option<String> {
    window().and_then(|win| win.location().search().ok())
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// A scheduled browser timeout that owns its callback.
///
/// Dropping it clears the timeout and releases the callback together with
/// everything it captured.
pub struct Timeout {
    handle: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Drop for Timeout {
    fn drop(&mut self) {
        clear_timeout(self.handle);
    }
}

impl std::fmt::Debug for Timeout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Timeout").field("handle", &self.handle).finish()
    }
}

/// Run `callback` once after `delay_ms`.
///
/// # Errors
/// Returns a message if there is no `window` or the timer cannot be scheduled.
pub fn set_timeout(delay_ms: u32, callback: impl FnOnce() + 'static) -> Result<Timeout, String> {
    let win = window().ok_or_else(|| String::from("window unavailable"))?;
    let timeout = i32::try_from(delay_ms).unwrap_or(i32::MAX);
    let closure = Closure::once(callback);
    let handle = win
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            timeout,
        )
        .map_err(|err| js_error_message(&err))?;
    Ok(Timeout {
        handle,
        _callback: closure,
    })
}

pub fn clear_timeout(handle: i32) {
    if let Some(win) = window() {
        win.clear_timeout_with_handle(handle);
    }
}

/// Perform a fetch request and return the browser `Response`.
///
/// # Errors
/// Returns an error if the fetch request fails or the response cannot be converted to `Response`.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn fetch_response(url: &str) -> Result<Response, JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
    let resp_value = JsFuture::from(win.fetch_with_str(url)).await?;
    resp_value.dyn_into::<Response>()
}

/// Read a response body as text.
///
/// # Errors
/// Returns an error if the body stream fails or is not text.
#[allow(clippy::future_not_send)]
pub async fn response_text(response: &Response) -> Result<String, JsValue> {
    let text = JsFuture::from(response.text()?).await?;
    text.as_string()
        .ok_or_else(|| JsValue::from_str("response body is not text"))
}
