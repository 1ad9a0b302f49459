use js_sys::{Function, Promise};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, HtmlElement, Response, Window};

use crate::error::DomError;

/// Retrieve the global `window` object.
///
/// # Errors
/// Returns an error outside of a browser context.
pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::MissingWindow)
}

/// Retrieve the document object for DOM interactions.
///
/// # Errors
/// Returns an error when the window has no document.
pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::MissingDocument)
}

/// # Errors
/// Returns an error when the document has no `<body>` yet.
pub fn body(doc: &Document) -> Result<HtmlElement, DomError> {
    doc.body().ok_or(DomError::MissingBody)
}

/// First element matching `selector`.
///
/// # Errors
/// Returns an error if the selector is invalid or nothing matches.
pub fn query(doc: &Document, selector: &str) -> Result<Element, DomError> {
    doc.query_selector(selector)?
        .ok_or_else(|| DomError::MissingElement(selector.to_owned()))
}

/// # Errors
/// Returns an error if no element carries `id`.
pub fn element_by_id(doc: &Document, id: &str) -> Result<Element, DomError> {
    doc.get_element_by_id(id)
        .ok_or_else(|| DomError::MissingElement(format!("#{id}")))
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

/// Run `callback` once after `delay_ms`. Returns the timer handle.
///
/// # Errors
/// Returns an error if the timer cannot be scheduled.
pub fn set_timeout<F>(delay_ms: i32, callback: F) -> Result<i32, DomError>
where
    F: FnOnce() + 'static,
{
    let callback = Closure::once_into_js(callback);
    let handle = window()?
        .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), delay_ms)?;
    Ok(handle)
}

/// # Errors
/// Returns an error outside of a browser context.
pub fn clear_timeout(handle: i32) -> Result<(), DomError> {
    window()?.clear_timeout_with_handle(handle);
    Ok(())
}

/// Run `callback` once the document has been parsed, immediately if it already has.
///
/// # Errors
/// Returns an error if the document is unavailable or the listener cannot be attached.
pub fn on_ready<F>(callback: F) -> Result<(), DomError>
where
    F: FnOnce() + 'static,
{
    let doc = document()?;
    if doc.ready_state() != "loading" {
        callback();
        return Ok(());
    }
    let listener = Closure::once_into_js(callback);
    doc.add_event_listener_with_callback("DOMContentLoaded", listener.unchecked_ref())?;
    Ok(())
}

/// Resolve once the document has been parsed.
///
/// # Errors
/// Returns an error if the readiness listener cannot be attached.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn ready() -> Result<(), JsValue> {
    let mut resolve_slot: Option<Function> = None;
    let promise = Promise::new(&mut |resolve, _reject| {
        resolve_slot = Some(resolve);
    });

    let resolve =
        resolve_slot.ok_or_else(|| JsValue::from_str("resolve function should be set"))?;
    on_ready(move || {
        let _ = resolve.call0(&JsValue::UNDEFINED);
    })?;

    JsFuture::from(promise).await?;
    Ok(())
}

/// Yield execution for the requested number of milliseconds.
///
/// # Errors
/// Returns an error if the timer cannot be scheduled or the underlying JavaScript promise rejects.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn sleep_ms(duration_ms: i32) -> Result<(), JsValue> {
    let mut resolve_slot: Option<Function> = None;
    let promise = Promise::new(&mut |resolve, _reject| {
        resolve_slot = Some(resolve);
    });

    let resolve =
        resolve_slot.ok_or_else(|| JsValue::from_str("resolve function should be set"))?;
    set_timeout(duration_ms, move || {
        let _ = resolve.call0(&JsValue::UNDEFINED);
    })?;

    JsFuture::from(promise).await?;
    Ok(())
}

/// Perform a fetch request and return the browser `Response`.
///
/// # Errors
/// Returns an error if the fetch request fails or the response cannot be converted to `Response`.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn fetch_response(url: &str) -> Result<Response, JsValue> {
    let resp_value = JsFuture::from(window()?.fetch_with_str(url)).await?;
    resp_value.dyn_into::<Response>()
}

/// Read a response body as text.
///
/// # Errors
/// Returns an error if the body cannot be read. `Ok(None)` means the body was not a string.
#[allow(clippy::future_not_send)]
pub async fn response_text(response: &Response) -> Result<Option<String>, JsValue> {
    let text_js = JsFuture::from(response.text()?).await?;
    Ok(text_js.as_string())
}
