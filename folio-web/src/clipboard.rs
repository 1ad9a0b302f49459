use folio_core::SiteConfig;
use folio_core::constants::LOG_COPY_FAILED;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{Document, Event};

use crate::dom;
use crate::error::{ClipboardError, DomError};
use crate::toast;

/// Something that can put text on the system clipboard.
#[allow(async_fn_in_trait)]
pub trait ClipboardWriter {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// `navigator.clipboard`; needs a secure context.
#[derive(Debug, Clone, Copy, Default)]
pub struct NavigatorClipboard;

impl ClipboardWriter for NavigatorClipboard {
    #[allow(clippy::future_not_send)]
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let window = dom::window().map_err(|err| ClipboardError::Unavailable(err.to_string()))?;
        let promise = window.navigator().clipboard().write_text(text);
        JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|err| ClipboardError::Rejected(dom::js_error_message(&err)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    /// Carries the line written to the console.
    Failed(String),
}

/// Line logged when the clipboard write is refused.
#[must_use]
pub fn copy_failure_message(err: &ClipboardError) -> String {
    format!("{LOG_COPY_FAILED}{err}")
}

/// Copy `email` and call `notify` with `message` once the write succeeds.
///
/// Failures are logged only; nothing is shown to the visitor.
#[allow(clippy::future_not_send)]
pub async fn copy_email<C, N>(clipboard: &C, email: &str, message: &str, notify: N) -> CopyOutcome
where
    C: ClipboardWriter,
    N: FnOnce(&str),
{
    match clipboard.write_text(email).await {
        Ok(()) => {
            notify(message);
            CopyOutcome::Copied
        }
        Err(err) => {
            let line = copy_failure_message(&err);
            log::error!("{line}");
            CopyOutcome::Failed(line)
        }
    }
}

/// Attach the copy handler to the configured control.
///
/// # Errors
/// Returns an error if the control is missing or the listener cannot be attached.
pub fn bind_copy_email(doc: &Document, config: &'static SiteConfig) -> Result<(), DomError> {
    bind_copy_email_with(doc, config, NavigatorClipboard)
}

/// Attach the copy handler, writing through `clipboard`.
///
/// # Errors
/// Returns an error if the control is missing or the listener cannot be attached.
pub fn bind_copy_email_with<C>(
    doc: &Document,
    config: &'static SiteConfig,
    clipboard: C,
) -> Result<(), DomError>
where
    C: ClipboardWriter + Clone + 'static,
{
    let control = dom::element_by_id(doc, &config.selectors.copy_email_id)?;
    let handler = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        let clipboard = clipboard.clone();
        spawn_local(async move {
            copy_email(
                &clipboard,
                &config.email,
                &config.toast.copied_message,
                |message| {
                    if let Err(err) = toast::show_toast(config, message) {
                        log::error!("Failed to show toast: {err}");
                    }
                },
            )
            .await;
        });
    });
    control.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
    handler.forget();
    Ok(())
}
