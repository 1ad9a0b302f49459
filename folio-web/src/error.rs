use folio_core::PayloadError;
use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::dom;

/// Failures while reaching into the page.
#[derive(Debug, Error)]
pub enum DomError {
    #[error("`window` is unavailable")]
    MissingWindow,
    #[error("`document` is unavailable")]
    MissingDocument,
    #[error("document has no <body>")]
    MissingBody,
    #[error("no element matches `{0}`")]
    MissingElement(String),
    #[error("`{0}` is not an HTML element")]
    NotHtml(String),
    #[error("{0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        Self::Js(dom::js_error_message(&value))
    }
}

// Exported functions throw these as `Error` objects.
impl From<DomError> for JsValue {
    fn from(err: DomError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("{0}")]
    Rejected(String),
}

#[derive(Debug, Error)]
pub enum VisitorError {
    #[error("Request failed: {0}")]
    Request(String),
    #[error("HTTP {status}: {status_text}")]
    Status { status: u16, status_text: String },
    #[error("Response was not valid UTF-8")]
    Utf8,
    #[error(transparent)]
    Payload(#[from] PayloadError),
    #[error(transparent)]
    Dom(#[from] DomError),
}
