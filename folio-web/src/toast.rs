//! Singleton copy-confirmation toast.
//!
//! The node is created on first use, appended to `<body>` and reused for every
//! later message. Fades are plain `setTimeout` callbacks; under the restart
//! policy the pending handle lives on the node itself so any lookup can cancel it.

use folio_core::{FadePolicy, Opacity, SiteConfig, ToastStyle};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement};

use crate::config::site_config;
use crate::dom;
use crate::error::DomError;

const FADE_TIMER_ATTR: &str = "data-fade-timer";

#[derive(Clone)]
pub struct Toast {
    element: HtmlElement,
}

impl Toast {
    #[must_use]
    pub const fn from_element(element: HtmlElement) -> Self {
        Self { element }
    }

    /// Reuse the toast with `id`, creating and styling it on first use.
    ///
    /// # Errors
    /// Returns an error if the node cannot be created or appended.
    pub fn ensure(doc: &Document, id: &str, style: &ToastStyle) -> Result<Self, DomError> {
        if let Some(existing) = doc.get_element_by_id(id) {
            let element = existing
                .dyn_into::<HtmlElement>()
                .map_err(|_| DomError::NotHtml(format!("#{id}")))?;
            return Ok(Self::from_element(element));
        }

        let element = doc
            .create_element("div")?
            .dyn_into::<HtmlElement>()
            .map_err(|_| DomError::NotHtml("div".into()))?;
        element.set_id(id);
        let css = element.style();
        for (property, value) in style.declarations() {
            css.set_property(property, value)?;
        }
        dom::body(doc)?.append_child(&element)?;
        log::debug!("created toast #{id}");
        Ok(Self::from_element(element))
    }

    #[must_use]
    pub const fn element(&self) -> &HtmlElement {
        &self.element
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.element.text_content().unwrap_or_default()
    }

    #[must_use]
    pub fn opacity(&self) -> Opacity {
        Opacity::from_css(&self.element.style().get_property_value("opacity").unwrap_or_default())
    }

    /// # Errors
    /// Returns an error if the style cannot be updated.
    pub fn set_opacity(&self, opacity: Opacity) -> Result<(), DomError> {
        self.element.style().set_property("opacity", opacity.as_css())?;
        Ok(())
    }

    /// Show `message` now and fade it out after `delay_ms`.
    ///
    /// # Errors
    /// Returns an error if the node cannot be updated or the fade cannot be scheduled.
    pub fn show(&self, message: &str, delay_ms: u32, policy: FadePolicy) -> Result<(), DomError> {
        self.element.set_text_content(Some(message));
        self.set_opacity(Opacity::Visible)?;

        if policy == FadePolicy::Restart
            && let Some(handle) = self.pending_fade()
        {
            dom::clear_timeout(handle)?;
        }

        let fading = self.clone();
        let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
        let handle = dom::set_timeout(delay, move || {
            if let Err(err) = fading.set_opacity(Opacity::Hidden) {
                log::error!("Failed to hide toast: {err}");
            }
        })?;

        if policy == FadePolicy::Restart {
            self.element
                .set_attribute(FADE_TIMER_ATTR, &handle.to_string())?;
        }
        Ok(())
    }

    fn pending_fade(&self) -> Option<i32> {
        self.element
            .get_attribute(FADE_TIMER_ATTR)
            .and_then(|raw| raw.parse().ok())
    }
}

/// Show `message` in the page's toast using `config`.
///
/// # Errors
/// Returns an error if the document is unavailable or the toast cannot be updated.
pub fn show_toast(config: &SiteConfig, message: &str) -> Result<Toast, DomError> {
    let doc = dom::document()?;
    let toast = Toast::ensure(&doc, &config.selectors.toast_id, &config.toast.style)?;
    toast.show(message, config.toast.fade_delay_ms, config.toast.fade_policy)?;
    Ok(toast)
}

/// # Errors
/// Throws when the toast cannot be shown.
#[wasm_bindgen(js_name = showCopyToast)]
pub fn show_copy_toast(message: &str) -> Result<(), JsValue> {
    show_toast(site_config(), message)?;
    Ok(())
}
