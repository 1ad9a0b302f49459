use folio_core::{MenuState, SelectorConfig};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Window};

use crate::config::site_config;
use crate::dom;
use crate::error::DomError;

/// Mobile navigation: the links container and the hamburger icon.
pub struct Menu {
    links: Element,
    icon: Element,
    open_class: String,
}

impl Menu {
    #[must_use]
    pub fn new(links: Element, icon: Element, open_class: impl Into<String>) -> Self {
        Self {
            links,
            icon,
            open_class: open_class.into(),
        }
    }

    /// Find both menu elements in `doc`.
    ///
    /// # Errors
    /// Returns an error if either element is missing.
    pub fn locate(doc: &Document, selectors: &SelectorConfig) -> Result<Self, DomError> {
        let links = dom::query(doc, &selectors.menu_links)?;
        let icon = dom::query(doc, &selectors.hamburger_icon)?;
        Ok(Self::new(links, icon, selectors.open_class.as_str()))
    }

    /// Toggle the open class on both elements.
    ///
    /// # Errors
    /// Returns an error if the class list rejects the token.
    pub fn toggle(&self) -> Result<MenuState, DomError> {
        let links_open = self.links.class_list().toggle(&self.open_class)?;
        let icon_open = self.icon.class_list().toggle(&self.open_class)?;
        if links_open != icon_open {
            log::warn!("menu links and icon disagree on `{}`", self.open_class);
        }
        Ok(MenuState::from_class_present(links_open))
    }
}

/// Click handler for the hamburger icon.
///
/// # Errors
/// Throws when the menu markup is missing.
#[wasm_bindgen(js_name = toggleMenu)]
pub fn toggle_menu() -> Result<(), JsValue> {
    let doc = dom::document()?;
    let state = Menu::locate(&doc, &site_config().selectors)?.toggle()?;
    log::debug!("menu open: {}", state.is_open());
    Ok(())
}

/// Expose `toggleMenu` on `window` for inline `onclick` markup.
///
/// # Errors
/// Returns an error if the property cannot be set.
pub fn install_global(window: &Window) -> Result<(), DomError> {
    let handler = Closure::<dyn Fn() -> Result<(), JsValue>>::new(toggle_menu);
    js_sys::Reflect::set(window, &JsValue::from_str("toggleMenu"), handler.as_ref())?;
    handler.forget();
    Ok(())
}
