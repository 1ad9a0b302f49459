#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod clipboard;
pub mod config;
pub mod dom;
pub mod error;
pub mod menu;
pub mod toast;
pub mod visitor;

pub use error::{ClipboardError, DomError, VisitorError};

/// Route `log` records to the browser console. Safe to call more than once.
#[cfg(target_arch = "wasm32")]
pub fn init_logging() {
    // Fails only when a logger is already installed, e.g. a second start in the same page.
    console_log::init_with_level(log::Level::Info).ok();
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    init_logging();

    let config = config::site_config();

    if let Err(err) = dom::window().and_then(|win| menu::install_global(&win)) {
        log::error!("Failed to expose toggleMenu: {err}");
    }

    // The count request goes out now; it waits for the document before writing.
    wasm_bindgen_futures::spawn_local(async move {
        visitor::refresh_visitor_count(&visitor::HttpCountSource, config).await;
    });

    let bound = dom::on_ready(move || {
        if let Err(err) =
            dom::document().and_then(|doc| clipboard::bind_copy_email(&doc, config))
        {
            log::error!("Email copy unavailable: {err}");
        }
    });
    if let Err(err) = bound {
        log::error!("Failed to wait for document: {err}");
    }
}
