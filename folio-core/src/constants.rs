//! Page contract for the portfolio site.
//!
//! These values match the markup and the deployed visitor endpoint. Config
//! assets may override them, but the defaults must keep working against the
//! published page.

// Markup hooks -------------------------------------------------------------
pub const MENU_LINKS_SELECTOR: &str = ".menu-links";
pub const HAMBURGER_ICON_SELECTOR: &str = ".hamburger-icon";
pub const MENU_OPEN_CLASS: &str = "open";
pub const COPY_EMAIL_ID: &str = "copy-email";
pub const VISITOR_COUNTER_ID: &str = "VisitorCounter";
pub const TOAST_ID: &str = "copy-toast";

// Email copy ---------------------------------------------------------------
pub const CONTACT_EMAIL: &str = "akil.mohamed2@gmail.com";
pub const COPIED_MESSAGE: &str = "Email copied to clipboard";

// Toast timing -------------------------------------------------------------
pub const TOAST_FADE_DELAY_MS: u32 = 2000;

// Visitor counter ----------------------------------------------------------
pub const VISITOR_ENDPOINT: &str = "https://a2epboordh.execute-api.ap-southeast-2.amazonaws.com/";
pub const VIEWER_COUNT_FIELD: &str = "viewercount";
pub const JSON_CONTENT_TYPE: &str = "application/json";

// Log prefixes -------------------------------------------------------------
pub const LOG_COPY_FAILED: &str = "Failed to copy: ";
pub const LOG_COUNT_FAILED: &str = "Failed to fetch viewer count:";
