use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    COPIED_MESSAGE, COPY_EMAIL_ID, CONTACT_EMAIL, HAMBURGER_ICON_SELECTOR, MENU_LINKS_SELECTOR,
    MENU_OPEN_CLASS, TOAST_FADE_DELAY_MS, TOAST_ID, VISITOR_COUNTER_ID, VISITOR_ENDPOINT,
};
use crate::toast::{FadePolicy, ToastStyle};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JSON parsing error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid site config: {0}")]
    Invalid(String),
}

/// Element hooks the page markup provides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    pub menu_links: String,
    pub hamburger_icon: String,
    pub open_class: String,
    pub copy_email_id: String,
    pub visitor_counter_id: String,
    pub toast_id: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            menu_links: MENU_LINKS_SELECTOR.into(),
            hamburger_icon: HAMBURGER_ICON_SELECTOR.into(),
            open_class: MENU_OPEN_CLASS.into(),
            copy_email_id: COPY_EMAIL_ID.into(),
            visitor_counter_id: VISITOR_COUNTER_ID.into(),
            toast_id: TOAST_ID.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastConfig {
    pub copied_message: String,
    pub fade_delay_ms: u32,
    pub fade_policy: FadePolicy,
    pub style: ToastStyle,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            copied_message: COPIED_MESSAGE.into(),
            fade_delay_ms: TOAST_FADE_DELAY_MS,
            fade_policy: FadePolicy::default(),
            style: ToastStyle::default(),
        }
    }
}

/// Everything the page scripts need to know about the site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub email: String,
    pub visitor_endpoint: String,
    pub selectors: SelectorConfig,
    pub toast: ToastConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            email: CONTACT_EMAIL.into(),
            visitor_endpoint: VISITOR_ENDPOINT.into(),
            selectors: SelectorConfig::default(),
            toast: ToastConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Parse a config asset. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the result fails validation.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns an error when a required value is empty or the endpoint is not HTTP(S).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.email.trim().is_empty() {
            return Err(ConfigError::Invalid("email must not be empty".into()));
        }
        let endpoint = self.visitor_endpoint.trim();
        if !(endpoint.starts_with("https://") || endpoint.starts_with("http://")) {
            return Err(ConfigError::Invalid(format!(
                "visitor_endpoint must be an http(s) URL, got {endpoint:?}"
            )));
        }
        let selectors = &self.selectors;
        let hooks = [
            ("menu_links", &selectors.menu_links),
            ("hamburger_icon", &selectors.hamburger_icon),
            ("open_class", &selectors.open_class),
            ("copy_email_id", &selectors.copy_email_id),
            ("visitor_counter_id", &selectors.visitor_counter_id),
            ("toast_id", &selectors.toast_id),
        ];
        if let Some((name, _)) = hooks.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(ConfigError::Invalid(format!("selectors.{name} must not be empty")));
        }
        Ok(())
    }

    /// Parse a config asset, logging and falling back to defaults when it is unusable.
    #[must_use]
    pub fn from_json_or_default(json: &str) -> Self {
        Self::from_json(json).unwrap_or_else(|err| {
            log::warn!("Using default site config: {err}");
            Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_page_contract() {
        let config = SiteConfig::default();
        assert_eq!(config.email, "akil.mohamed2@gmail.com");
        assert_eq!(
            config.visitor_endpoint,
            "https://a2epboordh.execute-api.ap-southeast-2.amazonaws.com/"
        );
        assert_eq!(config.selectors.menu_links, ".menu-links");
        assert_eq!(config.selectors.hamburger_icon, ".hamburger-icon");
        assert_eq!(config.selectors.copy_email_id, "copy-email");
        assert_eq!(config.selectors.visitor_counter_id, "VisitorCounter");
        assert_eq!(config.selectors.toast_id, "copy-toast");
        assert_eq!(config.toast.copied_message, "Email copied to clipboard");
        assert_eq!(config.toast.fade_delay_ms, 2000);
        assert_eq!(config.toast.fade_policy, FadePolicy::Independent);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config =
            SiteConfig::from_json(r#"{"toast":{"fade_policy":"restart"}}"#).expect("valid config");
        assert_eq!(config.toast.fade_policy, FadePolicy::Restart);
        assert_eq!(config.toast.fade_delay_ms, 2000);
        assert_eq!(config.email, SiteConfig::default().email);
    }

    #[test]
    fn rejects_bad_endpoint_and_empty_hooks() {
        let err = SiteConfig::from_json(r#"{"visitor_endpoint":"ftp://example"}"#)
            .expect_err("endpoint should be rejected");
        assert!(format!("{err}").contains("visitor_endpoint"));

        let err = SiteConfig::from_json(r#"{"selectors":{"toast_id":" "}}"#)
            .expect_err("empty hook should be rejected");
        assert!(format!("{err}").contains("toast_id"));
    }

    #[test]
    fn malformed_json_falls_back() {
        assert!(matches!(
            SiteConfig::from_json("{not json"),
            Err(ConfigError::Parse(_))
        ));
        assert_eq!(SiteConfig::from_json_or_default("{not json"), SiteConfig::default());
    }
}
