use folio_core::SiteConfig;
use once_cell::sync::Lazy;

static SITE_CONFIG: Lazy<SiteConfig> =
    Lazy::new(|| SiteConfig::from_json_or_default(include_str!("../static/site.json")));

/// Site configuration compiled in from `static/site.json`.
#[must_use]
pub fn site_config() -> &'static SiteConfig {
    &SITE_CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_config_loads() {
        let config = site_config();
        assert_eq!(config.selectors.copy_email_id, "copy-email");
        assert_eq!(config.toast.fade_delay_ms, 2000);
    }
}
