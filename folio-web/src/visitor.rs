//! Visitor counter: one GET at startup, result written into the counter element.

use folio_core::constants::LOG_COUNT_FAILED;
use folio_core::{SiteConfig, ViewerCount, parse_viewer_count};
use web_sys::Element;

use crate::dom;
use crate::error::VisitorError;

/// Where the counter payload comes from.
#[allow(async_fn_in_trait)]
pub trait CountSource {
    async fn fetch_body(&self, url: &str) -> Result<String, VisitorError>;
}

/// Browser `fetch`, unauthenticated, default headers.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpCountSource;

impl CountSource for HttpCountSource {
    #[allow(clippy::future_not_send)]
    async fn fetch_body(&self, url: &str) -> Result<String, VisitorError> {
        let response = dom::fetch_response(url)
            .await
            .map_err(|err| VisitorError::Request(dom::js_error_message(&err)))?;

        if !response.ok() {
            return Err(VisitorError::Status {
                status: response.status(),
                status_text: response.status_text(),
            });
        }

        dom::response_text(&response)
            .await
            .map_err(|err| VisitorError::Request(dom::js_error_message(&err)))?
            .ok_or(VisitorError::Utf8)
    }
}

/// Fetch and parse the current count.
///
/// # Errors
/// Returns an error if the request fails or the payload is unusable.
#[allow(clippy::future_not_send)]
pub async fn fetch_viewer_count<S>(source: &S, url: &str) -> Result<ViewerCount, VisitorError>
where
    S: CountSource,
{
    let body = source.fetch_body(url).await?;
    Ok(parse_viewer_count(&body)?)
}

/// Write `count` into `target`.
pub fn render_count(target: &Element, count: &ViewerCount) {
    target.set_text_content(Some(count.as_str()));
}

/// Line logged when the count cannot be shown.
#[must_use]
pub fn count_failure_message(err: &VisitorError) -> String {
    format!("{LOG_COUNT_FAILED} {err}")
}

/// Startup entry: fetch right away, then write into the counter element once the
/// document is parsed. Failures are logged and leave the page as it was.
#[allow(clippy::future_not_send)]
pub async fn refresh_visitor_count<S>(source: &S, config: &SiteConfig) -> Option<ViewerCount>
where
    S: CountSource,
{
    let result = async {
        let count = fetch_viewer_count(source, &config.visitor_endpoint).await?;
        dom::ready()
            .await
            .map_err(|err| VisitorError::Request(dom::js_error_message(&err)))?;
        let doc = dom::document()?;
        let target = dom::element_by_id(&doc, &config.selectors.visitor_counter_id)?;
        render_count(&target, &count);
        Ok::<_, VisitorError>(count)
    }
    .await;

    match result {
        Ok(count) => {
            log::debug!("viewer count {count}");
            Some(count)
        }
        Err(err) => {
            log::error!("{}", count_failure_message(&err));
            None
        }
    }
}
