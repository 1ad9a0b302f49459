//! Visitor counter service.
//!
//! Each request records one visit: read the tally, bump it, persist it, and
//! answer with the HTTP envelope the page's fetch consumes.

use std::collections::BTreeMap;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::CounterStore;
use crate::constants::JSON_CONTENT_TYPE;

#[derive(Debug, Error)]
pub enum CounterError<E>
where
    E: std::error::Error + 'static,
{
    #[error("Counter store failed: {0}")]
    Store(#[source] E),
    #[error("Failed to encode counter payload: {0}")]
    Encode(#[from] serde_json::Error),
}

/// JSON body returned to the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterPayload {
    pub viewercount: u64,
}

/// Gateway-style response envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl CounterResponse {
    /// Wrap a payload as a `200` JSON response.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload cannot be serialized.
    pub fn ok(payload: CounterPayload) -> Result<Self, serde_json::Error> {
        let mut headers = BTreeMap::new();
        headers.insert("Content-Type".to_owned(), JSON_CONTENT_TYPE.to_owned());
        Ok(Self {
            status_code: 200,
            headers,
            body: serde_json::to_string(&payload)?,
        })
    }
}

/// Record a visit and return the new tally wrapped for the page.
///
/// # Errors
///
/// Returns an error if the store cannot be read or written.
pub fn record_visit<S>(store: &S) -> Result<CounterResponse, CounterError<S::Error>>
where
    S: CounterStore,
{
    let current = store.load_count().map_err(CounterError::Store)?.unwrap_or(0);
    let next = current.saturating_add(1);
    store.save_count(next).map_err(CounterError::Store)?;
    log::debug!("visitor count {current} -> {next}");
    Ok(CounterResponse::ok(CounterPayload { viewercount: next })?)
}

#[derive(Debug, Error)]
pub enum MemoryStoreError {
    #[error("counter lock poisoned")]
    Poisoned,
}

/// In-process store, used by tests and local previews.
#[derive(Debug, Default)]
pub struct MemoryCounterStore {
    count: Mutex<Option<u64>>,
}

impl MemoryCounterStore {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            count: Mutex::new(None),
        }
    }

    #[must_use]
    pub const fn with_count(count: u64) -> Self {
        Self {
            count: Mutex::new(Some(count)),
        }
    }
}

impl CounterStore for MemoryCounterStore {
    type Error = MemoryStoreError;

    fn load_count(&self) -> Result<Option<u64>, Self::Error> {
        self.count
            .lock()
            .map(|guard| *guard)
            .map_err(|_| MemoryStoreError::Poisoned)
    }

    fn save_count(&self, count: u64) -> Result<(), Self::Error> {
        let mut guard = self.count.lock().map_err(|_| MemoryStoreError::Poisoned)?;
        *guard = Some(count);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Error)]
    #[error("table unavailable")]
    struct Unavailable;

    struct BrokenStore;

    impl CounterStore for BrokenStore {
        type Error = Unavailable;

        fn load_count(&self) -> Result<Option<u64>, Self::Error> {
            Err(Unavailable)
        }

        fn save_count(&self, _count: u64) -> Result<(), Self::Error> {
            Err(Unavailable)
        }
    }

    #[test]
    fn first_visit_starts_at_one() {
        let store = MemoryCounterStore::new();
        let response = record_visit(&store).expect("memory store works");
        assert_eq!(response.status_code, 200);
        assert_eq!(response.body, r#"{"viewercount":1}"#);
        assert_eq!(store.load_count().unwrap(), Some(1));
    }

    #[test]
    fn existing_tally_increments() {
        let store = MemoryCounterStore::with_count(41);
        let response = record_visit(&store).unwrap();
        assert_eq!(response.body, r#"{"viewercount":42}"#);
        assert_eq!(
            response.headers.get("Content-Type").map(String::as_str),
            Some("application/json")
        );
        record_visit(&store).unwrap();
        assert_eq!(store.load_count().unwrap(), Some(43));
    }

    #[test]
    fn store_failures_propagate() {
        let err = record_visit(&BrokenStore).expect_err("broken store should fail");
        assert!(matches!(err, CounterError::Store(Unavailable)));
        assert_eq!(err.to_string(), "Counter store failed: table unavailable");
    }

    #[test]
    fn envelope_uses_gateway_field_names() {
        let response = CounterResponse::ok(CounterPayload { viewercount: 7 }).unwrap();
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["statusCode"], 200);
        assert_eq!(json["body"], r#"{"viewercount":7}"#);
    }
}
