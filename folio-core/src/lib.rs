//! Folio Core
//!
//! Platform-agnostic logic for the portfolio site. The browser crate binds these
//! models to the DOM; everything here runs and tests natively.

pub mod config;
pub mod constants;
pub mod counter;
pub mod menu;
pub mod toast;
pub mod visitor;

// Re-export commonly used types
pub use config::{ConfigError, SelectorConfig, SiteConfig, ToastConfig};
pub use counter::{
    CounterError, CounterPayload, CounterResponse, MemoryCounterStore, MemoryStoreError,
    record_visit,
};
pub use menu::MenuState;
pub use toast::{FadePolicy, Opacity, ToastStyle};
pub use visitor::{PayloadError, ViewerCount, parse_viewer_count};

/// Trait for abstracting where the visitor tally is kept.
/// Platform-specific implementations should provide this
pub trait CounterStore {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Read the stored tally, `None` when nothing has been recorded yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn load_count(&self) -> Result<Option<u64>, Self::Error>;

    /// Replace the stored tally.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written.
    fn save_count(&self, count: u64) -> Result<(), Self::Error>;
}
