//! Error handling.
//!
//! Errors are split into:
//! - **Initialization errors**: logger or HTTP client setup failed at startup
//! - **Provider errors**: why a geolocation provider produced no record. These are
//!   logged and collapsed into absence inside each adapter.

mod types;

// Re-export public API
pub use types::{InitializationError, ProviderError};
