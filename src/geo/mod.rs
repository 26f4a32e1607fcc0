//! Unified geolocation data model.
//!
//! Both provider adapters normalize their responses into [`GeoRecord`] so the
//! orchestrator and presentation layer never see provider-specific schemas.

mod record;

// Re-export public API
pub use record::{local_time_now, GeoRecord};
pub(crate) use record::non_blank;
