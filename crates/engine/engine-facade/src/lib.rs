//! Engine Facade
//!
//! Unified re-exports for the risk engine stack:
//! - `engine_spi` - collaborator traits, error taxonomy, data model
//! - `engine_api` - configuration types and builders
//! - `engine_core` - index, trend, propagation, and aggregation implementations

// Re-export everything from Core (which includes the SPI surface)
pub use engine_core::*;

// Re-export everything from API
pub use engine_api::*;
