//! Convenience re-exports for engine consumers.

pub use crate::config::{ForecastConfig, ForecastConfigBuilder, ManualDefaults};
