//! Engine API
//!
//! Configuration types for the risk engine.

pub mod config;
pub mod prelude;

pub use config::{ForecastConfig, ForecastConfigBuilder, ManualDefaults};
