//! Engine Service Provider Interface
//!
//! Defines the contracts between the risk engine and its collaborators
//! (the black-box scorer and the reference-data store), the error taxonomy,
//! and the shared data model.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{RegionStore, RiskScorer, ScorerInfo};
pub use error::{EngineError, Result};
pub use model::{
    EntitySnapshot, FeatureVector, ForecastStep, ImportanceWeights, RegionRecord, RiskIndices,
    TrendVector, FEATURE_NAMES,
};
