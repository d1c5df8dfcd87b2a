//! Engine Core
//!
//! Core implementations for risk index computation, trend estimation,
//! forecast propagation, and group aggregation.

pub mod aggregate;
pub mod indices;
pub mod period;
pub mod propagator;
pub mod trend;

// Re-export SPI types for implementations
pub use engine_spi::{
    EngineError, EntitySnapshot, FeatureVector, ForecastStep, ImportanceWeights, RegionRecord,
    RegionStore, Result, RiskIndices, RiskScorer, ScorerInfo, TrendVector, FEATURE_NAMES,
};

// Re-export main types
pub use aggregate::{aggregate_group, AggregateSummary, EntityIndices, GroupMeans, WorkloadTotals};
pub use indices::{resolve_weights, IndexCalculator, EPSILON};
pub use period::{month_number, months_between, next_month};
pub use propagator::{project_period, ForecastPropagator, CHILD_FLOOR, WORKLOAD_FLOOR};
pub use trend::{estimate_trend, DEFAULT_TREND_WINDOW};
