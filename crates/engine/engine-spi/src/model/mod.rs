//! Model module containing the shared engine data types

mod indices;
mod record;
mod snapshot;
mod step;
mod trend;
mod weights;

pub use indices::RiskIndices;
pub use record::{FeatureVector, RegionRecord, FEATURE_NAMES};
pub use snapshot::EntitySnapshot;
pub use step::ForecastStep;
pub use trend::TrendVector;
pub use weights::ImportanceWeights;
