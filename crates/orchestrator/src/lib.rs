//! Prediction Orchestrator
//!
//! Routes point, forecast, history, aggregate, and batch requests to the
//! correct calculation path. The only crate that touches the collaborators
//! (the region store and the risk scorer); everything below it is pure
//! computation.

pub mod orchestrator;
pub mod report;
pub mod request;

pub use orchestrator::PredictionOrchestrator;
pub use report::{
    AggregateReport, BatchOutcome, DistrictScore, FailureKind, FailureReport, ForecastReport,
    HistoryPoint, HistoryReport, MetadataReport, PredictionReport, StatusReport, StepReport,
};
pub use request::{LookupRequest, ManualFeatures, PredictRequest};
