//! Report types.
//!
//! Serialized shapes handed to the excluded HTTP layer. All numeric
//! rounding happens here and only here: asi 2dp, aers/mbu/rp 4dp,
//! ml_prediction and deltas 6dp, workloads 2dp.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use engine_facade::{
    EngineError, ForecastStep, ImportanceWeights, RegionRecord, RiskIndices, ScorerInfo,
};

/// Round to a fixed number of decimal places.
pub(crate) fn round_dp(value: f64, dp: i32) -> f64 {
    let factor = 10f64.powi(dp);
    (value * factor).round() / factor
}

/// Location echo for lookup responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub state: String,
    pub district: String,
    pub month: String,
}

/// The feature values a prediction was computed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedFeatures {
    pub d_e: f64,
    pub d_d: f64,
    pub d_c: f64,
    pub d_b_lag1: f64,
    pub d_b_lag2: f64,
    pub d_c_lag1: f64,
    pub month_num: u32,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl ExtractedFeatures {
    pub(crate) fn from_record(record: &RegionRecord) -> Self {
        Self {
            d_e: round_dp(record.d_e, 6),
            d_d: round_dp(record.d_d, 6),
            d_c: round_dp(record.d_c, 6),
            d_b_lag1: round_dp(record.d_b_lag1, 6),
            d_b_lag2: round_dp(record.d_b_lag2, 6),
            d_c_lag1: round_dp(record.d_c_lag1, 6),
            month_num: record.month_num,
            b: round_dp(record.b, 2),
            c: round_dp(record.c, 2),
            d: round_dp(record.d, 2),
        }
    }
}

/// Importance weights as reported at the boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportanceReport {
    pub imp_e: f64,
    pub imp_d: f64,
    pub imp_c: f64,
}

impl ImportanceReport {
    pub(crate) fn from_weights(weights: ImportanceWeights) -> Self {
        Self {
            imp_e: round_dp(weights.imp_e, 4),
            imp_d: round_dp(weights.imp_d, 4),
            imp_c: round_dp(weights.imp_c, 4),
        }
    }
}

/// Point prediction response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionReport {
    pub asi: f64,
    pub aers: f64,
    pub mbu: f64,
    pub rp: f64,
    pub ml_prediction: f64,
    /// True only when the period lies beyond the historical cutoff and the
    /// features were trend-derived
    #[serde(default)]
    pub is_projected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature_importances: Option<ImportanceReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extracted_features: Option<ExtractedFeatures>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

impl PredictionReport {
    pub(crate) fn from_indices(indices: &RiskIndices) -> Self {
        Self {
            asi: round_dp(indices.asi, 2),
            aers: round_dp(indices.aers, 4),
            mbu: round_dp(indices.mbu, 4),
            rp: round_dp(indices.rp, 4),
            ml_prediction: round_dp(indices.ml_prediction, 6),
            is_projected: false,
            feature_importances: None,
            extracted_features: None,
            location: None,
        }
    }
}

/// One scored period in a history response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    pub month: String,
    pub asi: f64,
    pub aers: f64,
    pub mbu: f64,
    pub rp: f64,
    pub ml_prediction: f64,
    pub d_e: f64,
    pub d_d: f64,
    pub d_c: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl HistoryPoint {
    pub(crate) fn new(record: &RegionRecord, indices: &RiskIndices) -> Self {
        Self {
            month: record.month.clone(),
            asi: round_dp(indices.asi, 2),
            aers: round_dp(indices.aers, 4),
            mbu: round_dp(indices.mbu, 4),
            rp: round_dp(indices.rp, 4),
            ml_prediction: round_dp(indices.ml_prediction, 6),
            d_e: round_dp(record.d_e, 6),
            d_d: round_dp(record.d_d, 6),
            d_c: round_dp(record.d_c, 6),
            b: round_dp(record.b, 2),
            c: round_dp(record.c, 2),
            d: round_dp(record.d, 2),
        }
    }
}

/// History response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryReport {
    pub state: String,
    pub district: String,
    pub records_count: usize,
    pub history: Vec<HistoryPoint>,
}

/// One period of a forecast timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepReport {
    pub month: String,
    pub asi: f64,
    pub aers: f64,
    pub mbu: f64,
    pub rp: f64,
    pub ml_prediction: f64,
    pub d_e: f64,
    pub d_d: f64,
    pub d_c: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub is_actual: bool,
}

impl StepReport {
    pub(crate) fn from_step(step: &ForecastStep) -> Self {
        Self {
            month: step.record.month.clone(),
            asi: round_dp(step.indices.asi, 2),
            aers: round_dp(step.indices.aers, 4),
            mbu: round_dp(step.indices.mbu, 4),
            rp: round_dp(step.indices.rp, 4),
            ml_prediction: round_dp(step.indices.ml_prediction, 6),
            d_e: round_dp(step.record.d_e, 6),
            d_d: round_dp(step.record.d_d, 6),
            d_c: round_dp(step.record.d_c, 6),
            b: round_dp(step.record.b, 2),
            c: round_dp(step.record.c, 2),
            d: round_dp(step.record.d, 2),
            is_actual: step.is_actual,
        }
    }
}

/// Workload trends reported with a forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendReport {
    pub b_trend: f64,
    pub c_trend: f64,
    pub d_trend: f64,
}

/// Timeline boundaries echoed with a forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    pub historical_cutoff: String,
    pub current_month: String,
    pub future_start: String,
}

/// Multi-step forecast response.
///
/// Serializes the forward steps as `month1`, `month2`, … so the wire
/// contract is independent of the configured horizon.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastReport {
    pub state: String,
    pub district: String,
    pub timeline: Timeline,
    pub trends: TrendReport,
    pub historical: Vec<StepReport>,
    pub current: StepReport,
    pub months: Vec<StepReport>,
}

impl Serialize for ForecastReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(6 + self.months.len()))?;
        map.serialize_entry("state", &self.state)?;
        map.serialize_entry("district", &self.district)?;
        map.serialize_entry("timeline", &self.timeline)?;
        map.serialize_entry("trends", &self.trends)?;
        map.serialize_entry("historical", &self.historical)?;
        map.serialize_entry("current", &self.current)?;
        for (i, step) in self.months.iter().enumerate() {
            map.serialize_entry(&format!("month{}", i + 1), step)?;
        }
        map.end()
    }
}

/// Per-district entry of an aggregate ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistrictScore {
    pub district: String,
    pub asi: f64,
    pub aers: f64,
}

/// Group means of the normalized metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AverageReport {
    pub asi: f64,
    pub aers: f64,
    pub mbu: f64,
    pub rp: f64,
}

/// Summed workloads across the group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkloadReport {
    pub biometric: f64,
    pub child: f64,
    pub demographic: f64,
}

/// State-level aggregation response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateReport {
    pub state: String,
    pub month: String,
    pub districts_count: usize,
    pub average: AverageReport,
    pub workload: WorkloadReport,
    pub top_districts: Vec<DistrictScore>,
    pub all_districts: Vec<DistrictScore>,
}

/// Failure categories at the orchestration boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    NotFound,
    InsufficientHistory,
    InvalidInput,
    ScorerUnavailable,
    NoData,
}

/// A recovered engine error: the kind plus a human-readable message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailureReport {
    pub kind: FailureKind,
    pub error: String,
}

impl From<EngineError> for FailureReport {
    fn from(error: EngineError) -> Self {
        let kind = match &error {
            EngineError::NotFound(_) => FailureKind::NotFound,
            EngineError::InsufficientHistory { .. } => FailureKind::InsufficientHistory,
            EngineError::InvalidInput(_) => FailureKind::InvalidInput,
            EngineError::ScorerUnavailable(_) => FailureKind::ScorerUnavailable,
            EngineError::NoData => FailureKind::NoData,
        };
        Self {
            kind,
            error: error.to_string(),
        }
    }
}

/// One item of a batch response, in input order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum BatchOutcome {
    Success(PredictionReport),
    Failure(FailureReport),
}

/// Dataset metadata for selection surfaces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataReport {
    pub states: Vec<String>,
    pub months: Vec<String>,
    pub districts_by_state: std::collections::BTreeMap<String, Vec<String>>,
}

/// Readiness summary for the engine and its collaborators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusReport {
    pub records_count: usize,
    pub states_count: usize,
    pub scorer: ScorerInfo,
}
