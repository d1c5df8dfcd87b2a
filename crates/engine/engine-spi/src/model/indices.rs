//! Computed risk indices.

use serde::{Deserialize, Serialize};

/// Composite risk indices for one entity and one period.
///
/// Derived, never persisted; recomputed per request. Values are carried
/// unrounded — rounding happens at the report boundary only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskIndices {
    /// Aggregate stress index, normalized to 0-100
    pub asi: f64,
    /// Exclusion-risk score, normalized to 0-1
    pub aers: f64,
    /// Workload balance ratio (child load over total non-child load)
    pub mbu: f64,
    /// Relative pressure (normalized biometric/child gap)
    pub rp: f64,
    /// Raw scalar from the scorer
    pub ml_prediction: f64,
}
