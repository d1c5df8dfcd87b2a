//! Per-period feature records.

use serde::{Deserialize, Serialize};

/// Feature names in the exact order the scorer consumes them.
pub const FEATURE_NAMES: [&str; 7] = [
    "d_e",
    "d_d",
    "d_c",
    "d_b_lag1",
    "d_b_lag2",
    "d_c_lag1",
    "month_num",
];

/// One period of normalized features for one entity.
///
/// Records are produced once at the store boundary with a single schema;
/// any raw-column variance is resolved before a record exists. Immutable
/// once read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionRecord {
    /// Period key, "YYYY-MM"; lexicographic order is chronological order
    pub month: String,
    /// Calendar month 1-12
    pub month_num: u32,
    /// Enrollment delta
    pub d_e: f64,
    /// Demographic-update delta
    pub d_d: f64,
    /// Child-enrollment delta
    pub d_c: f64,
    /// Lag-1 feature (tracks the prior period's enrollment delta)
    pub d_b_lag1: f64,
    /// Lag-2 feature
    pub d_b_lag2: f64,
    /// Lag-1 of the child delta
    pub d_c_lag1: f64,
    /// Biometric workload count
    pub b: f64,
    /// Child workload count
    pub c: f64,
    /// Demographic workload count
    pub d: f64,
}

impl RegionRecord {
    /// Build the scorer input for this record.
    pub fn feature_vector(&self) -> FeatureVector {
        FeatureVector {
            d_e: self.d_e,
            d_d: self.d_d,
            d_c: self.d_c,
            d_b_lag1: self.d_b_lag1,
            d_b_lag2: self.d_b_lag2,
            d_c_lag1: self.d_c_lag1,
            month_num: self.month_num,
        }
    }
}

/// The 7-feature input consumed by a [`crate::RiskScorer`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub d_e: f64,
    pub d_d: f64,
    pub d_c: f64,
    pub d_b_lag1: f64,
    pub d_b_lag2: f64,
    pub d_c_lag1: f64,
    pub month_num: u32,
}

impl FeatureVector {
    /// Flatten into the ordered layout matching [`FEATURE_NAMES`].
    pub fn as_array(&self) -> [f64; 7] {
        [
            self.d_e,
            self.d_d,
            self.d_c,
            self.d_b_lag1,
            self.d_b_lag2,
            self.d_c_lag1,
            self.month_num as f64,
        ]
    }
}
