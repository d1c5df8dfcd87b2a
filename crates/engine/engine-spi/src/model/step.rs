//! Forecast sequence elements.

use serde::{Deserialize, Serialize};

use super::{RegionRecord, RiskIndices};

/// One element of a forecast sequence: the (possibly synthetic) feature
/// state for the period, the indices computed from it, and whether the
/// state came straight from the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastStep {
    /// Feature state the step was scored from
    pub record: RegionRecord,
    /// Indices computed for the period
    pub indices: RiskIndices,
    /// True only when the record was sourced directly from the store
    pub is_actual: bool,
}

impl ForecastStep {
    /// Period key of this step.
    pub fn month(&self) -> &str {
        &self.record.month
    }
}
