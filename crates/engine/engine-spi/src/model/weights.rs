//! Feature importance weights.

use serde::{Deserialize, Serialize};

/// Relative importance of the three delta drivers, ideally summing to 1.
///
/// Supplied by the scorer when it can report per-feature importances;
/// otherwise the fallback split applies. Constant for the lifetime of a
/// request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImportanceWeights {
    /// Weight of the enrollment delta (scorer feature index 0)
    pub imp_e: f64,
    /// Weight of the demographic delta (scorer feature index 1)
    pub imp_d: f64,
    /// Weight of the child delta (scorer feature index 2)
    pub imp_c: f64,
}

impl ImportanceWeights {
    pub fn new(imp_e: f64, imp_d: f64, imp_c: f64) -> Self {
        Self {
            imp_e,
            imp_d,
            imp_c,
        }
    }
}

impl Default for ImportanceWeights {
    /// Fallback split used when the scorer exposes no importances.
    fn default() -> Self {
        Self {
            imp_e: 0.34,
            imp_d: 0.33,
            imp_c: 0.33,
        }
    }
}
