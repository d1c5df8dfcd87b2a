//! Per-feature linear slopes.

use serde::{Deserialize, Serialize};

/// Linear slope per feature, estimated once per forecast request from the
/// trailing historical window and held constant across all forecast steps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendVector {
    pub d_e: f64,
    pub d_d: f64,
    pub d_c: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl TrendVector {
    /// The zero trend (flat projection).
    pub fn zero() -> Self {
        Self {
            d_e: 0.0,
            d_d: 0.0,
            d_c: 0.0,
            b: 0.0,
            c: 0.0,
            d: 0.0,
        }
    }
}
