//! Linear risk scorer
//!
//! Scores a feature vector as `intercept + coefficients · features`.

use serde::{Deserialize, Serialize};

use engine_spi::{
    EngineError, FeatureVector, ImportanceWeights, Result, RiskScorer, ScorerInfo, FEATURE_NAMES,
};

/// Linear model over the ordered 7-feature layout.
///
/// # Example
///
/// ```rust
/// use scorer::LinearScorer;
/// use engine_spi::{FeatureVector, RiskScorer};
///
/// let model = LinearScorer::new([0.5, 0.3, 0.2, 0.0, 0.0, 0.0, 0.0], 0.01);
/// let features = FeatureVector {
///     d_e: 0.1, d_d: 0.0, d_c: 0.0,
///     d_b_lag1: 0.0, d_b_lag2: 0.0, d_c_lag1: 0.0,
///     month_num: 1,
/// };
/// let prediction = model.score(&features).unwrap();
/// assert!((prediction - 0.06).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearScorer {
    coefficients: [f64; 7],
    intercept: f64,
    importances: Option<ImportanceWeights>,
}

impl LinearScorer {
    /// Create a scorer from fixed coefficients.
    pub fn new(coefficients: [f64; 7], intercept: f64) -> Self {
        Self {
            coefficients,
            intercept,
            importances: None,
        }
    }

    /// Create a scorer from a host-supplied coefficient slice.
    pub fn from_coefficients(coefficients: &[f64], intercept: f64) -> Result<Self> {
        if coefficients.len() != FEATURE_NAMES.len() {
            return Err(EngineError::InvalidInput(format!(
                "expected {} coefficients, got {}",
                FEATURE_NAMES.len(),
                coefficients.len()
            )));
        }
        if coefficients.iter().any(|c| !c.is_finite()) || !intercept.is_finite() {
            return Err(EngineError::InvalidInput(
                "coefficients must be finite".to_string(),
            ));
        }
        let mut fixed = [0.0; 7];
        fixed.copy_from_slice(coefficients);
        Ok(Self::new(fixed, intercept))
    }

    /// Attach per-driver importances reported through the trait.
    pub fn with_importances(mut self, importances: ImportanceWeights) -> Self {
        self.importances = Some(importances);
        self
    }

    pub fn coefficients(&self) -> &[f64; 7] {
        &self.coefficients
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }
}

impl RiskScorer for LinearScorer {
    fn score(&self, features: &FeatureVector) -> Result<f64> {
        let inputs = features.as_array();
        let dot: f64 = self
            .coefficients
            .iter()
            .zip(inputs.iter())
            .map(|(c, x)| c * x)
            .sum();
        Ok(self.intercept + dot)
    }

    fn importances(&self) -> Option<ImportanceWeights> {
        self.importances
    }

    fn describe(&self) -> ScorerInfo {
        ScorerInfo {
            kind: "linear".to_string(),
            n_features: FEATURE_NAMES.len(),
            feature_names: FEATURE_NAMES.iter().map(|s| s.to_string()).collect(),
            importances: self.importances,
        }
    }
}
