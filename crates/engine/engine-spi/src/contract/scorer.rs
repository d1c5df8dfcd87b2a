//! Scorer trait definition.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{FeatureVector, ImportanceWeights};

/// Descriptor for a scorer implementation, for introspection endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScorerInfo {
    /// Implementation kind (e.g. "linear")
    pub kind: String,
    /// Number of features the scorer expects
    pub n_features: usize,
    /// Feature names in input order
    pub feature_names: Vec<String>,
    /// Per-driver importances, when the scorer can report them
    pub importances: Option<ImportanceWeights>,
}

/// Black-box predictive model producing a scalar risk prediction from a
/// feature vector.
///
/// The engine never sees the model's internals; training and loading belong
/// to the host. Implementations must be safe to share across concurrent
/// request handlers.
pub trait RiskScorer: Send + Sync {
    /// Score a single feature vector.
    fn score(&self, features: &FeatureVector) -> Result<f64>;

    /// Per-driver importances, if the model exposes them.
    fn importances(&self) -> Option<ImportanceWeights>;

    /// Describe the scorer for introspection.
    fn describe(&self) -> ScorerInfo;
}
