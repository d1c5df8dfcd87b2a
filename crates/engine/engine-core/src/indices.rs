//! Risk index computation
//!
//! Converts a scalar model prediction, the period's delta drivers, and the
//! workload counts into the normalized composite indices.

use engine_spi::{ImportanceWeights, RegionRecord, Result, RiskIndices, RiskScorer};

/// Safety factor added to denominators that could be zero.
pub const EPSILON: f64 = 1e-6;

/// Computes normalized risk indices from already-validated inputs.
///
/// Holds the importance weights, which stay constant for the lifetime of a
/// request. `compute` is pure and has no error path.
///
/// The intermediate `asi_raw`/`aers_raw` combination feeds only the
/// magnitude of `aers`; the user-facing `asi` is a monotonic rescaling of
/// the raw model confidence alone. The two normalization paths are
/// intentionally separate.
#[derive(Debug, Clone, Copy)]
pub struct IndexCalculator {
    weights: ImportanceWeights,
}

impl IndexCalculator {
    pub fn new(weights: ImportanceWeights) -> Self {
        Self { weights }
    }

    /// The request-constant weights this calculator applies.
    pub fn weights(&self) -> ImportanceWeights {
        self.weights
    }

    /// Derive indices for one period.
    pub fn compute(&self, ml_prediction: f64, record: &RegionRecord) -> RiskIndices {
        let w = self.weights;

        let asi_raw =
            ml_prediction + w.imp_c * record.d_c + w.imp_d * record.d_d + w.imp_e * record.d_e;
        let mbu = record.c / (record.b + record.d + EPSILON);
        let rp = (record.b - record.c) / (record.b + EPSILON);
        let aers_raw = asi_raw * (mbu + rp);

        let asi = (ml_prediction.abs() * 100.0 + 50.0).clamp(0.0, 100.0);
        let aers = aers_raw.abs().clamp(0.0, 1.0);

        RiskIndices {
            asi,
            aers,
            mbu,
            rp,
            ml_prediction,
        }
    }

    /// Score a record through the scorer, then derive its indices.
    ///
    /// The shared path for history, aggregation, propagation, and point
    /// prediction.
    pub fn score_record(&self, scorer: &dyn RiskScorer, record: &RegionRecord) -> Result<RiskIndices> {
        let ml_prediction = scorer.score(&record.feature_vector())?;
        Ok(self.compute(ml_prediction, record))
    }
}

/// Weights from the scorer when available, otherwise the fallback split.
pub fn resolve_weights(scorer: &dyn RiskScorer) -> ImportanceWeights {
    scorer.importances().unwrap_or_default()
}
