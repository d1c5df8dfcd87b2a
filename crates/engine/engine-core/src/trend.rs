//! Linear trend estimation
//!
//! Estimates per-feature slopes from the trailing window of an ordered
//! historical series.

use engine_spi::{EngineError, RegionRecord, Result, TrendVector};

/// Trailing window length used by the reference behavior.
pub const DEFAULT_TREND_WINDOW: usize = 3;

/// Estimate per-feature linear slopes from an ordered-by-month history.
///
/// Takes the trailing `min(window, len)` records; for each feature,
/// slope = (value at window end − value at window start) / max(window − 1, 1),
/// so a single-record window yields the zero trend. Pure; the input is not
/// mutated. Callers that go on to project forward require at least two
/// qualifying records and enforce that themselves.
pub fn estimate_trend(history: &[RegionRecord], window: usize) -> Result<TrendVector> {
    if history.is_empty() {
        return Err(EngineError::InsufficientHistory {
            required: 1,
            actual: 0,
        });
    }

    let n = window.min(history.len()).max(1);
    let tail = &history[history.len() - n..];
    let first = &tail[0];
    let last = &tail[n - 1];
    let denom = (n - 1).max(1) as f64;

    Ok(TrendVector {
        d_e: (last.d_e - first.d_e) / denom,
        d_d: (last.d_d - first.d_d) / denom,
        d_c: (last.d_c - first.d_c) / denom,
        b: (last.b - first.b) / denom,
        c: (last.c - first.c) / denom,
        d: (last.d - first.d) / denom,
    })
}
