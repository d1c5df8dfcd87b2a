//! Forward propagation of the feature state
//!
//! A small state machine that seeds the first post-historical period, then
//! repeatedly advances the feature state by the constant trend increment,
//! re-deriving lag features at every step and scoring each period as it is
//! produced.

use engine_spi::{
    EngineError, ForecastStep, RegionRecord, Result, RiskScorer, TrendVector,
};

use crate::indices::IndexCalculator;
use crate::period::next_month;

/// Floor applied to the biometric and demographic workloads after a trend
/// step.
pub const WORKLOAD_FLOOR: f64 = 1.0;

/// Floor applied to the child workload after a trend step.
pub const CHILD_FLOOR: f64 = 0.0;

/// Advance one period: deltas move by the trend increment, lag features are
/// re-derived, workloads trend independently under their floors.
///
/// The lag-1 feature takes the previous period's `d_e` (the lag tracks the
/// entity's own prior delta-e, not a separately tracked workload signal —
/// an intentional substitution used throughout, not a placeholder), lag-2
/// takes the previous lag-1, and the child lag takes the previous `d_c`.
fn advanced_state(prev: &RegionRecord, trend: &TrendVector, month: String, month_num: u32) -> RegionRecord {
    RegionRecord {
        month,
        month_num,
        d_e: prev.d_e + trend.d_e,
        d_d: prev.d_d + trend.d_d,
        d_c: prev.d_c + trend.d_c,
        d_b_lag1: prev.d_e,
        d_b_lag2: prev.d_b_lag1,
        d_c_lag1: prev.d_c,
        b: (prev.b + trend.b).max(WORKLOAD_FLOOR),
        c: (prev.c + trend.c).max(CHILD_FLOOR),
        d: (prev.d + trend.d).max(WORKLOAD_FLOOR),
    }
}

/// Produces the forecast sequence beyond the historical cutoff.
///
/// Seeding either adopts an actual record for the first forecast period or
/// synthesizes one from the latest historical record plus one trend
/// increment; every later step applies the identical synthetic rule. The
/// trend is computed once and held constant — it does not decay or
/// recompute. The seed period is anchored at calendar month 1 and later
/// steps count 2, 3, 4, … (a January-anchored simplification, not general
/// calendar math).
pub struct ForecastPropagator<'a> {
    scorer: &'a dyn RiskScorer,
    calculator: &'a IndexCalculator,
    trend: TrendVector,
    state: RegionRecord,
}

impl<'a> std::fmt::Debug for ForecastPropagator<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForecastPropagator")
            .field("trend", &self.trend)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl<'a> ForecastPropagator<'a> {
    /// Seed the machine and produce the first forecast step.
    ///
    /// `history` must be ordered by month and restricted to the cutoff;
    /// fewer than two records cannot support propagation. When `actual`
    /// holds the store's record for the seed period it is used verbatim
    /// and the step is marked actual.
    pub fn seed(
        scorer: &'a dyn RiskScorer,
        calculator: &'a IndexCalculator,
        trend: TrendVector,
        history: &[RegionRecord],
        actual: Option<RegionRecord>,
        seed_month: &str,
    ) -> Result<(Self, ForecastStep)> {
        if history.len() < 2 {
            return Err(EngineError::InsufficientHistory {
                required: 2,
                actual: history.len(),
            });
        }
        let latest = &history[history.len() - 1];

        let (state, is_actual) = match actual {
            Some(mut record) => {
                record.month_num = 1;
                (record, true)
            }
            None => (
                advanced_state(latest, &trend, seed_month.to_string(), 1),
                false,
            ),
        };

        let indices = calculator.score_record(scorer, &state)?;
        let step = ForecastStep {
            record: state.clone(),
            indices,
            is_actual,
        };
        let propagator = Self {
            scorer,
            calculator,
            trend,
            state,
        };
        Ok((propagator, step))
    }

    /// Advance one period and produce its step. Always synthetic.
    pub fn advance(&mut self) -> Result<ForecastStep> {
        let month = next_month(&self.state.month)?;
        let month_num = self.state.month_num + 1;
        let state = advanced_state(&self.state, &self.trend, month, month_num);

        let indices = self.calculator.score_record(self.scorer, &state)?;
        self.state = state.clone();
        Ok(ForecastStep {
            record: state,
            indices,
            is_actual: false,
        })
    }

    /// Run the remaining horizon, producing one step per period.
    pub fn run(&mut self, horizon: usize) -> Result<Vec<ForecastStep>> {
        let mut steps = Vec::with_capacity(horizon);
        for _ in 0..horizon {
            steps.push(self.advance()?);
        }
        Ok(steps)
    }
}

/// Single-jump variant for an out-of-coverage point request: deltas advance
/// by `trend × months_ahead`, lag fields carry over verbatim from the last
/// historical record, workloads clamp to their floors.
pub fn project_period(
    latest: &RegionRecord,
    trend: &TrendVector,
    months_ahead: i64,
    month: &str,
    month_num: u32,
) -> RegionRecord {
    let k = months_ahead as f64;
    RegionRecord {
        month: month.to_string(),
        month_num,
        d_e: latest.d_e + trend.d_e * k,
        d_d: latest.d_d + trend.d_d * k,
        d_c: latest.d_c + trend.d_c * k,
        d_b_lag1: latest.d_b_lag1,
        d_b_lag2: latest.d_b_lag2,
        d_c_lag1: latest.d_c_lag1,
        b: (latest.b + trend.b * k).max(WORKLOAD_FLOOR),
        c: (latest.c + trend.c * k).max(CHILD_FLOOR),
        d: (latest.d + trend.d * k).max(WORKLOAD_FLOOR),
    }
}
