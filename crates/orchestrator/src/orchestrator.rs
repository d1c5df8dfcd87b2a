//! Request routing.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, warn};

use engine_facade::{
    aggregate_group, estimate_trend, month_number, months_between, next_month, project_period,
    resolve_weights, EngineError, ForecastConfig, ForecastPropagator, ForecastStep,
    IndexCalculator, ManualDefaults, RegionRecord, RegionStore, Result, RiskScorer, ScorerInfo,
};

use crate::report::{
    round_dp, AggregateReport, AverageReport, BatchOutcome, DistrictScore, ExtractedFeatures,
    ForecastReport, HistoryPoint, HistoryReport, ImportanceReport, Location, MetadataReport,
    PredictionReport, StatusReport, StepReport, Timeline, TrendReport, WorkloadReport,
};
use crate::request::{LookupRequest, ManualFeatures, PredictRequest};

/// Historical periods echoed back with a forecast.
const HISTORICAL_SUMMARY_LEN: usize = 3;

/// Routes requests to the correct calculation path.
///
/// Holds shared read-only handles to the reference dataset and the scorer;
/// both are loaded once by the host and never mutated, so the orchestrator
/// is freely shareable across concurrent request handlers.
pub struct PredictionOrchestrator {
    store: Arc<dyn RegionStore>,
    scorer: Arc<dyn RiskScorer>,
    config: ForecastConfig,
    manual_defaults: ManualDefaults,
}

impl PredictionOrchestrator {
    pub fn new(store: Arc<dyn RegionStore>, scorer: Arc<dyn RiskScorer>) -> Self {
        Self {
            store,
            scorer,
            config: ForecastConfig::default(),
            manual_defaults: ManualDefaults::default(),
        }
    }

    /// Replace the forecast configuration.
    pub fn with_config(mut self, config: ForecastConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the manual-input defaults.
    pub fn with_manual_defaults(mut self, defaults: ManualDefaults) -> Self {
        self.manual_defaults = defaults;
        self
    }

    fn calculator(&self) -> IndexCalculator {
        IndexCalculator::new(resolve_weights(self.scorer.as_ref()))
    }

    /// Route a point prediction request.
    pub fn predict(&self, request: &PredictRequest) -> Result<PredictionReport> {
        match request {
            PredictRequest::Lookup(lookup) => self.predict_lookup(lookup),
            PredictRequest::Manual(features) => self.predict_manual(features),
        }
    }

    fn predict_lookup(&self, request: &LookupRequest) -> Result<PredictionReport> {
        require_field(&request.state, "state")?;
        require_field(&request.district, "district")?;
        require_field(&request.month, "month")?;

        if let Some(record) =
            self.store
                .record_at(&request.state, &request.district, &request.month)
        {
            debug!(
                state = %request.state,
                district = %request.district,
                month = %request.month,
                "serving point prediction from stored record"
            );
            let calculator = self.calculator();
            let indices = calculator.score_record(self.scorer.as_ref(), &record)?;
            let mut report = PredictionReport::from_indices(&indices);
            report.feature_importances =
                Some(ImportanceReport::from_weights(calculator.weights()));
            report.extracted_features = Some(ExtractedFeatures::from_record(&record));
            report.location = Some(Location {
                state: request.state.clone(),
                district: request.district.clone(),
                month: request.month.clone(),
            });
            return Ok(report);
        }

        let records = self.store.records(&request.state, &request.district);
        if records.is_empty() {
            return Err(EngineError::NotFound(format!(
                "no data for district {:?} in state {:?}",
                request.district, request.state
            )));
        }

        if request.month.as_str() > self.config.historical_cutoff.as_str() {
            return self.predict_projected(request, &records);
        }

        // Known district, unknown past period.
        let mut available: Vec<String> = records.iter().map(|r| r.month.clone()).collect();
        available.dedup();
        let tail_start = available.len().saturating_sub(5);
        Err(EngineError::NotFound(format!(
            "no historical data for period {:?}; available months: {}",
            request.month,
            available[tail_start..].join(", ")
        )))
    }

    /// Out-of-coverage future period: one jump of trend × months-ahead from
    /// the last historical record, lag fields carried verbatim.
    fn predict_projected(
        &self,
        request: &LookupRequest,
        records: &[RegionRecord],
    ) -> Result<PredictionReport> {
        let historical = self.historical_slice(records);
        if historical.len() < 2 {
            return Err(EngineError::InsufficientHistory {
                required: 2,
                actual: historical.len(),
            });
        }

        let trend = estimate_trend(historical, self.config.trend_window)?;
        let latest = &historical[historical.len() - 1];
        let months_ahead = months_between(&latest.month, &request.month)?;
        let target_month_num = month_number(&request.month)?;
        let projected =
            project_period(latest, &trend, months_ahead, &request.month, target_month_num);

        debug!(
            state = %request.state,
            district = %request.district,
            month = %request.month,
            months_ahead,
            "projecting out-of-coverage period from trend"
        );

        let calculator = self.calculator();
        let indices = calculator.score_record(self.scorer.as_ref(), &projected)?;
        let mut report = PredictionReport::from_indices(&indices);
        report.is_projected = true;
        report.extracted_features = Some(ExtractedFeatures::from_record(&projected));
        report.location = Some(Location {
            state: request.state.clone(),
            district: request.district.clone(),
            month: request.month.clone(),
        });
        Ok(report)
    }

    fn predict_manual(&self, features: &ManualFeatures) -> Result<PredictionReport> {
        let defaults = self.manual_defaults;
        let record = RegionRecord {
            month: String::new(),
            month_num: features.month_num.unwrap_or(defaults.current_month_num),
            d_e: features.d_e,
            d_d: features.d_d,
            d_c: features.d_c,
            d_b_lag1: features.d_b_lag1.unwrap_or(defaults.d_b_lag1),
            d_b_lag2: features.d_b_lag2.unwrap_or(defaults.d_b_lag2),
            d_c_lag1: features
                .d_c_lag1
                .unwrap_or(features.d_c * defaults.d_c_lag1_factor),
            b: features.b.unwrap_or(defaults.b),
            c: features.c.unwrap_or(defaults.c),
            d: features.d.unwrap_or(defaults.d),
        };

        let calculator = self.calculator();
        let indices = calculator.score_record(self.scorer.as_ref(), &record)?;
        let mut report = PredictionReport::from_indices(&indices);
        report.feature_importances = Some(ImportanceReport::from_weights(calculator.weights()));
        Ok(report)
    }

    /// Multi-step forecast: trends from the cutoff window, a seeded current
    /// period, then the configured horizon of propagated steps.
    pub fn forecast(&self, state: &str, district: &str) -> Result<ForecastReport> {
        require_field(state, "state")?;
        require_field(district, "district")?;

        let records = self.store.records(state, district);
        if records.is_empty() {
            return Err(EngineError::NotFound(format!(
                "no data for district {district:?} in state {state:?}"
            )));
        }

        let historical = self.historical_slice(&records);
        if historical.len() < 2 {
            return Err(EngineError::InsufficientHistory {
                required: 2,
                actual: historical.len(),
            });
        }

        let calculator = self.calculator();
        let trend = estimate_trend(historical, self.config.trend_window)?;
        let seed_month = next_month(&self.config.historical_cutoff)?;
        let actual_seed = self.store.record_at(state, district, &seed_month);

        let (mut propagator, seed) = ForecastPropagator::seed(
            self.scorer.as_ref(),
            &calculator,
            trend,
            historical,
            actual_seed,
            &seed_month,
        )?;
        let steps = propagator.run(self.config.horizon)?;

        let summary_start = historical.len().saturating_sub(HISTORICAL_SUMMARY_LEN);
        let mut historical_summary = Vec::with_capacity(HISTORICAL_SUMMARY_LEN);
        for record in &historical[summary_start..] {
            let indices = calculator.score_record(self.scorer.as_ref(), record)?;
            historical_summary.push(StepReport::from_step(&ForecastStep {
                record: record.clone(),
                indices,
                is_actual: true,
            }));
        }

        debug!(state, district, seed = %seed_month, horizon = self.config.horizon, "forecast complete");

        Ok(ForecastReport {
            state: state.to_string(),
            district: district.to_string(),
            timeline: Timeline {
                historical_cutoff: self.config.historical_cutoff.clone(),
                current_month: seed_month.clone(),
                future_start: next_month(&seed_month)?,
            },
            trends: TrendReport {
                b_trend: round_dp(trend.b, 2),
                c_trend: round_dp(trend.c, 2),
                d_trend: round_dp(trend.d, 2),
            },
            historical: historical_summary,
            current: StepReport::from_step(&seed),
            months: steps.iter().map(StepReport::from_step).collect(),
        })
    }

    /// Scored history, ordered by month; no forecasting.
    pub fn history(&self, state: &str, district: &str) -> Result<HistoryReport> {
        require_field(state, "state")?;
        require_field(district, "district")?;

        let records = self.store.records(state, district);
        if records.is_empty() {
            return Err(EngineError::NotFound(format!(
                "no data for district {district:?} in state {state:?}"
            )));
        }

        let calculator = self.calculator();
        let mut history = Vec::with_capacity(records.len());
        for record in &records {
            let indices = calculator.score_record(self.scorer.as_ref(), record)?;
            history.push(HistoryPoint::new(record, &indices));
        }

        Ok(HistoryReport {
            state: state.to_string(),
            district: district.to_string(),
            records_count: history.len(),
            history,
        })
    }

    /// Latest-period aggregation across a state's districts.
    pub fn aggregate(&self, state: &str) -> Result<AggregateReport> {
        require_field(state, "state")?;

        let snapshots = self.store.latest_snapshots(state);
        if snapshots.is_empty() {
            return Err(EngineError::NotFound(format!(
                "no data for state {state:?}"
            )));
        }
        let month = snapshots[0].record.month.clone();

        let calculator = self.calculator();
        let summary = aggregate_group(self.scorer.as_ref(), &calculator, &snapshots)?;

        let all_districts: Vec<DistrictScore> = summary
            .entries
            .iter()
            .map(|entry| DistrictScore {
                district: entry.entity.clone(),
                asi: round_dp(entry.indices.asi, 2),
                aers: round_dp(entry.indices.aers, 4),
            })
            .collect();
        let top_districts = all_districts.iter().take(5).cloned().collect();

        Ok(AggregateReport {
            state: state.to_string(),
            month,
            districts_count: summary.entries.len(),
            average: AverageReport {
                asi: round_dp(summary.means.asi, 2),
                aers: round_dp(summary.means.aers, 4),
                mbu: round_dp(summary.means.mbu, 4),
                rp: round_dp(summary.means.rp, 4),
            },
            workload: WorkloadReport {
                biometric: round_dp(summary.workload.biometric, 2),
                child: round_dp(summary.workload.child, 2),
                demographic: round_dp(summary.workload.demographic, 2),
            },
            top_districts,
            all_districts,
        })
    }

    /// Apply point routing per item; input order is preserved and a failed
    /// item never aborts the rest.
    pub fn predict_batch(&self, requests: &[PredictRequest]) -> Vec<BatchOutcome> {
        requests
            .iter()
            .map(|request| match self.predict(request) {
                Ok(report) => BatchOutcome::Success(report),
                Err(error) => {
                    warn!(%error, "batch item failed");
                    BatchOutcome::Failure(error.into())
                }
            })
            .collect()
    }

    /// Dataset metadata for selection surfaces.
    pub fn metadata(&self) -> MetadataReport {
        let states = self.store.states();
        let districts_by_state: BTreeMap<String, Vec<String>> = states
            .iter()
            .map(|state| (state.clone(), self.store.districts(state)))
            .collect();
        MetadataReport {
            states,
            months: self.store.months(),
            districts_by_state,
        }
    }

    /// Scorer introspection.
    pub fn scorer_info(&self) -> ScorerInfo {
        self.scorer.describe()
    }

    /// Readiness summary.
    pub fn status(&self) -> StatusReport {
        StatusReport {
            records_count: self.store.len(),
            states_count: self.store.states().len(),
            scorer: self.scorer.describe(),
        }
    }

    /// Records at or before the historical cutoff. `records` is already
    /// month-sorted, so the qualifying prefix is contiguous.
    fn historical_slice<'a>(&self, records: &'a [RegionRecord]) -> &'a [RegionRecord] {
        let end = records.partition_point(|r| r.month.as_str() <= self.config.historical_cutoff.as_str());
        &records[..end]
    }
}

fn require_field(value: &str, name: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(EngineError::InvalidInput(format!("{name} is required")));
    }
    Ok(())
}
