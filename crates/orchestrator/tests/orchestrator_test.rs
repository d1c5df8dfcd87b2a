//! Integration tests for request routing over fixture data.

use std::sync::Arc;

use engine_facade::RegionRecord;
use orchestrator::{
    BatchOutcome, FailureKind, FailureReport, LookupRequest, ManualFeatures,
    PredictionOrchestrator, PredictRequest,
};
use scorer::LinearScorer;
use store::MemoryStore;

fn record(month: &str, month_num: u32, b: f64, c: f64, d: f64, d_e: f64) -> RegionRecord {
    RegionRecord {
        month: month.to_string(),
        month_num,
        d_e,
        d_d: 0.02,
        d_c: 0.3,
        d_b_lag1: 0.07,
        d_b_lag2: 0.05,
        d_c_lag1: 0.28,
        b,
        c,
        d,
    }
}

fn fixture_store() -> MemoryStore {
    let mut store = MemoryStore::new();
    store.insert("S1", "D1", record("2025-10", 10, 100.0, 25.0, 50.0, 0.1));
    store.insert("S1", "D1", record("2025-11", 11, 102.0, 24.0, 49.0, 0.15));
    store.insert("S1", "D1", record("2025-12", 12, 104.0, 23.0, 48.0, 0.2));
    store.insert("S1", "D2", record("2025-11", 11, 78.0, 21.0, 39.0, 0.35));
    store.insert("S1", "D2", record("2025-12", 12, 80.0, 20.0, 40.0, 0.4));
    store.insert("S2", "D3", record("2025-12", 12, 60.0, 15.0, 30.0, 0.25));
    store
}

/// Scores d_e alone so expected predictions are easy to read off.
fn delta_scorer() -> LinearScorer {
    LinearScorer::new([1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0], 0.0)
}

fn orchestrator_with(store: MemoryStore, scorer: LinearScorer) -> PredictionOrchestrator {
    PredictionOrchestrator::new(Arc::new(store), Arc::new(scorer))
}

fn orchestrator() -> PredictionOrchestrator {
    orchestrator_with(fixture_store(), delta_scorer())
}

// ============================================================================
// Point Prediction — Lookup
// ============================================================================

#[test]
fn test_lookup_exact_period() {
    let orch = orchestrator();
    let request = PredictRequest::Lookup(LookupRequest::new("S1", "D1", "2025-12"));
    let report = orch.predict(&request).unwrap();

    assert_eq!(report.ml_prediction, 0.2);
    assert_eq!(report.asi, 70.0);
    assert!(!report.is_projected);

    let extracted = report.extracted_features.unwrap();
    assert_eq!(extracted.b, 104.0);
    assert_eq!(extracted.month_num, 12);

    let location = report.location.unwrap();
    assert_eq!(location.month, "2025-12");

    // No importances on the scorer, so the fallback split is reported.
    let importances = report.feature_importances.unwrap();
    assert_eq!(importances.imp_e, 0.34);
    assert_eq!(importances.imp_c, 0.33);
}

#[test]
fn test_lookup_unknown_district_not_found() {
    let orch = orchestrator();
    let request = PredictRequest::Lookup(LookupRequest::new("S1", "nowhere", "2025-12"));
    let failure: FailureReport = orch.predict(&request).unwrap_err().into();
    assert_eq!(failure.kind, FailureKind::NotFound);
    assert!(failure.error.contains("nowhere"));
}

#[test]
fn test_lookup_unknown_past_period_lists_available_months() {
    let orch = orchestrator();
    let request = PredictRequest::Lookup(LookupRequest::new("S1", "D1", "2025-01"));
    let failure: FailureReport = orch.predict(&request).unwrap_err().into();
    assert_eq!(failure.kind, FailureKind::NotFound);
    assert!(failure.error.contains("available months"));
    assert!(failure.error.contains("2025-10"));
}

#[test]
fn test_lookup_future_period_is_projected() {
    let orch = orchestrator();
    // Three months past the last historical record (2025-12).
    let request = PredictRequest::Lookup(LookupRequest::new("S1", "D1", "2026-03"));
    let report = orch.predict(&request).unwrap();

    assert!(report.is_projected);
    // d_e advances by trend (0.05) times three months.
    assert_eq!(report.ml_prediction, 0.35);
    assert_eq!(report.asi, 85.0);

    let extracted = report.extracted_features.unwrap();
    assert_eq!(extracted.b, 110.0);
    assert_eq!(extracted.c, 20.0);
    assert_eq!(extracted.d, 45.0);
    assert_eq!(extracted.month_num, 3);
    // Lag fields carry over verbatim in the single-jump variant.
    assert_eq!(extracted.d_b_lag1, 0.07);
    assert_eq!(extracted.d_b_lag2, 0.05);

    // The projected branch reports no importances.
    assert!(report.feature_importances.is_none());
}

#[test]
fn test_lookup_future_period_insufficient_history() {
    let orch = orchestrator();
    // D3 has a single historical record; projection cannot start.
    let request = PredictRequest::Lookup(LookupRequest::new("S2", "D3", "2026-02"));
    let failure: FailureReport = orch.predict(&request).unwrap_err().into();
    assert_eq!(failure.kind, FailureKind::InsufficientHistory);
}

// ============================================================================
// Point Prediction — Manual Input
// ============================================================================

#[test]
fn test_manual_input_with_defaults() {
    // Scorer reads d_c_lag1 so the 0.9 × d_c fallback is observable.
    let scorer = LinearScorer::new([0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0], 0.0);
    let orch = orchestrator_with(fixture_store(), scorer);

    let request = PredictRequest::Manual(ManualFeatures {
        d_c: 0.2,
        ..ManualFeatures::default()
    });
    let report = orch.predict(&request).unwrap();

    assert!((report.ml_prediction - 0.18).abs() < 1e-9);
    assert_eq!(report.asi, 68.0);
    // Workload defaults: b=100, c=25, d=50.
    assert_eq!(report.mbu, 0.1667);
    assert_eq!(report.rp, 0.75);
    // Manual responses carry no location or extracted features.
    assert!(report.location.is_none());
    assert!(report.extracted_features.is_none());
    assert!(report.feature_importances.is_some());
}

#[test]
fn test_manual_input_explicit_fields_override_defaults() {
    let scorer = LinearScorer::new([0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0], 0.0);
    let orch = orchestrator_with(fixture_store(), scorer);

    let request = PredictRequest::Manual(ManualFeatures {
        d_c: 0.2,
        d_c_lag1: Some(0.05),
        b: Some(200.0),
        c: Some(0.0),
        ..ManualFeatures::default()
    });
    let report = orch.predict(&request).unwrap();

    assert!((report.ml_prediction - 0.05).abs() < 1e-9);
    assert_eq!(report.mbu, 0.0);
    assert_eq!(report.rp, 1.0);
}

// ============================================================================
// Forecast
// ============================================================================

#[test]
fn test_forecast_synthetic_seed() {
    let orch = orchestrator();
    let report = orch.forecast("S1", "D1").unwrap();

    assert_eq!(report.timeline.historical_cutoff, "2025-12");
    assert_eq!(report.timeline.current_month, "2026-01");
    assert_eq!(report.timeline.future_start, "2026-02");

    assert_eq!(report.trends.b_trend, 2.0);
    assert_eq!(report.trends.c_trend, -1.0);
    assert_eq!(report.trends.d_trend, -1.0);

    assert_eq!(report.historical.len(), 3);
    assert!(report.historical.iter().all(|step| step.is_actual));

    assert!(!report.current.is_actual);
    assert_eq!(report.current.month, "2026-01");
    assert_eq!(report.current.b, 106.0);
    assert_eq!(report.current.asi, 75.0);

    assert_eq!(report.months.len(), 3);
    assert_eq!(report.months[0].month, "2026-02");
    assert_eq!(report.months[2].month, "2026-04");
    assert!(report.months.iter().all(|step| !step.is_actual));
    assert_eq!(report.months[0].b, 108.0);
    assert_eq!(report.months[0].asi, 80.0);
}

#[test]
fn test_forecast_serializes_numbered_months() {
    let orch = orchestrator();
    let report = orch.forecast("S1", "D1").unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["month1"]["month"], "2026-02");
    assert_eq!(json["month2"]["month"], "2026-03");
    assert_eq!(json["month3"]["month"], "2026-04");
    assert!(json.get("month4").is_none());
    assert_eq!(json["trends"]["b_trend"], 2.0);
}

#[test]
fn test_forecast_uses_actual_seed_when_stored() {
    let mut store = fixture_store();
    store.insert("S1", "D1", record("2026-01", 1, 120.0, 30.0, 55.0, 0.5));
    let orch = orchestrator_with(store, delta_scorer());

    let report = orch.forecast("S1", "D1").unwrap();
    assert!(report.current.is_actual);
    assert_eq!(report.current.b, 120.0);
    // Steps advance from the actual seed by the historical trend.
    assert_eq!(report.months[0].b, 122.0);
    assert!(!report.months[0].is_actual);
}

#[test]
fn test_forecast_insufficient_history() {
    let orch = orchestrator();
    let failure: FailureReport = orch.forecast("S2", "D3").unwrap_err().into();
    assert_eq!(failure.kind, FailureKind::InsufficientHistory);
    assert!(failure.error.contains("got 1"));
}

#[test]
fn test_forecast_unknown_location_not_found() {
    let orch = orchestrator();
    let failure: FailureReport = orch.forecast("S9", "D9").unwrap_err().into();
    assert_eq!(failure.kind, FailureKind::NotFound);
}

// ============================================================================
// History
// ============================================================================

#[test]
fn test_history_ordered_and_scored() {
    let orch = orchestrator();
    let report = orch.history("S1", "D1").unwrap();

    assert_eq!(report.records_count, 3);
    let months: Vec<&str> = report.history.iter().map(|p| p.month.as_str()).collect();
    assert_eq!(months, vec!["2025-10", "2025-11", "2025-12"]);
    let asi: Vec<f64> = report.history.iter().map(|p| p.asi).collect();
    assert_eq!(asi, vec![60.0, 65.0, 70.0]);
    // Raw features ride along with each point.
    assert_eq!(report.history[0].b, 100.0);
    assert_eq!(report.history[0].d_e, 0.1);
}

#[test]
fn test_history_unknown_location_not_found() {
    let orch = orchestrator();
    let failure: FailureReport = orch.history("S1", "nowhere").unwrap_err().into();
    assert_eq!(failure.kind, FailureKind::NotFound);
}

// ============================================================================
// Aggregate
// ============================================================================

#[test]
fn test_aggregate_latest_period() {
    let orch = orchestrator();
    let report = orch.aggregate("S1").unwrap();

    assert_eq!(report.month, "2025-12");
    assert_eq!(report.districts_count, 2);

    // D2 (asi 90) outranks D1 (asi 70).
    assert_eq!(report.all_districts[0].district, "D2");
    assert_eq!(report.all_districts[0].asi, 90.0);
    assert_eq!(report.all_districts[1].district, "D1");
    assert_eq!(report.top_districts.len(), 2);

    assert_eq!(report.average.asi, 80.0);
    assert_eq!(report.workload.biometric, 184.0);
    assert_eq!(report.workload.child, 43.0);
    assert_eq!(report.workload.demographic, 88.0);
}

#[test]
fn test_aggregate_mean_matches_entry_mean() {
    let orch = orchestrator();
    let report = orch.aggregate("S1").unwrap();
    let mean: f64 = report.all_districts.iter().map(|d| d.asi).sum::<f64>()
        / report.all_districts.len() as f64;
    assert!((report.average.asi - mean).abs() < 1e-9);
}

#[test]
fn test_aggregate_top_districts_capped_at_five() {
    let mut store = MemoryStore::new();
    for i in 0..8 {
        store.insert(
            "S1",
            &format!("D{i}"),
            record("2025-12", 12, 100.0, 25.0, 50.0, 0.05 * i as f64),
        );
    }
    let orch = orchestrator_with(store, delta_scorer());
    let report = orch.aggregate("S1").unwrap();
    assert_eq!(report.all_districts.len(), 8);
    assert_eq!(report.top_districts.len(), 5);
    // Top entry is the highest-asi district.
    assert_eq!(report.top_districts[0].district, "D7");
}

#[test]
fn test_aggregate_unknown_state_not_found() {
    let orch = orchestrator();
    let failure: FailureReport = orch.aggregate("S9").unwrap_err().into();
    assert_eq!(failure.kind, FailureKind::NotFound);
}

// ============================================================================
// Batch
// ============================================================================

#[test]
fn test_batch_preserves_order_and_isolates_failures() {
    let orch = orchestrator();
    let requests = vec![
        PredictRequest::Lookup(LookupRequest::new("S1", "D1", "2025-12")),
        PredictRequest::Lookup(LookupRequest::new("S1", "nowhere", "2025-12")),
        PredictRequest::Manual(ManualFeatures {
            d_e: 0.3,
            ..ManualFeatures::default()
        }),
    ];
    let outcomes = orch.predict_batch(&requests);

    assert_eq!(outcomes.len(), 3);
    match &outcomes[0] {
        BatchOutcome::Success(report) => assert_eq!(report.asi, 70.0),
        BatchOutcome::Failure(_) => panic!("item 1 should succeed"),
    }
    match &outcomes[1] {
        BatchOutcome::Failure(failure) => assert_eq!(failure.kind, FailureKind::NotFound),
        BatchOutcome::Success(_) => panic!("item 2 should fail"),
    }
    match &outcomes[2] {
        BatchOutcome::Success(report) => assert_eq!(report.asi, 80.0),
        BatchOutcome::Failure(_) => panic!("item 3 should succeed"),
    }
}

// ============================================================================
// Metadata / Status / Validation
// ============================================================================

#[test]
fn test_metadata() {
    let orch = orchestrator();
    let metadata = orch.metadata();
    assert_eq!(metadata.states, vec!["S1", "S2"]);
    assert_eq!(metadata.months, vec!["2025-10", "2025-11", "2025-12"]);
    assert_eq!(metadata.districts_by_state["S1"], vec!["D1", "D2"]);
}

#[test]
fn test_status() {
    let orch = orchestrator();
    let status = orch.status();
    assert_eq!(status.records_count, 6);
    assert_eq!(status.states_count, 2);
    assert_eq!(status.scorer.kind, "linear");
    assert_eq!(status.scorer.n_features, 7);
}

#[test]
fn test_blank_identifiers_are_invalid_input() {
    let orch = orchestrator();
    let failure: FailureReport = orch.forecast("", "D1").unwrap_err().into();
    assert_eq!(failure.kind, FailureKind::InvalidInput);

    let failure: FailureReport = orch.history("S1", " ").unwrap_err().into();
    assert_eq!(failure.kind, FailureKind::InvalidInput);

    let failure: FailureReport = orch.aggregate("").unwrap_err().into();
    assert_eq!(failure.kind, FailureKind::InvalidInput);
}
