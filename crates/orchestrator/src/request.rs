//! Request types.

use serde::Deserialize;

/// Exact-period lookup against the reference dataset.
#[derive(Debug, Clone, Deserialize)]
pub struct LookupRequest {
    pub state: String,
    pub district: String,
    /// Period key, "YYYY-MM"; periods beyond the historical cutoff are
    /// answered by trend projection
    pub month: String,
}

impl LookupRequest {
    pub fn new(state: &str, district: &str, month: &str) -> Self {
        Self {
            state: state.to_string(),
            district: district.to_string(),
            month: month.to_string(),
        }
    }
}

/// Manual feature input, bypassing the dataset. Absent fields fall back to
/// the configured defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ManualFeatures {
    #[serde(default)]
    pub d_e: f64,
    #[serde(default)]
    pub d_d: f64,
    #[serde(default)]
    pub d_c: f64,
    pub d_b_lag1: Option<f64>,
    pub d_b_lag2: Option<f64>,
    pub d_c_lag1: Option<f64>,
    pub month_num: Option<u32>,
    pub b: Option<f64>,
    pub c: Option<f64>,
    pub d: Option<f64>,
}

/// A point prediction request. Payloads carrying the full
/// state/district/month key are lookups; anything else is treated as
/// manual feature input.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PredictRequest {
    Lookup(LookupRequest),
    Manual(ManualFeatures),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_key_parses_as_lookup() {
        let json = r#"{"state": "S1", "district": "D1", "month": "2025-10"}"#;
        let request: PredictRequest = serde_json::from_str(json).unwrap();
        assert!(matches!(request, PredictRequest::Lookup(_)));
    }

    #[test]
    fn test_feature_map_parses_as_manual() {
        let json = r#"{"d_e": 0.1, "d_d": 0.2, "d_c": 0.3, "b": 120.0}"#;
        let request: PredictRequest = serde_json::from_str(json).unwrap();
        match request {
            PredictRequest::Manual(features) => {
                assert_eq!(features.d_e, 0.1);
                assert_eq!(features.b, Some(120.0));
                assert!(features.month_num.is_none());
            }
            PredictRequest::Lookup(_) => panic!("expected manual request"),
        }
    }

    #[test]
    fn test_partial_key_falls_back_to_manual() {
        // Missing the month key: not a lookup, routed as manual input.
        let json = r#"{"state": "S1", "district": "D1"}"#;
        let request: PredictRequest = serde_json::from_str(json).unwrap();
        assert!(matches!(request, PredictRequest::Manual(_)));
    }

    #[test]
    fn test_empty_payload_is_manual_defaults() {
        let request: PredictRequest = serde_json::from_str("{}").unwrap();
        match request {
            PredictRequest::Manual(features) => {
                assert_eq!(features.d_e, 0.0);
                assert!(features.b.is_none());
            }
            PredictRequest::Lookup(_) => panic!("expected manual request"),
        }
    }
}
