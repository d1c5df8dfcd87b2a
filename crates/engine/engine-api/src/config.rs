//! Engine configuration types.

use serde::{Deserialize, Serialize};

/// Configuration for trend estimation and forward propagation.
///
/// The seed period of a forecast is the month after `historical_cutoff`;
/// records later than the cutoff never contribute to trend estimation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastConfig {
    /// Last period treated as historical, "YYYY-MM"
    pub historical_cutoff: String,
    /// Forecast steps beyond the seed period
    pub horizon: usize,
    /// Trailing records used for trend estimation
    pub trend_window: usize,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            historical_cutoff: "2025-12".to_string(),
            horizon: 3,
            trend_window: 3,
        }
    }
}

impl ForecastConfig {
    pub fn new(historical_cutoff: &str, horizon: usize, trend_window: usize) -> Self {
        Self {
            historical_cutoff: historical_cutoff.to_string(),
            horizon,
            trend_window,
        }
    }
}

/// Builder for ForecastConfig.
#[derive(Debug, Default)]
pub struct ForecastConfigBuilder {
    historical_cutoff: Option<String>,
    horizon: Option<usize>,
    trend_window: Option<usize>,
}

impl ForecastConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the historical cutoff period.
    pub fn historical_cutoff(mut self, cutoff: &str) -> Self {
        self.historical_cutoff = Some(cutoff.to_string());
        self
    }

    /// Set the forecast horizon.
    pub fn horizon(mut self, horizon: usize) -> Self {
        self.horizon = Some(horizon);
        self
    }

    /// Set the trend window.
    pub fn trend_window(mut self, window: usize) -> Self {
        self.trend_window = Some(window);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> Result<ForecastConfig, &'static str> {
        let config = ForecastConfig {
            historical_cutoff: self
                .historical_cutoff
                .unwrap_or_else(|| "2025-12".to_string()),
            horizon: self.horizon.unwrap_or(3),
            trend_window: self.trend_window.unwrap_or(3),
        };
        if config.horizon == 0 {
            return Err("horizon must be at least 1");
        }
        if config.trend_window == 0 {
            return Err("trend_window must be at least 1");
        }
        Ok(config)
    }
}

/// Fallbacks applied to manual feature input.
///
/// `current_month_num` stands in for "the current calendar month"; the host
/// layer owns the clock and injects it, keeping the engine deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ManualDefaults {
    /// Fallback lag-1 feature
    pub d_b_lag1: f64,
    /// Fallback lag-2 feature
    pub d_b_lag2: f64,
    /// Child-lag fallback as a factor of the supplied d_c
    pub d_c_lag1_factor: f64,
    /// Calendar month used when the request names none
    pub current_month_num: u32,
    /// Fallback biometric workload
    pub b: f64,
    /// Fallback child workload
    pub c: f64,
    /// Fallback demographic workload
    pub d: f64,
}

impl Default for ManualDefaults {
    fn default() -> Self {
        Self {
            d_b_lag1: 0.0,
            d_b_lag2: 0.0,
            d_c_lag1_factor: 0.9,
            current_month_num: 1,
            b: 100.0,
            c: 25.0,
            d: 50.0,
        }
    }
}

impl ManualDefaults {
    /// Defaults anchored at a host-supplied calendar month.
    pub fn at_month(current_month_num: u32) -> Self {
        Self {
            current_month_num,
            ..Self::default()
        }
    }
}
