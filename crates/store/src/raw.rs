//! Raw ingestion rows.
//!
//! The upstream tabular data is loose about casing ("B" vs "b") and may
//! omit workload columns entirely. All of that is resolved here, once, so
//! the engine only ever sees the normalized [`RegionRecord`] schema.

use serde::Deserialize;

use engine_spi::RegionRecord;

fn default_month_num() -> u32 {
    1
}

fn default_b() -> f64 {
    100.0
}

fn default_c() -> f64 {
    25.0
}

fn default_d() -> f64 {
    50.0
}

/// One row as the upstream dataset ships it.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRow {
    pub state: String,
    pub district: String,
    pub month: String,
    #[serde(default = "default_month_num")]
    pub month_num: u32,
    #[serde(default)]
    pub d_e: f64,
    #[serde(default)]
    pub d_d: f64,
    #[serde(default)]
    pub d_c: f64,
    #[serde(default)]
    pub d_b_lag1: f64,
    #[serde(default)]
    pub d_b_lag2: f64,
    #[serde(default)]
    pub d_c_lag1: f64,
    #[serde(alias = "B", default = "default_b")]
    pub b: f64,
    #[serde(alias = "C", default = "default_c")]
    pub c: f64,
    #[serde(alias = "D", default = "default_d")]
    pub d: f64,
}

impl RawRow {
    /// Normalize into the engine schema, dropping the location key.
    pub fn into_record(self) -> RegionRecord {
        RegionRecord {
            month: self.month,
            month_num: self.month_num,
            d_e: self.d_e,
            d_d: self.d_d,
            d_c: self.d_c,
            d_b_lag1: self.d_b_lag1,
            d_b_lag2: self.d_b_lag2,
            d_c_lag1: self.d_c_lag1,
            b: self.b,
            c: self.c,
            d: self.d,
        }
    }
}
