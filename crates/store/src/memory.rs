//! In-memory store implementation.

use std::collections::BTreeSet;

use engine_spi::{EntitySnapshot, RegionRecord, RegionStore};

use crate::raw::RawRow;

#[derive(Debug, Clone)]
struct StoredRecord {
    state: String,
    district: String,
    record: RegionRecord,
}

/// Resident, read-only dataset of normalized records keyed by
/// state/district/month.
///
/// Built once at startup; the query volume is small (a few thousand rows),
/// so lookups are linear scans over the resident rows.
#[derive(Debug, Default)]
pub struct MemoryStore {
    rows: Vec<StoredRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from raw upstream rows, normalizing each one.
    pub fn from_rows(rows: Vec<RawRow>) -> Self {
        let mut store = Self::new();
        for row in rows {
            let state = row.state.clone();
            let district = row.district.clone();
            store.insert(&state, &district, row.into_record());
        }
        store
    }

    /// Insert one normalized record.
    pub fn insert(&mut self, state: &str, district: &str, record: RegionRecord) {
        self.rows.push(StoredRecord {
            state: state.to_string(),
            district: district.to_string(),
            record,
        });
    }
}

impl RegionStore for MemoryStore {
    fn records(&self, state: &str, district: &str) -> Vec<RegionRecord> {
        let mut records: Vec<RegionRecord> = self
            .rows
            .iter()
            .filter(|r| r.state == state && r.district == district)
            .map(|r| r.record.clone())
            .collect();
        records.sort_by(|a, b| a.month.cmp(&b.month));
        records
    }

    fn record_at(&self, state: &str, district: &str, month: &str) -> Option<RegionRecord> {
        self.rows
            .iter()
            .find(|r| r.state == state && r.district == district && r.record.month == month)
            .map(|r| r.record.clone())
    }

    fn latest_snapshots(&self, state: &str) -> Vec<EntitySnapshot> {
        let latest_month = match self
            .rows
            .iter()
            .filter(|r| r.state == state)
            .map(|r| r.record.month.as_str())
            .max()
        {
            Some(month) => month.to_string(),
            None => return Vec::new(),
        };

        let mut snapshots: Vec<EntitySnapshot> = Vec::new();
        for row in self
            .rows
            .iter()
            .filter(|r| r.state == state && r.record.month == latest_month)
        {
            // One snapshot per district; the first row wins on duplicates.
            if snapshots.iter().any(|s| s.entity == row.district) {
                continue;
            }
            snapshots.push(EntitySnapshot::new(&row.district, row.record.clone()));
        }
        snapshots
    }

    fn states(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|r| r.state.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    fn months(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|r| r.record.month.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    fn districts(&self, state: &str) -> Vec<String> {
        self.rows
            .iter()
            .filter(|r| r.state == state)
            .map(|r| r.district.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    fn len(&self) -> usize {
        self.rows.len()
    }
}
