//! Region store trait definition.

use crate::model::{EntitySnapshot, RegionRecord};

/// Read-only access to the normalized reference dataset.
///
/// The dataset is loaded once at startup and never mutated; implementations
/// must be safe to read from arbitrarily many concurrent request handlers.
/// Records come back with one normalized schema — any raw-column variance
/// is resolved before a record leaves the store.
pub trait RegionStore: Send + Sync {
    /// All records for a state/district, sorted by month ascending.
    fn records(&self, state: &str, district: &str) -> Vec<RegionRecord>;

    /// The record for an exact state/district/month key, if present.
    fn record_at(&self, state: &str, district: &str, month: &str) -> Option<RegionRecord>;

    /// Latest-period snapshot for every district of a state. All snapshots
    /// share the state's most recent month.
    fn latest_snapshots(&self, state: &str) -> Vec<EntitySnapshot>;

    /// Distinct states, sorted.
    fn states(&self) -> Vec<String>;

    /// Distinct months across the dataset, sorted.
    fn months(&self) -> Vec<String>;

    /// Distinct districts of a state, sorted.
    fn districts(&self, state: &str) -> Vec<String>;

    /// Total record count.
    fn len(&self) -> usize;

    /// Whether the store holds no records.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
