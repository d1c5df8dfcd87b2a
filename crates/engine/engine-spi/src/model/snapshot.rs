//! Aggregation inputs.

use serde::{Deserialize, Serialize};

use super::RegionRecord;

/// The most recent period's record for one entity of a group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntitySnapshot {
    /// Entity name (district)
    pub entity: String,
    /// Latest-period record for the entity
    pub record: RegionRecord,
}

impl EntitySnapshot {
    pub fn new(entity: &str, record: RegionRecord) -> Self {
        Self {
            entity: entity.to_string(),
            record,
        }
    }
}
