//! Group aggregation
//!
//! Folds per-entity index results into a group-level summary: a ranking,
//! mean metrics, and summed workloads.

use serde::{Deserialize, Serialize};

use engine_spi::{EngineError, EntitySnapshot, Result, RiskIndices, RiskScorer};

use crate::indices::IndexCalculator;

/// Indices for one entity of the group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityIndices {
    pub entity: String,
    pub indices: RiskIndices,
}

/// Arithmetic means of the normalized metrics across the group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroupMeans {
    pub asi: f64,
    pub aers: f64,
    pub mbu: f64,
    pub rp: f64,
}

/// Summed workload counts across the group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkloadTotals {
    pub biometric: f64,
    pub child: f64,
    pub demographic: f64,
}

/// Group-level aggregation result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateSummary {
    /// Per-entity indices, sorted descending by asi (stable on ties)
    pub entries: Vec<EntityIndices>,
    pub means: GroupMeans,
    pub workload: WorkloadTotals,
}

/// Compute indices for every entity of a group and fold them into a
/// summary. Entities are independent; the only ordering guarantee is the
/// final ranking.
pub fn aggregate_group(
    scorer: &dyn RiskScorer,
    calculator: &IndexCalculator,
    snapshots: &[EntitySnapshot],
) -> Result<AggregateSummary> {
    if snapshots.is_empty() {
        return Err(EngineError::NoData);
    }

    let mut entries = Vec::with_capacity(snapshots.len());
    let mut means = GroupMeans {
        asi: 0.0,
        aers: 0.0,
        mbu: 0.0,
        rp: 0.0,
    };
    let mut workload = WorkloadTotals {
        biometric: 0.0,
        child: 0.0,
        demographic: 0.0,
    };

    for snapshot in snapshots {
        let indices = calculator.score_record(scorer, &snapshot.record)?;
        means.asi += indices.asi;
        means.aers += indices.aers;
        means.mbu += indices.mbu;
        means.rp += indices.rp;
        workload.biometric += snapshot.record.b;
        workload.child += snapshot.record.c;
        workload.demographic += snapshot.record.d;
        entries.push(EntityIndices {
            entity: snapshot.entity.clone(),
            indices,
        });
    }

    let count = snapshots.len() as f64;
    means.asi /= count;
    means.aers /= count;
    means.mbu /= count;
    means.rp /= count;

    // Stable sort: entities with equal asi keep their input order.
    entries.sort_by(|a, b| {
        b.indices
            .asi
            .partial_cmp(&a.indices.asi)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    Ok(AggregateSummary {
        entries,
        means,
        workload,
    })
}
