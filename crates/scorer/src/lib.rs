//! Reference scorer implementation
//!
//! A linear model over the 7-feature vector. Stands in for whatever model
//! the host loads; the engine only ever sees the [`RiskScorer`] trait.

pub mod linear;

pub use linear::LinearScorer;

pub use engine_spi::{RiskScorer, ScorerInfo};
