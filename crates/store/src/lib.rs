//! In-memory reference dataset
//!
//! Holds the normalized per-period records the engine reads. Loaded once by
//! the host, then shared read-only across request handlers; how the rows
//! get here (CSV, database, fixtures) is the host's business.

pub mod memory;
pub mod raw;

pub use memory::MemoryStore;
pub use raw::RawRow;

pub use engine_spi::{RegionRecord, RegionStore};
