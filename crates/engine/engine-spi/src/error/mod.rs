//! Error module for engine operations

mod engine_error;

pub use engine_error::{EngineError, Result};
