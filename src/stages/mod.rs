//! Password generation stages
//!
//! Each stage handles one step of an attempt; the orchestrator in
//! [`generator`](crate::generator) runs them in order and stops at the first error.

mod alphabet;
mod candidate;
mod length;
mod selection;

pub use alphabet::build_alphabet;
pub use candidate::{generate_candidate, generate_covering};
pub use length::validate_length;
pub use selection::collect_selections;

use crate::error::GenerationError;

/// Result type for stage functions.
pub type StageResult<T> = Result<T, GenerationError>;
