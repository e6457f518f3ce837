//! Quantity normalization and quota utilization evaluation.

pub mod error;
pub mod evaluator;
pub mod quantity;
pub mod threshold;

pub use error::{EvaluationError, QuotaError};
pub use evaluator::evaluate;
pub use quantity::{Quantity, normalize};
pub use threshold::{classify, resolve_threshold};
