//! Error types for PIX payload encoding.

use thiserror::Error;

/// Errors that can occur while encoding a payload.
///
/// Both variants are contract violations of a single `encode` call: nothing
/// transient can fail in a pure computation, so callers fix the input and
/// re-invoke rather than retry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EncodeError {
    #[error("invalid amount {amount}: must be finite, non-negative and representable")]
    InvalidAmount { amount: f64 },

    #[error("value for field {tag} is {len} characters, max {max}")]
    FieldTooLong { tag: String, len: usize, max: usize },
}
