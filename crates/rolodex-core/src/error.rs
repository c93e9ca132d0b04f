//! Error types for `rolodex-core`.
//!
//! Every failure a contact operation can produce falls into exactly one of
//! these variants. Storage backends convert their own errors into this type
//! and the HTTP layer maps each variant to a status code.

use thiserror::Error;

use crate::FieldViolation;

#[derive(Debug, Error)]
pub enum Error {
  /// One or more field rules rejected the input.
  #[error("validation failed for {}", field_list(.0))]
  Validation(Vec<FieldViolation>),

  /// A write collided with a uniqueness constraint held by another contact.
  #[error("{field} already exists: {value:?}")]
  Conflict { field: String, value: String },

  #[error("contact not found: {0}")]
  NotFound(String),

  #[error("{0}")]
  Unexpected(String),
}

fn field_list(violations: &[FieldViolation]) -> String {
  violations
    .iter()
    .map(|v| v.field.as_str())
    .collect::<Vec<_>>()
    .join(", ")
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
