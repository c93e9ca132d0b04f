//! The response envelope every endpoint returns.
//!
//! ```json
//! { "success": true, "message": "...", "data": {...}, "errors": [] }
//! ```
//!
//! `errors` is always present; `data` is `null` on failure.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Envelope<T> {
  pub success: bool,
  pub message: &'static str,
  pub data:    Option<T>,
  pub errors:  Vec<ErrorEntry>,
}

impl<T> Envelope<T> {
  pub fn success(message: &'static str, data: T) -> Self {
    Self { success: true, message, data: Some(data), errors: Vec::new() }
  }

  pub fn failure(message: &'static str, errors: Vec<ErrorEntry>) -> Self {
    Self { success: false, message, data: None, errors }
  }
}

/// One problem with a request, attributed to a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorEntry {
  pub field:   String,
  pub message: String,
  pub value:   Option<String>,
}

impl ErrorEntry {
  pub fn new(
    field:   impl Into<String>,
    message: impl Into<String>,
    value:   Option<String>,
  ) -> Self {
    Self { field: field.into(), message: message.into(), value }
  }

  /// A failure not attributable to any input field.
  pub fn general(message: String) -> Self {
    let message = if message.is_empty() {
      "An unexpected error occurred".to_owned()
    } else {
      message
    };
    Self::new("general", message, None)
  }
}

impl From<rolodex_core::FieldViolation> for ErrorEntry {
  fn from(v: rolodex_core::FieldViolation) -> Self {
    Self { field: v.field, message: v.message, value: v.value }
  }
}
