//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! Every failure leaves through here, so every failure is an
//! [`Envelope`](crate::envelope::Envelope).

use axum::{
  Json,
  extract::rejection::JsonRejection,
  http::{Method, StatusCode},
  response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{
  contacts::Operation,
  envelope::{Envelope, ErrorEntry},
};

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  /// A contact operation failed. `op` picks the headline for 500s.
  #[error("{op} failed: {source}")]
  Contact {
    op:     Operation,
    #[source]
    source: rolodex_core::Error,
  },

  /// Carries the rejection's status when it is 413, otherwise 400.
  #[error("invalid request body: {message}")]
  InvalidBody { status: StatusCode, message: String },

  #[error("no route for {method} {path}")]
  NoRoute { method: Method, path: String },

  #[error("{method} not allowed on {path}")]
  MethodNotAllowed { method: Method, path: String },
}

impl ApiError {
  /// Wrap a store failure raised while performing `op`.
  pub fn store<E: Into<rolodex_core::Error>>(op: Operation, e: E) -> Self {
    ApiError::Contact { op, source: e.into() }
  }

  pub fn not_found(op: Operation, id: impl Into<String>) -> Self {
    ApiError::Contact { op, source: rolodex_core::Error::NotFound(id.into()) }
  }

  pub fn status(&self) -> StatusCode {
    use rolodex_core::Error as E;
    match self {
      ApiError::Contact { source, .. } => match source {
        E::Validation(_) => StatusCode::BAD_REQUEST,
        E::Conflict { .. } => StatusCode::CONFLICT,
        E::NotFound(_) => StatusCode::NOT_FOUND,
        E::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
      },
      ApiError::InvalidBody { status, .. } => *status,
      ApiError::NoRoute { .. } => StatusCode::NOT_FOUND,
      ApiError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
    }
  }

  /// The envelope headline and error entries for this failure.
  fn into_parts(self) -> (&'static str, Vec<ErrorEntry>) {
    use rolodex_core::Error as E;
    match self {
      ApiError::Contact { op, source } => match source {
        E::Validation(violations) => (
          "Validation failed",
          violations.into_iter().map(ErrorEntry::from).collect(),
        ),
        E::Conflict { field, value } => {
          let message = conflict_message(&field);
          ("Duplicate entry", vec![ErrorEntry::new(field, message, Some(value))])
        }
        E::NotFound(id) => (
          "Contact not found",
          vec![ErrorEntry::new(
            "id",
            "Contact with the provided ID does not exist",
            Some(id),
          )],
        ),
        E::Unexpected(message) => {
          (op.failure_message(), vec![ErrorEntry::general(message)])
        }
      },
      ApiError::InvalidBody { status, message } => {
        let headline = if status == StatusCode::PAYLOAD_TOO_LARGE {
          "Request body too large"
        } else {
          "Invalid request body"
        };
        (headline, vec![ErrorEntry::new("body", message, None)])
      }
      ApiError::NoRoute { method, path } => (
        "Route not found",
        vec![ErrorEntry::new(
          "path",
          format!("No route for {method} {path}"),
          Some(path),
        )],
      ),
      ApiError::MethodNotAllowed { method, path } => (
        "Method not allowed",
        vec![ErrorEntry::new(
          "method",
          format!("{method} is not supported on {path}"),
          Some(method.to_string()),
        )],
      ),
    }
  }
}

/// `email` and `phoneNumber` have their own wording; any other constrained
/// field gets the templated form.
fn conflict_message(field: &str) -> String {
  match field {
    "email" => "Email already exists.".to_owned(),
    "phoneNumber" => "Phone number already exists.".to_owned(),
    other => format!("{other} already exists."),
  }
}

impl From<JsonRejection> for ApiError {
  fn from(rejection: JsonRejection) -> Self {
    let status = if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
      StatusCode::PAYLOAD_TOO_LARGE
    } else {
      StatusCode::BAD_REQUEST
    };
    ApiError::InvalidBody { status, message: rejection.body_text() }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    if status.is_server_error() {
      tracing::warn!(error = %self, "request failed");
    } else {
      tracing::debug!(error = %self, %status, "request rejected");
    }

    let (message, errors) = self.into_parts();
    (status, Json(Envelope::<()>::failure(message, errors))).into_response()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn conflict_messages() {
    assert_eq!(conflict_message("email"), "Email already exists.");
    assert_eq!(conflict_message("phoneNumber"), "Phone number already exists.");
    assert_eq!(conflict_message("id"), "id already exists.");
  }

  #[test]
  fn each_class_has_its_status() {
    use rolodex_core::Error as E;
    let cases = [
      (E::Validation(vec![]), StatusCode::BAD_REQUEST),
      (
        E::Conflict { field: "email".into(), value: "a@b.co".into() },
        StatusCode::CONFLICT,
      ),
      (E::NotFound("x".into()), StatusCode::NOT_FOUND),
      (E::Unexpected("boom".into()), StatusCode::INTERNAL_SERVER_ERROR),
    ];
    for (source, status) in cases {
      assert_eq!(ApiError::store(Operation::Create, source).status(), status);
    }
  }

  #[test]
  fn conflict_produces_single_entry() {
    let err = ApiError::store(Operation::Update, rolodex_core::Error::Conflict {
      field: "phoneNumber".into(),
      value: "5551234567".into(),
    });
    let (message, errors) = err.into_parts();
    assert_eq!(message, "Duplicate entry");
    assert_eq!(errors, vec![ErrorEntry::new(
      "phoneNumber",
      "Phone number already exists.",
      Some("5551234567".into()),
    )]);
  }

  #[test]
  fn unexpected_uses_operation_headline() {
    let err = ApiError::store(Operation::Delete, rolodex_core::Error::Unexpected(String::new()));
    let (message, errors) = err.into_parts();
    assert_eq!(message, "Failed to delete contact");
    assert_eq!(errors[0].field, "general");
    assert_eq!(errors[0].message, "An unexpected error occurred");
    assert_eq!(errors[0].value, None);
  }
}
