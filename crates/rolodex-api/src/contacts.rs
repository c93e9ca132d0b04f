//! Handlers for `/contact` endpoints.
//!
//! | Method   | Path           | Notes |
//! |----------|----------------|-------|
//! | `GET`    | `/contact`     | Every contact, insertion order |
//! | `POST`   | `/contact`     | Body: [`ContactFields`]; returns 201 + stored contact |
//! | `GET`    | `/contact/:id` | 404 if not found |
//! | `PUT`    | `/contact/:id` | Body: [`ContactUpdate`]; absent fields keep their value, `null` clears |
//! | `DELETE` | `/contact/:id` | Returns the deleted contact |
//!
//! Ids that are not UUIDs cannot name a contact and are reported as 404.

use std::{fmt, sync::Arc};

use axum::{
  Json,
  extract::{Path, State, rejection::JsonRejection},
  http::StatusCode,
  response::{IntoResponse, Response},
};
use rolodex_core::{ContactFields, ContactUpdate, store::ContactStore};
use serde::Serialize;
use uuid::Uuid;

use crate::{envelope::Envelope, error::ApiError};

// ─── Operations ───────────────────────────────────────────────────────────────

/// The five contact operations, each with its own envelope wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
  List,
  Get,
  Create,
  Update,
  Delete,
}

impl Operation {
  pub const fn success_status(self) -> StatusCode {
    match self {
      Operation::Create => StatusCode::CREATED,
      _ => StatusCode::OK,
    }
  }

  pub const fn success_message(self) -> &'static str {
    match self {
      Operation::List => "Contacts retrieved successfully",
      Operation::Get => "Contact retrieved successfully",
      Operation::Create => "Contact data saved successfully",
      Operation::Update => "Contact data updated successfully",
      Operation::Delete => "Contact deleted successfully",
    }
  }

  /// Headline for a 500.
  pub const fn failure_message(self) -> &'static str {
    match self {
      Operation::List => "Failed to retrieve contacts",
      Operation::Get => "Failed to retrieve contact",
      Operation::Create | Operation::Update => "Internal server error",
      Operation::Delete => "Failed to delete contact",
    }
  }
}

impl fmt::Display for Operation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Operation::List => "list contacts",
      Operation::Get => "get contact",
      Operation::Create => "create contact",
      Operation::Update => "update contact",
      Operation::Delete => "delete contact",
    })
  }
}

fn respond<T: Serialize>(op: Operation, data: T) -> Response {
  (op.success_status(), Json(Envelope::success(op.success_message(), data)))
    .into_response()
}

fn parse_id(raw: &str) -> Option<Uuid> { Uuid::parse_str(raw).ok() }

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /contact`
pub async fn list<S>(State(store): State<Arc<S>>) -> Result<Response, ApiError>
where
  S: ContactStore,
{
  let op = Operation::List;
  let contacts = store.list_all().await.map_err(|e| ApiError::store(op, e))?;
  Ok(respond(op, contacts))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /contact/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<Response, ApiError>
where
  S: ContactStore,
{
  let op = Operation::Get;
  let found = match parse_id(&id) {
    Some(uuid) => store
      .find_by_id(uuid)
      .await
      .map_err(|e| ApiError::store(op, e))?,
    None => None,
  };
  let contact = found.ok_or_else(|| ApiError::not_found(op, id))?;
  Ok(respond(op, contact))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /contact`, returns 201 + the stored contact.
pub async fn create<S>(
  State(store): State<Arc<S>>,
  body: Result<Json<ContactFields>, JsonRejection>,
) -> Result<Response, ApiError>
where
  S: ContactStore,
{
  let op = Operation::Create;
  let Json(fields) = body?;
  let contact = store.create(fields).await.map_err(|e| ApiError::store(op, e))?;
  tracing::info!(id = %contact.id, "contact created");
  Ok(respond(op, contact))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /contact/:id`
pub async fn update<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
  body: Result<Json<ContactUpdate>, JsonRejection>,
) -> Result<Response, ApiError>
where
  S: ContactStore,
{
  let op = Operation::Update;
  let Json(changes) = body?;
  let updated = match parse_id(&id) {
    Some(uuid) => store
      .update_by_id(uuid, changes)
      .await
      .map_err(|e| ApiError::store(op, e))?,
    None => None,
  };
  let contact = updated.ok_or_else(|| ApiError::not_found(op, id))?;
  tracing::info!(id = %contact.id, "contact updated");
  Ok(respond(op, contact))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /contact/:id`, returns the contact as it was.
pub async fn delete<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<Response, ApiError>
where
  S: ContactStore,
{
  let op = Operation::Delete;
  let deleted = match parse_id(&id) {
    Some(uuid) => store
      .delete_by_id(uuid)
      .await
      .map_err(|e| ApiError::store(op, e))?,
    None => None,
  };
  let contact = deleted.ok_or_else(|| ApiError::not_found(op, id))?;
  tracing::info!(id = %contact.id, "contact deleted");
  Ok(respond(op, contact))
}
