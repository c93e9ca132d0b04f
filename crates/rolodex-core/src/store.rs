//! The `ContactStore` trait.
//!
//! Implemented by storage backends (e.g. `rolodex-store-sqlite`). The HTTP
//! layer depends on this abstraction, not on any concrete backend.

use std::future::Future;

use uuid::Uuid;

use crate::{Contact, ContactFields, ContactUpdate};

/// Storage for contact records.
///
/// Absence is never an error: lookups, updates and deletes of an unknown id
/// resolve to `Ok(None)`. Writes validate their input with
/// [`validate`](crate::validate) and rely on the backend itself to enforce
/// email and phone number uniqueness atomically.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait ContactStore: Send + Sync {
  type Error: std::error::Error + Into<crate::Error> + Send + Sync + 'static;

  /// Every contact, in insertion order.
  fn list_all(
    &self,
  ) -> impl Future<Output = Result<Vec<Contact>, Self::Error>> + Send + '_;

  fn find_by_id(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Contact>, Self::Error>> + Send + '_;

  /// Validate and persist a new contact. The store assigns the id and sets
  /// both timestamps.
  fn create(
    &self,
    fields: ContactFields,
  ) -> impl Future<Output = Result<Contact, Self::Error>> + Send + '_;

  /// Overlay `changes` onto the stored contact, re-validate the result, and
  /// persist it with a fresh `updated_at`.
  fn update_by_id(
    &self,
    id: Uuid,
    changes: ContactUpdate,
  ) -> impl Future<Output = Result<Option<Contact>, Self::Error>> + Send + '_;

  /// Remove a contact, returning the record as it was before deletion.
  fn delete_by_id(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Contact>, Self::Error>> + Send + '_;
}
