//! Integration tests for `SqliteStore` against an in-memory database.

use std::time::Duration;

use rolodex_core::{ContactFields, ContactUpdate, store::ContactStore};
use uuid::Uuid;

use crate::{Error, SqliteStore};

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn fields(name: &str, email: &str, phone: &str) -> ContactFields {
  ContactFields {
    name:         Some(name.into()),
    email:        Some(email.into()),
    phone_number: Some(phone.into()),
    message:      Some("Please call me back".into()),
  }
}

fn ada() -> ContactFields { fields("Ada Lovelace", "ada@example.com", "5551234567") }

fn grace() -> ContactFields { fields("Grace Hopper", "grace@example.com", "5559876543") }

// ─── Create / read ───────────────────────────────────────────────────────────

#[tokio::test]
async fn create_assigns_id_and_timestamps() {
  let s = store().await;

  let contact = s.create(ada()).await.unwrap();
  assert_eq!(contact.name, "Ada Lovelace");
  assert_eq!(contact.created_at, contact.updated_at);

  let fetched = s.find_by_id(contact.id).await.unwrap();
  assert_eq!(fetched, Some(contact));
}

#[tokio::test]
async fn find_missing_returns_none() {
  let s = store().await;
  assert!(s.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
}

#[tokio::test]
async fn list_empty_store() {
  let s = store().await;
  assert!(s.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn list_preserves_insertion_order() {
  let s = store().await;
  let first = s.create(grace()).await.unwrap();
  let second = s.create(ada()).await.unwrap();

  let all = s.list_all().await.unwrap();
  let ids: Vec<_> = all.iter().map(|c| c.id).collect();
  assert_eq!(ids, [first.id, second.id]);
}

#[tokio::test]
async fn message_is_optional() {
  let s = store().await;
  let mut input = ada();
  input.message = None;

  let contact = s.create(input).await.unwrap();
  assert!(contact.message.is_none());
  let fetched = s.find_by_id(contact.id).await.unwrap().unwrap();
  assert!(fetched.message.is_none());
}

// ─── Validation ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn invalid_create_persists_nothing() {
  let s = store().await;

  let err = s
    .create(fields("ab", "not-an-email", "12345"))
    .await
    .unwrap_err();
  let violations = match err {
    Error::Core(rolodex_core::Error::Validation(v)) => v,
    other => panic!("expected validation failure, got {other:?}"),
  };
  assert_eq!(violations.len(), 3);

  assert!(s.list_all().await.unwrap().is_empty());
}

// ─── Uniqueness ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn duplicate_email_is_a_conflict() {
  let s = store().await;
  s.create(ada()).await.unwrap();

  let err = s
    .create(fields("Someone Else", "ada@example.com", "5550000000"))
    .await
    .unwrap_err();
  assert!(matches!(
    err,
    Error::Core(rolodex_core::Error::Conflict { ref field, ref value })
      if field == "email" && value == "ada@example.com"
  ));
  assert_eq!(s.list_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn duplicate_phone_number_is_a_conflict() {
  let s = store().await;
  s.create(ada()).await.unwrap();

  let err = s
    .create(fields("Someone Else", "else@example.com", "5551234567"))
    .await
    .unwrap_err();
  assert!(matches!(
    err,
    Error::Core(rolodex_core::Error::Conflict { ref field, ref value })
      if field == "phoneNumber" && value == "5551234567"
  ));
}

#[tokio::test]
async fn store_errors_convert_into_core_taxonomy() {
  let s = store().await;
  s.create(ada()).await.unwrap();
  let err: rolodex_core::Error = s.create(ada()).await.unwrap_err().into();
  assert!(matches!(err, rolodex_core::Error::Conflict { .. }));

  let db: rolodex_core::Error = Error::DateParse("bad".into()).into();
  assert!(matches!(db, rolodex_core::Error::Unexpected(m) if m.contains("bad")));
}

// ─── Update ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn update_message_only_refreshes_updated_at() {
  let s = store().await;
  let original = s.create(ada()).await.unwrap();
  tokio::time::sleep(Duration::from_millis(5)).await;

  let updated = s
    .update_by_id(original.id, ContactUpdate {
      message: Some(Some("New message".into())),
      ..Default::default()
    })
    .await
    .unwrap()
    .unwrap();

  assert_eq!(updated.message.as_deref(), Some("New message"));
  assert_eq!(updated.name, original.name);
  assert_eq!(updated.email, original.email);
  assert_eq!(updated.phone_number, original.phone_number);
  assert_eq!(updated.created_at, original.created_at);
  assert!(updated.updated_at > original.updated_at);

  let fetched = s.find_by_id(original.id).await.unwrap().unwrap();
  assert_eq!(fetched, updated);
}

#[tokio::test]
async fn update_missing_returns_none() {
  let s = store().await;
  let result = s.update_by_id(Uuid::new_v4(), ada().into()).await.unwrap();
  assert!(result.is_none());
}

#[tokio::test]
async fn update_revalidates_new_values() {
  let s = store().await;
  let original = s.create(ada()).await.unwrap();

  let err = s
    .update_by_id(original.id, ContactUpdate {
      phone_number: Some(Some("12345".into())),
      ..Default::default()
    })
    .await
    .unwrap_err();
  assert!(matches!(
    err,
    Error::Core(rolodex_core::Error::Validation(ref v)) if v.len() == 1 && v[0].field == "phoneNumber"
  ));

  let fetched = s.find_by_id(original.id).await.unwrap().unwrap();
  assert_eq!(fetched, original);
}

#[tokio::test]
async fn update_with_null_message_clears_it() {
  let s = store().await;
  let original = s
    .create(ContactFields { message: Some("hi".into()), ..ada() })
    .await
    .unwrap();

  let updated = s
    .update_by_id(original.id, ContactUpdate {
      message: Some(None),
      ..Default::default()
    })
    .await
    .unwrap()
    .unwrap();
  assert_eq!(updated.message, None);
  assert_eq!(updated.name, original.name);

  let fetched = s.find_by_id(original.id).await.unwrap().unwrap();
  assert_eq!(fetched.message, None);
}

#[tokio::test]
async fn update_with_null_name_is_required_violation() {
  let s = store().await;
  let original = s.create(ada()).await.unwrap();

  let err = s
    .update_by_id(original.id, ContactUpdate {
      name: Some(None),
      ..Default::default()
    })
    .await
    .unwrap_err();
  assert!(matches!(
    err,
    Error::Core(rolodex_core::Error::Validation(ref v))
      if v.len() == 1 && v[0].field == "name" && v[0].message == "Name is required"
  ));

  let fetched = s.find_by_id(original.id).await.unwrap().unwrap();
  assert_eq!(fetched, original);
}

#[tokio::test]
async fn update_into_anothers_email_is_a_conflict() {
  let s = store().await;
  s.create(ada()).await.unwrap();
  let other = s.create(grace()).await.unwrap();

  let err = s
    .update_by_id(other.id, ContactUpdate {
      email: Some(Some("ada@example.com".into())),
      ..Default::default()
    })
    .await
    .unwrap_err();
  assert!(matches!(
    err,
    Error::Core(rolodex_core::Error::Conflict { ref field, .. }) if field == "email"
  ));

  let fetched = s.find_by_id(other.id).await.unwrap().unwrap();
  assert_eq!(fetched.email, "grace@example.com");
}

#[tokio::test]
async fn update_keeping_own_email_is_not_a_conflict() {
  let s = store().await;
  let original = s.create(ada()).await.unwrap();
  let updated = s.update_by_id(original.id, ada().into()).await.unwrap();
  assert!(updated.is_some());
}

// ─── Delete ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_returns_record_then_none() {
  let s = store().await;
  let contact = s.create(ada()).await.unwrap();

  let deleted = s.delete_by_id(contact.id).await.unwrap();
  assert_eq!(deleted, Some(contact.clone()));
  assert!(s.find_by_id(contact.id).await.unwrap().is_none());

  let again = s.delete_by_id(contact.id).await.unwrap();
  assert!(again.is_none());
}

#[tokio::test]
async fn delete_frees_unique_values() {
  let s = store().await;
  let contact = s.create(ada()).await.unwrap();
  s.delete_by_id(contact.id).await.unwrap();

  let recreated = s.create(ada()).await.unwrap();
  assert_ne!(recreated.id, contact.id);
}
