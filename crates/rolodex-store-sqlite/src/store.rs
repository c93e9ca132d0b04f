//! [`SqliteStore`]: the SQLite implementation of [`ContactStore`].

use std::path::Path;

use chrono::Utc;
use rusqlite::OptionalExtension as _;
use uuid::Uuid;

use rolodex_core::{
  Contact, ContactFields, ContactUpdate, Field, store::ContactStore, validate,
};

use crate::{
  encode::{ContactRow, RawContact, encode_uuid},
  schema::{CONTACT_COLUMNS, SCHEMA},
  Error, Result,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A contact store backed by a single SQLite file.
///
/// Cloning is cheap; the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store, for tests.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── Constraint classification ───────────────────────────────────────────────

/// Map a failed write to [`rolodex_core::Error::Conflict`] when SQLite reports
/// a UNIQUE violation. Anything else stays a database error.
fn classify_write_error(err: tokio_rusqlite::Error, written: &Contact) -> Error {
  if let tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(code, Some(msg))) = &err
    && code.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    && let Some(column) = unique_column(msg)
  {
    let (field, value) = conflicting_field(column, written);
    tracing::debug!(%field, "unique constraint rejected write");
    return rolodex_core::Error::Conflict { field, value }.into();
  }
  Error::Database(err)
}

/// Extract the column from `UNIQUE constraint failed: contacts.email`.
///
/// SQLite names only the first index that failed, so a write colliding on
/// both email and phone number reports one of them.
fn unique_column(message: &str) -> Option<&str> {
  let columns = message.strip_prefix("UNIQUE constraint failed: ")?;
  columns.split(", ").next()?.rsplit('.').next()
}

/// The wire name of a column and the value `written` held for it.
fn conflicting_field(column: &str, written: &Contact) -> (String, String) {
  match column {
    "email" => (Field::Email.as_str().to_owned(), written.email.clone()),
    "phone_number" => {
      (Field::PhoneNumber.as_str().to_owned(), written.phone_number.clone())
    }
    other => (other.to_owned(), String::new()),
  }
}

// ─── ContactStore impl ───────────────────────────────────────────────────────

impl ContactStore for SqliteStore {
  type Error = Error;

  async fn list_all(&self) -> Result<Vec<Contact>> {
    let raws: Vec<RawContact> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {CONTACT_COLUMNS} FROM contacts ORDER BY rowid"
        ))?;
        let rows = stmt
          .query_map([], RawContact::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawContact::into_contact).collect()
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<Contact>> {
    let id_str = encode_uuid(id);

    let raw: Option<RawContact> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            &format!("SELECT {CONTACT_COLUMNS} FROM contacts WHERE id = ?1"),
            rusqlite::params![id_str],
            RawContact::from_row,
          )
          .optional()?)
      })
      .await?;

    raw.map(RawContact::into_contact).transpose()
  }

  async fn create(&self, fields: ContactFields) -> Result<Contact> {
    let now = Utc::now();
    let contact = validate(fields)?.into_contact(Uuid::new_v4(), now, now);
    let row = ContactRow::from(&contact);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO contacts (
             id, name, email, phone_number, message, created_at, updated_at
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
          rusqlite::params![
            row.id,
            row.name,
            row.email,
            row.phone_number,
            row.message,
            row.created_at,
            row.updated_at,
          ],
        )?;
        Ok(())
      })
      .await
      .map_err(|e| classify_write_error(e, &contact))?;

    Ok(contact)
  }

  async fn update_by_id(
    &self,
    id:      Uuid,
    changes: ContactUpdate,
  ) -> Result<Option<Contact>> {
    let current = match self.find_by_id(id).await? {
      Some(c) => c,
      None    => return Ok(None),
    };

    let updated = validate(changes.merged_onto(&current))?
      .into_contact(id, current.created_at, Utc::now());
    let row = ContactRow::from(&updated);

    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE contacts
           SET name = ?2, email = ?3, phone_number = ?4, message = ?5,
               updated_at = ?6
           WHERE id = ?1",
          rusqlite::params![
            row.id,
            row.name,
            row.email,
            row.phone_number,
            row.message,
            row.updated_at,
          ],
        )?)
      })
      .await
      .map_err(|e| classify_write_error(e, &updated))?;

    // Deleted between the read and the write.
    if changed == 0 {
      return Ok(None);
    }

    Ok(Some(updated))
  }

  async fn delete_by_id(&self, id: Uuid) -> Result<Option<Contact>> {
    let id_str = encode_uuid(id);

    let raw: Option<RawContact> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            &format!(
              "DELETE FROM contacts WHERE id = ?1 RETURNING {CONTACT_COLUMNS}"
            ),
            rusqlite::params![id_str],
            RawContact::from_row,
          )
          .optional()?)
      })
      .await?;

    raw.map(RawContact::into_contact).transpose()
  }
}
