//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings with full sub-second precision.
//! UUIDs are stored as hyphenated lowercase strings.

use chrono::{DateTime, Utc};
use rolodex_core::Contact;
use uuid::Uuid;

use crate::{Error, Result};

// ─── Uuid ─────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── DateTime<Utc> ────────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Row types ────────────────────────────────────────────────────────────────

/// A `contacts` row exactly as SQLite returns it.
pub struct RawContact {
  pub id:           String,
  pub name:         String,
  pub email:        String,
  pub phone_number: String,
  pub message:      Option<String>,
  pub created_at:   String,
  pub updated_at:   String,
}

impl RawContact {
  /// Read a row selected with [`CONTACT_COLUMNS`](crate::schema::CONTACT_COLUMNS).
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:           row.get(0)?,
      name:         row.get(1)?,
      email:        row.get(2)?,
      phone_number: row.get(3)?,
      message:      row.get(4)?,
      created_at:   row.get(5)?,
      updated_at:   row.get(6)?,
    })
  }

  pub fn into_contact(self) -> Result<Contact> {
    Ok(Contact {
      id:           decode_uuid(&self.id)?,
      name:         self.name,
      email:        self.email,
      phone_number: self.phone_number,
      message:      self.message,
      created_at:   decode_dt(&self.created_at)?,
      updated_at:   decode_dt(&self.updated_at)?,
    })
  }
}

/// The column values of a contact about to be written.
pub struct ContactRow {
  pub id:           String,
  pub name:         String,
  pub email:        String,
  pub phone_number: String,
  pub message:      Option<String>,
  pub created_at:   String,
  pub updated_at:   String,
}

impl From<&Contact> for ContactRow {
  fn from(c: &Contact) -> Self {
    Self {
      id:           encode_uuid(c.id),
      name:         c.name.clone(),
      email:        c.email.clone(),
      phone_number: c.phone_number.clone(),
      message:      c.message.clone(),
      created_at:   encode_dt(c.created_at),
      updated_at:   encode_dt(c.updated_at),
    }
  }
}
