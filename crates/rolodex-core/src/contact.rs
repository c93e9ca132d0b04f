//! The contact record and the field sets used to create and update it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

// ─── Stored record ───────────────────────────────────────────────────────────

/// A persisted contact.
///
/// `id`, `created_at` and `updated_at` are always assigned by the store, never
/// by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
  pub id:           Uuid,
  pub name:         String,
  pub email:        String,
  pub phone_number: String,
  pub message:      Option<String>,
  pub created_at:   DateTime<Utc>,
  pub updated_at:   DateTime<Utc>,
}

// ─── Client input ────────────────────────────────────────────────────────────

/// The client-writable fields of a contact, as received in a create body.
///
/// Every field is optional at this stage: a missing required field is a
/// validation failure, not a parse failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactFields {
  pub name:         Option<String>,
  pub email:        Option<String>,
  pub phone_number: Option<String>,
  pub message:      Option<String>,
}

/// An update body. Each field has three states: absent (`None`, keep the
/// stored value), `null` (`Some(None)`, clear it) or a new value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactUpdate {
  #[serde(default, deserialize_with = "present")]
  pub name:         Option<Option<String>>,
  #[serde(default, deserialize_with = "present")]
  pub email:        Option<Option<String>>,
  #[serde(default, deserialize_with = "present")]
  pub phone_number: Option<Option<String>>,
  #[serde(default, deserialize_with = "present")]
  pub message:      Option<Option<String>>,
}

/// Only called for keys that appear in the body, so `null` stays distinct
/// from a missing key.
fn present<'de, D>(de: D) -> Result<Option<Option<String>>, D::Error>
where
  D: Deserializer<'de>,
{
  Option::<String>::deserialize(de).map(Some)
}

impl ContactUpdate {
  /// Overlay the update onto `current`, producing the full record the update
  /// would write. Cleared fields come out as `None` and are left for
  /// [`validate`](crate::validate) to reject where they are required.
  pub fn merged_onto(self, current: &Contact) -> ContactFields {
    ContactFields {
      name:         self.name.unwrap_or_else(|| Some(current.name.clone())),
      email:        self.email.unwrap_or_else(|| Some(current.email.clone())),
      phone_number: self
        .phone_number
        .unwrap_or_else(|| Some(current.phone_number.clone())),
      message:      self.message.unwrap_or_else(|| current.message.clone()),
    }
  }
}

impl From<ContactFields> for ContactUpdate {
  /// Every supplied field is set; nothing is cleared.
  fn from(fields: ContactFields) -> Self {
    Self {
      name:         fields.name.map(Some),
      email:        fields.email.map(Some),
      phone_number: fields.phone_number.map(Some),
      message:      fields.message.map(Some),
    }
  }
}

/// Fields that have passed [`validate`](crate::validate) and may be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidContact {
  pub name:         String,
  pub email:        String,
  pub phone_number: String,
  pub message:      Option<String>,
}

impl ValidContact {
  /// Attach the store-assigned identity and timestamps.
  pub fn into_contact(
    self,
    id:         Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
  ) -> Contact {
    Contact {
      id,
      name: self.name,
      email: self.email,
      phone_number: self.phone_number,
      message: self.message,
      created_at,
      updated_at,
    }
  }
}
