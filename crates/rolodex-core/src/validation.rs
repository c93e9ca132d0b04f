//! Declarative field rules for contact records.
//!
//! Each checked field has one [`Rule`]: a message for when the value is
//! missing, a predicate over the value, and a message for when the predicate
//! fails. [`validate`] runs every rule and reports all violations at once.

use crate::{ContactFields, Error, Result, ValidContact};

// ─── Fields ──────────────────────────────────────────────────────────────────

/// A format-checked contact field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
  Name,
  Email,
  PhoneNumber,
}

impl Field {
  /// The field's name on the wire.
  pub const fn as_str(self) -> &'static str {
    match self {
      Field::Name => "name",
      Field::Email => "email",
      Field::PhoneNumber => "phoneNumber",
    }
  }
}

/// One rule failure: which field, why, and the value that was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
  pub field:   String,
  pub message: String,
  pub value:   Option<String>,
}

// ─── Rules ───────────────────────────────────────────────────────────────────

/// A required field's validation rule.
pub struct Rule {
  pub field:     Field,
  /// Reported when the value is absent or empty.
  pub required:  &'static str,
  pub predicate: fn(&str) -> bool,
  /// Reported when `predicate` rejects the value.
  pub invalid:   &'static str,
}

impl Rule {
  /// Apply the rule, handing back the value on success.
  pub fn check(&self, value: Option<String>) -> Result<String, FieldViolation> {
    match value {
      Some(v) if v.is_empty() => Err(self.violation(self.required, Some(v))),
      None => Err(self.violation(self.required, None)),
      Some(v) if !(self.predicate)(&v) => Err(self.violation(self.invalid, Some(v))),
      Some(v) => Ok(v),
    }
  }

  fn violation(&self, message: &str, value: Option<String>) -> FieldViolation {
    FieldViolation {
      field: self.field.as_str().to_owned(),
      message: message.to_owned(),
      value,
    }
  }
}

pub const NAME: Rule = Rule {
  field:     Field::Name,
  required:  "Name is required",
  predicate: is_valid_name,
  invalid:   "Name must be at least 3 characters long",
};

pub const EMAIL: Rule = Rule {
  field:     Field::Email,
  required:  "Email is required",
  predicate: is_valid_email,
  invalid:   "Please enter a valid email address",
};

pub const PHONE_NUMBER: Rule = Rule {
  field:     Field::PhoneNumber,
  required:  "Phone number is required",
  predicate: is_valid_phone_number,
  invalid:   "Phone number must be exactly 10 digits",
};

/// At least three characters (not bytes).
fn is_valid_name(name: &str) -> bool { name.chars().count() >= 3 }

/// `local@domain.tld`: exactly one `@`, no whitespace, and a dot in the
/// domain with something on both sides of it.
fn is_valid_email(email: &str) -> bool {
  if email.chars().any(is_email_space) {
    return false;
  }

  let Some((local, domain)) = email.split_once('@') else {
    return false;
  };
  if local.is_empty() || domain.contains('@') {
    return false;
  }

  domain
    .char_indices()
    .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// The set an ECMAScript `\s` matches: Unicode White_Space minus U+0085,
/// plus the byte order mark U+FEFF.
fn is_email_space(c: char) -> bool {
  (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// Exactly ten ASCII digits.
fn is_valid_phone_number(phone: &str) -> bool {
  phone.len() == 10 && phone.bytes().all(|b| b.is_ascii_digit())
}

// ─── Validator ───────────────────────────────────────────────────────────────

/// Validate `fields` against every rule, collecting all violations.
///
/// `message` is optional and unchecked.
pub fn validate(fields: ContactFields) -> Result<ValidContact> {
  let ContactFields { name, email, phone_number, message } = fields;

  match (NAME.check(name), EMAIL.check(email), PHONE_NUMBER.check(phone_number)) {
    (Ok(name), Ok(email), Ok(phone_number)) => Ok(ValidContact {
      name,
      email,
      phone_number,
      message,
    }),
    (name, email, phone_number) => Err(Error::Validation(
      [name.err(), email.err(), phone_number.err()]
        .into_iter()
        .flatten()
        .collect(),
    )),
  }
}
