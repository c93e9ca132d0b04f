//! SQL schema for the Rolodex SQLite store.
//!
//! Executed once at connection startup. There is a single table and no
//! migration path; `PRAGMA user_version` records the layout for the day one
//! is needed.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- Listing order is rowid order, i.e. insertion order.
CREATE TABLE IF NOT EXISTS contacts (
    id           TEXT PRIMARY KEY,
    name         TEXT NOT NULL,
    email        TEXT NOT NULL UNIQUE,
    phone_number TEXT NOT NULL UNIQUE,
    message      TEXT,
    created_at   TEXT NOT NULL,   -- ISO 8601 UTC; server-assigned
    updated_at   TEXT NOT NULL    -- ISO 8601 UTC; refreshed on update
);

PRAGMA user_version = 1;
";

/// Column list shared by every `SELECT` / `RETURNING` clause, in the order
/// [`RawContact`](crate::encode::RawContact) reads them.
pub const CONTACT_COLUMNS: &str =
  "id, name, email, phone_number, message, created_at, updated_at";
