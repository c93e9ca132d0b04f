//! Core types and trait definitions for the Rolodex contact service.
//!
//! This crate is deliberately free of HTTP and database dependencies. It owns
//! the contact record, the field validation rules, and the error taxonomy that
//! every other layer speaks.

pub mod contact;
pub mod error;
pub mod store;
pub mod validation;

pub use contact::{Contact, ContactFields, ContactUpdate, ValidContact};
pub use error::{Error, Result};
pub use validation::{Field, FieldViolation, validate};
