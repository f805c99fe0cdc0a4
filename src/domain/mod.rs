//! Primitive validators and value objects.
//!
//! This module contains type-safe wrappers for email addresses and phone
//! numbers, and the error taxonomy shared by every model. Values here are
//! validated at construction time and are canonical from then on.

pub mod email;
pub mod errors;
pub mod phone;

pub use email::EmailAddress;
pub use errors::{BusinessRuleError, FormatError, ValidationError};
pub use phone::{deserialize_optional_phone, validate_phone_number_format, PhoneNumber};
