//! Domain validation errors.

use thiserror::Error;

/// Structural or range failures on a single field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided email address is invalid.
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    /// Page size outside the accepted range.
    #[error("limit must be between {min} and {max}, got {value}")]
    LimitOutOfRange { value: i64, min: u32, max: u32 },

    /// Page number below the first page.
    #[error("page must be at least {min}, got {value}")]
    PageOutOfRange { value: i64, min: u64 },

    /// A timestamp field did not match the wire format.
    #[error("Invalid timestamp for {field}: {value}")]
    InvalidTimestamp { field: &'static str, value: String },
}

/// Phone number parse or validity failures.
#[derive(Error, Debug)]
pub enum FormatError {
    /// The input could not be parsed as a phone number at all.
    #[error("Invalid phone number format: {input}")]
    Unparseable {
        input: String,
        #[source]
        source: phonenumber::ParseError,
    },

    /// The input parsed but is not a valid number for its country.
    #[error("Invalid phone number: {0}")]
    InvalidNumber(String),
}

/// Values that are well-formed but not permitted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BusinessRuleError {
    /// Attempt to delete one of the default company roles.
    #[error("Cannot delete default system role: '{0}'")]
    ProtectedRole(String),
}
