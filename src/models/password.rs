//! Password reset flow payloads.

use crate::domain::EmailAddress;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Request a password reset email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PasswordResetRequest {
    pub email: EmailAddress,
}

/// One-time password submitted during a reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct OtpValidationRequest {
    pub otp: String,
}
