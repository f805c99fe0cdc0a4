//! User schemas: login, create, update, read, query and token responses.

use crate::domain::{deserialize_optional_phone, EmailAddress, PhoneNumber};
use crate::generic::PaginationParams;
use chrono::NaiveDateTime;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Token type issued by the login endpoint.
pub const DEFAULT_TOKEN_TYPE: &str = "bearer";

/// Credentials submitted at login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct UserLoginModel {
    pub email: EmailAddress,
    pub password: String,
}

/// Profile fields supplied when registering a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct UserCreateModel {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_phone")]
    pub phone_number: Option<PhoneNumber>,
}

/// Partial update; absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct UserUpdateModel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_phone",
        skip_serializing_if = "Option::is_none"
    )]
    pub phone_number: Option<PhoneNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// A user as echoed back by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct UserReadModel {
    pub id: i64,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    pub email: EmailAddress,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub is_superuser: bool,
}

impl UserReadModel {
    pub fn new(id: i64, email: EmailAddress) -> Self {
        Self {
            id,
            first_name: None,
            last_name: None,
            email,
            phone_number: None,
            status: None,
            is_superuser: false,
        }
    }
}

/// User listing query: pagination plus optional filters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct UserQueryParams {
    #[serde(flatten)]
    pub pagination: PaginationParams,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

fn default_token_type() -> String {
    DEFAULT_TOKEN_TYPE.to_string()
}

/// Access and refresh tokens with their expirations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TokenResponseModel {
    #[serde(default = "default_token_type")]
    pub token_type: String,
    pub access_token: String,
    #[serde(with = "expiration")]
    #[schemars(with = "String")]
    pub access_token_expiration: NaiveDateTime,
    pub refresh_token: String,
    #[serde(with = "expiration")]
    #[schemars(with = "String")]
    pub refresh_token_expiration: NaiveDateTime,
}

impl TokenResponseModel {
    pub fn new(
        access_token: impl Into<String>,
        access_token_expiration: NaiveDateTime,
        refresh_token: impl Into<String>,
        refresh_token_expiration: NaiveDateTime,
    ) -> Self {
        Self {
            token_type: default_token_type(),
            access_token: access_token.into(),
            access_token_expiration,
            refresh_token: refresh_token.into(),
            refresh_token_expiration,
        }
    }
}

/// `"YYYY-MM-DD HH:MM:SS"` timestamps.
pub mod expiration {
    use crate::domain::ValidationError;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&value.format(FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, FORMAT).map_err(|_| {
            serde::de::Error::custom(ValidationError::InvalidTimestamp {
                field: "token expiration",
                value: raw,
            })
        })
    }
}
