//! Company schemas.

use super::address::CompanyAddressModel;
use crate::domain::{deserialize_optional_phone, EmailAddress, PhoneNumber};
use crate::generic::PaginationParams;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A company as echoed back by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CompanyReadModel {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    pub email: EmailAddress,
    #[serde(default)]
    pub address: Option<CompanyAddressModel>,
}

/// Partial update of a company's details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CompanyUpdateModel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_phone",
        skip_serializing_if = "Option::is_none"
    )]
    pub phone_number: Option<PhoneNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<CompanyAddressModel>,
}

/// Payload for registering a company. Only `email` is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CompanyCreateModel {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_phone")]
    pub phone_number: Option<PhoneNumber>,
    pub email: EmailAddress,
    #[serde(default)]
    pub address: Option<CompanyAddressModel>,
}

impl CompanyCreateModel {
    pub fn new(email: EmailAddress) -> Self {
        Self {
            name: None,
            description: None,
            industry: None,
            phone_number: None,
            email,
            address: None,
        }
    }
}

/// Company listing query: pagination plus optional filters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CompanyQueryParamsModel {
    #[serde(flatten)]
    pub pagination: PaginationParams,
    #[serde(default)]
    pub role_name: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}
