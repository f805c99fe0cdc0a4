//! Company roles: the default role catalog and role schemas.

use crate::domain::BusinessRuleError;
use crate::generic::PaginationParams;
use once_cell::sync::Lazy;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// Separator between a catalog entry's short name and its description.
const CATALOG_DELIMITER: char = ':';

/// Short name and description of one default role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleCatalogEntry {
    pub name: &'static str,
    pub description: &'static str,
}

impl RoleCatalogEntry {
    fn split(value: &'static str) -> Self {
        let (name, description) = value
            .split_once(CATALOG_DELIMITER)
            .expect("role catalog entry must contain ':'");
        Self {
            name: name.trim(),
            description: description.trim(),
        }
    }
}

static CATALOG: Lazy<HashMap<CompanyDefaultRoles, RoleCatalogEntry>> = Lazy::new(|| {
    CompanyDefaultRoles::all()
        .iter()
        .map(|role| (*role, RoleCatalogEntry::split(role.value())))
        .collect()
});

/// Roles every company starts with. These cannot be deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompanyDefaultRoles {
    Administrator,
    Viewer,
}

impl CompanyDefaultRoles {
    const ALL: [Self; 2] = [Self::Administrator, Self::Viewer];

    pub fn all() -> &'static [Self] {
        &Self::ALL
    }

    /// Full catalog string, `"<Name>: <Description>"`.
    pub fn value(&self) -> &'static str {
        match self {
            Self::Administrator => "Administrator: Full access to manage users and data",
            Self::Viewer => "Viewer: Read-only access to company data",
        }
    }

    fn entry(&self) -> &'static RoleCatalogEntry {
        &CATALOG[self]
    }

    /// Short role name, e.g. `"Administrator"`.
    pub fn name_value(&self) -> &'static str {
        self.entry().name
    }

    pub fn description(&self) -> &'static str {
        self.entry().description
    }

    /// Look up a default role by its short name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|r| r.name_value() == name)
    }

    /// Whether `name` is the short name of a default role.
    pub fn is_protected(name: &str) -> bool {
        Self::from_name(name).is_some()
    }
}

impl fmt::Display for CompanyDefaultRoles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl Serialize for CompanyDefaultRoles {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.value())
    }
}

/// Payload for creating a role. `description` must be sent, possibly as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RoleCreateModel {
    pub name: String,
    #[serde(deserialize_with = "crate::generic::required::deserialize")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RoleUpdateModel {
    #[serde(deserialize_with = "crate::generic::required::deserialize")]
    pub name: Option<String>,
    #[serde(deserialize_with = "crate::generic::required::deserialize")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RoleReadModel {
    #[serde(deserialize_with = "crate::generic::required::deserialize")]
    pub name: Option<String>,
    #[serde(deserialize_with = "crate::generic::required::deserialize")]
    pub description: Option<String>,
}

/// Raw role deletion request before the protected-role check.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RoleDeleteInput {
    pub replacement_role_name: String,
    pub role_name_to_delete: String,
}

/// Request to delete a role and move its members to a replacement.
///
/// A request naming a default role for deletion cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(try_from = "RoleDeleteInput")]
pub struct RoleDeleteModel {
    replacement_role_name: String,
    role_name_to_delete: String,
}

impl RoleDeleteModel {
    /// # Errors
    ///
    /// Returns `BusinessRuleError::ProtectedRole` when `role_name_to_delete`
    /// is the short name of a default role.
    pub fn new(
        replacement_role_name: impl Into<String>,
        role_name_to_delete: impl Into<String>,
    ) -> Result<Self, BusinessRuleError> {
        let role_name_to_delete = role_name_to_delete.into();
        if CompanyDefaultRoles::is_protected(&role_name_to_delete) {
            tracing::debug!(role = %role_name_to_delete, "Rejected deletion of default role");
            return Err(BusinessRuleError::ProtectedRole(role_name_to_delete));
        }

        Ok(Self {
            replacement_role_name: replacement_role_name.into(),
            role_name_to_delete,
        })
    }

    pub fn replacement_role_name(&self) -> &str {
        &self.replacement_role_name
    }

    pub fn role_name_to_delete(&self) -> &str {
        &self.role_name_to_delete
    }
}

impl TryFrom<RoleDeleteInput> for RoleDeleteModel {
    type Error = BusinessRuleError;

    fn try_from(input: RoleDeleteInput) -> Result<Self, Self::Error> {
        Self::new(input.replacement_role_name, input.role_name_to_delete)
    }
}

/// Role listing query: pagination plus optional filters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RoleQueryParamsModel {
    #[serde(flatten)]
    pub pagination: PaginationParams,
    /// Filter by role name
    #[serde(default)]
    pub name: Option<String>,
    /// Filter by role description
    #[serde(default)]
    pub description: Option<String>,
}
