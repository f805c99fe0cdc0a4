//! Users seen through their membership of a company.

use super::roles::CompanyDefaultRoles;
use super::user::UserReadModel;
use crate::domain::EmailAddress;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A user plus the role they hold in one company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CompanyUserReadModel {
    #[serde(flatten)]
    pub user: UserReadModel,
    pub role_name: String,
}

impl CompanyUserReadModel {
    pub fn new(user: UserReadModel, role_name: impl Into<String>) -> Self {
        Self {
            user,
            role_name: role_name.into(),
        }
    }
}

fn default_role() -> String {
    CompanyDefaultRoles::Viewer.name_value().to_string()
}

/// Add a user to a company. Without a `role` the user becomes a Viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CompanyUserAddModel {
    #[serde(default)]
    pub email: Option<EmailAddress>,
    #[serde(default = "default_role")]
    pub role: String,
}

impl CompanyUserAddModel {
    pub fn new(email: Option<EmailAddress>) -> Self {
        Self {
            email,
            role: default_role(),
        }
    }
}

impl Default for CompanyUserAddModel {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_company_user_add_defaults_role() {
        let user: CompanyUserAddModel =
            serde_json::from_value(json!({"email": "user@example.com"})).unwrap();
        assert_eq!(user.role, "Viewer");
        assert_eq!(CompanyUserAddModel::default().role, "Viewer");
    }

    #[test]
    fn test_company_user_add_explicit_role() {
        let user: CompanyUserAddModel =
            serde_json::from_value(json!({"role": "Administrator"})).unwrap();
        assert_eq!(user.role, "Administrator");
        assert!(user.email.is_none());
    }

    #[test]
    fn test_company_user_add_rejects_bad_email() {
        let result: Result<CompanyUserAddModel, _> =
            serde_json::from_value(json!({"email": "nope"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_company_user_read_requires_role() {
        let result: Result<CompanyUserReadModel, _> =
            serde_json::from_value(json!({"id": 1, "email": "user@example.com"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_company_user_read_flattens_user() {
        let email = EmailAddress::new("user@example.com").unwrap();
        let model = CompanyUserReadModel::new(UserReadModel::new(1, email), "Viewer");
        let value = serde_json::to_value(&model).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["email"], "user@example.com");
        assert_eq!(value["role_name"], "Viewer");
        assert_eq!(value["is_superuser"], false);

        let back: CompanyUserReadModel = serde_json::from_value(value).unwrap();
        assert_eq!(back, model);
    }
}
