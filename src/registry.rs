//! Dispatch over the closed set of model schemas.
//!
//! Lets callers that only hold raw JSON and a model name (the CLI, tests,
//! fixtures) run the same validation a typed caller would get.

use crate::domain::validate_phone_number_format;
use crate::error::ModelResult;
use crate::generic::{
    AppErrorResponseModel, PaginationMeta, PaginationParams, PaginationParamsInput,
};
use crate::models::*;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Every model this crate can validate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum ModelKind {
    UserLogin,
    UserCreate,
    UserUpdate,
    UserRead,
    UserQuery,
    TokenResponse,
    PasswordReset,
    OtpValidation,
    CompanyAddress,
    CompanyCreate,
    CompanyUpdate,
    CompanyRead,
    CompanyQuery,
    CompanyUserRead,
    CompanyUserAdd,
    RoleCreate,
    RoleUpdate,
    RoleRead,
    RoleDelete,
    RoleQuery,
    PaginationParams,
    PaginationMeta,
    AppErrorResponse,
}

impl ModelKind {
    /// Type name of the schema.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::UserLogin => "UserLoginModel",
            Self::UserCreate => "UserCreateModel",
            Self::UserUpdate => "UserUpdateModel",
            Self::UserRead => "UserReadModel",
            Self::UserQuery => "UserQueryParams",
            Self::TokenResponse => "TokenResponseModel",
            Self::PasswordReset => "PasswordResetRequest",
            Self::OtpValidation => "OtpValidationRequest",
            Self::CompanyAddress => "CompanyAddressModel",
            Self::CompanyCreate => "CompanyCreateModel",
            Self::CompanyUpdate => "CompanyUpdateModel",
            Self::CompanyRead => "CompanyReadModel",
            Self::CompanyQuery => "CompanyQueryParamsModel",
            Self::CompanyUserRead => "CompanyUserReadModel",
            Self::CompanyUserAdd => "CompanyUserAddModel",
            Self::RoleCreate => "RoleCreateModel",
            Self::RoleUpdate => "RoleUpdateModel",
            Self::RoleRead => "RoleReadModel",
            Self::RoleDelete => "RoleDeleteModel",
            Self::RoleQuery => "RoleQueryParamsModel",
            Self::PaginationParams => "PaginationParams",
            Self::PaginationMeta => "PaginationMeta",
            Self::AppErrorResponse => "AppErrorResponseModel",
        }
    }

    /// Whether the model normalizes a `phone_number` field.
    fn normalizes_phone(&self) -> bool {
        matches!(
            self,
            Self::UserCreate | Self::UserUpdate | Self::CompanyCreate | Self::CompanyUpdate
        )
    }

    /// Whether the model carries pagination parameters.
    fn is_paginated(&self) -> bool {
        matches!(
            self,
            Self::UserQuery | Self::CompanyQuery | Self::RoleQuery | Self::PaginationParams
        )
    }
}

/// Deserialize `input` as the model named by `kind` and return its canonical
/// JSON form.
///
/// # Errors
///
/// Phone, pagination and role-deletion failures come back as
/// `ModelError::Format`, `ModelError::Validation` and
/// `ModelError::BusinessRule`. Anything else the schema rejects, including
/// malformed JSON, is `ModelError::Json`.
pub fn validate_json(kind: ModelKind, input: &str) -> ModelResult<Value> {
    let value = serde_json::from_str::<Value>(input)
        .map_err(Into::into)
        .and_then(|raw| check_typed_fields(kind, &raw).map(|()| raw))
        .and_then(|raw| canonical_for(kind, raw));

    match &value {
        Ok(_) => tracing::debug!(model = kind.type_name(), "Input accepted"),
        Err(e) => tracing::debug!(
            model = kind.type_name(),
            code = e.error_code(),
            error = %e,
            "Input rejected"
        ),
    }
    value
}

/// Run the fallible constructors directly so their typed errors survive.
fn check_typed_fields(kind: ModelKind, raw: &Value) -> ModelResult<()> {
    if kind.normalizes_phone() {
        if let Some(Value::String(phone)) = raw.get("phone_number") {
            validate_phone_number_format(Some(phone.as_str()))?;
        }
    }

    if kind.is_paginated() {
        PaginationParams::try_from(PaginationParamsInput::deserialize(raw)?)?;
    }

    if matches!(kind, ModelKind::RoleDelete) {
        RoleDeleteModel::try_from(RoleDeleteInput::deserialize(raw)?)?;
    }

    Ok(())
}

fn canonical_for(kind: ModelKind, input: Value) -> ModelResult<Value> {
    match kind {
        ModelKind::UserLogin => canonical::<UserLoginModel>(input),
        ModelKind::UserCreate => canonical::<UserCreateModel>(input),
        ModelKind::UserUpdate => canonical::<UserUpdateModel>(input),
        ModelKind::UserRead => canonical::<UserReadModel>(input),
        ModelKind::UserQuery => canonical::<UserQueryParams>(input),
        ModelKind::TokenResponse => canonical::<TokenResponseModel>(input),
        ModelKind::PasswordReset => canonical::<PasswordResetRequest>(input),
        ModelKind::OtpValidation => canonical::<OtpValidationRequest>(input),
        ModelKind::CompanyAddress => canonical::<CompanyAddressModel>(input),
        ModelKind::CompanyCreate => canonical::<CompanyCreateModel>(input),
        ModelKind::CompanyUpdate => canonical::<CompanyUpdateModel>(input),
        ModelKind::CompanyRead => canonical::<CompanyReadModel>(input),
        ModelKind::CompanyQuery => canonical::<CompanyQueryParamsModel>(input),
        ModelKind::CompanyUserRead => canonical::<CompanyUserReadModel>(input),
        ModelKind::CompanyUserAdd => canonical::<CompanyUserAddModel>(input),
        ModelKind::RoleCreate => canonical::<RoleCreateModel>(input),
        ModelKind::RoleUpdate => canonical::<RoleUpdateModel>(input),
        ModelKind::RoleRead => canonical::<RoleReadModel>(input),
        ModelKind::RoleDelete => canonical::<RoleDeleteModel>(input),
        ModelKind::RoleQuery => canonical::<RoleQueryParamsModel>(input),
        ModelKind::PaginationParams => canonical::<PaginationParams>(input),
        ModelKind::PaginationMeta => canonical::<PaginationMeta>(input),
        ModelKind::AppErrorResponse => canonical::<AppErrorResponseModel>(input),
    }
}

/// JSON Schema document for the model named by `kind`.
pub fn json_schema(kind: ModelKind) -> ModelResult<Value> {
    let schema = match kind {
        ModelKind::UserLogin => schemars::schema_for!(UserLoginModel),
        ModelKind::UserCreate => schemars::schema_for!(UserCreateModel),
        ModelKind::UserUpdate => schemars::schema_for!(UserUpdateModel),
        ModelKind::UserRead => schemars::schema_for!(UserReadModel),
        ModelKind::UserQuery => schemars::schema_for!(UserQueryParams),
        ModelKind::TokenResponse => schemars::schema_for!(TokenResponseModel),
        ModelKind::PasswordReset => schemars::schema_for!(PasswordResetRequest),
        ModelKind::OtpValidation => schemars::schema_for!(OtpValidationRequest),
        ModelKind::CompanyAddress => schemars::schema_for!(CompanyAddressModel),
        ModelKind::CompanyCreate => schemars::schema_for!(CompanyCreateModel),
        ModelKind::CompanyUpdate => schemars::schema_for!(CompanyUpdateModel),
        ModelKind::CompanyRead => schemars::schema_for!(CompanyReadModel),
        ModelKind::CompanyQuery => schemars::schema_for!(CompanyQueryParamsModel),
        ModelKind::CompanyUserRead => schemars::schema_for!(CompanyUserReadModel),
        ModelKind::CompanyUserAdd => schemars::schema_for!(CompanyUserAddModel),
        ModelKind::RoleCreate => schemars::schema_for!(RoleCreateModel),
        ModelKind::RoleUpdate => schemars::schema_for!(RoleUpdateModel),
        ModelKind::RoleRead => schemars::schema_for!(RoleReadModel),
        ModelKind::RoleDelete => schemars::schema_for!(RoleDeleteModel),
        ModelKind::RoleQuery => schemars::schema_for!(RoleQueryParamsModel),
        ModelKind::PaginationParams => schemars::schema_for!(PaginationParams),
        ModelKind::PaginationMeta => schemars::schema_for!(PaginationMeta),
        ModelKind::AppErrorResponse => schemars::schema_for!(AppErrorResponseModel),
    };
    Ok(serde_json::to_value(schema)?)
}

fn canonical<T>(input: Value) -> ModelResult<Value>
where
    T: DeserializeOwned + Serialize,
{
    let model: T = serde_json::from_value(input)?;
    Ok(serde_json::to_value(model)?)
}
