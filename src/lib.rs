//! Userverse Models - validated data models for a multi-tenant identity and
//! company-management API.
//!
//! Every model enforces its invariants while it is built, so a value of one of
//! these types is always canonical and permitted. HTTP routing, persistence and
//! authentication live elsewhere and consume these as plain typed values.
//!
//! # Architecture
//!
//! - **domain**: Primitive validators (phone numbers, email) and error taxonomy
//! - **generic**: Response envelope, pagination and error detail containers
//! - **models**: User, company, role and address schemas
//! - **registry**: Validation and JSON Schema lookup by model name
//! - **error**: Crate-level error types
//! - **config**: Configuration for the command-line tool

pub mod config;
pub mod domain;
pub mod error;
pub mod generic;
pub mod models;
pub mod registry;

pub use config::Config;
pub use domain::{
    validate_phone_number_format, BusinessRuleError, EmailAddress, FormatError, PhoneNumber,
    ValidationError,
};
pub use error::{ConfigError, ModelError, ModelResult};
pub use generic::{
    AppErrorResponseModel, DetailModel, FilterLogic, GenericResponseModel, MatchType,
    PaginatedResponse, PaginationMeta, PaginationParams,
};
pub use models::{
    CompanyAddressModel, CompanyCreateModel, CompanyDefaultRoles, CompanyQueryParamsModel,
    CompanyReadModel, CompanyUpdateModel, CompanyUserAddModel, CompanyUserReadModel,
    OtpValidationRequest, PasswordResetRequest, RoleCreateModel, RoleDeleteModel,
    RoleQueryParamsModel, RoleReadModel, RoleUpdateModel, TokenResponseModel, UserCreateModel,
    UserLoginModel, UserQueryParams, UserReadModel, UserUpdateModel,
};
pub use registry::{json_schema, validate_json, ModelKind};
