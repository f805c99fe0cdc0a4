//! Entity schemas for users, companies, roles and addresses.
//!
//! Each entity comes in create, update, read and query flavours. Validation
//! runs while a value is deserialized or constructed, so holding one of these
//! types means its fields are already canonical.

pub mod address;
pub mod company;
pub mod company_user;
pub mod password;
pub mod roles;
pub mod user;

pub use address::CompanyAddressModel;
pub use company::{
    CompanyCreateModel, CompanyQueryParamsModel, CompanyReadModel, CompanyUpdateModel,
};
pub use company_user::{CompanyUserAddModel, CompanyUserReadModel};
pub use password::{OtpValidationRequest, PasswordResetRequest};
pub use roles::{
    CompanyDefaultRoles, RoleCatalogEntry, RoleCreateModel, RoleDeleteInput, RoleDeleteModel,
    RoleQueryParamsModel, RoleReadModel, RoleUpdateModel,
};
pub use user::{
    TokenResponseModel, UserCreateModel, UserLoginModel, UserQueryParams, UserReadModel,
    UserUpdateModel,
};
