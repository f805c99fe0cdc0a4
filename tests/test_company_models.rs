use serde_json::json;
use userverse_models::{
    CompanyCreateModel, CompanyDefaultRoles, CompanyQueryParamsModel, CompanyReadModel,
    CompanyUpdateModel, CompanyUserAddModel, CompanyUserReadModel, EmailAddress, PhoneNumber,
    UserReadModel,
};

#[test]
fn test_company_create_normalizes_phone() {
    let company: CompanyCreateModel = serde_json::from_value(json!({
        "name": "Acme",
        "phone_number": "+1 202 555 0123",
        "email": "info@example.com"
    }))
    .unwrap();
    assert_eq!(
        company.phone_number,
        Some(PhoneNumber::parse("+12025550123").unwrap())
    );
}

#[test]
fn test_company_create_empty_phone_is_absent() {
    let company: CompanyCreateModel = serde_json::from_value(json!({
        "phone_number": "",
        "email": "info@example.com"
    }))
    .unwrap();
    assert!(company.phone_number.is_none());
}

#[test]
fn test_company_create_built_in_code() {
    let mut company = CompanyCreateModel::new(EmailAddress::new("info@example.com").unwrap());
    company.phone_number = Some(PhoneNumber::parse("+441234567890").unwrap());
    let value = serde_json::to_value(&company).unwrap();
    assert_eq!(value["phone_number"], "+441234567890");
    assert_eq!(value["email"], "info@example.com");
}

#[test]
fn test_company_update_is_partial() {
    let update: CompanyUpdateModel =
        serde_json::from_value(json!({"industry": "Mining"})).unwrap();
    assert_eq!(update.industry.as_deref(), Some("Mining"));
    assert!(update.name.is_none());

    let result: Result<CompanyUpdateModel, _> =
        serde_json::from_value(json!({"phone_number": "not-a-number"}));
    assert!(result.is_err());
}

#[test]
fn test_company_read_requires_id_and_email() {
    let result: Result<CompanyReadModel, _> =
        serde_json::from_value(json!({"email": "info@example.com"}));
    assert!(result.is_err());
    let result: Result<CompanyReadModel, _> = serde_json::from_value(json!({"id": 1}));
    assert!(result.is_err());
}

#[test]
fn test_company_query_params() {
    let params: CompanyQueryParamsModel = serde_json::from_value(json!({
        "limit": 25,
        "page": 3,
        "industry": "Retail"
    }))
    .unwrap();
    assert_eq!(params.pagination.offset(), 50);
    assert_eq!(params.industry.as_deref(), Some("Retail"));

    let result: Result<CompanyQueryParamsModel, _> =
        serde_json::from_value(json!({"limit": 101}));
    assert!(result.is_err());
}

#[test]
fn test_company_user_add_resolves_viewer() {
    let add: CompanyUserAddModel =
        serde_json::from_value(json!({"email": "user@example.com"})).unwrap();
    assert_eq!(add.role, CompanyDefaultRoles::Viewer.name_value());

    let add: CompanyUserAddModel = serde_json::from_value(json!({})).unwrap();
    assert!(add.email.is_none());
    assert_eq!(add.role, "Viewer");
}

#[test]
fn test_company_user_read_extends_user_read() {
    let model: CompanyUserReadModel = serde_json::from_value(json!({
        "id": 1,
        "email": "user@example.com",
        "first_name": "Ada",
        "role_name": "Administrator"
    }))
    .unwrap();
    assert_eq!(model.role_name, "Administrator");
    assert_eq!(model.user.first_name.as_deref(), Some("Ada"));
    assert!(!model.user.is_superuser);

    let base: UserReadModel = serde_json::from_value(json!({
        "id": 1,
        "email": "user@example.com",
        "first_name": "Ada"
    }))
    .unwrap();
    assert_eq!(model.user, base);
}
