//! Message and payload envelope.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Generic response wrapping a message and an optional payload.
///
/// The `data` key is mandatory on the wire. `{"message": "ok", "data": null}`
/// is valid, `{"message": "ok"}` is not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct GenericResponseModel<T> {
    pub message: String,

    #[serde(deserialize_with = "super::required::deserialize")]
    #[schemars(with = "Option<T>")]
    pub data: Option<T>,
}

impl<T> GenericResponseModel<T> {
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data: Some(data),
        }
    }

    /// Response carrying only a message; `data` serializes as `null`.
    pub fn empty(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
    struct Item {
        id: i64,
    }

    #[test]
    fn test_generic_response_with_data() {
        let response: GenericResponseModel<String> =
            serde_json::from_value(json!({"message": "ok", "data": "value"})).unwrap();
        assert_eq!(response.message, "ok");
        assert_eq!(response.data.as_deref(), Some("value"));
    }

    #[test]
    fn test_generic_response_allows_null_data() {
        let response: GenericResponseModel<Item> =
            serde_json::from_value(json!({"message": "ok", "data": null})).unwrap();
        assert!(response.data.is_none());
    }

    #[test]
    fn test_generic_response_requires_data_key() {
        let result: Result<GenericResponseModel<String>, _> =
            serde_json::from_value(json!({"message": "ok"}));
        let err = result.unwrap_err();
        assert!(err.to_string().contains("missing field `data`"));
    }

    #[test]
    fn test_empty_response_serializes_null_data() {
        let response = GenericResponseModel::<Item>::empty("deleted");
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value, json!({"message": "deleted", "data": null}));
    }

    #[test]
    fn test_nested_record_is_validated_by_its_own_type() {
        let response: GenericResponseModel<Item> =
            serde_json::from_value(json!({"message": "ok", "data": {"id": 7}})).unwrap();
        assert_eq!(response.data, Some(Item { id: 7 }));

        let result: Result<GenericResponseModel<Item>, _> =
            serde_json::from_value(json!({"message": "ok", "data": {"id": "seven"}}));
        assert!(result.is_err());
    }
}
