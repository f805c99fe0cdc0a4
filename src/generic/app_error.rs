//! Error detail payload returned to API callers.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Human-readable message plus a machine-readable error code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DetailModel {
    pub message: String,
    pub error: String,
}

/// Wire shape `{ "detail": { "message": ..., "error": ... } }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AppErrorResponseModel {
    pub detail: DetailModel,
}

impl AppErrorResponseModel {
    pub fn new(message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            detail: DetailModel {
                message: message.into(),
                error: error.into(),
            },
        }
    }
}
