//! Generic containers shared by every entity.
//!
//! - **response**: message plus optional payload envelope
//! - **pagination**: page parameters, result metadata and paginated lists
//! - **app_error**: the error detail shape returned to callers

pub mod app_error;
pub mod pagination;
pub mod required;
pub mod response;

pub use app_error::{AppErrorResponseModel, DetailModel};
pub use pagination::{
    FilterLogic, MatchType, PaginatedResponse, PaginationMeta, PaginationParams,
    PaginationParamsInput,
};
pub use response::GenericResponseModel;
