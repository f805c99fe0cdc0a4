//! Pagination parameters, metadata and paginated list envelope.

use crate::domain::ValidationError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Default number of records per page.
pub const DEFAULT_LIMIT: u32 = 10;
/// Smallest accepted page size.
pub const MIN_LIMIT: u32 = 1;
/// Largest accepted page size.
pub const MAX_LIMIT: u32 = 100;
/// Pages are 1-indexed.
pub const FIRST_PAGE: u64 = 1;

/// How a string filter should be matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    Partial,
    Exact,
    StartsWith,
}

impl MatchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Partial => "partial",
            Self::Exact => "exact",
            Self::StartsWith => "starts_with",
        }
    }
}

/// How multiple filters combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum FilterLogic {
    Or,
    And,
}

impl FilterLogic {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Or => "or",
            Self::And => "and",
        }
    }
}

/// Raw query input before range checks.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct PaginationParamsInput {
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default = "default_page")]
    pub page: i64,
}

fn default_limit() -> i64 {
    i64::from(DEFAULT_LIMIT)
}

fn default_page() -> i64 {
    1
}

/// Validated page size and page number.
///
/// Both values are range-checked when the value is built. Nothing is
/// clamped: a `limit` of 0 or 101 is an error, not a request for 1 or 100.
///
/// # Example
///
/// ```
/// use userverse_models::generic::PaginationParams;
///
/// let params = PaginationParams::new(25, 3).unwrap();
/// assert_eq!(params.offset(), 50);
/// assert!(PaginationParams::new(0, 1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(try_from = "PaginationParamsInput")]
pub struct PaginationParams {
    limit: u32,
    page: u64,
}

impl PaginationParams {
    /// Build pagination parameters from a page size and a 1-indexed page.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::LimitOutOfRange` when `limit` is outside
    /// `[1, 100]` and `ValidationError::PageOutOfRange` when `page < 1`.
    pub fn new(limit: i64, page: i64) -> Result<Self, ValidationError> {
        let limit = u32::try_from(limit)
            .ok()
            .filter(|l| (MIN_LIMIT..=MAX_LIMIT).contains(l))
            .ok_or_else(|| {
                tracing::debug!(limit, "Rejected pagination limit");
                ValidationError::LimitOutOfRange {
                    value: limit,
                    min: MIN_LIMIT,
                    max: MAX_LIMIT,
                }
            })?;

        let page = u64::try_from(page)
            .ok()
            .filter(|p| *p >= FIRST_PAGE)
            .ok_or_else(|| {
                tracing::debug!(page, "Rejected pagination page");
                ValidationError::PageOutOfRange {
                    value: page,
                    min: FIRST_PAGE,
                }
            })?;

        Ok(Self { limit, page })
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    /// Number of records to skip: `(page - 1) * limit`.
    ///
    /// Widened to `u128` so no accepted `page` can overflow.
    pub fn offset(&self) -> u128 {
        u128::from(self.page - FIRST_PAGE) * u128::from(self.limit)
    }
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            page: FIRST_PAGE,
        }
    }
}

impl TryFrom<PaginationParamsInput> for PaginationParams {
    type Error = ValidationError;

    fn try_from(input: PaginationParamsInput) -> Result<Self, Self::Error> {
        Self::new(input.limit, input.page)
    }
}

/// Snapshot describing a completed query.
///
/// Not cross-checked against the query that produced it; the producer owns
/// consistency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PaginationMeta {
    pub total_records: u64,
    pub limit: u32,
    pub current_page: u64,
    pub total_pages: u64,
}

impl PaginationMeta {
    /// Describe `total_records` split into pages of `params.limit()`.
    pub fn from_params(params: &PaginationParams, total_records: u64) -> Self {
        Self {
            total_records,
            limit: params.limit(),
            current_page: params.page(),
            total_pages: total_records.div_ceil(u64::from(params.limit())),
        }
    }
}

/// A page of records with its metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PaginatedResponse<T> {
    pub records: Vec<T>,
    pub pagination: PaginationMeta,
}

impl<T> PaginatedResponse<T> {
    pub fn new(records: Vec<T>, pagination: PaginationMeta) -> Self {
        Self {
            records,
            pagination,
        }
    }
}
