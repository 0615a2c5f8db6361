//! Wire representations returned by the JSON API.

use serde::Serialize;

pub mod categories;
pub mod posters;
pub mod subcategories;

/// Outcome of operations that report only success or failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SuccessDto {
    pub success: bool,
}

impl From<bool> for SuccessDto {
    fn from(success: bool) -> Self {
        Self { success }
    }
}

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorDto {
    pub error: String,
}

impl ErrorDto {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
