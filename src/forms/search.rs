use serde::Deserialize;
use validator::Validate;

/// Query string for the full-text search and suggestion endpoints.
#[derive(Deserialize, Validate)]
pub struct SearchForm {
    #[validate(length(min = 1))]
    pub query: String,
}

#[derive(Debug)]
pub struct SearchFormPayload {
    pub query: String,
}

form_error!(
    SearchFormError,
    "Search query validation failed: {0}",
    "Search query contains invalid data: {0}"
);

impl TryFrom<SearchForm> for SearchFormPayload {
    type Error = SearchFormError;

    fn try_from(value: SearchForm) -> Result<Self, Self::Error> {
        let trimmed = SearchForm {
            query: value.query.trim().to_string(),
        };
        trimmed.validate()?;
        Ok(Self {
            query: trimmed.query,
        })
    }
}

/// Query string for the latest-posters endpoint.
#[derive(Deserialize)]
pub struct LatestQuery {
    pub limit: Option<usize>,
}
