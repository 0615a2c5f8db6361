pub mod admin;
pub mod auth;
pub mod errors;
pub mod posters;
pub mod search;
pub mod subcategories;

pub use errors::{ServiceError, ServiceResult};

use crate::domain::types::Categoria;
use crate::dto::categories::CategoryDto;

/// The fixed category set with display labels.
pub fn show_categories() -> Vec<CategoryDto> {
    Categoria::ALL.into_iter().map(CategoryDto::from).collect()
}
