use serde::Serialize;

use crate::domain::types::Categoria;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryDto {
    pub id: String,
    pub label: String,
}

impl From<Categoria> for CategoryDto {
    fn from(value: Categoria) -> Self {
        Self {
            id: value.as_str().to_string(),
            label: value.label().to_string(),
        }
    }
}
