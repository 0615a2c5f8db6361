use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::subcategory::Subcategory;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubcategoryDto {
    pub id: i32,
    pub nombre: String,
    pub imagen_url: String,
    pub categoria: String,
    #[serde(rename = "createdAt")]
    pub created_at: NaiveDateTime,
    #[serde(rename = "updatedAt")]
    pub updated_at: NaiveDateTime,
}

impl From<Subcategory> for SubcategoryDto {
    fn from(value: Subcategory) -> Self {
        Self {
            id: value.id.get(),
            nombre: value.nombre.into_inner(),
            imagen_url: value.imagen_url.into_inner(),
            categoria: value.categoria.into(),
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}
