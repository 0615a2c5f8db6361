use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::poster::Poster;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PosterDto {
    pub id: i32,
    pub titulo: String,
    pub imagen_url: String,
    /// Minor currency units.
    pub precio: i32,
    pub categoria: String,
    pub subcategoria_id: i32,
    #[serde(rename = "createdAt")]
    pub created_at: NaiveDateTime,
    #[serde(rename = "updatedAt")]
    pub updated_at: NaiveDateTime,
}

impl From<Poster> for PosterDto {
    fn from(value: Poster) -> Self {
        Self {
            id: value.id.get(),
            titulo: value.titulo.into_inner(),
            imagen_url: value.imagen_url.into_inner(),
            precio: value.precio.get(),
            categoria: value.categoria.into(),
            subcategoria_id: value.subcategoria_id.get(),
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}
