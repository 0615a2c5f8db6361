use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::poster::{NewPoster as DomainNewPoster, Poster as DomainPoster, PosterUpdate};
use crate::domain::types::{Categoria, ImageUrl, PosterPrice, PosterTitle, TypeConstraintError};

/// Diesel model representing the `posters` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::posters)]
pub struct Poster {
    pub id: i32,
    pub titulo: String,
    pub imagen_url: String,
    pub precio: i32,
    pub categoria: String,
    pub subcategoria_id: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::posters)]
pub struct NewPoster {
    pub titulo: String,
    pub imagen_url: String,
    pub precio: i32,
    pub categoria: String,
    pub subcategoria_id: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, AsChangeset)]
#[diesel(table_name = crate::schema::posters)]
pub struct PosterChangeset {
    pub titulo: Option<String>,
    pub imagen_url: Option<String>,
    pub precio: Option<i32>,
    pub categoria: Option<String>,
    pub subcategoria_id: Option<i32>,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Poster> for DomainPoster {
    type Error = TypeConstraintError;

    fn try_from(row: Poster) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id.try_into()?,
            titulo: PosterTitle::new(row.titulo)?,
            imagen_url: ImageUrl::new(row.imagen_url)?,
            precio: PosterPrice::new(row.precio)?,
            categoria: Categoria::try_from(row.categoria)?,
            subcategoria_id: row.subcategoria_id.try_into()?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

impl NewPoster {
    pub fn stamped(poster: &DomainNewPoster, now: NaiveDateTime) -> Self {
        Self {
            titulo: poster.titulo.as_str().to_string(),
            imagen_url: poster.imagen_url.as_str().to_string(),
            precio: poster.precio.get(),
            categoria: poster.categoria.into(),
            subcategoria_id: poster.subcategoria_id.get(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl PosterChangeset {
    pub fn stamped(update: &PosterUpdate, now: NaiveDateTime) -> Self {
        Self {
            titulo: update.titulo.as_ref().map(|t| t.as_str().to_string()),
            imagen_url: update.imagen_url.as_ref().map(|u| u.as_str().to_string()),
            precio: update.precio.map(PosterPrice::get),
            categoria: update.categoria.map(String::from),
            subcategoria_id: update.subcategoria_id.map(|id| id.get()),
            updated_at: now,
        }
    }
}
