use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::subcategory::{
    NewSubcategory as DomainNewSubcategory, Subcategory as DomainSubcategory, SubcategoryUpdate,
};
use crate::domain::types::{Categoria, ImageUrl, SubcategoryName, TypeConstraintError};

/// Diesel model representing the `subcategories` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::subcategories)]
pub struct Subcategory {
    pub id: i32,
    pub nombre: String,
    pub imagen_url: String,
    pub categoria: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insertable form of [`Subcategory`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::subcategories)]
pub struct NewSubcategory {
    pub nombre: String,
    pub imagen_url: String,
    pub categoria: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Patch applied by `UPDATE`; `None` columns are skipped.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = crate::schema::subcategories)]
pub struct SubcategoryChangeset {
    pub nombre: Option<String>,
    pub imagen_url: Option<String>,
    pub categoria: Option<String>,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Subcategory> for DomainSubcategory {
    type Error = TypeConstraintError;

    fn try_from(row: Subcategory) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id.try_into()?,
            nombre: SubcategoryName::new(row.nombre)?,
            imagen_url: ImageUrl::new(row.imagen_url)?,
            categoria: Categoria::try_from(row.categoria)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

impl NewSubcategory {
    pub fn stamped(subcategory: &DomainNewSubcategory, now: NaiveDateTime) -> Self {
        Self {
            nombre: subcategory.nombre.as_str().to_string(),
            imagen_url: subcategory.imagen_url.as_str().to_string(),
            categoria: subcategory.categoria.into(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl SubcategoryChangeset {
    pub fn stamped(update: &SubcategoryUpdate, now: NaiveDateTime) -> Self {
        Self {
            nombre: update.nombre.as_ref().map(|n| n.as_str().to_string()),
            imagen_url: update.imagen_url.as_ref().map(|u| u.as_str().to_string()),
            categoria: update.categoria.map(String::from),
            updated_at: now,
        }
    }
}
