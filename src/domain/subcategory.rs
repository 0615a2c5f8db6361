use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{Categoria, ImageUrl, SubcategoryId, SubcategoryName};

/// Named, image-illustrated grouping of posters inside one [`Categoria`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Subcategory {
    pub id: SubcategoryId,
    pub nombre: SubcategoryName,
    pub imagen_url: ImageUrl,
    pub categoria: Categoria,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Data required to insert a new [`Subcategory`]. Timestamps are assigned by
/// the repository.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewSubcategory {
    pub nombre: SubcategoryName,
    pub imagen_url: ImageUrl,
    pub categoria: Categoria,
}

/// Partial update; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubcategoryUpdate {
    pub nombre: Option<SubcategoryName>,
    pub imagen_url: Option<ImageUrl>,
    pub categoria: Option<Categoria>,
}
