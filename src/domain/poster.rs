use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{Categoria, ImageUrl, PosterId, PosterPrice, PosterTitle, SubcategoryId};

/// The sellable catalog item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Poster {
    pub id: PosterId,
    pub titulo: PosterTitle,
    pub imagen_url: ImageUrl,
    /// Price in minor currency units.
    pub precio: PosterPrice,
    pub categoria: Categoria,
    /// Owning subcategory.
    pub subcategoria_id: SubcategoryId,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Information required to create a new [`Poster`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewPoster {
    pub titulo: PosterTitle,
    pub imagen_url: ImageUrl,
    pub precio: PosterPrice,
    pub categoria: Categoria,
    pub subcategoria_id: SubcategoryId,
}

/// Partial update; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PosterUpdate {
    pub titulo: Option<PosterTitle>,
    pub imagen_url: Option<ImageUrl>,
    pub precio: Option<PosterPrice>,
    pub categoria: Option<Categoria>,
    pub subcategoria_id: Option<SubcategoryId>,
}
