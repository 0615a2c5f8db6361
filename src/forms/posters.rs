use serde::Deserialize;
use validator::Validate;

use crate::domain::poster::{NewPoster, PosterUpdate};
use crate::domain::types::{Categoria, ImageUrl, PosterId, PosterPrice, PosterTitle, SubcategoryId};
use crate::password::ClearTextPassword;

#[derive(Deserialize, Validate)]
pub struct AddPosterForm {
    #[validate(length(min = 1))]
    pub titulo: String,
    #[validate(url)]
    pub imagen_url: String,
    #[validate(range(min = 0))]
    pub precio: i64,
    pub categoria: String,
    #[validate(range(min = 1))]
    pub subcategoria_id: i32,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug)]
pub struct AddPosterFormPayload {
    pub poster: NewPoster,
    pub password: ClearTextPassword,
}

form_error!(
    AddPosterFormError,
    "Add poster form validation failed: {0}",
    "Add poster form contains invalid data: {0}"
);

impl TryFrom<AddPosterForm> for AddPosterFormPayload {
    type Error = AddPosterFormError;

    fn try_from(value: AddPosterForm) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(Self {
            poster: NewPoster {
                titulo: PosterTitle::new(value.titulo)?,
                imagen_url: ImageUrl::new(value.imagen_url)?,
                precio: PosterPrice::try_from(value.precio)?,
                categoria: Categoria::try_from(value.categoria)?,
                subcategoria_id: SubcategoryId::new(value.subcategoria_id)?,
            },
            password: value.password.into(),
        })
    }
}

#[derive(Deserialize, Validate)]
pub struct UpdatePosterForm {
    #[validate(length(min = 1))]
    pub titulo: Option<String>,
    #[validate(url)]
    pub imagen_url: Option<String>,
    #[validate(range(min = 0))]
    pub precio: Option<i64>,
    pub categoria: Option<String>,
    #[validate(range(min = 1))]
    pub subcategoria_id: Option<i32>,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug)]
pub struct UpdatePosterFormPayload {
    pub poster_id: PosterId,
    pub update: PosterUpdate,
    pub password: ClearTextPassword,
}

form_error!(
    UpdatePosterFormError,
    "Update poster form validation failed: {0}",
    "Update poster form contains invalid data: {0}"
);

impl TryFrom<(i32, UpdatePosterForm)> for UpdatePosterFormPayload {
    type Error = UpdatePosterFormError;

    fn try_from((id, value): (i32, UpdatePosterForm)) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(Self {
            poster_id: PosterId::new(id)?,
            update: PosterUpdate {
                titulo: value.titulo.map(PosterTitle::new).transpose()?,
                imagen_url: value.imagen_url.map(ImageUrl::new).transpose()?,
                precio: value.precio.map(PosterPrice::try_from).transpose()?,
                categoria: value.categoria.map(Categoria::try_from).transpose()?,
                subcategoria_id: value.subcategoria_id.map(SubcategoryId::new).transpose()?,
            },
            password: value.password.into(),
        })
    }
}

#[derive(Deserialize, Validate)]
pub struct DeletePosterForm {
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug)]
pub struct DeletePosterFormPayload {
    pub poster_id: PosterId,
    pub password: ClearTextPassword,
}

form_error!(
    DeletePosterFormError,
    "Delete poster form validation failed: {0}",
    "Delete poster form contains invalid data: {0}"
);

impl TryFrom<(i32, DeletePosterForm)> for DeletePosterFormPayload {
    type Error = DeletePosterFormError;

    fn try_from((id, value): (i32, DeletePosterForm)) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            poster_id: PosterId::new(id)?,
            password: value.password.into(),
        })
    }
}
