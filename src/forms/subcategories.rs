use serde::Deserialize;
use validator::Validate;

use crate::domain::subcategory::{NewSubcategory, SubcategoryUpdate};
use crate::domain::types::{Categoria, ImageUrl, SubcategoryId, SubcategoryName};
use crate::password::ClearTextPassword;

#[derive(Deserialize, Validate)]
pub struct AddSubcategoryForm {
    #[validate(length(min = 1))]
    pub nombre: String,
    #[validate(url)]
    pub imagen_url: String,
    pub categoria: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug)]
pub struct AddSubcategoryFormPayload {
    pub subcategory: NewSubcategory,
    pub password: ClearTextPassword,
}

form_error!(
    AddSubcategoryFormError,
    "Add subcategory form validation failed: {0}",
    "Add subcategory form contains invalid data: {0}"
);

impl TryFrom<AddSubcategoryForm> for AddSubcategoryFormPayload {
    type Error = AddSubcategoryFormError;

    fn try_from(value: AddSubcategoryForm) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(Self {
            subcategory: NewSubcategory {
                nombre: SubcategoryName::new(value.nombre)?,
                imagen_url: ImageUrl::new(value.imagen_url)?,
                categoria: Categoria::try_from(value.categoria)?,
            },
            password: value.password.into(),
        })
    }
}

/// Only the provided fields are changed.
#[derive(Deserialize, Validate)]
pub struct UpdateSubcategoryForm {
    #[validate(length(min = 1))]
    pub nombre: Option<String>,
    #[validate(url)]
    pub imagen_url: Option<String>,
    pub categoria: Option<String>,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug)]
pub struct UpdateSubcategoryFormPayload {
    pub subcategory_id: SubcategoryId,
    pub update: SubcategoryUpdate,
    pub password: ClearTextPassword,
}

form_error!(
    UpdateSubcategoryFormError,
    "Update subcategory form validation failed: {0}",
    "Update subcategory form contains invalid data: {0}"
);

/// The identifier comes from the request path, the rest from the body.
impl TryFrom<(i32, UpdateSubcategoryForm)> for UpdateSubcategoryFormPayload {
    type Error = UpdateSubcategoryFormError;

    fn try_from((id, value): (i32, UpdateSubcategoryForm)) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(Self {
            subcategory_id: SubcategoryId::new(id)?,
            update: SubcategoryUpdate {
                nombre: value.nombre.map(SubcategoryName::new).transpose()?,
                imagen_url: value.imagen_url.map(ImageUrl::new).transpose()?,
                categoria: value.categoria.map(Categoria::try_from).transpose()?,
            },
            password: value.password.into(),
        })
    }
}

#[derive(Deserialize, Validate)]
pub struct DeleteSubcategoryForm {
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug)]
pub struct DeleteSubcategoryFormPayload {
    pub subcategory_id: SubcategoryId,
    pub password: ClearTextPassword,
}

form_error!(
    DeleteSubcategoryFormError,
    "Delete subcategory form validation failed: {0}",
    "Delete subcategory form contains invalid data: {0}"
);

impl TryFrom<(i32, DeleteSubcategoryForm)> for DeleteSubcategoryFormPayload {
    type Error = DeleteSubcategoryFormError;

    fn try_from((id, value): (i32, DeleteSubcategoryForm)) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            subcategory_id: SubcategoryId::new(id)?,
            password: value.password.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add_form() -> AddSubcategoryForm {
        AddSubcategoryForm {
            nombre: " Bandas de rock ".to_string(),
            imagen_url: "https://example.com/rock.jpg".to_string(),
            categoria: "musica-artistas".to_string(),
            password: "abc123".to_string(),
        }
    }

    #[test]
    fn add_subcategory_trims_name_and_parses_category() {
        let payload: AddSubcategoryFormPayload = add_form().try_into().unwrap();
        assert_eq!(payload.subcategory.nombre.as_str(), "Bandas de rock");
        assert_eq!(payload.subcategory.categoria, Categoria::MusicaArtistas);
    }

    #[test]
    fn add_subcategory_rejects_unknown_category() {
        let form = AddSubcategoryForm {
            categoria: "Bandas".to_string(),
            ..add_form()
        };
        let err = AddSubcategoryFormPayload::try_from(form).unwrap_err();
        assert!(matches!(err, AddSubcategoryFormError::TypeConstraint(_)));
    }

    #[test]
    fn add_subcategory_rejects_relative_url() {
        let form = AddSubcategoryForm {
            imagen_url: "/images/rock.jpg".to_string(),
            ..add_form()
        };
        let err = AddSubcategoryFormPayload::try_from(form).unwrap_err();
        assert!(matches!(err, AddSubcategoryFormError::Validation(_)));
    }

    #[test]
    fn add_subcategory_requires_password() {
        let form = AddSubcategoryForm {
            password: String::new(),
            ..add_form()
        };
        assert!(AddSubcategoryFormPayload::try_from(form).is_err());
    }

    #[test]
    fn update_subcategory_keeps_absent_fields_unset() {
        let form = UpdateSubcategoryForm {
            nombre: Some("Rock".to_string()),
            imagen_url: None,
            categoria: None,
            password: "abc123".to_string(),
        };
        let payload: UpdateSubcategoryFormPayload = (3, form).try_into().unwrap();
        assert_eq!(payload.subcategory_id.get(), 3);
        assert_eq!(payload.update.nombre.unwrap().as_str(), "Rock");
        assert!(payload.update.imagen_url.is_none());
        assert!(payload.update.categoria.is_none());
    }

    #[test]
    fn delete_subcategory_rejects_non_positive_id() {
        let form = DeleteSubcategoryForm {
            password: "abc123".to_string(),
        };
        assert!(DeleteSubcategoryFormPayload::try_from((0, form)).is_err());
    }
}
