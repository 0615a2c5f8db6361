//! Conversions from form-level errors into [`ServiceError`].
//!
//! Kept out of the forms module so the forms stay independent of the service
//! layer.

use crate::domain::types::TypeConstraintError;
use crate::forms::admin::SetPasswordFormError;
use crate::forms::posters::{AddPosterFormError, DeletePosterFormError, UpdatePosterFormError};
use crate::forms::search::SearchFormError;
use crate::forms::subcategories::{
    AddSubcategoryFormError, DeleteSubcategoryFormError, UpdateSubcategoryFormError,
};
use crate::services::ServiceError;

impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

impl From<AddSubcategoryFormError> for ServiceError {
    fn from(val: AddSubcategoryFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

impl From<UpdateSubcategoryFormError> for ServiceError {
    fn from(val: UpdateSubcategoryFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

impl From<DeleteSubcategoryFormError> for ServiceError {
    fn from(val: DeleteSubcategoryFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

impl From<AddPosterFormError> for ServiceError {
    fn from(val: AddPosterFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

impl From<UpdatePosterFormError> for ServiceError {
    fn from(val: UpdatePosterFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

impl From<DeletePosterFormError> for ServiceError {
    fn from(val: DeletePosterFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

impl From<SearchFormError> for ServiceError {
    fn from(val: SearchFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

impl From<SetPasswordFormError> for ServiceError {
    fn from(val: SetPasswordFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}
