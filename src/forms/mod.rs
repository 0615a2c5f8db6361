//! Request schemas for every catalog operation.
//!
//! Each `*Form` is the raw deserialized body; `TryFrom` turns it into a typed
//! `*Payload` after `validator` checks and value-object construction, so the
//! services only ever see well-formed input. The admin password is split out
//! of the payload at this point.

/// Declares a form error enum carrying `validator` and type-constraint
/// failures with per-form messages.
macro_rules! form_error {
    ($name:ident, $validation:tt, $type_constraint:tt) => {
        #[derive(Debug, thiserror::Error)]
        pub enum $name {
            #[error($validation)]
            Validation(String),
            #[error($type_constraint)]
            TypeConstraint(String),
        }

        impl From<validator::ValidationErrors> for $name {
            fn from(value: validator::ValidationErrors) -> Self {
                Self::Validation(value.to_string())
            }
        }

        impl From<crate::domain::types::TypeConstraintError> for $name {
            fn from(value: crate::domain::types::TypeConstraintError) -> Self {
                Self::TypeConstraint(value.to_string())
            }
        }
    };
}

pub mod admin;
pub mod posters;
pub mod search;
pub mod subcategories;
