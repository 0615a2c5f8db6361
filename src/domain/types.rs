//! Strongly-typed value objects used by catalog entities.
//!
//! Entities carry these wrappers instead of raw primitives so that
//! identifiers, display text, URLs, prices and categories are checked once at
//! the boundary and never re-validated downstream.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;
use validator::ValidateUrl;

/// Errors produced when attempting to construct constrained domain types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// An identifier was zero or negative.
    #[error("{0} must be greater than zero")]
    NonPositiveId(&'static str),
    /// A numeric value required to be non-negative was negative.
    #[error("{0} must be zero or greater")]
    NegativeNumber(&'static str),
    /// A numeric value does not fit the storage type.
    #[error("{0} is out of range")]
    OutOfRange(&'static str),
    /// A string was empty or whitespace-only after trimming.
    #[error("{0} cannot be empty")]
    EmptyString(&'static str),
    /// URL validation failed.
    #[error("{0} must be a valid URL")]
    InvalidUrl(&'static str),
    /// Category code outside the fixed set.
    #[error("unknown category: {0}")]
    UnknownCategory(String),
}

fn trim_and_require_non_empty<S: Into<String>>(
    value: S,
    field: &'static str,
) -> Result<String, TypeConstraintError> {
    let trimmed = value.into().trim().to_string();
    if trimmed.is_empty() {
        Err(TypeConstraintError::EmptyString(field))
    } else {
        Ok(trimmed)
    }
}

fn require_absolute_url<S: Into<String>>(
    value: S,
    field: &'static str,
) -> Result<String, TypeConstraintError> {
    let trimmed = trim_and_require_non_empty(value, field)?;
    if trimmed.as_str().validate_url() {
        Ok(trimmed)
    } else {
        Err(TypeConstraintError::InvalidUrl(field))
    }
}

/// Shared accessors and conversions for string-backed newtypes.
macro_rules! impl_string_newtype {
    ($name:ident) => {
        impl $name {
            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl std::ops::Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                self.as_str()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.as_str() == *other
            }
        }
    };
}

/// Trimmed string that rejects empty input.
macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed, non-empty value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                trim_and_require_non_empty(value, $field).map(Self)
            }
        }

        impl_string_newtype!($name);
    };
}

/// Trimmed absolute URL.
macro_rules! url_string_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed URL and validates its format.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                require_absolute_url(value, $field).map(Self)
            }
        }

        impl_string_newtype!($name);
    };
}

/// Store-assigned positive integer identifier.
macro_rules! id_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(
            Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
        )]
        #[serde(try_from = "i32", into = "i32")]
        pub struct $name(i32);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId($field))
                }
            }

            /// Returns the raw `i32` backing this identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<i32> for $name {
            fn eq(&self, other: &i32) -> bool {
                self.0 == *other
            }
        }
    };
}

id_newtype!(
    SubcategoryId,
    "Unique identifier for a subcategory.",
    "subcategoria_id"
);
id_newtype!(PosterId, "Unique identifier for a poster.", "poster id");

non_empty_string_newtype!(
    SubcategoryName,
    "Subcategory display name (`nombre`).",
    "nombre"
);
non_empty_string_newtype!(PosterTitle, "Poster display title (`titulo`).", "titulo");
non_empty_string_newtype!(
    PasswordHash,
    "PHC-formatted admin password hash as persisted in the credential store.",
    "password hash"
);

url_string_newtype!(ImageUrl, "Absolute image URL (`imagen_url`).", "imagen_url");

/// Poster price in minor currency units (cents). Never negative.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "i64", into = "i32")]
pub struct PosterPrice(i32);

impl PosterPrice {
    /// Constructs a price that must be zero or greater.
    pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
        if value >= 0 {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::NegativeNumber("precio"))
        }
    }

    /// Returns the raw amount in minor units.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl TryFrom<i64> for PosterPrice {
    type Error = TypeConstraintError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value < 0 {
            return Err(TypeConstraintError::NegativeNumber("precio"));
        }
        let value = i32::try_from(value).map_err(|_| TypeConstraintError::OutOfRange("precio"))?;
        Self::new(value)
    }
}

impl From<PosterPrice> for i32 {
    fn from(value: PosterPrice) -> Self {
        value.0
    }
}

impl Display for PosterPrice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Top-level catalog category. The set is closed; wire values are kebab-case.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Categoria {
    Deportes,
    MusicaArtistas,
    FamososPersonajes,
    Peliculas,
    Photocards,
    Otros,
}

impl Categoria {
    /// Every category in display order.
    pub const ALL: [Categoria; 6] = [
        Self::Deportes,
        Self::MusicaArtistas,
        Self::FamososPersonajes,
        Self::Peliculas,
        Self::Photocards,
        Self::Otros,
    ];

    /// Wire and persistence code.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Deportes => "deportes",
            Self::MusicaArtistas => "musica-artistas",
            Self::FamososPersonajes => "famosos-personajes",
            Self::Peliculas => "peliculas",
            Self::Photocards => "photocards",
            Self::Otros => "otros",
        }
    }

    /// Human readable label shown by storefront clients.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Deportes => "Deportes",
            Self::MusicaArtistas => "Música/Artistas",
            Self::FamososPersonajes => "Famosos/Personajes",
            Self::Peliculas => "Películas",
            Self::Photocards => "Photocards",
            Self::Otros => "Otros",
        }
    }
}

impl Display for Categoria {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Categoria {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|categoria| categoria.as_str() == value)
            .ok_or_else(|| TypeConstraintError::UnknownCategory(value.to_string()))
    }
}

impl TryFrom<String> for Categoria {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl From<Categoria> for String {
    fn from(value: Categoria) -> Self {
        value.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_names() {
        let value = PosterTitle::new("  Poster Nirvana  ").unwrap();
        assert_eq!(value.as_str(), "Poster Nirvana");
    }

    #[test]
    fn rejects_blank_names() {
        assert_eq!(
            SubcategoryName::new("   ").unwrap_err(),
            TypeConstraintError::EmptyString("nombre")
        );
    }

    #[test]
    fn rejects_non_positive_ids() {
        let err = PosterId::new(0).unwrap_err();
        assert_eq!(err, TypeConstraintError::NonPositiveId("poster id"));
    }

    #[test]
    fn validates_urls() {
        assert!(ImageUrl::new("https://example.com/p/123.jpg").is_ok());
        let err = ImageUrl::new("not-a-url").unwrap_err();
        assert_eq!(err, TypeConstraintError::InvalidUrl("imagen_url"));
    }

    #[test]
    fn price_allows_zero() {
        assert_eq!(PosterPrice::new(0).unwrap().get(), 0);
    }

    #[test]
    fn price_rejects_negative_and_oversized_values() {
        assert_eq!(
            PosterPrice::new(-1).unwrap_err(),
            TypeConstraintError::NegativeNumber("precio")
        );
        assert_eq!(
            PosterPrice::try_from(i64::from(i32::MAX) + 1).unwrap_err(),
            TypeConstraintError::OutOfRange("precio")
        );
    }

    #[test]
    fn categoria_parses_wire_codes_only() {
        for categoria in Categoria::ALL {
            assert_eq!(Categoria::try_from(categoria.as_str()).unwrap(), categoria);
        }
        assert!(Categoria::try_from("Bandas").is_err());
        assert!(Categoria::try_from("DEPORTES").is_err());
    }

    #[test]
    fn categoria_serializes_as_kebab_case() {
        let json = serde_json::to_string(&Categoria::FamososPersonajes).unwrap();
        assert_eq!(json, "\"famosos-personajes\"");
    }
}
