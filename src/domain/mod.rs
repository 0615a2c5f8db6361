//! Catalog entities and the value objects they are built from.

pub mod poster;
pub mod subcategory;
pub mod types;
