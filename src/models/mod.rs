pub mod credential;
pub mod poster;
pub mod subcategory;

#[cfg(feature = "server")]
pub mod config;
