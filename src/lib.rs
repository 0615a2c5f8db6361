//! Poster shop catalog service.
//!
//! The `data` feature exposes the persistence layer (schema, models, domain
//! types and repositories). The `server` feature adds forms, services, the
//! admin password gate, the actix-web routes and the CSV seeding tool.

#[cfg(feature = "data")]
pub mod db;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "data")]
pub mod schema;

#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
pub mod error_conversions;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod password;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod seed;
#[cfg(feature = "server")]
pub mod services;
