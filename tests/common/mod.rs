//! Helpers for integration tests.
#![allow(dead_code)]

use poster_shop::db::{DbPool, establish_connection_pool, run_migrations};
use poster_shop::domain::poster::NewPoster;
use poster_shop::domain::subcategory::NewSubcategory;
use poster_shop::domain::types::{
    Categoria, ImageUrl, PosterPrice, PosterTitle, SubcategoryId, SubcategoryName,
};
use tempfile::NamedTempFile;

/// Temporary database used in integration tests.
pub struct TestDb {
    _tempfile: NamedTempFile,
    pool: DbPool,
}

impl TestDb {
    pub fn new() -> Self {
        let tempfile = NamedTempFile::new().expect("Failed to create temp file");
        let pool = establish_connection_pool(tempfile.path().to_str().unwrap())
            .expect("Failed to establish SQLite connection.");
        run_migrations(&pool).expect("Migrations failed");
        TestDb {
            _tempfile: tempfile,
            pool,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }
}

pub fn new_subcategory(nombre: &str, categoria: Categoria) -> NewSubcategory {
    NewSubcategory {
        nombre: SubcategoryName::new(nombre).expect("valid name"),
        imagen_url: ImageUrl::new("https://example.com/subcategory.jpg").expect("valid url"),
        categoria,
    }
}

pub fn new_poster(titulo: &str, subcategoria_id: SubcategoryId) -> NewPoster {
    NewPoster {
        titulo: PosterTitle::new(titulo).expect("valid title"),
        imagen_url: ImageUrl::new("https://example.com/poster.jpg").expect("valid url"),
        precio: PosterPrice::new(2500).expect("valid price"),
        categoria: Categoria::MusicaArtistas,
        subcategoria_id,
    }
}
