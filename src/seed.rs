//! Bulk catalog loading from CSV, used by the `poster-shop-seed` binary.
//!
//! Rows go straight to the repository; the admin gate is not consulted.
//! Invalid rows are skipped and reported, valid rows are kept.

use std::collections::HashMap;
use std::io::Read;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::poster::NewPoster;
use crate::domain::subcategory::NewSubcategory;
use crate::domain::types::{
    Categoria, ImageUrl, PosterPrice, PosterTitle, SubcategoryId, SubcategoryName,
    TypeConstraintError,
};
use crate::repository::{
    PosterWriter, RepositoryError, SubcategoryListQuery, SubcategoryReader, SubcategoryWriter,
};

pub const SEED_HEADERS: [&str; 6] = [
    "subcategoria",
    "categoria",
    "subcategoria_imagen_url",
    "titulo",
    "precio",
    "imagen_url",
];

#[derive(Debug, Deserialize)]
struct SeedRecord {
    subcategoria: String,
    categoria: String,
    subcategoria_imagen_url: String,
    titulo: String,
    precio: String,
    imagen_url: String,
}

/// Row-level seeding error.
#[derive(Debug, Clone, Serialize)]
pub struct SeedRowError {
    pub row_number: usize,
    pub titulo: Option<String>,
    pub message: String,
}

/// Aggregated seeding outcome.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SeedReport {
    pub total_rows: usize,
    pub subcategories_created: usize,
    pub posters_created: usize,
    pub skipped: usize,
    pub errors: Vec<SeedRowError>,
}

impl SeedReport {
    fn push_error(
        &mut self,
        row_number: usize,
        titulo: Option<String>,
        message: impl Into<String>,
    ) {
        self.skipped += 1;
        self.errors.push(SeedRowError {
            row_number,
            titulo,
            message: message.into(),
        });
    }
}

/// Failures that abort the whole run.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("header validation failed: {0}")]
    HeaderValidation(String),
    #[error("failed to load existing subcategories: {0}")]
    Repository(#[from] RepositoryError),
}

#[derive(Debug, Error)]
enum RowError {
    #[error("{0}")]
    Invalid(#[from] TypeConstraintError),
    #[error("{0}")]
    Message(String),
    #[error("storage error: {0}")]
    Storage(#[from] RepositoryError),
}

struct SeedRow {
    subcategory: NewSubcategory,
    titulo: PosterTitle,
    precio: PosterPrice,
    imagen_url: ImageUrl,
}

impl TryFrom<SeedRecord> for SeedRow {
    type Error = RowError;

    fn try_from(value: SeedRecord) -> Result<Self, Self::Error> {
        let precio: i64 = value
            .precio
            .trim()
            .parse()
            .map_err(|_| RowError::Message(format!("precio is not an integer: {}", value.precio)))?;

        Ok(Self {
            subcategory: NewSubcategory {
                nombre: SubcategoryName::new(value.subcategoria)?,
                imagen_url: ImageUrl::new(value.subcategoria_imagen_url)?,
                categoria: Categoria::try_from(value.categoria.trim())?,
            },
            titulo: PosterTitle::new(value.titulo)?,
            precio: PosterPrice::try_from(precio)?,
            imagen_url: ImageUrl::new(value.imagen_url)?,
        })
    }
}

fn validate_headers(headers: &csv::StringRecord) -> Result<(), SeedError> {
    let normalized: Vec<String> = headers
        .iter()
        .map(|header| header.trim().to_ascii_lowercase())
        .collect();

    for expected in SEED_HEADERS {
        if !normalized.iter().any(|header| header == expected) {
            return Err(SeedError::HeaderValidation(format!(
                "missing column {expected}; expected {}",
                SEED_HEADERS.join(",")
            )));
        }
    }
    Ok(())
}

/// Load posters from CSV, creating subcategories on first mention. A
/// subcategory is reused when both its name and category match.
pub fn seed_catalog<I, R>(input: I, repo: &R) -> Result<SeedReport, SeedError>
where
    I: Read,
    R: SubcategoryReader + SubcategoryWriter + PosterWriter,
{
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers = reader.headers()?.clone();
    validate_headers(&headers)?;
    let normalized = csv::StringRecord::from(
        headers
            .iter()
            .map(|header| header.trim().to_ascii_lowercase())
            .collect::<Vec<_>>(),
    );

    let mut known: HashMap<(String, Categoria), SubcategoryId> = repo
        .list_subcategories(SubcategoryListQuery::default())?
        .into_iter()
        .map(|s| ((s.nombre.into_inner(), s.categoria), s.id))
        .collect();

    let mut report = SeedReport::default();

    for (idx, record) in reader.records().enumerate() {
        let row_number = idx + 2;
        report.total_rows += 1;

        let record = match record.and_then(|r| r.deserialize::<SeedRecord>(Some(&normalized))) {
            Ok(record) => record,
            Err(e) => {
                report.push_error(row_number, None, e.to_string());
                continue;
            }
        };
        let titulo = record.titulo.clone();

        let result = SeedRow::try_from(record)
            .and_then(|row| insert_row(row, &mut known, &mut report, repo));
        if let Err(e) = result {
            log::warn!("Skipping seed row {row_number}: {e}");
            report.push_error(row_number, Some(titulo), e.to_string());
        }
    }

    log::info!(
        "Seeded {} posters and {} subcategories from {} rows ({} skipped)",
        report.posters_created,
        report.subcategories_created,
        report.total_rows,
        report.skipped
    );
    Ok(report)
}

fn insert_row<R>(
    row: SeedRow,
    known: &mut HashMap<(String, Categoria), SubcategoryId>,
    report: &mut SeedReport,
    repo: &R,
) -> Result<(), RowError>
where
    R: SubcategoryWriter + PosterWriter,
{
    let key = (
        row.subcategory.nombre.as_str().to_string(),
        row.subcategory.categoria,
    );
    let subcategoria_id = match known.get(&key) {
        Some(id) => *id,
        None => {
            let created = repo.create_subcategory(&row.subcategory)?;
            report.subcategories_created += 1;
            known.insert(key, created.id);
            created.id
        }
    };

    repo.create_poster(&NewPoster {
        titulo: row.titulo,
        imagen_url: row.imagen_url,
        precio: row.precio,
        categoria: row.subcategory.categoria,
        subcategoria_id,
    })?;
    report.posters_created += 1;
    Ok(())
}
