use crate::db::{DbConnection, DbPool};
use crate::domain::poster::{NewPoster, Poster, PosterUpdate};
use crate::domain::subcategory::{NewSubcategory, Subcategory, SubcategoryUpdate};
use crate::domain::types::{
    Categoria, PasswordHash, PosterId, PosterTitle, SubcategoryId, SubcategoryName,
};

pub mod credential;
pub mod errors;
pub mod poster;
pub mod subcategory;

pub use errors::{RepositoryError, RepositoryResult};

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Escape `LIKE` wildcards so user input is matched literally. Pair with
/// `.escape('\\')`.
pub(crate) fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// Clamp a caller-supplied row count to what `LIMIT` accepts.
pub(crate) fn to_sql_limit(limit: usize) -> i64 {
    i64::try_from(limit).unwrap_or(i64::MAX)
}

/// Filters for listing subcategories. Results are always newest first.
#[derive(Debug, Clone, Default)]
pub struct SubcategoryListQuery {
    pub categoria: Option<Categoria>,
}

impl SubcategoryListQuery {
    pub fn categoria(mut self, categoria: Categoria) -> Self {
        self.categoria = Some(categoria);
        self
    }
}

/// Filters for listing posters. Results are always newest first.
#[derive(Debug, Clone, Default)]
pub struct PosterListQuery {
    pub categoria: Option<Categoria>,
    pub subcategoria_id: Option<SubcategoryId>,
    /// Truncate to the first `limit` rows.
    pub limit: Option<usize>,
}

impl PosterListQuery {
    pub fn categoria(mut self, categoria: Categoria) -> Self {
        self.categoria = Some(categoria);
        self
    }
    pub fn subcategory(mut self, subcategoria_id: SubcategoryId) -> Self {
        self.subcategoria_id = Some(subcategoria_id);
        self
    }
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Read-only access to the singleton admin credential.
pub trait CredentialReader {
    /// Currently stored hash, if one was ever set.
    fn get_password_hash(&self) -> RepositoryResult<Option<PasswordHash>>;
}

/// Write access to the singleton admin credential.
pub trait CredentialWriter {
    /// Create or overwrite the credential. Concurrent callers race; the last
    /// commit wins.
    fn set_password_hash(&self, hash: &PasswordHash) -> RepositoryResult<bool>;
    /// Store `hash` only if no credential exists yet, atomically. Returns
    /// `true` when this call created the credential.
    fn bootstrap_password_hash(&self, hash: &PasswordHash) -> RepositoryResult<bool>;
}

/// Read-only operations for subcategory entities.
pub trait SubcategoryReader {
    /// List subcategories matching the query, newest first.
    fn list_subcategories(&self, query: SubcategoryListQuery)
    -> RepositoryResult<Vec<Subcategory>>;
    /// Retrieve a subcategory by its identifier.
    fn get_subcategory_by_id(&self, id: SubcategoryId) -> RepositoryResult<Option<Subcategory>>;
    /// Names starting with `prefix` (case-insensitive), in insertion order.
    fn suggest_subcategory_names(
        &self,
        prefix: &str,
        limit: usize,
    ) -> RepositoryResult<Vec<SubcategoryName>>;
}

/// Write operations for subcategory entities.
pub trait SubcategoryWriter {
    /// Persist a new subcategory and return the stored record.
    fn create_subcategory(&self, subcategory: &NewSubcategory) -> RepositoryResult<Subcategory>;
    /// Apply a partial update. `None` when `id` does not exist.
    fn update_subcategory(
        &self,
        id: SubcategoryId,
        update: &SubcategoryUpdate,
    ) -> RepositoryResult<Option<Subcategory>>;
    /// Delete the subcategory and every poster referencing it in one
    /// transaction. `false` when `id` does not exist.
    fn delete_subcategory(&self, id: SubcategoryId) -> RepositoryResult<bool>;
}

/// Read-only operations for poster entities.
pub trait PosterReader {
    /// List posters matching the query, newest first.
    fn list_posters(&self, query: PosterListQuery) -> RepositoryResult<Vec<Poster>>;
    /// Retrieve a poster by its identifier.
    fn get_poster_by_id(&self, id: PosterId) -> RepositoryResult<Option<Poster>>;
    /// Case-insensitive substring match on the title, newest first.
    fn search_posters(&self, query: &str, limit: usize) -> RepositoryResult<Vec<Poster>>;
    /// Titles starting with `prefix` (case-insensitive), in insertion order.
    fn suggest_poster_titles(&self, prefix: &str, limit: usize)
    -> RepositoryResult<Vec<PosterTitle>>;
}

/// Write operations for poster entities.
pub trait PosterWriter {
    /// Persist a new poster. Fails with [`RepositoryError::Validation`] if the
    /// referenced subcategory does not exist.
    fn create_poster(&self, poster: &NewPoster) -> RepositoryResult<Poster>;
    /// Apply a partial update. `None` when `id` does not exist.
    fn update_poster(&self, id: PosterId, update: &PosterUpdate)
    -> RepositoryResult<Option<Poster>>;
    /// Delete a single poster. `false` when `id` does not exist.
    fn delete_poster(&self, id: PosterId) -> RepositoryResult<bool>;
}

#[cfg(test)]
mod tests {
    use super::{escape_like, to_sql_limit};

    #[test]
    fn escapes_like_wildcards() {
        assert_eq!(escape_like("50%_off\\"), "50\\%\\_off\\\\");
        assert_eq!(escape_like("Nirv"), "Nirv");
    }

    #[test]
    fn sql_limit_saturates() {
        assert_eq!(to_sql_limit(20), 20);
        assert_eq!(to_sql_limit(usize::MAX), i64::MAX);
    }
}
