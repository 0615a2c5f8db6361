//! Storage handle shared by every repository.
//!
//! The pool is created once by the process entry point and injected into
//! [`crate::repository::DieselRepository`]; dropping the last clone closes
//! every connection.

use std::time::Duration;

use diesel::connection::SimpleConnection;
use diesel::expression::functions::define_sql_function;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PooledConnection};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use thiserror::Error;

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

define_sql_function! {
    /// Unicode-aware `lower()`. SQLite's builtin only folds ASCII letters.
    fn lower_unicode(x: diesel::sql_types::Text) -> diesel::sql_types::Text;
}

#[derive(Debug, Error)]
pub enum DbSetupError {
    #[error("failed to build connection pool: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    #[error("failed to run migrations: {0}")]
    Migrations(String),
}

/// Applies per-connection pragmas and registers [`lower_unicode`] when r2d2
/// opens a new SQLite connection.
#[derive(Debug, Clone, Copy)]
struct SqlitePragmas;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for SqlitePragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        conn.batch_execute(&format!(
            "PRAGMA foreign_keys = ON; PRAGMA busy_timeout = {};",
            BUSY_TIMEOUT.as_millis()
        ))
        .map_err(diesel::r2d2::Error::QueryError)?;

        lower_unicode_utils::register_impl(conn, |x: String| x.to_lowercase())
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Build an r2d2 pool for the SQLite database at `database_url`.
pub fn establish_connection_pool(database_url: &str) -> Result<DbPool, DbSetupError> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let pool = Pool::builder()
        .connection_customizer(Box::new(SqlitePragmas))
        .build(manager)?;
    Ok(pool)
}

/// Bring the schema up to date. Safe to call on every start.
pub fn run_migrations(pool: &DbPool) -> Result<(), DbSetupError> {
    let mut conn = pool.get()?;
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| DbSetupError::Migrations(e.to_string()))?;
    Ok(())
}
