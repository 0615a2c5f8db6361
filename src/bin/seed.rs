//! Load posters from a CSV file into the catalog database.
//!
//! Usage: `poster-shop-seed <file.csv>`. The database location comes from the
//! same configuration as the server.

use std::fs::File;
use std::io;
use std::process::ExitCode;

use env_logger::Env;

use poster_shop::db::{establish_connection_pool, run_migrations};
use poster_shop::models::config::ServerConfig;
use poster_shop::repository::DieselRepository;
use poster_shop::seed::seed_catalog;

fn run(path: &str) -> io::Result<()> {
    let server_config = ServerConfig::load().map_err(io::Error::other)?;
    let pool = establish_connection_pool(&server_config.database_url).map_err(io::Error::other)?;
    run_migrations(&pool).map_err(io::Error::other)?;
    let repo = DieselRepository::new(pool);

    let report = seed_catalog(File::open(path)?, &repo).map_err(io::Error::other)?;
    for error in &report.errors {
        log::warn!(
            "Row {} ({}): {}",
            error.row_number,
            error.titulo.as_deref().unwrap_or("-"),
            error.message
        );
    }
    println!(
        "{} posters, {} new subcategories, {} rows skipped",
        report.posters_created, report.subcategories_created, report.skipped
    );
    Ok(())
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: poster-shop-seed <file.csv>");
        return ExitCode::FAILURE;
    };

    match run(&path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Seeding failed: {e}");
            ExitCode::FAILURE
        }
    }
}
