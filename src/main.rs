use std::io;

use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use env_logger::Env;

use poster_shop::db::{establish_connection_pool, run_migrations};
use poster_shop::models::config::ServerConfig;
use poster_shop::repository::DieselRepository;
use poster_shop::routes::configure;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let server_config = ServerConfig::load().map_err(|e| {
        log::error!("Failed to load configuration: {e}");
        io::Error::other(e)
    })?;

    let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
        log::error!("Failed to open database {}: {e}", server_config.database_url);
        io::Error::other(e)
    })?;
    run_migrations(&pool).map_err(|e| {
        log::error!("{e}");
        io::Error::other(e)
    })?;

    let repo = DieselRepository::new(pool);
    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!(
        "Starting poster shop on {}:{}",
        server_config.address,
        server_config.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(repo.clone()))
            .configure(configure)
    })
    .bind(bind_address)?
    .run()
    .await
}
