use serde::Deserialize;

/// Runtime settings for the poster shop service.
///
/// Values are layered: built-in defaults, `config/default.yaml`,
/// `config/{APP_ENV}.yaml`, then `APP_*` environment variables.
#[derive(Clone, Debug, Deserialize)]
pub struct ServerConfig {
    /// Interface the HTTP server binds to.
    pub address: String,
    pub port: u16,
    /// Path of the SQLite database file.
    pub database_url: String,
}

impl ServerConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "local".to_string());

        config::Config::builder()
            .set_default("address", "127.0.0.1")?
            .set_default("port", 8080)?
            .set_default("database_url", "poster_shop.db")?
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{app_env}")).required(false))
            .add_source(config::Environment::with_prefix("APP"))
            .build()?
            .try_deserialize()
    }
}
