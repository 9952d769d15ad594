use super::{cors_config, database_config, server_config::ServerConfig};
use persistence::db::DatabaseConfig;
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub database: DatabaseConfig,
    pub migrations_path: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let lookup = |name: &str| std::env::var(name).ok();
        Ok(Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            database: database_config::from_lookup(lookup)?,
            migrations_path: database_config::migrations_path(lookup),
        })
    }
}
