use anyhow::Context;
use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

const DEFAULT_MIGRATIONS_PATH: &str = "infrastructure/persistence/migrations";

/// Build the database configuration from environment variables
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string (required)
/// - DATABASE_MAX_CONNECTIONS: pool size (default: 5)
/// - DATABASE_ACQUIRE_TIMEOUT_SECS: pool acquire timeout (default: 30)
/// - PLACEMENT_LOCK_TIMEOUT_MS: lock wait inside cart and order transactions (default: 2000)
pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<DatabaseConfig> {
    let db_url = lookup("DATABASE_URL").context("DATABASE_URL must be set")?;
    let mut config = DatabaseConfig::new(db_url);

    if let Some(max) = parse_var::<u32>(&lookup, "DATABASE_MAX_CONNECTIONS")? {
        config.max_connections = max;
    }
    if let Some(secs) = parse_var::<u64>(&lookup, "DATABASE_ACQUIRE_TIMEOUT_SECS")? {
        config.acquire_timeout = Duration::from_secs(secs);
    }
    if let Some(ms) = parse_var::<u64>(&lookup, "PLACEMENT_LOCK_TIMEOUT_MS")? {
        config.lock_timeout = Duration::from_millis(ms);
    }

    Ok(config)
}

pub fn migrations_path(lookup: impl Fn(&str) -> Option<String>) -> String {
    lookup("MIGRATIONS_PATH").unwrap_or_else(|| DEFAULT_MIGRATIONS_PATH.to_string())
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> anyhow::Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    lookup(name)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .with_context(|| format!("{name} has an invalid value: {raw}"))
        })
        .transpose()
}

/// Connect the pool and apply pending migrations when the directory exists
pub async fn init_database(
    config: &DatabaseConfig,
    migrations_path: &str,
) -> anyhow::Result<PgPool> {
    let pool = create_postgres_pool(config).await?;

    if Path::new(migrations_path).exists() {
        run_migrations(&pool, migrations_path).await?;
        tracing::info!("Migrations applied from {}", migrations_path);
    } else {
        tracing::warn!("No migrations found at {}, skipping", migrations_path);
    }

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn should_require_database_url() {
        let result = from_lookup(lookup_from(&[]));

        assert!(result.is_err());
    }

    #[test]
    fn should_apply_overrides() {
        let config = from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://localhost/food"),
            ("DATABASE_MAX_CONNECTIONS", "12"),
            ("PLACEMENT_LOCK_TIMEOUT_MS", "500"),
        ]))
        .unwrap();

        assert_eq!(config.max_connections, 12);
        assert_eq!(config.acquire_timeout, Duration::from_secs(30));
        assert_eq!(config.lock_timeout, Duration::from_millis(500));
    }

    #[test]
    fn should_reject_unparsable_number() {
        let result = from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://localhost/food"),
            ("DATABASE_ACQUIRE_TIMEOUT_SECS", "soon"),
        ]));

        assert!(result.is_err());
    }

    #[test]
    fn should_default_migrations_path() {
        assert_eq!(
            migrations_path(lookup_from(&[])),
            "infrastructure/persistence/migrations"
        );
    }
}
