use std::time::Duration;

use configs::DatabaseConfig;
use migration::MigratorTrait;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, TransactionTrait};
use tracing::info;

use crate::seed;

pub const IN_MEMORY_URL: &str = "sqlite::memory:";

// An in-memory database dies with its connection, so never let the pool recycle it.
const PINNED_CONNECTION_LIFETIME: Duration = Duration::from_secs(60 * 60 * 24 * 365);

pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let mut opt = ConnectOptions::new(cfg.url.clone());
    opt.max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .sqlx_logging(cfg.sqlx_logging);
    if cfg.is_sqlite_memory() {
        opt.idle_timeout(PINNED_CONNECTION_LIFETIME).max_lifetime(PINNED_CONNECTION_LIFETIME);
    } else {
        opt.idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
            .max_lifetime(Duration::from_secs(cfg.max_lifetime_secs));
    }
    let db = Database::connect(opt).await?;
    Ok(db)
}

/// Apply all pending migrations.
pub async fn migrate(db: &DatabaseConnection) -> anyhow::Result<()> {
    migration::Migrator::up(db, None).await?;
    Ok(())
}

/// Fresh, migrated SQLite database living in a single pooled connection.
pub async fn connect_in_memory() -> anyhow::Result<DatabaseConnection> {
    let mut cfg = DatabaseConfig { url: IN_MEMORY_URL.to_string(), ..DatabaseConfig::default() };
    cfg.normalize_from_env();
    let db = connect_with_config(&cfg).await?;
    migrate(&db).await?;
    Ok(db)
}

/// Connect, then migrate and seed as the config asks.
pub async fn prepare(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let db = connect_with_config(cfg).await?;
    if cfg.run_migrations {
        migrate(&db).await?;
        info!(event = "migrations_applied", "database schema is up to date");
    }
    if cfg.seed_sample_data {
        let txn = db.begin().await?;
        let seeded = seed::sample_data(&txn).await?;
        txn.commit().await?;
        match seeded {
            Some(data) => info!(event = "sample_data_seeded", cities = data.cities.len(), events = data.events.len(), "sample data inserted"),
            None => info!(event = "sample_data_skipped", "cities already present, sample data not inserted"),
        }
    }
    Ok(db)
}
