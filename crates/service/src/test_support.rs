#![cfg(test)]
use configs::DatabaseConfig;
use models::db::{connect_with_config, init_schema};
use sea_orm::DatabaseConnection;

/// Isolated, migrated SQLite database per test; returns the file path for cleanup.
pub async fn get_db() -> Result<(DatabaseConnection, String), anyhow::Error> {
    let path = std::env::temp_dir()
        .join(format!("service-test-{}.db", uuid::Uuid::new_v4()))
        .to_string_lossy()
        .into_owned();
    let mut cfg = DatabaseConfig::for_sqlite_file(&path);
    cfg.max_connections = cfg.max_connections.max(8);
    cfg.acquire_timeout_secs = 10;
    let db = connect_with_config(&cfg).await?;
    init_schema(&db).await?;
    Ok((db, path))
}

pub fn cleanup(path: &str) {
    let _ = std::fs::remove_file(path);
}
