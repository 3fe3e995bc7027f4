

use configs::DatabaseConfig;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::db::{connect_with_config, init_schema};

/// Fresh, migrated SQLite database in the system temp dir.
pub(crate) async fn setup_test_db() -> anyhow::Result<(DatabaseConnection, String)> {
    let path = std::env::temp_dir()
        .join(format!("models-test-{}.db", Uuid::new_v4()))
        .to_string_lossy()
        .into_owned();
    let cfg = DatabaseConfig::for_sqlite_file(&path);
    let db = connect_with_config(&cfg).await?;
    init_schema(&db).await?;
    Ok((db, path))
}

pub(crate) fn cleanup(path: &str) {
    let _ = std::fs::remove_file(path);
}
