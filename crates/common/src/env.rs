//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected directories exist at startup.

use std::path::Path;

use tracing::{info, warn};

/// Ensure expected directories exist; warn on missing optional ones.
///
/// `static_dir` only triggers a warning since the API works without it,
/// while `data_dir` holds the SQLite file and is created when absent.
pub async fn ensure_env(static_dir: &str, data_dir: &str) -> anyhow::Result<()> {
    if tokio::fs::metadata(static_dir).await.is_err() {
        warn!(%static_dir, "static assets directory not found; frontend page will 404");
    }
    if data_dir.is_empty() {
        return Ok(());
    }
    tokio::fs::create_dir_all(data_dir)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {data_dir}: {e}"))?;
    info!(%data_dir, "data directory ready");
    Ok(())
}

/// Parent directory of a SQLite file path, or `""` when the file lives in the cwd.
pub fn parent_dir(file: &str) -> &str {
    Path::new(file)
        .parent()
        .and_then(|p| p.to_str())
        .unwrap_or("")
}
