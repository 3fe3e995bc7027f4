//! Runtime environment helpers
//!
//! Thin wrapper around `common::env` so the server crate prepares its
//! directories through the service layer.

/// Ensure the static directory is present and the directory holding the
/// SQLite file exists.
pub async fn ensure_env(static_dir: &str, sqlite_path: Option<&str>) -> anyhow::Result<()> {
    let data_dir = sqlite_path.map(common::env::parent_dir).unwrap_or("");
    common::env::ensure_env(static_dir, data_dir).await
}
