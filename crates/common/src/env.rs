//! Environment/runtime helpers
//!
//! Sanity checks to ensure the SQLite store has somewhere to live at startup.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

/// Extract the on-disk file path from a SQLite connection URL.
///
/// Returns `None` for in-memory databases.
pub fn sqlite_file_path(database_url: &str) -> Option<PathBuf> {
    let rest = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or_default();
    if path.is_empty() || path == ":memory:" || path.starts_with("file::memory:") {
        return None;
    }
    Some(PathBuf::from(path))
}

/// Ensure the directory holding the SQLite file exists.
pub async fn ensure_env(database_url: &str) -> anyhow::Result<()> {
    let Some(file) = sqlite_file_path(database_url) else {
        warn!(%database_url, "in-memory database configured; data will not survive restarts");
        return Ok(());
    };
    let dir = match file.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => Path::new(".").to_path_buf(),
    };
    tokio::fs::create_dir_all(&dir)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", dir.display()))?;
    info!(db_file = %file.display(), "sqlite store location ready");
    Ok(())
}
