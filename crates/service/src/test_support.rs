#![cfg(test)]
use sea_orm::DatabaseConnection;
use tempfile::TempDir;
use models::db::{connect_with_config, init_schema, DatabaseConfig};

/// Throwaway SQLite file with the schema applied; the store lives as long as
/// the returned `TempDir`.
pub async fn get_db() -> Result<(TempDir, DatabaseConnection), anyhow::Error> {
    let dir = tempfile::tempdir()?;
    let url = format!("sqlite://{}?mode=rwc", dir.path().join("service.db").display());
    let db = connect_with_config(&DatabaseConfig::for_url(&url)).await?;
    init_schema(&db).await?;
    Ok((dir, db))
}
