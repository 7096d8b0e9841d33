use sea_orm::DatabaseConnection;
use tempfile::TempDir;

use crate::db::{connect_with_config, init_schema, DatabaseConfig};


/// Insert/read tests for every record type
pub mod crud_tests;

/// Fresh SQLite file with the schema applied. Keep the `TempDir` alive for
/// the duration of the test.
pub(crate) async fn setup_test_db() -> anyhow::Result<(TempDir, DatabaseConnection)> {
    let dir = tempfile::tempdir()?;
    let url = format!("sqlite://{}?mode=rwc", dir.path().join("models.db").display());
    let db = connect_with_config(&DatabaseConfig::for_url(&url)).await?;
    init_schema(&db).await?;
    Ok((dir, db))
}
