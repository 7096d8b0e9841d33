use sea_orm::DatabaseConnection;

/// Shared handler state. The connection pool is the only cross-request
/// resource; it is opened once in `startup::run` and cloned per request.
#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
}
