use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

/// Opens the connection pool shared by every request handler.
///
/// The caller owns the returned handle and should `close` it on shutdown.
pub async fn create_connection(
    database_url: &str,
    max_connections: u32,
) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(database_url);
    options
        .max_connections(max_connections)
        .sqlx_logging_level(log::LevelFilter::Debug);

    Database::connect(options).await
}
