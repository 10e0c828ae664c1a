use database::db::create_connection;
use log::{error, info};
use migration::{Migrator, MigratorTrait};
use server::{config::Config, routes, state::AppState, utils::shutdown::shutdown_signal};
use std::error::Error;

#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(e) = run().await {
        error!("Server stopped: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn Error>> {
    let config = Config::from_env()?;

    let db = create_connection(&config.database_url, config.max_connections).await?;
    info!("Connected to database");

    if config.run_migrations {
        Migrator::up(&db, None).await?;
        info!("Migrations applied");
    }

    let app = routes::router(AppState::new(db.clone(), config.major_delete_policy));

    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;
    info!("Running axum on http://{}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await?;
    info!("Database connection closed");

    Ok(())
}
