use anyhow::{Context, Result};
use product_code::{
    config::{myconfig::Config, server_config::ServerConfig},
    handler::AppRouter,
    state::AppState,
};
use shared::{
    config::{ConnectionManager, ConnectionPool},
    utils::init_logger,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let config = Config::init().context("Failed to load configuration")?;
    let server_config = ServerConfig::from_config(&config)?;

    init_logger(
        "product-code-service",
        config.is_dev,
        config.enable_file_log,
    );

    info!("🚀 Starting Product Code Service initialization...");

    let db_pool = ConnectionManager::new_pool(
        &server_config.database_url,
        config.db_min_conn,
        config.db_max_conn,
    )
    .await
    .context("Failed to initialize database pool")?;

    if config.run_migrations {
        run_migrations(&db_pool)
            .await
            .context("Failed to run database migrations")?;
    }

    let state = AppState::new(db_pool).context("Failed to create AppState")?;

    info!("✅ Application setup completed successfully.");

    AppRouter::serve(server_config.http_addr, state).await?;

    info!("✅ Product Code Service shutdown complete.");
    Ok(())
}

async fn run_migrations(pool: &ConnectionPool) -> Result<()> {
    info!("📦 Running database migrations...");
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
