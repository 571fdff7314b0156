use anyhow::{Context, Result};
use dotenv::dotenv;
use shared::{
    config::{Config, ConnectionManager},
    service::run_tariff_refresher,
    utils::Logger,
};
use std::time::Duration;
use tracing::info;
use webapi::{handler::AppRouter, state::AppState};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let is_dev = std::env::var("APP_ENV").unwrap_or_default() != "production";
    let _logger = Logger::new("webapi", is_dev);

    let config = Config::init().context("Failed to load configuration")?;

    let pool = ConnectionManager::new_pool(&config.database_url)
        .await
        .context("Failed to create connection pool")?;

    if config.run_migrations {
        info!("⚙️ Running database migrations");
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .context("Failed to run migrations")?;
    }

    let state = AppState::new(pool, &config.jwt_secret);

    tokio::spawn(run_tariff_refresher(
        state.di_container.tariff.clone(),
        Duration::from_secs(config.tariff_refresh_secs),
    ));

    println!("🚀 Server started successfully");

    AppRouter::serve(config.port, state)
        .await
        .context("Failed to start server")?;

    info!("Shutting down servers...");

    Ok(())
}
