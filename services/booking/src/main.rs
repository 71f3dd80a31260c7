use std::sync::Arc;

use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use booking::facade::BookingFacade;
use booking::repositories::PgStorage;
use common::database;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    info!("Starting vacation booking service");

    // Initialize database connection pool
    let db_config = database::DatabaseConfig::from_env()?;
    let pool = database::init_pool(&db_config).await?;

    // Check database connectivity
    if database::health_check(&pool).await? {
        info!("Database connection successful");
    } else {
        anyhow::bail!("Failed to connect to database");
    }

    // Wire the storage collaborator into the facade
    let storage = Arc::new(PgStorage::new(pool));
    let facade = BookingFacade::new(storage);

    // Readiness probe over the public read path
    let countries = facade.get_all_countries().await?;
    info!("Loaded {} countries", countries.len());

    info!("Vacation booking service initialized successfully");

    Ok(())
}
