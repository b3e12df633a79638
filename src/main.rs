use color_eyre::eyre::Result;
use dotenv::dotenv;
use meetbook_api::config::ApiConfig;
use meetbook_db::{create_pool, schema::initialize_database};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;

    // Create database connection pool
    let db_pool = create_pool(&config.database_url).await?;

    // The unique (date, slot) index only exists under the strict policy
    initialize_database(&db_pool, config.policy.reject_double_booking).await?;

    // Start API server
    meetbook_api::start_server(config, db_pool).await?;

    Ok(())
}
