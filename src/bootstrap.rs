use std::sync::Arc;
use std::time::Duration;

use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use tracing::info;

use crate::billing::BillingClient;
use crate::config::Config;
use crate::contract::ContractRepository;
use crate::error::AppResult;

/// Explicit per-run context. Replaces the process-wide session and
/// connection globals of the tool this one descends from.
pub struct AppContext {
    pub contracts: Arc<ContractRepository>,
    pub billing: Arc<BillingClient>,
}

pub async fn initialize(config: &Config) -> AppResult<AppContext> {
    info!("Initializing application components ...");

    let pool = initialize_database(&config.database_url).await?;
    let contracts = Arc::new(ContractRepository::new(pool));

    let billing = Arc::new(BillingClient::new(config.api_base_url.clone()));
    info!("✓ Billing client targeting {}", config.api_base_url);

    Ok(AppContext { contracts, billing })
}

async fn initialize_database(database_url: &str) -> AppResult<MySqlPool> {
    info!("Connecting to database...");

    // One orchestration per process; a small pool is plenty.
    let pool = MySqlPoolOptions::new()
        .max_connections(2)
        .acquire_timeout(Duration::from_secs(30))
        .connect(database_url)
        .await?;

    info!("✓ Database pool ready");
    Ok(pool)
}
