mod billing;
mod bootstrap;
mod charges;
mod config;
mod contract;
mod error;

use clap::Parser;
use rust_decimal::Decimal;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::charges::{ChargeOrchestrator, ChargeRequest};
use crate::config::{ChargePolicy, Config};
use crate::error::{AppError, AppResult};

/// Issues debit note charges and a matching receipt for a contract, with
/// the contract's contact number pointed at a sentinel for the duration.
#[derive(Parser, Debug)]
#[command(name = "issue-charges", version)]
struct Cli {
    /// Contract id to issue charges against
    #[arg(long, short = 'c', default_value_t = 0)]
    contract: i64,

    /// Document fee amount
    #[arg(long = "doc-charges", short = 'd', default_value = "0")]
    doc_charges: Decimal,

    /// Insurance fee amount
    #[arg(long = "ins-charges", short = 'i', default_value = "0")]
    ins_charges: Decimal,

    /// Receipt amount the charges must tally with
    #[arg(long, short = 'r', default_value = "0")]
    receipt: Decimal,

    /// Billing API base URL (overrides API_BASE_URL)
    #[arg(long)]
    api_url: Option<String>,
}

// Initialize logging and tracing
fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,issue_charges=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() {
    init_tracing();
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> AppResult<()> {
    let mut config = Config::from_env().map_err(|e| AppError::Config(e.to_string()))?;
    if let Some(api_url) = cli.api_url {
        config.api_base_url = api_url;
    }

    let context = bootstrap::initialize(&config).await?;

    // Authentication failure aborts before any store mutation.
    let session = context
        .billing
        .authenticate(&config.api_username, &config.api_password)
        .await?;

    let request = ChargeRequest {
        contract_id: cli.contract,
        document_charge: cli.doc_charges,
        insurance_charge: cli.ins_charges,
        receipt_amount: cli.receipt,
    };

    let orchestrator = ChargeOrchestrator::new(
        context.contracts,
        context.billing,
        ChargePolicy::default(),
    );

    let report = orchestrator.issue_charges(&request, &session).await?;

    info!(
        "✓ Charges issued successfully: {} debit note(s), receipt posted: {}",
        report.debit_notes_posted.len(),
        report.receipt_posted
    );

    Ok(())
}
