pub mod client;
pub mod models;

use async_trait::async_trait;

use crate::error::AppResult;
use self::models::{AuthSession, DebitNoteRequest, ReceiptRequest};

pub use self::client::BillingClient;

/// Seam over the remote charge endpoints so the orchestrator can be
/// exercised without a live billing API. Neither call retries; retry
/// policy, if any, belongs to the caller.
#[async_trait]
pub trait ChargeService: Send + Sync {
    async fn post_debit_note(
        &self,
        session: &AuthSession,
        request: &DebitNoteRequest,
    ) -> AppResult<()>;

    async fn post_receipt(&self, session: &AuthSession, request: &ReceiptRequest)
        -> AppResult<()>;
}
