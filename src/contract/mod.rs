pub mod repository;

use async_trait::async_trait;

use crate::error::AppResult;

pub use self::repository::ContractRepository;

/// Single-field access to a contract's stored contact number. Each call is
/// an independent atomic statement; no transaction spans an issuance run.
#[async_trait]
pub trait ContactStore: Send + Sync {
    async fn contact_number(&self, contract_id: i64) -> AppResult<String>;

    async fn set_contact_number(&self, contract_id: i64, value: &str) -> AppResult<()>;
}
