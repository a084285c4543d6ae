use async_trait::async_trait;
use sqlx::MySqlPool;

use super::ContactStore;
use crate::error::{AppError, AppResult};

/// Contract store accessor, scoped to the `customer_contact` column.
pub struct ContractRepository {
    pool: MySqlPool,
}

impl ContractRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactStore for ContractRepository {
    async fn contact_number(&self, contract_id: i64) -> AppResult<String> {
        let contact = sqlx::query_scalar::<_, String>(
            "SELECT customer_contact FROM contract WHERE id = ?",
        )
        .bind(contract_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::ContractNotFound(contract_id))?;

        Ok(contact)
    }

    // A no-change update reports zero affected rows on MySQL, so row counts
    // are not treated as an existence check here; the orchestrator reads
    // the contact first and surfaces missing contracts from that read.
    async fn set_contact_number(&self, contract_id: i64, value: &str) -> AppResult<()> {
        sqlx::query("UPDATE contract SET customer_contact = ? WHERE id = ?")
            .bind(value)
            .bind(contract_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
