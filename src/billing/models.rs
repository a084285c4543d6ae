use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Authenticated API session. Created once per process by the
/// `/authenticate` handshake and held for the whole run; there is no
/// refresh logic, a session is exactly as long-lived as the process.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub token: String,
    pub user_id: i64,
}

/// Response body from POST /authenticate. The API also sends `name` and
/// `role`; only the fields this tool consumes are kept.
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub id: i64,
    pub username: String,
    pub token: String,
}

/// Outbound debit note record. Field names are the wire names expected by
/// the `/contract/debitnote` handler.
#[derive(Debug, Clone, Serialize)]
pub struct DebitNoteRequest {
    pub contract_id: i64,
    pub capital: Decimal,
    pub contract_installment_type_id: i32,
    pub notes: String,
    pub user_id: i64,
}

/// Outbound receipt record for `/contract/receipt`. The contract id field
/// is `cid` on this endpoint, not `contract_id`.
#[derive(Debug, Clone, Serialize)]
pub struct ReceiptRequest {
    pub cid: i64,
    pub amount: Decimal,
    pub notes: String,
    pub user_id: i64,
}
