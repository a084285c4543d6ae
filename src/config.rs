use config::ConfigError;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub api_username: String,
    pub api_password: String,
    pub database_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            api_base_url: std::env::var("API_BASE_URL")
                .unwrap_or_else(|_| "https://agrivest.app/api-dev".to_string()),
            api_username: std::env::var("API_USERNAME")
                .map_err(|_| ConfigError::NotFound("API_USERNAME".to_string()))?,
            api_password: std::env::var("API_PASSWORD")
                .map_err(|_| ConfigError::NotFound("API_PASSWORD".to_string()))?,
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::NotFound("DATABASE_URL".to_string()))?,
        })
    }
}

/// Fixed issuance policy values: the sentinel contact substituted while
/// charges are posted, the installment-type taxonomy codes for each charge
/// kind, and the note tags stamped on automated records.
///
/// The sentinel suppresses the customer notifications the billing service
/// fires on contact lookup during debit/receipt handling.
#[derive(Debug, Clone)]
pub struct ChargePolicy {
    pub sentinel_contact: String,
    pub document_installment_type: i32,
    pub insurance_installment_type: i32,
    pub debit_note_tag: String,
    pub receipt_tag: String,
}

impl Default for ChargePolicy {
    fn default() -> Self {
        Self {
            sentinel_contact: "768237192".to_string(),
            document_installment_type: 7,
            insurance_installment_type: 6,
            debit_note_tag: "[AUTOMATED DEBIT]".to_string(),
            receipt_tag: "[AUTOMATED RECEIPT]".to_string(),
        }
    }
}
