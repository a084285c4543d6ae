use std::fmt;

use rust_decimal::Decimal;
use thiserror::Error;

/// Top-level error type for the entire application
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Issuance error: {0}")]
    Issuance(#[from] IssuanceError),

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Contract not found: {0}")]
    ContractNotFound(i64),

    #[error("Remote call to {endpoint} returned status {status}")]
    RemoteCall { endpoint: String, status: u16 },

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Issuance-related errors
///
/// Every failure out of the orchestrator is one of these; the two restore
/// variants are the partial-failure reports the operator must act on.
#[derive(Error, Debug)]
pub enum IssuanceError {
    #[error(
        "document and insurance charges do not tally with receipt amount: {document} + {insurance} != {receipt}"
    )]
    AmountMismatch {
        document: Decimal,
        insurance: Decimal,
        receipt: Decimal,
    },

    #[error("negative amount for {field}: {value}")]
    NegativeAmount { field: &'static str, value: Decimal },

    #[error("{step} failed: {source}")]
    StepFailed {
        step: IssuanceStep,
        #[source]
        source: Box<AppError>,
    },

    #[error(
        "contact restore failed after charges were posted: {restore_error}; \
         posted charges were not retracted, manual reconciliation required"
    )]
    RestoreFailed { restore_error: Box<AppError> },

    #[error(
        "{step} failed ({step_error}) and the contact restore also failed ({restore_error}); \
         any already-posted charges were not retracted, manual reconciliation required"
    )]
    StepAndRestoreFailed {
        step: IssuanceStep,
        step_error: Box<AppError>,
        restore_error: Box<AppError>,
    },
}

/// Orchestration steps named in failure reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssuanceStep {
    ReadContact,
    OverrideContact,
    DocumentDebit,
    InsuranceDebit,
    Receipt,
}

impl fmt::Display for IssuanceStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IssuanceStep::ReadContact => "contact lookup",
            IssuanceStep::OverrideContact => "contact override",
            IssuanceStep::DocumentDebit => "document debit note",
            IssuanceStep::InsuranceDebit => "insurance debit note",
            IssuanceStep::Receipt => "receipt",
        };
        f.write_str(name)
    }
}

/// Result type alias for the application
pub type AppResult<T> = Result<T, AppError>;
