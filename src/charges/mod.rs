pub mod models;
pub mod orchestrator;
pub mod reconcile;

pub use self::models::{ChargeKind, ChargeRequest, IssuanceReport, ReconciliationPlan};
pub use self::orchestrator::ChargeOrchestrator;
pub use self::reconcile::reconcile;
