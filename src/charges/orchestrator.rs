use std::sync::Arc;

use tracing::{info, warn};

use crate::billing::models::{AuthSession, DebitNoteRequest, ReceiptRequest};
use crate::billing::ChargeService;
use crate::charges::models::{ChargeKind, ChargeRequest, IssuanceReport, ReconciliationPlan};
use crate::charges::reconcile::reconcile;
use crate::config::ChargePolicy;
use crate::contract::ContactStore;
use crate::error::{AppError, IssuanceError, IssuanceStep};

/// Sequences one charge issuance run: contact override, conditional debit
/// notes, conditional receipt, contact restoration.
///
/// Precondition: no other writer touches the contract's contact field while
/// a run is in flight. The store offers no locking, so exclusive access is
/// assumed rather than enforced. There is also no crash recovery: a process
/// killed between the override and the restore leaves the sentinel contact
/// persisted, and the operator must restore it by hand.
pub struct ChargeOrchestrator {
    store: Arc<dyn ContactStore>,
    billing: Arc<dyn ChargeService>,
    policy: ChargePolicy,
}

impl ChargeOrchestrator {
    pub fn new(
        store: Arc<dyn ContactStore>,
        billing: Arc<dyn ChargeService>,
        policy: ChargePolicy,
    ) -> Self {
        Self {
            store,
            billing,
            policy,
        }
    }

    /// Run the full sequence for one request. Debit notes post strictly
    /// before the receipt, document before insurance, nothing concurrent.
    /// Once the sentinel is written, every exit path attempts the restore
    /// exactly once; a failed restore is reported, never retried, and never
    /// retracts already-posted charges.
    pub async fn issue_charges(
        &self,
        request: &ChargeRequest,
        session: &AuthSession,
    ) -> Result<IssuanceReport, IssuanceError> {
        let plan = reconcile(request)?;
        if plan.is_empty() {
            warn!("All amounts are zero; no charges will be posted");
        }

        info!(
            "Issuing charges for contract {}: doc {} ins {} receipt {}",
            request.contract_id,
            request.document_charge,
            request.insurance_charge,
            request.receipt_amount
        );

        let saved_contact = self
            .store
            .contact_number(request.contract_id)
            .await
            .map_err(|e| IssuanceError::StepFailed {
                step: IssuanceStep::ReadContact,
                source: Box::new(e),
            })?;
        info!("Current contact: {}", saved_contact);

        self.store
            .set_contact_number(request.contract_id, &self.policy.sentinel_contact)
            .await
            .map_err(|e| IssuanceError::StepFailed {
                step: IssuanceStep::OverrideContact,
                source: Box::new(e),
            })?;
        info!(
            "Contact overridden with sentinel {}",
            self.policy.sentinel_contact
        );

        // Point of no return: the sentinel is persisted.
        let posted = self.post_charges(request, &plan, session).await;

        let restored = self
            .store
            .set_contact_number(request.contract_id, &saved_contact)
            .await;

        match (posted, restored) {
            (Ok(mut report), Ok(())) => {
                info!("✓ Contact restored to {}", saved_contact);
                report.contact_restored = true;
                Ok(report)
            }
            (Ok(_), Err(restore_error)) => Err(IssuanceError::RestoreFailed {
                restore_error: Box::new(restore_error),
            }),
            (Err((step, step_error)), Ok(())) => {
                warn!("Contact restored to {} after {} failed", saved_contact, step);
                Err(IssuanceError::StepFailed {
                    step,
                    source: Box::new(step_error),
                })
            }
            (Err((step, step_error)), Err(restore_error)) => {
                Err(IssuanceError::StepAndRestoreFailed {
                    step,
                    step_error: Box::new(step_error),
                    restore_error: Box::new(restore_error),
                })
            }
        }
    }

    async fn post_charges(
        &self,
        request: &ChargeRequest,
        plan: &ReconciliationPlan,
        session: &AuthSession,
    ) -> Result<IssuanceReport, (IssuanceStep, AppError)> {
        let mut debit_notes_posted = Vec::new();

        if plan.post_document {
            self.billing
                .post_debit_note(
                    session,
                    &DebitNoteRequest {
                        contract_id: request.contract_id,
                        capital: request.document_charge,
                        contract_installment_type_id: self.policy.document_installment_type,
                        notes: self.policy.debit_note_tag.clone(),
                        user_id: session.user_id,
                    },
                )
                .await
                .map_err(|e| (IssuanceStep::DocumentDebit, e))?;
            info!("✓ Document debit note posted ({})", request.document_charge);
            debit_notes_posted.push(ChargeKind::Document);
        }

        if plan.post_insurance {
            self.billing
                .post_debit_note(
                    session,
                    &DebitNoteRequest {
                        contract_id: request.contract_id,
                        capital: request.insurance_charge,
                        contract_installment_type_id: self.policy.insurance_installment_type,
                        notes: self.policy.debit_note_tag.clone(),
                        user_id: session.user_id,
                    },
                )
                .await
                .map_err(|e| (IssuanceStep::InsuranceDebit, e))?;
            info!("✓ Insurance debit note posted ({})", request.insurance_charge);
            debit_notes_posted.push(ChargeKind::Insurance);
        }

        let mut receipt_posted = false;
        if plan.post_receipt {
            self.billing
                .post_receipt(
                    session,
                    &ReceiptRequest {
                        cid: request.contract_id,
                        amount: request.receipt_amount,
                        notes: self.policy.receipt_tag.clone(),
                        user_id: session.user_id,
                    },
                )
                .await
                .map_err(|e| (IssuanceStep::Receipt, e))?;
            info!("✓ Receipt posted ({})", request.receipt_amount);
            receipt_posted = true;
        }

        Ok(IssuanceReport {
            debit_notes_posted,
            receipt_posted,
            contact_restored: false,
        })
    }
}
