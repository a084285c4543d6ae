use rust_decimal::Decimal;

use crate::charges::models::{ChargeRequest, ReconciliationPlan};
use crate::error::IssuanceError;

/// Validate that the charge amounts sum exactly to the receipt amount and
/// decide which posts are active. Pure function, no I/O.
pub fn reconcile(request: &ChargeRequest) -> Result<ReconciliationPlan, IssuanceError> {
    for (field, value) in [
        ("doc_charges", request.document_charge),
        ("ins_charges", request.insurance_charge),
        ("receipt", request.receipt_amount),
    ] {
        if value < Decimal::ZERO {
            return Err(IssuanceError::NegativeAmount { field, value });
        }
    }

    if request.document_charge + request.insurance_charge != request.receipt_amount {
        return Err(IssuanceError::AmountMismatch {
            document: request.document_charge,
            insurance: request.insurance_charge,
            receipt: request.receipt_amount,
        });
    }

    Ok(ReconciliationPlan {
        post_document: request.document_charge > Decimal::ZERO,
        post_insurance: request.insurance_charge > Decimal::ZERO,
        post_receipt: request.receipt_amount > Decimal::ZERO,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn request(d: Decimal, i: Decimal, r: Decimal) -> ChargeRequest {
        ChargeRequest {
            contract_id: 1,
            document_charge: d,
            insurance_charge: i,
            receipt_amount: r,
        }
    }

    #[test]
    fn succeeds_iff_charges_tally_with_receipt() {
        assert!(reconcile(&request(dec!(50), dec!(0), dec!(50))).is_ok());
        assert!(reconcile(&request(dec!(30), dec!(20), dec!(50))).is_ok());
        assert!(reconcile(&request(dec!(0), dec!(0), dec!(0))).is_ok());

        let err = reconcile(&request(dec!(30), dec!(15), dec!(50))).unwrap_err();
        assert!(matches!(err, IssuanceError::AmountMismatch { .. }));
    }

    #[test]
    fn equality_is_exact_on_decimal_fractions() {
        // 0.1 + 0.2 == 0.3 holds for decimals where binary floats would drift.
        assert!(reconcile(&request(dec!(0.1), dec!(0.2), dec!(0.3))).is_ok());
        assert!(reconcile(&request(dec!(0.1), dec!(0.2), dec!(0.30000001))).is_err());
    }

    #[test]
    fn negative_amounts_are_rejected() {
        let err = reconcile(&request(dec!(-10), dec!(60), dec!(50))).unwrap_err();
        assert!(matches!(
            err,
            IssuanceError::NegativeAmount {
                field: "doc_charges",
                ..
            }
        ));

        let err = reconcile(&request(dec!(25), dec!(25), dec!(-50))).unwrap_err();
        assert!(matches!(err, IssuanceError::NegativeAmount { field: "receipt", .. }));
    }

    #[test]
    fn charge_is_active_iff_strictly_positive() {
        let plan = reconcile(&request(dec!(50), dec!(0), dec!(50))).unwrap();
        assert!(plan.post_document);
        assert!(!plan.post_insurance);
        assert!(plan.post_receipt);

        let plan = reconcile(&request(dec!(0), dec!(20), dec!(20))).unwrap();
        assert!(!plan.post_document);
        assert!(plan.post_insurance);
        assert!(plan.post_receipt);
    }

    #[test]
    fn zero_request_yields_empty_plan() {
        let plan = reconcile(&request(dec!(0), dec!(0), dec!(0))).unwrap();
        assert!(plan.is_empty());
    }
}
