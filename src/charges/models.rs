use rust_decimal::Decimal;

/// One requested issuance: the two charge amounts and the receipt amount
/// they must tally with. All amounts are exact decimals; reconciliation is
/// bit-for-bit equality, never tolerance-based.
#[derive(Debug, Clone)]
pub struct ChargeRequest {
    pub contract_id: i64,
    pub document_charge: Decimal,
    pub insurance_charge: Decimal,
    pub receipt_amount: Decimal,
}

/// Charge categories in the remote installment-type taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChargeKind {
    Document,
    Insurance,
}

/// Which of the three posts are active for a validated request. A charge is
/// active iff its amount is strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReconciliationPlan {
    pub post_document: bool,
    pub post_insurance: bool,
    pub post_receipt: bool,
}

impl ReconciliationPlan {
    pub fn is_empty(&self) -> bool {
        !(self.post_document || self.post_insurance || self.post_receipt)
    }
}

/// Summary of a fully successful run, for operator logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuanceReport {
    pub debit_notes_posted: Vec<ChargeKind>,
    pub receipt_posted: bool,
    pub contact_restored: bool,
}
