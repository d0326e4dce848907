//! Payment entity model and DTOs.

use loanbook_core::types::{Date, DbId};
use loanbook_core::validation::{FieldKind, FieldRule, RequestShape};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `payment` table. Payments are immutable once recorded.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Payment {
    pub payment_id: DbId,
    pub loan_id: DbId,
    pub payment_date: Date,
    pub principal_paid: f64,
    pub interest_paid: f64,
}

/// DTO for recording a payment. The owning loan comes from the request path.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePayment {
    pub payment_date: Date,
    pub principal_paid: f64,
    pub interest_paid: f64,
}

impl RequestShape for CreatePayment {
    const RULES: &'static [FieldRule] = &[
        FieldRule::required("payment_date", FieldKind::Date),
        FieldRule::required("principal_paid", FieldKind::Number),
        FieldRule::required("interest_paid", FieldKind::Number),
    ];
}
