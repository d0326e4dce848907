//! Loan entity model and DTOs.

use loanbook_core::types::DbId;
use loanbook_core::validation::{FieldKind, FieldRule, RequestShape};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `loan` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Loan {
    pub loan_id: DbId,
    pub nickname: String,
    pub starting_amount: f64,
    pub interest_rate: f64,
    pub current_amount_owed: f64,
    pub description: Option<String>,
}

/// DTO for creating a loan. The identifier is always assigned by the database.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLoan {
    pub nickname: String,
    pub starting_amount: f64,
    pub interest_rate: f64,
    pub current_amount_owed: f64,
    #[serde(default)]
    pub description: Option<String>,
}

impl RequestShape for CreateLoan {
    const RULES: &'static [FieldRule] = &[
        FieldRule::required("nickname", FieldKind::Text),
        FieldRule::required("starting_amount", FieldKind::Number),
        FieldRule::required("interest_rate", FieldKind::Number),
        FieldRule::required("current_amount_owed", FieldKind::Number),
        FieldRule::optional("description", FieldKind::Text),
    ];
}

/// DTO for revising a loan's mutable fields.
///
/// All three fields are required: an update replaces the full mutable set.
/// `starting_amount` and `current_amount_owed` are not revisable here.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateLoan {
    pub nickname: String,
    pub interest_rate: f64,
    pub description: String,
}

impl RequestShape for UpdateLoan {
    const RULES: &'static [FieldRule] = &[
        FieldRule::required("nickname", FieldKind::Text),
        FieldRule::required("interest_rate", FieldKind::Number),
        FieldRule::required("description", FieldKind::Text),
    ];
}
