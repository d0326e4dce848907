//! Repository for the `payment` table.

use loanbook_core::types::DbId;
use sqlx::PgPool;

use crate::models::payment::{CreatePayment, Payment};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "payment_id, loan_id, payment_date, principal_paid, interest_paid";

/// Provides create and list operations for payments.
pub struct PaymentRepo;

impl PaymentRepo {
    /// Record a payment against `loan_id`, returning the stored row.
    ///
    /// The loan is not looked up first; an unknown `loan_id` surfaces as a
    /// foreign key violation from the database.
    pub async fn create(
        pool: &PgPool,
        loan_id: DbId,
        input: &CreatePayment,
    ) -> Result<Payment, sqlx::Error> {
        let query = format!(
            "INSERT INTO payment (loan_id, payment_date, principal_paid, interest_paid)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Payment>(&query)
            .bind(loan_id)
            .bind(input.payment_date)
            .bind(input.principal_paid)
            .bind(input.interest_paid)
            .fetch_one(pool)
            .await
    }

    /// List all payments for a loan, oldest first.
    pub async fn list_by_loan(pool: &PgPool, loan_id: DbId) -> Result<Vec<Payment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM payment WHERE loan_id = $1 ORDER BY payment_date, payment_id"
        );
        sqlx::query_as::<_, Payment>(&query)
            .bind(loan_id)
            .fetch_all(pool)
            .await
    }
}
