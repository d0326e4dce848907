//! Repository for the `loan` table.

use loanbook_core::types::DbId;
use sqlx::PgPool;

use crate::models::loan::{CreateLoan, Loan, UpdateLoan};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "loan_id, nickname, starting_amount, interest_rate, current_amount_owed, description";

/// Provides CRUD operations for loans.
pub struct LoanRepo;

impl LoanRepo {
    /// List every loan ordered by identifier. Empty when the table is empty.
    pub async fn list(pool: &PgPool) -> Result<Vec<Loan>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM loan ORDER BY loan_id");
        sqlx::query_as::<_, Loan>(&query).fetch_all(pool).await
    }

    /// Find a loan by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Loan>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM loan WHERE loan_id = $1");
        sqlx::query_as::<_, Loan>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new loan, returning the stored row including its assigned ID.
    pub async fn create(pool: &PgPool, input: &CreateLoan) -> Result<Loan, sqlx::Error> {
        let query = format!(
            "INSERT INTO loan (nickname, starting_amount, interest_rate, current_amount_owed, description)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Loan>(&query)
            .bind(&input.nickname)
            .bind(input.starting_amount)
            .bind(input.interest_rate)
            .bind(input.current_amount_owed)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Replace the mutable fields of a loan.
    ///
    /// `starting_amount` and `current_amount_owed` are left untouched.
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateLoan,
    ) -> Result<Option<Loan>, sqlx::Error> {
        let query = format!(
            "UPDATE loan SET
                nickname = $2,
                interest_rate = $3,
                description = $4
             WHERE loan_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Loan>(&query)
            .bind(id)
            .bind(&input.nickname)
            .bind(input.interest_rate)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a loan together with all of its payments.
    ///
    /// Both statements run in one transaction: payments first, then the loan.
    /// Returns `true` if the loan row was removed.
    pub async fn delete_cascade(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let payments = sqlx::query("DELETE FROM payment WHERE loan_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let loans = sqlx::query("DELETE FROM loan WHERE loan_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::debug!(
            loan_id = id,
            payments_removed = payments.rows_affected(),
            "Loan cascade delete committed"
        );
        Ok(loans.rows_affected() > 0)
    }
}
