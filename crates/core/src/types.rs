/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Calendar date without a time component (payment dates).
pub type Date = chrono::NaiveDate;
