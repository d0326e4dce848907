//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument and issue one statement apiece.

pub mod loan_repo;
pub mod payment_repo;

pub use loan_repo::LoanRepo;
pub use payment_repo::PaymentRepo;
