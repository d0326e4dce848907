//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` request DTOs that also declare their validation rules
//!   through [`loanbook_core::validation::RequestShape`]

pub mod loan;
pub mod payment;
