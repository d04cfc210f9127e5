//! Service layer for MoneyTracker
//!
//! Services validate input, mutate the in-memory ledger held by
//! [`AppState`](crate::state::AppState), persist it and write the audit log.

pub mod investment;
pub mod transaction;

pub use investment::{InvestmentService, ValueChange};
pub use transaction::{TransactionFilter, TransactionService};
