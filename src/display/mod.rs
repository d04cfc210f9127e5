//! Display formatting for terminal output
//!
//! Turns models and report structs into tables and text blocks. Nothing here
//! computes figures; the aggregation engine does that.

pub mod investment;
pub mod report;
pub mod summary;
pub mod transaction;

pub use investment::{format_investment_table, format_value_change};
pub use summary::format_summary;
pub use transaction::{format_category_list, format_transaction_details, format_transaction_table};
