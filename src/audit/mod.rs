//! Audit logging for MoneyTracker
//!
//! Every create, update and delete made through the services is appended to
//! `audit.log` as one JSON line holding the before/after snapshots.
//!
//! ```rust,ignore
//! use money_tracker::audit::{AuditEntry, AuditLogger, EntityType};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::create(now, EntityType::Transaction, txn.id.to_string(), None, &txn))?;
//! ```

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
