//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of change recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Operation::Create => "CREATE",
            Operation::Update => "UPDATE",
            Operation::Delete => "DELETE",
        };
        f.pad(label)
    }
}

/// Entities that show up in the audit log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Transaction,
    Investment,
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityType::Transaction => write!(f, "Transaction"),
            EntityType::Investment => write!(f, "Investment"),
        }
    }
}

/// One line of the audit log
///
/// `before` is set for updates and deletes, `after` for creates and updates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    pub timestamp: DateTime<Utc>,
    pub operation: Operation,
    pub entity_type: EntityType,
    pub entity_id: String,

    /// Short label such as the category or holding name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

impl AuditEntry {
    fn record(
        at: DateTime<Utc>,
        operation: Operation,
        entity_type: EntityType,
        entity_id: String,
        entity_name: Option<String>,
        before: Option<serde_json::Value>,
        after: Option<serde_json::Value>,
    ) -> Self {
        let diff_summary = match (operation, &before, &after) {
            (Operation::Update, Some(b), Some(a)) => super::generate_diff(b, a),
            _ => None,
        };

        Self {
            timestamp: at,
            operation,
            entity_type,
            entity_id,
            entity_name,
            before,
            after,
            diff_summary,
        }
    }

    pub fn create<T: Serialize>(
        at: DateTime<Utc>,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        let snapshot = serde_json::to_value(entity).ok();
        Self::record(
            at,
            Operation::Create,
            entity_type,
            entity_id.into(),
            entity_name,
            None,
            snapshot,
        )
    }

    /// Record a change; the diff summary lists the fields that differ
    pub fn update<T: Serialize>(
        at: DateTime<Utc>,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
    ) -> Self {
        Self::record(
            at,
            Operation::Update,
            entity_type,
            entity_id.into(),
            entity_name,
            serde_json::to_value(before).ok(),
            serde_json::to_value(after).ok(),
        )
    }

    pub fn delete<T: Serialize>(
        at: DateTime<Utc>,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        let snapshot = serde_json::to_value(entity).ok();
        Self::record(
            at,
            Operation::Delete,
            entity_type,
            entity_id.into(),
            entity_name,
            snapshot,
            None,
        )
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let label = self
            .entity_name
            .as_ref()
            .map(|name| format!(" ({})", name))
            .unwrap_or_default();
        let changes = self
            .diff_summary
            .as_ref()
            .map(|diff| format!("\n  Changes: {}", diff))
            .unwrap_or_default();

        format!(
            "{} {:<6} {} #{}{}{}",
            self.timestamp.format("%Y-%m-%d %H:%M"),
            self.operation,
            self.entity_type,
            self.entity_id,
            label,
            changes
        )
    }
}
