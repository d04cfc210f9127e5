//! Strongly-typed ID wrappers for all entity types
//!
//! IDs are integers derived from the creation timestamp in milliseconds.
//! Newtype wrappers keep transaction and investment IDs from being mixed up
//! at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use chrono::{DateTime, Utc};

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Wrap a raw integer ID
            pub const fn from_raw(raw: u64) -> Self {
                Self(raw)
            }

            /// Get the underlying integer
            pub const fn as_u64(&self) -> u64 {
                self.0
            }

            /// Allocate the next ID given the current time and the IDs in use
            pub fn next<'a, I>(now: DateTime<Utc>, existing: I) -> Self
            where
                I: IntoIterator<Item = &'a $name>,
            {
                Self(next_raw_id(now, existing.into_iter().map(|id| id.0)))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(raw: u64) -> Self {
                Self(raw)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.trim().parse()?))
            }
        }
    };
}

define_id!(TransactionId);
define_id!(InvestmentId);

/// Timestamp-derived ID that never collides with or precedes an existing one
///
/// Returns `max(now_millis, max(existing) + 1)`.
pub fn next_raw_id(now: DateTime<Utc>, existing: impl Iterator<Item = u64>) -> u64 {
    let now_millis = u64::try_from(now.timestamp_millis()).unwrap_or(0);
    match existing.max() {
        Some(max) => now_millis.max(max.saturating_add(1)),
        None => now_millis,
    }
}
