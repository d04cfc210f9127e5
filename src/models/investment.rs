//! Investment model
//!
//! A tracked holding with an initial and a current value. Holdings are kept
//! apart from investment-kind transactions; both count toward the total
//! invested.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::InvestmentId;
use super::money::Money;
use crate::error::{TrackerError, TrackerResult};

/// Unvalidated input for a new investment
#[derive(Debug, Clone)]
pub struct NewInvestment {
    /// Free-text type such as "stocks" or "deposit"
    pub kind: String,
    pub name: String,
    pub initial_amount: Money,
    /// Defaults to `initial_amount` when absent
    pub current_amount: Option<Money>,
    pub date: Option<NaiveDate>,
}

impl NewInvestment {
    pub fn new(
        kind: impl Into<String>,
        name: impl Into<String>,
        initial_amount: Money,
        date: NaiveDate,
    ) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
            initial_amount,
            current_amount: None,
            date: Some(date),
        }
    }

    pub fn with_current(mut self, current_amount: Money) -> Self {
        self.current_amount = Some(current_amount);
        self
    }
}

/// A portfolio holding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Investment {
    pub id: InvestmentId,

    #[serde(rename = "type")]
    pub kind: String,

    pub name: String,

    pub initial_amount: Money,

    pub current_amount: Money,

    /// Date of the initial investment
    pub date: NaiveDate,

    pub created_at: DateTime<Utc>,

    /// Set whenever `current_amount` is revised
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Investment {
    /// Validate the input and build an investment
    pub fn create(
        id: InvestmentId,
        input: NewInvestment,
        created_at: DateTime<Utc>,
    ) -> TrackerResult<Self> {
        let kind = input.kind.trim().to_string();
        if kind.is_empty() {
            return Err(TrackerError::Validation("Investment type is required".into()));
        }

        let name = input.name.trim().to_string();
        if name.is_empty() {
            return Err(TrackerError::Validation("Investment name is required".into()));
        }

        if !input.initial_amount.is_positive() {
            return Err(TrackerError::Validation(format!(
                "Initial amount must be positive, got {}",
                input.initial_amount
            )));
        }

        let current_amount = input.current_amount.unwrap_or(input.initial_amount);
        validate_current(current_amount)?;

        let date = input
            .date
            .ok_or_else(|| TrackerError::Validation("Investment date is required".into()))?;

        Ok(Self {
            id,
            kind,
            name,
            initial_amount: input.initial_amount,
            current_amount,
            date,
            created_at,
            updated_at: None,
        })
    }

    /// Revise the current value, returning the previous one
    pub fn revalue(&mut self, current_amount: Money, at: DateTime<Utc>) -> TrackerResult<Money> {
        validate_current(current_amount)?;
        let previous = self.current_amount;
        self.current_amount = current_amount;
        self.updated_at = Some(at);
        Ok(previous)
    }

    /// Current value minus initial value
    pub fn profit(&self) -> Money {
        self.current_amount - self.initial_amount
    }

    /// Profit as a percentage of the initial value (unrounded)
    pub fn return_percent(&self) -> f64 {
        if self.initial_amount.is_zero() {
            return 0.0;
        }
        self.profit().as_f64() / self.initial_amount.as_f64() * 100.0
    }
}

fn validate_current(amount: Money) -> TrackerResult<()> {
    if amount.is_negative() {
        return Err(TrackerError::Validation(format!(
            "Current value cannot be negative, got {}",
            amount
        )));
    }
    Ok(())
}

impl fmt::Display for Investment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) {}", self.name, self.kind, self.current_amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn created() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 10, 9, 0, 0).unwrap()
    }

    fn input() -> NewInvestment {
        NewInvestment::new(
            "stocks",
            "BBCA",
            Money::from_units(500_000),
            NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
        )
    }

    #[test]
    fn test_current_defaults_to_initial() {
        let inv = Investment::create(InvestmentId::from_raw(1), input(), created()).unwrap();
        assert_eq!(inv.current_amount, inv.initial_amount);
        assert!(inv.updated_at.is_none());
        assert_eq!(inv.profit(), Money::zero());
    }

    #[test]
    fn test_explicit_current_amount() {
        let inv = Investment::create(
            InvestmentId::from_raw(1),
            input().with_current(Money::from_units(600_000)),
            created(),
        )
        .unwrap();
        assert_eq!(inv.profit(), Money::from_units(100_000));
        assert!((inv.return_percent() - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_validation() {
        let mut no_name = input();
        no_name.name = " ".into();
        assert!(Investment::create(InvestmentId::from_raw(1), no_name, created()).is_err());

        let mut no_type = input();
        no_type.kind = String::new();
        assert!(Investment::create(InvestmentId::from_raw(1), no_type, created()).is_err());

        let mut zero = input();
        zero.initial_amount = Money::zero();
        assert!(Investment::create(InvestmentId::from_raw(1), zero, created()).is_err());

        let mut no_date = input();
        no_date.date = None;
        assert!(Investment::create(InvestmentId::from_raw(1), no_date, created()).is_err());
    }

    #[test]
    fn test_revalue_sets_updated_at() {
        let mut inv = Investment::create(InvestmentId::from_raw(1), input(), created()).unwrap();
        let at = Utc.with_ymd_and_hms(2024, 2, 1, 12, 0, 0).unwrap();

        let previous = inv.revalue(Money::from_units(450_000), at).unwrap();

        assert_eq!(previous, Money::from_units(500_000));
        assert_eq!(inv.current_amount, Money::from_units(450_000));
        assert_eq!(inv.updated_at, Some(at));
        assert!((inv.return_percent() + 10.0).abs() < 1e-9);
        assert_eq!(inv.created_at, created());
    }

    #[test]
    fn test_revalue_to_zero_allowed_negative_rejected() {
        let mut inv = Investment::create(InvestmentId::from_raw(1), input(), created()).unwrap();
        assert!(inv.revalue(Money::zero(), created()).is_ok());
        assert!(inv.revalue(Money::from_units(-1), created()).is_err());
        assert_eq!(inv.current_amount, Money::zero());
    }

    #[test]
    fn test_serialization() {
        let inv = Investment::create(InvestmentId::from_raw(3), input(), created()).unwrap();
        let json = serde_json::to_value(&inv).unwrap();
        assert_eq!(json["type"], "stocks");
        assert!(json.get("updated_at").is_none());

        let back: Investment = serde_json::from_value(json).unwrap();
        assert_eq!(back, inv);
    }
}
