//! Reporting periods and calendar-month keys
//!
//! A `ReportPeriod` only ever yields a lower bound. Every period runs from its
//! start date through "now", including `LastMonth`, which therefore covers the
//! start of the previous month onward rather than the previous month alone.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A caller-selected date range used to scope aggregation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReportPeriod {
    /// From day 1 of the current month
    #[default]
    Monthly,
    /// From day 1 of the previous month, open-ended
    LastMonth,
    /// From day 1 of the month three calendar months back
    Quarterly,
    /// From January 1 of the current year
    Yearly,
    /// No lower bound
    All,
}

impl ReportPeriod {
    /// The first date included by this period, relative to `today`
    ///
    /// Returns `None` for `All`.
    pub fn start_date(&self, today: NaiveDate) -> Option<NaiveDate> {
        let current = MonthKey::from_date(today);
        match self {
            Self::Monthly => Some(current.first_day()),
            Self::LastMonth => Some(current.shift_back(1).first_day()),
            Self::Quarterly => Some(current.shift_back(3).first_day()),
            Self::Yearly => Some(MonthKey::new(today.year(), 1).first_day()),
            Self::All => None,
        }
    }

    /// Check whether a date falls inside this period
    pub fn contains(&self, date: NaiveDate, today: NaiveDate) -> bool {
        self.start_date(today).map_or(true, |start| date >= start)
    }

    /// Parse a period from user input
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "monthly" | "month" | "this_month" => Some(Self::Monthly),
            "last_month" | "lastmonth" => Some(Self::LastMonth),
            "quarterly" | "quarter" => Some(Self::Quarterly),
            "yearly" | "year" => Some(Self::Yearly),
            "all" | "all_time" => Some(Self::All),
            _ => None,
        }
    }
}

impl fmt::Display for ReportPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Monthly => write!(f, "This Month"),
            Self::LastMonth => write!(f, "Since Last Month"),
            Self::Quarterly => write!(f, "Last 3 Months"),
            Self::Yearly => write!(f, "This Year"),
            Self::All => write!(f, "All Time"),
        }
    }
}

/// A calendar year and month, ordered chronologically
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    /// Create a month key; `month` is clamped into 1..=12
    pub fn new(year: i32, month: u32) -> Self {
        Self {
            year,
            month: month.clamp(1, 12),
        }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Day 1 of this month
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// The month `months` calendar months before this one
    pub fn shift_back(&self, months: u32) -> Self {
        let index = self.year as i64 * 12 + (self.month as i64 - 1) - months as i64;
        Self {
            year: index.div_euclid(12) as i32,
            month: index.rem_euclid(12) as u32 + 1,
        }
    }

    /// Short label such as "Jan 2024"
    pub fn label(&self) -> String {
        self.first_day().format("%b %Y").to_string()
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_monthly_start() {
        assert_eq!(
            ReportPeriod::Monthly.start_date(date(2024, 3, 17)),
            Some(date(2024, 3, 1))
        );
    }

    #[test]
    fn test_last_month_wraps_year() {
        assert_eq!(
            ReportPeriod::LastMonth.start_date(date(2024, 1, 10)),
            Some(date(2023, 12, 1))
        );
    }

    #[test]
    fn test_last_month_is_open_ended() {
        let today = date(2024, 3, 17);
        assert!(ReportPeriod::LastMonth.contains(date(2024, 3, 15), today));
        assert!(ReportPeriod::LastMonth.contains(date(2024, 2, 1), today));
        assert!(!ReportPeriod::LastMonth.contains(date(2024, 1, 31), today));
    }

    #[test]
    fn test_quarterly_start() {
        assert_eq!(
            ReportPeriod::Quarterly.start_date(date(2024, 5, 31)),
            Some(date(2024, 2, 1))
        );
        assert_eq!(
            ReportPeriod::Quarterly.start_date(date(2024, 2, 29)),
            Some(date(2023, 11, 1))
        );
    }

    #[test]
    fn test_yearly_start() {
        assert_eq!(
            ReportPeriod::Yearly.start_date(date(2024, 8, 1)),
            Some(date(2024, 1, 1))
        );
    }

    #[test]
    fn test_all_has_no_bound() {
        assert_eq!(ReportPeriod::All.start_date(date(2024, 8, 1)), None);
        assert!(ReportPeriod::All.contains(date(1990, 1, 1), date(2024, 8, 1)));
    }

    #[test]
    fn test_parse() {
        assert_eq!(ReportPeriod::parse("monthly"), Some(ReportPeriod::Monthly));
        assert_eq!(ReportPeriod::parse("last-month"), Some(ReportPeriod::LastMonth));
        assert_eq!(ReportPeriod::parse("Last Month"), Some(ReportPeriod::LastMonth));
        assert_eq!(ReportPeriod::parse("QUARTERLY"), Some(ReportPeriod::Quarterly));
        assert_eq!(ReportPeriod::parse("year"), Some(ReportPeriod::Yearly));
        assert_eq!(ReportPeriod::parse("all"), Some(ReportPeriod::All));
        assert_eq!(ReportPeriod::parse("weekly"), None);
    }

    #[test]
    fn test_month_key_ordering() {
        assert!(MonthKey::new(2023, 12) < MonthKey::new(2024, 1));
        assert!(MonthKey::new(2024, 2) > MonthKey::new(2024, 1));
    }

    #[test]
    fn test_month_key_shift_back() {
        assert_eq!(MonthKey::new(2024, 3).shift_back(3), MonthKey::new(2023, 12));
        assert_eq!(MonthKey::new(2024, 1).shift_back(13), MonthKey::new(2022, 12));
        assert_eq!(MonthKey::new(2024, 6).shift_back(0), MonthKey::new(2024, 6));
    }

    #[test]
    fn test_month_key_label() {
        assert_eq!(MonthKey::new(2024, 1).label(), "Jan 2024");
        assert_eq!(MonthKey::new(2024, 11).to_string(), "2024-11");
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&ReportPeriod::LastMonth).unwrap();
        assert_eq!(json, "\"last_month\"");
    }
}
