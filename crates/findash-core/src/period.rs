//! Fiscal period and quarter definitions.
//!
//! A [`Period`] is one fiscal quarter for one company, the atomic time unit
//! for all financial facts. The ordering key for every time-series derivation
//! is `(year, quarter)` ascending.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::MetricError;
use crate::types::CompanyId;

/// Opaque identifier of a fiscal period.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PeriodId(pub i64);

impl fmt::Display for PeriodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for PeriodId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// A fiscal quarter.
///
/// Quarters order chronologically within a year, so `(year, quarter)` tuples
/// sort into the per-company reporting sequence. The textual form (`"Q1"` ..
/// `"Q4"`) sorts the same way, which the query layer relies on when ordering
/// by the stored quarter column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Quarter {
    /// First fiscal quarter.
    Q1,
    /// Second fiscal quarter.
    Q2,
    /// Third fiscal quarter.
    Q3,
    /// Fourth fiscal quarter.
    Q4,
}

impl Quarter {
    /// All quarters in chronological order.
    pub const ALL: [Self; 4] = [Self::Q1, Self::Q2, Self::Q3, Self::Q4];

    /// Returns the quarter number (1-4).
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::Q1 => 1,
            Self::Q2 => 2,
            Self::Q3 => 3,
            Self::Q4 => 4,
        }
    }

    /// Returns the canonical storage label (`"Q1"` .. `"Q4"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Q1 => "Q1",
            Self::Q2 => "Q2",
            Self::Q3 => "Q3",
            Self::Q4 => "Q4",
        }
    }
}

impl fmt::Display for Quarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Quarter {
    type Err = MetricError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Q1" => Ok(Self::Q1),
            "Q2" => Ok(Self::Q2),
            "Q3" => Ok(Self::Q3),
            "Q4" => Ok(Self::Q4),
            other => Err(MetricError::Parse(format!("Invalid quarter: {other}"))),
        }
    }
}

/// One fiscal quarter for one company.
///
/// Unique per `(company_id, year, quarter)`. The optional calendar dates are
/// informational; derivations order by `(year, quarter)` only.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Period {
    /// Period identifier.
    pub id: PeriodId,
    /// Owning company.
    pub company_id: CompanyId,
    /// Fiscal year.
    pub year: i32,
    /// Fiscal quarter.
    pub quarter: Quarter,
    /// First calendar day of the period, when known.
    pub start_date: Option<NaiveDate>,
    /// Last calendar day of the period, when known.
    pub end_date: Option<NaiveDate>,
}

impl Period {
    /// Creates a period without calendar dates.
    #[must_use]
    pub const fn new(id: PeriodId, company_id: CompanyId, year: i32, quarter: Quarter) -> Self {
        Self {
            id,
            company_id,
            year,
            quarter,
            start_date: None,
            end_date: None,
        }
    }

    /// Sets the calendar date range.
    #[must_use]
    pub const fn with_dates(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    /// The chronological ordering key for time-series derivations.
    #[must_use]
    pub const fn sort_key(&self) -> (i32, Quarter) {
        (self.year, self.quarter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarter_parses_and_displays() {
        for q in Quarter::ALL {
            assert_eq!(q.as_str().parse::<Quarter>().unwrap(), q);
            assert_eq!(q.to_string(), q.as_str());
        }
        assert!("Q5".parse::<Quarter>().is_err());
        assert!("q1".parse::<Quarter>().is_err());
    }

    #[test]
    fn quarters_order_chronologically() {
        assert!(Quarter::Q1 < Quarter::Q2);
        assert!(Quarter::Q3 < Quarter::Q4);
        // Textual order matches chronological order.
        let mut labels: Vec<&str> = Quarter::ALL.iter().map(|q| q.as_str()).collect();
        labels.sort_unstable();
        assert_eq!(labels, vec!["Q1", "Q2", "Q3", "Q4"]);
    }

    #[test]
    fn period_sort_key_orders_across_years() {
        let a = Period::new(PeriodId(1), CompanyId(1), 2023, Quarter::Q4);
        let b = Period::new(PeriodId(2), CompanyId(1), 2024, Quarter::Q1);
        assert!(a.sort_key() < b.sort_key());
    }
}
