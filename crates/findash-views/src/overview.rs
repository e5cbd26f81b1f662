//! Headline numbers for the overview page.

use serde::{Deserialize, Serialize};

use findash_core::SnapshotRow;

/// Cross-company aggregates over the latest-period snapshot.
///
/// Absent metrics count as zero in sums and averages, so one company with a
/// missing filing drags an average down rather than being skipped. An empty
/// snapshot yields all zeros.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OverviewSummary {
    /// Number of companies in the snapshot.
    pub company_count: usize,
    /// Sum of revenue across companies.
    pub total_revenue: f64,
    /// Mean EBITDA margin across companies, percent.
    pub avg_ebitda_margin: f64,
    /// Sum of operating cash flow across companies.
    pub total_operating_cash_flow: f64,
    /// Mean current ratio across companies.
    pub avg_current_ratio: f64,
}

impl OverviewSummary {
    /// Reduces snapshot rows into the four headline figures.
    #[must_use]
    pub fn from_rows(rows: &[SnapshotRow]) -> Self {
        let count = rows.len();
        if count == 0 {
            return Self {
                company_count: 0,
                total_revenue: 0.0,
                avg_ebitda_margin: 0.0,
                total_operating_cash_flow: 0.0,
                avg_current_ratio: 0.0,
            };
        }

        let sum = |f: fn(&SnapshotRow) -> Option<f64>| -> f64 {
            rows.iter().map(|r| f(r).unwrap_or(0.0)).sum()
        };

        Self {
            company_count: count,
            total_revenue: sum(|r| r.total_revenue),
            avg_ebitda_margin: sum(|r| r.ebitda_margin) / count as f64,
            total_operating_cash_flow: sum(|r| r.operating_cash_flow),
            avg_current_ratio: sum(|r| r.current_ratio) / count as f64,
        }
    }
}
