//! Liquidity series and status for the financial health page.

use serde::{Deserialize, Serialize};

use findash_core::WorkingCapitalRow;

use crate::{period_label, TRAILING_PERIODS};

/// Current ratio at or above this is [`LiquidityStatus::Strong`].
pub const STRONG_RATIO_CUTOFF: f64 = 2.0;

/// Current ratio at or above this (but below the strong cutoff) is
/// [`LiquidityStatus::Healthy`].
pub const HEALTHY_RATIO_CUTOFF: f64 = 1.0;

/// One chart point of the liquidity series.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LiquidityPoint {
    /// Company display name.
    pub company_name: String,
    /// Period axis label, e.g. `"Q3 2024"`.
    pub label: String,
    /// Current assets minus current liabilities.
    pub working_capital: Option<f64>,
    /// Current assets over current liabilities.
    pub current_ratio: Option<f64>,
    /// Days sales outstanding.
    pub days_sales_outstanding: Option<f64>,
}

/// Liquidity classification from the current ratio.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LiquidityStatus {
    /// Ratio at or above [`STRONG_RATIO_CUTOFF`].
    Strong,
    /// Ratio at or above [`HEALTHY_RATIO_CUTOFF`].
    Healthy,
    /// Ratio below [`HEALTHY_RATIO_CUTOFF`], or undefined.
    Tight,
}

impl LiquidityStatus {
    /// Classifies a current ratio. An undefined ratio is treated as the
    /// weakest class rather than hidden.
    #[must_use]
    pub fn of(current_ratio: Option<f64>) -> Self {
        match current_ratio {
            Some(r) if r >= STRONG_RATIO_CUTOFF => Self::Strong,
            Some(r) if r >= HEALTHY_RATIO_CUTOFF => Self::Healthy,
            _ => Self::Tight,
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Strong => "Strong",
            Self::Healthy => "Healthy",
            Self::Tight => "Needs Attention",
        }
    }
}

/// Everything the financial health page renders.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorkingCapitalSummary {
    /// Chart points over the full row sequence, in query order.
    pub series: Vec<LiquidityPoint>,
    /// The last [`TRAILING_PERIODS`] rows, for the detail table.
    pub table: Vec<WorkingCapitalRow>,
    /// Status from the most recent row's current ratio; `Tight` when there
    /// are no rows.
    pub status: LiquidityStatus,
}

impl WorkingCapitalSummary {
    /// Reduces working-capital rows into the page's series, table, and
    /// headline status.
    #[must_use]
    pub fn from_rows(rows: &[WorkingCapitalRow]) -> Self {
        let series = rows
            .iter()
            .map(|r| LiquidityPoint {
                company_name: r.company_name.clone(),
                label: period_label(r.year, r.quarter),
                working_capital: r.working_capital,
                current_ratio: r.current_ratio,
                days_sales_outstanding: r.days_sales_outstanding,
            })
            .collect();
        let start = rows.len().saturating_sub(TRAILING_PERIODS);

        Self {
            series,
            table: rows[start..].to_vec(),
            status: LiquidityStatus::of(rows.last().and_then(|r| r.current_ratio)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use findash_core::Quarter;

    fn row(quarter: Quarter, ratio: Option<f64>) -> WorkingCapitalRow {
        WorkingCapitalRow {
            company_name: "TechCorp Inc.".to_string(),
            year: 2024,
            quarter,
            current_assets: Some(2_000_000.0),
            current_liabilities: Some(1_000_000.0),
            inventory: Some(300_000.0),
            receivables: Some(400_000.0),
            payables: Some(250_000.0),
            working_capital: Some(1_000_000.0),
            current_ratio: ratio,
            days_sales_outstanding: Some(36.5),
        }
    }

    #[test]
    fn status_cutoffs_are_inclusive() {
        assert_eq!(LiquidityStatus::of(Some(2.0)), LiquidityStatus::Strong);
        assert_eq!(LiquidityStatus::of(Some(1.99)), LiquidityStatus::Healthy);
        assert_eq!(LiquidityStatus::of(Some(1.0)), LiquidityStatus::Healthy);
        assert_eq!(LiquidityStatus::of(Some(0.8)), LiquidityStatus::Tight);
        assert_eq!(LiquidityStatus::of(None), LiquidityStatus::Tight);
    }

    #[test]
    fn headline_status_comes_from_the_latest_row() {
        let rows = vec![row(Quarter::Q1, Some(2.5)), row(Quarter::Q2, Some(1.2))];
        let summary = WorkingCapitalSummary::from_rows(&rows);
        assert_eq!(summary.status, LiquidityStatus::Healthy);
        assert_eq!(summary.series.len(), 2);
        assert_eq!(summary.series[1].label, "Q2 2024");
    }

    #[test]
    fn empty_sequence_reads_as_tight() {
        let summary = WorkingCapitalSummary::from_rows(&[]);
        assert_eq!(summary.status, LiquidityStatus::Tight);
        assert!(summary.table.is_empty());
        assert_eq!(LiquidityStatus::Tight.label(), "Needs Attention");
    }
}
