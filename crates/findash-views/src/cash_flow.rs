//! Component series and totals for the cash flow page.

use serde::{Deserialize, Serialize};

use findash_core::CashFlowRow;

use crate::{period_label, TRAILING_PERIODS};

/// One chart point of the cash flow component series.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CashFlowPoint {
    /// Company display name.
    pub company_name: String,
    /// Period axis label, e.g. `"Q3 2024"`.
    pub label: String,
    /// Operating cash flow.
    pub operating: Option<f64>,
    /// Investing cash flow.
    pub investing: Option<f64>,
    /// Financing cash flow.
    pub financing: Option<f64>,
    /// Net cash flow.
    pub net: Option<f64>,
    /// Free cash flow (operating plus investing).
    pub free: Option<f64>,
}

/// Everything the cash flow page renders: component series, trailing table,
/// and period totals.
///
/// Totals treat absent components as zero, matching the overview aggregates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CashFlowSummary {
    /// Chart points over the full row sequence, in query order.
    pub series: Vec<CashFlowPoint>,
    /// The last [`TRAILING_PERIODS`] rows, for the detail table.
    pub table: Vec<CashFlowRow>,
    /// Sum of operating cash flow across all rows.
    pub total_operating: f64,
    /// Sum of investing cash flow across all rows.
    pub total_investing: f64,
    /// Sum of financing cash flow across all rows.
    pub total_financing: f64,
    /// Sum of free cash flow across all rows.
    pub total_free: f64,
}

impl CashFlowSummary {
    /// Reduces cash flow rows into the page's series, table, and totals.
    #[must_use]
    pub fn from_rows(rows: &[CashFlowRow]) -> Self {
        let series = rows
            .iter()
            .map(|r| CashFlowPoint {
                company_name: r.company_name.clone(),
                label: period_label(r.year, r.quarter),
                operating: r.operating_cash_flow,
                investing: r.investing_cash_flow,
                financing: r.financing_cash_flow,
                net: r.net_cash_flow,
                free: r.free_cash_flow,
            })
            .collect();

        let sum = |f: fn(&CashFlowRow) -> Option<f64>| -> f64 {
            rows.iter().map(|r| f(r).unwrap_or(0.0)).sum()
        };
        let start = rows.len().saturating_sub(TRAILING_PERIODS);

        Self {
            series,
            table: rows[start..].to_vec(),
            total_operating: sum(|r| r.operating_cash_flow),
            total_investing: sum(|r| r.investing_cash_flow),
            total_financing: sum(|r| r.financing_cash_flow),
            total_free: sum(|r| r.free_cash_flow),
        }
    }
}
