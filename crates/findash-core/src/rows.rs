//! Derived-metric row records returned by the query layer.
//!
//! Each struct corresponds to one metric query and carries the column-named
//! record shape consumed by the hooks and views. Derived ratios whose
//! denominator may be zero or absent are `Option<f64>`: `None` is the explicit
//! "undefined" marker, and consumers omit `None` from aggregates rather than
//! substituting a sentinel. Rows have no persistent identity; they are
//! recomputed per request.

use serde::{Deserialize, Serialize};

use crate::period::Quarter;
use crate::types::CompanyId;

/// One row of the company listing, ordered by name ascending.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRow {
    /// Company identifier.
    pub id: CompanyId,
    /// Display name.
    pub name: String,
}

/// One period of revenue growth for one company.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RevenueGrowthRow {
    /// Company display name.
    pub company_name: String,
    /// Fiscal year.
    pub year: i32,
    /// Fiscal quarter.
    pub quarter: Quarter,
    /// Revenue for this period.
    pub total_revenue: Option<f64>,
    /// Revenue one period earlier in this company's sequence.
    pub prev_quarter_revenue: Option<f64>,
    /// Revenue four periods earlier in this company's sequence.
    pub prev_year_revenue: Option<f64>,
    /// Quarter-over-quarter growth, percent. `None` when the prior period is
    /// missing or reported zero revenue.
    pub revenue_growth_qoq: Option<f64>,
    /// Year-over-year growth, percent. `None` when no period exists four
    /// positions earlier or it reported zero revenue.
    pub revenue_growth_yoy: Option<f64>,
}

/// One period of EBITDA margin for one company.
///
/// Rows with NULL revenue are excluded by the query itself.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EbitdaMarginRow {
    /// Company display name.
    pub company_name: String,
    /// Fiscal year.
    pub year: i32,
    /// Fiscal quarter.
    pub quarter: Quarter,
    /// Revenue for this period.
    pub total_revenue: f64,
    /// Operating income, used as the EBITDA approximation.
    pub ebitda: Option<f64>,
    /// Margin percent; `None` when revenue is not positive.
    pub ebitda_margin_percent: Option<f64>,
}

/// One period of cash flow components for one company.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CashFlowRow {
    /// Company display name.
    pub company_name: String,
    /// Fiscal year.
    pub year: i32,
    /// Fiscal quarter.
    pub quarter: Quarter,
    /// Cash generated by operations.
    pub operating_cash_flow: Option<f64>,
    /// Cash used in investing activities.
    pub investing_cash_flow: Option<f64>,
    /// Cash from financing activities.
    pub financing_cash_flow: Option<f64>,
    /// Net cash flow.
    pub net_cash_flow: Option<f64>,
    /// Operating plus investing cash flow.
    pub free_cash_flow: Option<f64>,
}

/// One period of working-capital metrics for one company.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorkingCapitalRow {
    /// Company display name.
    pub company_name: String,
    /// Fiscal year.
    pub year: i32,
    /// Fiscal quarter.
    pub quarter: Quarter,
    /// Current assets.
    pub current_assets: Option<f64>,
    /// Current liabilities.
    pub current_liabilities: Option<f64>,
    /// Inventory.
    pub inventory: Option<f64>,
    /// Accounts receivable.
    pub receivables: Option<f64>,
    /// Accounts payable.
    pub payables: Option<f64>,
    /// Current assets minus current liabilities. Still computed when
    /// liabilities are zero; subtraction has no zero-denominator risk.
    pub working_capital: Option<f64>,
    /// Current assets over current liabilities; `None` when liabilities are
    /// not positive.
    pub current_ratio: Option<f64>,
    /// Receivables over revenue times 365; `None` when revenue is not
    /// positive or the income statement is missing.
    pub days_sales_outstanding: Option<f64>,
}

/// One company's row in the dashboard snapshot, covering the single most
/// recent reporting period known to the store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SnapshotRow {
    /// Company display name.
    pub company_name: String,
    /// Fiscal year of the snapshot period.
    pub year: i32,
    /// Fiscal quarter of the snapshot period.
    pub quarter: Quarter,
    /// Revenue for the period.
    pub total_revenue: Option<f64>,
    /// Operating income for the period.
    pub operating_income: Option<f64>,
    /// Operating cash flow for the period.
    pub operating_cash_flow: Option<f64>,
    /// Net cash flow for the period.
    pub net_cash_flow: Option<f64>,
    /// Current assets at period end.
    pub current_assets: Option<f64>,
    /// Current liabilities at period end.
    pub current_liabilities: Option<f64>,
    /// Total assets at period end.
    pub total_assets: Option<f64>,
    /// Total liabilities at period end.
    pub total_liabilities: Option<f64>,
    /// EBITDA margin percent; `None` when revenue is not positive.
    pub ebitda_margin: Option<f64>,
    /// Current ratio; `None` when liabilities are not positive.
    pub current_ratio: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    // The serialized field names are the UI's wire contract; they must match
    // the query column names.
    #[test]
    fn revenue_growth_row_serializes_with_query_column_names() {
        let row = RevenueGrowthRow {
            company_name: "TechCorp Inc.".to_string(),
            year: 2023,
            quarter: Quarter::Q2,
            total_revenue: Some(1_100_000.0),
            prev_quarter_revenue: Some(1_000_000.0),
            prev_year_revenue: None,
            revenue_growth_qoq: Some(10.0),
            revenue_growth_yoy: None,
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["company_name"], "TechCorp Inc.");
        assert_eq!(json["quarter"], "Q2");
        assert_eq!(json["revenue_growth_qoq"], 10.0);
        assert!(json["revenue_growth_yoy"].is_null());
    }

    #[test]
    fn snapshot_row_keeps_undefined_ratios_null() {
        let row = SnapshotRow {
            company_name: "DataSystems LLC".to_string(),
            year: 2024,
            quarter: Quarter::Q4,
            total_revenue: Some(0.0),
            operating_income: Some(100.0),
            operating_cash_flow: None,
            net_cash_flow: None,
            current_assets: Some(500.0),
            current_liabilities: Some(0.0),
            total_assets: None,
            total_liabilities: None,
            ebitda_margin: None,
            current_ratio: None,
        };
        let json = serde_json::to_value(&row).unwrap();
        assert!(json["ebitda_margin"].is_null());
        assert!(json["current_ratio"].is_null());
    }
}
