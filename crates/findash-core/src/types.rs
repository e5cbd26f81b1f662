//! Fact-table entity records.
//!
//! These mirror the fact store's tables one-to-one:
//!
//! - [`Company`] - Root entity
//! - [`IncomeStatement`] - Revenue/cost/income line items per period
//! - [`CashFlowStatement`] - Operating/investing/financing cash flow per period
//! - [`BalanceSheet`] - Asset/liability/equity snapshot per period
//!
//! All fact entities are read-only from this system's perspective; an external
//! ingestion process creates and mutates them. Monetary fields are `Option<f64>`
//! because the store does not guarantee every line item is populated.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::period::PeriodId;

/// Opaque identifier of a company.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompanyId(pub i64);

impl fmt::Display for CompanyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for CompanyId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// A company tracked by the dashboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    /// Company identifier.
    pub id: CompanyId,
    /// Display name.
    pub name: String,
}

impl Company {
    /// Creates a company record.
    #[must_use]
    pub fn new(id: CompanyId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Income statement line items for one period.
///
/// `gross_profit = total_revenue - total_cost_of_revenue` is expected but not
/// enforced here; the fact store is trusted to be consistent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct IncomeStatement {
    /// Owning period.
    pub period_id: PeriodId,

    // Revenue
    /// Total revenue.
    pub total_revenue: Option<f64>,
    /// Product revenue.
    pub product_revenue: Option<f64>,
    /// Service revenue.
    pub service_revenue: Option<f64>,
    /// Other revenue.
    pub other_revenue: Option<f64>,

    // Cost of revenue
    /// Total cost of revenue.
    pub total_cost_of_revenue: Option<f64>,
    /// Cost of goods sold.
    pub cost_of_goods_sold: Option<f64>,
    /// Cost of services.
    pub cost_of_services: Option<f64>,
    /// Gross profit.
    pub gross_profit: Option<f64>,

    // Operating expenses
    /// Research and development expense.
    pub research_and_development: Option<f64>,
    /// Sales and marketing expense.
    pub sales_and_marketing: Option<f64>,
    /// General and administrative expense.
    pub general_and_administrative: Option<f64>,
    /// Other operating expenses.
    pub other_operating_expenses: Option<f64>,
    /// Operating income.
    pub operating_income: Option<f64>,

    // Non-operating
    /// Interest income.
    pub interest_income: Option<f64>,
    /// Interest expense.
    pub interest_expense: Option<f64>,
    /// Other income.
    pub other_income: Option<f64>,
    /// Other expense.
    pub other_expense: Option<f64>,

    // Bottom line
    /// Income before taxes.
    pub income_before_taxes: Option<f64>,
    /// Income tax expense.
    pub income_tax_expense: Option<f64>,
    /// Net income.
    pub net_income: Option<f64>,

    // Per-share figures
    /// Basic earnings per share.
    pub basic_eps: Option<f64>,
    /// Diluted earnings per share.
    pub diluted_eps: Option<f64>,
    /// Basic shares outstanding.
    pub basic_shares: Option<f64>,
    /// Diluted shares outstanding.
    pub diluted_shares: Option<f64>,
}

impl IncomeStatement {
    /// Creates an empty income statement for a period.
    #[must_use]
    pub fn new(period_id: PeriodId) -> Self {
        Self {
            period_id,
            ..Default::default()
        }
    }
}

/// Cash flow statement for one period.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CashFlowStatement {
    /// Owning period.
    pub period_id: PeriodId,
    /// Cash generated by operations.
    pub operating_cash_flow: Option<f64>,
    /// Cash used in investing activities.
    pub investing_cash_flow: Option<f64>,
    /// Cash from financing activities.
    pub financing_cash_flow: Option<f64>,
    /// Sum of the three components.
    pub net_cash_flow: Option<f64>,
}

impl CashFlowStatement {
    /// Creates an empty cash flow statement for a period.
    #[must_use]
    pub fn new(period_id: PeriodId) -> Self {
        Self {
            period_id,
            ..Default::default()
        }
    }
}

/// Balance sheet snapshot for one period.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BalanceSheet {
    /// Owning period.
    pub period_id: PeriodId,
    /// Total assets.
    pub total_assets: Option<f64>,
    /// Total liabilities.
    pub total_liabilities: Option<f64>,
    /// Total equity.
    pub total_equity: Option<f64>,
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
    /// Cash and cash equivalents.
    pub cash_and_equivalents: Option<f64>,
    /// Other assets.
    pub other_assets: Option<f64>,
    /// Other liabilities.
    pub other_liabilities: Option<f64>,
}

impl BalanceSheet {
    /// Creates an empty balance sheet for a period.
    #[must_use]
    pub fn new(period_id: PeriodId) -> Self {
        Self {
            period_id,
            ..Default::default()
        }
    }
}
