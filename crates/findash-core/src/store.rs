//! The fact-store query trait.
//!
//! [`FactStore`] is the seam between the metric query layer and everything
//! above it. Backends translate a [`CompanyScope`] into parameterized SQL
//! against the fact tables; implementations live in `findash-store`.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::error::Result;
use crate::rows::{
    CashFlowRow, CompanyRow, EbitdaMarginRow, RevenueGrowthRow, SnapshotRow, WorkingCapitalRow,
};
use crate::scope::CompanyScope;

/// Metric query operations over the fact store.
///
/// Every operation is a pure read: idempotent, side-effect free, and safe to
/// re-invoke. A failed query surfaces as a single fatal [`MetricError`]
/// rather than a partial result; there is no retry semantics at this layer.
///
/// [`MetricError`]: crate::error::MetricError
#[async_trait]
pub trait FactStore: Send + Sync + Debug {
    /// Lists all companies, ordered by name ascending.
    async fn companies(&self) -> Result<Vec<CompanyRow>>;

    /// Revenue with quarter-over-quarter and year-over-year growth, windowed
    /// per company over `(year, quarter)` ascending.
    async fn revenue_growth(&self, scope: CompanyScope) -> Result<Vec<RevenueGrowthRow>>;

    /// EBITDA margin per period, excluding periods without reported revenue.
    async fn ebitda_margins(&self, scope: CompanyScope) -> Result<Vec<EbitdaMarginRow>>;

    /// Cash flow components with derived free cash flow.
    async fn cash_flow_analysis(&self, scope: CompanyScope) -> Result<Vec<CashFlowRow>>;

    /// Working capital, current ratio, and days sales outstanding.
    async fn working_capital_metrics(&self, scope: CompanyScope)
    -> Result<Vec<WorkingCapitalRow>>;

    /// Cross-company snapshot of the most recent reporting period known to
    /// the store, ordered by company name.
    async fn dashboard_snapshot(&self) -> Result<Vec<SnapshotRow>>;
}
