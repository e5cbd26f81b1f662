//! Metric operation bindings.
//!
//! [`MetricQuery`] binds one [`FactStore`] operation to its row type so a
//! [`MetricHook`](crate::hook::MetricHook) can be generic over which metric
//! it fetches. One unit type per operation of the query layer.

use async_trait::async_trait;

use findash_core::{
    CashFlowRow, CompanyRow, CompanyScope, EbitdaMarginRow, FactStore, Result, RevenueGrowthRow,
    SnapshotRow, WorkingCapitalRow,
};

/// One metric operation of the query layer.
#[async_trait]
pub trait MetricQuery: Send + Sync {
    /// Row record type this operation returns.
    type Row: Send;

    /// Human-readable operation name, used in error messages.
    fn name(&self) -> &'static str;

    /// Run the operation against the store.
    async fn run(&self, store: &dyn FactStore, scope: CompanyScope) -> Result<Vec<Self::Row>>;
}

/// The company listing. Ignores scope.
#[derive(Clone, Copy, Debug, Default)]
pub struct Companies;

#[async_trait]
impl MetricQuery for Companies {
    type Row = CompanyRow;

    fn name(&self) -> &'static str {
        "companies"
    }

    async fn run(&self, store: &dyn FactStore, _scope: CompanyScope) -> Result<Vec<Self::Row>> {
        store.companies().await
    }
}

/// Revenue with QoQ/YoY growth.
#[derive(Clone, Copy, Debug, Default)]
pub struct RevenueGrowth;

#[async_trait]
impl MetricQuery for RevenueGrowth {
    type Row = RevenueGrowthRow;

    fn name(&self) -> &'static str {
        "revenue growth"
    }

    async fn run(&self, store: &dyn FactStore, scope: CompanyScope) -> Result<Vec<Self::Row>> {
        store.revenue_growth(scope).await
    }
}

/// EBITDA margins per period.
#[derive(Clone, Copy, Debug, Default)]
pub struct EbitdaMargins;

#[async_trait]
impl MetricQuery for EbitdaMargins {
    type Row = EbitdaMarginRow;

    fn name(&self) -> &'static str {
        "EBITDA margins"
    }

    async fn run(&self, store: &dyn FactStore, scope: CompanyScope) -> Result<Vec<Self::Row>> {
        store.ebitda_margins(scope).await
    }
}

/// Cash flow components and free cash flow.
#[derive(Clone, Copy, Debug, Default)]
pub struct CashFlowAnalysis;

#[async_trait]
impl MetricQuery for CashFlowAnalysis {
    type Row = CashFlowRow;

    fn name(&self) -> &'static str {
        "cash flow analysis"
    }

    async fn run(&self, store: &dyn FactStore, scope: CompanyScope) -> Result<Vec<Self::Row>> {
        store.cash_flow_analysis(scope).await
    }
}

/// Working capital, current ratio, and DSO.
#[derive(Clone, Copy, Debug, Default)]
pub struct WorkingCapitalMetrics;

#[async_trait]
impl MetricQuery for WorkingCapitalMetrics {
    type Row = WorkingCapitalRow;

    fn name(&self) -> &'static str {
        "working capital metrics"
    }

    async fn run(&self, store: &dyn FactStore, scope: CompanyScope) -> Result<Vec<Self::Row>> {
        store.working_capital_metrics(scope).await
    }
}

/// Latest-period snapshot across companies. Ignores scope.
#[derive(Clone, Copy, Debug, Default)]
pub struct DashboardSnapshot;

#[async_trait]
impl MetricQuery for DashboardSnapshot {
    type Row = SnapshotRow;

    fn name(&self) -> &'static str {
        "dashboard snapshot"
    }

    async fn run(&self, store: &dyn FactStore, _scope: CompanyScope) -> Result<Vec<Self::Row>> {
        store.dashboard_snapshot().await
    }
}
