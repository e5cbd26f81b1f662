//! Wires a fact store into hooks and one-shot view helpers.

use std::fmt;
use std::sync::Arc;

#[cfg(any(feature = "sqlite", feature = "postgres"))]
use tracing::debug;

use findash_core::{CompanyRow, CompanyScope, FactStore, Result};
use findash_hooks::{
    CashFlowAnalysis, Companies, DashboardSnapshot, EbitdaMargins, MetricHook, RevenueGrowth,
    WorkingCapitalMetrics,
};
use findash_views::{
    CashFlowSummary, OverviewSummary, ProfitabilitySummary, RevenueSummary, WorkingCapitalSummary,
};

#[cfg(feature = "postgres")]
use findash_store::{PostgresConfig, PostgresStore};
#[cfg(feature = "sqlite")]
use findash_store::SqliteStore;

/// Entry point tying one fact store to the metric pipeline.
///
/// Holds the store behind `Arc<dyn FactStore>`; hooks created from the same
/// dashboard share the connection. The one-shot helpers fetch and reduce in a
/// single call for callers that do not need incremental hook state.
///
/// # Example
///
/// ```rust,ignore
/// use findash::{CompanyScope, Dashboard};
///
/// let dashboard = Dashboard::in_memory()?;
/// let revenue = dashboard.revenue(CompanyScope::All).await?;
/// ```
#[derive(Clone)]
pub struct Dashboard {
    store: Arc<dyn FactStore>,
}

impl fmt::Debug for Dashboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dashboard")
            .field("store", &self.store)
            .finish()
    }
}

impl Dashboard {
    /// Creates a dashboard over an already-opened store.
    #[must_use]
    pub fn new(store: Arc<dyn FactStore>) -> Self {
        Self { store }
    }

    /// Opens a SQLite fact store at `path` and wraps it in a dashboard.
    #[cfg(feature = "sqlite")]
    pub fn with_sqlite(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let store = SqliteStore::open(path)?;
        debug!("Opened SQLite-backed dashboard");
        Ok(Self::new(Arc::new(store)))
    }

    /// Opens an in-memory SQLite fact store, mainly for tests and demos.
    #[cfg(feature = "sqlite")]
    pub fn in_memory() -> Result<Self> {
        Ok(Self::new(Arc::new(SqliteStore::in_memory()?)))
    }

    /// Connects to PostgreSQL and wraps the store in a dashboard.
    #[cfg(feature = "postgres")]
    pub async fn with_postgres(config: &PostgresConfig) -> Result<Self> {
        let store = PostgresStore::connect(config).await?;
        debug!("Opened PostgreSQL-backed dashboard");
        Ok(Self::new(Arc::new(store)))
    }

    /// The underlying store.
    #[must_use]
    pub fn store(&self) -> Arc<dyn FactStore> {
        Arc::clone(&self.store)
    }

    // Hook factories. Each hook owns its own lifecycle state.

    /// Hook over the company listing.
    #[must_use]
    pub fn companies_hook(&self) -> MetricHook<Companies> {
        MetricHook::new(self.store(), Companies, CompanyScope::All)
    }

    /// Hook over revenue growth.
    #[must_use]
    pub fn revenue_growth_hook(&self, scope: CompanyScope) -> MetricHook<RevenueGrowth> {
        MetricHook::new(self.store(), RevenueGrowth, scope)
    }

    /// Hook over EBITDA margins.
    #[must_use]
    pub fn ebitda_margins_hook(&self, scope: CompanyScope) -> MetricHook<EbitdaMargins> {
        MetricHook::new(self.store(), EbitdaMargins, scope)
    }

    /// Hook over cash flow analysis.
    #[must_use]
    pub fn cash_flow_hook(&self, scope: CompanyScope) -> MetricHook<CashFlowAnalysis> {
        MetricHook::new(self.store(), CashFlowAnalysis, scope)
    }

    /// Hook over working capital metrics.
    #[must_use]
    pub fn working_capital_hook(&self, scope: CompanyScope) -> MetricHook<WorkingCapitalMetrics> {
        MetricHook::new(self.store(), WorkingCapitalMetrics, scope)
    }

    /// Hook over the dashboard snapshot.
    #[must_use]
    pub fn snapshot_hook(&self) -> MetricHook<DashboardSnapshot> {
        MetricHook::new(self.store(), DashboardSnapshot, CompanyScope::All)
    }

    // One-shot view helpers: fetch and reduce in a single call.

    /// The company listing, for scope pickers.
    pub async fn companies(&self) -> Result<Vec<CompanyRow>> {
        self.store.companies().await
    }

    /// Overview page figures from the latest-period snapshot.
    pub async fn overview(&self) -> Result<OverviewSummary> {
        let rows = self.store.dashboard_snapshot().await?;
        Ok(OverviewSummary::from_rows(&rows))
    }

    /// Revenue page series and table.
    pub async fn revenue(&self, scope: CompanyScope) -> Result<RevenueSummary> {
        let rows = self.store.revenue_growth(scope).await?;
        Ok(RevenueSummary::from_rows(&rows))
    }

    /// Profitability page series and table.
    pub async fn profitability(&self, scope: CompanyScope) -> Result<ProfitabilitySummary> {
        let rows = self.store.ebitda_margins(scope).await?;
        Ok(ProfitabilitySummary::from_rows(&rows))
    }

    /// Cash flow page series, table, and totals.
    pub async fn cash_flow(&self, scope: CompanyScope) -> Result<CashFlowSummary> {
        let rows = self.store.cash_flow_analysis(scope).await?;
        Ok(CashFlowSummary::from_rows(&rows))
    }

    /// Financial health page series, table, and status.
    pub async fn working_capital(&self, scope: CompanyScope) -> Result<WorkingCapitalSummary> {
        let rows = self.store.working_capital_metrics(scope).await?;
        Ok(WorkingCapitalSummary::from_rows(&rows))
    }
}
