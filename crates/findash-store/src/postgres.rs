//! PostgreSQL-backed fact store.

use async_trait::async_trait;
use findash_core::{
    CashFlowRow, CompanyId, CompanyRow, CompanyScope, EbitdaMarginRow, FactStore, MetricError,
    Quarter, Result, RevenueGrowthRow, SnapshotRow, WorkingCapitalRow,
};
use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};
use sqlx::Row;
use std::fmt;
use tracing::{debug, instrument};

use crate::sql;

/// Connection settings for a PostgreSQL fact store.
#[derive(Clone, PartialEq, Eq)]
pub struct PostgresConfig {
    /// Database host.
    pub host: String,
    /// Database port.
    pub port: u16,
    /// Database name.
    pub database: String,
    /// Login role.
    pub user: String,
    /// Login credential.
    pub password: String,
}

impl PostgresConfig {
    /// Creates a config for the given host, port, and database.
    #[must_use]
    pub fn new(
        host: impl Into<String>,
        port: u16,
        database: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            port,
            database: database.into(),
            user: user.into(),
            password: password.into(),
        }
    }

    fn url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.user, self.password, self.host, self.port, self.database
        )
    }
}

impl fmt::Debug for PostgresConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PostgresConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("user", &self.user)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// PostgreSQL-backed fact store.
///
/// The pool is constructed lazily by [`PostgresStore::connect`] and closed
/// explicitly with [`PostgresStore::close`] (or on drop); the tables are
/// assumed pre-populated by an external ingestion process and are never
/// written from here.
#[derive(Debug, Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Connect to the fact database described by `config`.
    ///
    /// # Errors
    /// Returns [`MetricError::Connection`] if the database is unreachable or
    /// the credentials are rejected.
    pub async fn connect(config: &PostgresConfig) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(1)
            .connect(&config.url())
            .await
            .map_err(|e| MetricError::Connection(e.to_string()))?;
        debug!(
            host = %config.host,
            database = %config.database,
            "Connected to PostgreSQL fact store"
        );
        Ok(Self { pool })
    }

    /// Wrap an existing pool.
    #[must_use]
    pub const fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Close the underlying pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// Run one metric query, binding the scope's company id when present.
    async fn fetch<T>(
        &self,
        sql: &str,
        scope: CompanyScope,
        map: impl Fn(&PgRow) -> Result<T>,
    ) -> Result<Vec<T>> {
        let mut query = sqlx::query(sql);
        if let Some(id) = scope.company_id() {
            query = query.bind(id.0);
        }
        let rows = query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| MetricError::Query(e.to_string()))?;
        rows.iter().map(map).collect()
    }
}

/// Read a named column, mapping decode failures to [`MetricError::Parse`].
fn col<'r, T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>>(
    row: &'r PgRow,
    name: &str,
) -> Result<T> {
    row.try_get(name)
        .map_err(|e| MetricError::Parse(format!("{name}: {e}")))
}

/// Read a `'Q1'..'Q4'` label column as a [`Quarter`].
fn quarter_col(row: &PgRow, name: &str) -> Result<Quarter> {
    let label: String = col(row, name)?;
    label.parse()
}

#[async_trait]
impl FactStore for PostgresStore {
    #[instrument(skip(self))]
    async fn companies(&self) -> Result<Vec<CompanyRow>> {
        let rows = self
            .fetch(sql::COMPANIES, CompanyScope::All, |row| {
                Ok(CompanyRow {
                    id: CompanyId(col(row, "id")?),
                    name: col(row, "name")?,
                })
            })
            .await?;
        debug!("Listed {} companies", rows.len());
        Ok(rows)
    }

    #[instrument(skip(self), fields(scope = %scope))]
    async fn revenue_growth(&self, scope: CompanyScope) -> Result<Vec<RevenueGrowthRow>> {
        let rows = self
            .fetch(&sql::revenue_growth(scope), scope, |row| {
                Ok(RevenueGrowthRow {
                    company_name: col(row, "company_name")?,
                    year: col(row, "year")?,
                    quarter: quarter_col(row, "quarter")?,
                    total_revenue: col(row, "total_revenue")?,
                    prev_quarter_revenue: col(row, "prev_quarter_revenue")?,
                    prev_year_revenue: col(row, "prev_year_revenue")?,
                    revenue_growth_qoq: col(row, "revenue_growth_qoq")?,
                    revenue_growth_yoy: col(row, "revenue_growth_yoy")?,
                })
            })
            .await?;
        debug!("Computed revenue growth for {} periods", rows.len());
        Ok(rows)
    }

    #[instrument(skip(self), fields(scope = %scope))]
    async fn ebitda_margins(&self, scope: CompanyScope) -> Result<Vec<EbitdaMarginRow>> {
        let rows = self
            .fetch(&sql::ebitda_margins(scope), scope, |row| {
                Ok(EbitdaMarginRow {
                    company_name: col(row, "company_name")?,
                    year: col(row, "year")?,
                    quarter: quarter_col(row, "quarter")?,
                    total_revenue: col(row, "total_revenue")?,
                    ebitda: col(row, "ebitda")?,
                    ebitda_margin_percent: col(row, "ebitda_margin_percent")?,
                })
            })
            .await?;
        debug!("Computed EBITDA margins for {} periods", rows.len());
        Ok(rows)
    }

    #[instrument(skip(self), fields(scope = %scope))]
    async fn cash_flow_analysis(&self, scope: CompanyScope) -> Result<Vec<CashFlowRow>> {
        let rows = self
            .fetch(&sql::cash_flow_analysis(scope), scope, |row| {
                Ok(CashFlowRow {
                    company_name: col(row, "company_name")?,
                    year: col(row, "year")?,
                    quarter: quarter_col(row, "quarter")?,
                    operating_cash_flow: col(row, "operating_cash_flow")?,
                    investing_cash_flow: col(row, "investing_cash_flow")?,
                    financing_cash_flow: col(row, "financing_cash_flow")?,
                    net_cash_flow: col(row, "net_cash_flow")?,
                    free_cash_flow: col(row, "free_cash_flow")?,
                })
            })
            .await?;
        debug!("Computed cash flow analysis for {} periods", rows.len());
        Ok(rows)
    }

    #[instrument(skip(self), fields(scope = %scope))]
    async fn working_capital_metrics(
        &self,
        scope: CompanyScope,
    ) -> Result<Vec<WorkingCapitalRow>> {
        let rows = self
            .fetch(&sql::working_capital_metrics(scope), scope, |row| {
                Ok(WorkingCapitalRow {
                    company_name: col(row, "company_name")?,
                    year: col(row, "year")?,
                    quarter: quarter_col(row, "quarter")?,
                    current_assets: col(row, "current_assets")?,
                    current_liabilities: col(row, "current_liabilities")?,
                    inventory: col(row, "inventory")?,
                    receivables: col(row, "receivables")?,
                    payables: col(row, "payables")?,
                    working_capital: col(row, "working_capital")?,
                    current_ratio: col(row, "current_ratio")?,
                    days_sales_outstanding: col(row, "days_sales_outstanding")?,
                })
            })
            .await?;
        debug!("Computed working capital metrics for {} periods", rows.len());
        Ok(rows)
    }

    #[instrument(skip(self))]
    async fn dashboard_snapshot(&self) -> Result<Vec<SnapshotRow>> {
        let rows = self
            .fetch(sql::DASHBOARD_SNAPSHOT, CompanyScope::All, |row| {
                Ok(SnapshotRow {
                    company_name: col(row, "company_name")?,
                    year: col(row, "year")?,
                    quarter: quarter_col(row, "quarter")?,
                    total_revenue: col(row, "total_revenue")?,
                    operating_income: col(row, "operating_income")?,
                    operating_cash_flow: col(row, "operating_cash_flow")?,
                    net_cash_flow: col(row, "net_cash_flow")?,
                    current_assets: col(row, "current_assets")?,
                    current_liabilities: col(row, "current_liabilities")?,
                    total_assets: col(row, "total_assets")?,
                    total_liabilities: col(row, "total_liabilities")?,
                    ebitda_margin: col(row, "ebitda_margin")?,
                    current_ratio: col(row, "current_ratio")?,
                })
            })
            .await?;
        debug!("Snapshot covers {} companies", rows.len());
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_debug_redacts_password() {
        let config = PostgresConfig::new("localhost", 5432, "financials", "app_user", "secret");
        let debug = format!("{config:?}");
        assert!(!debug.contains("secret"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn config_builds_connection_url() {
        let config = PostgresConfig::new("db.internal", 5433, "financials", "app_user", "pw");
        assert_eq!(
            config.url(),
            "postgres://app_user:pw@db.internal:5433/financials"
        );
    }
}
