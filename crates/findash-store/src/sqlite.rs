//! SQLite-backed fact store.

use async_trait::async_trait;
use findash_core::{
    CashFlowRow, CompanyId, CompanyRow, CompanyScope, EbitdaMarginRow, FactStore, MetricError,
    Quarter, Result, RevenueGrowthRow, SnapshotRow, WorkingCapitalRow,
};
use rusqlite::Connection;
use std::path::Path;
use std::sync::Mutex;
use tracing::{debug, instrument};

use crate::sql;

/// SQLite-backed fact store.
///
/// Holds the fact tables in a SQLite database file (or in memory for tests)
/// and runs the metric queries against them. The connection is opened
/// explicitly by the caller and closed on drop; it is never created as a side
/// effect of loading the crate.
#[derive(Debug)]
pub struct SqliteStore {
    pub(crate) conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open (or create) a fact store at the given path.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or schema creation
    /// fails.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(path).map_err(|e| MetricError::Connection(e.to_string()))?;
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Create an in-memory fact store.
    ///
    /// Useful for testing; data is lost when the store is dropped.
    ///
    /// # Errors
    /// Returns an error if schema creation fails.
    pub fn in_memory() -> Result<Self> {
        let conn =
            Connection::open_in_memory().map_err(|e| MetricError::Connection(e.to_string()))?;
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the fact-table schema.
    fn initialize_schema(&self) -> Result<()> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| MetricError::Connection(e.to_string()))?;

        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS companies (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS periods (
                id INTEGER PRIMARY KEY,
                company_id INTEGER NOT NULL REFERENCES companies(id),
                year INTEGER NOT NULL,
                quarter TEXT NOT NULL CHECK (quarter IN ('Q1', 'Q2', 'Q3', 'Q4')),
                start_date TEXT,
                end_date TEXT,
                UNIQUE (company_id, year, quarter)
            );

            CREATE TABLE IF NOT EXISTS income_statements (
                period_id INTEGER PRIMARY KEY REFERENCES periods(id),
                total_revenue REAL,
                product_revenue REAL,
                service_revenue REAL,
                other_revenue REAL,
                total_cost_of_revenue REAL,
                cost_of_goods_sold REAL,
                cost_of_services REAL,
                gross_profit REAL,
                research_and_development REAL,
                sales_and_marketing REAL,
                general_and_administrative REAL,
                other_operating_expenses REAL,
                operating_income REAL,
                interest_income REAL,
                interest_expense REAL,
                other_income REAL,
                other_expense REAL,
                income_before_taxes REAL,
                income_tax_expense REAL,
                net_income REAL,
                basic_eps REAL,
                diluted_eps REAL,
                basic_shares REAL,
                diluted_shares REAL
            );

            CREATE TABLE IF NOT EXISTS cash_flow_statements (
                period_id INTEGER PRIMARY KEY REFERENCES periods(id),
                operating_cash_flow REAL,
                investing_cash_flow REAL,
                financing_cash_flow REAL,
                net_cash_flow REAL
            );

            CREATE TABLE IF NOT EXISTS balance_sheets (
                period_id INTEGER PRIMARY KEY REFERENCES periods(id),
                total_assets REAL,
                total_liabilities REAL,
                total_equity REAL,
                current_assets REAL,
                current_liabilities REAL,
                inventory REAL,
                receivables REAL,
                payables REAL,
                cash_and_equivalents REAL,
                other_assets REAL,
                other_liabilities REAL
            );

            CREATE INDEX IF NOT EXISTS idx_periods_company_year_quarter
                ON periods(company_id, year, quarter);",
        )
        .map_err(|e| MetricError::Query(e.to_string()))?;

        debug!("SQLite fact-store schema initialized");
        Ok(())
    }

    /// Run one metric query, binding the scope's company id when present.
    fn fetch<T>(
        &self,
        sql: &str,
        scope: CompanyScope,
        map: impl FnMut(&rusqlite::Row<'_>) -> rusqlite::Result<T>,
    ) -> Result<Vec<T>> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| MetricError::Connection(e.to_string()))?;
        let mut stmt = conn
            .prepare(sql)
            .map_err(|e| MetricError::Query(e.to_string()))?;

        let params: Vec<i64> = scope.company_id().map(|id| id.0).into_iter().collect();
        let rows = stmt
            .query_map(rusqlite::params_from_iter(params), map)
            .map_err(|e| MetricError::Query(e.to_string()))?;

        rows.collect::<rusqlite::Result<Vec<T>>>()
            .map_err(|e| MetricError::Query(e.to_string()))
    }
}

/// Read a `'Q1'..'Q4'` label column as a [`Quarter`].
fn quarter_col(row: &rusqlite::Row<'_>, name: &str) -> rusqlite::Result<Quarter> {
    let label: String = row.get(name)?;
    label.parse::<Quarter>().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })
}

#[async_trait]
impl FactStore for SqliteStore {
    #[instrument(skip(self))]
    async fn companies(&self) -> Result<Vec<CompanyRow>> {
        let rows = self.fetch(sql::COMPANIES, CompanyScope::All, |row| {
            Ok(CompanyRow {
                id: CompanyId(row.get("id")?),
                name: row.get("name")?,
            })
        })?;
        debug!("Listed {} companies", rows.len());
        Ok(rows)
    }

    #[instrument(skip(self), fields(scope = %scope))]
    async fn revenue_growth(&self, scope: CompanyScope) -> Result<Vec<RevenueGrowthRow>> {
        let rows = self.fetch(&sql::revenue_growth(scope), scope, |row| {
            Ok(RevenueGrowthRow {
                company_name: row.get("company_name")?,
                year: row.get("year")?,
                quarter: quarter_col(row, "quarter")?,
                total_revenue: row.get("total_revenue")?,
                prev_quarter_revenue: row.get("prev_quarter_revenue")?,
                prev_year_revenue: row.get("prev_year_revenue")?,
                revenue_growth_qoq: row.get("revenue_growth_qoq")?,
                revenue_growth_yoy: row.get("revenue_growth_yoy")?,
            })
        })?;
        debug!("Computed revenue growth for {} periods", rows.len());
        Ok(rows)
    }

    #[instrument(skip(self), fields(scope = %scope))]
    async fn ebitda_margins(&self, scope: CompanyScope) -> Result<Vec<EbitdaMarginRow>> {
        let rows = self.fetch(&sql::ebitda_margins(scope), scope, |row| {
            Ok(EbitdaMarginRow {
                company_name: row.get("company_name")?,
                year: row.get("year")?,
                quarter: quarter_col(row, "quarter")?,
                total_revenue: row.get("total_revenue")?,
                ebitda: row.get("ebitda")?,
                ebitda_margin_percent: row.get("ebitda_margin_percent")?,
            })
        })?;
        debug!("Computed EBITDA margins for {} periods", rows.len());
        Ok(rows)
    }

    #[instrument(skip(self), fields(scope = %scope))]
    async fn cash_flow_analysis(&self, scope: CompanyScope) -> Result<Vec<CashFlowRow>> {
        let rows = self.fetch(&sql::cash_flow_analysis(scope), scope, |row| {
            Ok(CashFlowRow {
                company_name: row.get("company_name")?,
                year: row.get("year")?,
                quarter: quarter_col(row, "quarter")?,
                operating_cash_flow: row.get("operating_cash_flow")?,
                investing_cash_flow: row.get("investing_cash_flow")?,
                financing_cash_flow: row.get("financing_cash_flow")?,
                net_cash_flow: row.get("net_cash_flow")?,
                free_cash_flow: row.get("free_cash_flow")?,
            })
        })?;
        debug!("Computed cash flow analysis for {} periods", rows.len());
        Ok(rows)
    }

    #[instrument(skip(self), fields(scope = %scope))]
    async fn working_capital_metrics(
        &self,
        scope: CompanyScope,
    ) -> Result<Vec<WorkingCapitalRow>> {
        let rows = self.fetch(&sql::working_capital_metrics(scope), scope, |row| {
            Ok(WorkingCapitalRow {
                company_name: row.get("company_name")?,
                year: row.get("year")?,
                quarter: quarter_col(row, "quarter")?,
                current_assets: row.get("current_assets")?,
                current_liabilities: row.get("current_liabilities")?,
                inventory: row.get("inventory")?,
                receivables: row.get("receivables")?,
                payables: row.get("payables")?,
                working_capital: row.get("working_capital")?,
                current_ratio: row.get("current_ratio")?,
                days_sales_outstanding: row.get("days_sales_outstanding")?,
            })
        })?;
        debug!("Computed working capital metrics for {} periods", rows.len());
        Ok(rows)
    }

    #[instrument(skip(self))]
    async fn dashboard_snapshot(&self) -> Result<Vec<SnapshotRow>> {
        let rows = self.fetch(sql::DASHBOARD_SNAPSHOT, CompanyScope::All, |row| {
            Ok(SnapshotRow {
                company_name: row.get("company_name")?,
                year: row.get("year")?,
                quarter: quarter_col(row, "quarter")?,
                total_revenue: row.get("total_revenue")?,
                operating_income: row.get("operating_income")?,
                operating_cash_flow: row.get("operating_cash_flow")?,
                net_cash_flow: row.get("net_cash_flow")?,
                current_assets: row.get("current_assets")?,
                current_liabilities: row.get("current_liabilities")?,
                total_assets: row.get("total_assets")?,
                total_liabilities: row.get("total_liabilities")?,
                ebitda_margin: row.get("ebitda_margin")?,
                current_ratio: row.get("current_ratio")?,
            })
        })?;
        debug!("Snapshot covers {} companies", rows.len());
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use findash_core::{
        BalanceSheet, CashFlowStatement, Company, IncomeStatement, Period, PeriodId,
    };

    /// Seed one company with quarterly revenues starting at Q1 2023, one
    /// period per entry. Returns the company id.
    fn seed_revenues(store: &SqliteStore, id: i64, name: &str, revenues: &[f64]) -> CompanyId {
        let company = CompanyId(id);
        store.insert_company(&Company::new(company, name)).unwrap();
        for (i, &rev) in revenues.iter().enumerate() {
            let year = 2023 + (i / 4) as i32;
            let quarter = Quarter::ALL[i % 4];
            let period_id = PeriodId(id * 100 + i as i64);
            store
                .insert_period(&Period::new(period_id, company, year, quarter))
                .unwrap();
            store
                .insert_income_statement(&IncomeStatement {
                    total_revenue: Some(rev),
                    operating_income: Some(rev * 0.2),
                    ..IncomeStatement::new(period_id)
                })
                .unwrap();
        }
        company
    }

    #[tokio::test]
    async fn empty_store_returns_no_rows() {
        let store = SqliteStore::in_memory().unwrap();
        assert!(store.companies().await.unwrap().is_empty());
        assert!(
            store
                .revenue_growth(CompanyScope::All)
                .await
                .unwrap()
                .is_empty()
        );
        assert!(store.dashboard_snapshot().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn companies_are_ordered_by_name() {
        let store = SqliteStore::in_memory().unwrap();
        store
            .insert_company(&Company::new(CompanyId(1), "TechCorp Inc."))
            .unwrap();
        store
            .insert_company(&Company::new(CompanyId(2), "CloudWorks Ltd."))
            .unwrap();
        store
            .insert_company(&Company::new(CompanyId(3), "DataSystems LLC"))
            .unwrap();

        let names: Vec<String> = store
            .companies()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(
            names,
            vec!["CloudWorks Ltd.", "DataSystems LLC", "TechCorp Inc."]
        );
    }

    #[tokio::test]
    async fn revenue_growth_matches_four_quarter_scenario() {
        let store = SqliteStore::in_memory().unwrap();
        let company = seed_revenues(
            &store,
            1,
            "TechCorp Inc.",
            &[1_000_000.0, 1_100_000.0, 1_200_000.0, 1_300_000.0],
        );

        let rows = store
            .revenue_growth(CompanyScope::Company(company))
            .await
            .unwrap();
        assert_eq!(rows.len(), 4);

        assert_eq!(rows[0].revenue_growth_qoq, None);
        assert_relative_eq!(
            rows[1].revenue_growth_qoq.unwrap(),
            10.0,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            rows[2].revenue_growth_qoq.unwrap(),
            9.09,
            max_relative = 1e-3
        );
        assert_relative_eq!(
            rows[3].revenue_growth_qoq.unwrap(),
            8.33,
            max_relative = 1e-3
        );

        // Four quarters is not enough history for any YoY figure.
        assert!(rows.iter().all(|r| r.revenue_growth_yoy.is_none()));
    }

    #[tokio::test]
    async fn revenue_growth_yoy_uses_lag_four() {
        let store = SqliteStore::in_memory().unwrap();
        let company = seed_revenues(
            &store,
            1,
            "TechCorp Inc.",
            &[1_000_000.0, 1_100_000.0, 1_200_000.0, 1_300_000.0, 1_400_000.0],
        );

        let rows = store
            .revenue_growth(CompanyScope::Company(company))
            .await
            .unwrap();
        assert_eq!(rows.len(), 5);
        assert_eq!((rows[4].year, rows[4].quarter), (2024, Quarter::Q1));
        assert_relative_eq!(
            rows[4].revenue_growth_yoy.unwrap(),
            40.0,
            max_relative = 1e-9
        );
        assert_eq!(rows[4].prev_year_revenue, Some(1_000_000.0));
    }

    #[tokio::test]
    async fn zero_prior_revenue_leaves_growth_undefined() {
        let store = SqliteStore::in_memory().unwrap();
        let company = seed_revenues(&store, 1, "TechCorp Inc.", &[0.0, 500_000.0]);

        let rows = store
            .revenue_growth(CompanyScope::Company(company))
            .await
            .unwrap();
        // The Q2 row sees a prior quarter, but its revenue was zero.
        assert_eq!(rows[1].prev_quarter_revenue, Some(0.0));
        assert_eq!(rows[1].revenue_growth_qoq, None);
    }

    #[tokio::test]
    async fn growth_windows_partition_per_company() {
        let store = SqliteStore::in_memory().unwrap();
        seed_revenues(&store, 1, "TechCorp Inc.", &[1_000_000.0, 1_100_000.0]);
        seed_revenues(&store, 2, "DataSystems LLC", &[2_000_000.0, 2_400_000.0]);

        let rows = store.revenue_growth(CompanyScope::All).await.unwrap();
        assert_eq!(rows.len(), 4);
        for row in &rows {
            match (row.company_name.as_str(), row.quarter) {
                (_, Quarter::Q1) => assert_eq!(row.revenue_growth_qoq, None),
                ("TechCorp Inc.", Quarter::Q2) => {
                    assert_relative_eq!(
                        row.revenue_growth_qoq.unwrap(),
                        10.0,
                        max_relative = 1e-9
                    );
                }
                ("DataSystems LLC", Quarter::Q2) => {
                    assert_relative_eq!(
                        row.revenue_growth_qoq.unwrap(),
                        20.0,
                        max_relative = 1e-9
                    );
                }
                other => panic!("unexpected row {other:?}"),
            }
        }
    }

    #[tokio::test]
    async fn ebitda_margin_undefined_for_zero_revenue_and_excludes_nulls() {
        let store = SqliteStore::in_memory().unwrap();
        let company = CompanyId(1);
        store
            .insert_company(&Company::new(company, "TechCorp Inc."))
            .unwrap();

        // Q1: normal, Q2: zero revenue, Q3: revenue missing entirely.
        let cases = [
            (Quarter::Q1, Some(1_000_000.0), Some(200_000.0)),
            (Quarter::Q2, Some(0.0), Some(50_000.0)),
            (Quarter::Q3, None, Some(75_000.0)),
        ];
        for (i, (quarter, revenue, income)) in cases.into_iter().enumerate() {
            let period_id = PeriodId(i as i64 + 1);
            store
                .insert_period(&Period::new(period_id, company, 2023, quarter))
                .unwrap();
            store
                .insert_income_statement(&IncomeStatement {
                    total_revenue: revenue,
                    operating_income: income,
                    ..IncomeStatement::new(period_id)
                })
                .unwrap();
        }

        let rows = store
            .ebitda_margins(CompanyScope::Company(company))
            .await
            .unwrap();
        // Null-revenue period is excluded, zero-revenue period survives with
        // an undefined margin.
        assert_eq!(rows.len(), 2);
        assert_relative_eq!(
            rows[0].ebitda_margin_percent.unwrap(),
            20.0,
            max_relative = 1e-9
        );
        assert_eq!(rows[1].quarter, Quarter::Q2);
        assert_eq!(rows[1].ebitda_margin_percent, None);
    }

    #[tokio::test]
    async fn ebitda_scope_filter_returns_only_that_company() {
        let store = SqliteStore::in_memory().unwrap();
        let tech = seed_revenues(&store, 1, "TechCorp Inc.", &[1_000_000.0]);
        seed_revenues(&store, 2, "DataSystems LLC", &[2_000_000.0]);

        let rows = store
            .ebitda_margins(CompanyScope::Company(tech))
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].company_name, "TechCorp Inc.");
    }

    #[tokio::test]
    async fn free_cash_flow_is_operating_plus_investing() {
        let store = SqliteStore::in_memory().unwrap();
        let company = CompanyId(1);
        store
            .insert_company(&Company::new(company, "TechCorp Inc."))
            .unwrap();
        let period_id = PeriodId(1);
        store
            .insert_period(&Period::new(period_id, company, 2023, Quarter::Q1))
            .unwrap();
        store
            .insert_cash_flow_statement(&CashFlowStatement {
                period_id,
                operating_cash_flow: Some(500_000.0),
                investing_cash_flow: Some(-200_000.0),
                financing_cash_flow: Some(-100_000.0),
                net_cash_flow: Some(200_000.0),
            })
            .unwrap();

        let rows = store
            .cash_flow_analysis(CompanyScope::Company(company))
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].free_cash_flow, Some(300_000.0));
    }

    #[tokio::test]
    async fn working_capital_with_zero_liabilities() {
        let store = SqliteStore::in_memory().unwrap();
        let company = CompanyId(1);
        store
            .insert_company(&Company::new(company, "TechCorp Inc."))
            .unwrap();
        let period_id = PeriodId(1);
        store
            .insert_period(&Period::new(period_id, company, 2023, Quarter::Q1))
            .unwrap();
        store
            .insert_balance_sheet(&BalanceSheet {
                current_assets: Some(800_000.0),
                current_liabilities: Some(0.0),
                receivables: Some(150_000.0),
                ..BalanceSheet::new(period_id)
            })
            .unwrap();

        let rows = store
            .working_capital_metrics(CompanyScope::Company(company))
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);
        // Subtraction still computed; the ratio is undefined. No income
        // statement was seeded, so DSO is undefined through the LEFT JOIN.
        assert_eq!(rows[0].working_capital, Some(800_000.0));
        assert_eq!(rows[0].current_ratio, None);
        assert_eq!(rows[0].days_sales_outstanding, None);
    }

    #[tokio::test]
    async fn working_capital_dso_uses_revenue() {
        let store = SqliteStore::in_memory().unwrap();
        let company = CompanyId(1);
        store
            .insert_company(&Company::new(company, "TechCorp Inc."))
            .unwrap();
        let period_id = PeriodId(1);
        store
            .insert_period(&Period::new(period_id, company, 2023, Quarter::Q1))
            .unwrap();
        store
            .insert_balance_sheet(&BalanceSheet {
                current_assets: Some(900_000.0),
                current_liabilities: Some(450_000.0),
                receivables: Some(100_000.0),
                ..BalanceSheet::new(period_id)
            })
            .unwrap();
        store
            .insert_income_statement(&IncomeStatement {
                total_revenue: Some(1_000_000.0),
                ..IncomeStatement::new(period_id)
            })
            .unwrap();

        let rows = store
            .working_capital_metrics(CompanyScope::Company(company))
            .await
            .unwrap();
        assert_relative_eq!(rows[0].current_ratio.unwrap(), 2.0, max_relative = 1e-9);
        assert_relative_eq!(
            rows[0].days_sales_outstanding.unwrap(),
            36.5,
            max_relative = 1e-9
        );
    }

    /// Seed a full statement set for one company in one period.
    fn seed_snapshot_period(
        store: &SqliteStore,
        company: CompanyId,
        period_id: PeriodId,
        year: i32,
        quarter: Quarter,
        revenue: f64,
    ) {
        store
            .insert_period(&Period::new(period_id, company, year, quarter))
            .unwrap();
        store
            .insert_income_statement(&IncomeStatement {
                total_revenue: Some(revenue),
                operating_income: Some(revenue * 0.25),
                ..IncomeStatement::new(period_id)
            })
            .unwrap();
        store
            .insert_cash_flow_statement(&CashFlowStatement {
                period_id,
                operating_cash_flow: Some(revenue * 0.3),
                investing_cash_flow: Some(-revenue * 0.1),
                financing_cash_flow: Some(-revenue * 0.05),
                net_cash_flow: Some(revenue * 0.15),
            })
            .unwrap();
        store
            .insert_balance_sheet(&BalanceSheet {
                total_assets: Some(revenue * 4.0),
                total_liabilities: Some(revenue * 2.0),
                current_assets: Some(revenue * 1.5),
                current_liabilities: Some(revenue * 0.75),
                ..BalanceSheet::new(period_id)
            })
            .unwrap();
    }

    #[tokio::test]
    async fn snapshot_covers_latest_period_ordered_by_name() {
        let store = SqliteStore::in_memory().unwrap();
        let tech = CompanyId(1);
        let data = CompanyId(2);
        store
            .insert_company(&Company::new(tech, "TechCorp Inc."))
            .unwrap();
        store
            .insert_company(&Company::new(data, "DataSystems LLC"))
            .unwrap();

        seed_snapshot_period(&store, tech, PeriodId(1), 2024, Quarter::Q3, 1_600_000.0);
        seed_snapshot_period(&store, tech, PeriodId(2), 2024, Quarter::Q4, 1_700_000.0);
        seed_snapshot_period(&store, data, PeriodId(3), 2024, Quarter::Q4, 4_500_000.0);

        let rows = store.dashboard_snapshot().await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].company_name, "DataSystems LLC");
        assert_eq!(rows[1].company_name, "TechCorp Inc.");
        for row in &rows {
            assert_eq!((row.year, row.quarter), (2024, Quarter::Q4));
            assert_relative_eq!(row.ebitda_margin.unwrap(), 25.0, max_relative = 1e-9);
            assert_relative_eq!(row.current_ratio.unwrap(), 2.0, max_relative = 1e-9);
        }
    }

    #[tokio::test]
    async fn snapshot_follows_new_latest_period() {
        let store = SqliteStore::in_memory().unwrap();
        let tech = CompanyId(1);
        store
            .insert_company(&Company::new(tech, "TechCorp Inc."))
            .unwrap();
        seed_snapshot_period(&store, tech, PeriodId(1), 2024, Quarter::Q4, 1_700_000.0);

        let rows = store.dashboard_snapshot().await.unwrap();
        assert_eq!((rows[0].year, rows[0].quarter), (2024, Quarter::Q4));

        seed_snapshot_period(&store, tech, PeriodId(2), 2025, Quarter::Q1, 1_800_000.0);
        let rows = store.dashboard_snapshot().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!((rows[0].year, rows[0].quarter), (2025, Quarter::Q1));
    }

    #[tokio::test]
    async fn queries_are_idempotent() {
        let store = SqliteStore::in_memory().unwrap();
        let company = seed_revenues(
            &store,
            1,
            "TechCorp Inc.",
            &[1_000_000.0, 1_100_000.0, 1_200_000.0],
        );

        let scope = CompanyScope::Company(company);
        let first = store.revenue_growth(scope).await.unwrap();
        let second = store.revenue_growth(scope).await.unwrap();
        assert_eq!(first, second);

        let first = store.ebitda_margins(scope).await.unwrap();
        let second = store.ebitda_margins(scope).await.unwrap();
        assert_eq!(first, second);
    }
}
