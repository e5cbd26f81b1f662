//! Seed helpers for populating a SQLite fact store.
//!
//! The dashboard itself never writes; these helpers exist so fixtures,
//! integration tests, and local demo databases can be populated without an
//! external ingestion pipeline. Upserts keyed on the primary key, no
//! validation beyond the schema's constraints.

use findash_core::{
    BalanceSheet, CashFlowStatement, Company, IncomeStatement, MetricError, Period, Result,
};
use rusqlite::params;

use crate::sqlite::SqliteStore;

impl SqliteStore {
    /// Insert or replace a company.
    pub fn insert_company(&self, company: &Company) -> Result<()> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| MetricError::Connection(e.to_string()))?;
        conn.execute(
            "INSERT OR REPLACE INTO companies (id, name) VALUES (?1, ?2)",
            params![company.id.0, company.name],
        )
        .map_err(|e| MetricError::Query(e.to_string()))?;
        Ok(())
    }

    /// Insert or replace a fiscal period.
    pub fn insert_period(&self, period: &Period) -> Result<()> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| MetricError::Connection(e.to_string()))?;
        conn.execute(
            "INSERT OR REPLACE INTO periods
             (id, company_id, year, quarter, start_date, end_date)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                period.id.0,
                period.company_id.0,
                period.year,
                period.quarter.as_str(),
                period.start_date.map(|d| d.to_string()),
                period.end_date.map(|d| d.to_string()),
            ],
        )
        .map_err(|e| MetricError::Query(e.to_string()))?;
        Ok(())
    }

    /// Insert or replace a period's income statement.
    pub fn insert_income_statement(&self, stmt: &IncomeStatement) -> Result<()> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| MetricError::Connection(e.to_string()))?;
        conn.execute(
            "INSERT OR REPLACE INTO income_statements
             (period_id, total_revenue, product_revenue, service_revenue, other_revenue,
              total_cost_of_revenue, cost_of_goods_sold, cost_of_services, gross_profit,
              research_and_development, sales_and_marketing, general_and_administrative,
              other_operating_expenses, operating_income, interest_income, interest_expense,
              other_income, other_expense, income_before_taxes, income_tax_expense,
              net_income, basic_eps, diluted_eps, basic_shares, diluted_shares)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16,
                     ?17, ?18, ?19, ?20, ?21, ?22, ?23, ?24, ?25)",
            params![
                stmt.period_id.0,
                stmt.total_revenue,
                stmt.product_revenue,
                stmt.service_revenue,
                stmt.other_revenue,
                stmt.total_cost_of_revenue,
                stmt.cost_of_goods_sold,
                stmt.cost_of_services,
                stmt.gross_profit,
                stmt.research_and_development,
                stmt.sales_and_marketing,
                stmt.general_and_administrative,
                stmt.other_operating_expenses,
                stmt.operating_income,
                stmt.interest_income,
                stmt.interest_expense,
                stmt.other_income,
                stmt.other_expense,
                stmt.income_before_taxes,
                stmt.income_tax_expense,
                stmt.net_income,
                stmt.basic_eps,
                stmt.diluted_eps,
                stmt.basic_shares,
                stmt.diluted_shares,
            ],
        )
        .map_err(|e| MetricError::Query(e.to_string()))?;
        Ok(())
    }

    /// Insert or replace a period's cash flow statement.
    pub fn insert_cash_flow_statement(&self, stmt: &CashFlowStatement) -> Result<()> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| MetricError::Connection(e.to_string()))?;
        conn.execute(
            "INSERT OR REPLACE INTO cash_flow_statements
             (period_id, operating_cash_flow, investing_cash_flow,
              financing_cash_flow, net_cash_flow)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                stmt.period_id.0,
                stmt.operating_cash_flow,
                stmt.investing_cash_flow,
                stmt.financing_cash_flow,
                stmt.net_cash_flow,
            ],
        )
        .map_err(|e| MetricError::Query(e.to_string()))?;
        Ok(())
    }

    /// Insert or replace a period's balance sheet.
    pub fn insert_balance_sheet(&self, sheet: &BalanceSheet) -> Result<()> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| MetricError::Connection(e.to_string()))?;
        conn.execute(
            "INSERT OR REPLACE INTO balance_sheets
             (period_id, total_assets, total_liabilities, total_equity, current_assets,
              current_liabilities, inventory, receivables, payables, cash_and_equivalents,
              other_assets, other_liabilities)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
            params![
                sheet.period_id.0,
                sheet.total_assets,
                sheet.total_liabilities,
                sheet.total_equity,
                sheet.current_assets,
                sheet.current_liabilities,
                sheet.inventory,
                sheet.receivables,
                sheet.payables,
                sheet.cash_and_equivalents,
                sheet.other_assets,
                sheet.other_liabilities,
            ],
        )
        .map_err(|e| MetricError::Query(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use findash_core::{Company, CompanyId, Period, PeriodId, Quarter};

    use crate::sqlite::SqliteStore;

    #[test]
    fn reinserting_a_period_replaces_it() {
        let store = SqliteStore::in_memory().unwrap();
        let company = CompanyId(1);
        store
            .insert_company(&Company::new(company, "TechCorp Inc."))
            .unwrap();

        let period = Period::new(PeriodId(1), company, 2024, Quarter::Q1);
        store.insert_period(&period).unwrap();

        let dated = period.clone().with_dates(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
        );
        store.insert_period(&dated).unwrap();
    }
}
