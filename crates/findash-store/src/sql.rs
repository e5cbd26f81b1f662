//! Shared SQL text for the metric queries.
//!
//! Both backends execute the same statements. Placeholders use the `$1`
//! positional syntax, which PostgreSQL and SQLite both accept; the only
//! parameter across all queries is the optional company identifier. Quarter
//! labels (`'Q1'`..`'Q4'`) sort lexicographically in chronological order, so
//! `ORDER BY year, quarter` is the reporting sequence.

use findash_core::CompanyScope;

/// `WHERE` clause scoping a query to one company, or nothing.
fn scope_where(scope: CompanyScope) -> &'static str {
    match scope {
        CompanyScope::All => "",
        CompanyScope::Company(_) => "WHERE p.company_id = $1",
    }
}

/// `AND` clause for queries that already carry a `WHERE`.
fn scope_and(scope: CompanyScope) -> &'static str {
    match scope {
        CompanyScope::All => "",
        CompanyScope::Company(_) => "AND p.company_id = $1",
    }
}

/// Company listing, name ascending.
pub(crate) const COMPANIES: &str = "SELECT id, name FROM companies ORDER BY name";

/// Revenue with QoQ/YoY growth via `LAG(1)`/`LAG(4)` over the per-company
/// reporting sequence. A lag value that is absent or zero leaves the growth
/// column NULL instead of dividing by it.
pub(crate) fn revenue_growth(scope: CompanyScope) -> String {
    format!(
        "SELECT
            c.name AS company_name,
            p.year,
            p.quarter,
            i.total_revenue,
            LAG(i.total_revenue) OVER w AS prev_quarter_revenue,
            LAG(i.total_revenue, 4) OVER w AS prev_year_revenue,
            CASE
                WHEN LAG(i.total_revenue) OVER w IS NOT NULL
                 AND LAG(i.total_revenue) OVER w <> 0
                THEN ((i.total_revenue - LAG(i.total_revenue) OVER w)
                      / LAG(i.total_revenue) OVER w) * 100
                ELSE NULL
            END AS revenue_growth_qoq,
            CASE
                WHEN LAG(i.total_revenue, 4) OVER w IS NOT NULL
                 AND LAG(i.total_revenue, 4) OVER w <> 0
                THEN ((i.total_revenue - LAG(i.total_revenue, 4) OVER w)
                      / LAG(i.total_revenue, 4) OVER w) * 100
                ELSE NULL
            END AS revenue_growth_yoy
        FROM periods p
        JOIN companies c ON p.company_id = c.id
        JOIN income_statements i ON p.id = i.period_id
        {filter}
        WINDOW w AS (PARTITION BY p.company_id ORDER BY p.year, p.quarter)
        ORDER BY p.year, p.quarter",
        filter = scope_where(scope)
    )
}

/// EBITDA margin per period. Periods without reported revenue are excluded;
/// non-positive revenue leaves the margin NULL.
pub(crate) fn ebitda_margins(scope: CompanyScope) -> String {
    format!(
        "SELECT
            c.name AS company_name,
            p.year,
            p.quarter,
            i.total_revenue,
            i.operating_income AS ebitda,
            CASE
                WHEN i.total_revenue > 0
                THEN (i.operating_income / i.total_revenue) * 100
                ELSE NULL
            END AS ebitda_margin_percent
        FROM periods p
        JOIN companies c ON p.company_id = c.id
        JOIN income_statements i ON p.id = i.period_id
        WHERE i.total_revenue IS NOT NULL
        {filter}
        ORDER BY p.year, p.quarter",
        filter = scope_and(scope)
    )
}

/// Cash flow components with derived free cash flow.
pub(crate) fn cash_flow_analysis(scope: CompanyScope) -> String {
    format!(
        "SELECT
            c.name AS company_name,
            p.year,
            p.quarter,
            cf.operating_cash_flow,
            cf.investing_cash_flow,
            cf.financing_cash_flow,
            cf.net_cash_flow,
            (cf.operating_cash_flow + cf.investing_cash_flow) AS free_cash_flow
        FROM periods p
        JOIN companies c ON p.company_id = c.id
        JOIN cash_flow_statements cf ON p.id = cf.period_id
        {filter}
        ORDER BY p.year, p.quarter",
        filter = scope_where(scope)
    )
}

/// Working capital, current ratio, and days sales outstanding. The income
/// statement is LEFT-joined so balance-sheet rows survive a missing one.
pub(crate) fn working_capital_metrics(scope: CompanyScope) -> String {
    format!(
        "SELECT
            c.name AS company_name,
            p.year,
            p.quarter,
            bs.current_assets,
            bs.current_liabilities,
            bs.inventory,
            bs.receivables,
            bs.payables,
            (bs.current_assets - bs.current_liabilities) AS working_capital,
            CASE
                WHEN bs.current_liabilities > 0
                THEN bs.current_assets / bs.current_liabilities
                ELSE NULL
            END AS current_ratio,
            CASE
                WHEN i.total_revenue > 0
                THEN (bs.receivables / i.total_revenue) * 365
                ELSE NULL
            END AS days_sales_outstanding
        FROM periods p
        JOIN companies c ON p.company_id = c.id
        JOIN balance_sheets bs ON p.id = bs.period_id
        LEFT JOIN income_statements i ON p.id = i.period_id
        {filter}
        ORDER BY p.year, p.quarter",
        filter = scope_where(scope)
    )
}

/// Cross-company snapshot of the latest `(year, quarter)` in the store,
/// ordered by company name. Statement tables are LEFT-joined so a company
/// with a partial filing still appears, with NULLs where data is missing.
pub(crate) const DASHBOARD_SNAPSHOT: &str = "SELECT
        c.name AS company_name,
        p.year,
        p.quarter,
        i.total_revenue,
        i.operating_income,
        cf.operating_cash_flow,
        cf.net_cash_flow,
        bs.current_assets,
        bs.current_liabilities,
        bs.total_assets,
        bs.total_liabilities,
        CASE
            WHEN i.total_revenue > 0
            THEN (i.operating_income / i.total_revenue) * 100
            ELSE NULL
        END AS ebitda_margin,
        CASE
            WHEN bs.current_liabilities > 0
            THEN bs.current_assets / bs.current_liabilities
            ELSE NULL
        END AS current_ratio
    FROM periods p
    JOIN companies c ON p.company_id = c.id
    LEFT JOIN income_statements i ON p.id = i.period_id
    LEFT JOIN cash_flow_statements cf ON p.id = cf.period_id
    LEFT JOIN balance_sheets bs ON p.id = bs.period_id
    WHERE (p.year, p.quarter) = (SELECT year, quarter
                                 FROM periods
                                 ORDER BY year DESC, quarter DESC
                                 LIMIT 1)
    ORDER BY c.name";
