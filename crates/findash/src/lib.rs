#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/findash/findash/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Financial analytics dashboard core.
//!
//! This crate re-exports the core types, store backends, hooks, and view
//! reductions, and provides a [`Dashboard`] that wires a fact store into
//! per-metric hooks and one-shot view helpers.
//!
//! # Features
//!
//! - `sqlite` - SQLite-backed fact store (default)
//! - `postgres` - PostgreSQL-backed fact store
//!
//! # Example
//!
//! ```rust,ignore
//! use findash::{CompanyScope, Dashboard};
//!
//! #[tokio::main]
//! async fn main() -> findash::Result<()> {
//!     let dashboard = Dashboard::with_sqlite("financial_data.db")?;
//!
//!     let overview = dashboard.overview().await?;
//!     println!("{} companies, total revenue {}",
//!         overview.company_count, overview.total_revenue);
//!
//!     let mut hook = dashboard.revenue_growth_hook(CompanyScope::All);
//!     hook.refresh().await;
//!
//!     Ok(())
//! }
//! ```

// Core types and traits
pub use findash_core::*;

// Store backends
#[cfg(feature = "postgres")]
pub use findash_store::{PostgresConfig, PostgresStore};
#[cfg(feature = "sqlite")]
pub use findash_store::SqliteStore;

// Hooks
pub use findash_hooks::{
    CashFlowAnalysis, Companies, DashboardSnapshot, EbitdaMargins, FetchCell, FetchState,
    MetricHook, MetricQuery, RequestToken, RevenueGrowth, WorkingCapitalMetrics,
};

// View reductions
pub use findash_views::{
    BadgeVariant, CashFlowSummary, ErrorPanel, LiquidityStatus, MarginStatus, OverviewSummary,
    ProfitabilitySummary, RevenueSummary, Route, Trend, TrendPresentation, WorkingCapitalSummary,
};

mod dashboard;
pub use dashboard::Dashboard;
