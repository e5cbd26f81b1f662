#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/findash/findash/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core types and traits for the findash metric pipeline.
//!
//! This crate provides the foundational abstractions shared by the query
//! layer, the data-access hooks, and the view reductions:
//!
//! - [`FactStore`](store::FactStore) - Metric query operations over the fact store
//! - [`CompanyScope`](scope::CompanyScope) - All-companies vs. single-company scoping
//! - [`Period`](period::Period) / [`Quarter`](period::Quarter) - Fiscal time units
//! - Fact records ([`IncomeStatement`](types::IncomeStatement), ...) and
//!   derived-metric rows ([`RevenueGrowthRow`](rows::RevenueGrowthRow), ...)

/// Error types for metric operations.
pub mod error;
/// Fiscal period and quarter definitions.
pub mod period;
/// Derived-metric row records returned by the query layer.
pub mod rows;
/// Company scoping for metric queries.
pub mod scope;
/// The fact-store query trait.
pub mod store;
/// Fact-table entity records.
pub mod types;

// Re-export commonly used items at crate root
pub use error::{MetricError, Result};
pub use period::{Period, PeriodId, Quarter};
pub use rows::{
    CashFlowRow, CompanyRow, EbitdaMarginRow, RevenueGrowthRow, SnapshotRow, WorkingCapitalRow,
};
pub use scope::CompanyScope;
pub use store::FactStore;
pub use types::{BalanceSheet, CashFlowStatement, Company, CompanyId, IncomeStatement};
