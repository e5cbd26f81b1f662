#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/findash/findash/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Data-access hooks for the findash metric pipeline.
//!
//! - [`FetchState`](fetch::FetchState) / [`FetchCell`](fetch::FetchCell) -
//!   the pending/success/error lifecycle as an explicit state machine
//! - [`MetricQuery`](query::MetricQuery) - binds one fact-store operation to
//!   its row type
//! - [`MetricHook`](hook::MetricHook) - drives one query for one view,
//!   refetching when its scope changes

/// Fetch lifecycle state machine.
pub mod fetch;
/// One hook per metric operation.
pub mod hook;
/// Metric operation bindings.
pub mod query;

pub use fetch::{FetchCell, FetchState, RequestToken};
pub use hook::MetricHook;
pub use query::{
    CashFlowAnalysis, Companies, DashboardSnapshot, EbitdaMargins, MetricQuery, RevenueGrowth,
    WorkingCapitalMetrics,
};
