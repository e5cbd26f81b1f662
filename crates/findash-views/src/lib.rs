#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/findash/findash/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! View reductions for the findash dashboard pages.
//!
//! Each module reduces one metric's row sequence into the figures its page
//! renders:
//!
//! - [`overview`] - Cross-company headline numbers from the snapshot
//! - [`revenue`] - Growth series, trailing table, growth badges
//! - [`profitability`] - Margin series and margin status
//! - [`cash_flow`] - Cash flow components and free-cash-flow totals
//! - [`working_capital`] - Liquidity series and status
//! - [`trend`] - The up/down/neutral tagged union and its presentation map
//! - [`route`] - The dashboard's route menu

/// Cash flow page reductions.
pub mod cash_flow;
/// Overview page reductions.
pub mod overview;
/// Profitability page reductions.
pub mod profitability;
/// Dashboard routes.
pub mod route;
/// Revenue page reductions.
pub mod revenue;
/// Trend direction and presentation mapping.
pub mod trend;
/// Working capital page reductions.
pub mod working_capital;

pub use cash_flow::CashFlowSummary;
pub use overview::OverviewSummary;
pub use profitability::{MarginStatus, ProfitabilitySummary};
pub use route::Route;
pub use revenue::{GrowthStatus, RevenueSummary};
pub use trend::{BadgeVariant, Trend, TrendPresentation};
pub use working_capital::{LiquidityStatus, WorkingCapitalSummary};

/// Number of most recent periods shown by table views; charts render the
/// full series.
pub const TRAILING_PERIODS: usize = 4;

/// Heading of the fixed error panel a view renders in its error state.
pub const ERROR_PANEL_HEADING: &str = "Error loading data";

/// What a view renders when its fetch fails: the fixed heading over the
/// stored display message. There is no retry affordance; a fresh fetch only
/// happens when the scope changes.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ErrorPanel {
    /// Fixed panel heading.
    pub heading: &'static str,
    /// Display message from the failed fetch.
    pub message: String,
}

impl ErrorPanel {
    /// Builds the panel for a failed fetch.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            heading: ERROR_PANEL_HEADING,
            message: message.into(),
        }
    }
}

/// Chart axis label for one period, e.g. `"Q3 2024"`.
#[must_use]
pub fn period_label(year: i32, quarter: findash_core::Quarter) -> String {
    format!("{quarter} {year}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use findash_core::Quarter;

    #[test]
    fn period_labels_match_chart_axis_format() {
        assert_eq!(period_label(2024, Quarter::Q3), "Q3 2024");
    }

    #[test]
    fn error_panel_pairs_the_fixed_heading_with_the_message() {
        let panel = ErrorPanel::new("Failed to fetch revenue growth: connection refused");
        assert_eq!(panel.heading, "Error loading data");
        assert!(panel.message.contains("connection refused"));
    }
}
