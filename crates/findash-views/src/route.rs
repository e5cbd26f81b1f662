//! The dashboard route menu.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use findash_core::MetricError;

/// One page of the dashboard.
///
/// `Data` and `Settings` are shell-only pages with no metric reduction; they
/// exist so the route menu is complete.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    /// Cross-company headline numbers.
    Overview,
    /// Revenue growth.
    Revenue,
    /// EBITDA margins.
    Profitability,
    /// Cash flow components.
    CashFlow,
    /// Working capital and liquidity.
    Health,
    /// Raw data browser shell.
    Data,
    /// Settings shell.
    Settings,
}

impl Route {
    /// All routes in menu order.
    pub const ALL: [Self; 7] = [
        Self::Overview,
        Self::Revenue,
        Self::Profitability,
        Self::CashFlow,
        Self::Health,
        Self::Data,
        Self::Settings,
    ];

    /// URL path for this route.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Overview => "/",
            Self::Revenue => "/revenue",
            Self::Profitability => "/profitability",
            Self::CashFlow => "/cashflow",
            Self::Health => "/health",
            Self::Data => "/data",
            Self::Settings => "/settings",
        }
    }

    /// Menu title for this route.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Revenue => "Revenue Analysis",
            Self::Profitability => "Profitability",
            Self::CashFlow => "Cash Flow",
            Self::Health => "Financial Health",
            Self::Data => "Data Management",
            Self::Settings => "Settings",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Route {
    type Err = MetricError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.path() == s)
            .ok_or_else(|| MetricError::Parse(format!("unknown route: {s}")))
    }
}
