//! Growth series, trailing table, and status badges for the revenue page.

use serde::{Deserialize, Serialize};

use findash_core::RevenueGrowthRow;

use crate::trend::BadgeVariant;
use crate::{period_label, TRAILING_PERIODS};

/// QoQ growth above this is flagged with an emphasized badge, percent.
pub const STRONG_QOQ_THRESHOLD: f64 = 5.0;

/// YoY growth above this is classed [`GrowthStatus::Strong`], percent.
pub const STRONG_YOY_THRESHOLD: f64 = 20.0;

/// One chart point of the revenue growth series.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GrowthPoint {
    /// Company display name.
    pub company_name: String,
    /// Period axis label, e.g. `"Q3 2024"`.
    pub label: String,
    /// Revenue for the period.
    pub revenue: Option<f64>,
    /// Quarter-over-quarter growth, percent.
    pub qoq: Option<f64>,
    /// Year-over-year growth, percent.
    pub yoy: Option<f64>,
}

/// Year-over-year growth classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GrowthStatus {
    /// YoY growth above [`STRONG_YOY_THRESHOLD`].
    Strong,
    /// Everything else, including an undefined comparison.
    Moderate,
}

impl GrowthStatus {
    /// Classifies a YoY growth figure.
    #[must_use]
    pub fn of(yoy: Option<f64>) -> Self {
        match yoy {
            Some(y) if y > STRONG_YOY_THRESHOLD => Self::Strong,
            _ => Self::Moderate,
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Strong => "Strong",
            Self::Moderate => "Moderate",
        }
    }
}

/// Badge for one table row's QoQ growth.
#[must_use]
pub fn qoq_badge(qoq: Option<f64>) -> BadgeVariant {
    match qoq {
        Some(q) if q > STRONG_QOQ_THRESHOLD => BadgeVariant::Primary,
        _ => BadgeVariant::Secondary,
    }
}

/// Everything the revenue page renders: the full chart series and the
/// trailing table window.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RevenueSummary {
    /// Chart points over the full row sequence, in query order.
    pub series: Vec<GrowthPoint>,
    /// The last [`TRAILING_PERIODS`] rows, for the detail table.
    pub table: Vec<RevenueGrowthRow>,
}

impl RevenueSummary {
    /// Reduces growth rows into the page's series and table.
    #[must_use]
    pub fn from_rows(rows: &[RevenueGrowthRow]) -> Self {
        let series = rows
            .iter()
            .map(|r| GrowthPoint {
                company_name: r.company_name.clone(),
                label: period_label(r.year, r.quarter),
                revenue: r.total_revenue,
                qoq: r.revenue_growth_qoq,
                yoy: r.revenue_growth_yoy,
            })
            .collect();
        let start = rows.len().saturating_sub(TRAILING_PERIODS);
        Self {
            series,
            table: rows[start..].to_vec(),
        }
    }
}
