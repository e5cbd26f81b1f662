//! Margin series and status for the profitability page.

use serde::{Deserialize, Serialize};

use findash_core::EbitdaMarginRow;

use crate::{period_label, TRAILING_PERIODS};

/// Margins above this are classed [`MarginStatus::Excellent`], percent.
pub const EXCELLENT_MARGIN_THRESHOLD: f64 = 20.0;

/// One chart point of the margin series.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarginPoint {
    /// Company display name.
    pub company_name: String,
    /// Period axis label, e.g. `"Q3 2024"`.
    pub label: String,
    /// Revenue for the period.
    pub revenue: f64,
    /// EBITDA for the period.
    pub ebitda: Option<f64>,
    /// Margin percent; `None` when revenue is not positive.
    pub margin: Option<f64>,
}

/// EBITDA margin classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarginStatus {
    /// Margin above [`EXCELLENT_MARGIN_THRESHOLD`].
    Excellent,
    /// Everything else, including an undefined margin.
    Good,
}

impl MarginStatus {
    /// Classifies a margin figure.
    #[must_use]
    pub fn of(margin: Option<f64>) -> Self {
        match margin {
            Some(m) if m > EXCELLENT_MARGIN_THRESHOLD => Self::Excellent,
            _ => Self::Good,
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
        }
    }
}

/// Everything the profitability page renders.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProfitabilitySummary {
    /// Chart points over the full row sequence, in query order.
    pub series: Vec<MarginPoint>,
    /// The last [`TRAILING_PERIODS`] rows, for the detail table.
    pub table: Vec<EbitdaMarginRow>,
}

impl ProfitabilitySummary {
    /// Reduces margin rows into the page's series and table.
    #[must_use]
    pub fn from_rows(rows: &[EbitdaMarginRow]) -> Self {
        let series = rows
            .iter()
            .map(|r| MarginPoint {
                company_name: r.company_name.clone(),
                label: period_label(r.year, r.quarter),
                revenue: r.total_revenue,
                ebitda: r.ebitda,
                margin: r.ebitda_margin_percent,
            })
            .collect();
        let start = rows.len().saturating_sub(TRAILING_PERIODS);
        Self {
            series,
            table: rows[start..].to_vec(),
        }
    }
}
