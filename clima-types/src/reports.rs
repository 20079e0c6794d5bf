//! Derived tables and report envelopes produced by the pipeline.

use std::path::PathBuf;

use chrono::Month;
use serde::{Deserialize, Serialize};

use crate::config::{BinSpec, Period};
use crate::records::TemperatureField;

/// Outcome of loading one source table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadReport {
    /// Dataset label (e.g. "temperature").
    pub dataset: String,
    /// Data rows encountered after the header.
    pub rows_read: usize,
    /// Rows whose key parsed and were kept.
    pub rows_kept: usize,
    /// Rows discarded because their key did not parse.
    pub rows_dropped: usize,
}

impl LoadReport {
    /// Start an empty report for `dataset`.
    pub fn new(dataset: impl Into<String>) -> Self {
        Self {
            dataset: dataset.into(),
            rows_read: 0,
            rows_kept: 0,
            rows_dropped: 0,
        }
    }
}

/// A half-open `(left, right]` interval of anomaly magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BinInterval {
    /// Exclusive left edge.
    pub left: f64,
    /// Inclusive right edge.
    pub right: f64,
}

impl BinInterval {
    /// Whether `value` falls in `(left, right]`.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        self.left < value && value <= self.right
    }

    /// Display label, e.g. `(-1.0, -0.8]`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("({:.1}, {:.1}]", self.left, self.right)
    }
}

/// Member count of a single bin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BinCount {
    /// The bin.
    pub interval: BinInterval,
    /// Observations inside the bin.
    pub count: usize,
}

/// Histogram-style frequency table of one period.
///
/// `sum(bins.count) + out_of_range == observations` always holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyTable {
    /// Period the observations were drawn from.
    pub period: Period,
    /// Binning used.
    pub spec: BinSpec,
    /// Every bin in ascending order, including empty ones.
    pub bins: Vec<BinCount>,
    /// Non-null observations outside every bin.
    pub out_of_range: usize,
    /// Non-null observations in the period.
    pub observations: usize,
}

impl FrequencyTable {
    /// Sum of per-bin counts.
    #[must_use]
    pub fn binned(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }
}

/// One bin of a [`FrequencyComparison`] with a count per period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    /// The bin.
    pub interval: BinInterval,
    /// Counts in the order of [`FrequencyComparison::periods`].
    pub counts: Vec<usize>,
}

/// Frequency tables of several periods joined by bin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyComparison {
    /// Compared periods, column order.
    pub periods: Vec<Period>,
    /// Shared binning.
    pub spec: BinSpec,
    /// One row per bin, ascending.
    pub rows: Vec<ComparisonRow>,
}

/// Count, mean and sample variance of one (period, category) cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    /// Non-null observations.
    pub count: usize,
    /// Arithmetic mean; `None` without observations.
    pub mean: Option<f64>,
    /// Sample variance (n − 1); `None` with fewer than two observations.
    pub variance: Option<f64>,
}

impl SummaryStats {
    /// Copy with mean and variance rounded half away from zero to `digits` decimals.
    #[must_use]
    pub fn rounded(&self, digits: i32) -> Self {
        let scale = 10f64.powi(digits);
        let round = |v: f64| (v * scale).round() / scale;
        Self {
            count: self.count,
            mean: self.mean.map(round),
            variance: self.variance.map(round),
        }
    }
}

/// Grouped statistics over periods (rows) and categories (columns).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryTable {
    /// Summarized periods.
    pub periods: Vec<Period>,
    /// Summarized columns.
    pub categories: Vec<TemperatureField>,
    /// `cells[period][category]`.
    pub cells: Vec<Vec<SummaryStats>>,
}

impl SummaryTable {
    /// Look up the cell for a period and category.
    #[must_use]
    pub fn get(&self, period: &Period, category: TemperatureField) -> Option<&SummaryStats> {
        let pi = self.periods.iter().position(|p| p == period)?;
        let ci = self.categories.iter().position(|c| *c == category)?;
        self.cells.get(pi).and_then(|row| row.get(ci))
    }
}

/// Value of a series at one quantile level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuantileValue {
    /// Level in `[0, 1]`.
    pub level: f64,
    /// Interpolated value.
    pub value: f64,
}

/// Observations meeting or exceeding a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Exceedance {
    /// Threshold applied with `>=`.
    pub threshold: f64,
    /// Observations at or above the threshold.
    pub count: usize,
    /// All observations considered.
    pub total: usize,
    /// `100 * count / total`.
    pub percentage: f64,
}

/// Pearson correlation with its two-sided significance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Correlation {
    /// Product-moment correlation coefficient.
    pub r: f64,
    /// Two-sided p-value under the null hypothesis of zero correlation.
    pub p_value: f64,
    /// Paired observations used.
    pub n: usize,
}

/// Summary of one complete pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    /// Anomaly table load outcome.
    pub temperature: LoadReport,
    /// CO₂ table load outcome.
    pub co2: LoadReport,
    /// Month featured in single-month outputs.
    pub featured_month: Month,
    /// Annual anomaly frequencies of the comparison periods.
    pub frequencies: FrequencyComparison,
    /// Period the quantiles were taken over.
    pub quantile_period: Period,
    /// Requested quantiles of the annual anomaly.
    pub quantiles: Vec<QuantileValue>,
    /// Period the exceedance was counted over.
    pub exceedance_period: Period,
    /// Hot-year count of the annual anomaly.
    pub exceedance: Exceedance,
    /// Seasonal mean/variance per period, rounded for presentation.
    pub summary: SummaryTable,
    /// Rows in the temperature/CO₂ join.
    pub joined_rows: usize,
    /// Featured-month anomaly vs. CO₂ trend.
    pub correlation: Correlation,
    /// Every file written, in order.
    pub outputs: Vec<PathBuf>,
}
