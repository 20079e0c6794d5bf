//! Configuration types for the analysis run.

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::Month;
use serde::{Deserialize, Serialize};

use crate::error::ClimaError;

/// Inclusive range of calendar years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Period {
    /// First year, inclusive.
    pub start: i32,
    /// Last year, inclusive.
    pub end: i32,
}

impl Period {
    /// Construct a period without validation.
    #[must_use]
    pub const fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    /// Construct a period, rejecting `start > end`.
    ///
    /// # Errors
    /// Returns `Err(ClimaError::InvalidArg)` when the range is reversed.
    pub fn try_new(start: i32, end: i32) -> Result<Self, ClimaError> {
        if start > end {
            return Err(ClimaError::InvalidArg(format!(
                "period start {start} is after end {end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// Whether `year` falls inside the period.
    #[must_use]
    pub const fn contains(&self, year: i32) -> bool {
        self.start <= year && year <= self.end
    }

    /// Number of calendar years covered.
    #[must_use]
    pub const fn years(&self) -> i32 {
        self.end - self.start + 1
    }

    /// Display label, e.g. `1951–1980`.
    #[must_use]
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}–{}", self.start, self.end)
    }
}

/// Fixed-width binning of anomaly magnitudes into `(left, right]` intervals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BinSpec {
    /// Left edge of the first bin (exclusive).
    pub start: f64,
    /// Right edge of the last bin (inclusive).
    pub end: f64,
    /// Bin width.
    pub width: f64,
}

impl Default for BinSpec {
    fn default() -> Self {
        Self {
            start: -1.0,
            end: 2.0,
            width: 0.2,
        }
    }
}

impl BinSpec {
    // Edges are snapped to this grid so that decimal data such as `-0.8`
    // lands on the same float as the computed edge.
    const EDGE_GRID: f64 = 1e9;

    /// Check that the spec describes at least one finite bin.
    ///
    /// # Errors
    /// Returns `Err(ClimaError::InvalidArg)` for non-finite values, a non-positive
    /// width, or `end <= start`.
    pub fn validate(&self) -> Result<(), ClimaError> {
        if !(self.start.is_finite() && self.end.is_finite() && self.width.is_finite()) {
            return Err(ClimaError::InvalidArg("bin spec must be finite".into()));
        }
        if self.width <= 0.0 {
            return Err(ClimaError::InvalidArg(format!(
                "bin width must be positive, got {}",
                self.width
            )));
        }
        if self.end <= self.start {
            return Err(ClimaError::InvalidArg(format!(
                "bin range end {} must exceed start {}",
                self.end, self.start
            )));
        }
        Ok(())
    }

    /// Number of bins covering `(start, end]`.
    ///
    /// # Errors
    /// Propagates [`validate`](Self::validate) failures.
    pub fn bin_count(&self) -> Result<usize, ClimaError> {
        self.validate()?;
        let n = ((self.end - self.start) / self.width - 1e-9).ceil();
        // n >= 1 after validation
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Ok(n.max(1.0) as usize)
    }

    /// Bin edges, `bin_count() + 1` values ascending from `start`.
    ///
    /// # Errors
    /// Propagates [`validate`](Self::validate) failures.
    pub fn edges(&self) -> Result<Vec<f64>, ClimaError> {
        let n = self.bin_count()?;
        let edges = (0..=n)
            .map(|i| {
                #[allow(clippy::cast_precision_loss)]
                let raw = self.start + self.width * i as f64;
                (raw * Self::EDGE_GRID).round() / Self::EDGE_GRID
            })
            .collect();
        Ok(edges)
    }
}

/// Conventions for reading the delimited-text anomaly table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemperatureLayout {
    /// Lines to discard before the header row.
    pub header_skip: usize,
    /// Textual marker for a missing value.
    pub missing: String,
    /// Name of the year key column.
    pub key_column: String,
}

impl Default for TemperatureLayout {
    fn default() -> Self {
        Self {
            header_skip: 1,
            missing: "***".into(),
            key_column: "Year".into(),
        }
    }
}

/// Conventions for reading the CO₂ sheet (spreadsheet or delimited text).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Co2Layout {
    /// Rows to discard before the header row.
    pub header_skip: usize,
    /// Worksheet to read; the first sheet when `None`.
    pub sheet: Option<String>,
    /// Numeric marker for a missing value.
    pub missing: f64,
    /// Name of the year column.
    pub year_column: String,
    /// Name of the month column.
    pub month_column: String,
}

impl Default for Co2Layout {
    fn default() -> Self {
        Self {
            header_skip: 0,
            sheet: None,
            missing: -99.99,
            year_column: "Year".into(),
            month_column: "Month".into(),
        }
    }
}

/// Global configuration for the `Clima` orchestrator.
///
/// Every input and output location is derived from `base_dir`:
/// inputs under `Rawdata/`, tables under `Outputs/Tables/`, charts under
/// `Outputs/Figures/` and the run summary at `Outputs/report.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClimaConfig {
    /// Root directory of the report workspace.
    pub base_dir: PathBuf,
    /// File name of the anomaly table inside the raw-data directory.
    pub temperature_file: String,
    /// File name of the CO₂ sheet inside the raw-data directory.
    pub co2_file: String,
    /// Reading conventions for the anomaly table.
    pub temperature_layout: TemperatureLayout,
    /// Reading conventions for the CO₂ sheet.
    pub co2_layout: Co2Layout,
    /// Month featured in single-month charts and the CO₂ comparison.
    pub featured_month: Month,
    /// The two periods compared in frequency tables and histograms.
    pub comparison_periods: [Period; 2],
    /// Periods summarized in the seasonal mean/variance table.
    pub summary_periods: Vec<Period>,
    /// Binning of annual anomalies.
    pub bins: BinSpec,
    /// Quantile levels evaluated over the first comparison period.
    pub quantile_levels: Vec<f64>,
    /// Anomaly at or above which a year of the second comparison period counts as hot.
    pub hot_threshold: f64,
    /// CO₂ records before January 1st of this year are discarded.
    pub co2_cutoff_year: i32,
    /// Resolution requested from the chart renderer.
    pub chart_dpi: u32,
}

impl Default for ClimaConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            temperature_file: "temp_deviation.csv".into(),
            co2_file: "Co2_Manu_loa.xlsx".into(),
            temperature_layout: TemperatureLayout::default(),
            co2_layout: Co2Layout::default(),
            featured_month: Month::March,
            comparison_periods: [Period::new(1951, 1980), Period::new(1981, 2010)],
            summary_periods: vec![
                Period::new(1921, 1950),
                Period::new(1951, 1980),
                Period::new(1981, 2010),
            ],
            bins: BinSpec::default(),
            quantile_levels: vec![0.3, 0.7],
            hot_threshold: 0.08,
            co2_cutoff_year: 1960,
            chart_dpi: 300,
        }
    }
}

impl ClimaConfig {
    /// Parse a configuration from JSON; missing keys take their defaults.
    ///
    /// # Errors
    /// Returns `Err(ClimaError::Decode)` for malformed JSON.
    pub fn from_json_str(json: &str) -> Result<Self, ClimaError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON configuration file.
    ///
    /// # Errors
    /// Returns `Err(ClimaError::Io)` if the file cannot be read and
    /// `Err(ClimaError::Decode)` for malformed JSON.
    pub fn from_json_file(path: &Path) -> Result<Self, ClimaError> {
        let text = std::fs::read_to_string(path).map_err(|e| ClimaError::io(path, &e))?;
        Self::from_json_str(&text)
    }

    /// Directory holding the input files.
    #[must_use]
    pub fn raw_dir(&self) -> PathBuf {
        self.base_dir.join("Rawdata")
    }

    /// Directory holding every generated file.
    #[must_use]
    pub fn outputs_dir(&self) -> PathBuf {
        self.base_dir.join("Outputs")
    }

    /// Directory for chart files.
    #[must_use]
    pub fn figures_dir(&self) -> PathBuf {
        self.outputs_dir().join("Figures")
    }

    /// Directory for typeset tables.
    #[must_use]
    pub fn tables_dir(&self) -> PathBuf {
        self.outputs_dir().join("Tables")
    }

    /// Location of the JSON run summary.
    #[must_use]
    pub fn report_path(&self) -> PathBuf {
        self.outputs_dir().join("report.json")
    }

    /// Full path of the anomaly table.
    #[must_use]
    pub fn temperature_path(&self) -> PathBuf {
        self.raw_dir().join(&self.temperature_file)
    }

    /// Full path of the CO₂ sheet.
    #[must_use]
    pub fn co2_path(&self) -> PathBuf {
        self.raw_dir().join(&self.co2_file)
    }

    /// Check every parameter for internal consistency.
    ///
    /// # Errors
    /// Returns `Err(ClimaError::InvalidArg)` describing the first invalid value.
    pub fn validate(&self) -> Result<(), ClimaError> {
        self.bins.validate()?;
        for p in self.comparison_periods.iter().chain(&self.summary_periods) {
            Period::try_new(p.start, p.end)?;
        }
        if self.summary_periods.is_empty() {
            return Err(ClimaError::InvalidArg(
                "at least one summary period is required".into(),
            ));
        }
        if let Some(q) = self
            .quantile_levels
            .iter()
            .find(|q| !(0.0..=1.0).contains(*q))
        {
            return Err(ClimaError::InvalidArg(format!(
                "quantile level {q} outside [0, 1]"
            )));
        }
        if !self.hot_threshold.is_finite() {
            return Err(ClimaError::InvalidArg("hot threshold must be finite".into()));
        }
        if self.chart_dpi == 0 {
            return Err(ClimaError::InvalidArg("chart dpi must be positive".into()));
        }
        Ok(())
    }
}
