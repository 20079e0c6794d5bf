use std::path::PathBuf;
use std::sync::Arc;

use clima_core::{
    BinSpec, ChartRenderer, ClimaConfig, ClimaError, ClimateSource, Co2Layout, FileSource, Month,
    Period, TableWriter, TemperatureLayout,
};

use crate::export::{ChartSpecWriter, LatexTableWriter};

/// Orchestrator that runs the analysis and writes every report artifact.
pub struct Clima {
    pub(crate) source: Arc<dyn ClimateSource>,
    pub(crate) tables: Arc<dyn TableWriter>,
    pub(crate) charts: Arc<dyn ChartRenderer>,
    pub(crate) cfg: ClimaConfig,
}

/// Builder for constructing a `Clima` orchestrator with custom configuration.
pub struct ClimaBuilder {
    source: Option<Arc<dyn ClimateSource>>,
    tables: Option<Arc<dyn TableWriter>>,
    charts: Option<Arc<dyn ChartRenderer>>,
    cfg: ClimaConfig,
}

impl Default for ClimaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClimaBuilder {
    /// Create a new builder with the default configuration.
    ///
    /// Without further calls the orchestrator reads `Rawdata/` under the
    /// current directory, writes LaTeX tables and JSON chart descriptions, and
    /// uses the default periods, bins and thresholds of [`ClimaConfig`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            source: None,
            tables: None,
            charts: None,
            cfg: ClimaConfig::default(),
        }
    }

    /// Replace the whole configuration, e.g. one read with
    /// [`ClimaConfig::from_json_file`].
    #[must_use]
    pub fn config(mut self, cfg: ClimaConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Root directory under which inputs are read and outputs are written.
    #[must_use]
    pub fn base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cfg.base_dir = dir.into();
        self
    }

    /// Reading conventions of the anomaly table (only used by the file source).
    #[must_use]
    pub fn temperature_layout(mut self, layout: TemperatureLayout) -> Self {
        self.cfg.temperature_layout = layout;
        self
    }

    /// Reading conventions of the CO₂ sheet (only used by the file source).
    #[must_use]
    pub fn co2_layout(mut self, layout: Co2Layout) -> Self {
        self.cfg.co2_layout = layout;
        self
    }

    /// Month featured in the single-month chart and the CO₂ comparison.
    #[must_use]
    pub const fn featured_month(mut self, month: Month) -> Self {
        self.cfg.featured_month = month;
        self
    }

    /// The two periods compared in the frequency table and histograms.
    ///
    /// Quantiles are taken over the first, hot-year exceedance over the second.
    #[must_use]
    pub const fn comparison_periods(mut self, first: Period, second: Period) -> Self {
        self.cfg.comparison_periods = [first, second];
        self
    }

    /// Periods summarized in the seasonal mean/variance table.
    #[must_use]
    pub fn summary_periods(mut self, periods: Vec<Period>) -> Self {
        self.cfg.summary_periods = periods;
        self
    }

    /// Binning of annual anomalies.
    #[must_use]
    pub const fn bins(mut self, spec: BinSpec) -> Self {
        self.cfg.bins = spec;
        self
    }

    /// Quantile levels evaluated over the first comparison period.
    #[must_use]
    pub fn quantile_levels(mut self, levels: Vec<f64>) -> Self {
        self.cfg.quantile_levels = levels;
        self
    }

    /// Anomaly at or above which a year counts as hot.
    #[must_use]
    pub const fn hot_threshold(mut self, threshold: f64) -> Self {
        self.cfg.hot_threshold = threshold;
        self
    }

    /// CO₂ records before January 1st of `year` are discarded.
    #[must_use]
    pub const fn co2_cutoff_year(mut self, year: i32) -> Self {
        self.cfg.co2_cutoff_year = year;
        self
    }

    /// Resolution requested from the chart renderer.
    #[must_use]
    pub const fn chart_dpi(mut self, dpi: u32) -> Self {
        self.cfg.chart_dpi = dpi;
        self
    }

    /// Read the datasets from `source` instead of the configured files.
    #[must_use]
    pub fn with_source(mut self, source: Arc<dyn ClimateSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Write tables with `writer` instead of [`LatexTableWriter`].
    #[must_use]
    pub fn with_table_writer(mut self, writer: Arc<dyn TableWriter>) -> Self {
        self.tables = Some(writer);
        self
    }

    /// Render charts with `renderer` instead of [`ChartSpecWriter`].
    #[must_use]
    pub fn with_chart_renderer(mut self, renderer: Arc<dyn ChartRenderer>) -> Self {
        self.charts = Some(renderer);
        self
    }

    /// Build the `Clima` orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if any configured parameter is inconsistent (see
    /// [`ClimaConfig::validate`]).
    pub fn build(self) -> Result<Clima, ClimaError> {
        self.cfg.validate()?;
        let source = self
            .source
            .unwrap_or_else(|| Arc::new(FileSource::from_config(&self.cfg)));
        Ok(Clima {
            source,
            tables: self
                .tables
                .unwrap_or_else(|| Arc::new(LatexTableWriter::new())),
            charts: self
                .charts
                .unwrap_or_else(|| Arc::new(ChartSpecWriter::new())),
            cfg: self.cfg,
        })
    }
}

impl Clima {
    /// Start building a new `Clima` instance.
    ///
    /// ```rust,ignore
    /// use clima::{Clima, Month};
    ///
    /// let report = Clima::builder()
    ///     .base_dir("/data/taller3")
    ///     .featured_month(Month::March)
    ///     .build()?
    ///     .run()?;
    /// println!("r = {:.3}", report.correlation.r);
    /// ```
    #[must_use]
    pub fn builder() -> ClimaBuilder {
        ClimaBuilder::new()
    }

    /// The validated configuration this orchestrator runs with.
    #[must_use]
    pub const fn config(&self) -> &ClimaConfig {
        &self.cfg
    }

    /// Name of the data source in use.
    #[must_use]
    pub fn source_name(&self) -> &'static str {
        self.source.name()
    }
}
