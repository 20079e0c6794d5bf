pub mod anomalies;
pub mod co2;
pub mod extremes;
pub mod frequencies;
pub mod report;
pub mod seasons;

use std::path::PathBuf;

use clima_core::{Chart, ClimaError, RunReport, TypesetTable};

use crate::Clima;

/// Stage labels attached to errors raised during [`Clima::run`].
pub mod stages {
    /// Creating the output directories.
    pub const PREPARE: &str = "prepare";
    /// Loading the anomaly table.
    pub const LOAD_TEMPERATURE: &str = "load-temperature";
    /// Loading the CO₂ sheet.
    pub const LOAD_CO2: &str = "load-co2";
    /// Monthly, seasonal and annual anomaly charts.
    pub const ANOMALY_CHARTS: &str = "anomaly-charts";
    /// Frequency comparison table and histograms.
    pub const FREQUENCIES: &str = "frequencies";
    /// Quantiles and hot-year exceedance.
    pub const EXTREMES: &str = "extremes";
    /// Seasonal mean/variance table.
    pub const SEASONS: &str = "seasonal-summary";
    /// CO₂ cleaning, charts, join and correlation.
    pub const CO2: &str = "co2-correlation";
    /// Writing the JSON run summary.
    pub const REPORT: &str = "report";
}

/// Run `f`, tagging any error with `stage`.
pub(crate) fn stage<T>(
    name: &'static str,
    f: impl FnOnce() -> Result<T, ClimaError>,
) -> Result<T, ClimaError> {
    #[cfg(feature = "tracing")]
    let _span = tracing::info_span!("clima::stage", stage = name).entered();
    f().map_err(|e| {
        #[cfg(feature = "tracing")]
        tracing::error!(stage = name, error = %e, "stage failed");
        e.in_stage(name)
    })
}

/// Paths written so far, in order.
#[derive(Debug, Default)]
pub(crate) struct Outputs(Vec<PathBuf>);

impl Outputs {
    pub(crate) fn push(&mut self, path: PathBuf) {
        #[cfg(feature = "tracing")]
        tracing::info!(path = %path.display(), "wrote output");
        self.0.push(path);
    }

    pub(crate) fn into_inner(self) -> Vec<PathBuf> {
        self.0
    }
}

impl Clima {
    /// Run the whole analysis once and write every table, chart and the run summary.
    ///
    /// Stages execute in a fixed order: prepare output directories, load both
    /// datasets, anomaly charts, frequency comparison, quantiles and
    /// exceedance, seasonal summary, CO₂ correlation, run summary. The first
    /// failure aborts the run; nothing is retried.
    ///
    /// # Errors
    /// Returns `ClimaError::Stage` wrapping the first failure together with
    /// the label of the stage that raised it (see [`stages`]).
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "clima::run",
            skip_all,
            fields(source = self.source.name(), base_dir = %self.cfg.base_dir.display()),
        )
    )]
    pub fn run(&self) -> Result<RunReport, ClimaError> {
        let mut outputs = Outputs::default();

        stage(stages::PREPARE, || self.prepare_dirs())?;
        let temperature = stage(stages::LOAD_TEMPERATURE, || self.source.temperature())?;
        let co2 = stage(stages::LOAD_CO2, || self.source.co2())?;
        let temps = &temperature.table;

        stage(stages::ANOMALY_CHARTS, || {
            self.anomaly_charts(temps, &mut outputs)
        })?;
        let frequencies = stage(stages::FREQUENCIES, || {
            self.frequency_comparison(temps, &mut outputs)
        })?;
        let extremes = stage(stages::EXTREMES, || self.extremes(temps))?;
        let summary = stage(stages::SEASONS, || {
            self.seasonal_summary(temps, &mut outputs)
        })?;
        let comparison = stage(stages::CO2, || {
            self.co2_comparison(temps, &co2.table, &mut outputs)
        })?;

        let mut report = RunReport {
            temperature: temperature.report,
            co2: co2.report,
            featured_month: self.cfg.featured_month,
            frequencies,
            quantile_period: extremes.quantile_period,
            quantiles: extremes.quantiles,
            exceedance_period: extremes.exceedance_period,
            exceedance: extremes.exceedance,
            summary,
            joined_rows: comparison.joined_rows,
            correlation: comparison.correlation,
            outputs: Vec::new(),
        };
        stage(stages::REPORT, || self.write_report(&mut report, outputs))?;
        Ok(report)
    }

    fn prepare_dirs(&self) -> Result<(), ClimaError> {
        for dir in [self.cfg.figures_dir(), self.cfg.tables_dir()] {
            std::fs::create_dir_all(&dir).map_err(|e| ClimaError::io(&dir, &e))?;
        }
        Ok(())
    }

    pub(crate) fn emit_chart(&self, chart: Chart, outputs: &mut Outputs) -> Result<(), ClimaError> {
        let chart = chart.with_dpi(self.cfg.chart_dpi);
        let path = self.charts.path_in(&self.cfg.figures_dir(), &chart);
        self.charts.render(&chart, &path)?;
        outputs.push(path);
        Ok(())
    }

    pub(crate) fn emit_table(
        &self,
        table: &TypesetTable,
        outputs: &mut Outputs,
    ) -> Result<(), ClimaError> {
        let path = self.tables.path_in(&self.cfg.tables_dir(), table);
        self.tables.write_table(table, &path)?;
        outputs.push(path);
        Ok(())
    }
}
