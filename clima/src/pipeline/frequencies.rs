use clima_core::{
    Chart, ChartKind, ChartSeries, ClimaError, FrequencyComparison, TemperatureField,
    TemperatureTable, TypesetTable, column_frequencies, compare_frequencies,
};

use super::Outputs;
use crate::Clima;

const PANEL_COLORS: [&str; 2] = ["skyblue", "salmon"];

/// Typeset the comparison with one row per bin and one column per period.
#[must_use]
pub fn frequency_table(cmp: &FrequencyComparison) -> TypesetTable {
    let periods: Vec<String> = cmp.periods.iter().map(ToString::to_string).collect();
    TypesetTable {
        name: "frequencies".into(),
        caption: format!(
            "Frequencies of annual temperature anomalies in the compared periods ({}).",
            periods.join(", ")
        ),
        label: "tab:frequencies".into(),
        index_header: "Anomaly (°C)".into(),
        groups: Vec::new(),
        columns: periods,
        rows: cmp
            .rows
            .iter()
            .map(|r| {
                (
                    r.interval.label(),
                    r.counts.iter().map(ToString::to_string).collect(),
                )
            })
            .collect(),
    }
}

impl Clima {
    /// Bin the annual anomaly of both comparison periods and join by bin.
    ///
    /// # Errors
    /// `ClimaError::InvalidArg` for an invalid bin spec or NaN observations.
    pub fn frequencies(&self, table: &TemperatureTable) -> Result<FrequencyComparison, ClimaError> {
        let tables = self
            .cfg
            .comparison_periods
            .iter()
            .map(|p| column_frequencies(table, *p, TemperatureField::JanDec, &self.cfg.bins))
            .collect::<Result<Vec<_>, _>>()?;
        #[cfg(feature = "tracing")]
        for t in tables.iter().filter(|t| t.out_of_range > 0) {
            tracing::warn!(
                period = %t.period,
                out_of_range = t.out_of_range,
                "annual anomalies outside every bin"
            );
        }
        compare_frequencies(&tables)
    }

    /// Side-by-side histograms of the annual anomaly, one panel per period.
    ///
    /// # Errors
    /// `ClimaError::InvalidArg` for an invalid bin spec.
    pub fn histogram_spec(&self, table: &TemperatureTable) -> Result<Chart, ClimaError> {
        let mut chart = Chart::new(
            "period_histograms",
            "Distribution of annual anomalies",
            ChartKind::Histogram,
        )
        .axes("Temperature anomaly (°C)", "Frequency");
        chart.edges = self.cfg.bins.edges()?;
        for (panel, (period, color)) in self
            .cfg
            .comparison_periods
            .iter()
            .zip(PANEL_COLORS)
            .enumerate()
        {
            chart.panels.push(format!("Distribution of anomalies ({period})"));
            chart = chart.with_series(ChartSeries {
                label: period.label(),
                color: color.to_string(),
                panel,
                points: table
                    .values_in(period, TemperatureField::JanDec)
                    .into_iter()
                    .map(|v| (v, 0.0))
                    .collect(),
            });
        }
        Ok(chart)
    }

    pub(crate) fn frequency_comparison(
        &self,
        table: &TemperatureTable,
        outputs: &mut Outputs,
    ) -> Result<FrequencyComparison, ClimaError> {
        let cmp = self.frequencies(table)?;
        self.emit_table(&frequency_table(&cmp), outputs)?;
        self.emit_chart(self.histogram_spec(table)?, outputs)?;
        Ok(cmp)
    }
}
