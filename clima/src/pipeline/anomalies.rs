use clima_core::{
    Chart, ChartKind, ChartSeries, ClimaError, Month, Season, TemperatureField, TemperatureTable,
};

use super::Outputs;
use crate::Clima;

const BASELINE_LABEL: &str = "1951–1980 average";
const ANOMALY_AXIS: &str = "Temperature anomaly (°C)";

/// Line color of a month's series.
#[must_use]
pub const fn month_color(month: Month) -> &'static str {
    match month {
        Month::January => "red",
        Month::February => "orange",
        Month::March => "gold",
        Month::April => "green",
        Month::May => "lime",
        Month::June => "cyan",
        Month::July => "blue",
        Month::August => "navy",
        Month::September => "purple",
        Month::October => "magenta",
        Month::November => "brown",
        Month::December => "black",
    }
}

/// Line color of a season's series.
#[must_use]
pub const fn season_color(season: Season) -> &'static str {
    match season {
        Season::Djf => "red",
        Season::Mam => "green",
        Season::Jja => "orange",
        Season::Son => "purple",
    }
}

fn line(label: impl Into<String>, color: &str, series: &[(i32, f64)]) -> ChartSeries {
    ChartSeries {
        label: label.into(),
        color: color.to_string(),
        panel: 0,
        points: series.iter().map(|&(y, v)| (f64::from(y), v)).collect(),
    }
}

fn non_empty(
    table: &TemperatureTable,
    field: TemperatureField,
) -> Result<Vec<(i32, f64)>, ClimaError> {
    let series = table.series(field);
    if series.is_empty() {
        return Err(ClimaError::insufficient(
            "anomaly chart",
            format!("column '{}' has no values", field.column()),
        ));
    }
    Ok(series)
}

impl Clima {
    /// Build the featured-month, seasonal and annual anomaly line charts.
    ///
    /// Every chart carries a dashed zero line marking the baseline average.
    ///
    /// # Errors
    /// `ClimaError::InsufficientData` if a charted column has no values.
    pub fn anomaly_chart_specs(&self, table: &TemperatureTable) -> Result<Vec<Chart>, ClimaError> {
        let month = self.cfg.featured_month;
        let monthly = non_empty(table, TemperatureField::Month(month))?;
        let (first, last) = (monthly[0].0, monthly[monthly.len() - 1].0);
        let featured = Chart::new(
            format!("anomaly_{}", month.name().to_lowercase()),
            format!("Temperature anomaly in {} ({first}–{last})", month.name()),
            ChartKind::Line,
        )
        .axes("Year", ANOMALY_AXIS)
        .with_series(line(month.name(), month_color(month), &monthly))
        .with_reference(0.0, BASELINE_LABEL);

        let mut seasonal = Chart::new(
            "seasonal_anomalies",
            "Average anomaly per season",
            ChartKind::Line,
        )
        .axes("Year", ANOMALY_AXIS)
        .with_reference(0.0, BASELINE_LABEL);
        for season in Season::ALL {
            let field = TemperatureField::Season(season);
            seasonal = seasonal.with_series(line(
                field.column(),
                season_color(season),
                &non_empty(table, field)?,
            ));
        }

        let annual = Chart::new(
            "annual_anomalies",
            "Average annual anomaly (J-D)",
            ChartKind::Line,
        )
        .axes("Year", ANOMALY_AXIS)
        .with_series(line(
            "Annual average (J-D)",
            "black",
            &non_empty(table, TemperatureField::JanDec)?,
        ))
        .with_reference(0.0, BASELINE_LABEL);

        Ok(vec![featured, seasonal, annual])
    }

    pub(crate) fn anomaly_charts(
        &self,
        table: &TemperatureTable,
        outputs: &mut Outputs,
    ) -> Result<(), ClimaError> {
        for chart in self.anomaly_chart_specs(table)? {
            self.emit_chart(chart, outputs)?;
        }
        Ok(())
    }
}
