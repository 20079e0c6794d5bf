use clima_core::{
    Chart, ChartKind, ChartSeries, ClimaError, Co2Field, Co2Table, Correlation, JoinedSeries,
    TemperatureField, TemperatureTable, co2_since_year, correlate_joined, join_on_year,
    nullify_co2_sentinel,
};

use super::Outputs;
use crate::Clima;

/// Featured-month anomaly joined with CO₂ and their correlation.
#[derive(Debug, Clone, PartialEq)]
pub struct Co2Comparison {
    /// The joined rows.
    pub joined: JoinedSeries,
    /// Number of joined rows.
    pub joined_rows: usize,
    /// Anomaly vs. CO₂ trend.
    pub correlation: Correlation,
}

fn decimal_year(year: i32, month: u32) -> f64 {
    f64::from(year) + f64::from(month.saturating_sub(1)) / 12.0
}

fn co2_line(table: &Co2Table, field: Co2Field, label: &str, color: &str) -> ChartSeries {
    ChartSeries {
        label: label.into(),
        color: color.into(),
        panel: 0,
        points: table
            .records()
            .iter()
            .filter_map(|r| r.get(field).map(|v| (decimal_year(r.year, r.month), v)))
            .collect(),
    }
}

impl Clima {
    /// Null the sentinel and drop records before the configured cutoff year.
    #[must_use]
    pub fn clean_co2(&self, co2: &Co2Table) -> Co2Table {
        co2_since_year(
            &nullify_co2_sentinel(co2, self.cfg.co2_layout.missing),
            self.cfg.co2_cutoff_year,
        )
    }

    /// Interpolated vs. trend CO₂ lines since the cutoff.
    #[must_use]
    pub fn co2_trend_spec(&self, cleaned: &Co2Table) -> Chart {
        Chart::new(
            "co2_interpolated_trend",
            format!(
                "CO₂ concentration at Mauna Loa ({}–present)",
                self.cfg.co2_cutoff_year
            ),
            ChartKind::Line,
        )
        .axes("Year", "CO₂ (ppm)")
        .with_series(co2_line(
            cleaned,
            Co2Field::Interpolated,
            "Interpolated (observed)",
            "gray",
        ))
        .with_series(co2_line(cleaned, Co2Field::Trend, "Trend (smoothed)", "red"))
    }

    /// Scatter of the featured-month anomaly (x) against the CO₂ trend (y).
    #[must_use]
    pub fn scatter_spec(&self, joined: &JoinedSeries) -> Chart {
        let month = joined.month.name();
        Chart::new(
            format!("co2_vs_{}_anomaly", month.to_lowercase()),
            format!("CO₂ (Mauna Loa, trend) vs. temperature anomaly in {month}"),
            ChartKind::Scatter,
        )
        .axes(format!("Temperature anomaly in {month} (°C)"), "CO₂ (ppm)")
        .with_series(ChartSeries {
            label: format!("{month} {}", joined.field.column()),
            color: "darkred".into(),
            panel: 0,
            points: joined.rows.iter().map(|r| (r.anomaly, r.trend)).collect(),
        })
    }

    /// Join the featured month of both tables on year and correlate anomaly with CO₂ trend.
    ///
    /// # Errors
    /// `ClimaError::InsufficientData` if fewer than two years join or either
    /// joined column is constant.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "clima::co2_correlation", skip_all)
    )]
    pub fn co2_correlation(
        &self,
        temperature: &TemperatureTable,
        cleaned: &Co2Table,
    ) -> Result<Co2Comparison, ClimaError> {
        let month = self.cfg.featured_month;
        let joined = join_on_year(temperature, cleaned, month, TemperatureField::Month(month));
        let correlation = correlate_joined(&joined)?;
        #[cfg(feature = "tracing")]
        tracing::info!(
            n = correlation.n,
            r = correlation.r,
            p_value = correlation.p_value,
            "pearson correlation"
        );
        Ok(Co2Comparison {
            joined_rows: joined.rows.len(),
            joined,
            correlation,
        })
    }

    pub(crate) fn co2_comparison(
        &self,
        temperature: &TemperatureTable,
        co2: &Co2Table,
        outputs: &mut Outputs,
    ) -> Result<Co2Comparison, ClimaError> {
        let cleaned = self.clean_co2(co2);
        self.emit_chart(self.co2_trend_spec(&cleaned), outputs)?;
        let comparison = self.co2_correlation(temperature, &cleaned)?;
        self.emit_chart(self.scatter_spec(&comparison.joined), outputs)?;
        Ok(comparison)
    }
}
