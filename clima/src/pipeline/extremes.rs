use clima_core::{
    ClimaError, Exceedance, Period, QuantileValue, TemperatureField, TemperatureTable, exceedance,
    quantiles,
};

/// Quantiles of the first comparison period and hot years of the second.
#[derive(Debug, Clone, PartialEq)]
pub struct Extremes {
    /// Period the quantiles were taken over.
    pub quantile_period: Period,
    /// Configured quantile levels of the annual anomaly.
    pub quantiles: Vec<QuantileValue>,
    /// Period the exceedance was counted over.
    pub exceedance_period: Period,
    /// Years at or above the hot threshold.
    pub exceedance: Exceedance,
}

impl crate::Clima {
    /// Quantiles of the annual anomaly over the first comparison period and
    /// the hot-year count over the second.
    ///
    /// # Errors
    /// `ClimaError::InsufficientData` if either period holds no annual values.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "clima::extremes", skip_all)
    )]
    pub fn extremes(&self, table: &TemperatureTable) -> Result<Extremes, ClimaError> {
        let [quantile_period, exceedance_period] = self.cfg.comparison_periods;
        let quantiles = quantiles(
            &table.values_in(&quantile_period, TemperatureField::JanDec),
            &self.cfg.quantile_levels,
        )?;
        let exceedance = exceedance(
            &table.values_in(&exceedance_period, TemperatureField::JanDec),
            self.cfg.hot_threshold,
        )?;
        #[cfg(feature = "tracing")]
        tracing::info!(
            hot = exceedance.count,
            total = exceedance.total,
            percentage = exceedance.percentage,
            "hot years"
        );
        Ok(Extremes {
            quantile_period,
            quantiles,
            exceedance_period,
            exceedance,
        })
    }
}
