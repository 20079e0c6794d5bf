use clima_types::{Period, SummaryStats, SummaryTable, TemperatureField, TemperatureTable};

use super::algorithm::welford_online;

/// Count, mean and sample variance of `values`.
///
/// `mean` is `None` for an empty slice and `variance` is `None` with fewer
/// than two values.
#[must_use]
pub fn describe(values: &[f64]) -> SummaryStats {
    let mut mean = 0.0;
    let mut m = 0.0;
    for (i, &v) in values.iter().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let count = (i + 1) as f64;
        let new_mean = welford_online::calculate_mean(mean, v, count);
        m = welford_online::calculate_recurrence_relation_m(m, mean, v, new_mean);
        mean = new_mean;
    }

    let n = values.len();
    #[allow(clippy::cast_precision_loss)]
    let variance = (n >= 2).then(|| welford_online::calculate_sample_variance(m, n as f64));
    SummaryStats {
        count: n,
        mean: (n >= 1).then_some(mean),
        variance,
    }
}

/// Per-period, per-category statistics of the anomaly table.
///
/// Periods are independent and may overlap; each cell only sees the non-null
/// values of its category inside its period.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "clima_core::aggregate::summarize",
        skip_all,
        fields(periods = periods.len(), categories = categories.len()),
    )
)]
#[must_use]
pub fn summarize(
    table: &TemperatureTable,
    periods: &[Period],
    categories: &[TemperatureField],
) -> SummaryTable {
    let cells = periods
        .iter()
        .map(|p| {
            categories
                .iter()
                .map(|&c| describe(&table.values_in(p, c)))
                .collect()
        })
        .collect();
    SummaryTable {
        periods: periods.to_vec(),
        categories: categories.to_vec(),
        cells,
    }
}

/// Copy of `table` with every cell rounded to `digits` decimals for presentation.
#[must_use]
pub fn round_summary(table: &SummaryTable, digits: i32) -> SummaryTable {
    SummaryTable {
        periods: table.periods.clone(),
        categories: table.categories.clone(),
        cells: table
            .cells
            .iter()
            .map(|row| row.iter().map(|s| s.rounded(digits)).collect())
            .collect(),
    }
}
