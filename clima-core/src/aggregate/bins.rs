use clima_types::{
    BinCount, BinInterval, BinSpec, ClimaError, ComparisonRow, FrequencyComparison,
    FrequencyTable, Period, TemperatureField, TemperatureTable,
};

/// Count `values` into the `(left, right]` bins described by `spec`.
///
/// Values at or below the first edge, or above the last, are counted in
/// `out_of_range`, so the per-bin counts plus `out_of_range` always equal
/// `values.len()`. Every bin is present in the output, including empty ones.
///
/// # Errors
/// - `ClimaError::InvalidArg` if `spec` is invalid or a value is NaN.
pub fn frequency_table(
    period: Period,
    values: &[f64],
    spec: &BinSpec,
) -> Result<FrequencyTable, ClimaError> {
    let edges = spec.edges()?;
    let mut bins: Vec<BinCount> = edges
        .windows(2)
        .map(|w| BinCount {
            interval: BinInterval {
                left: w[0],
                right: w[1],
            },
            count: 0,
        })
        .collect();

    let mut out_of_range = 0usize;
    for &v in values {
        if v.is_nan() {
            return Err(ClimaError::InvalidArg(format!(
                "NaN observation in period {period}"
            )));
        }
        // first edge >= v; the bin to its left holds v
        let i = edges.partition_point(|e| *e < v);
        if i == 0 || i > bins.len() {
            out_of_range += 1;
        } else {
            bins[i - 1].count += 1;
        }
    }

    Ok(FrequencyTable {
        period,
        spec: *spec,
        bins,
        out_of_range,
        observations: values.len(),
    })
}

/// Frequency table of one anomaly column over `period`, nulls dropped.
///
/// # Errors
/// See [`frequency_table`].
pub fn column_frequencies(
    table: &TemperatureTable,
    period: Period,
    field: TemperatureField,
    spec: &BinSpec,
) -> Result<FrequencyTable, ClimaError> {
    frequency_table(period, &table.values_in(&period, field), spec)
}

/// Join frequency tables by bin into one comparison table.
///
/// # Errors
/// - `ClimaError::InvalidArg` if `tables` is empty or the tables were built
///   with different bin specs.
pub fn compare_frequencies(tables: &[FrequencyTable]) -> Result<FrequencyComparison, ClimaError> {
    let Some(first) = tables.first() else {
        return Err(ClimaError::InvalidArg(
            "no frequency tables to compare".into(),
        ));
    };
    if let Some(other) = tables.iter().find(|t| t.spec != first.spec) {
        return Err(ClimaError::InvalidArg(format!(
            "bin spec of {} differs from {}",
            other.period, first.period
        )));
    }

    let rows = first
        .bins
        .iter()
        .enumerate()
        .map(|(i, b)| ComparisonRow {
            interval: b.interval,
            counts: tables.iter().map(|t| t.bins[i].count).collect(),
        })
        .collect();

    Ok(FrequencyComparison {
        periods: tables.iter().map(|t| t.period).collect(),
        spec: first.spec,
        rows,
    })
}
