//! Sentinel removal, date restriction and year alignment.
//!
//! Cleaning never fabricates values: missing cells stay missing and no
//! interpolation happens here.

use chrono::{Month, NaiveDate};
use clima_types::{Co2Table, JoinedRow, JoinedSeries, TemperatureField, TemperatureTable};

const SENTINEL_TOLERANCE: f64 = 1e-9;

/// Whether `value` is the missing-value marker `sentinel`.
#[must_use]
pub fn is_sentinel(value: f64, sentinel: f64) -> bool {
    (value - sentinel).abs() < SENTINEL_TOLERANCE
}

/// Map a sentinel value to `None`; every other value passes through.
#[must_use]
pub fn nullify_sentinel(value: Option<f64>, sentinel: f64) -> Option<f64> {
    value.filter(|v| !is_sentinel(*v, sentinel))
}

/// Replace every sentinel measurement with `None`. Rows are never dropped.
#[must_use]
pub fn nullify_co2_sentinel(table: &Co2Table, sentinel: f64) -> Co2Table {
    table.map_values(|v| nullify_sentinel(v, sentinel))
}

/// Keep records dated on or after January 1st of `cutoff_year`.
#[must_use]
pub fn co2_since_year(table: &Co2Table, cutoff_year: i32) -> Co2Table {
    match NaiveDate::from_ymd_opt(cutoff_year, 1, 1) {
        Some(cutoff) => table.filter(|r| r.date >= cutoff),
        None => table.filter(|r| r.year >= cutoff_year),
    }
}

/// Keep a single calendar month of every year.
#[must_use]
pub fn co2_month_slice(table: &Co2Table, month: Month) -> Co2Table {
    table.filter(|r| r.month == month.number_from_month())
}

/// Inner-join the `month` slice of the CO₂ table with the anomaly table on year.
///
/// A row survives only if the anomaly of `field`, the CO₂ monthly average and
/// the CO₂ trend are all present.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "clima_core::clean::join_on_year",
        skip_all,
        fields(month = ?month, field = ?field),
    )
)]
#[must_use]
pub fn join_on_year(
    temperature: &TemperatureTable,
    co2: &Co2Table,
    month: Month,
    field: TemperatureField,
) -> JoinedSeries {
    let rows = co2_month_slice(co2, month)
        .records()
        .iter()
        .filter_map(|c| {
            let anomaly = temperature.get(c.year)?.get(field)?;
            Some(JoinedRow {
                year: c.year,
                anomaly,
                monthly_average: c.monthly_average?,
                trend: c.trend?,
            })
        })
        .collect();
    JoinedSeries { month, field, rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clima_types::{Co2Field, Co2Record};

    #[test]
    fn sentinel_match_tolerates_decimal_rounding() {
        assert!(is_sentinel(-99.99, -99.99));
        assert!(is_sentinel(-99.990_000_000_01, -99.99));
        assert!(!is_sentinel(-99.98, -99.99));
        assert_eq!(nullify_sentinel(Some(-99.99), -99.99), None);
        assert_eq!(nullify_sentinel(Some(315.7), -99.99), Some(315.7));
        assert_eq!(nullify_sentinel(None, -99.99), None);
    }

    #[test]
    fn since_year_is_inclusive_of_january() {
        let records = vec![
            Co2Record::new(1959, 12).unwrap(),
            Co2Record::new(1960, 1).unwrap(),
            Co2Record::new(1960, 2).unwrap(),
        ];
        let table = Co2Table::from_records(records).unwrap();
        let kept = co2_since_year(&table, 1960);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept.records()[0].month, 1);
    }

    #[test]
    fn nullify_keeps_every_row() {
        let records = vec![
            Co2Record::new(1974, 3)
                .unwrap()
                .with(Co2Field::MonthlyAverage, -99.99)
                .with(Co2Field::Trend, 330.0),
        ];
        let table = Co2Table::from_records(records).unwrap();
        let cleaned = nullify_co2_sentinel(&table, -99.99);
        assert_eq!(cleaned.len(), 1);
        assert_eq!(cleaned.records()[0].monthly_average, None);
        assert_eq!(cleaned.records()[0].trend, Some(330.0));
    }
}
