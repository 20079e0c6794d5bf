use std::f64::consts::TAU;

use clima_core::{ClimaError, Co2Field, Co2Record, Co2Table};

use super::round2;

/// First measured month.
pub const FIRST_MONTH: (i32, u32) = (1958, 3);
/// Last year of the fixture sheet; every month is present.
pub const LAST_YEAR: i32 = 2024;
/// Provider marker for a month without an observed mean.
pub const SENTINEL: f64 = -99.99;
/// Months whose observed mean is [`SENTINEL`].
pub const GAPS: [(i32, u32); 5] = [(1958, 6), (1958, 10), (1964, 2), (1964, 3), (1964, 4)];

fn record(year: i32, month: u32) -> Result<Co2Record, ClimaError> {
    let t = f64::from(year - FIRST_MONTH.0) + f64::from(month - 1) / 12.0;
    let trend = 0.0125f64.mul_add(t * t, 0.8f64.mul_add(t, 314.5));
    let seasonal = 3.0 * (TAU * f64::from(month - 1) / 12.0 + 1.0).sin();
    let interpolated = round2(trend + seasonal);
    let average = if GAPS.contains(&(year, month)) {
        SENTINEL
    } else {
        interpolated
    };
    Ok(Co2Record::new(year, month)?
        .with(Co2Field::MonthlyAverage, average)
        .with(Co2Field::Interpolated, interpolated)
        .with(Co2Field::Trend, round2(trend)))
}

/// Monthly sheet from [`FIRST_MONTH`] through December of [`LAST_YEAR`].
///
/// Gaps keep the raw [`SENTINEL`] in the monthly average so the cleaning
/// step has something to remove.
///
/// # Errors
/// Never in practice; kept for the checked record constructors.
pub fn table() -> Result<Co2Table, ClimaError> {
    let records = (FIRST_MONTH.0..=LAST_YEAR)
        .flat_map(|y| (1..=12).map(move |m| (y, m)))
        .filter(|&key| key >= FIRST_MONTH)
        .map(|(y, m)| record(y, m))
        .collect::<Result<Vec<_>, _>>()?;
    Co2Table::from_records(records)
}
