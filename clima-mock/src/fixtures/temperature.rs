use clima_core::{ClimaError, Season, TemperatureField, TemperatureRecord, TemperatureTable};

use super::round2;

/// First year of the fixture table.
pub const FIRST_YEAR: i32 = 1880;
/// Last year of the fixture table; only partially observed.
pub const LAST_YEAR: i32 = 2024;
/// Months observed in [`LAST_YEAR`].
pub const PARTIAL_MONTHS: usize = 9;

/// Flat with a slow wobble until 1975, then warming by 0.02 °C per year.
fn trend(year: i32) -> f64 {
    let t = f64::from(year - FIRST_YEAR);
    let base = 0.1f64.mul_add((t / 7.0).sin(), -0.15);
    if year <= 1975 {
        base
    } else {
        0.02f64.mul_add(f64::from(year - 1975), base)
    }
}

/// Anomaly of month index `m` (0 = January) in `year`.
fn month_anomaly(year: i32, m: u8) -> f64 {
    let t = f64::from(year - FIRST_YEAR);
    round2(0.12f64.mul_add(0.9f64.mul_add(t, 0.7 * f64::from(m)).sin(), trend(year)))
}

fn mean(values: &[Option<f64>]) -> Option<f64> {
    let values: Vec<f64> = values.iter().copied().collect::<Option<_>>()?;
    #[allow(clippy::cast_precision_loss)]
    let n = values.len() as f64;
    Some(round2(values.iter().sum::<f64>() / n))
}

fn record(year: i32) -> TemperatureRecord {
    let observed = if year == LAST_YEAR { PARTIAL_MONTHS } else { 12 };
    let mut rec = TemperatureRecord::new(year);
    for (m, slot) in (0u8..).zip(rec.months.iter_mut()) {
        if usize::from(m) < observed {
            *slot = Some(month_anomaly(year, m));
        }
    }
    let prev_dec = (year > FIRST_YEAR).then(|| month_anomaly(year - 1, 11));
    let months = rec.months;

    rec.jan_dec = mean(&months);
    let mut dec_nov = vec![prev_dec];
    dec_nov.extend_from_slice(&months[..11]);
    rec.dec_nov = mean(&dec_nov);

    for season in Season::ALL {
        let cells = match season {
            Season::Djf => [prev_dec, months[0], months[1]],
            Season::Mam => [months[2], months[3], months[4]],
            Season::Jja => [months[5], months[6], months[7]],
            Season::Son => [months[8], months[9], months[10]],
        };
        rec.set(TemperatureField::Season(season), mean(&cells));
    }
    rec
}

/// Anomaly table for [`FIRST_YEAR`]..=[`LAST_YEAR`].
///
/// Like the real table, the first year has no December of the year before
/// (so `DJF` and `D-N` are missing) and the last year stops after September.
///
/// # Errors
/// Never in practice; kept for the checked table constructor.
pub fn table() -> Result<TemperatureTable, ClimaError> {
    TemperatureTable::from_records((FIRST_YEAR..=LAST_YEAR).map(record).collect())
}
