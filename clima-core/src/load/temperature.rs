use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use clima_types::{
    ClimaError, LoadReport, TemperatureField, TemperatureLayout, TemperatureRecord,
    TemperatureTable,
};

use super::Loaded;
use super::cell::{Cell, column_index, parse_int, parse_value};

const DATASET: &str = "temperature";

/// Load the delimited-text anomaly table from `path`.
///
/// # Errors
/// - `ClimaError::Io` if the file cannot be opened or read.
/// - `ClimaError::Schema` if the key column or any anomaly column is absent.
/// - `ClimaError::Data` for a non-numeric or non-finite value cell or a duplicate year.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "clima_core::load::temperature",
        skip_all,
        fields(path = %path.display()),
    )
)]
pub fn load_temperature_csv(
    path: &Path,
    layout: &TemperatureLayout,
) -> Result<Loaded<TemperatureTable>, ClimaError> {
    let file = File::open(path).map_err(|e| ClimaError::io(path, &e))?;
    read_temperature(BufReader::new(file), layout).map_err(|e| match e {
        ClimaError::Io { msg, .. } => ClimaError::Io {
            path: path.display().to_string(),
            msg,
        },
        other => other,
    })
}

/// Parse the anomaly table from any buffered reader.
///
/// The first `layout.header_skip` lines are discarded, the next line is the
/// header. Rows whose key does not parse as an integer year (e.g. trailing
/// notes) are dropped and counted in the report.
///
/// # Errors
/// See [`load_temperature_csv`].
pub fn read_temperature<R: BufRead>(
    mut reader: R,
    layout: &TemperatureLayout,
) -> Result<Loaded<TemperatureTable>, ClimaError> {
    let mut discard = String::new();
    for _ in 0..layout.header_skip {
        discard.clear();
        reader.read_line(&mut discard).map_err(|e| ClimaError::Io {
            path: DATASET.into(),
            msg: e.to_string(),
        })?;
    }

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = rdr
        .headers()
        .map_err(|e| ClimaError::decode("csv", e.to_string()))?
        .iter()
        .map(str::to_string)
        .collect();
    let key = column_index(&headers, &layout.key_column, DATASET)?;
    let columns = TemperatureField::all()
        .into_iter()
        .map(|f| column_index(&headers, f.column(), DATASET).map(|i| (f, i)))
        .collect::<Result<Vec<_>, _>>()?;

    let mut report = LoadReport::new(DATASET);
    let mut records = Vec::new();
    for row in rdr.records() {
        let row = row.map_err(|e| ClimaError::decode("csv", e.to_string()))?;
        report.rows_read += 1;
        let cell = |i: usize| Cell::from_text(row.get(i).unwrap_or(""));

        let Some(year) = parse_int(&cell(key)).and_then(|y| i32::try_from(y).ok()) else {
            report.rows_dropped += 1;
            continue;
        };

        let mut record = TemperatureRecord::new(year);
        for &(field, idx) in &columns {
            let value = parse_value(&cell(idx), |t| t == layout.missing).map_err(|bad| {
                let line = row.position().map_or(0, |p| p.line()) + layout.header_skip as u64;
                ClimaError::Data(format!(
                    "temperature line {line}: column '{}' holds non-numeric or non-finite value '{bad}'",
                    field.column()
                ))
            })?;
            record.set(field, value);
        }
        records.push(record);
    }
    report.rows_kept = records.len();
    super::warn_dropped(&report);

    Ok(Loaded {
        table: TemperatureTable::from_records(records)?,
        report,
    })
}
