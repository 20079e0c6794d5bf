use std::path::Path;

use calamine::{Reader, open_workbook_auto};
use clima_types::{ClimaError, Co2Field, Co2Layout, Co2Record, Co2Table, LoadReport};

use super::Loaded;
use super::cell::{Cell, column_index, parse_int, parse_value};
use crate::clean::nullify_sentinel;

const DATASET: &str = "co2";

/// Load the CO₂ sheet, choosing the reader from the file extension.
///
/// `.csv`/`.txt` files go through [`load_co2_csv`]; anything else is opened
/// as a spreadsheet with [`load_co2_workbook`].
///
/// # Errors
/// See [`load_co2_workbook`] and [`load_co2_csv`].
pub fn load_co2(path: &Path, layout: &Co2Layout) -> Result<Loaded<Co2Table>, ClimaError> {
    let delimited = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv") || e.eq_ignore_ascii_case("txt"));
    if delimited {
        load_co2_csv(path, layout)
    } else {
        load_co2_workbook(path, layout)
    }
}

/// Load the CO₂ sheet from a spreadsheet (`.xlsx`, `.xls`, `.ods`).
///
/// # Errors
/// - `ClimaError::Io` if the file does not exist.
/// - `ClimaError::Decode` if the workbook or sheet cannot be decoded.
/// - `ClimaError::Schema` if a required column is absent.
/// - `ClimaError::Data` for invalid months, non-finite values or duplicate keys.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "clima_core::load::co2_workbook",
        skip_all,
        fields(path = %path.display()),
    )
)]
pub fn load_co2_workbook(path: &Path, layout: &Co2Layout) -> Result<Loaded<Co2Table>, ClimaError> {
    std::fs::metadata(path).map_err(|e| ClimaError::io(path, &e))?;
    let mut workbook =
        open_workbook_auto(path).map_err(|e| ClimaError::decode("spreadsheet", e.to_string()))?;
    let range = match &layout.sheet {
        Some(name) => workbook.worksheet_range(name),
        None => workbook
            .worksheet_range_at(0)
            .ok_or_else(|| ClimaError::Data("workbook has no worksheets".into()))?,
    }
    .map_err(|e| ClimaError::decode("spreadsheet", e.to_string()))?;

    let rows = range
        .rows()
        .map(|r| Ok::<_, ClimaError>(r.iter().map(Cell::from_data).collect::<Vec<_>>()));
    assemble(rows, layout)
}

/// Load the CO₂ sheet from a delimited-text export; `#` lines are comments.
///
/// # Errors
/// Same as [`load_co2_workbook`], with `ClimaError::Decode` for malformed CSV.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "clima_core::load::co2_csv",
        skip_all,
        fields(path = %path.display()),
    )
)]
pub fn load_co2_csv(path: &Path, layout: &Co2Layout) -> Result<Loaded<Co2Table>, ClimaError> {
    let file = std::fs::File::open(path).map_err(|e| ClimaError::io(path, &e))?;
    read_co2_csv(file, layout)
}

/// Parse a delimited-text CO₂ sheet from any reader.
///
/// # Errors
/// See [`load_co2_csv`].
pub fn read_co2_csv<R: std::io::Read>(
    reader: R,
    layout: &Co2Layout,
) -> Result<Loaded<Co2Table>, ClimaError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .from_reader(reader);
    let rows = rdr.records().map(|r| {
        r.map(|rec| rec.iter().map(Cell::from_text).collect::<Vec<_>>())
            .map_err(|e| ClimaError::decode("csv", e.to_string()))
    });
    assemble(rows, layout)
}

fn assemble<I>(rows: I, layout: &Co2Layout) -> Result<Loaded<Co2Table>, ClimaError>
where
    I: Iterator<Item = Result<Vec<Cell>, ClimaError>>,
{
    let mut rows = rows.skip(layout.header_skip);
    let headers: Vec<String> = rows
        .next()
        .transpose()?
        .ok_or_else(|| ClimaError::schema(DATASET, layout.year_column.as_str()))?
        .iter()
        .map(Cell::as_header)
        .collect();

    let year_idx = column_index(&headers, &layout.year_column, DATASET)?;
    let month_idx = column_index(&headers, &layout.month_column, DATASET)?;
    let fields = Co2Field::ALL
        .into_iter()
        .map(|f| column_index(&headers, f.column(), DATASET).map(|i| (f, i)))
        .collect::<Result<Vec<_>, _>>()?;

    let sentinel_text = layout.missing.to_string();
    let mut report = LoadReport::new(DATASET);
    let mut records = Vec::new();
    for row in rows {
        let row = row?;
        report.rows_read += 1;
        let cell = |i: usize| row.get(i).cloned().unwrap_or(Cell::Empty);

        let key = parse_int(&cell(year_idx))
            .and_then(|y| i32::try_from(y).ok())
            .zip(parse_int(&cell(month_idx)).and_then(|m| u32::try_from(m).ok()));
        let Some((year, month)) = key else {
            report.rows_dropped += 1;
            continue;
        };

        let mut record = Co2Record::new(year, month)?;
        for &(field, idx) in &fields {
            let value = parse_value(&cell(idx), |t| t == sentinel_text).map_err(|bad| {
                ClimaError::Data(format!(
                    "co2 {year}-{month:02}: column '{}' holds non-numeric or non-finite value '{bad}'",
                    field.column()
                ))
            })?;
            record.set(field, nullify_sentinel(value, layout.missing));
        }
        records.push(record);
    }
    report.rows_kept = records.len();
    super::warn_dropped(&report);

    Ok(Loaded {
        table: Co2Table::from_records(records)?,
        report,
    })
}
