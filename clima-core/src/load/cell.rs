//! Cell-level parsing shared by the delimited-text and spreadsheet readers.

use clima_types::ClimaError;

/// A decoded cell, independent of the file format it came from.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Cell {
    Empty,
    Number(f64),
    Text(String),
}

impl Cell {
    pub(crate) fn from_text(raw: &str) -> Self {
        let t = raw.trim();
        if t.is_empty() {
            Self::Empty
        } else {
            Self::Text(t.to_string())
        }
    }

    pub(crate) fn from_data(d: &calamine::Data) -> Self {
        use calamine::Data;
        match d {
            Data::Empty | Data::Error(_) => Self::Empty,
            Data::Float(f) => Self::Number(*f),
            #[allow(clippy::cast_precision_loss)]
            Data::Int(i) => Self::Number(*i as f64),
            Data::String(s) => Self::from_text(s),
            other => Self::from_text(&other.to_string()),
        }
    }

    pub(crate) fn as_header(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Number(n) => n.to_string(),
            Self::Text(t) => t.clone(),
        }
    }
}

/// Parse an integer key (year or month); `None` when the cell is not integral.
pub(crate) fn parse_int(cell: &Cell) -> Option<i64> {
    match cell {
        Cell::Empty => None,
        Cell::Number(n) => integral(*n),
        Cell::Text(t) => t
            .parse::<i64>()
            .ok()
            .or_else(|| t.parse::<f64>().ok().and_then(integral)),
    }
}

#[allow(clippy::cast_possible_truncation)]
fn integral(n: f64) -> Option<i64> {
    (n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15).then(|| n as i64)
}

/// Parse a measurement cell, mapping empty and sentinel cells to `None`.
///
/// Returns the offending text when the cell is neither a finite number nor missing.
pub(crate) fn parse_value<F>(cell: &Cell, is_missing_text: F) -> Result<Option<f64>, String>
where
    F: Fn(&str) -> bool,
{
    match cell {
        Cell::Empty => Ok(None),
        Cell::Number(n) if n.is_finite() => Ok(Some(*n)),
        Cell::Number(n) => Err(n.to_string()),
        Cell::Text(t) if is_missing_text(t) => Ok(None),
        Cell::Text(t) => t
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(Some)
            .ok_or_else(|| t.clone()),
    }
}

/// Position of `name` among the header cells.
pub(crate) fn column_index(
    headers: &[String],
    name: &str,
    dataset: &str,
) -> Result<usize, ClimaError> {
    headers
        .iter()
        .position(|h| h.trim() == name)
        .ok_or_else(|| ClimaError::schema(dataset, name))
}
