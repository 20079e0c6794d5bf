//! Readers for the anomaly table and the CO₂ sheet.
//!
//! Both readers locate their columns by header name once, then produce typed
//! records; nothing downstream addresses a column by string.
mod cell;
/// CO₂ sheet readers for spreadsheets and delimited text.
pub mod co2;
/// Delimited-text reader for the anomaly table.
pub mod temperature;

use clima_types::LoadReport;

/// A loaded table together with its load bookkeeping.
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded<T> {
    /// The typed table.
    pub table: T,
    /// Rows read, kept and dropped.
    pub report: LoadReport,
}

#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn warn_dropped(report: &LoadReport) {
    #[cfg(feature = "tracing")]
    if report.rows_dropped > 0 {
        tracing::warn!(
            dataset = %report.dataset,
            dropped = report.rows_dropped,
            kept = report.rows_kept,
            "dropped rows whose key is not an integer"
        );
    }
}
