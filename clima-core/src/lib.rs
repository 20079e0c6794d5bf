//! clima-core
//!
//! Loading, cleaning and statistics shared across the clima workspace.
//!
//! - `types`: typed records, configuration and report envelopes.
//! - `load`: readers for the anomaly table and the CO₂ sheet.
//! - `clean`: sentinel removal, date cutoff and the year join.
//! - `aggregate`: frequency tables, grouped statistics and quantiles.
//! - `correlate`: Pearson correlation with its significance.
//! - `source` / `export`: the seams between the pipeline and the outside world.
//!
//! Every function here is synchronous and pure apart from the loaders, which
//! read files, so results are deterministic for a given input.
//!
#![warn(missing_docs)]

/// Grouped statistics, binning and quantiles.
pub mod aggregate;
/// Cleaning and joining of loaded tables.
pub mod clean;
/// Correlation and significance.
pub mod correlate;
/// Polars conversions for typed tables.
#[cfg(feature = "dataframe")]
pub mod dataframe;
/// Traits implemented by table writers and chart renderers.
pub mod export;
/// File readers for the raw datasets.
pub mod load;
/// The `ClimateSource` trait and its file-backed implementation.
pub mod source;
pub mod types;

pub use aggregate::bins::{column_frequencies, compare_frequencies, frequency_table};
pub use aggregate::quantile::{exceedance, quantile, quantiles};
pub use aggregate::summary::{describe, round_summary, summarize};
pub use clean::{co2_month_slice, co2_since_year, join_on_year, nullify_co2_sentinel};
pub use correlate::{correlate_joined, pearson};
pub use export::{ChartRenderer, TableWriter};
pub use load::Loaded;
pub use source::{ClimateSource, FileSource};
pub use types::*;
