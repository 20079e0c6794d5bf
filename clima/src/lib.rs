//! Clima turns the GISTEMP anomaly table and the Mauna Loa CO₂ series into
//! the charts, tables and summary of a climate report.
//!
//! Overview
//! - Reads both datasets through a `ClimateSource` (files by default).
//! - Cleans, bins, summarizes and correlates them with `clima_core`.
//! - Hands tables to a `TableWriter` (LaTeX by default) and charts to a
//!   `ChartRenderer` (JSON chart descriptions by default).
//! - Writes a `report.json` run summary listing every output.
//!
//! Key behaviors
//! - The run is a fixed sequence of stages; the first failure aborts it and is
//!   returned as `ClimaError::Stage` naming the stage (see [`stages`]).
//! - Every output is written through a temporary file and renamed into place,
//!   so a failed run never leaves a truncated file behind.
//! - Bins are `(left, right]`; annual anomalies outside every bin are counted
//!   separately rather than dropped silently.
//! - Seasonal statistics use the sample variance and are rounded to three
//!   decimals; a cell with fewer than two values has no variance.
//!
//! Examples
//! Running the default report over a workspace directory:
//! ```rust,ignore
//! use clima::{Clima, Month};
//!
//! let report = Clima::builder()
//!     .base_dir("/data/taller3")
//!     .featured_month(Month::March)
//!     .hot_threshold(0.08)
//!     .build()?
//!     .run()?;
//! for path in &report.outputs {
//!     println!("wrote {}", path.display());
//! }
//! ```
//!
//! Plugging in another source:
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! let clima = clima::Clima::builder()
//!     .base_dir(tmp.path())
//!     .with_source(Arc::new(clima_mock::MockSource::new()))
//!     .build()?;
//! ```
//!
//! See the `clima-demos` crate for runnable end-to-end demonstrations.
#![warn(missing_docs)]

pub(crate) mod core;
/// Provided table and chart writers.
pub mod export;
mod pipeline;

pub use crate::core::{Clima, ClimaBuilder};
pub use export::{ChartSpecWriter, LatexTableWriter};
pub use pipeline::anomalies::{month_color, season_color};
pub use pipeline::co2::Co2Comparison;
pub use pipeline::extremes::Extremes;
pub use pipeline::frequencies::frequency_table;
pub use pipeline::seasons::summary_table;
pub use pipeline::stages;

// Re-export core types for convenience
pub use clima_core::{
    BinCount, BinInterval, BinSpec, Chart, ChartKind, ChartRenderer, ChartSeries, ClimaConfig,
    ClimaError, ClimateSource, Co2Field, Co2Layout, Co2Record, Co2Table, ColumnGroup,
    ComparisonRow, Correlation, Exceedance, FileSource, FrequencyComparison, FrequencyTable,
    JoinedRow, JoinedSeries, LoadReport, Loaded, Month, Period, QuantileValue, ReferenceLine,
    RunReport, Season, SummaryStats, SummaryTable, TableWriter, TemperatureField,
    TemperatureLayout, TemperatureRecord, TemperatureTable, TypesetTable,
};
