//! Record shapes, configuration primitives and report envelopes shared across
//! the clima workspace.
#![warn(missing_docs)]

mod config;
mod error;
mod export;
mod records;
mod reports;

pub use config::{BinSpec, ClimaConfig, Co2Layout, Period, TemperatureLayout};
pub use error::ClimaError;
pub use export::{Chart, ChartKind, ChartSeries, ColumnGroup, ReferenceLine, TypesetTable};
pub use records::{
    Co2Field, Co2Record, Co2Table, JoinedRow, JoinedSeries, Season, TemperatureField,
    TemperatureRecord, TemperatureTable, month_column,
};
pub use reports::{
    BinCount, BinInterval, ComparisonRow, Correlation, Exceedance, FrequencyComparison,
    FrequencyTable, LoadReport, QuantileValue, RunReport, SummaryStats, SummaryTable,
};
