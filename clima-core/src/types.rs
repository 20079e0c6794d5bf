//! Re-export of foundational types from `clima-types`.
// Consolidated re-exports so downstream crates can depend on `clima-core` only

pub use clima_types::{BinSpec, ClimaConfig, Co2Layout, Period, TemperatureLayout};
pub use clima_types::ClimaError;

pub use clima_types::{
    Co2Field, Co2Record, Co2Table, JoinedRow, JoinedSeries, Season, TemperatureField,
    TemperatureRecord, TemperatureTable, month_column,
};

pub use clima_types::{
    BinCount, BinInterval, ComparisonRow, Correlation, Exceedance, FrequencyComparison,
    FrequencyTable, LoadReport, QuantileValue, RunReport, SummaryStats, SummaryTable,
};

pub use clima_types::{Chart, ChartKind, ChartSeries, ColumnGroup, ReferenceLine, TypesetTable};

pub use chrono::Month;

// Optional: re-export the DataFrame conversion trait when the feature is enabled
#[cfg(feature = "dataframe")]
pub use crate::dataframe::ToDataFrame;
