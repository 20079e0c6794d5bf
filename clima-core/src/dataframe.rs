//! Conversion of typed tables into polars `DataFrame`s.

use clima_types::{ClimaError, Co2Field, Co2Table, JoinedSeries, TemperatureField, TemperatureTable};
use polars::prelude::{Column, DataFrame, PolarsError};

/// Types that can be represented as a polars `DataFrame`.
pub trait ToDataFrame {
    /// Build a `DataFrame` with one row per record.
    ///
    /// # Errors
    /// `ClimaError::Data` if polars rejects the columns.
    fn to_dataframe(&self) -> Result<DataFrame, ClimaError>;
}

fn polars_err(e: PolarsError) -> ClimaError {
    ClimaError::Data(format!("dataframe: {e}"))
}

impl ToDataFrame for TemperatureTable {
    fn to_dataframe(&self) -> Result<DataFrame, ClimaError> {
        let years: Vec<i32> = self.records().iter().map(|r| r.year).collect();
        let mut columns = vec![Column::new("Year".into(), years)];
        for field in TemperatureField::all() {
            let values: Vec<Option<f64>> = self.records().iter().map(|r| r.get(field)).collect();
            columns.push(Column::new(field.column().into(), values));
        }
        DataFrame::new(columns).map_err(polars_err)
    }
}

impl ToDataFrame for Co2Table {
    fn to_dataframe(&self) -> Result<DataFrame, ClimaError> {
        let records = self.records();
        let mut columns = vec![
            Column::new("Year".into(), records.iter().map(|r| r.year).collect::<Vec<_>>()),
            Column::new(
                "Month".into(),
                records.iter().map(|r| r.month).collect::<Vec<_>>(),
            ),
        ];
        for field in Co2Field::ALL {
            let values: Vec<Option<f64>> = records.iter().map(|r| r.get(field)).collect();
            columns.push(Column::new(field.column().into(), values));
        }
        DataFrame::new(columns).map_err(polars_err)
    }
}

impl ToDataFrame for JoinedSeries {
    fn to_dataframe(&self) -> Result<DataFrame, ClimaError> {
        DataFrame::new(vec![
            Column::new("Year".into(), self.years()),
            Column::new(self.field.column().into(), self.anomalies()),
            Column::new(
                Co2Field::MonthlyAverage.column().into(),
                self.monthly_averages(),
            ),
            Column::new(Co2Field::Trend.column().into(), self.trends()),
        ])
        .map_err(polars_err)
    }
}
