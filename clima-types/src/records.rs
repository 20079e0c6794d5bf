//! Statically declared record shapes for the two source datasets.

use chrono::{Datelike, Month, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::config::Period;
use crate::error::ClimaError;

const MONTH_COLUMNS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Three-letter column label used by the anomaly table for a calendar month.
#[must_use]
pub fn month_column(month: Month) -> &'static str {
    MONTH_COLUMNS[month.number_from_month() as usize - 1]
}

/// Meteorological seasons reported by the anomaly table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Season {
    /// December, January, February.
    Djf,
    /// March, April, May.
    Mam,
    /// June, July, August.
    Jja,
    /// September, October, November.
    Son,
}

impl Season {
    /// All seasons in table order.
    pub const ALL: [Self; 4] = [Self::Djf, Self::Mam, Self::Jja, Self::Son];

    /// Column label in the source table.
    #[must_use]
    pub const fn column(self) -> &'static str {
        match self {
            Self::Djf => "DJF",
            Self::Mam => "MAM",
            Self::Jja => "JJA",
            Self::Son => "SON",
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Djf => 0,
            Self::Mam => 1,
            Self::Jja => 2,
            Self::Son => 3,
        }
    }
}

/// Typed selector for one anomaly column of a [`TemperatureRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemperatureField {
    /// A single calendar month.
    Month(Month),
    /// A seasonal aggregate.
    Season(Season),
    /// Annual mean January–December (`J-D`).
    JanDec,
    /// Annual mean December–November (`D-N`).
    DecNov,
}

impl TemperatureField {
    /// Every column of the anomaly table after the year key, in file order.
    #[must_use]
    pub fn all() -> Vec<Self> {
        let mut out: Vec<Self> = (1..=12u8)
            .filter_map(|m| Month::try_from(m).ok())
            .map(Self::Month)
            .collect();
        out.push(Self::JanDec);
        out.push(Self::DecNov);
        out.extend(Season::ALL.map(Self::Season));
        out
    }

    /// Column label in the source table.
    #[must_use]
    pub fn column(self) -> &'static str {
        match self {
            Self::Month(m) => month_column(m),
            Self::Season(s) => s.column(),
            Self::JanDec => "J-D",
            Self::DecNov => "D-N",
        }
    }
}

/// One row of the global temperature anomaly table (°C vs. the 1951–1980 mean).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureRecord {
    /// Calendar year; unique within a table.
    pub year: i32,
    /// Monthly anomalies, January first.
    pub months: [Option<f64>; 12],
    /// Seasonal anomalies in [`Season::ALL`] order.
    pub seasons: [Option<f64>; 4],
    /// Annual anomaly January–December.
    pub jan_dec: Option<f64>,
    /// Annual anomaly December–November.
    pub dec_nov: Option<f64>,
}

impl TemperatureRecord {
    /// An empty record for `year` with every anomaly missing.
    #[must_use]
    pub const fn new(year: i32) -> Self {
        Self {
            year,
            months: [None; 12],
            seasons: [None; 4],
            jan_dec: None,
            dec_nov: None,
        }
    }

    /// Read one anomaly column.
    #[must_use]
    pub fn get(&self, field: TemperatureField) -> Option<f64> {
        match field {
            TemperatureField::Month(m) => self.months[m.number_from_month() as usize - 1],
            TemperatureField::Season(s) => self.seasons[s.index()],
            TemperatureField::JanDec => self.jan_dec,
            TemperatureField::DecNov => self.dec_nov,
        }
    }

    /// Write one anomaly column.
    pub fn set(&mut self, field: TemperatureField, value: Option<f64>) {
        match field {
            TemperatureField::Month(m) => self.months[m.number_from_month() as usize - 1] = value,
            TemperatureField::Season(s) => self.seasons[s.index()] = value,
            TemperatureField::JanDec => self.jan_dec = value,
            TemperatureField::DecNov => self.dec_nov = value,
        }
    }

    /// Builder-style variant of [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, field: TemperatureField, value: f64) -> Self {
        self.set(field, Some(value));
        self
    }
}

/// Anomaly table keyed by year, sorted ascending with unique years.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TemperatureTable {
    records: Vec<TemperatureRecord>,
}

impl TemperatureTable {
    /// Build a table from records in any order.
    ///
    /// # Errors
    /// Returns `Err(ClimaError::Data)` if two records share a year.
    pub fn from_records(mut records: Vec<TemperatureRecord>) -> Result<Self, ClimaError> {
        records.sort_by_key(|r| r.year);
        if let Some(w) = records.windows(2).find(|w| w[0].year == w[1].year) {
            return Err(ClimaError::Data(format!(
                "duplicate year {} in temperature table",
                w[0].year
            )));
        }
        Ok(Self { records })
    }

    /// All records in year order.
    #[must_use]
    pub fn records(&self) -> &[TemperatureRecord] {
        &self.records
    }

    /// Number of years in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the table holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up the record for `year`.
    #[must_use]
    pub fn get(&self, year: i32) -> Option<&TemperatureRecord> {
        self.records
            .binary_search_by_key(&year, |r| r.year)
            .ok()
            .map(|i| &self.records[i])
    }

    /// Contiguous slice of records whose year lies inside `period`.
    #[must_use]
    pub fn period(&self, period: &Period) -> &[TemperatureRecord] {
        let lo = self.records.partition_point(|r| r.year < period.start);
        let hi = self.records.partition_point(|r| r.year <= period.end);
        &self.records[lo..hi.max(lo)]
    }

    /// Non-null `(year, value)` pairs of one column over the whole table.
    #[must_use]
    pub fn series(&self, field: TemperatureField) -> Vec<(i32, f64)> {
        self.records
            .iter()
            .filter_map(|r| r.get(field).map(|v| (r.year, v)))
            .collect()
    }

    /// Non-null values of one column inside `period`.
    #[must_use]
    pub fn values_in(&self, period: &Period, field: TemperatureField) -> Vec<f64> {
        self.period(period)
            .iter()
            .filter_map(|r| r.get(field))
            .collect()
    }
}

/// Typed selector for one measurement column of a [`Co2Record`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Co2Field {
    /// Observed monthly mean.
    MonthlyAverage,
    /// Monthly mean with gaps filled by the data provider.
    Interpolated,
    /// Seasonally corrected trend published by the data provider.
    Trend,
}

impl Co2Field {
    /// All measurement columns in file order.
    pub const ALL: [Self; 3] = [Self::MonthlyAverage, Self::Interpolated, Self::Trend];

    /// Column label in the source sheet.
    #[must_use]
    pub const fn column(self) -> &'static str {
        match self {
            Self::MonthlyAverage => "Monthly average",
            Self::Interpolated => "Interpolated",
            Self::Trend => "Trend",
        }
    }
}

/// One monthly row of the Mauna Loa CO₂ series (ppm).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Co2Record {
    /// Calendar year.
    pub year: i32,
    /// Calendar month, 1-based.
    pub month: u32,
    /// First day of the measured month.
    pub date: NaiveDate,
    /// Observed monthly mean.
    pub monthly_average: Option<f64>,
    /// Gap-filled monthly mean.
    pub interpolated: Option<f64>,
    /// Seasonally corrected trend.
    pub trend: Option<f64>,
}

impl Co2Record {
    /// An empty record for the given month with every measurement missing.
    ///
    /// # Errors
    /// Returns `Err(ClimaError::Data)` if `(year, month)` is not a valid calendar month.
    pub fn new(year: i32, month: u32) -> Result<Self, ClimaError> {
        let date = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| ClimaError::Data(format!("invalid calendar month {year}-{month}")))?;
        Ok(Self {
            year,
            month,
            date,
            monthly_average: None,
            interpolated: None,
            trend: None,
        })
    }

    /// Calendar month of this record.
    #[must_use]
    pub fn calendar_month(&self) -> Option<Month> {
        u8::try_from(self.date.month())
            .ok()
            .and_then(|m| Month::try_from(m).ok())
    }

    /// Read one measurement column.
    #[must_use]
    pub const fn get(&self, field: Co2Field) -> Option<f64> {
        match field {
            Co2Field::MonthlyAverage => self.monthly_average,
            Co2Field::Interpolated => self.interpolated,
            Co2Field::Trend => self.trend,
        }
    }

    /// Write one measurement column.
    pub const fn set(&mut self, field: Co2Field, value: Option<f64>) {
        match field {
            Co2Field::MonthlyAverage => self.monthly_average = value,
            Co2Field::Interpolated => self.interpolated = value,
            Co2Field::Trend => self.trend = value,
        }
    }

    /// Builder-style variant of [`set`](Self::set).
    #[must_use]
    pub const fn with(mut self, field: Co2Field, value: f64) -> Self {
        self.set(field, Some(value));
        self
    }
}

/// CO₂ table keyed by `(year, month)`, sorted chronologically with unique keys.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Co2Table {
    records: Vec<Co2Record>,
}

impl Co2Table {
    /// Build a table from records in any order.
    ///
    /// # Errors
    /// Returns `Err(ClimaError::Data)` if two records share a `(year, month)` key.
    pub fn from_records(mut records: Vec<Co2Record>) -> Result<Self, ClimaError> {
        records.sort_by_key(|r| r.date);
        if let Some(w) = records.windows(2).find(|w| w[0].date == w[1].date) {
            return Err(ClimaError::Data(format!(
                "duplicate month {}-{:02} in co2 table",
                w[0].year, w[0].month
            )));
        }
        Ok(Self { records })
    }

    /// All records in chronological order.
    #[must_use]
    pub fn records(&self) -> &[Co2Record] {
        &self.records
    }

    /// Number of monthly rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the table holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Subset of records satisfying `keep`, order preserved.
    #[must_use]
    pub fn filter<F>(&self, mut keep: F) -> Self
    where
        F: FnMut(&Co2Record) -> bool,
    {
        Self {
            records: self.records.iter().filter(|r| keep(r)).cloned().collect(),
        }
    }

    /// Apply `f` to every measurement cell; keys are left untouched.
    #[must_use]
    pub fn map_values<F>(&self, f: F) -> Self
    where
        F: Fn(Option<f64>) -> Option<f64>,
    {
        let records = self
            .records
            .iter()
            .map(|r| {
                let mut out = r.clone();
                for field in Co2Field::ALL {
                    out.set(field, f(r.get(field)));
                }
                out
            })
            .collect();
        Self { records }
    }

    /// Non-null `(date, value)` pairs of one column.
    #[must_use]
    pub fn series(&self, field: Co2Field) -> Vec<(NaiveDate, f64)> {
        self.records
            .iter()
            .filter_map(|r| r.get(field).map(|v| (r.date, v)))
            .collect()
    }
}

/// One aligned observation of a temperature anomaly and CO₂ concentration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JoinedRow {
    /// Shared year key.
    pub year: i32,
    /// Anomaly of the selected temperature column.
    pub anomaly: f64,
    /// CO₂ monthly mean for the selected month.
    pub monthly_average: f64,
    /// CO₂ trend for the selected month.
    pub trend: f64,
}

/// Inner join of a single-month CO₂ slice with the anomaly table on year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoinedSeries {
    /// Month the CO₂ table was sliced to.
    pub month: Month,
    /// Temperature column paired with the CO₂ values.
    pub field: TemperatureField,
    /// Complete rows in year order.
    pub rows: Vec<JoinedRow>,
}

impl JoinedSeries {
    /// Joined years in order.
    #[must_use]
    pub fn years(&self) -> Vec<i32> {
        self.rows.iter().map(|r| r.year).collect()
    }

    /// Anomaly column.
    #[must_use]
    pub fn anomalies(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.anomaly).collect()
    }

    /// CO₂ trend column.
    #[must_use]
    pub fn trends(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.trend).collect()
    }

    /// CO₂ monthly average column.
    #[must_use]
    pub fn monthly_averages(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.monthly_average).collect()
    }
}
