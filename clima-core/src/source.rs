use std::path::PathBuf;

use clima_types::{
    ClimaConfig, ClimaError, Co2Layout, Co2Table, TemperatureLayout, TemperatureTable,
};

use crate::load::{Loaded, co2::load_co2, temperature::load_temperature_csv};

/// Provider of the two raw input tables.
///
/// The pipeline only talks to this trait, so the datasets can come from disk
/// ([`FileSource`]), from in-memory fixtures, or from anywhere else.
pub trait ClimateSource: Send + Sync {
    /// A stable identifier used in logs (e.g. "files", "clima-mock").
    fn name(&self) -> &'static str;

    /// Load the monthly/seasonal/annual anomaly table.
    ///
    /// # Errors
    /// Any loader error for the underlying dataset.
    fn temperature(&self) -> Result<Loaded<TemperatureTable>, ClimaError>;

    /// Load the monthly CO₂ table.
    ///
    /// # Errors
    /// Any loader error for the underlying dataset.
    fn co2(&self) -> Result<Loaded<Co2Table>, ClimaError>;
}

/// Reads both datasets from files using their configured layouts.
#[derive(Debug, Clone)]
pub struct FileSource {
    temperature_path: PathBuf,
    co2_path: PathBuf,
    temperature_layout: TemperatureLayout,
    co2_layout: Co2Layout,
}

impl FileSource {
    /// Source for explicit paths with default layouts.
    pub fn new(temperature_path: impl Into<PathBuf>, co2_path: impl Into<PathBuf>) -> Self {
        Self {
            temperature_path: temperature_path.into(),
            co2_path: co2_path.into(),
            temperature_layout: TemperatureLayout::default(),
            co2_layout: Co2Layout::default(),
        }
    }

    /// Source for the raw-data paths and layouts named in `config`.
    #[must_use]
    pub fn from_config(config: &ClimaConfig) -> Self {
        Self {
            temperature_path: config.temperature_path(),
            co2_path: config.co2_path(),
            temperature_layout: config.temperature_layout.clone(),
            co2_layout: config.co2_layout.clone(),
        }
    }

    /// Override the anomaly table layout.
    #[must_use]
    pub fn with_temperature_layout(mut self, layout: TemperatureLayout) -> Self {
        self.temperature_layout = layout;
        self
    }

    /// Override the CO₂ sheet layout.
    #[must_use]
    pub fn with_co2_layout(mut self, layout: Co2Layout) -> Self {
        self.co2_layout = layout;
        self
    }
}

impl ClimateSource for FileSource {
    fn name(&self) -> &'static str {
        "files"
    }

    fn temperature(&self) -> Result<Loaded<TemperatureTable>, ClimaError> {
        load_temperature_csv(&self.temperature_path, &self.temperature_layout)
    }

    fn co2(&self) -> Result<Loaded<Co2Table>, ClimaError> {
        load_co2(&self.co2_path, &self.co2_layout)
    }
}
