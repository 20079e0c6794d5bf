//! Deterministic in-memory inputs for tests and demos.
//!
//! - [`MockSource`] serves fixed fixture tables shaped like the real datasets.
//! - [`DynamicSource`] defers to a [`SourceController`] so tests can inject
//!   failures per dataset.
//! - [`RecordingExport`] captures tables and charts instead of writing files.
use clima_core::{ClimaError, ClimateSource, Co2Table, LoadReport, Loaded, TemperatureTable};

mod dynamic;
/// Fixture tables and the constants describing their shape.
pub mod fixtures;
mod recording;

pub use dynamic::{DynamicSource, MockBehavior, SourceController};
pub use recording::RecordingExport;

/// Mock source for CI-safe runs. Provides deterministic data from static fixtures.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockSource;

impl MockSource {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

/// Wrap a fixture table in a report that counts every row as kept.
fn loaded<T>(dataset: &str, table: T, rows: usize) -> Loaded<T> {
    let mut report = LoadReport::new(dataset);
    report.rows_read = rows;
    report.rows_kept = rows;
    Loaded { table, report }
}

/// The anomaly fixture as a loader would return it.
///
/// # Errors
/// Never in practice; fixture construction goes through the checked constructors.
pub fn temperature_fixture() -> Result<Loaded<TemperatureTable>, ClimaError> {
    let table = fixtures::temperature::table()?;
    let rows = table.len();
    Ok(loaded("temperature", table, rows))
}

/// The CO₂ fixture as a loader would return it, sentinels included.
///
/// # Errors
/// Never in practice; fixture construction goes through the checked constructors.
pub fn co2_fixture() -> Result<Loaded<Co2Table>, ClimaError> {
    let table = fixtures::co2::table()?;
    let rows = table.len();
    Ok(loaded("co2", table, rows))
}

impl ClimateSource for MockSource {
    fn name(&self) -> &'static str {
        "clima-mock"
    }

    fn temperature(&self) -> Result<Loaded<TemperatureTable>, ClimaError> {
        temperature_fixture()
    }

    fn co2(&self) -> Result<Loaded<Co2Table>, ClimaError> {
        co2_fixture()
    }
}
