use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use clima_core::{Chart, ChartRenderer, ClimaError, TableWriter, TypesetTable};

/// Captures every table and chart handed to it; writes nothing to disk.
///
/// Share one instance (behind an `Arc`) as both the table writer and the chart
/// renderer, then inspect what the run produced.
#[derive(Debug, Default)]
pub struct RecordingExport {
    tables: Mutex<Vec<(PathBuf, TypesetTable)>>,
    charts: Mutex<Vec<(PathBuf, Chart)>>,
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

impl RecordingExport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tables received so far, with the path each would have been written to.
    #[must_use]
    pub fn tables(&self) -> Vec<(PathBuf, TypesetTable)> {
        lock(&self.tables).clone()
    }

    /// Charts received so far, with the path each would have been written to.
    #[must_use]
    pub fn charts(&self) -> Vec<(PathBuf, Chart)> {
        lock(&self.charts).clone()
    }

    /// The chart named `name`, if one was received.
    #[must_use]
    pub fn chart(&self, name: &str) -> Option<Chart> {
        lock(&self.charts)
            .iter()
            .find(|(_, c)| c.name == name)
            .map(|(_, c)| c.clone())
    }

    /// The table named `name`, if one was received.
    #[must_use]
    pub fn table(&self, name: &str) -> Option<TypesetTable> {
        lock(&self.tables)
            .iter()
            .find(|(_, t)| t.name == name)
            .map(|(_, t)| t.clone())
    }
}

impl TableWriter for RecordingExport {
    fn name(&self) -> &'static str {
        "recording"
    }

    fn extension(&self) -> &'static str {
        "table"
    }

    fn write_table(&self, table: &TypesetTable, path: &Path) -> Result<(), ClimaError> {
        lock(&self.tables).push((path.to_path_buf(), table.clone()));
        Ok(())
    }
}

impl ChartRenderer for RecordingExport {
    fn name(&self) -> &'static str {
        "recording"
    }

    fn extension(&self) -> &'static str {
        "chart"
    }

    fn render(&self, chart: &Chart, path: &Path) -> Result<(), ClimaError> {
        lock(&self.charts).push((path.to_path_buf(), chart.clone()));
        Ok(())
    }
}
