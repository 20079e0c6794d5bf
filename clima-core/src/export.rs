use std::path::{Path, PathBuf};

use clima_types::{Chart, ClimaError, TypesetTable};

/// Writes a [`TypesetTable`] to a document format.
pub trait TableWriter: Send + Sync {
    /// A stable identifier used in logs (e.g. "latex").
    fn name(&self) -> &'static str;

    /// File extension without the dot.
    fn extension(&self) -> &'static str;

    /// Write `table` to `path`.
    ///
    /// # Errors
    /// `ClimaError::Io` if the file cannot be written.
    fn write_table(&self, table: &TypesetTable, path: &Path) -> Result<(), ClimaError>;

    /// Output path of `table` inside `dir`.
    fn path_in(&self, dir: &Path, table: &TypesetTable) -> PathBuf {
        dir.join(format!("{}.{}", table.name, self.extension()))
    }
}

/// Renders a [`Chart`] to an image or a chart description file.
pub trait ChartRenderer: Send + Sync {
    /// A stable identifier used in logs (e.g. "chart-spec").
    fn name(&self) -> &'static str;

    /// File extension without the dot.
    fn extension(&self) -> &'static str;

    /// Render `chart` to `path`.
    ///
    /// # Errors
    /// `ClimaError::Io` if the file cannot be written, or any renderer failure.
    fn render(&self, chart: &Chart, path: &Path) -> Result<(), ClimaError>;

    /// Output path of `chart` inside `dir`.
    fn path_in(&self, dir: &Path, chart: &Chart) -> PathBuf {
        dir.join(format!("{}.{}", chart.name, self.extension()))
    }
}
