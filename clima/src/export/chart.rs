use std::path::Path;

use clima_core::{Chart, ChartRenderer, ClimaError};

use super::atomic::write_atomic;

/// Writes each chart as a pretty-printed JSON description.
///
/// The file carries everything an external plotting tool needs (title, axes,
/// kind, series, panels, bin edges, reference line and resolution); no image
/// is rasterized here.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChartSpecWriter;

impl ChartSpecWriter {
    /// Create the writer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ChartRenderer for ChartSpecWriter {
    fn name(&self) -> &'static str {
        "chart-spec"
    }

    fn extension(&self) -> &'static str {
        "json"
    }

    fn render(&self, chart: &Chart, path: &Path) -> Result<(), ClimaError> {
        let mut body = serde_json::to_vec_pretty(chart)?;
        body.push(b'\n');
        write_atomic(path, &body)
    }
}
