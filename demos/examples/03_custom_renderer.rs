use std::path::Path;
use std::sync::Arc;

use clima::{Chart, ChartRenderer, Clima, ClimaConfig, ClimaError};
use clima_demos::common::{base_dir, get_source};

/// Writes every chart's points as CSV, one row per point.
struct CsvPoints;

impl ChartRenderer for CsvPoints {
    fn name(&self) -> &'static str {
        "csv-points"
    }

    fn extension(&self) -> &'static str {
        "csv"
    }

    fn render(&self, chart: &Chart, path: &Path) -> Result<(), ClimaError> {
        let io = |e: csv::Error| ClimaError::Io {
            path: path.display().to_string(),
            msg: e.to_string(),
        };
        let mut w = csv::Writer::from_path(path).map_err(io)?;
        w.write_record(["series", "panel", chart.x_label.as_str(), chart.y_label.as_str()])
            .map_err(io)?;
        for s in &chart.series {
            for (x, y) in &s.points {
                w.write_record([
                    s.label.clone(),
                    s.panel.to_string(),
                    x.to_string(),
                    y.to_string(),
                ])
                .map_err(io)?;
            }
        }
        w.flush().map_err(|e| ClimaError::io(path, &e))
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = ClimaConfig {
        base_dir: base_dir(),
        ..ClimaConfig::default()
    };
    let source = get_source(&cfg);

    // Swap the default JSON chart descriptions for raw CSV points.
    let clima = Clima::builder()
        .config(cfg)
        .with_source(source)
        .with_chart_renderer(Arc::new(CsvPoints))
        .build()?;

    let report = clima.run()?;
    for path in report.outputs.iter().filter(|p| p.extension().is_some_and(|e| e == "csv")) {
        println!("points: {}", path.display());
    }
    Ok(())
}
