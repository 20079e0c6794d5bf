// Shared fixtures for the pipeline tests.
use std::fmt::Write as _;
use std::path::Path;
use std::sync::Arc;

use clima::{Clima, ClimaBuilder, ClimaConfig, ClimateSource, TemperatureField};
use clima_mock::{MockSource, RecordingExport};

pub const CO2_CSV: &str = "co2_monthly.csv";

/// Render the mock anomaly table in the provider's CSV layout.
pub fn temperature_csv() -> String {
    let table = MockSource::new().temperature().expect("fixture").table;
    let fields = TemperatureField::all();
    let mut out = String::from("Land-Ocean: Global Means\nYear");
    for f in &fields {
        out.push(',');
        out.push_str(f.column());
    }
    out.push('\n');
    for rec in table.records() {
        write!(out, "{}", rec.year).unwrap();
        for f in &fields {
            match rec.get(*f) {
                Some(v) => write!(out, ",{v:.2}").unwrap(),
                None => out.push_str(",***"),
            }
        }
        out.push('\n');
    }
    out
}

/// Render the mock CO₂ sheet as delimited text, sentinels included.
pub fn co2_csv() -> String {
    let table = MockSource::new().co2().expect("fixture").table;
    let mut out = String::from("# Mauna Loa monthly mean CO2\nYear,Month,Monthly average,Interpolated,Trend\n");
    for r in table.records() {
        let cell = |v: Option<f64>| v.map_or_else(String::new, |v| format!("{v:.2}"));
        writeln!(
            out,
            "{},{},{},{},{}",
            r.year,
            r.month,
            cell(r.monthly_average),
            cell(r.interpolated),
            cell(r.trend)
        )
        .unwrap();
    }
    out
}

/// Lay out `Rawdata/` under `base` and return a config pointing at it.
pub fn write_inputs(base: &Path) -> ClimaConfig {
    let cfg = ClimaConfig {
        base_dir: base.to_path_buf(),
        co2_file: CO2_CSV.into(),
        ..ClimaConfig::default()
    };
    std::fs::create_dir_all(cfg.raw_dir()).unwrap();
    std::fs::write(cfg.temperature_path(), temperature_csv()).unwrap();
    std::fs::write(cfg.co2_path(), co2_csv()).unwrap();
    cfg
}

/// Builder over `base` reading from the in-memory mock.
pub fn mock_builder(base: &Path) -> ClimaBuilder {
    Clima::builder()
        .base_dir(base)
        .with_source(Arc::new(MockSource::new()))
}

/// Orchestrator that records outputs instead of writing them.
pub fn recording(base: &Path, source: Arc<dyn ClimateSource>) -> (Clima, Arc<RecordingExport>) {
    let rec = Arc::new(RecordingExport::new());
    let clima = Clima::builder()
        .base_dir(base)
        .with_source(source)
        .with_table_writer(rec.clone())
        .with_chart_renderer(rec.clone())
        .build()
        .expect("valid config");
    (clima, rec)
}
