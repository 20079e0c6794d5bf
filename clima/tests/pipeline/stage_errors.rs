use std::path::Path;
use std::sync::Arc;

use clima::{
    Clima, ClimaError, Co2Table, FileSource, LoadReport, Loaded, TableWriter, TypesetTable,
    stages,
};
use clima_mock::{DynamicSource, MockBehavior, MockSource, RecordingExport};

use crate::helpers::{recording, write_inputs};

#[test]
fn missing_temperature_file_fails_the_load_stage() {
    let tmp = tempfile::tempdir().unwrap();
    let clima = Clima::builder().base_dir(tmp.path()).build().unwrap();
    let err = clima.run().expect_err("no inputs");
    assert_eq!(err.stage(), Some(stages::LOAD_TEMPERATURE));
    assert!(matches!(err.root(), ClimaError::Io { path, .. } if path.ends_with("temp_deviation.csv")));
    assert!(!tmp.path().join("Outputs").join("report.json").exists());
}

#[test]
fn missing_co2_sheet_fails_after_temperature_loads() {
    let tmp = tempfile::tempdir().unwrap();
    let cfg = write_inputs(tmp.path());
    let source = FileSource::new(cfg.temperature_path(), cfg.raw_dir().join("absent.xlsx"));
    let clima = Clima::builder()
        .config(cfg)
        .with_source(Arc::new(source))
        .build()
        .unwrap();
    let err = clima.run().unwrap_err();
    assert_eq!(err.stage(), Some(stages::LOAD_CO2));
    assert!(matches!(err.root(), ClimaError::Io { .. }));
}

#[test]
fn source_failure_is_tagged_and_nothing_is_written() {
    let tmp = tempfile::tempdir().unwrap();
    let (source, controller) = DynamicSource::new_with_controller();
    let schema = ClimaError::schema("temperature", "J-D");
    controller.set_temperature_behavior(MockBehavior::Fail(schema.clone()));

    let (clima, rec) = recording(tmp.path(), source);
    let err = clima.run().unwrap_err();
    assert_eq!(
        err,
        ClimaError::Stage {
            stage: stages::LOAD_TEMPERATURE.into(),
            error: Box::new(schema),
        }
    );
    assert_eq!(controller.temperature_calls(), 1);
    assert_eq!(controller.co2_calls(), 0);
    assert!(rec.charts().is_empty());
    assert!(rec.tables().is_empty());
}

#[test]
fn empty_co2_table_is_insufficient_for_correlation() {
    let tmp = tempfile::tempdir().unwrap();
    let (source, controller) = DynamicSource::new_with_controller();
    controller.set_co2_behavior(MockBehavior::Return(Loaded {
        table: Co2Table::default(),
        report: LoadReport::new("co2"),
    }));

    let (clima, rec) = recording(tmp.path(), source);
    let err = clima.run().unwrap_err();
    assert_eq!(err.stage(), Some(stages::CO2));
    assert!(matches!(err.root(), ClimaError::InsufficientData { .. }));
    // earlier stages completed, the scatter was never produced
    assert!(rec.chart("co2_interpolated_trend").is_some());
    assert!(rec.chart("co2_vs_march_anomaly").is_none());
    assert!(rec.table("mean_variance").is_some());
}

struct FailingWriter;

impl TableWriter for FailingWriter {
    fn name(&self) -> &'static str {
        "failing"
    }

    fn extension(&self) -> &'static str {
        "tex"
    }

    fn write_table(&self, _table: &TypesetTable, path: &Path) -> Result<(), ClimaError> {
        Err(ClimaError::Io {
            path: path.display().to_string(),
            msg: "disk full".into(),
        })
    }
}

#[test]
fn writer_failure_aborts_at_the_first_table() {
    let tmp = tempfile::tempdir().unwrap();
    let charts = Arc::new(RecordingExport::new());
    let clima = Clima::builder()
        .base_dir(tmp.path())
        .with_source(Arc::new(MockSource::new()))
        .with_table_writer(Arc::new(FailingWriter))
        .with_chart_renderer(charts.clone())
        .build()
        .unwrap();
    let err = clima.run().unwrap_err();
    assert_eq!(err.stage(), Some(stages::FREQUENCIES));
    assert!(err.to_string().contains("frequencies"));
    assert_eq!(charts.charts().len(), 3);
}

#[test]
fn unwritable_output_dir_fails_preparation() {
    let tmp = tempfile::tempdir().unwrap();
    // a file where the outputs directory should go
    std::fs::write(tmp.path().join("Outputs"), b"").unwrap();
    let (clima, _rec) = recording(tmp.path(), Arc::new(MockSource::new()));
    let err = clima.run().unwrap_err();
    assert_eq!(err.stage(), Some(stages::PREPARE));
}
