use std::path::PathBuf;
use std::sync::Arc;

use clima::{Clima, Month, Period, Season, TemperatureField};
use clima_mock::RecordingExport;
use clima_mock::fixtures::{co2, temperature};

use crate::helpers::{mock_builder, write_inputs};

fn expected_outputs(base: &std::path::Path) -> Vec<PathBuf> {
    let figures = base.join("Outputs").join("Figures");
    let tables = base.join("Outputs").join("Tables");
    vec![
        figures.join("anomaly_march.json"),
        figures.join("seasonal_anomalies.json"),
        figures.join("annual_anomalies.json"),
        tables.join("frequencies.tex"),
        figures.join("period_histograms.json"),
        tables.join("mean_variance.tex"),
        figures.join("co2_interpolated_trend.json"),
        figures.join("co2_vs_march_anomaly.json"),
        base.join("Outputs").join("report.json"),
    ]
}

#[test]
fn full_run_from_files_writes_every_output() {
    let tmp = tempfile::tempdir().unwrap();
    let cfg = write_inputs(tmp.path());
    let clima = Clima::builder().config(cfg).build().unwrap();
    assert_eq!(clima.source_name(), "files");

    let report = clima.run().expect("run succeeds");

    assert_eq!(report.outputs, expected_outputs(tmp.path()));
    for path in &report.outputs {
        let meta = std::fs::metadata(path).expect("output exists");
        assert!(meta.len() > 0, "{} is empty", path.display());
    }

    let years = usize::try_from(temperature::LAST_YEAR - temperature::FIRST_YEAR + 1).unwrap();
    assert_eq!(report.temperature.rows_kept, years);
    assert_eq!(report.temperature.rows_dropped, 0);
    assert_eq!(report.co2.rows_kept, 10 + 12 * 66);
    assert_eq!(report.featured_month, Month::March);

    // 1960..=2024 minus the year whose March average is a sentinel
    assert!(co2::GAPS.contains(&(1964, 3)));
    assert_eq!(report.joined_rows, 64);
    assert_eq!(report.correlation.n, 64);
    assert!(report.correlation.r > 0.9);
    assert!(report.correlation.p_value < 1e-10);
}

#[test]
fn statistics_match_between_file_and_memory_sources() {
    let files_dir = tempfile::tempdir().unwrap();
    let cfg = write_inputs(files_dir.path());
    let from_files = Clima::builder().config(cfg).build().unwrap().run().unwrap();

    let mock_dir = tempfile::tempdir().unwrap();
    let from_mock = mock_builder(mock_dir.path()).build().unwrap().run().unwrap();

    assert_eq!(from_files.frequencies, from_mock.frequencies);
    assert_eq!(from_files.quantiles, from_mock.quantiles);
    assert_eq!(from_files.exceedance, from_mock.exceedance);
    assert_eq!(from_files.summary, from_mock.summary);
    assert_eq!(from_files.correlation, from_mock.correlation);
}

#[test]
fn report_statistics_are_consistent() {
    let tmp = tempfile::tempdir().unwrap();
    let report = mock_builder(tmp.path()).build().unwrap().run().unwrap();

    let freq = &report.frequencies;
    assert_eq!(
        freq.periods,
        vec![Period::new(1951, 1980), Period::new(1981, 2010)]
    );
    assert_eq!(freq.rows.len(), 15);
    for col in 0..2 {
        let total: usize = freq.rows.iter().map(|r| r.counts[col]).sum();
        assert_eq!(total, 30, "every annual value of period {col} is binned");
    }

    assert_eq!(report.quantile_period, Period::new(1951, 1980));
    assert_eq!(report.quantiles.len(), 2);
    assert_eq!(report.quantiles[0].level, 0.3);
    assert!(report.quantiles[0].value <= report.quantiles[1].value);

    assert_eq!(report.exceedance_period, Period::new(1981, 2010));
    let hot = report.exceedance;
    assert_eq!(hot.total, 30);
    assert!(hot.count >= 25);
    #[allow(clippy::cast_precision_loss)]
    let pct = 100.0 * hot.count as f64 / 30.0;
    assert!((hot.percentage - pct).abs() < 1e-12);

    assert_eq!(report.summary.periods.len(), 3);
    let djf = report
        .summary
        .get(&Period::new(1951, 1980), TemperatureField::Season(Season::Djf))
        .unwrap();
    assert_eq!(djf.count, 30);
    let mean = djf.mean.unwrap();
    assert_eq!((mean * 1000.0).round() / 1000.0, mean);
    assert!(djf.variance.unwrap() >= 0.0);
}

#[test]
fn report_file_lists_itself_last() {
    let tmp = tempfile::tempdir().unwrap();
    let report = mock_builder(tmp.path()).build().unwrap().run().unwrap();

    let path = tmp.path().join("Outputs").join("report.json");
    let text = std::fs::read_to_string(&path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    let outputs = json["outputs"].as_array().unwrap();
    assert_eq!(outputs.len(), report.outputs.len());
    assert_eq!(outputs.last().unwrap().as_str(), path.to_str());
    assert_eq!(json["joined_rows"], 64);
    assert_eq!(json["featured_month"], "March");
}

#[test]
fn rerun_replaces_outputs_without_leftovers() {
    let tmp = tempfile::tempdir().unwrap();
    let clima = mock_builder(tmp.path()).build().unwrap();
    let first = clima.run().unwrap();
    let second = clima.run().unwrap();
    assert_eq!(first.outputs, second.outputs);

    let figures: Vec<_> = std::fs::read_dir(tmp.path().join("Outputs").join("Figures"))
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(figures.len(), 6);
}

#[test]
fn featured_month_changes_names_and_join() {
    let tmp = tempfile::tempdir().unwrap();
    let rec = Arc::new(RecordingExport::new());
    let clima = mock_builder(tmp.path())
        .featured_month(Month::July)
        .with_table_writer(rec.clone())
        .with_chart_renderer(rec.clone())
        .build()
        .unwrap();
    let report = clima.run().unwrap();
    assert_eq!(report.featured_month, Month::July);
    // July of the last temperature year is observed, no CO₂ gap in July
    assert_eq!(report.joined_rows, 65);
    assert!(rec.chart("anomaly_july").is_some());
    assert!(rec.chart("co2_vs_july_anomaly").is_some());
    assert!(rec.chart("anomaly_march").is_none());
    // nothing reaches the disk through the recording writers
    assert!(!tmp.path().join("Outputs").join("Tables").join("frequencies.tex").exists());
}
