use std::sync::Arc;

use clima::{ChartKind, Month, Season, month_color, season_color};
use clima_mock::{MockSource, RecordingExport};

use crate::helpers::{mock_builder, recording};

fn recorded_run() -> (tempfile::TempDir, Arc<RecordingExport>) {
    let tmp = tempfile::tempdir().unwrap();
    let (clima, rec) = recording(tmp.path(), Arc::new(MockSource::new()));
    clima.run().expect("run succeeds");
    (tmp, rec)
}

#[test]
fn charts_are_emitted_in_stage_order() {
    let (tmp, rec) = recorded_run();
    let names: Vec<String> = rec.charts().into_iter().map(|(_, c)| c.name).collect();
    assert_eq!(
        names,
        [
            "anomaly_march",
            "seasonal_anomalies",
            "annual_anomalies",
            "period_histograms",
            "co2_interpolated_trend",
            "co2_vs_march_anomaly",
        ]
    );
    let figures = tmp.path().join("Outputs").join("Figures");
    for (path, chart) in rec.charts() {
        assert_eq!(path, figures.join(format!("{}.chart", chart.name)));
        assert_eq!(chart.dpi, 300);
    }
}

#[test]
fn featured_month_chart_has_baseline_and_span() {
    let (_tmp, rec) = recorded_run();
    let chart = rec.chart("anomaly_march").unwrap();
    assert_eq!(chart.kind, ChartKind::Line);
    assert_eq!(chart.title, "Temperature anomaly in March (1880–2024)");
    assert_eq!(chart.series.len(), 1);
    assert_eq!(chart.series[0].color, "gold");
    let reference = chart.reference.unwrap();
    assert_eq!(reference.y, 0.0);
    assert_eq!(reference.label, "1951–1980 average");
}

#[test]
fn seasonal_chart_has_one_colored_line_per_season() {
    let (_tmp, rec) = recorded_run();
    let chart = rec.chart("seasonal_anomalies").unwrap();
    let lines: Vec<(&str, &str)> = chart
        .series
        .iter()
        .map(|s| (s.label.as_str(), s.color.as_str()))
        .collect();
    assert_eq!(
        lines,
        [
            ("DJF", "red"),
            ("MAM", "green"),
            ("JJA", "orange"),
            ("SON", "purple")
        ]
    );
    // the first winter needs the December before the table starts
    assert_eq!(chart.series[0].points[0].0, 1881.0);
    assert_eq!(chart.series[1].points[0].0, 1880.0);
}

#[test]
fn annual_chart_skips_the_incomplete_year() {
    let (_tmp, rec) = recorded_run();
    let chart = rec.chart("annual_anomalies").unwrap();
    let points = &chart.series[0].points;
    assert_eq!(points.first().unwrap().0, 1880.0);
    assert_eq!(points.last().unwrap().0, 2023.0);
}

#[test]
fn histogram_has_a_panel_per_period() {
    let (_tmp, rec) = recorded_run();
    let chart = rec.chart("period_histograms").unwrap();
    assert_eq!(chart.kind, ChartKind::Histogram);
    assert_eq!(chart.edges.len(), 16);
    assert_eq!(chart.edges[0], -1.0);
    assert_eq!(chart.edges[15], 2.0);
    assert_eq!(chart.panels.len(), 2);
    let panels: Vec<(usize, &str, usize)> = chart
        .series
        .iter()
        .map(|s| (s.panel, s.color.as_str(), s.points.len()))
        .collect();
    assert_eq!(panels, [(0, "skyblue", 30), (1, "salmon", 30)]);
}

#[test]
fn co2_charts_start_at_the_cutoff() {
    let (_tmp, rec) = recorded_run();
    let trend = rec.chart("co2_interpolated_trend").unwrap();
    let colors: Vec<&str> = trend.series.iter().map(|s| s.color.as_str()).collect();
    assert_eq!(colors, ["gray", "red"]);
    for series in &trend.series {
        assert_eq!(series.points.len(), 65 * 12);
        assert_eq!(series.points[0].0, 1960.0);
    }

    let scatter = rec.chart("co2_vs_march_anomaly").unwrap();
    assert_eq!(scatter.kind, ChartKind::Scatter);
    assert_eq!(scatter.series[0].color, "darkred");
    assert_eq!(scatter.series[0].points.len(), 64);
}

#[test]
fn configured_resolution_reaches_every_chart() {
    let tmp = tempfile::tempdir().unwrap();
    let rec = Arc::new(RecordingExport::new());
    mock_builder(tmp.path())
        .chart_dpi(150)
        .with_table_writer(rec.clone())
        .with_chart_renderer(rec.clone())
        .build()
        .unwrap()
        .run()
        .unwrap();
    assert!(rec.charts().iter().all(|(_, c)| c.dpi == 150));
}

#[test]
fn chart_files_are_json_descriptions() {
    let tmp = tempfile::tempdir().unwrap();
    mock_builder(tmp.path()).build().unwrap().run().unwrap();
    let path = tmp
        .path()
        .join("Outputs")
        .join("Figures")
        .join("co2_vs_march_anomaly.json");
    let chart: clima::Chart = serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
    assert_eq!(chart.kind, ChartKind::Scatter);
    assert_eq!(chart.x_label, "Temperature anomaly in March (°C)");
}

#[test]
fn palette() {
    assert_eq!(month_color(Month::January), "red");
    assert_eq!(month_color(Month::March), "gold");
    assert_eq!(month_color(Month::December), "black");
    assert_eq!(season_color(Season::Jja), "orange");
}
