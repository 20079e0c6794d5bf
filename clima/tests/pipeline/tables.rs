use std::sync::Arc;

use clima::{
    BinInterval, BinSpec, ComparisonRow, FrequencyComparison, LatexTableWriter, Period, Season,
    SummaryStats, SummaryTable, TemperatureField, frequency_table, summary_table,
};
use clima_mock::MockSource;

use crate::helpers::{mock_builder, recording};

#[test]
fn frequency_table_has_a_row_per_bin() {
    let tmp = tempfile::tempdir().unwrap();
    let (clima, rec) = recording(tmp.path(), Arc::new(MockSource::new()));
    clima.run().unwrap();

    let table = rec.table("frequencies").unwrap();
    assert_eq!(table.label, "tab:frequencies");
    assert_eq!(table.columns, ["1951–1980", "1981–2010"]);
    assert_eq!(table.rows.len(), 15);
    assert_eq!(table.rows[0].0, "(-1.0, -0.8]");
    assert_eq!(table.rows[14].0, "(1.8, 2.0]");
    for col in 0..2 {
        let total: usize = table
            .rows
            .iter()
            .map(|(_, cells)| cells[col].parse::<usize>().unwrap())
            .sum();
        assert_eq!(total, 30);
    }
}

#[test]
fn summary_table_groups_mean_and_variance_by_period() {
    let tmp = tempfile::tempdir().unwrap();
    let (clima, rec) = recording(tmp.path(), Arc::new(MockSource::new()));
    clima.run().unwrap();

    let table = rec.table("mean_variance").unwrap();
    let seasons: Vec<&str> = table.rows.iter().map(|(s, _)| s.as_str()).collect();
    assert_eq!(seasons, ["DJF", "MAM", "JJA", "SON"]);
    let groups: Vec<&str> = table.groups.iter().map(|g| g.label.as_str()).collect();
    assert_eq!(groups, ["1921–1950", "1951–1980", "1981–2010"]);
    assert_eq!(table.columns.len(), 6);
    assert!(table.rows.iter().all(|(_, cells)| cells.len() == 6));

    let tex = LatexTableWriter::render(&table).unwrap();
    assert!(tex.contains("\\label{tab:mean-variance}"));
    assert!(tex.contains("\\cmidrule(lr){2-3} \\cmidrule(lr){4-5} \\cmidrule(lr){6-7}"));
}

#[test]
fn latex_files_land_in_the_tables_dir() {
    let tmp = tempfile::tempdir().unwrap();
    mock_builder(tmp.path()).build().unwrap().run().unwrap();
    let tables = tmp.path().join("Outputs").join("Tables");
    let tex = std::fs::read_to_string(tables.join("frequencies.tex")).unwrap();
    assert!(tex.starts_with("\\begin{table}"));
    assert!(tex.contains("Anomaly (°C) & 1951–1980 & 1981–2010 \\\\"));
    assert!(tables.join("mean_variance.tex").exists());
}

#[test]
fn missing_statistics_render_as_dashes() {
    let period = Period::new(1881, 1881);
    let summary = SummaryTable {
        periods: vec![period],
        categories: vec![TemperatureField::Season(Season::Djf)],
        cells: vec![vec![SummaryStats {
            count: 1,
            mean: Some(-0.1),
            variance: None,
        }]],
    };
    let table = summary_table(&summary);
    assert_eq!(table.rows, [("DJF".to_string(), vec!["-0.100".to_string(), "--".to_string()])]);
}

#[test]
fn frequency_counts_are_plain_integers() {
    let cmp = FrequencyComparison {
        periods: vec![Period::new(1951, 1980), Period::new(1981, 2010)],
        spec: BinSpec::default(),
        rows: vec![ComparisonRow {
            interval: BinInterval {
                left: -0.2,
                right: 0.0,
            },
            counts: vec![12, 0],
        }],
    };
    let table = frequency_table(&cmp);
    assert_eq!(table.rows, [("(-0.2, 0.0]".to_string(), vec!["12".to_string(), "0".to_string()])]);
    assert!(table.caption.contains("1951–1980, 1981–2010"));
}

proptest::proptest! {
    #[test]
    fn rectangular_tables_always_render(
        rows in proptest::collection::vec(
            ("[A-Za-z0-9_&%]{1,8}", proptest::collection::vec("[0-9.-]{1,6}", 3)),
            0..12,
        ),
    ) {
        let table = clima::TypesetTable {
            name: "prop".into(),
            caption: "Generated".into(),
            label: "tab:prop".into(),
            index_header: "Key".into(),
            groups: Vec::new(),
            columns: vec!["a".into(), "b".into(), "c".into()],
            rows: rows.clone(),
        };
        let tex = LatexTableWriter::render(&table).unwrap();
        let body = tex.lines().filter(|l| l.ends_with("\\\\")).count();
        proptest::prop_assert_eq!(body, rows.len() + 1);
        proptest::prop_assert!(!tex.contains(" _") && !tex.contains("&&"));
    }
}
