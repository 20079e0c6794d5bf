use clima::{BinSpec, Clima, ClimaConfig, ClimaError, Month, Period};

use crate::helpers::mock_builder;

fn invalid(result: Result<Clima, ClimaError>) -> String {
    match result {
        Err(ClimaError::InvalidArg(msg)) => msg,
        Err(other) => panic!("expected InvalidArg, got {other}"),
        Ok(_) => panic!("expected InvalidArg, got a valid orchestrator"),
    }
}

#[test]
fn defaults_build() {
    let clima = Clima::builder().build().unwrap();
    assert_eq!(clima.config(), &ClimaConfig::default());
    assert_eq!(clima.source_name(), "files");
    assert_eq!(clima.config().featured_month, Month::March);
}

#[test]
fn modifiers_reach_the_config() {
    let tmp = tempfile::tempdir().unwrap();
    let clima = mock_builder(tmp.path())
        .featured_month(Month::August)
        .comparison_periods(Period::new(1901, 1930), Period::new(1991, 2020))
        .summary_periods(vec![Period::new(1991, 2020)])
        .bins(BinSpec {
            start: -0.5,
            end: 1.5,
            width: 0.25,
        })
        .quantile_levels(vec![0.1, 0.5, 0.9])
        .hot_threshold(0.5)
        .co2_cutoff_year(1970)
        .chart_dpi(120)
        .build()
        .unwrap();
    let cfg = clima.config();
    assert_eq!(cfg.base_dir, tmp.path());
    assert_eq!(cfg.featured_month, Month::August);
    assert_eq!(cfg.comparison_periods[1], Period::new(1991, 2020));
    assert_eq!(cfg.summary_periods.len(), 1);
    assert_eq!(cfg.quantile_levels, [0.1, 0.5, 0.9]);
    assert_eq!(cfg.co2_cutoff_year, 1970);
    assert_eq!(cfg.chart_dpi, 120);
    assert_eq!(clima.source_name(), "clima-mock");
}

#[test]
fn custom_settings_flow_into_the_report() {
    let tmp = tempfile::tempdir().unwrap();
    let report = mock_builder(tmp.path())
        .quantile_levels(vec![0.1, 0.5, 0.9])
        .hot_threshold(10.0)
        .co2_cutoff_year(1970)
        .build()
        .unwrap()
        .run()
        .unwrap();
    assert_eq!(report.quantiles.len(), 3);
    assert_eq!(report.exceedance.count, 0);
    assert_eq!(report.exceedance.percentage, 0.0);
    assert_eq!(report.joined_rows, 2024 - 1970 + 1);
}

#[test]
fn invalid_settings_are_rejected_at_build() {
    assert!(invalid(Clima::builder().chart_dpi(0).build()).contains("dpi"));
    assert!(invalid(Clima::builder().quantile_levels(vec![1.5]).build()).contains("1.5"));
    assert!(invalid(Clima::builder().summary_periods(Vec::new()).build()).contains("summary"));
    assert!(invalid(Clima::builder().hot_threshold(f64::NAN).build()).contains("threshold"));
    invalid(
        Clima::builder()
            .comparison_periods(Period::new(2010, 1981), Period::new(1951, 1980))
            .build(),
    );
    invalid(
        Clima::builder()
            .bins(BinSpec {
                start: 1.0,
                end: -1.0,
                width: 0.2,
            })
            .build(),
    );
}

#[test]
fn config_from_json_drives_the_builder() {
    let cfg = ClimaConfig::from_json_str(r#"{ "featured_month": "July", "chart_dpi": 72 }"#).unwrap();
    let clima = Clima::builder().config(cfg).build().unwrap();
    assert_eq!(clima.config().featured_month, Month::July);
    assert_eq!(clima.config().chart_dpi, 72);
    assert_eq!(clima.config().hot_threshold, 0.08);
}
