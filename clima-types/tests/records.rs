use chrono::Month;
use clima_types::{
    ClimaError, Co2Field, Co2Record, Co2Table, Period, Season, TemperatureField,
    TemperatureRecord, TemperatureTable,
};

fn table(years: &[i32]) -> TemperatureTable {
    let records = years
        .iter()
        .map(|&y| TemperatureRecord::new(y).with(TemperatureField::JanDec, f64::from(y - 1950) / 100.0))
        .collect();
    TemperatureTable::from_records(records).unwrap()
}

#[test]
fn temperature_table_sorts_and_rejects_duplicate_years() {
    let t = table(&[1953, 1951, 1952]);
    let years: Vec<i32> = t.records().iter().map(|r| r.year).collect();
    assert_eq!(years, vec![1951, 1952, 1953]);

    let dup = TemperatureTable::from_records(vec![
        TemperatureRecord::new(1951),
        TemperatureRecord::new(1951),
    ]);
    assert!(matches!(dup, Err(ClimaError::Data(_))));
}

#[test]
fn period_slice_is_inclusive_on_both_ends() {
    let t = table(&(1940..=1990).collect::<Vec<_>>());
    let slice = t.period(&Period::new(1951, 1980));
    assert_eq!(slice.len(), 30);
    assert_eq!(slice.first().unwrap().year, 1951);
    assert_eq!(slice.last().unwrap().year, 1980);

    assert!(t.period(&Period::new(2000, 2010)).is_empty());
}

#[test]
fn field_accessors_address_the_declared_columns() {
    let mut r = TemperatureRecord::new(2000);
    r.set(TemperatureField::Month(Month::March), Some(0.42));
    r.set(TemperatureField::Season(Season::Jja), Some(-0.1));

    assert_eq!(r.get(TemperatureField::Month(Month::March)), Some(0.42));
    assert_eq!(r.months[2], Some(0.42));
    assert_eq!(r.get(TemperatureField::Season(Season::Jja)), Some(-0.1));
    assert_eq!(r.get(TemperatureField::JanDec), None);

    assert_eq!(TemperatureField::Month(Month::March).column(), "Mar");
    assert_eq!(TemperatureField::JanDec.column(), "J-D");
    assert_eq!(TemperatureField::all().len(), 18);
}

#[test]
fn series_skips_missing_values() {
    let mut records = vec![TemperatureRecord::new(1880), TemperatureRecord::new(1881)];
    records[1].jan_dec = Some(-0.2);
    let t = TemperatureTable::from_records(records).unwrap();
    assert_eq!(t.series(TemperatureField::JanDec), vec![(1881, -0.2)]);
}

#[test]
fn co2_record_synthesizes_first_day_of_month() {
    let r = Co2Record::new(1974, 3).unwrap().with(Co2Field::Trend, 330.1);
    assert_eq!(r.date.to_string(), "1974-03-01");
    assert_eq!(r.calendar_month(), Some(Month::March));
    assert_eq!(r.get(Co2Field::Trend), Some(330.1));

    assert!(matches!(Co2Record::new(1974, 13), Err(ClimaError::Data(_))));
}

#[test]
fn co2_table_rejects_duplicate_months() {
    let a = Co2Record::new(1960, 1).unwrap();
    let b = Co2Record::new(1960, 1).unwrap();
    assert!(matches!(
        Co2Table::from_records(vec![a, b]),
        Err(ClimaError::Data(_))
    ));
}

#[test]
fn stage_tagging_keeps_the_innermost_stage() {
    let err = ClimaError::schema("temperature", "Year")
        .in_stage("load temperature")
        .in_stage("run");
    assert_eq!(err.stage(), Some("load temperature"));
    assert!(matches!(err.root(), ClimaError::Schema { .. }));
}
