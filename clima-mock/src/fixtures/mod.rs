/// Monthly Mauna Loa-shaped CO₂ sheet.
pub mod co2;
/// GISTEMP-shaped anomaly table.
pub mod temperature;

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
