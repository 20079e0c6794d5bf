use clima::{ClimaConfig, Month, TemperatureField};
use clima_core::{co2_since_year, join_on_year, nullify_co2_sentinel, pearson};
use clima_demos::common::{base_dir, get_source};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = ClimaConfig {
        base_dir: base_dir(),
        ..ClimaConfig::default()
    };
    let source = get_source(&cfg);

    // 1. Load both tables directly from the source.
    let temps = source.temperature()?.table;
    let co2 = source.co2()?.table;

    // 2. Clean the CO₂ sheet the same way the pipeline does.
    let co2 = co2_since_year(
        &nullify_co2_sentinel(&co2, cfg.co2_layout.missing),
        cfg.co2_cutoff_year,
    );

    // 3. Correlate every month's anomaly with the CO₂ trend of that month.
    for m in 1..=12u8 {
        let month = Month::try_from(m)?;
        let joined = join_on_year(&temps, &co2, month, TemperatureField::Month(month));
        let c = pearson(&joined.anomalies(), &joined.trends())?;
        println!(
            "{:<10} n = {:>3}  r = {:>6.3}  p = {:.2e}",
            month.name(),
            c.n,
            c.r,
            c.p_value
        );
    }
    Ok(())
}
