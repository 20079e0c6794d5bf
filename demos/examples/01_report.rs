use clima::{Clima, ClimaConfig};
use clima_demos::common::{base_dir, get_source};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Point the configuration at the report workspace.
    let cfg = ClimaConfig {
        base_dir: base_dir(),
        ..ClimaConfig::default()
    };

    // 2. Build the orchestrator (mock data in CI when CLIMA_DEMOS_USE_MOCK is set).
    let source = get_source(&cfg);
    let clima = Clima::builder().config(cfg).with_source(source).build()?;

    // 3. Run every stage once.
    let report = clima.run()?;

    // 4. Print the headline numbers.
    println!(
        "Loaded {} temperature rows and {} CO₂ rows",
        report.temperature.rows_kept, report.co2.rows_kept
    );
    for q in &report.quantiles {
        println!(
            "Quantile {:.0}% of annual anomaly ({}): {:.3} °C",
            q.level * 100.0,
            report.quantile_period,
            q.value
        );
    }
    let hot = report.exceedance;
    println!(
        "Hot years in {} (>= {:.2} °C): {}/{} ({:.1}%)",
        report.exceedance_period, hot.threshold, hot.count, hot.total, hot.percentage
    );
    println!(
        "{:?} anomaly vs. CO₂ trend over {} years: r = {:.3}, p = {:.2e}",
        report.featured_month, report.joined_rows, report.correlation.r, report.correlation.p_value
    );
    for path in &report.outputs {
        println!("wrote {}", path.display());
    }
    Ok(())
}
