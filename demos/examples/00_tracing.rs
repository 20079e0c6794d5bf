use clima::{Clima, ClimaConfig};
use clima_demos::common::{base_dir, get_source};
use tracing_subscriber::fmt::format::FmtSpan;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize a human-friendly tracing subscriber with env-based filtering.
    // Suggested: RUST_LOG=info,clima=trace,clima_core=debug
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    let cfg = ClimaConfig {
        base_dir: base_dir(),
        ..ClimaConfig::default()
    };
    let source = get_source(&cfg);
    let clima = Clima::builder().config(cfg).with_source(source).build()?;

    let report = clima.run()?;
    tracing::info!(outputs = report.outputs.len(), "run finished");
    Ok(())
}
