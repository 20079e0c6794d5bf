use std::path::PathBuf;
use std::sync::Arc;

use clima::{ClimaConfig, ClimateSource, FileSource};

/// Whether the demos should run against the in-memory fixtures.
#[must_use]
pub fn use_mock() -> bool {
    std::env::var_os("CLIMA_DEMOS_USE_MOCK").is_some()
}

/// Report workspace for demos.
///
/// `CLIMA_BASE_DIR` wins; otherwise mock runs write under the system temp
/// directory and real runs use the current directory.
#[must_use]
pub fn base_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os("CLIMA_BASE_DIR") {
        return PathBuf::from(dir);
    }
    if use_mock() {
        std::env::temp_dir().join(format!("clima-demos-{}", std::process::id()))
    } else {
        PathBuf::from(".")
    }
}

/// Return a source for demos.
#[must_use]
pub fn get_source(cfg: &ClimaConfig) -> Arc<dyn ClimateSource> {
    if use_mock() {
        println!("--- (Using Mock Source for CI) ---");
        Arc::new(clima_mock::MockSource::new())
    } else {
        Arc::new(FileSource::from_config(cfg))
    }
}
