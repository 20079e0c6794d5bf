use std::io::Write;
use std::path::Path;

use clima_core::ClimaError;
use tempfile::NamedTempFile;

/// Write `contents` to `path` through a temporary file in the same directory.
///
/// The destination either keeps its previous content or holds the complete new
/// content; a failed write leaves no partial file behind.
///
/// # Errors
/// Returns `ClimaError::Io` if the directory is not writable or any write fails.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), ClimaError> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    // dropped (and removed) on every early return
    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| ClimaError::io(dir, &e))?;
    tmp.write_all(contents)
        .and_then(|()| tmp.as_file().sync_all())
        .map_err(|e| ClimaError::io(tmp.path(), &e))?;
    tmp.persist(path)
        .map_err(|e| ClimaError::io(path, &e.error))?;
    Ok(())
}
