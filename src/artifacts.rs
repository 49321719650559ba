//! Artifact writing with all-or-nothing semantics.
//!
//! Both output files are produced fully in memory before this module runs;
//! each is written to a temporary sibling and renamed into place, and a
//! failure on the second artifact removes the first. A run therefore never
//! leaves a partial or unpaired output behind.

use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

/// Error writing an output artifact.
#[derive(Debug, Error)]
#[error("failed to write {path}: {source}")]
pub struct ArtifactWriteError {
    /// The path that could not be written.
    pub path: String,
    /// The underlying IO failure.
    #[source]
    pub source: std::io::Error,
}

/// Write both artifacts, or neither.
pub fn write_artifacts(
    image_path: &Path,
    image_bytes: &[u8],
    meta_path: &Path,
    meta_bytes: &[u8],
) -> Result<(), ArtifactWriteError> {
    write_atomic(image_path, image_bytes)?;
    if let Err(err) = write_atomic(meta_path, meta_bytes) {
        let _ = fs::remove_file(image_path);
        return Err(err);
    }
    Ok(())
}

/// Write `bytes` to a `.tmp` sibling and rename it over `path`.
fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), ArtifactWriteError> {
    let fail = |source| ArtifactWriteError {
        path: path.display().to_string(),
        source,
    };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(fail)?;
        }
    }
    let file_name = path.file_name().ok_or_else(|| {
        fail(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "path has no file name",
        ))
    })?;
    let mut tmp_name = file_name.to_os_string();
    tmp_name.push(".tmp");
    let tmp = path.with_file_name(tmp_name);

    fs::write(&tmp, bytes).map_err(fail)?;
    if let Err(err) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(fail(err));
    }
    debug!("wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}
