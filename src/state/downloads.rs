//! Saving generated documents to the download directory

use anyhow::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Name used when the server supplies nothing usable
const FALLBACK_NAME: &str = "documento";

/// Reduce a server-supplied filename to a safe local name
pub fn local_filename(filename: &str) -> String {
    let cleaned = sanitize_filename::sanitize(filename.trim());
    if cleaned.is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        cleaned
    }
}

/// Write `bytes` to `dir/filename` atomically.
///
/// The bytes go to a temporary file in the same directory first; it is only
/// renamed into place once fully written and is deleted on any failure.
pub fn save_document(dir: &Path, filename: &str, bytes: &[u8]) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;

    let target = dir.join(local_filename(filename));
    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(bytes)?;
    temp.flush()?;
    temp.persist(&target)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to save {}", target.display()))?;

    tracing::info!(path = %target.display(), size = bytes.len(), "document saved");
    Ok(target)
}
