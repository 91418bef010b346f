//! Expanding file and directory arguments into file lists.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{CorpusError, Result};

/// Returns `path` itself, or the immediate entries of a directory joined
/// onto it.
///
/// Directory entries are sorted by name so results do not depend on the
/// platform's listing order. Subdirectories are returned as-is, not
/// descended into.
///
/// # Errors
///
/// Returns [`IoError`](CorpusError::IoError) if `path` does not exist or
/// the directory cannot be listed.
pub fn expand_path(path: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let path = path.as_ref();
    let metadata = fs::metadata(path).map_err(|e| CorpusError::io(path, e))?;

    if !metadata.is_dir() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut entries: Vec<PathBuf> = fs::read_dir(path)
        .and_then(|dir| dir.map(|entry| entry.map(|e| e.path())).collect())
        .map_err(|e| CorpusError::io(path, e))?;
    entries.sort();

    debug!(dir = %path.display(), entries = entries.len(), "Expanded directory");
    Ok(entries)
}

/// Expands every path in order and concatenates the results.
pub fn expand_paths<I, P>(paths: I) -> Result<Vec<PathBuf>>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut expanded = Vec::new();
    for path in paths {
        expanded.extend(expand_path(path)?);
    }
    Ok(expanded)
}
