//! Reading and writing library JSON files

use crate::error::{CriapromptError, Result};
use crate::prompt::PromptRecord;
use std::path::Path;
use walkdir::WalkDir;

/// Read records from a file, or from every `*.json` under a directory
pub(super) fn read_records(path: &Path) -> Result<Vec<PromptRecord>> {
    if path.is_file() {
        return read_file(path);
    }
    if !path.is_dir() {
        return Err(CriapromptError::LibraryNotFound {
            path: path.to_path_buf(),
        });
    }

    let mut records = Vec::new();
    for entry in WalkDir::new(path).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("skipping unreadable library entry: {}", e);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.path().extension().is_some_and(|ext| ext == "json") {
            records.extend(read_file(entry.path())?);
        } else {
            tracing::warn!(path = %entry.path().display(), "skipping non-JSON file in library");
        }
    }
    Ok(records)
}

fn read_file(path: &Path) -> Result<Vec<PromptRecord>> {
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| CriapromptError::LibraryParseError {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Write JSON atomically using NamedTempFile + persist
pub(super) fn write_records(path: &Path, records: &[PromptRecord]) -> Result<()> {
    use std::io::Write;
    use tempfile::NamedTempFile;

    if path.is_dir() {
        return Err(CriapromptError::LibraryWriteError(format!(
            "'{}' is a directory; only single-file libraries can be saved",
            path.display()
        )));
    }

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent).map_err(|e| {
        CriapromptError::LibraryWriteError(format!("Failed to create parent dir: {}", e))
    })?;

    let content = serde_json::to_string_pretty(records)?;

    let mut temp_file = NamedTempFile::new_in(parent).map_err(|e| {
        CriapromptError::LibraryWriteError(format!("Failed to create temp file: {}", e))
    })?;

    temp_file
        .write_all(content.as_bytes())
        .and_then(|_| temp_file.write_all(b"\n"))
        .map_err(|e| CriapromptError::LibraryWriteError(format!("Failed to write temp file: {}", e)))?;

    temp_file.as_file().sync_all().map_err(|e| {
        CriapromptError::LibraryWriteError(format!("Failed to sync temp file: {}", e))
    })?;

    temp_file.persist(path).map_err(|e| {
        CriapromptError::LibraryWriteError(format!("Failed to persist temp file: {}", e))
    })?;

    tracing::debug!(path = %path.display(), count = records.len(), "saved prompt library");
    Ok(())
}
