//! JSON data file store for job application records.
//!
//! A data file holds one [`JobFile`], a flat JSON array of records. Every
//! write rewrites the whole file; there is no partial or streaming update.

use std::fs;
use std::path::{Path, PathBuf};

use jobrec_model::{JobApplication, JobFile, RecordId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access data file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse data file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("no record with id {id} in {path}")]
    RecordNotFound { path: PathBuf, id: RecordId },
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Read all records from a data file.
pub fn read_records(path: &Path) -> Result<JobFile> {
    let contents = fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Overwrite the data file with the given records (pretty-printed JSON).
pub fn write_records(path: &Path, records: &JobFile) -> Result<()> {
    let contents = serde_json::to_string_pretty(records).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, contents).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), count = records.len(), "wrote data file");
    Ok(())
}

/// Create a structurally valid empty data file (`[]`).
pub fn write_placeholder(path: &Path) -> Result<()> {
    write_records(path, &JobFile::default())
}

/// Append one record. A missing file is treated as empty so the first save
/// into a freshly chosen path works without a separate create step.
pub fn append_record(path: &Path, record: JobApplication) -> Result<()> {
    let mut file = if path.exists() {
        read_records(path)?
    } else {
        JobFile::default()
    };
    file.applications.push(record);
    write_records(path, &file)
}

/// Replace the record with `id` in place, preserving its position, and
/// rewrite the whole file.
pub fn replace_record(path: &Path, id: RecordId, record: JobApplication) -> Result<()> {
    let mut file = read_records(path)?;
    let slot = file
        .applications
        .iter_mut()
        .find(|existing| existing.id == id)
        .ok_or_else(|| StoreError::RecordNotFound {
            path: path.to_path_buf(),
            id,
        })?;
    *slot = record;
    write_records(path, &file)
}
