//! Local storage for downloaded CSV attachments.
//!
//! Downloaded attachments land as plain files in a directory; this module
//! reads them back as header-keyed rows and deletes them once processed.
//! Deletion is permanent, with no confirmation step.

use std::collections::HashMap;
use std::fs::File;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// One CSV row, keyed by the column names from the header row.
pub type CsvRow = HashMap<String, String>;

/// Errors from reading or removing local CSV files.
#[derive(Debug, Error)]
pub enum CsvStoreError {
  /// The file is missing, unreadable, or cannot be removed.
  #[error("filesystem error at {path}: {source}")]
  Filesystem {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  /// The file exists but is not well-formed CSV.
  #[error("malformed CSV in {path}: {source}")]
  Parse {
    path: PathBuf,
    #[source]
    source: csv::Error,
  },
}

/// A CSV store rooted at a directory.
///
/// Filenames passed to [`read`](CsvStore::read) and
/// [`remove`](CsvStore::remove) are resolved relative to that directory.
pub struct CsvStore {
  dir: PathBuf,
}

impl CsvStore {
  /// Create a store rooted at the given directory.
  pub fn new(dir: impl Into<PathBuf>) -> Self {
    Self { dir: dir.into() }
  }

  /// Create a store rooted at the process's current working directory.
  pub fn in_current_dir() -> Result<Self, CsvStoreError> {
    let dir = std::env::current_dir().map_err(|source| CsvStoreError::Filesystem {
      path: PathBuf::from("."),
      source,
    })?;
    Ok(Self::new(dir))
  }

  /// Parse the named file as CSV and return its rows in file order.
  ///
  /// Each row maps column names from the header row to that row's values.
  pub fn read(&self, filename: &str) -> Result<Vec<CsvRow>, CsvStoreError> {
    let path = self.dir.join(filename);

    let file = File::open(&path).map_err(|source| CsvStoreError::Filesystem {
      path: path.clone(),
      source,
    })?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader
      .headers()
      .map_err(|source| CsvStoreError::Parse {
        path: path.clone(),
        source,
      })?
      .clone();

    let mut rows = Vec::new();
    for record in reader.records() {
      let record = record.map_err(|source| CsvStoreError::Parse {
        path: path.clone(),
        source,
      })?;

      let row: CsvRow = headers
        .iter()
        .zip(record.iter())
        .map(|(header, value)| (header.to_string(), value.to_string()))
        .collect();
      rows.push(row);
    }

    Ok(rows)
  }

  /// Delete the named file. The data is gone for good.
  pub fn remove(&self, filename: &str) -> Result<(), CsvStoreError> {
    let path = self.dir.join(filename);

    std::fs::remove_file(&path).map_err(|source| CsvStoreError::Filesystem { path, source })
  }
}
