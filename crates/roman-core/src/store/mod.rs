//! CSV persistence for converted values.
//!
//! Each call opens the file, does one append or one full read, and closes it
//! again when the handle drops, including on error paths.

#[cfg(test)]
mod tests;

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::settings::settings;

/// One CSV row: an ordered list of fields.
pub type Record = Vec<String>;

/// A stored conversion, written as `roman,decimal`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionRecord {
    pub roman: String,
    pub decimal: u32,
}

impl ConversionRecord {
    pub fn new(roman: impl Into<String>, decimal: u32) -> Self {
        Self {
            roman: roman.into(),
            decimal,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("malformed record at line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },
}

pub struct ConversionStore {
    path: PathBuf,
}

impl ConversionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `store.file_name` from the global settings.
    pub fn from_settings() -> Self {
        Self::new(&settings().store.file_name)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a single row, creating the file (and its parent directories)
    /// if needed.
    pub fn append<I, S>(&self, record: I) -> Result<(), StoreError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut writer = self.writer()?;
        writer.write_record(record.into_iter().map(|f| f.as_ref().to_owned()))?;
        writer.flush()?;
        debug!(path = %self.path.display(), "appended record");
        Ok(())
    }

    pub fn append_conversion(&self, record: &ConversionRecord) -> Result<(), StoreError> {
        let mut writer = self.writer()?;
        writer.serialize(record)?;
        writer.flush()?;
        debug!(
            path = %self.path.display(),
            roman = %record.roman,
            decimal = record.decimal,
            "appended conversion"
        );
        Ok(())
    }

    /// Read every row in file order. Rows may differ in length.
    pub fn load(&self) -> Result<Vec<Record>, StoreError> {
        let mut reader = self.reader()?;
        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            rows.push(record.iter().map(str::to_owned).collect());
        }
        debug!(path = %self.path.display(), rows = rows.len(), "loaded records");
        Ok(rows)
    }

    /// Read every row as a [`ConversionRecord`].
    pub fn load_conversions(&self) -> Result<Vec<ConversionRecord>, StoreError> {
        let mut reader = self.reader()?;
        let mut conversions = Vec::new();
        for result in reader.records() {
            let record = result?;
            let line = record.position().map_or(0, |p| p.line());
            if record.len() != 2 {
                return Err(StoreError::MalformedRecord {
                    line,
                    reason: format!("expected 2 fields, got {}", record.len()),
                });
            }
            let conversion: ConversionRecord =
                record.deserialize(None).map_err(|e| StoreError::MalformedRecord {
                    line,
                    reason: e.to_string(),
                })?;
            conversions.push(conversion);
        }
        Ok(conversions)
    }

    fn writer(&self) -> Result<csv::Writer<File>, StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        Ok(csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(file))
    }

    fn reader(&self) -> Result<csv::Reader<File>, StoreError> {
        let file = File::open(&self.path)?;
        Ok(csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(file))
    }
}
