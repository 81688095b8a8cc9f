//! Rating record writer implementations.

use std::collections::VecDeque;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::sync::RwLock;

use thiserror::Error;
use tracing::{debug, info};

use super::types::RatingRecord;

/// Record writer errors.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Record output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RecordFormat {
    /// JSON lines (one JSON object per line)
    #[default]
    Json,
    /// CSV format
    Csv,
}

/// Record writer trait.
pub trait RecordWriter: Send + Sync + std::fmt::Debug {
    /// Write a rating record.
    fn write(&self, record: &RatingRecord) -> Result<(), RecordError>;

    /// Flush pending writes.
    fn flush(&self) -> Result<(), RecordError>;

    /// Writer name for logging.
    fn name(&self) -> &str;
}

/// File-based record writer. Appends to a single file; a CSV header is
/// written only when the file starts empty.
#[derive(Debug)]
pub struct FileRecordWriter {
    name: String,
    path: PathBuf,
    format: RecordFormat,
    file: RwLock<Option<BufWriter<File>>>,
}

impl FileRecordWriter {
    /// Create new file record writer.
    pub fn new(name: &str, path: PathBuf, format: RecordFormat) -> Self {
        Self {
            name: name.to_string(),
            path,
            format,
            file: RwLock::new(None),
        }
    }

    fn ensure_open(&self) -> Result<(), RecordError> {
        let mut file = self.file.write().unwrap();
        if file.is_some() {
            return Ok(());
        }

        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let handle = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let is_new = handle.metadata()?.len() == 0;

        let mut writer = BufWriter::new(handle);
        if is_new && self.format == RecordFormat::Csv {
            writeln!(writer, "{}", RatingRecord::csv_header())?;
        }

        info!(
            writer = %self.name,
            path = %self.path.display(),
            "opened record file"
        );

        *file = Some(writer);
        Ok(())
    }

    fn format_record(&self, record: &RatingRecord) -> Result<String, RecordError> {
        match self.format {
            RecordFormat::Json => {
                serde_json::to_string(record).map_err(|e| RecordError::Serialization(e.to_string()))
            }
            RecordFormat::Csv => Ok(record.to_csv_line()),
        }
    }
}

impl RecordWriter for FileRecordWriter {
    fn write(&self, record: &RatingRecord) -> Result<(), RecordError> {
        self.ensure_open()?;

        let line = self.format_record(record)?;

        let mut file = self.file.write().unwrap();
        if let Some(writer) = file.as_mut() {
            writeln!(writer, "{}", line)?;

            debug!(
                writer = %self.name,
                country = %record.destination_country,
                "wrote rating record"
            );
        }

        Ok(())
    }

    fn flush(&self) -> Result<(), RecordError> {
        let mut file = self.file.write().unwrap();
        if let Some(writer) = file.as_mut() {
            writer.flush()?;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// In-memory record writer (for testing/debugging).
#[derive(Debug)]
pub struct MemoryRecordWriter {
    name: String,
    records: RwLock<VecDeque<RatingRecord>>,
    max_records: usize,
}

impl MemoryRecordWriter {
    /// Create new memory record writer.
    pub fn new(name: &str, max_records: usize) -> Self {
        Self {
            name: name.to_string(),
            records: RwLock::new(VecDeque::with_capacity(max_records)),
            max_records,
        }
    }

    /// Get recent records, newest first.
    pub fn recent(&self, count: usize) -> Vec<RatingRecord> {
        let records = self.records.read().unwrap();
        records.iter().rev().take(count).cloned().collect()
    }

    /// Get total count.
    pub fn count(&self) -> usize {
        self.records.read().unwrap().len()
    }

    /// Sum of quoted costs in the base currency.
    pub fn total_base_cost(&self) -> f64 {
        let records = self.records.read().unwrap();
        records.iter().map(|r| r.cost_in_base_currency).sum()
    }

    /// Clear all records.
    pub fn clear(&self) {
        self.records.write().unwrap().clear();
    }
}

impl RecordWriter for MemoryRecordWriter {
    fn write(&self, record: &RatingRecord) -> Result<(), RecordError> {
        let mut records = self.records.write().unwrap();

        if records.len() >= self.max_records {
            records.pop_front();
        }

        records.push_back(record.clone());

        debug!(
            writer = %self.name,
            country = %record.destination_country,
            total = records.len(),
            "wrote rating record to memory"
        );

        Ok(())
    }

    fn flush(&self) -> Result<(), RecordError> {
        Ok(()) // No-op for memory writer
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tariff::Direction;

    fn record(country: &str, cost: f64) -> RatingRecord {
        RatingRecord::new(5.0, country, Direction::Export, cost, "MAD")
    }

    #[test]
    fn test_memory_writer() {
        let writer = MemoryRecordWriter::new("test", 100);

        writer.write(&record("France", 140.0)).unwrap();

        assert_eq!(writer.count(), 1);

        let recent = writer.recent(10);
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].destination_country, "France");
    }

    #[test]
    fn test_memory_writer_max_records() {
        let writer = MemoryRecordWriter::new("test", 2);

        writer.write(&record("France", 140.0)).unwrap();
        writer.write(&record("Espagne", 140.0)).unwrap();
        writer.write(&record("Tunisie", 140.0)).unwrap();

        assert_eq!(writer.count(), 2);

        let recent = writer.recent(10);
        assert_eq!(recent[0].destination_country, "Tunisie");
        assert_eq!(recent[1].destination_country, "Espagne");
    }

    #[test]
    fn test_total_base_cost() {
        let writer = MemoryRecordWriter::new("test", 100);

        writer.write(&record("France", 140.0)).unwrap();
        writer.write(&record("Turquie", 180.0)).unwrap();

        assert_eq!(writer.total_base_cost(), 320.0);
    }

    #[test]
    fn test_file_writer_json_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quotes.jsonl");

        let writer = FileRecordWriter::new("test", path.clone(), RecordFormat::Json);
        writer.write(&record("France", 140.0)).unwrap();
        writer.write(&record("Turquie", 180.0)).unwrap();
        writer.flush().unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);

        let parsed: RatingRecord = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(parsed.destination_country, "France");
    }

    #[test]
    fn test_file_writer_csv_header_written_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quotes.csv");

        {
            let writer = FileRecordWriter::new("test", path.clone(), RecordFormat::Csv);
            writer.write(&record("France", 140.0)).unwrap();
            writer.flush().unwrap();
        }

        // Reopening appends without repeating the header.
        {
            let writer = FileRecordWriter::new("test", path.clone(), RecordFormat::Csv);
            writer.write(&record("Espagne", 140.0)).unwrap();
            writer.flush().unwrap();
        }

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], RatingRecord::csv_header());
        assert!(lines[1].contains("France"));
        assert!(lines[2].contains("Espagne"));
    }
}
