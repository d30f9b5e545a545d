//! Journal entry storage implementation

use std::fs;
use std::path::PathBuf;

use chrono::Utc;
use thiserror::Error;
use uuid::Uuid;

use super::models::{NewEntryRequest, RawMoodRecord};
use super::scale::Mood;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Data directory not found")]
    DataDirNotFound,

    #[error("Invalid entry: {0}")]
    InvalidEntry(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// File-backed store for mood records
pub struct JournalStorage {
    journal_dir: PathBuf,
}

impl JournalStorage {
    /// Create a new journal storage
    pub fn new(data_dir: PathBuf) -> Result<Self> {
        let journal_dir = data_dir.join("journal");
        fs::create_dir_all(&journal_dir)?;

        Ok(Self { journal_dir })
    }

    /// Get the default data directory
    pub fn default_data_dir() -> Result<PathBuf> {
        dirs::data_local_dir()
            .map(|p| p.join("thymos"))
            .ok_or(StorageError::DataDirNotFound)
    }

    /// Get the path to the entries file
    fn entries_file(&self) -> PathBuf {
        self.journal_dir.join("entries.json")
    }

    /// Fetch all stored records in file order.
    ///
    /// Callers must not rely on this ordering; normalization sorts.
    pub fn fetch_all(&self) -> Result<Vec<RawMoodRecord>> {
        let path = self.entries_file();
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(path)?;
        let records: Vec<RawMoodRecord> = serde_json::from_str(&content)?;
        Ok(records)
    }

    /// Append a new entry stamped with the current time.
    ///
    /// The symbol is validated against the mood palette before anything is
    /// written; a failed append leaves the store unchanged and the error is
    /// surfaced to the caller.
    pub fn append(&self, request: NewEntryRequest) -> Result<RawMoodRecord> {
        if Mood::from_symbol(&request.symbol).is_none() {
            return Err(StorageError::InvalidEntry(format!(
                "Unknown mood symbol: {}",
                request.symbol
            )));
        }

        let record = RawMoodRecord {
            id: Uuid::new_v4(),
            timestamp: Some(Utc::now()),
            symbol: Some(request.symbol),
            comment: request.comment,
        };

        let mut records = self.fetch_all()?;
        records.push(record.clone());
        self.save_records(&records)?;
        Ok(record)
    }

    /// Save all records to file
    fn save_records(&self, records: &[RawMoodRecord]) -> Result<()> {
        let json = serde_json::to_string_pretty(records)?;
        fs::write(self.entries_file(), json)?;
        Ok(())
    }
}
