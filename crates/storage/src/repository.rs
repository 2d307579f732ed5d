use async_trait::async_trait;
use phage_core::model::{RecordError, ResultRecord};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("data file not found: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("invalid record on line {line}: {source}")]
    InvalidRecord { line: u64, source: RecordError },
}

/// Read-only access to the precomputed prediction dataset.
#[async_trait]
pub trait ResultRepository: Send + Sync {
    /// Load every record in source order.
    ///
    /// Implementations load at most once and hand out the same shared slice afterwards.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the dataset cannot be read or contains invalid rows.
    async fn load_results(&self) -> Result<Arc<[ResultRecord]>, StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    records: Arc<Mutex<Vec<ResultRecord>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
        }
    }

    #[must_use]
    pub fn with_records(records: Vec<ResultRecord>) -> Self {
        Self {
            records: Arc::new(Mutex::new(records)),
        }
    }

    /// Append a record to the end of the dataset.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the lock is poisoned.
    pub fn push(&self, record: ResultRecord) -> Result<(), StorageError> {
        let mut guard = self
            .records
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.push(record);
        Ok(())
    }
}

#[async_trait]
impl ResultRepository for InMemoryRepository {
    async fn load_results(&self) -> Result<Arc<[ResultRecord]>, StorageError> {
        let guard = self
            .records
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.clone().into())
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub results: Arc<dyn ResultRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory(records: Vec<ResultRecord>) -> Self {
        let results: Arc<dyn ResultRepository> =
            Arc::new(InMemoryRepository::with_records(records));
        Self { results }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(bacterium: &str, phage: &str, score: f64) -> ResultRecord {
        ResultRecord::new(bacterium.into(), phage.into(), score).unwrap()
    }

    #[tokio::test]
    async fn in_memory_keeps_source_order() {
        let repo = InMemoryRepository::new();
        repo.push(record("B1", "P2", 0.1)).unwrap();
        repo.push(record("B1", "P1", 0.9)).unwrap();

        let loaded = repo.load_results().await.unwrap();
        let phages: Vec<_> = loaded.iter().map(|r| r.phage().as_str()).collect();
        assert_eq!(phages, ["P2", "P1"]);
    }

    #[tokio::test]
    async fn storage_in_memory_exposes_records() {
        let storage = Storage::in_memory(vec![record("B1", "P1", 0.5)]);
        let loaded = storage.results.load_results().await.unwrap();
        assert_eq!(loaded.len(), 1);
    }
}
