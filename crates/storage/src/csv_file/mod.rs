use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use phage_core::model::ResultRecord;
use tokio::sync::OnceCell;

use crate::repository::{ResultRepository, Storage, StorageError};

mod mapping;

pub use mapping::{read_records, write_records};

/// CSV-backed dataset. The file is parsed on first access and reused afterwards.
#[derive(Clone)]
pub struct CsvResultRepository {
    path: PathBuf,
    cache: Arc<OnceCell<Arc<[ResultRecord]>>>,
}

impl CsvResultRepository {
    /// Point the repository at a CSV file.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::MissingFile` if `path` does not name a file.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        if !path.is_file() {
            return Err(StorageError::MissingFile(path));
        }
        Ok(Self {
            path,
            cache: Arc::new(OnceCell::new()),
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.cache.initialized()
    }

    fn read_file(&self) -> Result<Arc<[ResultRecord]>, StorageError> {
        let file = File::open(&self.path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => StorageError::MissingFile(self.path.clone()),
            _ => StorageError::Connection(e.to_string()),
        })?;
        let records = read_records(BufReader::new(file))?;
        tracing::info!(
            path = %self.path.display(),
            rows = records.len(),
            "loaded results dataset"
        );
        Ok(records.into())
    }
}

#[async_trait]
impl ResultRepository for CsvResultRepository {
    async fn load_results(&self) -> Result<Arc<[ResultRecord]>, StorageError> {
        let records = self
            .cache
            .get_or_try_init(|| async { self.read_file() })
            .await?;
        Ok(Arc::clone(records))
    }
}

impl Storage {
    /// Build a `Storage` backed by a CSV export.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::MissingFile` if the file does not exist.
    pub fn csv(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let results: Arc<dyn ResultRepository> = Arc::new(CsvResultRepository::open(path)?);
        Ok(Self { results })
    }
}
