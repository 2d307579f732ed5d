//! Shared error types for the services crate.

use thiserror::Error;

use phage_core::config::ConfigError;
use phage_core::model::BacteriumId;
use storage::repository::StorageError;

/// The configured bacterium has no rows in the dataset.
///
/// Callers degrade to an empty result view instead of failing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LookupError {
    #[error("no results for bacterium {bacterium}")]
    NotFound { bacterium: BacteriumId },
}

/// Errors emitted while bootstrapping app services. All of them are fatal at startup.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
