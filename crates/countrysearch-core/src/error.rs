// crates/countrysearch-core/src/error.rs

//! Error type for dataset loading.
//!
//! Filtering and the selection controller are total and never fail; only
//! reading and validating a dataset can.

use thiserror::Error;

/// Errors raised while loading a country dataset.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The dataset file could not be opened.
    #[error("dataset not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid dataset JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Country names are the selection key and must be unique.
    #[error("duplicate country name in dataset: {0}")]
    DuplicateCountry(String),

    #[error("country record with an empty name")]
    EmptyName,
}

pub type Result<T> = std::result::Result<T, SearchError>;
