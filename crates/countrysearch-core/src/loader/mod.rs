// crates/countrysearch-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the Physical Layer (I/O, Decompression) and hands the payload to
//! `serde_json`. Every path goes through `TryFrom<RawDataset>`, so a loaded
//! dataset always has unique, non-blank names.

use crate::error::Result;
use crate::model::{Dataset, RawDataset};
use once_cell::sync::OnceCell;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

mod common_io;

pub use common_io::is_gzip_path;

// Single in-process cache so the bundled copy is parsed once per process.
static BUNDLED_CACHE: OnceCell<Dataset> = OnceCell::new();

static BUNDLED_JSON: &str = include_str!("../../data/countries.json");

impl Dataset {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "countries.json"
    }

    /// Load the dataset compiled into the crate.
    ///
    /// The first call parses and validates it; later calls return the same
    /// `&'static` instance, which lets controllers borrow it for the whole
    /// program.
    pub fn load() -> Result<&'static Dataset> {
        BUNDLED_CACHE.get_or_try_init(|| {
            let dataset = Self::from_json_str(BUNDLED_JSON)?;
            info!(countries = dataset.len(), "loaded bundled country dataset");
            Ok(dataset)
        })
    }

    /// Load a dataset from disk. Files ending in `.gz` are decompressed
    /// (requires the `compact` feature).
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader = common_io::open_stream(path)?;
        let dataset = Self::from_reader(reader)?;
        info!(
            path = %path.display(),
            countries = dataset.len(),
            "loaded country dataset"
        );
        Ok(dataset)
    }

    /// Parse and validate a dataset from any reader carrying plain JSON.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let raw: RawDataset = serde_json::from_reader(reader)?;
        let dataset = Dataset::try_from(raw)?;
        debug!(countries = dataset.len(), "dataset validated");
        Ok(dataset)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: RawDataset = serde_json::from_str(json)?;
        Dataset::try_from(raw)
    }
}
