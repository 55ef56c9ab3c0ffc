// crates/countrysearch-core/src/lib.rs

//! countrysearch-core
//! ==================
//!
//! Logic for a country autosuggest widget: a text input whose dropdown
//! lists countries matching the query by name or capital, plus a detail
//! panel for the picked country.
//!
//! ```rust
//! use countrysearch_core::prelude::*;
//!
//! let dataset = Dataset::load()?;
//! let mut bar = SearchBar::new(dataset);
//!
//! bar.on_change("par");
//! bar.on_suggestions_fetch_requested("par");
//! assert!(bar.suggestions().iter().any(|c| c.name() == "France"));
//!
//! let idx = bar.suggestions().iter().position(|c| c.name() == "France").unwrap();
//! bar.on_suggestion_selected(idx);
//! let panel = bar.detail_panel().unwrap();
//! assert!(panel.lines().contains(&"Population: 67,000,000".to_string()));
//! # Ok::<(), countrysearch_core::SearchError>(())
//! ```

pub mod api;
pub mod common;
pub mod controller;
pub mod error;
pub mod loader;
pub mod model;
pub mod prelude;
pub mod search;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::api::{format_population, DetailPanel, Field, SuggestionView};
pub use crate::common::DatasetStats;
pub use crate::controller::{Phase, SearchBar, SearchBarConfig, SearchEvent, SearchState};
pub use crate::error::{Result, SearchError};
pub use crate::model::{Country, Dataset, OfficialLanguages};
pub use crate::search::filter_countries;
