// crates/countrysearch-core/src/prelude.rs
pub use crate::api::{format_population, DetailPanel, SuggestionView};
pub use crate::controller::{Phase, SearchBar, SearchBarConfig, SearchEvent, SearchState};
pub use crate::error::{Result, SearchError};
pub use crate::model::{Country, Dataset, OfficialLanguages};
pub use crate::search::filter_countries;
pub use crate::traits::{Autosuggest, AutosuggestSource, NameMatch};
