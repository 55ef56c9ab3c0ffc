// crates/countrysearch-core/src/search.rs

//! The suggestion filter.
//!
//! A linear scan: the dataset is a few hundred records at most, so there is
//! no index and no result cache.

use crate::model::{Country, Dataset};
use crate::text::{contains_folded, fold_lower};
use crate::traits::NameMatch;

impl NameMatch for Country {
    fn name_str(&self) -> &str {
        &self.name
    }
}

impl Country {
    /// `true` if the lowercased name or capital contains `folded_query`.
    ///
    /// `folded_query` must already be lowercased (see [`fold_lower`]).
    #[inline]
    pub fn matches_folded(&self, folded_query: &str) -> bool {
        contains_folded(&self.name, folded_query)
            || self
                .capital
                .as_deref()
                .is_some_and(|cap| contains_folded(cap, folded_query))
    }
}

/// Countries whose name or capital contains `query`, case-insensitively.
///
/// Order follows `countries`. The filter is pure: an empty query is a
/// substring of everything and returns every record. Callers that want an
/// empty dropdown for blank input (the controller does) short-circuit first.
///
/// ```rust
/// use countrysearch_core::{filter_countries, Country, OfficialLanguages};
///
/// let data = vec![
///     Country::new("France", "Paris", 67_000_000, "Euro", OfficialLanguages::Single("French".into())),
///     Country::new("Spain", "Madrid", 47_400_000, "Euro", OfficialLanguages::Single("Spanish".into())),
/// ];
/// let hits = filter_countries("PAR", &data);
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].name(), "France");
/// ```
pub fn filter_countries<'a>(query: &str, countries: &'a [Country]) -> Vec<&'a Country> {
    let q = fold_lower(query);
    countries.iter().filter(|c| c.matches_folded(&q)).collect()
}

impl Dataset {
    /// [`filter_countries`] over this dataset.
    pub fn filter(&self, query: &str) -> Vec<&Country> {
        filter_countries(query, self.countries())
    }

    /// Find a country by exact name, case-insensitive.
    pub fn find_country_by_name(&self, name: &str) -> Option<&Country> {
        let name = name.trim();
        self.countries().iter().find(|c| c.is_named(name))
    }
}
