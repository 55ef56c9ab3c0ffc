// crates/countrysearch-core/src/model.rs

//! # The Country Model
//!
//! A [`Dataset`] is an immutable, ordered list of [`Country`] records. It is
//! loaded once (see [`crate::loader`]) and then only borrowed: suggestions
//! and selections are `&Country` references into it, never copies.
//!
//! **Source shape:**
//! `{ "countries": [ { "country", "capital", "population", "currency", "official_language" } ] }`

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashSet;

use crate::common::DatasetStats;
use crate::error::{Result, SearchError};
use crate::text::fold_lower;

/// Separator used when a country has several official languages.
pub const LANGUAGE_SEPARATOR: &str = ", ";

/// Official language(s) of a country.
///
/// The source data stores either a single string or an array of strings;
/// serde picks the variant from the JSON shape.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OfficialLanguages {
    Single(String),
    Multiple(Vec<String>),
}

impl OfficialLanguages {
    /// Display text: a `Multiple` is joined with `", "`, a `Single` is used as is.
    ///
    /// ```rust
    /// use countrysearch_core::OfficialLanguages;
    ///
    /// let two = OfficialLanguages::Multiple(vec!["English".into(), "French".into()]);
    /// assert_eq!(two.display(), "English, French");
    /// assert_eq!(OfficialLanguages::Single("Spanish".into()).display(), "Spanish");
    /// ```
    pub fn display(&self) -> Cow<'_, str> {
        match self {
            OfficialLanguages::Single(lang) => Cow::Borrowed(lang.as_str()),
            OfficialLanguages::Multiple(langs) => Cow::Owned(langs.join(LANGUAGE_SEPARATOR)),
        }
    }

    /// Iterate the individual languages in source order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let slice: &[String] = match self {
            OfficialLanguages::Single(lang) => std::slice::from_ref(lang),
            OfficialLanguages::Multiple(langs) => langs,
        };
        slice.iter().map(String::as_str)
    }
}

/// A country record.
///
/// Only `name` is required. Missing optional fields load fine and are
/// rendered as nothing; a missing capital never matches a query.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    #[serde(rename = "country")]
    pub name: String,
    #[serde(default)]
    pub capital: Option<String>,
    #[serde(default)]
    pub population: Option<u64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default, rename = "official_language")]
    pub official_languages: Option<OfficialLanguages>,
}

impl Country {
    /// Convenience constructor for a fully populated record.
    pub fn new(
        name: impl Into<String>,
        capital: impl Into<String>,
        population: u64,
        currency: impl Into<String>,
        official_languages: OfficialLanguages,
    ) -> Self {
        Country {
            name: name.into(),
            capital: Some(capital.into()),
            population: Some(population),
            currency: Some(currency.into()),
            official_languages: Some(official_languages),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn capital(&self) -> Option<&str> {
        self.capital.as_deref()
    }

    pub fn population(&self) -> Option<u64> {
        self.population
    }

    pub fn currency(&self) -> Option<&str> {
        self.currency.as_deref()
    }

    pub fn official_languages(&self) -> Option<&OfficialLanguages> {
        self.official_languages.as_ref()
    }

    /// Official languages as display text, if known.
    pub fn languages_display(&self) -> Option<Cow<'_, str>> {
        self.official_languages.as_ref().map(OfficialLanguages::display)
    }
}

/// Top-level dataset.
///
/// Every name is non-blank and unique (case-insensitive). Deserializing
/// goes through the same check, so there is no unvalidated way in.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDataset")]
pub struct Dataset {
    countries: Vec<Country>,
}

/// Unvalidated source shape.
#[derive(Deserialize)]
pub(crate) struct RawDataset {
    countries: Vec<Country>,
}

impl TryFrom<RawDataset> for Dataset {
    type Error = SearchError;

    fn try_from(raw: RawDataset) -> Result<Self> {
        Dataset::from_countries(raw.countries)
    }
}

impl Dataset {
    /// Build a dataset from records, enforcing name uniqueness.
    pub fn from_countries(countries: Vec<Country>) -> Result<Self> {
        let dataset = Dataset { countries };
        dataset.validate()?;
        Ok(dataset)
    }

    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.countries.len());
        for c in &self.countries {
            if c.name.trim().is_empty() {
                return Err(SearchError::EmptyName);
            }
            if !seen.insert(fold_lower(&c.name)) {
                return Err(SearchError::DuplicateCountry(c.name.clone()));
            }
        }
        Ok(())
    }

    /// All countries in source order.
    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    pub fn stats(&self) -> DatasetStats {
        let languages: HashSet<&str> = self
            .countries
            .iter()
            .filter_map(Country::official_languages)
            .flat_map(OfficialLanguages::iter)
            .collect();

        DatasetStats {
            countries: self.countries.len(),
            languages: languages.len(),
            total_population: self.countries.iter().filter_map(|c| c.population).sum(),
        }
    }
}
