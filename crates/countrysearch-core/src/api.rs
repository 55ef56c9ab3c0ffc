// crates/countrysearch-core/src/api.rs

//! Render views.
//!
//! Borrowing, serializable snapshots of a [`Country`] shaped for display:
//! one dropdown item ([`SuggestionView`]) and the detail panel
//! ([`DetailPanel`]). Hosts either print them via `Display` or ship them as
//! JSON (the wasm binding does).

use num_format::{Locale, ToFormattedString};
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;

use crate::model::Country;

/// Group a population the way `en` locales do (`67000000` → `"67,000,000"`).
pub fn format_population(n: u64) -> String {
    n.to_formatted_string(&Locale::en)
}

/// A labelled line such as `Currency: Euro`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field<'a> {
    pub label: &'static str,
    pub value: Cow<'a, str>,
}

impl fmt::Display for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.value)
    }
}

/// Collect the known fields of `country`; unknown ones are skipped.
fn fields<'a>(country: &'a Country, with_capital: bool, languages_label: &'static str) -> Vec<Field<'a>> {
    let mut out = Vec::with_capacity(4);
    if with_capital {
        if let Some(capital) = country.capital() {
            out.push(Field {
                label: "Capital",
                value: Cow::Borrowed(capital),
            });
        }
    }
    if let Some(pop) = country.population() {
        out.push(Field {
            label: "Population",
            value: Cow::Owned(format_population(pop)),
        });
    }
    if let Some(currency) = country.currency() {
        out.push(Field {
            label: "Currency",
            value: Cow::Borrowed(currency),
        });
    }
    if let Some(langs) = country.languages_display() {
        out.push(Field {
            label: languages_label,
            value: langs,
        });
    }
    out
}

/// One dropdown item: name, capital, then a details block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuggestionView<'a> {
    pub name: &'a str,
    pub capital: Option<&'a str>,
    pub details: Vec<Field<'a>>,
}

impl<'a> From<&'a Country> for SuggestionView<'a> {
    fn from(c: &'a Country) -> Self {
        SuggestionView {
            name: c.name(),
            capital: c.capital(),
            details: fields(c, false, "Languages"),
        }
    }
}

impl fmt::Display for SuggestionView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(capital) = self.capital {
            write!(f, " — {capital}")?;
        }
        for field in &self.details {
            write!(f, "\n    {field}")?;
        }
        Ok(())
    }
}

/// The panel shown under the input once a country is selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailPanel<'a> {
    pub heading: &'a str,
    pub fields: Vec<Field<'a>>,
}

impl<'a> DetailPanel<'a> {
    /// Rendered lines, heading excluded.
    pub fn lines(&self) -> Vec<String> {
        self.fields.iter().map(ToString::to_string).collect()
    }
}

impl<'a> From<&'a Country> for DetailPanel<'a> {
    fn from(c: &'a Country) -> Self {
        DetailPanel {
            heading: c.name(),
            fields: fields(c, true, "Official Language(s)"),
        }
    }
}

impl fmt::Display for DetailPanel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.heading)?;
        for field in &self.fields {
            write!(f, "\n  {field}")?;
        }
        Ok(())
    }
}
