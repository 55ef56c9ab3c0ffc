//! Output of the one-shot subcommands.
//!
//! Each writer takes any `Write` so `main` can hand it stdout and tests an
//! in-memory buffer.

use countrysearch_core::traits::AutosuggestSource;
use countrysearch_core::{format_population, Dataset, DetailPanel, SearchBar};
use std::io::{self, Write};

pub fn write_stats<W: Write>(out: &mut W, dataset: &Dataset) -> io::Result<()> {
    let stats = dataset.stats();
    writeln!(out, "Dataset statistics:")?;
    writeln!(out, "  Countries: {}", stats.countries)?;
    writeln!(out, "  Official languages: {}", stats.languages)?;
    writeln!(out, "  Total population: {}", format_population(stats.total_population))
}

pub fn write_countries<W: Write>(out: &mut W, dataset: &Dataset) -> io::Result<()> {
    for c in dataset.countries() {
        match c.capital() {
            Some(capital) => writeln!(out, "{} ({capital})", c.name())?,
            None => writeln!(out, "{}", c.name())?,
        }
    }
    Ok(())
}

/// Runs `query` through the search bar the way a widget would.
pub fn write_search<W: Write>(out: &mut W, dataset: &Dataset, query: &str) -> io::Result<()> {
    let mut bar = SearchBar::new(dataset);
    bar.on_change(query);
    bar.on_suggestions_fetch_requested(query);
    if bar.suggestions().is_empty() {
        return writeln!(out, "No countries found matching: {query}");
    }
    for country in bar.suggestions().iter().copied() {
        writeln!(out, "{}", bar.render_suggestion(country))?;
    }
    Ok(())
}

/// Prints the detail panel; returns `false` if no country has that name.
pub fn write_show<W: Write>(out: &mut W, dataset: &Dataset, name: &str) -> io::Result<bool> {
    match dataset.find_country_by_name(name) {
        Some(c) => {
            writeln!(out, "{}", DetailPanel::from(c))?;
            Ok(true)
        }
        None => Ok(false),
    }
}
