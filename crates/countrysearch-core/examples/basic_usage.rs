//! Basic usage example for countrysearch-core
//!
//! Walks the search bar through typing, picking a suggestion and clearing.

use countrysearch_core::prelude::*;

fn main() -> Result<()> {
    let dataset = Dataset::load()?;
    println!("=== Country search: {} countries ===\n", dataset.len());

    let mut bar = SearchBar::new(dataset);
    println!("[{}]", bar.input_props().placeholder);

    bar.on_change("lo");
    bar.on_suggestions_fetch_requested("lo");
    println!("\nQuery \"lo\":");
    for (i, country) in bar.suggestions().iter().copied().enumerate() {
        println!("{:>2}. {}", i + 1, bar.render_suggestion(country));
    }

    bar.on_suggestion_selected(0);
    if let Some(panel) = bar.detail_panel() {
        println!("\nSelected:\n{panel}");
    }

    bar.on_change("");
    println!("\nCleared, phase: {:?}", bar.state().phase());
    Ok(())
}
