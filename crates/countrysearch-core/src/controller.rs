// crates/countrysearch-core/src/controller.rs

//! # Selection Controller
//!
//! [`SearchState`] holds the transient widget state: the query text, the
//! dropdown suggestions and the selected country. It changes only through
//! [`SearchState::apply`], a pure `(state, event) -> state` transition, so
//! the whole state machine is testable without a UI.
//!
//! | phase      | query                | selection |
//! |------------|----------------------|-----------|
//! | `Empty`    | `""`                 | none      |
//! | `Typing`   | non-empty            | none      |
//! | `Selected` | `== selection.name`  | some      |
//!
//! Editing the query away from the selected name drops the selection, so
//! the detail panel never shows a country the input no longer names.
//!
//! Only `FetchRequested` fills the dropdown. `InputChanged` leaves it alone
//! because widgets write the highlighted or clicked suggestion into the
//! input before reporting the selection by index, and that index must still
//! point into the list the user saw.
//!
//! [`SearchBar`] wraps a state together with its dataset and config and
//! implements [`AutosuggestSource`] for host widgets.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::api::DetailPanel;
use crate::model::{Country, Dataset};
use crate::traits::{AutosuggestSource, InputProps};

pub const DEFAULT_PLACEHOLDER: &str = "Search by country name or capital";

/// Input events the controller reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchEvent<'e> {
    /// The input text changed. Empty text also empties the dropdown.
    InputChanged(&'e str),
    /// The widget asks for suggestions for this text.
    FetchRequested(&'e str),
    /// The widget dismissed the dropdown.
    ClearRequested,
    /// The user picked the suggestion at this index of the current list.
    SuggestionSelected(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Empty,
    Typing,
    Selected,
}

/// Query, suggestions and selection.
///
/// Suggestions and selection borrow from the dataset, so a selection is
/// always an element of it, never a copy.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState<'a> {
    query: String,
    suggestions: Vec<&'a Country>,
    selection: Option<&'a Country>,
}

/// Suggestions for `query`; blank input yields an empty dropdown.
fn fetch<'a>(query: &str, dataset: &'a Dataset) -> Vec<&'a Country> {
    if query.trim().is_empty() {
        Vec::new()
    } else {
        dataset.filter(query)
    }
}

impl<'a> SearchState<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn suggestions(&self) -> &[&'a Country] {
        &self.suggestions
    }

    pub fn selection(&self) -> Option<&'a Country> {
        self.selection
    }

    pub fn phase(&self) -> Phase {
        match (self.query.is_empty(), self.selection) {
            (true, _) => Phase::Empty,
            (false, None) => Phase::Typing,
            (false, Some(_)) => Phase::Selected,
        }
    }

    /// The detail panel, shown only for a selection under a non-empty query.
    pub fn detail_panel(&self) -> Option<DetailPanel<'a>> {
        if self.query.is_empty() {
            return None;
        }
        self.selection.map(DetailPanel::from)
    }

    /// Apply one event and return the next state.
    pub fn apply(mut self, event: SearchEvent<'_>, dataset: &'a Dataset) -> Self {
        match event {
            SearchEvent::InputChanged(text) => {
                self.query = text.to_string();
                if text.is_empty() {
                    self.selection = None;
                    self.suggestions.clear();
                } else if self.selection.is_some_and(|sel| sel.name() != text) {
                    self.selection = None;
                }
            }
            SearchEvent::FetchRequested(text) => {
                self.suggestions = fetch(text, dataset);
            }
            SearchEvent::ClearRequested => {
                self.suggestions.clear();
            }
            SearchEvent::SuggestionSelected(index) => match self.suggestions.get(index).copied() {
                Some(country) => {
                    self.query = country.name().to_string();
                    self.selection = Some(country);
                    self.suggestions.clear();
                }
                None => {
                    warn!(
                        index,
                        available = self.suggestions.len(),
                        "ignoring selection outside the suggestion list"
                    );
                }
            },
        }
        debug!(
            ?event,
            query = %self.query,
            suggestions = self.suggestions.len(),
            selected = self.selection.map(Country::name),
            "search state updated"
        );
        self
    }
}

/// Host-facing configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchBarConfig {
    pub placeholder: String,
}

impl Default for SearchBarConfig {
    fn default() -> Self {
        SearchBarConfig {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

/// The search widget: a dataset, its config and the current state.
#[derive(Debug, Clone)]
pub struct SearchBar<'a> {
    dataset: &'a Dataset,
    config: SearchBarConfig,
    state: SearchState<'a>,
}

impl<'a> SearchBar<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        Self::with_config(dataset, SearchBarConfig::default())
    }

    pub fn with_config(dataset: &'a Dataset, config: SearchBarConfig) -> Self {
        SearchBar {
            dataset,
            config,
            state: SearchState::new(),
        }
    }

    pub fn state(&self) -> &SearchState<'a> {
        &self.state
    }

    pub fn dispatch(&mut self, event: SearchEvent<'_>) {
        let state = std::mem::take(&mut self.state);
        self.state = state.apply(event, self.dataset);
    }

    pub fn selection(&self) -> Option<&'a Country> {
        self.state.selection()
    }
}

impl<'a> AutosuggestSource<'a> for SearchBar<'a> {
    fn input_props(&self) -> InputProps<'_> {
        InputProps {
            placeholder: &self.config.placeholder,
            value: self.state.query(),
        }
    }

    fn on_change(&mut self, new_value: &str) {
        self.dispatch(SearchEvent::InputChanged(new_value));
    }

    fn on_suggestions_fetch_requested(&mut self, value: &str) {
        self.dispatch(SearchEvent::FetchRequested(value));
    }

    fn on_suggestions_clear_requested(&mut self) {
        self.dispatch(SearchEvent::ClearRequested);
    }

    fn on_suggestion_selected(&mut self, index: usize) {
        self.dispatch(SearchEvent::SuggestionSelected(index));
    }

    fn suggestions(&self) -> &[&'a Country] {
        self.state.suggestions()
    }

    fn detail_panel(&self) -> Option<DetailPanel<'a>> {
        self.state.detail_panel()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OfficialLanguages;

    fn dataset() -> Dataset {
        Dataset::from_countries(vec![
            Country::new("France", "Paris", 67_000_000, "Euro", OfficialLanguages::Single("French".into())),
            Country::new("Paraguay", "Asunción", 6_700_000, "Guarani", OfficialLanguages::Single("Spanish".into())),
            Country::new("Peru", "Lima", 33_700_000, "Sol", OfficialLanguages::Single("Spanish".into())),
        ])
        .unwrap()
    }

    fn names<'a>(s: &SearchState<'a>) -> Vec<&'a str> {
        s.suggestions().iter().map(|c| c.name()).collect()
    }

    /// What a widget sends for one keystroke: the change, then a fetch.
    fn typed<'a>(s: SearchState<'a>, text: &str, ds: &'a Dataset) -> SearchState<'a> {
        s.apply(SearchEvent::InputChanged(text), ds)
            .apply(SearchEvent::FetchRequested(text), ds)
    }

    #[test]
    fn starts_empty() {
        let s = SearchState::new();
        assert_eq!(s.phase(), Phase::Empty);
        assert!(s.suggestions().is_empty());
        assert!(s.detail_panel().is_none());
    }

    #[test]
    fn fetch_recomputes_suggestions() {
        let ds = dataset();
        let s = typed(SearchState::new(), "p", &ds);
        assert_eq!(s.phase(), Phase::Typing);
        assert_eq!(names(&s), ["France", "Paraguay", "Peru"]);

        let s = typed(s, "par", &ds);
        assert_eq!(names(&s), ["France", "Paraguay"]);
    }

    #[test]
    fn input_change_keeps_dropdown_until_fetch() {
        let ds = dataset();
        let s = typed(SearchState::new(), "par", &ds).apply(SearchEvent::InputChanged("Paraguay"), &ds);
        assert_eq!(s.query(), "Paraguay");
        assert_eq!(names(&s), ["France", "Paraguay"]);
    }

    #[test]
    fn fill_in_then_select_picks_the_clicked_item() {
        let ds = dataset();
        let s = typed(SearchState::new(), "par", &ds)
            .apply(SearchEvent::InputChanged("France"), &ds)
            .apply(SearchEvent::InputChanged("Paraguay"), &ds)
            .apply(SearchEvent::SuggestionSelected(1), &ds);

        assert_eq!(s.phase(), Phase::Selected);
        assert_eq!(s.query(), "Paraguay");
        assert!(std::ptr::eq(s.selection().unwrap(), &ds.countries()[1]));
        assert!(s.suggestions().is_empty());
    }

    #[test]
    fn blank_fetch_short_circuits() {
        let ds = dataset();
        let s = typed(SearchState::new(), "pe", &ds).apply(SearchEvent::FetchRequested(""), &ds);
        assert!(s.suggestions().is_empty());
        assert_eq!(s.query(), "pe");

        let s = s.apply(SearchEvent::FetchRequested("   "), &ds);
        assert!(s.suggestions().is_empty());
    }

    #[test]
    fn fetch_is_idempotent() {
        let ds = dataset();
        let once = SearchState::new().apply(SearchEvent::FetchRequested("a"), &ds);
        let twice = once.clone().apply(SearchEvent::FetchRequested("a"), &ds);
        assert_eq!(once, twice);
    }

    #[test]
    fn selecting_points_into_dataset() {
        let ds = dataset();
        let s = typed(SearchState::new(), "par", &ds).apply(SearchEvent::SuggestionSelected(1), &ds);

        assert_eq!(s.phase(), Phase::Selected);
        assert_eq!(s.query(), "Paraguay");
        assert!(s.suggestions().is_empty());
        assert!(std::ptr::eq(s.selection().unwrap(), &ds.countries()[1]));
        assert_eq!(s.detail_panel().unwrap().heading, "Paraguay");
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let ds = dataset();
        let before = typed(SearchState::new(), "lima", &ds);
        let after = before.clone().apply(SearchEvent::SuggestionSelected(5), &ds);
        assert_eq!(before, after);
    }

    #[test]
    fn clear_request_only_empties_dropdown() {
        let ds = dataset();
        let s = typed(SearchState::new(), "peru", &ds)
            .apply(SearchEvent::SuggestionSelected(0), &ds)
            .apply(SearchEvent::FetchRequested("peru"), &ds)
            .apply(SearchEvent::ClearRequested, &ds);
        assert!(s.suggestions().is_empty());
        assert_eq!(s.query(), "Peru");
        assert_eq!(s.selection().map(Country::name), Some("Peru"));
    }

    #[test]
    fn clearing_input_resets_selection_from_any_phase() {
        let ds = dataset();
        let typing = typed(SearchState::new(), "fr", &ds);
        let selected = typing.clone().apply(SearchEvent::SuggestionSelected(0), &ds);

        for s in [SearchState::new(), typing, selected] {
            let s = s.apply(SearchEvent::InputChanged(""), &ds);
            assert_eq!(s.phase(), Phase::Empty);
            assert!(s.selection().is_none());
            assert!(s.suggestions().is_empty());
        }
    }

    #[test]
    fn editing_after_selection_drops_it() {
        let ds = dataset();
        let s = typed(SearchState::new(), "fra", &ds).apply(SearchEvent::SuggestionSelected(0), &ds);

        let same = s.clone().apply(SearchEvent::InputChanged("France"), &ds);
        assert_eq!(same.phase(), Phase::Selected);

        let edited = typed(s, "Franc", &ds);
        assert_eq!(edited.phase(), Phase::Typing);
        assert!(edited.detail_panel().is_none());
        assert_eq!(names(&edited), ["France"]);
    }

    #[test]
    fn search_bar_exposes_handlers() {
        let ds = dataset();
        let mut bar = SearchBar::new(&ds);
        assert_eq!(bar.input_props().placeholder, DEFAULT_PLACEHOLDER);

        bar.on_change("li");
        bar.on_suggestions_fetch_requested("li");
        assert_eq!(bar.suggestions().len(), 1);
        let peru = bar.suggestions()[0];
        assert_eq!(bar.suggestion_value(peru), "Peru");
        assert_eq!(bar.render_suggestion(peru).capital, Some("Lima"));

        bar.on_suggestion_selected(0);
        assert_eq!(bar.input_props().value, "Peru");
        assert!(bar.detail_panel().is_some());

        bar.on_suggestions_clear_requested();
        assert!(bar.selection().is_some());
    }
}
