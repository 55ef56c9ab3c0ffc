// crates/countrysearch-core/src/traits.rs

//! Seams between the widget logic and its host.
//!
//! [`AutosuggestSource`] is what the controller supplies to a host widget:
//! fetch/clear/select handlers, an item renderer and the input value.
//! [`Autosuggest`] is the external widget itself (dropdown rendering, focus,
//! keyboard navigation), which hosts implement and this crate never does.

use crate::api::{DetailPanel, SuggestionView};
use crate::model::Country;
use crate::text::equals_folded;

/// Name-based matching helpers for types that expose a canonical display name.
///
/// # Examples
/// ```rust
/// use countrysearch_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("France").is_named("FRANCE"));
/// assert!(!Place("New Zealand").is_named("zealand"));
/// ```
pub trait NameMatch {
    /// Returns the canonical display name used for matching.
    fn name_str(&self) -> &str;

    /// Case-insensitive name equality.
    #[inline]
    fn is_named(&self, q: &str) -> bool {
        equals_folded(self.name_str(), q)
    }
}

/// Input element properties handed to the host widget.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct InputProps<'s> {
    pub placeholder: &'s str,
    pub value: &'s str,
}

/// Handlers a host autosuggest widget needs from the component.
///
/// Every handler is synchronous and total.
pub trait AutosuggestSource<'a> {
    /// Current input value and placeholder.
    fn input_props(&self) -> InputProps<'_>;

    /// The input text changed (typing, paste, or the widget filling in a
    /// suggestion value). Does not refetch; the widget follows up with
    /// [`Self::on_suggestions_fetch_requested`] when it wants new items.
    fn on_change(&mut self, new_value: &str);

    /// The widget wants suggestions for `value`.
    fn on_suggestions_fetch_requested(&mut self, value: &str);

    /// The widget dismissed the dropdown.
    fn on_suggestions_clear_requested(&mut self);

    /// The user picked the suggestion at `index` of [`Self::suggestions`].
    fn on_suggestion_selected(&mut self, index: usize);

    /// Suggestions currently shown in the dropdown.
    fn suggestions(&self) -> &[&'a Country];

    /// The component's own detail panel, rendered below the widget.
    fn detail_panel(&self) -> Option<DetailPanel<'a>>;

    /// The text the input takes when `country` is picked.
    fn suggestion_value(&self, country: &'a Country) -> &'a str {
        country.name()
    }

    /// Visual representation of one suggestion.
    fn render_suggestion(&self, country: &'a Country) -> SuggestionView<'a> {
        SuggestionView::from(country)
    }
}

/// The external dropdown widget.
///
/// Implementors own presentation and navigation and call back into an
/// [`AutosuggestSource`].
pub trait Autosuggest {
    type Error;

    /// Drive `source` until the widget is closed.
    fn run<'a, S: AutosuggestSource<'a>>(&mut self, source: &mut S) -> Result<(), Self::Error>;
}
