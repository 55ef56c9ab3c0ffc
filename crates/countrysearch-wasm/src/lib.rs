//! countrysearch-wasm — WebAssembly bindings for countrysearch-core
//!
//! Exposes the country search bar to JavaScript. The dataset is compiled
//! into the module; the JS side owns the actual dropdown widget and calls
//! the handlers on [`CountrySearchBar`].
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { CountrySearchBar } from 'countrysearch-wasm';
//!
//! await init();
//! const bar = new CountrySearchBar();
//! bar.on_change('par');
//! bar.on_suggestions_fetch_requested('par');
//! console.log(bar.suggestions());   // [{ name: 'France', capital: 'Paris', details: [...] }, ...]
//! bar.on_suggestion_selected(0);
//! console.log(bar.details());       // { heading: 'France', fields: [...] }
//! ```
//!
//! Notes
//! -----
//! - Functions returning `JsValue` produce plain JSON-compatible objects.
//! - A selection index refers to the list last returned by `suggestions()`.

use countrysearch_core::traits::AutosuggestSource;
use countrysearch_core::{Dataset, Phase, SearchBar, SearchBarConfig, SuggestionView};
use serde_json::json;
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

fn db() -> Result<&'static Dataset, JsError> {
    Dataset::load().map_err(|e| JsError::new(&e.to_string()))
}

fn js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsError> {
    to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"Initializing countrysearch WASM module...".into());

    match db() {
        Ok(dataset) => {
            web_sys::console::log_1(&format!("✓ Loaded {} countries", dataset.len()).into())
        }
        Err(_) => web_sys::console::error_1(&"countrysearch: bundled dataset failed to load".into()),
    }
}

/* --------------------------------------------------------------------------
   Basic Queries
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn get_country_count() -> Result<usize, JsError> {
    Ok(db()?.len())
}

#[wasm_bindgen]
pub fn get_stats() -> Result<JsValue, JsError> {
    let stats = db()?.stats();
    js(&json!({
        "countries": stats.countries,
        "languages": stats.languages,
        "totalPopulation": stats.total_population,
    }))
}

/// Stateless search: rendered suggestions for `query`. An empty query
/// returns every country.
#[wasm_bindgen]
pub fn search_countries(query: &str) -> Result<JsValue, JsError> {
    let views: Vec<SuggestionView<'_>> = db()?
        .filter(query)
        .into_iter()
        .map(SuggestionView::from)
        .collect();
    js(&views)
}

/* --------------------------------------------------------------------------
   Search Bar Handle
-------------------------------------------------------------------------- */

/// Stateful search bar. One instance per input element.
#[wasm_bindgen]
pub struct CountrySearchBar {
    inner: SearchBar<'static>,
}

#[wasm_bindgen]
impl CountrySearchBar {
    #[wasm_bindgen(constructor)]
    pub fn new(placeholder: Option<String>) -> Result<CountrySearchBar, JsError> {
        let mut config = SearchBarConfig::default();
        if let Some(placeholder) = placeholder {
            config.placeholder = placeholder;
        }
        Ok(CountrySearchBar {
            inner: SearchBar::with_config(db()?, config),
        })
    }

    pub fn value(&self) -> String {
        self.inner.input_props().value.to_string()
    }

    pub fn placeholder(&self) -> String {
        self.inner.input_props().placeholder.to_string()
    }

    /// `"empty"`, `"typing"` or `"selected"`.
    pub fn phase(&self) -> String {
        match self.inner.state().phase() {
            Phase::Empty => "empty",
            Phase::Typing => "typing",
            Phase::Selected => "selected",
        }
        .to_string()
    }

    pub fn on_change(&mut self, value: &str) {
        self.inner.on_change(value);
    }

    pub fn on_suggestions_fetch_requested(&mut self, value: &str) {
        self.inner.on_suggestions_fetch_requested(value);
    }

    pub fn on_suggestions_clear_requested(&mut self) {
        self.inner.on_suggestions_clear_requested();
    }

    pub fn on_suggestion_selected(&mut self, index: usize) {
        self.inner.on_suggestion_selected(index);
    }

    pub fn suggestion_count(&self) -> usize {
        self.inner.suggestions().len()
    }

    /// Input text for the suggestion at `index`.
    pub fn suggestion_value(&self, index: usize) -> Option<String> {
        self.inner
            .suggestions()
            .get(index)
            .copied()
            .map(|c| self.inner.suggestion_value(c).to_string())
    }

    pub fn selected_name(&self) -> Option<String> {
        self.inner.selection().map(|c| c.name().to_string())
    }

    /// Rendered dropdown items, in order.
    pub fn suggestions(&self) -> Result<JsValue, JsError> {
        let array = js_sys::Array::new();
        for country in self.inner.suggestions().iter().copied() {
            array.push(&js(&self.inner.render_suggestion(country))?);
        }
        Ok(array.into())
    }

    /// The detail panel, or `null` when nothing is selected.
    pub fn details(&self) -> Result<JsValue, JsError> {
        match self.inner.detail_panel() {
            Some(panel) => js(&panel),
            None => Ok(JsValue::NULL),
        }
    }
}
