use std::sync::Arc;

use crate::data::model::{Catalog, Query, Record, Scope};
use crate::data::search::matched_indices;
use crate::data::{CatalogCache, CatalogError};

// ---------------------------------------------------------------------------
// What the results area should show
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchView {
    /// Song list could not be loaded; nothing else is shown.
    Unavailable,
    /// No query typed yet.
    Prompt,
    NoResults,
    Results(usize),
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    /// Loaded song list (None if loading failed).
    pub catalog: Option<Arc<Catalog>>,

    /// Text in the search box.
    pub query_text: String,

    /// Selected search scope.
    pub scope: Scope,

    /// Indices of records matching the current query (cached).
    pub visible_indices: Vec<usize>,

    /// Blocking error shown instead of the search UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Pull the catalog from the cache, or record why it is unavailable.
    pub fn from_cache(cache: &CatalogCache, scope: Scope) -> Self {
        let mut state = AppState {
            scope,
            ..Default::default()
        };
        match cache.get_or_load() {
            Ok(catalog) => state.set_catalog(catalog),
            Err(e) => {
                log::error!("Failed to load song list: {e:#}");
                state.status_message = Some(unavailable_message(cache, &e));
            }
        }
        state
    }

    /// Ingest a loaded catalog and reapply the current query.
    pub fn set_catalog(&mut self, catalog: Arc<Catalog>) {
        self.catalog = Some(catalog);
        self.status_message = None;
        self.refilter();
    }

    pub fn query(&self) -> Query {
        Query::new(self.query_text.clone(), self.scope)
    }

    /// Recompute `visible_indices` after the query or scope changed.
    pub fn refilter(&mut self) {
        let query = self.query();
        if let Some(catalog) = &self.catalog {
            self.visible_indices = if query.is_blank() {
                Vec::new()
            } else {
                matched_indices(catalog, &query)
            };
        }
    }

    pub fn set_query_text(&mut self, text: impl Into<String>) {
        self.query_text = text.into();
        self.refilter();
    }

    pub fn set_scope(&mut self, scope: Scope) {
        if self.scope != scope {
            self.scope = scope;
            self.refilter();
        }
    }

    /// Decide between prompt, no-results and results.
    pub fn view(&self) -> SearchView {
        if self.catalog.is_none() {
            return SearchView::Unavailable;
        }
        if self.query().is_blank() {
            return SearchView::Prompt;
        }
        match self.visible_indices.len() {
            0 => SearchView::NoResults,
            n => SearchView::Results(n),
        }
    }

    /// Rows to render, in catalog order.
    pub fn visible_records(&self) -> impl Iterator<Item = &Record> + '_ {
        self.visible_indices
            .iter()
            .filter_map(|&i| self.catalog.as_ref().and_then(|c| c.get(i)))
    }
}

fn unavailable_message(cache: &CatalogCache, err: &CatalogError) -> String {
    if err.is_unavailable() {
        format!(
            "Song list not found! Please ask the DJ to upload '{}'.",
            cache.path().display()
        )
    } else {
        format!("Error: {err:#}")
    }
}
