//! Karaoke song catalog search.
//!
//! `data` holds the song list model, loaders and the query matcher; `state`
//! is the UI-independent search state the desktop front end drives.

pub mod data;
pub mod state;

pub use data::{
    load_catalog, search, Catalog, CatalogCache, CatalogError, MatchResult, Query, Record, Scope,
};
pub use state::{AppState, SearchView};
