/// Data layer: core types, loading, and searching.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Catalog
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ CatalogCache  │  load once, share Arc<Catalog>
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  search   │  query tokens × scope → matching rows, catalog order
///   └──────────┘
/// ```

pub mod cache;
pub mod error;
pub mod loader;
pub mod model;
pub mod search;

pub use cache::CatalogCache;
pub use error::CatalogError;
pub use loader::load_catalog;
pub use model::{Catalog, MatchResult, Query, Record, Scope};
pub use search::search;
