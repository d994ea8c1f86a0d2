use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use super::error::Result;
use super::loader::load_catalog;
use super::model::Catalog;

// ---------------------------------------------------------------------------
// Load-once catalog holder
// ---------------------------------------------------------------------------

/// Reads the song list on first access and hands out the same catalog for
/// the rest of the process. Never reloads.
///
/// A failed load is not remembered, so a later call tries the file again.
#[derive(Debug)]
pub struct CatalogCache {
    path: PathBuf,
    cell: OnceLock<Arc<Catalog>>,
}

impl CatalogCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CatalogCache {
            path: path.into(),
            cell: OnceLock::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The cached catalog, loading it first if needed.
    pub fn get_or_load(&self) -> Result<Arc<Catalog>> {
        if let Some(catalog) = self.cell.get() {
            log::debug!("catalog cache hit for {}", self.path.display());
            return Ok(Arc::clone(catalog));
        }

        let loaded = Arc::new(load_catalog(&self.path)?);
        // Another thread may have won the race; keep whichever landed first.
        Ok(Arc::clone(self.cell.get_or_init(|| loaded)))
    }

    /// Whether a catalog has been loaded yet.
    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }
}
