//! Catalog loading.
//!
//! [`CatalogLoader`] fetches the document once per session through a
//! [`CatalogSource`] and memoizes the result:
//!
//! - [`source`] – where the document comes from (file or HTTP)

pub mod source;

pub use source::*;

use once_cell::unsync::OnceCell;

use crate::error::{CatalogError, Result};
use crate::model::Item;

/// Memoizing catalog loader.
///
/// The first [`load`](Self::load) fetches and parses the document. Later calls
/// return the same list without touching the source, including after a
/// failure: a failed load yields an empty catalog for the rest of the session.
pub struct CatalogLoader<S: CatalogSource> {
    source: S,
    items: OnceCell<Vec<Item>>,
    failure: OnceCell<CatalogError>,
}

impl<S: CatalogSource> CatalogLoader<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            items: OnceCell::new(),
            failure: OnceCell::new(),
        }
    }

    /// Return the catalog, fetching it on first use.
    pub fn load(&self) -> &[Item] {
        self.items.get_or_init(|| match self.fetch_items() {
            Ok(items) => {
                tracing::debug!(count = items.len(), "catalog loaded");
                items
            }
            Err(err) => {
                tracing::error!(error = %err, "Erro ao buscar os dados");
                let _ = self.failure.set(err);
                Vec::new()
            }
        })
    }

    /// Error recorded by the first load, if it failed.
    pub fn failure(&self) -> Option<&CatalogError> {
        self.failure.get()
    }

    pub fn is_loaded(&self) -> bool {
        self.items.get().is_some()
    }

    fn fetch_items(&self) -> Result<Vec<Item>> {
        let text = self.source.fetch().map_err(|e| CatalogError::Fetch {
            location: self.source.location(),
            reason: format!("{e:#}"),
        })?;
        Ok(serde_json::from_str(&text)?)
    }
}
