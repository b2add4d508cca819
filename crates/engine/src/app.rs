//! Application composition.
//!
//! Wires the default adapters to the collection use cases. The embedding
//! UI owns the mutable `Catalogue` and `FilterState` and calls back into
//! the pure use cases on every change.

use std::sync::Arc;

use crate::infrastructure::http::HttpCatalogueSource;
use crate::infrastructure::persistence::FileCatalogueStore;
use crate::infrastructure::ports::{CatalogueSource, CatalogueStore};
use crate::infrastructure::AppConfig;
use crate::use_cases::CollectionUseCases;

pub struct App {
    pub collection: CollectionUseCases,
}

impl App {
    pub fn new(store: Arc<dyn CatalogueStore>, source: Arc<dyn CatalogueSource>) -> Self {
        Self {
            collection: CollectionUseCases::new(store, source),
        }
    }

    /// Compose with the file store and HTTP source described by `config`.
    pub fn from_config(config: &AppConfig) -> Self {
        let store = Arc::new(FileCatalogueStore::new(config.data_file()));
        let source = Arc::new(HttpCatalogueSource::new(config.catalogue_url.clone()));
        Self::new(store, source)
    }
}
