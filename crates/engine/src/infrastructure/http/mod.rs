//! HTTP adapters.

mod catalogue_client;

pub use catalogue_client::HttpCatalogueSource;
