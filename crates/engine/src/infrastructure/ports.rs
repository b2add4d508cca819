//! Port traits for the engine's external collaborators.
//!
//! The engine computes; these boundaries load, persist, and fetch. Each
//! adapter lives next door under `infrastructure/`, and tests substitute
//! mockall mocks.

use async_trait::async_trait;

use catchdex_domain::Catalogue;

/// Local snapshot storage for the catalogue (including caught state).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogueStore: Send + Sync {
    /// Load the persisted snapshot. `Ok(None)` when no snapshot exists yet.
    async fn load(&self) -> Result<Option<Catalogue>, StoreError>;

    /// Persist the full snapshot, replacing any previous one.
    async fn save(&self, catalogue: &Catalogue) -> Result<(), StoreError>;
}

/// Upstream source of the static catalogue file, fetched once per fresh
/// session when no local snapshot exists.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogueSource: Send + Sync {
    async fn fetch(&self) -> Result<Catalogue, FetchError>;
}

/// Snapshot storage errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// I/O failure - includes the operation name for tracing.
    #[error("Storage error in {operation}: {message}")]
    Io {
        operation: &'static str,
        message: String,
    },

    /// Snapshot bytes did not parse or violated catalogue invariants.
    #[error("Snapshot corrupt: {0}")]
    Corrupt(String),
}

impl StoreError {
    pub fn io(operation: &'static str, message: impl ToString) -> Self {
        Self::Io {
            operation,
            message: message.to_string(),
        }
    }

    pub fn corrupt(message: impl ToString) -> Self {
        Self::Corrupt(message.to_string())
    }
}

/// Catalogue fetch errors. Fatal to the session: the engine has no data
/// to work with and builds no retry on top.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Catalogue request failed: {0}")]
    Request(String),

    #[error("Catalogue payload invalid: {0}")]
    Invalid(String),
}

impl FetchError {
    pub fn request(message: impl ToString) -> Self {
        Self::Request(message.to_string())
    }

    pub fn invalid(message: impl ToString) -> Self {
        Self::Invalid(message.to_string())
    }
}
