//! Engine-level error aggregation.

use catchdex_domain::{DomainError, PokemonId, VariantKind};

use super::ports::{FetchError, StoreError};
use super::save_codec::{ExportError, ImportError};

/// Errors surfaced by the engine's orchestration layer.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Import(#[from] ImportError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Toggle target does not exist in the catalogue.
    #[error("Pokémon not found: {0}")]
    PokemonNotFound(PokemonId),

    /// Toggle target exists but does not have this variant - "not
    /// obtainable" is never silently treated as uncaught.
    #[error("Pokémon {id} has no {kind} variant")]
    VariantNotObtainable { id: PokemonId, kind: VariantKind },
}
