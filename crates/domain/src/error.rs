//! Unified error types for the domain layer.

use thiserror::Error;

use crate::entities::VariantKind;
use crate::ids::PokemonId;

/// Unified error type for domain operations.
///
/// Catalogue invariant violations are reported from `Catalogue::new`;
/// anything that slips past construction is a programmer error downstream,
/// not a recoverable condition.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Two catalogue entries share an id
    #[error("Duplicate Pokémon id: {0}")]
    DuplicateId(PokemonId),

    /// A previous_forms reference does not resolve
    #[error("Pokémon {id} references unknown previous form {form}")]
    UnknownForm { id: PokemonId, form: PokemonId },

    /// The previous_forms relation loops back on itself
    #[error("Evolution chain containing Pokémon {0} is cyclic")]
    CyclicEvolution(PokemonId),

    /// The same variant kind appears twice on one Pokémon
    #[error("Pokémon {id} declares variant {kind} more than once")]
    DuplicateVariant { id: PokemonId, kind: VariantKind },

    /// Entity not found
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
}

impl DomainError {
    /// Create a validation error for business rule violations.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a not found error.
    pub fn not_found(entity_type: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity_type,
            id: id.to_string(),
        }
    }
}
