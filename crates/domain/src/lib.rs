//! CatchDex domain - catalogue entities, filter state, and the data-model
//! invariants the engine relies on.

pub mod entities;
pub mod error;
pub mod filter;
pub mod ids;

pub use entities::{Catalogue, Pokemon, Rarity, Spawn, Terrain, TimeOfDay, Variant, VariantKind};
pub use error::DomainError;
pub use filter::FilterState;
pub use ids::PokemonId;
