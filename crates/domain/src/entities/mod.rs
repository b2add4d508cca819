//! Domain entities.

mod catalogue;
mod pokemon;

pub use catalogue::Catalogue;
pub use pokemon::{Pokemon, Rarity, Spawn, Terrain, TimeOfDay, Variant, VariantKind};
