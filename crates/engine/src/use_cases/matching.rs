//! Spawn filter matching.
//!
//! A Pokémon matches when at least one of its spawns satisfies every
//! non-empty field constraint simultaneously - existential across spawns,
//! conjunctive across fields. The variant filter is not consulted here;
//! it narrows candidates later in projection.

use catchdex_domain::{FilterState, Pokemon, Terrain, TimeOfDay};

/// True iff some spawn of `pokemon` satisfies all of the active
/// place/time/terrain constraints at once.
pub fn matches(pokemon: &Pokemon, filters: &FilterState) -> bool {
    pokemon.spawns.iter().any(|spawn| {
        filters.place.as_deref().is_none_or(|p| spawn.place == p)
            && filters.time.is_none_or(|t| spawn.time == t)
            && filters.terrain.is_none_or(|t| spawn.terrain == t)
    })
}

/// True iff `pokemon` spawns in exactly this area triple. Used by the
/// area index, which always pins all three fields.
pub fn spawns_in_area(pokemon: &Pokemon, place: &str, terrain: Terrain, time: TimeOfDay) -> bool {
    pokemon
        .spawns
        .iter()
        .any(|s| s.place == place && s.terrain == terrain && s.time == time)
}
