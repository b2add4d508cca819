//! Evolution chain reconstruction.
//!
//! Chains are rebuilt from the flat catalogue on every call: starting from
//! a base form, any Pokémon whose `previous_forms` intersects the chain so
//! far is appended in catalogue order. The catalogue lists evolutions after
//! their ancestors, so a single pass reaches the full depth of the data.

use std::collections::HashSet;

use catchdex_domain::{Catalogue, Pokemon, PokemonId};

/// Fixed width of a rendered evolution row. Rows are padded with empty
/// slots so all rows align, and a line never shows more than 5 descendants.
pub const EVOLUTION_LINE_LEN: usize = 6;

/// One display row: the base form in slot 0, descendants by encounter
/// order in later slots, trailing slots empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvolutionLine {
    slots: [Option<PokemonId>; EVOLUTION_LINE_LEN],
}

impl EvolutionLine {
    fn from_ids(ids: &[PokemonId]) -> Self {
        debug_assert!(!ids.is_empty(), "evolution line must start from a base form");
        let mut slots = [None; EVOLUTION_LINE_LEN];
        for (slot, id) in slots.iter_mut().zip(ids.iter()) {
            *slot = Some(*id);
        }
        Self { slots }
    }

    pub fn slots(&self) -> &[Option<PokemonId>; EVOLUTION_LINE_LEN] {
        &self.slots
    }

    /// The base form occupying slot 0.
    pub fn base(&self) -> PokemonId {
        match self.slots[0] {
            Some(id) => id,
            None => unreachable!("slot 0 is always populated"),
        }
    }

    /// Populated members in slot order.
    pub fn members(&self) -> impl Iterator<Item = PokemonId> + '_ {
        self.slots.iter().filter_map(|s| *s)
    }
}

/// Collect the ids of every Pokémon descending from `base`, in catalogue
/// order, unbounded. Used by display-list building, where evolutions ride
/// along with a matching base form regardless of their own spawns.
pub fn descendants_of(base: &Pokemon, catalogue: &Catalogue) -> Vec<PokemonId> {
    let mut chain: HashSet<PokemonId> = HashSet::new();
    chain.insert(base.id);
    let mut descendants = Vec::new();
    for entry in catalogue.iter() {
        if entry.id == base.id {
            continue;
        }
        if entry.previous_forms.iter().any(|f| chain.contains(f)) {
            chain.insert(entry.id);
            descendants.push(entry.id);
        }
    }
    descendants
}

/// Build the fixed-width display row for `base`.
///
/// A chain with more than 5 descendants is truncated to the first 5 in
/// catalogue order. Known limitation, not an error.
pub fn build_evolution_line(base: &Pokemon, catalogue: &Catalogue) -> EvolutionLine {
    let mut ids = vec![base.id];
    for id in descendants_of(base, catalogue) {
        if ids.len() == EVOLUTION_LINE_LEN {
            break;
        }
        ids.push(id);
    }
    EvolutionLine::from_ids(&ids)
}

/// Build a display row for `base` restricted to `members`, padding to the
/// fixed width. Slot 0 always holds the base form; descendants outside
/// `members` are skipped rather than leaving a gap.
pub fn build_member_line(
    base: &Pokemon,
    catalogue: &Catalogue,
    members: &HashSet<PokemonId>,
) -> EvolutionLine {
    let mut ids = vec![base.id];
    for id in descendants_of(base, catalogue) {
        if ids.len() == EVOLUTION_LINE_LEN {
            break;
        }
        if members.contains(&id) {
            ids.push(id);
        }
    }
    EvolutionLine::from_ids(&ids)
}

/// Flatten matching base forms into the candidate list: each base form
/// followed by every descendant, with no width cap and no spawn filtering
/// applied to the descendants.
pub fn build_display_list(base_forms: &[&Pokemon], catalogue: &Catalogue) -> Vec<PokemonId> {
    let mut out = Vec::new();
    let mut seen = HashSet::new();
    for base in base_forms {
        if seen.insert(base.id) {
            out.push(base.id);
        }
        for id in descendants_of(base, catalogue) {
            if seen.insert(id) {
                out.push(id);
            }
        }
    }
    out
}
