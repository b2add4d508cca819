//! Display projection.
//!
//! Turns the catalogue plus the active filters into the variant-grouped,
//! rarity-ordered list the renderer consumes. Pure: never mutates entity
//! state, and identical inputs always produce identical output.

use std::collections::HashSet;

use catchdex_domain::{Catalogue, FilterState, Pokemon, PokemonId, VariantKind};

use super::evolution::{build_display_list, build_member_line, EvolutionLine};
use super::matching::matches;

/// Caller-owned display preferences.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisplayOptions {
    /// Omit a variant group once every member has that variant caught.
    pub hide_fully_caught: bool,
}

/// One rendered section: every evolution row whose members carry this
/// variant kind, in rarity order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantGroup {
    pub kind: VariantKind,
    pub rows: Vec<EvolutionLine>,
}

/// Project the catalogue into its grouped display form.
///
/// Candidate selection matches base forms only; descendants ride along
/// unconditionally. An evolution whose base form fell out of the candidate
/// set (a variant filter can do this) is dropped rather than orphaned
/// into a baseless row.
pub fn project(
    catalogue: &Catalogue,
    filters: &FilterState,
    options: DisplayOptions,
) -> Vec<VariantGroup> {
    let base_forms: Vec<&Pokemon> = catalogue
        .base_forms()
        .filter(|p| matches(p, filters))
        .collect();
    let mut candidates = build_display_list(&base_forms, catalogue);

    if let Some(kind) = filters.variant {
        candidates.retain(|id| resolve(catalogue, *id).has_variant(kind));
    }

    let mut groups = Vec::new();
    for kind in VariantKind::DISPLAY_ORDER {
        if filters.variant.is_some_and(|v| v != kind) {
            continue;
        }

        let mut members: Vec<&Pokemon> = candidates
            .iter()
            .map(|id| resolve(catalogue, *id))
            .filter(|p| p.has_variant(kind))
            .collect();
        if members.is_empty() {
            continue;
        }
        members.sort_by_key(|p| p.rarity.display_rank());

        if options.hide_fully_caught
            && members
                .iter()
                .all(|p| p.variant(kind).is_some_and(|v| v.caught))
        {
            continue;
        }

        let member_ids: HashSet<PokemonId> = members.iter().map(|p| p.id).collect();
        let rows: Vec<EvolutionLine> = members
            .iter()
            .filter(|p| p.is_base_form())
            .map(|base| build_member_line(base, catalogue, &member_ids))
            .collect();
        if rows.is_empty() {
            continue;
        }

        groups.push(VariantGroup { kind, rows });
    }
    groups
}

fn resolve(catalogue: &Catalogue, id: PokemonId) -> &Pokemon {
    match catalogue.get(id) {
        Some(p) => p,
        // Candidate ids come straight out of this catalogue.
        None => unreachable!("candidate id not in catalogue"),
    }
}
