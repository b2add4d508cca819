//! Catalogue - the authoritative, ordered Pokémon list.
//!
//! Catalogue order is meaningful: evolution-line construction and display
//! projection both append descendants in catalogue order, so the wrapper
//! never reorders entries.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::error::DomainError;
use crate::ids::PokemonId;

use super::pokemon::Pokemon;

/// The full roster, validated against the data-model invariants on
/// construction: unique ids, resolvable `previous_forms` references, an
/// acyclic evolution relation, and at most one variant per kind.
///
/// Deliberately not `Deserialize`: untrusted entries must come in through
/// [`Catalogue::new`] so validation cannot be skipped.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Catalogue {
    entries: Vec<Pokemon>,
}

impl Catalogue {
    pub fn new(entries: Vec<Pokemon>) -> Result<Self, DomainError> {
        Self::validate(&entries)?;
        Ok(Self { entries })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pokemon> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Pokemon> {
        self.entries.iter_mut()
    }

    pub fn get(&self, id: PokemonId) -> Option<&Pokemon> {
        self.entries.iter().find(|p| p.id == id)
    }

    pub fn get_mut(&mut self, id: PokemonId) -> Option<&mut Pokemon> {
        self.entries.iter_mut().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Base forms in catalogue order.
    pub fn base_forms(&self) -> impl Iterator<Item = &Pokemon> {
        self.entries.iter().filter(|p| p.is_base_form())
    }

    fn validate(entries: &[Pokemon]) -> Result<(), DomainError> {
        let mut ids = HashSet::with_capacity(entries.len());
        for p in entries {
            if !ids.insert(p.id) {
                return Err(DomainError::DuplicateId(p.id));
            }
            let mut kinds = HashSet::new();
            for v in &p.variants {
                if !kinds.insert(v.kind) {
                    return Err(DomainError::DuplicateVariant {
                        id: p.id,
                        kind: v.kind,
                    });
                }
            }
        }

        let by_id: HashMap<PokemonId, &Pokemon> = entries.iter().map(|p| (p.id, p)).collect();
        for p in entries {
            for &form in &p.previous_forms {
                if !by_id.contains_key(&form) {
                    return Err(DomainError::UnknownForm { id: p.id, form });
                }
            }
        }

        // Cycle check: walking previous_forms must always bottom out at a
        // base form. An ancestor may be reachable along several paths
        // (entries can list their full ancestry), so only an id already on
        // the active path is a cycle.
        let mut acyclic: HashSet<PokemonId> = HashSet::with_capacity(entries.len());
        let mut path = Vec::new();
        for p in entries {
            Self::walk_ancestry(p.id, &by_id, &mut acyclic, &mut path)?;
        }

        Ok(())
    }

    fn walk_ancestry(
        id: PokemonId,
        by_id: &HashMap<PokemonId, &Pokemon>,
        acyclic: &mut HashSet<PokemonId>,
        path: &mut Vec<PokemonId>,
    ) -> Result<(), DomainError> {
        if acyclic.contains(&id) {
            return Ok(());
        }
        if path.contains(&id) {
            return Err(DomainError::CyclicEvolution(id));
        }
        path.push(id);
        if let Some(entry) = by_id.get(&id) {
            for &form in &entry.previous_forms {
                Self::walk_ancestry(form, by_id, acyclic, path)?;
            }
        }
        path.pop();
        acyclic.insert(id);
        Ok(())
    }
}

impl IntoIterator for Catalogue {
    type Item = Pokemon;
    type IntoIter = std::vec::IntoIter<Pokemon>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
