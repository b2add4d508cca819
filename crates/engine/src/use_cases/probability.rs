//! Encounter probability estimation.
//!
//! Given the Pokémon matching the active area, estimates the per-encounter
//! chance of catching something still missing and reports it as "1 in N".
//! All arithmetic is f64; the final reciprocal rounds half away from zero.

use catchdex_domain::{Pokemon, Rarity, VariantKind};

/// Base encounter mass per rarity tier. Common starts at the full mass
/// and rarer tiers steal from it when present in the area.
pub const RARE_MASS: f64 = 0.005;
pub const LEGENDARY_MASS: f64 = 0.001;
pub const ULTRA_BEAST_MASS: f64 = 0.0001;

/// Rarity as experienced in the field, as opposed to the declared tier:
/// an evolved form of a Common line is encountered like a Rare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncounterClass {
    Common,
    Rare,
    Legendary,
    UltraBeast,
}

/// Classify a Pokémon's encounter rarity.
pub fn classify(pokemon: &Pokemon) -> EncounterClass {
    match pokemon.rarity {
        Rarity::Common if pokemon.is_base_form() => EncounterClass::Common,
        Rarity::Common => EncounterClass::Rare,
        Rarity::Rare => EncounterClass::Rare,
        Rarity::Legendary => EncounterClass::Legendary,
        Rarity::UltraBeast => EncounterClass::UltraBeast,
    }
}

/// Share of an encounter that presents as a given cosmetic variant.
fn variant_modifier(class: EncounterClass, kind: VariantKind) -> f64 {
    match class {
        EncounterClass::Common => match kind {
            VariantKind::Normal => 0.92,
            VariantKind::Shiny => 0.01,
            VariantKind::Dark => 0.02,
            VariantKind::Mystic => 0.02,
            VariantKind::Metallic => 0.02,
            VariantKind::Shadow => 0.01,
        },
        // Rare-and-above encounters share one modifier table.
        _ => match kind {
            VariantKind::Normal => 0.6,
            VariantKind::Shiny => 0.05,
            VariantKind::Dark => 0.1,
            VariantKind::Mystic => 0.1,
            VariantKind::Metallic => 0.1,
            VariantKind::Shadow => 0.05,
        },
    }
}

/// Completion counters for the current candidate set.
///
/// `total_slots` counts all six variant kinds per Pokémon whether or not
/// each is obtainable - a deliberate overcount kept for parity with the
/// displayed "caught / total" figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    pub caught: usize,
    pub total_slots: usize,
}

pub fn completion(candidates: &[&Pokemon]) -> Completion {
    Completion {
        caught: candidates.iter().map(|p| p.caught_count()).sum(),
        total_slots: candidates.len() * VariantKind::ALL.len(),
    }
}

/// Estimate the "1 in N" chance that the next encounter in this area is
/// something still uncaught.
///
/// `candidates` must already be filtered to the active area. Returns
/// `None` when every variant of every candidate is caught (or the summed
/// mass underflows to zero): the area is complete, which is a terminal
/// state rather than an error.
pub fn compute_route_probability(candidates: &[&Pokemon]) -> Option<u64> {
    if !candidates.iter().any(|p| p.has_uncaught_variant()) {
        return None;
    }

    // Category counts and presence flags are taken over the whole
    // area-matching set, not just the uncaught pool.
    let mut commons = 0usize;
    let mut rares = 0usize;
    let mut has_rare = false;
    let mut has_legendary = false;
    let mut has_ultra_beast = false;
    for p in candidates {
        match classify(p) {
            EncounterClass::Common => commons += 1,
            EncounterClass::Rare => {
                rares += 1;
                has_rare = true;
            }
            EncounterClass::Legendary => has_legendary = true,
            EncounterClass::UltraBeast => has_ultra_beast = true,
        }
    }

    let mut common_mass = 1.0;
    if has_rare {
        common_mass -= RARE_MASS;
    }
    if has_legendary {
        common_mass -= LEGENDARY_MASS;
    }
    if has_ultra_beast {
        common_mass -= ULTRA_BEAST_MASS;
    }

    let mut route_probability = 0.0;
    for p in candidates {
        if !p.has_uncaught_variant() {
            continue;
        }
        let class = classify(p);
        let entity_probability = match class {
            // Counts are nonzero whenever an entity of the class exists,
            // but the guard stays: dividing by zero here would poison the
            // whole estimate.
            EncounterClass::Common if commons > 0 => common_mass / commons as f64,
            EncounterClass::Common => common_mass,
            EncounterClass::Rare if rares > 0 => RARE_MASS / rares as f64,
            EncounterClass::Rare => RARE_MASS,
            EncounterClass::Legendary => LEGENDARY_MASS,
            EncounterClass::UltraBeast => ULTRA_BEAST_MASS,
        };
        for variant in p.variants.iter().filter(|v| !v.caught) {
            route_probability += entity_probability * variant_modifier(class, variant.kind);
        }
    }

    if route_probability <= 0.0 {
        return None;
    }
    Some((1.0 / route_probability).round() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use catchdex_domain::{PokemonId, Variant};

    fn mon(id: u32, rarity: Rarity) -> Pokemon {
        Pokemon::new(PokemonId::new(id), format!("mon-{id}"), rarity)
            .with_variant(Variant::new(VariantKind::Normal))
    }

    #[test]
    fn lone_uncaught_common_is_one_in_one() {
        // totalRares=0, commonProb stays 1, contribution 1 * 0.92 = 0.92,
        // round(1 / 0.92) = 1.
        let p = mon(19, Rarity::Common);
        assert_eq!(compute_route_probability(&[&p]), Some(1));
    }

    #[test]
    fn fully_caught_area_is_complete_not_an_error() {
        let p = Pokemon::new(PokemonId::new(19), "Rattata", Rarity::Common)
            .with_variant(Variant::caught(VariantKind::Normal))
            .with_variant(Variant::caught(VariantKind::Shiny));
        assert_eq!(compute_route_probability(&[&p]), None);
    }

    #[test]
    fn no_obtainable_variants_means_complete() {
        let p = Pokemon::new(PokemonId::new(132), "Ditto", Rarity::Common);
        assert_eq!(compute_route_probability(&[&p]), None);
    }

    #[test]
    fn evolved_commons_are_encountered_as_rares() {
        let evolved = mon(17, Rarity::Common).with_previous_forms([PokemonId::new(16)]);
        assert_eq!(classify(&evolved), EncounterClass::Rare);
        assert_eq!(classify(&mon(16, Rarity::Common)), EncounterClass::Common);
        assert_eq!(
            classify(&mon(144, Rarity::Legendary)),
            EncounterClass::Legendary
        );
    }

    #[test]
    fn rarer_tiers_steal_mass_from_the_common_pool() {
        let common = mon(19, Rarity::Common);
        let rare = mon(147, Rarity::Rare);
        let legendary = mon(144, Rarity::Legendary);

        // One uncaught common alone: 1 / (1.0 * 0.92).
        assert_eq!(compute_route_probability(&[&common]), Some(1));

        // Adding caught rare & legendary mons shrinks the common mass to
        // 1 - 0.005 - 0.001 but they contribute nothing uncaught.
        let caught_rare = Pokemon::new(PokemonId::new(147), "Dratini", Rarity::Rare)
            .with_variant(Variant::caught(VariantKind::Normal));
        let caught_legendary = Pokemon::new(PokemonId::new(144), "Articuno", Rarity::Legendary)
            .with_variant(Variant::caught(VariantKind::Normal));
        let p = compute_route_probability(&[&common, &caught_rare, &caught_legendary])
            .expect("common still uncaught");
        // 1 / (0.994 * 0.92) = 1.093... rounds to 1.
        assert_eq!(p, 1);

        // With everything uncaught the rare and legendary also contribute.
        let sum: f64 = 0.994 * 0.92 + 0.005 * 0.6 + 0.001 * 0.6;
        let expected = (1.0 / sum).round() as u64;
        assert_eq!(
            compute_route_probability(&[&common, &rare, &legendary]),
            Some(expected)
        );
    }

    #[test]
    fn category_mass_is_spread_across_its_members() {
        let a = mon(19, Rarity::Common);
        let b = mon(16, Rarity::Common);
        // Two uncaught commons halve each entity's share; the total is
        // unchanged: 2 * (1/2 * 0.92) = 0.92.
        assert_eq!(compute_route_probability(&[&a, &b]), Some(1));

        // One caught, one uncaught: the uncaught one still carries only
        // half the mass, so the estimate doubles: 1 / (0.5 * 0.92) = 2.17.
        let caught = Pokemon::new(PokemonId::new(16), "Pidgey", Rarity::Common)
            .with_variant(Variant::caught(VariantKind::Normal));
        assert_eq!(compute_route_probability(&[&a, &caught]), Some(2));
    }

    #[test]
    fn ultra_beasts_use_their_own_mass() {
        let ub = mon(793, Rarity::UltraBeast);
        // 1 / (0.0001 * 0.6) = 16667.
        assert_eq!(compute_route_probability(&[&ub]), Some(16667));
    }

    #[test]
    fn completion_counts_six_slots_per_candidate() {
        let caught = Pokemon::new(PokemonId::new(16), "Pidgey", Rarity::Common)
            .with_variant(Variant::caught(VariantKind::Normal))
            .with_variant(Variant::new(VariantKind::Shiny));
        let other = mon(19, Rarity::Common);
        let c = completion(&[&caught, &other]);
        assert_eq!(c.caught, 1);
        assert_eq!(c.total_slots, 12);
    }
}
