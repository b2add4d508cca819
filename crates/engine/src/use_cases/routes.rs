//! Area index and route recommendation.
//!
//! The index is built once after catalogue load: every distinct
//! (place, terrain, time) combination appearing in any spawn gets a leaf,
//! and a second pass fills each leaf with the route probability for the
//! Pokémon spawning there. Recommendation scans the index for the leaf
//! with the lowest "1 in N" - the quickest expected next catch.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::sync::OnceLock;

use regex_lite::Regex;
use tracing::debug;

use catchdex_domain::{Catalogue, FilterState, Pokemon, Terrain, TimeOfDay};

use super::matching::spawns_in_area;
use super::probability::compute_route_probability;

/// Probability leaves for one place, per terrain and time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AreaEntry {
    pub place: String,
    cells: [[Option<u64>; 2]; 2],
}

impl AreaEntry {
    fn new(place: impl Into<String>) -> Self {
        Self {
            place: place.into(),
            cells: [[None; 2]; 2],
        }
    }

    /// `None` means either no spawns for this combination or nothing left
    /// uncaught there.
    pub fn probability(&self, terrain: Terrain, time: TimeOfDay) -> Option<u64> {
        self.cells[terrain_index(terrain)][time_index(time)]
    }

    fn set(&mut self, terrain: Terrain, time: TimeOfDay, probability: Option<u64>) {
        self.cells[terrain_index(terrain)][time_index(time)] = probability;
    }
}

fn terrain_index(terrain: Terrain) -> usize {
    match terrain {
        Terrain::Land => 0,
        Terrain::Water => 1,
    }
}

fn time_index(time: TimeOfDay) -> usize {
    match time {
        TimeOfDay::Day => 0,
        TimeOfDay::Night => 1,
    }
}

/// Precomputed probability map over every area in the catalogue, kept in
/// sorted place order (see [`sort_places`]).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AreaIndex {
    entries: Vec<AreaEntry>,
}

impl AreaIndex {
    pub fn entries(&self) -> &[AreaEntry] {
        &self.entries
    }

    pub fn entry(&self, place: &str) -> Option<&AreaEntry> {
        self.entries.iter().find(|e| e.place == place)
    }
}

/// The area the player should visit next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    pub place: String,
    pub terrain: Terrain,
    pub time: TimeOfDay,
    /// The winning "1 in N" value.
    pub probability: u64,
}

fn route_number(place: &str) -> Option<u64> {
    static ROUTE: OnceLock<Regex> = OnceLock::new();
    let re = ROUTE.get_or_init(|| {
        #[allow(clippy::unwrap_used)] // literal pattern
        Regex::new(r"^Route\s+(\d+)$").unwrap()
    });
    re.captures(place)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Order places for display and tie-breaking: numbered routes first, by
/// their number, then every other place alphabetically.
pub fn compare_places(a: &str, b: &str) -> Ordering {
    match (route_number(a), route_number(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

pub fn sort_places(places: &mut [String]) {
    places.sort_by(|a, b| compare_places(a, b));
}

/// Build the index: collect distinct spawn combinations, then run the
/// probability engine over each one.
pub fn build_area_index(catalogue: &Catalogue) -> AreaIndex {
    let mut places: Vec<String> = catalogue
        .iter()
        .flat_map(|p| p.spawns.iter().map(|s| s.place.clone()))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    sort_places(&mut places);

    let mut entries = Vec::with_capacity(places.len());
    for place in places {
        let mut entry = AreaEntry::new(&place);
        for terrain in Terrain::all() {
            for time in TimeOfDay::all() {
                let candidates: Vec<&Pokemon> = catalogue
                    .iter()
                    .filter(|p| spawns_in_area(p, &place, terrain, time))
                    .collect();
                if candidates.is_empty() {
                    continue;
                }
                entry.set(terrain, time, compute_route_probability(&candidates));
            }
        }
        entries.push(entry);
    }
    debug!(areas = entries.len(), "area index built");
    AreaIndex { entries }
}

/// Pick the area with the globally lowest "1 in N".
///
/// When `filters.time` is set only that time competes; otherwise each
/// place/terrain enters with its minimum across times. Ties resolve to
/// the first leaf in sorted place order, Land before Water, Day before
/// Night - iteration order does the tie-breaking, so the first strict
/// improvement wins.
pub fn recommend_route(index: &AreaIndex, filters: &FilterState) -> Option<Recommendation> {
    let times: &[TimeOfDay] = match filters.time {
        Some(TimeOfDay::Day) => &[TimeOfDay::Day],
        Some(TimeOfDay::Night) => &[TimeOfDay::Night],
        None => &[TimeOfDay::Day, TimeOfDay::Night],
    };

    let mut best: Option<Recommendation> = None;
    for entry in &index.entries {
        for terrain in Terrain::all() {
            // Minimum across the admissible times for this place/terrain.
            let candidate = times
                .iter()
                .filter_map(|&time| {
                    entry
                        .probability(terrain, time)
                        .map(|probability| (probability, time))
                })
                .min_by_key(|(probability, _)| *probability);
            let Some((probability, time)) = candidate else {
                continue;
            };
            if best
                .as_ref()
                .is_none_or(|b| probability < b.probability)
            {
                best = Some(Recommendation {
                    place: entry.place.clone(),
                    terrain,
                    time,
                    probability,
                });
            }
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use catchdex_domain::{PokemonId, Rarity, Spawn, Variant, VariantKind};

    fn mon(id: u32, name: &str, rarity: Rarity, spawn: Spawn) -> Pokemon {
        Pokemon::new(PokemonId::new(id), name, rarity)
            .with_spawn(spawn)
            .with_variant(Variant::new(VariantKind::Normal))
    }

    #[test]
    fn numbered_routes_sort_before_named_places() {
        let mut places = vec![
            "Pallet Town".to_string(),
            "Route 12".to_string(),
            "Route 3".to_string(),
        ];
        sort_places(&mut places);
        assert_eq!(places, vec!["Route 3", "Route 12", "Pallet Town"]);
    }

    #[test]
    fn non_route_places_sort_alphabetically() {
        let mut places = vec![
            "Viridian Forest".to_string(),
            "Cerulean Cave".to_string(),
            "Route 1".to_string(),
        ];
        sort_places(&mut places);
        assert_eq!(places, vec!["Route 1", "Cerulean Cave", "Viridian Forest"]);
    }

    fn two_area_catalogue() -> Catalogue {
        Catalogue::new(vec![
            // A lone common on Route 1: probability "1 in 1".
            mon(
                19,
                "Rattata",
                Rarity::Common,
                Spawn::new("Route 1", Terrain::Land, TimeOfDay::Day),
            ),
            // A legendary in Cerulean Cave at night: a long shot.
            mon(
                150,
                "Mewtwo",
                Rarity::Legendary,
                Spawn::new("Cerulean Cave", Terrain::Land, TimeOfDay::Night),
            ),
        ])
        .expect("valid catalogue")
    }

    #[test]
    fn index_has_leaves_only_where_spawns_exist() {
        let index = build_area_index(&two_area_catalogue());
        assert_eq!(index.entries().len(), 2);
        // Sorted place order: routes first.
        assert_eq!(index.entries()[0].place, "Route 1");

        let route1 = index.entry("Route 1").expect("entry");
        assert_eq!(route1.probability(Terrain::Land, TimeOfDay::Day), Some(1));
        assert_eq!(route1.probability(Terrain::Land, TimeOfDay::Night), None);
        assert_eq!(route1.probability(Terrain::Water, TimeOfDay::Day), None);
    }

    #[test]
    fn recommendation_takes_the_global_minimum() {
        let index = build_area_index(&two_area_catalogue());
        let rec = recommend_route(&index, &FilterState::new()).expect("recommendation");
        assert_eq!(rec.place, "Route 1");
        assert_eq!(rec.terrain, Terrain::Land);
        assert_eq!(rec.time, TimeOfDay::Day);
        assert_eq!(rec.probability, 1);
    }

    #[test]
    fn time_filter_restricts_the_competition() {
        let index = build_area_index(&two_area_catalogue());
        let filters = FilterState::new().with_time(TimeOfDay::Night);
        let rec = recommend_route(&index, &filters).expect("recommendation");
        // Route 1 only spawns by day, so the cave wins at night.
        assert_eq!(rec.place, "Cerulean Cave");
        assert_eq!(rec.time, TimeOfDay::Night);
    }

    #[test]
    fn ties_resolve_to_the_first_place_in_sorted_order() {
        let catalogue = Catalogue::new(vec![
            mon(
                19,
                "Rattata",
                Rarity::Common,
                Spawn::new("Route 2", Terrain::Land, TimeOfDay::Day),
            ),
            mon(
                16,
                "Pidgey",
                Rarity::Common,
                Spawn::new("Route 1", Terrain::Land, TimeOfDay::Day),
            ),
        ])
        .expect("valid catalogue");
        let index = build_area_index(&catalogue);
        let rec = recommend_route(&index, &FilterState::new()).expect("recommendation");
        assert_eq!(rec.place, "Route 1");
    }

    #[test]
    fn fully_caught_catalogue_yields_no_recommendation() {
        let catalogue = Catalogue::new(vec![Pokemon::new(
            PokemonId::new(19),
            "Rattata",
            Rarity::Common,
        )
        .with_spawn(Spawn::new("Route 1", Terrain::Land, TimeOfDay::Day))
        .with_variant(Variant::caught(VariantKind::Normal))])
        .expect("valid catalogue");
        let index = build_area_index(&catalogue);
        assert_eq!(recommend_route(&index, &FilterState::new()), None);
    }
}
