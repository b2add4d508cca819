//! Pokémon entity - the unit of the collection catalogue.
//!
//! A Pokémon carries its evolutionary ancestry (`previous_forms`), the
//! places it can be encountered (`spawns`), and the cosmetic variants a
//! player can independently mark as caught.

use serde::{Deserialize, Serialize};

use crate::ids::PokemonId;

// =============================================================================
// Rarity
// =============================================================================

/// Declared rarity tier of a Pokémon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Rarity {
    Common,
    Rare,
    Legendary,
    UltraBeast,
}

impl Rarity {
    /// Fixed order used when sorting entries within a variant group.
    pub const DISPLAY_ORDER: [Rarity; 4] =
        [Rarity::Common, Rarity::Rare, Rarity::Legendary, Rarity::UltraBeast];

    /// Rank of this rarity in [`Self::DISPLAY_ORDER`] (lower sorts first).
    pub fn display_rank(&self) -> usize {
        match self {
            Rarity::Common => 0,
            Rarity::Rare => 1,
            Rarity::Legendary => 2,
            Rarity::UltraBeast => 3,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Rare => "Rare",
            Rarity::Legendary => "Legendary",
            Rarity::UltraBeast => "Ultra Beast",
        }
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// =============================================================================
// Spawn conditions
// =============================================================================

/// Terrain a spawn occurs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Terrain {
    Land,
    Water,
}

impl Terrain {
    pub fn all() -> [Terrain; 2] {
        [Terrain::Land, Terrain::Water]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Terrain::Land => "Land",
            Terrain::Water => "Water",
        }
    }
}

impl std::fmt::Display for Terrain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Time window a spawn is active in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TimeOfDay {
    Day,
    Night,
}

impl TimeOfDay {
    pub fn all() -> [TimeOfDay; 2] {
        [TimeOfDay::Day, TimeOfDay::Night]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TimeOfDay::Day => "Day",
            TimeOfDay::Night => "Night",
        }
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One place/terrain/time combination a Pokémon can be encountered in.
///
/// A Pokémon may carry several spawns (it appears in multiple areas);
/// duplicate spawns are tolerated as harmless.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spawn {
    pub place: String,
    pub terrain: Terrain,
    pub time: TimeOfDay,
}

impl Spawn {
    pub fn new(place: impl Into<String>, terrain: Terrain, time: TimeOfDay) -> Self {
        Self {
            place: place.into(),
            terrain,
            time,
        }
    }
}

// =============================================================================
// Variants
// =============================================================================

/// Cosmetic variant category, each independently markable as caught.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VariantKind {
    Normal,
    Shiny,
    Dark,
    Mystic,
    Metallic,
    Shadow,
}

impl VariantKind {
    /// Every variant kind. Completion counters use this width per Pokémon
    /// regardless of which kinds are actually obtainable.
    pub const ALL: [VariantKind; 6] = [
        VariantKind::Normal,
        VariantKind::Shiny,
        VariantKind::Dark,
        VariantKind::Mystic,
        VariantKind::Metallic,
        VariantKind::Shadow,
    ];

    /// Fixed order variant groups are rendered in.
    pub const DISPLAY_ORDER: [VariantKind; 6] = [
        VariantKind::Normal,
        VariantKind::Dark,
        VariantKind::Mystic,
        VariantKind::Metallic,
        VariantKind::Shadow,
        VariantKind::Shiny,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            VariantKind::Normal => "Normal",
            VariantKind::Shiny => "Shiny",
            VariantKind::Dark => "Dark",
            VariantKind::Mystic => "Mystic",
            VariantKind::Metallic => "Metallic",
            VariantKind::Shadow => "Shadow",
        }
    }
}

impl std::fmt::Display for VariantKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A catchable variant of a Pokémon.
///
/// A kind missing from a Pokémon's variant list means "not obtainable" -
/// callers must not treat absence as an uncaught variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    pub kind: VariantKind,
    pub caught: bool,
}

impl Variant {
    pub fn new(kind: VariantKind) -> Self {
        Self {
            kind,
            caught: false,
        }
    }

    pub fn caught(kind: VariantKind) -> Self {
        Self { kind, caught: true }
    }
}

// =============================================================================
// Pokémon
// =============================================================================

/// A catalogue entry.
///
/// `previous_forms` lists the ids of earlier evolutionary stages; an empty
/// list marks a base form. The relation must be acyclic and every id must
/// resolve within the catalogue (enforced by `Catalogue::new`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pokemon {
    pub id: PokemonId,
    pub name: String,
    pub rarity: Rarity,
    #[serde(default)]
    pub previous_forms: Vec<PokemonId>,
    #[serde(default)]
    pub spawns: Vec<Spawn>,
    #[serde(default)]
    pub variants: Vec<Variant>,
}

impl Pokemon {
    pub fn new(id: PokemonId, name: impl Into<String>, rarity: Rarity) -> Self {
        Self {
            id,
            name: name.into(),
            rarity,
            previous_forms: Vec::new(),
            spawns: Vec::new(),
            variants: Vec::new(),
        }
    }

    /// True when this Pokémon has no prior evolutionary stage.
    pub fn is_base_form(&self) -> bool {
        self.previous_forms.is_empty()
    }

    /// True when `other` appears anywhere in this Pokémon's ancestry.
    pub fn evolves_from(&self, other: PokemonId) -> bool {
        self.previous_forms.contains(&other)
    }

    /// Look up a variant by kind. `None` means the kind is not obtainable.
    pub fn variant(&self, kind: VariantKind) -> Option<&Variant> {
        self.variants.iter().find(|v| v.kind == kind)
    }

    pub fn variant_mut(&mut self, kind: VariantKind) -> Option<&mut Variant> {
        self.variants.iter_mut().find(|v| v.kind == kind)
    }

    pub fn has_variant(&self, kind: VariantKind) -> bool {
        self.variant(kind).is_some()
    }

    /// True when at least one obtainable variant is still uncaught.
    pub fn has_uncaught_variant(&self) -> bool {
        self.variants.iter().any(|v| !v.caught)
    }

    /// Number of variants currently marked caught.
    pub fn caught_count(&self) -> usize {
        self.variants.iter().filter(|v| v.caught).count()
    }

    // Builder-style helpers for catalogue construction and tests.

    pub fn with_previous_forms(mut self, forms: impl IntoIterator<Item = PokemonId>) -> Self {
        self.previous_forms = forms.into_iter().collect();
        self
    }

    pub fn with_spawn(mut self, spawn: Spawn) -> Self {
        self.spawns.push(spawn);
        self
    }

    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variants.push(variant);
        self
    }
}
