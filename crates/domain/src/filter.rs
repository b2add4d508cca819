//! Active display filters.
//!
//! The caller owns the single mutable instance and passes it into every
//! engine call; the engine never mutates it.

use serde::{Deserialize, Serialize};

use crate::entities::{Terrain, TimeOfDay, VariantKind};

/// The currently selected place/time/terrain/variant constraints.
/// `None` means unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    pub place: Option<String>,
    pub time: Option<TimeOfDay>,
    pub terrain: Option<Terrain>,
    pub variant: Option<VariantKind>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when place, time, and terrain are all set - the three filters
    /// that together define an encounter area. Route probability is only
    /// meaningful for a complete area selection.
    pub fn is_area_complete(&self) -> bool {
        self.place.is_some() && self.time.is_some() && self.terrain.is_some()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    // Builder-style helpers, used heavily by tests.

    pub fn with_place(mut self, place: impl Into<String>) -> Self {
        self.place = Some(place.into());
        self
    }

    pub fn with_time(mut self, time: TimeOfDay) -> Self {
        self.time = Some(time);
        self
    }

    pub fn with_terrain(mut self, terrain: Terrain) -> Self {
        self.terrain = Some(terrain);
        self
    }

    pub fn with_variant(mut self, variant: VariantKind) -> Self {
        self.variant = Some(variant);
        self
    }
}
