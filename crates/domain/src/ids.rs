use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable catalogue identifier for a Pokémon.
///
/// Ids come from the static catalogue file and never change across
/// sessions; the save format references Pokémon by this id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PokemonId(u32);

impl PokemonId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for PokemonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for PokemonId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<PokemonId> for u32 {
    fn from(value: PokemonId) -> Self {
        value.0
    }
}
