//! Use cases - the computation pipeline.
//!
//! Everything except `collection` is a pure function over
//! `(catalogue, filters)`; `collection` orchestrates the ports around the
//! single mutation path.

pub mod collection;
pub mod evolution;
pub mod matching;
pub mod probability;
pub mod projection;
pub mod routes;
pub mod view;

pub use collection::CollectionUseCases;
pub use evolution::{
    build_display_list, build_evolution_line, EvolutionLine, EVOLUTION_LINE_LEN,
};
pub use matching::matches;
pub use probability::{completion, compute_route_probability, Completion, EncounterClass};
pub use projection::{project, DisplayOptions, VariantGroup};
pub use routes::{build_area_index, recommend_route, sort_places, AreaIndex, Recommendation};
pub use view::{render, DexView};
