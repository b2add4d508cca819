//! The combined snapshot handed to the rendering boundary.
//!
//! One call per filter change: grouped display list, plus the route
//! probability and completion counters when the three area filters are
//! all set. The renderer subscribes to these snapshots and owns all
//! visual state.

use catchdex_domain::{Catalogue, FilterState, Pokemon};

use super::matching::matches;
use super::probability::{completion, compute_route_probability, Completion};
use super::projection::{project, DisplayOptions, VariantGroup};

/// Immutable projection snapshot for the renderer.
#[derive(Debug, Clone)]
pub struct DexView {
    pub groups: Vec<VariantGroup>,
    /// "1 in N" for the selected area. `None` when no full area is
    /// selected, or when everything reachable there is caught.
    pub route_probability: Option<u64>,
    pub completion: Completion,
}

/// Recompute the full view for the current filters.
///
/// Safe to call repeatedly in rapid succession: the result depends only
/// on the arguments at call time.
pub fn render(catalogue: &Catalogue, filters: &FilterState, options: DisplayOptions) -> DexView {
    let groups = project(catalogue, filters, options);

    let area_candidates: Vec<&Pokemon> = if filters.is_area_complete() {
        catalogue.iter().filter(|p| matches(p, filters)).collect()
    } else {
        catalogue.iter().collect()
    };

    let route_probability = if filters.is_area_complete() {
        compute_route_probability(&area_candidates)
    } else {
        None
    };

    DexView {
        groups,
        route_probability,
        completion: completion(&area_candidates),
    }
}
