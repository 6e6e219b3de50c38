//! Derived progress queries.
//!
//! # Responsibility
//! - Compute per-zone and total packing progress from catalog + state,
//!   on demand and without caching.
//!
//! # Invariants
//! - `total` always comes from the catalog; `checked` is the raw size of
//!   the zone's checked set. Stale item ids left over from older catalogs
//!   therefore still count (tolerant-read policy, matching the tolerant
//!   write policy of the store).

use crate::model::catalog::Catalog;
use crate::model::state::AppState;

/// Checked/total counts for one zone or for the whole campsite.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Progress {
    pub checked: usize,
    pub total: usize,
}

/// Progress for a single zone. Unknown zone ids yield `0/0`.
pub fn zone_progress(catalog: &Catalog, state: &AppState, zone_id: &str) -> Progress {
    let Some(zone) = catalog.zone(zone_id) else {
        return Progress::default();
    };
    let checked = state
        .zones
        .get(zone_id)
        .map_or(0, |zone_state| zone_state.checked.len());
    Progress {
        checked,
        total: zone.items.len(),
    }
}

/// Progress summed across every catalog zone, in catalog order.
pub fn total_progress(catalog: &Catalog, state: &AppState) -> Progress {
    catalog
        .zones()
        .iter()
        .map(|zone| zone_progress(catalog, state, &zone.id))
        .fold(Progress::default(), |acc, p| Progress {
            checked: acc.checked + p.checked,
            total: acc.total + p.total,
        })
}
