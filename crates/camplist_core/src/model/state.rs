//! Mutable application state and its persisted form.
//!
//! # Responsibility
//! - Define the single mutable state root owned by the store.
//! - Define the persisted JSON shape and the tolerant merge back into a
//!   default state.
//!
//! # Invariants
//! - `zones` keys always equal the catalog's zone-id set, even after
//!   merging persisted data from an older or corrupted blob.
//! - `active_zone` is transient and never serialized.

use crate::model::catalog::Catalog;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Per-zone checked-item set.
///
/// Membership is not validated against the catalog on write; stray ids from
/// older catalogs are tolerated and only matter to raw-size progress counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZoneState {
    pub checked: BTreeSet<String>,
}

/// The single mutable state root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    /// One entry per catalog zone, created at initialization. The key set
    /// is stable for the process lifetime.
    pub zones: BTreeMap<String, ZoneState>,
    /// Global display-mode flag, persisted across sessions.
    pub night_mode: bool,
    /// Zone whose detail panel is open. Transient UI state.
    pub active_zone: Option<String>,
}

impl AppState {
    /// Builds the default state: every catalog zone empty, day mode,
    /// no active zone.
    pub fn initial(catalog: &Catalog) -> Self {
        let zones = catalog
            .zones()
            .iter()
            .map(|zone| (zone.id.clone(), ZoneState::default()))
            .collect();
        Self {
            zones,
            night_mode: false,
            active_zone: None,
        }
    }
}

/// JSON shape written to and read from storage.
///
/// Both fields are defaultable so that partial or older blobs still load;
/// serde ignores unknown top-level fields by default, which is exactly the
/// tolerance the load contract requires.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(rename = "nightMode", default)]
    pub night_mode: bool,
    #[serde(default)]
    pub zones: BTreeMap<String, Vec<String>>,
}

impl PersistedState {
    /// Captures the persistable subset of `state`.
    pub fn capture(state: &AppState) -> Self {
        Self {
            night_mode: state.night_mode,
            zones: state
                .zones
                .iter()
                .map(|(id, zone)| (id.clone(), zone.checked.iter().cloned().collect()))
                .collect(),
        }
    }

    /// Merges this blob into a freshly-initialized state.
    ///
    /// Only zone entries whose id already exists in `state` are applied;
    /// everything else in the blob is dropped. This keeps the zone key set
    /// identical to the catalog's regardless of what was stored.
    pub fn merge_into(self, state: &mut AppState) {
        state.night_mode = self.night_mode;
        for (id, items) in self.zones {
            if let Some(zone) = state.zones.get_mut(&id) {
                zone.checked = items.into_iter().collect();
            }
        }
    }
}
