//! Core state management for the campsite packing checklist.
//! This crate is the single source of truth for checklist invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod progress;
pub mod repo;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::catalog::{Catalog, CatalogError, Item, Zone};
pub use model::state::{AppState, PersistedState, ZoneState};
pub use progress::Progress;
pub use repo::state_repo::{
    RepoError, RepoResult, SqliteStateRepository, StateRepository, STATE_KEY,
};
pub use store::{ListenerId, StateListener, StateStore};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
