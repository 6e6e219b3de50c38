//! Domain model for the campsite checklist.
//!
//! # Responsibility
//! - Define the immutable catalog structures (zones, items).
//! - Define the mutable application state and its persisted JSON shape.
//!
//! # Invariants
//! - Catalog data never changes after construction.
//! - `AppState.zones` keys mirror the catalog zone-id set at all times.

pub mod catalog;
pub mod state;
