//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the blob load/save contract the state store persists through.
//! - Isolate SQLite query details from store logic.
//!
//! # Invariants
//! - Repositories treat the blob as opaque text; JSON shape is owned by
//!   the model layer.

pub mod state_repo;
