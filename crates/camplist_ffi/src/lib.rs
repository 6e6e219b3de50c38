//! FFI bindings crate for the campsite checklist core.

pub mod api;
