//! Flutter-facing bindings for the Farhang core.

pub mod api;
