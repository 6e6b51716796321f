//! Networking modules for the library backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `gateway` owns HTTP semantics and error normalization, `api` wraps each
//! backend endpoint in a typed call, and `types` defines the wire schema.

pub mod api;
pub mod gateway;
pub mod types;
