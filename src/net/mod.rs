//! Networking modules for the storefront REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls behind the `StoreApi` seam and `types`
//! defines the wire schema shared with the backend.

pub mod api;
pub mod types;
