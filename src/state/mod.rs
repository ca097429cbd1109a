//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`brands`, `common`, `account`, `notifications`)
//! so individual components can depend on small focused models. Models are
//! plain structs; screens wrap them in `RwSignal` and share them via context.

pub mod account;
pub mod brands;
pub mod common;
pub mod notifications;
