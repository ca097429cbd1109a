//! Utility helpers shared across storefront UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep request flows and form rules out of components so
//! they can be tested without a browser.

pub mod brand_actions;
pub mod lifetime;
pub mod payload;
pub mod profile_actions;
pub mod validation;
