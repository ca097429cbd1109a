//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render storefront widgets while reading/writing shared state
//! from Leptos context providers.

pub mod address_update;
pub mod brand_card;
pub mod brand_widget;
pub mod email_update;
pub mod loading_section;
pub mod notification_stack;
pub mod password_update;
pub mod phone_update;
pub mod update_item;
