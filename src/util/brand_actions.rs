//! Brand-widget request flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! The widget fetches the catalog once per mount through `StoreApi`. A reply
//! that lands after the widget is torn down is dropped, not applied.

#[cfg(test)]
#[path = "brand_actions_test.rs"]
mod brand_actions_test;

use crate::error::ApiError;
use crate::net::api::StoreApi;
use crate::net::types::Brand;
use crate::util::lifetime::Lifetime;

/// Fetch all brands and hand the result to `apply` if `lifetime` is still
/// alive. Returns whether `apply` ran.
pub async fn load_brands<A, F>(api: &A, lifetime: &Lifetime, apply: F) -> bool
where
    A: StoreApi + ?Sized,
    F: FnOnce(Result<Vec<Brand>, ApiError>),
{
    let result = api.get_all_brands().await;
    if !lifetime.is_alive() {
        log::debug!("brand widget unmounted before fetch finished");
        return false;
    }
    apply(result);
    true
}
