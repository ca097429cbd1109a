//! Brand-list state for the home-page brand widget.
//!
//! DESIGN
//! ======
//! Only the full sequence is stored. The visible list is always a slice of it,
//! so it cannot drift from the fetched data.

#[cfg(test)]
#[path = "brands_test.rs"]
mod brands_test;

use crate::error::ApiError;
use crate::net::types::Brand;

/// Number of brands shown before the "show more" action.
pub const INITIAL_VISIBLE_BRANDS: usize = 8;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BrandsState {
    all: Vec<Brand>,
    expanded: bool,
    loaded: bool,
}

impl BrandsState {
    /// Store a fetched catalog. Collapses back to the initial prefix.
    pub fn load(&mut self, brands: Vec<Brand>) {
        self.all = brands;
        self.expanded = false;
        self.loaded = true;
    }

    /// Apply the outcome of the mount-time fetch.
    ///
    /// Failures are logged and leave the widget empty; nothing is shown to
    /// the user.
    pub fn apply_fetch(&mut self, result: Result<Vec<Brand>, ApiError>) {
        match result {
            Ok(brands) => {
                log::debug!("loaded {} brands", brands.len());
                self.load(brands);
            }
            Err(e) => log::warn!("brand fetch failed: {e}"),
        }
    }

    /// Show the full catalog. There is no way back to the short list.
    pub fn expand(&mut self) {
        self.expanded = true;
    }

    #[cfg(test)]
    pub fn all(&self) -> &[Brand] {
        &self.all
    }

    pub fn visible(&self) -> &[Brand] {
        if self.expanded {
            &self.all
        } else {
            &self.all[..self.all.len().min(INITIAL_VISIBLE_BRANDS)]
        }
    }

    #[cfg(test)]
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    #[cfg(test)]
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Whether expanding would reveal anything new.
    pub fn has_more(&self) -> bool {
        self.visible().len() < self.all.len()
    }
}
