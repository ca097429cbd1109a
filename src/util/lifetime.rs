//! Component-lifetime token for async work.
//!
//! SYSTEM CONTEXT
//! ==============
//! A component creates a `Lifetime`, ends it from `on_cleanup`, and checks it
//! before writing fetch results into its own signals. Requests are not
//! aborted; their results are dropped.

#[cfg(test)]
#[path = "lifetime_test.rs"]
mod lifetime_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Clone, Debug)]
pub struct Lifetime {
    alive: Arc<AtomicBool>,
}

impl Default for Lifetime {
    fn default() -> Self {
        Self::new()
    }
}

impl Lifetime {
    pub fn new() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    pub fn end(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }

    /// Tie this token to the current reactive owner.
    pub fn bind_to_owner(&self) {
        let token = self.clone();
        leptos::prelude::on_cleanup(move || token.end());
    }
}
