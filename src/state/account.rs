//! Account-panel request state.
//!
//! DESIGN
//! ======
//! The panel is `Loading` until the shared user has an id, then `Ready`.
//! While any request is in flight it reports `Submitting`; every request ends
//! back in `Ready` whatever the outcome, so there is no error phase.

#[cfg(test)]
#[path = "account_test.rs"]
mod account_test;

use super::common::CommonState;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AccountPhase {
    #[default]
    Loading,
    Ready,
    Submitting,
}

/// Local state of one mounted account panel.
///
/// Double submits are not blocked; the counter only tracks how many requests
/// are still outstanding.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccountState {
    in_flight: u32,
}

impl AccountState {
    pub fn begin_request(&mut self) {
        self.in_flight += 1;
    }

    pub fn finish_request(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    #[cfg(test)]
    pub fn in_flight(&self) -> u32 {
        self.in_flight
    }

    pub fn phase(&self, common: &CommonState) -> AccountPhase {
        if common.user_id().is_none() {
            AccountPhase::Loading
        } else if self.in_flight > 0 {
            AccountPhase::Submitting
        } else {
            AccountPhase::Ready
        }
    }
}
