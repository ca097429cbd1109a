//! Process-wide customer state shared across screens.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page shell loads the signed-in user and seeds this state; the account
//! panel replaces the record after the backend accepts an update. Screens
//! that only read the user never write here.

#[cfg(test)]
#[path = "common_test.rs"]
mod common_test;

use crate::net::types::UserInfo;

/// Shared customer state, provided as `RwSignal<CommonState>` context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommonState {
    user_info: Option<UserInfo>,
}

impl CommonState {
    pub fn with_user_info(user_info: UserInfo) -> Self {
        Self { user_info: Some(user_info) }
    }

    pub fn user_info(&self) -> Option<&UserInfo> {
        self.user_info.as_ref()
    }

    /// Id of the loaded user, or `None` while it has not arrived yet.
    pub fn user_id(&self) -> Option<&str> {
        self.user_info.as_ref().map(|u| u.id.as_str()).filter(|id| !id.is_empty())
    }

    /// Replace the stored user with the record the server echoed back.
    ///
    /// This is the only writer; records are swapped wholesale, never patched.
    pub fn set_user_info(&mut self, user_info: UserInfo) {
        self.user_info = Some(user_info);
    }
}
