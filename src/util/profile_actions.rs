//! Account-panel request flows.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each flow runs one request against `StoreApi` and returns an
//! `ActionOutcome` describing what the screen should change. The component
//! applies it to the shared signals, so the flows stay browser-free.
//!
//! ERROR HANDLING
//! ==============
//! Transport errors are logged and otherwise swallowed: no notification,
//! no state change. `FAIL` envelopes become error notifications carrying the
//! server's message.

#[cfg(test)]
#[path = "profile_actions_test.rs"]
mod profile_actions_test;

use crate::net::api::StoreApi;
use crate::net::types::{ApiStatus, PasswordChange, UserInfo};
use crate::state::common::CommonState;
use crate::state::notifications::{Notification, NotificationsState};
use crate::util::lifetime::Lifetime;
use crate::util::payload::{ProfileFields, clean_payload};

pub const UPDATE_FAILED_TITLE: &str = "Can not update user!";
pub const UPDATE_SUCCESS_TITLE: &str = "Success";
pub const UPDATE_SUCCESS_DESCRIPTION: &str = "Profile updated!";
pub const PASSWORD_SUCCESS_TITLE: &str = "Update password success!";
pub const PASSWORD_FAILED_TITLE: &str = "Error";

/// What a settled request asks the screen to change.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActionOutcome {
    /// Replacement for the shared user record.
    pub user_info: Option<UserInfo>,
    pub notification: Option<Notification>,
}

impl ActionOutcome {
    fn notify(notification: Notification) -> Self {
        Self { user_info: None, notification: Some(notification) }
    }

    pub fn apply(self, common: &mut CommonState, notifications: &mut NotificationsState) {
        if let Some(user_info) = self.user_info {
            common.set_user_info(user_info);
        }
        if let Some(notification) = self.notification {
            notifications.push(notification);
        }
    }
}

/// Clean `fields`, send them as a profile update and interpret the reply.
pub async fn submit_profile<A>(api: &A, user_id: &str, fields: ProfileFields) -> ActionOutcome
where
    A: StoreApi + ?Sized,
{
    let payload = clean_payload(fields);
    let envelope = match api.update_user(user_id, &payload).await {
        Ok(envelope) => envelope,
        Err(e) => {
            log::error!("profile update failed: {e}");
            return ActionOutcome::default();
        }
    };

    if envelope.status == ApiStatus::Fail {
        return ActionOutcome::notify(Notification::error(UPDATE_FAILED_TITLE, envelope.message_or_default()));
    }

    let message = envelope.message_or_default();
    match envelope.data {
        Some(user_info) => ActionOutcome {
            user_info: Some(user_info),
            notification: Some(Notification::success(UPDATE_SUCCESS_TITLE, UPDATE_SUCCESS_DESCRIPTION)),
        },
        None => {
            log::warn!("profile update returned {:?} without a user record", envelope.status);
            ActionOutcome::notify(Notification::error(UPDATE_FAILED_TITLE, message))
        }
    }
}

/// Send a password change and report the server's verdict.
pub async fn submit_password_update<A>(api: &A, user_id: &str, change: PasswordChange) -> ActionOutcome
where
    A: StoreApi + ?Sized,
{
    match api.update_password(user_id, &change).await {
        Ok(envelope) if envelope.status == ApiStatus::Ok => {
            ActionOutcome::notify(Notification::success(PASSWORD_SUCCESS_TITLE, envelope.message_or_default()))
        }
        Ok(envelope) => {
            ActionOutcome::notify(Notification::error(PASSWORD_FAILED_TITLE, envelope.message_or_default()))
        }
        Err(e) => {
            log::error!("password update failed: {e}");
            ActionOutcome::default()
        }
    }
}

/// Where a running account action reports its lifecycle.
///
/// The account panel implements this over its signals; `run_action` owns the
/// ordering.
pub trait ActionSink {
    fn begin_request(&self);
    fn apply_outcome(&self, outcome: ActionOutcome);
    fn finish_request(&self);
}

/// Drive one account action from start to settle.
///
/// The outcome always reaches shared state. The panel's request count only
/// drops while `lifetime` is alive.
pub async fn run_action<S, F>(sink: &S, lifetime: &Lifetime, action: F)
where
    S: ActionSink + ?Sized,
    F: Future<Output = ActionOutcome>,
{
    sink.begin_request();
    let outcome = action.await;
    sink.apply_outcome(outcome);
    if lifetime.is_alive() {
        sink.finish_request();
    }
}
