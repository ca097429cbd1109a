use super::*;
use std::cell::RefCell;

use crate::error::ApiError;
use crate::net::types::{ApiEnvelope, Brand, Sex, UpdatePayload};
use crate::state::account::{AccountPhase, AccountState};
use crate::state::notifications::NotificationKind;

// =========================================================================
// MockApi
// =========================================================================

#[derive(Default)]
struct MockApi {
    user_reply: RefCell<Option<Result<ApiEnvelope<UserInfo>, ApiError>>>,
    password_reply: RefCell<Option<Result<ApiEnvelope<serde_json::Value>, ApiError>>>,
    sent_payloads: RefCell<Vec<(String, UpdatePayload)>>,
    sent_passwords: RefCell<Vec<(String, PasswordChange)>>,
}

impl MockApi {
    fn with_user_reply(reply: Result<ApiEnvelope<UserInfo>, ApiError>) -> Self {
        Self { user_reply: RefCell::new(Some(reply)), ..Self::default() }
    }

    fn with_password_reply(reply: Result<ApiEnvelope<serde_json::Value>, ApiError>) -> Self {
        Self { password_reply: RefCell::new(Some(reply)), ..Self::default() }
    }
}

#[async_trait::async_trait(?Send)]
impl StoreApi for MockApi {
    async fn get_all_brands(&self) -> Result<Vec<Brand>, ApiError> {
        Ok(Vec::new())
    }

    async fn update_user(&self, user_id: &str, payload: &UpdatePayload) -> Result<ApiEnvelope<UserInfo>, ApiError> {
        self.sent_payloads.borrow_mut().push((user_id.to_owned(), payload.clone()));
        self.user_reply.borrow_mut().take().unwrap_or(Err(ApiError::Request("no reply".into())))
    }

    async fn update_password(
        &self,
        user_id: &str,
        change: &PasswordChange,
    ) -> Result<ApiEnvelope<serde_json::Value>, ApiError> {
        self.sent_passwords.borrow_mut().push((user_id.to_owned(), change.clone()));
        self.password_reply.borrow_mut().take().unwrap_or(Err(ApiError::Request("no reply".into())))
    }
}

fn stored_user() -> UserInfo {
    UserInfo {
        id: "u1".to_owned(),
        first_name: Some("Anna".to_owned()),
        last_name: Some("Tran".to_owned()),
        sex: Some(Sex::Female),
        phone: None,
        email: Some("anna@example.com".to_owned()),
        address: None,
    }
}

fn envelope<T>(status: ApiStatus, data: Option<T>, message: Option<&str>) -> ApiEnvelope<T> {
    ApiEnvelope { status, data, message: message.map(str::to_owned) }
}

// =========================================================================
// submit_profile
// =========================================================================

#[tokio::test]
async fn submit_profile_sends_cleaned_payload() {
    let api = MockApi::with_user_reply(Ok(envelope(ApiStatus::Ok, Some(stored_user()), None)));
    let fields = ProfileFields {
        first_name: Some("  Anna ".to_owned()),
        last_name: Some(String::new()),
        sex: Some(Sex::Male),
        ..ProfileFields::default()
    };
    submit_profile(&api, "u1", fields).await;

    let sent = api.sent_payloads.borrow();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, "u1");
    assert_eq!(
        serde_json::to_value(&sent[0].1).unwrap(),
        serde_json::json!({ "first_name": "Anna", "sex": "M" })
    );
}

#[tokio::test]
async fn submit_profile_success_replaces_shared_user() {
    let echoed = UserInfo { phone: Some("0901234567".to_owned()), ..stored_user() };
    let api = MockApi::with_user_reply(Ok(envelope(ApiStatus::Ok, Some(echoed.clone()), None)));
    let outcome = submit_profile(&api, "u1", ProfileFields::phone("0901234567")).await;

    let mut common = CommonState::with_user_info(stored_user());
    let mut notes = NotificationsState::default();
    outcome.apply(&mut common, &mut notes);

    assert_eq!(common.user_info(), Some(&echoed));
    assert_eq!(notes.items.len(), 1);
    assert_eq!(notes.items[0].notification.kind, NotificationKind::Success);
    assert_eq!(notes.items[0].notification.title, UPDATE_SUCCESS_TITLE);
}

#[tokio::test]
async fn submit_profile_fail_status_leaves_shared_user() {
    let api = MockApi::with_user_reply(Ok(envelope(ApiStatus::Fail, None, Some("Invalid"))));
    let outcome = submit_profile(&api, "u1", ProfileFields::email("bad@example.com")).await;

    let mut common = CommonState::with_user_info(stored_user());
    let mut notes = NotificationsState::default();
    outcome.apply(&mut common, &mut notes);

    assert_eq!(common.user_info(), Some(&stored_user()));
    assert_eq!(notes.items.len(), 1);
    let note = &notes.items[0].notification;
    assert_eq!(note.kind, NotificationKind::Error);
    assert_eq!(note.title, UPDATE_FAILED_TITLE);
    assert_eq!(note.description, "Invalid");
}

#[tokio::test]
async fn submit_profile_fail_status_ignores_echoed_data() {
    let api = MockApi::with_user_reply(Ok(envelope(ApiStatus::Fail, Some(UserInfo::default()), Some("nope"))));
    let outcome = submit_profile(&api, "u1", ProfileFields::phone("0901234567")).await;
    assert_eq!(outcome.user_info, None);
}

#[tokio::test]
async fn submit_profile_ok_without_data_is_an_error() {
    let api = MockApi::with_user_reply(Ok(envelope(ApiStatus::Ok, None, Some("missing record"))));
    let outcome = submit_profile(&api, "u1", ProfileFields::phone("0901234567")).await;
    assert_eq!(outcome.user_info, None);
    assert_eq!(outcome.notification.unwrap().kind, NotificationKind::Error);
}

#[tokio::test]
async fn submit_profile_transport_error_is_silent() {
    let api = MockApi::with_user_reply(Err(ApiError::Request("offline".to_owned())));
    let outcome = submit_profile(&api, "u1", ProfileFields::address("Hanoi")).await;
    assert_eq!(outcome, ActionOutcome::default());

    let mut common = CommonState::with_user_info(stored_user());
    let mut notes = NotificationsState::default();
    outcome.apply(&mut common, &mut notes);
    assert!(!notes.has_kind(NotificationKind::Success));
    assert_eq!(common.user_info(), Some(&stored_user()));
}

// =========================================================================
// submit_password_update
// =========================================================================

fn change() -> PasswordChange {
    PasswordChange { old_password: "old-pass".to_owned(), new_password: "new-pass".to_owned() }
}

#[tokio::test]
async fn password_ok_shows_success_with_server_message() {
    let api = MockApi::with_password_reply(Ok(envelope(ApiStatus::Ok, None, Some("Password changed"))));
    let outcome = submit_password_update(&api, "u1", change()).await;

    assert_eq!(api.sent_passwords.borrow()[0], ("u1".to_owned(), change()));
    let note = outcome.notification.unwrap();
    assert_eq!(note.kind, NotificationKind::Success);
    assert_eq!(note.title, PASSWORD_SUCCESS_TITLE);
    assert_eq!(note.description, "Password changed");
    assert_eq!(outcome.user_info, None);
}

#[tokio::test]
async fn password_fail_shows_error() {
    let api = MockApi::with_password_reply(Ok(envelope(ApiStatus::Fail, None, Some("Wrong password"))));
    let note = submit_password_update(&api, "u1", change()).await.notification.unwrap();
    assert_eq!(note.kind, NotificationKind::Error);
    assert_eq!(note.title, PASSWORD_FAILED_TITLE);
    assert_eq!(note.description, "Wrong password");
}

#[tokio::test]
async fn password_unknown_status_is_treated_as_failure() {
    let api = MockApi::with_password_reply(Ok(envelope(ApiStatus::Other, None, None)));
    let note = submit_password_update(&api, "u1", change()).await.notification.unwrap();
    assert_eq!(note.kind, NotificationKind::Error);
}

#[tokio::test]
async fn password_transport_error_is_silent() {
    let api = MockApi::with_password_reply(Err(ApiError::Status(500)));
    assert_eq!(submit_password_update(&api, "u1", change()).await, ActionOutcome::default());
}

// =========================================================================
// run_action
// =========================================================================

/// Account panel state held in plain cells.
#[derive(Default)]
struct PanelSink {
    account: RefCell<AccountState>,
    common: RefCell<CommonState>,
    notifications: RefCell<NotificationsState>,
}

impl PanelSink {
    fn signed_in() -> Self {
        Self { common: RefCell::new(CommonState::with_user_info(stored_user())), ..Self::default() }
    }

    fn phase(&self) -> AccountPhase {
        self.account.borrow().phase(&self.common.borrow())
    }
}

impl ActionSink for PanelSink {
    fn begin_request(&self) {
        self.account.borrow_mut().begin_request();
    }

    fn apply_outcome(&self, outcome: ActionOutcome) {
        outcome.apply(&mut self.common.borrow_mut(), &mut self.notifications.borrow_mut());
    }

    fn finish_request(&self) {
        self.account.borrow_mut().finish_request();
    }
}

#[tokio::test]
async fn failed_update_returns_panel_to_ready_without_success() {
    let api = MockApi::with_user_reply(Err(ApiError::Request("offline".to_owned())));
    let sink = PanelSink::signed_in();
    let lifetime = Lifetime::new();

    run_action(&sink, &lifetime, async {
        assert_eq!(sink.phase(), AccountPhase::Submitting);
        submit_profile(&api, "u1", ProfileFields::address("Hanoi")).await
    })
    .await;

    assert_eq!(sink.phase(), AccountPhase::Ready);
    assert!(!sink.notifications.borrow().has_kind(NotificationKind::Success));
    assert_eq!(sink.common.borrow().user_info(), Some(&stored_user()));
}

#[tokio::test]
async fn torn_down_panel_still_updates_shared_state() {
    let echoed = UserInfo { address: Some("Hanoi".to_owned()), ..stored_user() };
    let api = MockApi::with_user_reply(Ok(envelope(ApiStatus::Ok, Some(echoed.clone()), None)));
    let sink = PanelSink::signed_in();
    let lifetime = Lifetime::new();

    run_action(&sink, &lifetime, async {
        lifetime.end();
        submit_profile(&api, "u1", ProfileFields::address("Hanoi")).await
    })
    .await;

    assert_eq!(sink.common.borrow().user_info(), Some(&echoed));
    assert!(sink.notifications.borrow().has_kind(NotificationKind::Success));
    assert_eq!(sink.account.borrow().in_flight(), 1);
}

#[tokio::test]
async fn overlapping_actions_stay_submitting_until_both_settle() {
    let sink = PanelSink::signed_in();
    let lifetime = Lifetime::new();
    let phase_after_first = RefCell::new(None);

    let first = run_action(&sink, &lifetime, async {
        tokio::task::yield_now().await;
        ActionOutcome::notify(Notification::success(UPDATE_SUCCESS_TITLE, UPDATE_SUCCESS_DESCRIPTION))
    });
    let second = run_action(&sink, &lifetime, async {
        while sink.notifications.borrow().items.is_empty() {
            tokio::task::yield_now().await;
        }
        *phase_after_first.borrow_mut() = Some(sink.phase());
        ActionOutcome::default()
    });
    tokio::join!(first, second);

    assert_eq!(*phase_after_first.borrow(), Some(AccountPhase::Submitting));
    assert_eq!(sink.phase(), AccountPhase::Ready);
    assert_eq!(sink.account.borrow().in_flight(), 0);
}
