use super::*;
use crate::net::types::UserInfo;

fn loaded() -> CommonState {
    CommonState::with_user_info(UserInfo { id: "u1".to_owned(), ..UserInfo::default() })
}

#[test]
fn no_user_is_loading() {
    let state = AccountState::default();
    assert_eq!(state.phase(&CommonState::default()), AccountPhase::Loading);
}

#[test]
fn loaded_user_is_ready() {
    let state = AccountState::default();
    assert_eq!(state.phase(&loaded()), AccountPhase::Ready);
}

#[test]
fn request_cycle_returns_to_ready() {
    let common = loaded();
    let mut state = AccountState::default();
    state.begin_request();
    assert_eq!(state.phase(&common), AccountPhase::Submitting);
    state.finish_request();
    assert_eq!(state.phase(&common), AccountPhase::Ready);
}

#[test]
fn overlapping_requests_stay_submitting_until_last_finishes() {
    let common = loaded();
    let mut state = AccountState::default();
    state.begin_request();
    state.begin_request();
    state.finish_request();
    assert_eq!(state.phase(&common), AccountPhase::Submitting);
    state.finish_request();
    assert_eq!(state.phase(&common), AccountPhase::Ready);
}

#[test]
fn finish_without_begin_does_not_underflow() {
    let mut state = AccountState::default();
    state.finish_request();
    assert_eq!(state.in_flight(), 0);
}
