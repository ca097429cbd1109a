//! Account panel: profile form plus contact and security update rows.
//!
//! SYSTEM CONTEXT
//! ==============
//! The signed-in user comes from `CommonState`, seeded by the page shell.
//! Until it has an id the panel shows a loading placeholder with no timeout.
//! Saves run through `util::profile_actions`; their outcome is applied to the
//! shared signals here once the response arrives.

use leptos::prelude::*;

use crate::components::address_update::AddressUpdate;
use crate::components::email_update::EmailUpdate;
use crate::components::loading_section::LoadingSection;
use crate::components::password_update::PasswordUpdate;
use crate::components::phone_update::PhoneUpdate;
use crate::components::update_item::UpdateItem;
use crate::net::api::HttpStoreApi;
use crate::net::types::{PasswordChange, Sex, UserInfo};
use crate::state::account::{AccountPhase, AccountState};
use crate::state::common::CommonState;
use crate::state::notifications::NotificationsState;
use crate::util::lifetime::Lifetime;
use crate::util::payload::ProfileFields;
use crate::util::profile_actions::{ActionOutcome, ActionSink, submit_password_update, submit_profile};
#[cfg(feature = "hydrate")]
use crate::util::profile_actions::run_action;
use crate::util::validation::{FULL_NAME_MESSAGE, is_valid_full_name};

/// Signals an in-flight action reports back to.
#[derive(Clone)]
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
struct ActionContext {
    common: RwSignal<CommonState>,
    notifications: RwSignal<NotificationsState>,
    account: RwSignal<AccountState>,
    lifetime: Lifetime,
}

impl ActionSink for ActionContext {
    fn begin_request(&self) {
        self.account.update(AccountState::begin_request);
    }

    fn apply_outcome(&self, outcome: ActionOutcome) {
        self.common.update(|c| self.notifications.update(|n| outcome.apply(c, n)));
    }

    fn finish_request(&self) {
        self.account.update(AccountState::finish_request);
    }
}

impl ActionContext {
    /// Run `action` in the background and apply its outcome.
    ///
    /// Shared state is updated even after the panel is torn down; panel-local
    /// state is not.
    fn spawn<F>(&self, action: F)
    where
        F: Future<Output = ActionOutcome> + 'static,
    {
        #[cfg(feature = "hydrate")]
        {
            let ctx = self.clone();
            leptos::task::spawn_local(async move {
                run_action(&ctx, &ctx.lifetime, action).await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = action;
        }
    }
}

fn current_user_id(common: RwSignal<CommonState>) -> Option<String> {
    common.with_untracked(|c| c.user_id().map(str::to_owned))
}

fn user_field(common: RwSignal<CommonState>, pick: fn(&UserInfo) -> Option<String>) -> Signal<String> {
    Signal::derive(move || common.with(|c| c.user_info().and_then(pick).unwrap_or_default()))
}

#[component]
pub fn AccountPage() -> impl IntoView {
    let common = expect_context::<RwSignal<CommonState>>();
    let notifications = expect_context::<RwSignal<NotificationsState>>();
    let api = expect_context::<HttpStoreApi>();
    let account = RwSignal::new(AccountState::default());
    let lifetime = Lifetime::new();
    lifetime.bind_to_owner();

    let ctx = ActionContext { common, notifications, account, lifetime };
    let phase = Signal::derive(move || account.with(|a| common.with(|c| a.phase(c))));

    let submit = {
        let ctx = ctx.clone();
        let api = api.clone();
        Callback::new(move |fields: ProfileFields| {
            let Some(user_id) = current_user_id(common) else {
                log::warn!("profile submit ignored: no user loaded");
                return;
            };
            let api = api.clone();
            ctx.spawn(async move { submit_profile(&api, &user_id, fields).await });
        })
    };

    let submit_password = Callback::new(move |change: PasswordChange| {
        let Some(user_id) = current_user_id(common) else {
            log::warn!("password submit ignored: no user loaded");
            return;
        };
        let api = api.clone();
        ctx.spawn(async move { submit_password_update(&api, &user_id, change).await });
    });

    let phone_open = RwSignal::new(false);
    let email_open = RwSignal::new(false);
    let address_open = RwSignal::new(false);
    let password_open = RwSignal::new(false);

    let phone = user_field(common, |u| u.phone.clone());
    let email = user_field(common, |u| u.email.clone());
    let submitting = Signal::derive(move || phase.get() == AccountPhase::Submitting);

    view! {
        <div class="account">
            <Show
                when=move || phase.get() != AccountPhase::Loading
                fallback=|| view! { <LoadingSection/> }
            >
                <div class="account__left">
                    <div class="account-heading">
                        <p>"Personal information"</p>
                    </div>
                    <ProfileForm on_submit=submit submitting=submitting/>
                </div>
                <div class="account__right">
                    <div class="update-list">
                        <div class="account-heading">
                            <p>"Contact details"</p>
                        </div>
                        <UpdateItem icon="☎" title="Phone number" content=phone btn_content="Update" open=phone_open>
                            <PhoneUpdate
                                initial_value=phone.get_untracked()
                                on_submit=submit
                                on_done=Callback::new(move |_| phone_open.set(false))
                            />
                        </UpdateItem>
                        <UpdateItem icon="✉" title="Email address" content=email btn_content="Update" open=email_open>
                            <EmailUpdate
                                initial_value=email.get_untracked()
                                on_submit=submit
                                on_done=Callback::new(move |_| email_open.set(false))
                            />
                        </UpdateItem>
                        <UpdateItem
                            icon="⌂"
                            title="Address"
                            content=Signal::derive(|| "Update delivery address".to_owned())
                            btn_content="Update"
                            open=address_open
                        >
                            <AddressUpdate
                                on_submit=submit
                                on_done=Callback::new(move |_| address_open.set(false))
                            />
                        </UpdateItem>
                    </div>
                    <div class="update-list">
                        <div class="account-heading">
                            <p>"Security"</p>
                        </div>
                        <UpdateItem
                            icon="🔒"
                            title="Set password"
                            content=Signal::derive(String::new)
                            btn_content="Update"
                            open=password_open
                        >
                            <PasswordUpdate
                                on_submit=submit_password
                                on_done=Callback::new(move |_| password_open.set(false))
                            />
                        </UpdateItem>
                    </div>
                </div>
            </Show>
        </div>
    }
}

/// Name and sex form. Inputs start empty with the stored values as
/// placeholders, so untouched names are dropped from the payload.
#[component]
fn ProfileForm(on_submit: Callback<ProfileFields>, submitting: Signal<bool>) -> impl IntoView {
    let common = expect_context::<RwSignal<CommonState>>();

    let last_name = RwSignal::new(String::new());
    let first_name = RwSignal::new(String::new());
    let sex = RwSignal::new(common.with_untracked(|c| c.user_info().and_then(|u| u.sex)));

    let last_name_placeholder = user_field(common, |u| u.last_name.clone());
    let first_name_placeholder = user_field(common, |u| u.first_name.clone());

    let last_name_error = move || (!last_name.with(|v| is_valid_full_name(v))).then_some(FULL_NAME_MESSAGE);
    let first_name_error = move || (!first_name.with(|v| is_valid_full_name(v))).then_some(FULL_NAME_MESSAGE);

    let save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if last_name_error().is_some() || first_name_error().is_some() {
            return;
        }
        on_submit.run(ProfileFields {
            last_name: Some(last_name.get_untracked()),
            first_name: Some(first_name.get_untracked()),
            sex: sex.get_untracked(),
            ..ProfileFields::default()
        });
    };

    view! {
        <form class="account__left-form" on:submit=save>
            <div class="account__name-fields">
                <label class="account__field">
                    <span class="account__label">"Last name"</span>
                    <input
                        class="account__input"
                        type="text"
                        placeholder=move || last_name_placeholder.get()
                        prop:value=move || last_name.get()
                        on:input=move |ev| last_name.set(event_target_value(&ev))
                    />
                    {move || last_name_error().map(|msg| view! { <p class="account__error">{msg}</p> })}
                </label>
                <label class="account__field">
                    <span class="account__label">"First name"</span>
                    <input
                        class="account__input"
                        type="text"
                        placeholder=move || first_name_placeholder.get()
                        prop:value=move || first_name.get()
                        on:input=move |ev| first_name.set(event_target_value(&ev))
                    />
                    {move || first_name_error().map(|msg| view! { <p class="account__error">{msg}</p> })}
                </label>
            </div>
            <fieldset class="account__field account__sex">
                <legend class="account__label">"Sex"</legend>
                {Sex::ALL
                    .into_iter()
                    .map(|option| {
                        view! {
                            <label class="account__radio">
                                <input
                                    type="radio"
                                    name="sex"
                                    value=option.code()
                                    prop:checked=move || sex.get() == Some(option)
                                    on:change=move |ev| sex.set(Sex::from_code(&event_target_value(&ev)))
                                />
                                {option.label()}
                            </label>
                        }
                    })
                    .collect::<Vec<_>>()}
            </fieldset>
            <button class="btn btn--primary account__save" type="submit">
                {move || if submitting.get() { "Saving..." } else { "Save changes" }}
            </button>
        </form>
    }
}
