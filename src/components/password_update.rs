//! Password change form in the account security section.

use leptos::prelude::*;

use crate::net::types::PasswordChange;
use crate::util::validation::validate_password_change;

#[component]
pub fn PasswordUpdate(on_submit: Callback<PasswordChange>, on_done: Callback<()>) -> impl IntoView {
    let old_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<&'static str>);

    let save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let result = validate_password_change(
            &old_password.get_untracked(),
            &new_password.get_untracked(),
            &confirm_password.get_untracked(),
        );
        match result {
            Ok(change) => {
                error.set(None);
                on_submit.run(change);
                on_done.run(());
            }
            Err(msg) => error.set(Some(msg)),
        }
    };

    let field = move |label: &'static str, value: RwSignal<String>| {
        view! {
            <label class="update-form__label">
                {label}
                <input
                    class="update-form__input"
                    type="password"
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </label>
        }
    };

    view! {
        <form class="update-form" on:submit=save>
            {field("Current password", old_password)}
            {field("New password", new_password)}
            {field("Confirm new password", confirm_password)}
            {move || error.get().map(|msg| view! { <p class="update-form__error">{msg}</p> })}
            <button class="btn btn--primary" type="submit">"Save"</button>
        </form>
    }
}
