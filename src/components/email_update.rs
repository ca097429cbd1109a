//! Email update form embedded in the account detail list.

use leptos::prelude::*;

use crate::util::payload::ProfileFields;
use crate::util::validation::{EMAIL_MESSAGE, is_valid_email};

#[component]
pub fn EmailUpdate(initial_value: String, on_submit: Callback<ProfileFields>, on_done: Callback<()>) -> impl IntoView {
    let email = RwSignal::new(initial_value);
    let error = RwSignal::new(None::<&'static str>);

    let save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let value = email.get_untracked();
        if !is_valid_email(&value) {
            error.set(Some(EMAIL_MESSAGE));
            return;
        }
        error.set(None);
        on_submit.run(ProfileFields::email(value.trim()));
        on_done.run(());
    };

    view! {
        <form class="update-form" on:submit=save>
            <label class="update-form__label">
                "Email address"
                <input
                    class="update-form__input"
                    type="email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </label>
            {move || error.get().map(|msg| view! { <p class="update-form__error">{msg}</p> })}
            <button class="btn btn--primary" type="submit">"Save"</button>
        </form>
    }
}
