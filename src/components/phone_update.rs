//! Phone-number update form embedded in the account detail list.

use leptos::prelude::*;

use crate::util::payload::ProfileFields;
use crate::util::validation::{PHONE_MESSAGE, is_valid_phone};

#[component]
pub fn PhoneUpdate(initial_value: String, on_submit: Callback<ProfileFields>, on_done: Callback<()>) -> impl IntoView {
    let phone = RwSignal::new(initial_value);
    let error = RwSignal::new(None::<&'static str>);

    let save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let value = phone.get_untracked();
        if !is_valid_phone(&value) {
            error.set(Some(PHONE_MESSAGE));
            return;
        }
        error.set(None);
        on_submit.run(ProfileFields::phone(value.trim()));
        on_done.run(());
    };

    view! {
        <form class="update-form" on:submit=save>
            <label class="update-form__label">
                "Phone number"
                <input
                    class="update-form__input"
                    type="tel"
                    placeholder="0901234567"
                    prop:value=move || phone.get()
                    on:input=move |ev| phone.set(event_target_value(&ev))
                />
            </label>
            {move || error.get().map(|msg| view! { <p class="update-form__error">{msg}</p> })}
            <button class="btn btn--primary" type="submit">"Save"</button>
        </form>
    }
}
