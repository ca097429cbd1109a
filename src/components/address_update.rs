//! Delivery-address update form embedded in the account detail list.

use leptos::prelude::*;

use crate::util::payload::ProfileFields;

#[component]
pub fn AddressUpdate(
    #[prop(optional)] initial_value: String,
    on_submit: Callback<ProfileFields>,
    on_done: Callback<()>,
) -> impl IntoView {
    let address = RwSignal::new(initial_value);
    let error = RwSignal::new(None::<&'static str>);

    let save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let value = address.get_untracked();
        if value.trim().is_empty() {
            error.set(Some("Enter a delivery address."));
            return;
        }
        error.set(None);
        on_submit.run(ProfileFields::address(value));
        on_done.run(());
    };

    view! {
        <form class="update-form" on:submit=save>
            <label class="update-form__label">
                "Delivery address"
                <textarea
                    class="update-form__input update-form__input--multiline"
                    rows="3"
                    prop:value=move || address.get()
                    on:input=move |ev| address.set(event_target_value(&ev))
                ></textarea>
            </label>
            {move || error.get().map(|msg| view! { <p class="update-form__error">{msg}</p> })}
            <button class="btn btn--primary" type="submit">"Save"</button>
        </form>
    }
}
