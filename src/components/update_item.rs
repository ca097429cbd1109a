//! Row in the account detail list that expands into its own update form.

use leptos::prelude::*;

/// Detail row with a toggle button. `open` is owned by the caller so the
/// embedded form can close the row after a save.
#[component]
pub fn UpdateItem(
    icon: &'static str,
    title: &'static str,
    content: Signal<String>,
    btn_content: &'static str,
    open: RwSignal<bool>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <div class="update-item">
            <div class="update-item__row">
                <span class="update-item__icon" aria-hidden="true">{icon}</span>
                <div class="update-item__text">
                    <span class="update-item__title">{title}</span>
                    <span class="update-item__content">{move || content.get()}</span>
                </div>
                <button class="btn update-item__toggle" on:click=move |_| open.update(|o| *o = !*o)>
                    {move || if open.get() { "Close" } else { btn_content }}
                </button>
            </div>
            {move || open.get().then(|| view! { <div class="update-item__form">{children()}</div> })}
        </div>
    }
}
