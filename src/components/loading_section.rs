use leptos::prelude::*;

/// Placeholder shown while a screen waits for data it does not fetch itself.
#[component]
pub fn LoadingSection() -> impl IntoView {
    view! {
        <div class="loading-section" role="status" aria-live="polite">
            <span class="loading-section__spinner" aria-hidden="true"></span>
            <p>"Loading..."</p>
        </div>
    }
}
