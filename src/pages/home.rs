//! Home page. Only the brand widget is shipped from this crate.

use leptos::prelude::*;

use crate::components::brand_widget::BrandWidget;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="home-page">
            <BrandWidget/>
        </main>
    }
}
