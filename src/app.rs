//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::notification_stack::NotificationStack;
use crate::config::ApiConfig;
use crate::net::api::HttpStoreApi;
use crate::pages::{account::AccountPage, home::HomePage};
use crate::state::{common::CommonState, notifications::NotificationsState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared contexts and mounts the home and profile screens.
/// `CommonState` starts empty; the session layer fills it with
/// `CommonState::set_user_info` once the signed-in user is known.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(RwSignal::new(CommonState::default()));
    provide_context(RwSignal::new(NotificationsState::default()));
    provide_context(HttpStoreApi::new(ApiConfig::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/storefront.css"/>
        <Title text="Storefront"/>

        <NotificationStack/>
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("profile") view=AccountPage/>
            </Routes>
        </Router>
    }
}
