//! Top-right toast stack fed by `NotificationsState`.

use leptos::prelude::*;

use crate::state::notifications::{ActiveNotification, NotificationKind, NotificationsState};

#[component]
pub fn NotificationStack() -> impl IntoView {
    let notifications = expect_context::<RwSignal<NotificationsState>>();

    view! {
        <div class="notification-stack notification-stack--top-right" aria-live="assertive">
            <For
                each=move || notifications.get().items
                key=|item| item.id
                children=move |item: ActiveNotification| view! { <NotificationToast item=item/> }
            />
        </div>
    }
}

/// One toast. Schedules its own dismissal when mounted.
#[component]
fn NotificationToast(item: ActiveNotification) -> impl IntoView {
    let notifications = expect_context::<RwSignal<NotificationsState>>();
    let ActiveNotification { id, notification } = item;

    #[cfg(feature = "hydrate")]
    {
        let secs = u64::from(notification.duration_secs);
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_secs(secs)).await;
            notifications.update(|s| s.dismiss(id));
        });
    }

    let class = match notification.kind {
        NotificationKind::Success => "notification notification--success",
        NotificationKind::Error => "notification notification--error",
    };

    view! {
        <div class=class role="alert">
            <div class="notification__body">
                <p class="notification__title">{notification.title}</p>
                <p class="notification__description">{notification.description}</p>
            </div>
            <button
                class="notification__close"
                title="Close"
                on:click=move |_| notifications.update(|s| s.dismiss(id))
            >
                "×"
            </button>
        </div>
    }
}
