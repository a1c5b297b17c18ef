//! Toast notifications for the contact form
//!
//! Each accepted submission shows a success toast which the controller
//! removes again after a fixed delay.

use leptos::prelude::*;

use crate::core::Notification;
use crate::ui::controller::use_landing_controller;

const SUCCESS_ICON_PATH: &str = "M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z";

/// Fixed-position stack of pending contact notifications
#[component]
pub fn NotificationsContainer() -> impl IntoView {
    let controller = use_landing_controller();

    view! {
        <div class="notifications" role="status" aria-live="polite">
            <For
                each=move || controller.notifications()
                key=|notification| notification.id
                children=move |notification: Notification| {
                    view! { <NotificationToast notification=notification /> }
                }
            />
        </div>
    }
}

/// Single success toast
#[component]
fn NotificationToast(notification: Notification) -> impl IntoView {
    let controller = use_landing_controller();
    let id = notification.id;

    view! {
        <div class="notification notification-success">
            <svg class="notification-icon" fill="none" stroke="currentColor" viewBox="0 0 24 24" aria-hidden="true">
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=SUCCESS_ICON_PATH />
            </svg>
            <p class="notification-text">{notification.text}</p>
            <button
                class="notification-close"
                aria-label="Dismiss notification"
                on:click=move |_| {
                    controller.expire_notification(id);
                }
            >
                "×"
            </button>
        </div>
    }
}
