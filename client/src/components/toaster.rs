//! Toast stack rendered in the page shell.
//!
//! Each toast schedules its own auto-dismiss when it mounts; a manual close
//! before the timer fires makes the later dismiss a no-op.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastState};
#[cfg(feature = "hydrate")]
use crate::state::toast::TOAST_DURATION_MS;

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toaster" role="status" aria-live="polite">
            <For
                each=move || toasts.get().items
                key=|toast| toast.id
                children=move |toast| view! { <ToastItem toast=toast/> }
            />
        </div>
    }
}

#[component]
fn ToastItem(toast: Toast) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let id = toast.id;

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(TOAST_DURATION_MS))).await;
        toasts.update(|t| t.dismiss(id));
    });

    let class = format!("toast {}", toast.variant.css_modifier());
    let description = (!toast.description.is_empty())
        .then(|| view! { <p class="toast__description">{toast.description}</p> });

    view! {
        <div class=class>
            <div class="toast__body">
                <p class="toast__title">{toast.title}</p>
                {description}
            </div>
            <button
                class="toast__close"
                aria-label="Close"
                on:click=move |_| toasts.update(|t| t.dismiss(id))
            >
                "×"
            </button>
        </div>
    }
}
