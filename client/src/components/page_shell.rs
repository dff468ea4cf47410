//! Page shell: session owner, navigation, login panel, toaster.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps every route. On mount it subscribes to auth-state changes and only
//! then asks the auth client for the current session, so no sign-in or
//! sign-out can slip between the lookup and the subscription. The
//! subscription guard lives until the shell is cleaned up.
//!
//! The login panel (`AuthForm`) is mounted only while
//! `ShellState::auth_form_visible()` holds; its close button hides it again.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::auth_form::AuthForm;
use crate::components::footer::Footer;
use crate::components::nav_bar::NavBar;
use crate::components::toaster::Toaster;
use crate::net::remote::{AuthClient, RemoteAuth};
use crate::net::types::Session;
use crate::state::shell::ShellState;
use crate::util::browser::scroll_to_top;
use crate::util::notify::use_notifier;

#[component]
pub fn PageShell(children: Children) -> impl IntoView {
    let shell = expect_context::<RwSignal<ShellState>>();
    let auth = expect_context::<RemoteAuth>();
    let notifier = use_notifier();
    let location = use_location();

    let subscription = auth.on_auth_state_change(move |event| {
        shell.try_update(|s| s.apply_event(event));
    });
    on_cleanup(move || drop(subscription));

    #[cfg(feature = "hydrate")]
    {
        let auth = auth.clone();
        leptos::task::spawn_local(async move {
            let session = auth.get_session().await;
            shell.try_update(|s| s.restore(session));
        });
    }

    Effect::new(move || {
        location.pathname.track();
        shell.update(ShellState::navigated);
        scroll_to_top();
    });

    let on_login = Callback::new(move |()| {
        shell.update(|s| {
            s.request_login();
        });
    });

    let on_logout = Callback::new(move |()| {
        if !shell.try_update(ShellState::begin_logout).unwrap_or(false) {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let auth = auth.clone();
            leptos::task::spawn_local(async move {
                let result = auth.sign_out().await;
                if let Err(e) = &result {
                    log::warn!("sign-out failed: {e}");
                }
                shell.try_update(|s| {
                    if result.is_ok() {
                        s.logout_succeeded();
                    } else {
                        s.logout_failed();
                    }
                });
                notifier.notify(crate::state::shell::logout_notice(&result));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&auth, notifier);
            shell.update(ShellState::logout_failed);
        }
    });

    let on_auth_success = Callback::new(move |session: Session| {
        shell.update(|s| s.signed_in(session));
    });

    view! {
        <div class="site">
            <Toaster/>
            <NavBar on_login=on_login on_logout=on_logout/>
            <main class="site__main">
                <Show when=move || shell.with(ShellState::auth_form_visible)>
                    <section class="auth-panel">
                        <button
                            class="auth-panel__close"
                            type="button"
                            aria-label="Close login"
                            on:click=move |_| shell.update(ShellState::dismiss_login)
                        >
                            "✕"
                        </button>
                        <AuthForm on_success=on_auth_success/>
                    </section>
                </Show>
                {children()}
            </main>
            <Footer/>
        </div>
    }
}
