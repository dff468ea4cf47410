//! Login / sign-up panel mounted by the page shell.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered only while `ShellState::auth_form_visible()` holds. A successful
//! submit that yields a session hands it to `on_success`; the shell's state
//! change then unmounts this component.

use leptos::prelude::*;

use crate::net::remote::RemoteAuth;
use crate::net::types::Session;
use crate::state::auth_form::{self, AuthFormState};
use crate::util::notify::use_notifier;

#[component]
pub fn AuthForm(#[prop(into)] on_success: Callback<Session>) -> impl IntoView {
    let form = RwSignal::new(AuthFormState::default());
    let auth = expect_context::<RemoteAuth>();
    let notifier = use_notifier();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(claimed) = form.try_update(AuthFormState::begin_submit) else {
            return;
        };
        let credentials = match claimed {
            Ok(credentials) => credentials,
            Err(err) => {
                notifier.notify(auth_form::validation_notice(err));
                return;
            }
        };
        let mode = form.get_untracked().mode;

        #[cfg(feature = "hydrate")]
        {
            let auth = auth.clone();
            leptos::task::spawn_local(async move {
                let outcome = auth_form::submit(&auth, &credentials, mode).await;
                form.try_update(AuthFormState::finish);
                notifier.notify(outcome.notice(mode));
                if let Some(session) = outcome.session() {
                    on_success.run(session.clone());
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&auth, credentials, mode, on_success);
            form.update(AuthFormState::finish);
        }
    };

    let mode = move || form.with(|f| f.mode);
    let loading = move || form.with(|f| f.loading);

    view! {
        <section id="login" class="login-section">
            <div class="auth-card">
                <h2 class="auth-card__heading">{move || mode().heading()}</h2>
                <form class="auth-form" on:submit=on_submit>
                    <label class="form-label" for="email">"Email Address"</label>
                    <input
                        id="email"
                        class="form-input"
                        type="email"
                        placeholder="you@example.com"
                        required
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                    <label class="form-label" for="password">"Password"</label>
                    <input
                        id="password"
                        class="form-input"
                        type="password"
                        placeholder="••••••••"
                        required
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                    <button class="btn btn--primary btn--block" type="submit" disabled=loading>
                        {move || if loading() { "Please wait..." } else { mode().submit_label() }}
                    </button>
                </form>
                <button
                    class="btn btn--link btn--block"
                    type="button"
                    on:click=move |_| form.update(AuthFormState::toggle_mode)
                >
                    {move || mode().toggle_label()}
                </button>
            </div>
        </section>
    }
}
