//! "Stay Updated" message opt-in form on the home page.

use leptos::prelude::*;

use crate::net::remote::RemoteRecords;
use crate::state::opt_in::{self, OptInFormState};
use crate::state::shell::ShellState;
use crate::util::notify::use_notifier;

#[component]
pub fn OptInForm() -> impl IntoView {
    let shell = expect_context::<RwSignal<ShellState>>();
    let records = expect_context::<RemoteRecords>();
    let notifier = use_notifier();
    let form = RwSignal::new(OptInFormState::default());

    Effect::new(move || {
        let session = shell.with(|s| s.session().cloned());
        form.update(|f| f.sync_session(session.as_ref()));
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let session = shell.with_untracked(|s| s.session().cloned());
        let Some(claimed) = form.try_update(|f| f.begin_submit(session.as_ref())) else {
            return;
        };
        let record = match claimed {
            Ok(record) => record,
            Err(err) => {
                notifier.notify(opt_in::validation_notice(err));
                return;
            }
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = opt_in::submit(&records, &record).await;
            if let Err(e) = &result {
                log::warn!("opt-in insert failed: {e}");
            }
            form.try_update(|f| {
                if result.is_ok() {
                    f.finish_success();
                } else {
                    f.finish_failure();
                }
            });
            notifier.notify(opt_in::outcome_notice(&result));
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (records, record);
            form.update(OptInFormState::finish_failure);
        }
    };

    let loading = move || form.with(|f| f.loading);

    view! {
        <section id="opt-in" class="opt-in-section">
            <div class="opt-in-card">
                <h2 class="opt-in-card__heading">"Stay Updated"</h2>
                <p class="opt-in-card__lede">"Opt-in to receive important updates and news directly."</p>
                <form class="opt-in-form" on:submit=on_submit>
                    <Show when=move || form.with(OptInFormState::email_editable)>
                        <label class="form-label" for="optin-email">"Email Address (Optional)"</label>
                        <input
                            id="optin-email"
                            class="form-input"
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        />
                    </Show>
                    <label class="form-label" for="optin-phone">"Phone Number (Optional)"</label>
                    <input
                        id="optin-phone"
                        class="form-input"
                        type="tel"
                        placeholder="+1 (555) 123-4567"
                        prop:value=move || form.with(|f| f.phone.clone())
                        on:input=move |ev| form.update(|f| f.phone = event_target_value(&ev))
                    />
                    <label class="form-check" for="terms-optin">
                        <input
                            id="terms-optin"
                            type="checkbox"
                            prop:checked=move || form.with(|f| f.consent)
                            on:change=move |ev| form.update(|f| f.consent = event_target_checked(&ev))
                        />
                        "I agree to receive messages and updates."
                    </label>
                    <button class="btn btn--accent btn--block" type="submit" disabled=loading>
                        {move || if loading() { "Sending..." } else { "Opt-In Now" }}
                    </button>
                </form>
            </div>
        </section>
    }
}
