//! Contact page: contact details, booking teaser, and a simulated message
//! form.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use leptos::prelude::*;

use crate::components::cards::{PageHero, PageTitle, PlaceholderButton};
use crate::content::{CONTACT_ADDRESS, CONTACT_EMAIL, CONTACT_PHONE, CONTACT_PHONE_HREF};
use crate::routes::SitePage;
use crate::state::toast::Notice;
use crate::util::notify::use_notifier;

/// Contents of the "Send Us a Message" form. Nothing is transmitted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactDraft {
    /// "Send" the draft: clear every field and return the toast to show.
    pub fn send(&mut self) -> Notice {
        *self = Self::default();
        Notice::info(
            "Message Sent (Simulated)",
            "🚧 This feature isn't fully implemented yet. Your message would be sent here! 🚀",
        )
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let draft = RwSignal::new(ContactDraft::default());
    let notifier = use_notifier();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(notice) = draft.try_update(ContactDraft::send) {
            notifier.notify(notice);
        }
    };

    view! {
        <PageTitle page=SitePage::Contact/>
        <PageHero
            title="Get In Touch"
            lede="We're here to help you achieve your business goals. Reach out to us for consultations, support, or to discuss your next innovative project."
        />

        <div class="two-column">
            <section class="section">
                <h2 class="section__heading">"Contact Information"</h2>
                <dl class="contact-info">
                    <dt>"Email Us"</dt>
                    <dd><a href=format!("mailto:{CONTACT_EMAIL}")>{CONTACT_EMAIL}</a></dd>
                    <dt>"Call Us"</dt>
                    <dd><a href=CONTACT_PHONE_HREF>{CONTACT_PHONE}</a></dd>
                    <dt>"Our Office"</dt>
                    <dd>{CONTACT_ADDRESS}</dd>
                </dl>

                <article class="feature-card">
                    <h3 class="feature-card__title">"Book a Consultation"</h3>
                    <p class="feature-card__body">"Schedule a meeting with our experts to discuss your needs."</p>
                    <p class="feature-card__body">"Our interactive calendar for booking meetings is coming soon!"</p>
                    <PlaceholderButton
                        label="Notify Me When Available"
                        notice_title="Calendar Feature"
                        class="btn btn--primary btn--block"
                    />
                </article>
            </section>

            <section class="section">
                <h2 class="section__heading">"Send Us a Message"</h2>
                <form class="contact-form" on:submit=on_submit>
                    <label class="form-label" for="name">"Full Name"</label>
                    <input
                        id="name"
                        class="form-input"
                        type="text"
                        required
                        prop:value=move || draft.with(|d| d.name.clone())
                        on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                    />
                    <label class="form-label" for="contact-email">"Email Address"</label>
                    <input
                        id="contact-email"
                        class="form-input"
                        type="email"
                        required
                        prop:value=move || draft.with(|d| d.email.clone())
                        on:input=move |ev| draft.update(|d| d.email = event_target_value(&ev))
                    />
                    <label class="form-label" for="subject">"Subject"</label>
                    <input
                        id="subject"
                        class="form-input"
                        type="text"
                        required
                        prop:value=move || draft.with(|d| d.subject.clone())
                        on:input=move |ev| draft.update(|d| d.subject = event_target_value(&ev))
                    />
                    <label class="form-label" for="message">"Message"</label>
                    <textarea
                        id="message"
                        class="form-input"
                        rows="5"
                        required
                        prop:value=move || draft.with(|d| d.message.clone())
                        on:input=move |ev| draft.update(|d| d.message = event_target_value(&ev))
                    ></textarea>
                    <button class="btn btn--accent btn--block" type="submit">"Send Message"</button>
                </form>
            </section>
        </div>
    }
}
