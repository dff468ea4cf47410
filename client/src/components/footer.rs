//! Site footer: brand blurb, quick links, service links, contact details.

use leptos::prelude::*;

use crate::content::{FOOTER_EMAIL, FOOTER_HOURS, FOOTER_LOCATION, FOOTER_PHONE, FOOTER_PHONE_HREF};
use crate::routes::{FOOTER_QUICK_LINKS, FOOTER_SERVICE_LINKS, NavLink, SitePage};

const SOCIAL_LABELS: [&str; 5] = ["Instagram", "LinkedIn", "Facebook", "X", "YouTube"];

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="site-footer__grid">
                <div>
                    <a href=SitePage::Home.path() class="site-footer__brand">
                        <span class="gradient-text">"Tech Friends IO"</span>
                    </a>
                    <p class="site-footer__blurb">
                        "We help businesses simplify and scale with advanced cloud computing, "
                        "virtualization technologies, and AI-driven automation."
                    </p>
                    <div class="site-footer__social">
                        {SOCIAL_LABELS
                            .iter()
                            .map(|label| view! { <a href="#" aria-label=*label>{*label}</a> })
                            .collect_view()}
                    </div>
                </div>
                <LinkColumn heading="Quick Links" links=&FOOTER_QUICK_LINKS/>
                <LinkColumn heading="Our Services" links=&FOOTER_SERVICE_LINKS/>
                <div>
                    <h3 class="site-footer__heading">"Contact Us"</h3>
                    <ul class="site-footer__list">
                        <li>{FOOTER_LOCATION}</li>
                        <li>{FOOTER_HOURS}</li>
                        <li><a href=format!("mailto:{FOOTER_EMAIL}")>{FOOTER_EMAIL}</a></li>
                        <li><a href=FOOTER_PHONE_HREF>{FOOTER_PHONE}</a></li>
                    </ul>
                </div>
            </div>
            <p class="site-footer__legal">"© Tech Friends IO LLC. All rights reserved."</p>
        </footer>
    }
}

#[component]
fn LinkColumn(heading: &'static str, links: &'static [NavLink]) -> impl IntoView {
    view! {
        <div>
            <h3 class="site-footer__heading">{heading}</h3>
            <ul class="site-footer__list">
                {links
                    .iter()
                    .map(|link| view! { <li><a href=link.href>{link.title}</a></li> })
                    .collect_view()}
            </ul>
        </div>
    }
}
