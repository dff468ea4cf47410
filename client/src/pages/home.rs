//! Landing page: hero, services grid, message opt-in.

use leptos::prelude::*;

use crate::components::cards::{FeatureGrid, PageTitle};
use crate::components::opt_in_form::OptInForm;
use crate::content::Feature;
use crate::routes::SitePage;

const SERVICES: [Feature; 7] = [
    Feature::new(
        "Citrix Virtual Apps & Desktops",
        "Enterprise-grade virtualization solutions for modern workspaces",
    ),
    Feature::new("Cloud Solutions", "Azure, AWS, and Google Cloud implementation and management"),
    Feature::new("AI Automation", "Smart automation solutions for business workflows"),
    Feature::new("Secure Networking & Citrix Netscaler", "Advanced security and networking infrastructure"),
    Feature::new("VMware vSphere & Windows Server", "Professional virtualization and server management"),
    Feature::new("Intelligent Process Automation", "IPA solutions for enhanced business efficiency"),
    Feature::new("Custom Software Solutions", "Tailored software development for SMBs"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <PageTitle page=SitePage::Home/>
        <header id="home" class="page-hero page-hero--home">
            <h1 class="page-hero__title gradient-text">"Simplify & Scale Your Business"</h1>
            <p class="page-hero__lede">
                "Leverage advanced cloud computing, virtualization, and AI-driven automation to propel your success."
            </p>
            <a class="btn btn--primary btn--large" href="#opt-in">"Get Started"</a>
        </header>

        <section id="services" class="section">
            <h2 class="section__heading gradient-text">"Our Services"</h2>
            <p class="section__lede">"Comprehensive IT solutions for your business needs"</p>
            <FeatureGrid features=&SERVICES/>
        </section>

        <OptInForm/>
    }
}
