//! Real estate messaging and sales hub.

use leptos::prelude::*;

use crate::components::cards::{FeatureGrid, PageHero, PageTitle, PlaceholderButton};
use crate::content::Feature;
use crate::routes::SitePage;

const OFFERS: [Feature; 4] = [
    Feature::new(
        "Teams & WhatsApp Messaging",
        "Stay connected with clients via Microsoft Teams and WhatsApp integration for seamless communication.",
    )
    .with_action("Explore Messaging"),
    Feature::new(
        "Dynamic Inventory Showcase",
        "Expert custom agent showcases property listings seamlessly with dynamic and interactive presentations.",
    )
    .with_action("View Inventory Portal"),
    Feature::new(
        "AI Property Sales & Leads",
        "AI-driven property sales and lead qualification to efficiently manage and convert prospects.",
    )
    .with_action("Boost Sales"),
    Feature::new(
        "Voice-Enabled Agentic AI",
        "Specialized voice-enabled Agentic AI provides instant support and property information.",
    )
    .coming_soon(),
];

#[component]
pub fn RealEstateHubPage() -> impl IntoView {
    view! {
        <PageTitle page=SitePage::RealEstateHub/>
        <PageHero
            title="Connect & Engage"
            subtitle="with Ease"
            lede="The Microsoft Teams and WhatsApp app for messaging, inventory presentation, property sales, and customer service."
        >
            <PlaceholderButton
                label="Get Started"
                notice_title="Feature Coming Soon!"
                description="This exciting feature is under development. Stay tuned!"
                class="btn btn--primary btn--large"
            />
        </PageHero>

        <section id="what-we-offer" class="section">
            <h2 class="section__heading">"What We Offer"</h2>
            <FeatureGrid features=&OFFERS/>
        </section>

        <section id="instant-support-ai" class="section">
            <h2 class="section__heading">"Instant Support via AI"</h2>
            <p class="section__lede">
                "Our AI-powered assistant provides real-time answers to customer inquiries, ensuring seamless "
                "interaction and enhanced satisfaction."
            </p>
            <div class="pill-row">
                <span class="pill">"Microsoft Teams"</span>
                <span class="pill">"WhatsApp"</span>
            </div>
        </section>
    }
}
