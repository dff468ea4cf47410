//! Brand identity design hub.

use leptos::prelude::*;

use crate::components::cards::{CallToAction, FeatureGrid, PageHero, PageTitle};
use crate::content::Feature;
use crate::routes::SitePage;

const SOLUTIONS: [Feature; 4] = [
    Feature::new(
        "Social Media Assets",
        "Eye-catching visuals optimized for all your social platforms, ensuring brand consistency and engagement.",
    )
    .with_action("Learn More"),
    Feature::new(
        "Marketing Materials",
        "Professionally designed marketing collateral, from digital ads to print brochures, that resonate with your audience.",
    )
    .with_action("Learn More"),
    Feature::new(
        "Stunning Presentations",
        "Compelling slide decks and presentation templates that captivate and clearly convey your message.",
    )
    .with_action("Learn More"),
    Feature::new(
        "Platform-Ready Visuals",
        "Generate perfectly sized and formatted visuals for any platform in seconds, adhering strictly to your brand guidelines.",
    )
    .with_action("Learn More"),
];

const BENEFITS: [&str; 5] = [
    "Enhanced Brand Recognition",
    "Consistent Brand Messaging",
    "Cohesive Visual Identity",
    "Stronger Audience Connection",
    "Increased Engagement",
];

#[component]
pub fn BrandIdentityHubPage() -> impl IntoView {
    view! {
        <PageTitle page=SitePage::BrandIdentityHub/>
        <PageHero
            title="Elevate Your Brand Identity"
            subtitle="with Strategic Design & Consistency"
            lede="Cohesive, bold, Brand Tech empowers your brand recognition assets for social media material, marketing, presentations, and platform-ready visuals in seconds, all following your brand guidelines."
        >
            <a class="btn btn--primary btn--large" href="#brand-services">"Discover Our Approach"</a>
        </PageHero>

        <section id="brand-services" class="section">
            <h2 class="section__heading">"Our Brand-Building Solutions"</h2>
            <FeatureGrid features=&SOLUTIONS/>
        </section>

        <section class="section">
            <h2 class="section__heading">"Key Benefits of Strong Branding"</h2>
            <div class="pill-row">
                {BENEFITS.iter().map(|text| view! { <span class="pill">{*text}</span> }).collect_view()}
            </div>
        </section>

        <CallToAction
            heading="Ready to Transform Your Brand?"
            body="Let's discuss how Tech Friends IO can create a powerful and consistent brand identity that sets you apart."
            label="Get a Branding Consultation"
        />
    }
}
