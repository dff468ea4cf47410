//! Construction industry hub (pre-launch).

use leptos::prelude::*;

use crate::components::cards::{FeatureGrid, PageHero, PageTitle, PlaceholderButton};
use crate::content::{CaseStudy, Feature};
use crate::routes::SitePage;

const FEATURES: [Feature; 3] = [
    Feature::new(
        "Self-Filling Permit Forms",
        "Streamlines the permit application process for Florida construction professionals. It intelligently \
         fills out permit forms by gathering project details and auto-completing required fields, saving time \
         and reducing errors. The app aggregates all Florida building permit issuers, statewide and local, into \
         one hub, enabling quick access to the correct forms and submission guidelines. With seamless \
         collaboration inside Teams, contractors and admins can review, edit, and submit permits directly \
         within their workflow. Copilot Agent helps simplify compliance and accelerate project starts.",
    ),
    Feature::new(
        "Contract Bidding Dashboard",
        "Access and analyze contract bidding opportunities. Streamline your proposal process and win more \
         projects. (Detailed functionality coming soon)",
    )
    .coming_soon(),
    Feature::new(
        "Construction Insights",
        "Gain valuable insights from industry data and case studies to make informed decisions and optimize \
         your projects. (Content being curated)",
    )
    .coming_soon(),
];

const CASE_STUDIES: [CaseStudy; 4] = [
    CaseStudy {
        title: "Case Study: Streamlining Permitting for Urban Development",
        summary: "How AI-assisted form filling reduced permit processing time by 40% for a major city developer.",
    },
    CaseStudy {
        title: "Insight: The Future of Bidding in Construction",
        summary: "Exploring how data analytics and AI are changing the landscape of contract bidding and project acquisition.",
    },
    CaseStudy {
        title: "Case Study: Enhancing Collaboration with Cloud-Based Tools",
        summary: "Discover how a multi-state construction firm leveraged cloud platforms for seamless project management and stakeholder communication.",
    },
    CaseStudy {
        title: "Insight: Sustainable Practices in Modern Construction",
        summary: "An overview of emerging technologies and methodologies promoting sustainability and eco-friendly building.",
    },
];

#[component]
pub fn ConstructionHubPage() -> impl IntoView {
    view! {
        <PageTitle page=SitePage::ConstructionHub/>
        <PageHero
            title="Tech Friends Construction Industry Hub"
            subtitle="Coming Soon!"
            lede="Revolutionizing the construction industry with AI-powered solutions. Get ready for smarter workflows, deeper insights, and unparalleled efficiency."
        >
            <p class="page-hero__detail">
                "Launching soon on the " <strong>"Microsoft Commercial Marketplace"</strong> "."
            </p>
        </PageHero>

        <section class="section">
            <h2 class="section__heading">"Key Features"</h2>
            <FeatureGrid features=&FEATURES/>
        </section>

        <section class="section">
            <h2 class="section__heading">"Insights & Case Studies"</h2>
            <div class="card-grid card-grid--two">
                {CASE_STUDIES
                    .iter()
                    .map(|study| {
                        view! {
                            <article class="case-study">
                                <h3 class="case-study__title">{study.title}</h3>
                                <p class="case-study__summary">{study.summary}</p>
                                <PlaceholderButton label="Read More →" notice_title="Read More" class="btn btn--link"/>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
