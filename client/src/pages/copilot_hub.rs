//! Microsoft Copilot and custom agents hub.

use leptos::prelude::*;

use crate::components::cards::{CallToAction, CheckList, FeatureGrid, PageHero, PageTitle};
use crate::content::Feature;
use crate::routes::SitePage;

const INCLUDED: [Feature; 5] = [
    Feature::new(
        "Microsoft Copilot for M365",
        "Seamlessly integrated in Word, Excel, PowerPoint, Outlook, and Teams. Copilot helps draft, summarize, analyze, and automate your daily workflows.",
    ),
    Feature::new(
        "Custom Copilot Agents",
        "Domain-specific agents built using Microsoft Copilot Studio, trained on your internal data, processes, and business goals.",
    ),
    Feature::new(
        "Multichannel Deployment",
        "Agents work inside Teams, web apps, portals, and even WhatsApp via approved connectors.",
    ),
    Feature::new(
        "Adaptive Cards & Actions",
        "Visual responses, embedded workflows, and actionable messages for smarter user experiences.",
    ),
    Feature::new(
        "Private Access & Compliance",
        "Secure, enterprise-ready deployment using Microsoft Entra ID, with optional private LLMs and local connectors.",
    ),
];

const USE_CASES: [Feature; 3] = [
    Feature::new(
        "Chat-Land Real Estate",
        "Smart companion surfacing listings, qualifying leads, and chatting on Teams or WhatsApp.",
    )
    .with_action("Explore More"),
    Feature::new(
        "Permit Assistant",
        "AI agent for navigating permit approvals, contractor docs, and city workflows.",
    )
    .with_action("Explore More"),
    Feature::new(
        "Internal Productivity",
        "Schedule meetings, answer HR questions, analyze data, or summarize reports efficiently.",
    )
    .with_action("Explore More"),
];

const DEPLOYMENT_OPTIONS: [Feature; 3] = [
    Feature::new("Fully Cloud-Based", "Microsoft-hosted via Copilot Studio for ease of use and scalability."),
    Feature::new(
        "Hybrid or Private Mode",
        "Windows or Docker container with agent cards + plugin APIs for enhanced control.",
    ),
    Feature::new(
        "Scalable Deployment",
        "Across regions and departments with human-in-the-loop configuration options.",
    ),
];

const BENEFITS: [&str; 5] = [
    "Native Microsoft 365 productivity",
    "Fast no-code/low-code agent creation",
    "Natural language interface for apps & APIs",
    "Backed by Microsoft's security & compliance foundation",
    "Fully extensible for enterprise needs",
];

#[component]
pub fn CopilotHubPage() -> impl IntoView {
    view! {
        <PageTitle page=SitePage::CopilotHub/>
        <PageHero
            title="Copilot Intelligence Suite"
            lede="AI that works with you, not just for you. Empower your workforce with Microsoft Copilot and custom-built Copilot Agents, designed to streamline tasks, enhance decision-making, and elevate the way your team works across Microsoft 365 and beyond."
        >
            <a class="btn btn--primary btn--large" href="#copilot-features">"Explore Features"</a>
        </PageHero>

        <section id="copilot-features" class="section">
            <h2 class="section__heading">"What's Included"</h2>
            <FeatureGrid features=&INCLUDED/>
        </section>

        <section class="section">
            <h2 class="section__heading">"Real-World Use Cases"</h2>
            <FeatureGrid features=&USE_CASES notice_title="Use Case Exploration"/>
        </section>

        <section class="section">
            <h2 class="section__heading">"Flexible Deployment Options"</h2>
            <FeatureGrid features=&DEPLOYMENT_OPTIONS/>
        </section>

        <section class="section">
            <h3 class="section__heading">"Why Copilot & Agents Together?"</h3>
            <CheckList items=&BENEFITS/>
        </section>

        <CallToAction
            heading="Ready to Unlock Copilot Potential?"
            body="Discover how Microsoft Copilot and custom agents can revolutionize your business. Contact us for a personalized consultation."
            label="Get Copilot Consultation"
        />
    }
}
