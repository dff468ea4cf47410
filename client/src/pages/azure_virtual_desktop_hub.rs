//! Azure Virtual Desktop hub.

#[cfg(test)]
#[path = "azure_virtual_desktop_hub_test.rs"]
mod azure_virtual_desktop_hub_test;

use leptos::prelude::*;

use crate::components::cards::{CallToAction, CheckList, FeatureGrid, PageHero, PageTitle, PlaceholderButton};
use crate::content::{Feature, ResourceItem};
use crate::routes::SitePage;

const BENEFITS: [Feature; 6] = [
    Feature::new(
        "Security",
        "Built on Microsoft's Zero Trust architecture with identity, access, and data protection baked in.",
    ),
    Feature::new("Scalability", "Instantly scale up or down based on project needs or seasonal demand."),
    Feature::new(
        "Cost Efficiency",
        "Pay-as-you-go pricing with multi-session Windows 11 support to reduce infrastructure costs.",
    ),
    Feature::new(
        "Flexibility",
        "Access desktops and apps from any device: Windows, macOS, iOS, Android, or browser.",
    ),
    Feature::new("Seamless Integration", "Native support for Microsoft 365, Teams, OneDrive, and SharePoint."),
    Feature::new(
        "Smart Management",
        "Centralized control via Azure Portal and automation with Azure Monitor & Intune.",
    ),
];

const USE_CASES: [&str; 5] = [
    "Hybrid & remote workforce enablement",
    "Secure contractor or vendor access",
    "BYOD (Bring Your Own Device) environments",
    "Education, healthcare, and financial services compliance",
    "Disaster recovery and business continuity",
];

const RESOURCES: [ResourceItem; 4] = [
    ResourceItem {
        title: "Azure Virtual Desktop Strategy Guide",
        download_name: "AVD Strategy Guide",
        description: "Plan your AVD adoption effectively.",
        action_label: "Open",
    },
    ResourceItem {
        title: "AVD vs. Traditional VDI Comparison",
        download_name: "AVD vs. VDI Comparison",
        description: "Understand the key differences.",
        action_label: "Open",
    },
    ResourceItem {
        title: "Microsoft Cloud Adoption Framework for AVD",
        download_name: "Cloud Adoption Framework for AVD",
        description: "Best practices for implementation.",
        action_label: "Open",
    },
    ResourceItem {
        title: "AVD Total Economic Impact Study (Forrester)",
        download_name: "AVD Economic Impact Study",
        description: "Explore the financial benefits.",
        action_label: "Open",
    },
];

#[component]
pub fn AzureVirtualDesktopHubPage() -> impl IntoView {
    view! {
        <PageTitle page=SitePage::AzureVirtualDesktopHub/>
        <PageHero
            title="Azure Virtual Desktop"
            subtitle="Empower Your Hybrid Workforce"
            lede="Microsoft's cloud-native desktop and app virtualization platform. Deliver secure, high-performance Windows experiences to anyone, on any device, anywhere."
        >
            <p class="page-hero__detail">
                "Whether modernizing legacy VDI, enabling hybrid work, or onboarding vendors, AVD provides agility and control."
            </p>
            <a class="btn btn--primary btn--large" href="#why-avd">"Discover AVD Benefits"</a>
        </PageHero>

        <section id="why-avd" class="section">
            <h2 class="section__heading">"Why Choose Azure Virtual Desktop?"</h2>
            <FeatureGrid features=&BENEFITS/>
        </section>

        <section class="section">
            <h3 class="section__heading">"Versatile Use Cases"</h3>
            <CheckList items=&USE_CASES/>
        </section>

        <section class="section">
            <h2 class="section__heading">"Helpful Resources"</h2>
            <div class="card-grid card-grid--two">
                {RESOURCES
                    .iter()
                    .map(|item| {
                        view! {
                            <article class="resource-link">
                                <h4 class="resource-link__title">{item.title}</h4>
                                <p class="resource-link__body">{item.description}</p>
                                <PlaceholderButton
                                    label=item.action_label
                                    notice_title="Resource Link Placeholder"
                                    description="This resource link will be activated soon. Stay tuned!"
                                    class="btn btn--link"
                                />
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>

        <CallToAction
            heading="Ready to Modernize Your Desktop Infrastructure?"
            body="Let's build your AVD deployment strategy together. Contact us to schedule a discovery session or nominate your customer for Microsoft-backed incentives."
            label="Schedule Discovery Session"
        />
    }
}
