//! Citrix consulting service page.

use leptos::prelude::*;

use crate::components::cards::{CallToAction, FeatureGrid, PageHero, PageTitle};
use crate::content::Feature;
use crate::routes::SitePage;

const FEATURES: [Feature; 6] = [
    Feature::new(
        "Centralized Management",
        "Unify control of your apps and desktops from a single pane of glass, reducing complexity.",
    ),
    Feature::new(
        "Hybrid Environment Deployment",
        "Seamlessly deploy and manage resources across on-premises data centers and public clouds.",
    ),
    Feature::new(
        "Rapid, Cost-Effective Rollouts",
        "Leverage Infrastructure as Code (IaC) for automated, quick, and budget-friendly deployments.",
    ),
    Feature::new(
        "Enhanced Security",
        "Implement robust security postures for your virtualized apps and desktops, protecting sensitive data.",
    ),
    Feature::new(
        "Improved User Experience",
        "Deliver a consistent and high-performance experience to users on any device, anywhere.",
    ),
    Feature::new(
        "Simplified IT Operations",
        "Streamline IT administration tasks with automation and simplified management tools.",
    ),
];

#[component]
pub fn CitrixConsultingPage() -> impl IntoView {
    view! {
        <PageTitle page=SitePage::CitrixConsulting/>
        <PageHero
            title="Effortless Citrix Deployment"
            lede="Centralize app and desktop management. Deploy apps and desktops in hybrid environments, quickly and cost effectively."
        >
            <p class="page-hero__detail">
                "When workforces become more distributed, hybrid work continues to evolve, and applications are "
                "strewn across data centers, laptops, clouds, and SaaS vendors, what do you do? Distributed "
                "management and point solutions for specific use cases are not the answer. Instead, you need to "
                "look for solutions that aggregate disparate digital resources into one experience for end users, "
                "and one point of control for IT admins."
            </p>
            <a class="btn btn--primary btn--large" href="#why-citrix">"Streamline Your Citrix Environment"</a>
        </PageHero>

        <section id="why-citrix" class="section">
            <h2 class="section__heading">"Why Choose Our Citrix Consulting?"</h2>
            <p class="section__lede">
                "Streamline your virtual app and desktop management with our automated infrastructure as code "
                "service. We help you harness the full power of Citrix technologies."
            </p>
            <FeatureGrid features=&FEATURES/>
        </section>

        <CallToAction
            heading="Ready to Optimize Your Citrix Infrastructure?"
            body="Let's discuss how our expert Citrix consulting services can transform your app and desktop delivery, enhance security, and reduce operational costs."
            label="Schedule a Consultation"
        />
    }
}
