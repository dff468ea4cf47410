use leptos::prelude::*;

use crate::components::cards::{PageHero, PageTitle, PlaceholderButton};
use crate::content::ResourceItem;
use crate::routes::SitePage;

const PDF_GUIDES: [ResourceItem; 3] = [
    ResourceItem {
        title: "AVD Strategy Guide",
        download_name: "AVD Strategy Guide",
        description: "Comprehensive guide to planning and deploying Azure Virtual Desktop.",
        action_label: "Download PDF",
    },
    ResourceItem {
        title: "Copilot Implementation Best Practices",
        download_name: "Copilot Best Practices",
        description: "Learn how to effectively integrate Microsoft Copilot into your workflows.",
        action_label: "Download PDF",
    },
    ResourceItem {
        title: "Cloud Migration Checklist",
        download_name: "Cloud Migration Checklist",
        description: "A step-by-step checklist for a smooth transition to the cloud.",
        action_label: "Download PDF",
    },
];

#[component]
fn ResourceCard(item: ResourceItem) -> impl IntoView {
    view! {
        <article class="feature-card">
            <h3 class="feature-card__title">{item.title}</h3>
            <p class="feature-card__body">{item.description}</p>
            <PlaceholderButton
                label=item.action_label
                notice_title="Download Initiated (Simulated)"
                description=item.download_message()
                class="btn btn--primary btn--block"
            />
        </article>
    }
}

#[component]
pub fn ResourcesPage() -> impl IntoView {
    view! {
        <PageTitle page=SitePage::Resources/>
        <PageHero
            title="Our Resources"
            lede="Explore our collection of guides, whitepapers, and articles to help you make the most of our technologies and services."
        />

        <section class="section">
            <h2 class="section__heading">"PDF Documentation"</h2>
            <div class="card-grid">
                {PDF_GUIDES.iter().map(|item| view! { <ResourceCard item=*item/> }).collect_view()}
            </div>
        </section>

        <section class="section">
            <h2 class="section__heading">"Knowledge Articles"</h2>
            <article class="feature-card feature-card--wide">
                <h3 class="feature-card__title">"Explore Our Insights"</h3>
                <p class="feature-card__body">
                    "Dive into our curated collection of articles, tutorials, and best practices. Find answers, learn new skills, and stay updated with the latest in tech."
                </p>
                <PlaceholderButton
                    label="Browse Knowledge Base"
                    notice_title="Knowledge Base Access"
                    description="🚧 You would be redirected to our knowledge base. This feature isn't fully implemented yet! 🚀"
                    class="btn btn--accent"
                />
            </article>
        </section>
    }
}
