use leptos::prelude::*;
use leptos_meta::Title;

use crate::routes::{SitePage, TITLE_SUFFIX};

/// Fallback for paths outside the site map.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text=format!("Page Not Found - {TITLE_SUFFIX}")/>
        <section class="not-found">
            <h1 class="page-hero__title">"404"</h1>
            <p class="page-hero__lede">"The page you're looking for doesn't exist or has moved."</p>
            <a class="btn btn--primary" href=SitePage::Home.path()>"Back to Home"</a>
        </section>
    }
}
