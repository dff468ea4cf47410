//! Presentational building blocks shared by the content pages.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_meta::Title;

use crate::content::{Feature, FeatureAction, PolicySection};
use crate::routes::SitePage;
use crate::state::toast::Notice;
use crate::util::notify::use_notifier;

/// Sets the document title for `page`.
#[component]
pub fn PageTitle(page: SitePage) -> impl IntoView {
    view! { <Title text=page.title()/> }
}

/// Page-top heading block.
#[component]
pub fn PageHero(
    title: &'static str,
    #[prop(optional)] subtitle: &'static str,
    lede: &'static str,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <header class="page-hero">
            <h1 class="page-hero__title">
                <span class="gradient-text">{title}</span>
                {(!subtitle.is_empty()).then(|| view! { <span class="page-hero__subtitle">{subtitle}</span> })}
            </h1>
            <p class="page-hero__lede">{lede}</p>
            {children.map(|c| c())}
        </header>
    }
}

/// Button whose only effect is a "not yet implemented" toast titled
/// `notice_title`.
#[component]
pub fn PlaceholderButton(
    label: &'static str,
    notice_title: &'static str,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    let notifier = use_notifier();
    let class = if class.is_empty() { "btn btn--outline" } else { class };
    let on_click = move |_| {
        let notice = match &description {
            Some(text) => Notice::info(notice_title, text.clone()),
            None => Notice::not_implemented(notice_title),
        };
        notifier.notify(notice);
    };

    view! {
        <button class=class type="button" on:click=on_click>
            {label}
        </button>
    }
}

#[component]
pub fn FeatureCard(feature: Feature, #[prop(optional)] notice_title: &'static str) -> impl IntoView {
    let notice_title = if notice_title.is_empty() { "Feature In Progress" } else { notice_title };
    let footer = match feature.action {
        FeatureAction::None => None,
        FeatureAction::Placeholder(label) => {
            Some(view! { <PlaceholderButton label=label notice_title=notice_title/> }.into_any())
        }
        FeatureAction::ComingSoon => {
            Some(view! { <span class="badge badge--soon">"Feature Coming Soon"</span> }.into_any())
        }
    };

    view! {
        <article class="feature-card">
            <h3 class="feature-card__title">{feature.title}</h3>
            <p class="feature-card__body">{feature.description}</p>
            {footer}
        </article>
    }
}

#[component]
pub fn FeatureGrid(
    features: &'static [Feature],
    #[prop(optional)] notice_title: &'static str,
) -> impl IntoView {
    view! {
        <div class="card-grid">
            {features
                .iter()
                .map(|feature| view! { <FeatureCard feature=*feature notice_title=notice_title/> })
                .collect_view()}
        </div>
    }
}

/// Bulleted list of short benefit lines.
#[component]
pub fn CheckList(items: &'static [&'static str]) -> impl IntoView {
    view! {
        <ul class="check-list">
            {items.iter().map(|item| view! { <li class="check-list__item">{*item}</li> }).collect_view()}
        </ul>
    }
}

/// Legal page body: one card per section plus a contact block.
#[component]
pub fn PolicyArticle(sections: &'static [PolicySection], children: Children) -> impl IntoView {
    view! {
        <div class="policy">
            {sections
                .iter()
                .map(|section| {
                    view! {
                        <section class="policy__section">
                            <h2 class="policy__heading">{section.title}</h2>
                            <p class="policy__body">{section.body}</p>
                        </section>
                    }
                })
                .collect_view()}
            <section class="policy__section">
                <h2 class="policy__heading">"Contact Us"</h2>
                {children()}
            </section>
        </div>
    }
}

/// Closing call-to-action band linking elsewhere on the site.
#[component]
pub fn CallToAction(
    heading: &'static str,
    body: &'static str,
    label: &'static str,
    #[prop(default = SitePage::Contact.path())] href: &'static str,
) -> impl IntoView {
    view! {
        <section class="cta">
            <h2 class="cta__heading">{heading}</h2>
            <p class="cta__body">{body}</p>
            <a class="btn btn--primary" href=href>{label}</a>
        </section>
    }
}
