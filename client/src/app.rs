//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Link, Meta, MetaTags, Stylesheet, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::page_shell::PageShell;
use crate::net::auth_events::AuthEvents;
use crate::net::remote::{RemoteAuth, RemoteRecords};
use crate::pages::{
    azure_virtual_desktop_hub::AzureVirtualDesktopHubPage, brand_identity_hub::BrandIdentityHubPage,
    citrix_consulting::CitrixConsultingPage, construction_hub::ConstructionHubPage, contact::ContactPage,
    copilot_hub::CopilotHubPage, home::HomePage, not_found::NotFoundPage, privacy_policy::PrivacyPolicyPage,
    real_estate_hub::RealEstateHubPage, resources::ResourcesPage, team::TeamPage,
    terms_of_service::TermsOfServicePage,
};
use crate::routes::SitePage;
use crate::state::{shell::ShellState, toast::ToastState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shell, toast, and remote-client contexts, then routes every
/// `SitePage` inside the shared `PageShell`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(RwSignal::new(ShellState::default()));
    provide_context(RwSignal::new(ToastState::default()));
    provide_context(RemoteAuth::new(AuthEvents::new()));
    provide_context(RemoteRecords);

    view! {
        <Stylesheet id="leptos" href="/pkg/techfriends.css"/>
        <Link rel="icon" type_="image/svg+xml" href="/assets/logo.svg"/>
        <Meta
            name="description"
            content="Tech Friends IO delivers Citrix consulting, Azure Virtual Desktop, Microsoft Copilot, and brand identity services for growing businesses."
        />

        <Router>
            <PageShell>
                <Routes fallback=NotFoundPage>
                    <Route path=StaticSegment(SitePage::Home.segment()) view=HomePage/>
                    <Route path=StaticSegment(SitePage::CitrixConsulting.segment()) view=CitrixConsultingPage/>
                    <Route path=StaticSegment(SitePage::CopilotHub.segment()) view=CopilotHubPage/>
                    <Route
                        path=StaticSegment(SitePage::AzureVirtualDesktopHub.segment())
                        view=AzureVirtualDesktopHubPage
                    />
                    <Route path=StaticSegment(SitePage::BrandIdentityHub.segment()) view=BrandIdentityHubPage/>
                    <Route path=StaticSegment(SitePage::ConstructionHub.segment()) view=ConstructionHubPage/>
                    <Route path=StaticSegment(SitePage::RealEstateHub.segment()) view=RealEstateHubPage/>
                    <Route path=StaticSegment(SitePage::Contact.segment()) view=ContactPage/>
                    <Route path=StaticSegment(SitePage::Team.segment()) view=TeamPage/>
                    <Route path=StaticSegment(SitePage::Resources.segment()) view=ResourcesPage/>
                    <Route path=StaticSegment(SitePage::PrivacyPolicy.segment()) view=PrivacyPolicyPage/>
                    <Route path=StaticSegment(SitePage::TermsOfService.segment()) view=TermsOfServicePage/>
                </Routes>
            </PageShell>
        </Router>
    }
}
