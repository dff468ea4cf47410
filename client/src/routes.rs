//! Site map: routable pages and the navigation link tables.
//!
//! SYSTEM CONTEXT
//! ==============
//! `app::App` registers one route per `SitePage`; the nav bar and footer
//! render the link tables below. Keeping both here means a page cannot be
//! linked without also being routed.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Suffix appended to every page's document title.
pub const TITLE_SUFFIX: &str = "Tech Friends IO";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SitePage {
    Home,
    CitrixConsulting,
    CopilotHub,
    AzureVirtualDesktopHub,
    BrandIdentityHub,
    ConstructionHub,
    RealEstateHub,
    Contact,
    Team,
    Resources,
    PrivacyPolicy,
    TermsOfService,
}

impl SitePage {
    pub const ALL: [Self; 12] = [
        Self::Home,
        Self::CitrixConsulting,
        Self::CopilotHub,
        Self::AzureVirtualDesktopHub,
        Self::BrandIdentityHub,
        Self::ConstructionHub,
        Self::RealEstateHub,
        Self::Contact,
        Self::Team,
        Self::Resources,
        Self::PrivacyPolicy,
        Self::TermsOfService,
    ];

    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::CitrixConsulting => "/citrix-consulting",
            Self::CopilotHub => "/copilot-hub",
            Self::AzureVirtualDesktopHub => "/azure-virtual-desktop-hub",
            Self::BrandIdentityHub => "/brand-identity-hub",
            Self::ConstructionHub => "/construction-hub",
            Self::RealEstateHub => "/real-estate-hub",
            Self::Contact => "/contact",
            Self::Team => "/team",
            Self::Resources => "/resources",
            Self::PrivacyPolicy => "/privacy-policy",
            Self::TermsOfService => "/terms-of-service",
        }
    }

    /// Path without the leading slash, as `StaticSegment` wants it.
    #[must_use]
    pub fn segment(self) -> &'static str {
        self.path().trim_start_matches('/')
    }

    /// Full document title.
    #[must_use]
    pub fn title(self) -> String {
        match self {
            Self::Home => format!("{TITLE_SUFFIX} - Simplify & Scale Your Business"),
            other => format!("{} - {TITLE_SUFFIX}", other.heading()),
        }
    }

    fn heading(self) -> &'static str {
        match self {
            Self::Home => TITLE_SUFFIX,
            Self::CitrixConsulting => "Citrix Consulting",
            Self::CopilotHub => "Microsoft Copilot Hub",
            Self::AzureVirtualDesktopHub => "Azure Virtual Desktop Hub",
            Self::BrandIdentityHub => "Brand Identity Hub",
            Self::ConstructionHub => "Construction Industry Hub",
            Self::RealEstateHub => "Real Estate Hub",
            Self::Contact => "Contact Us",
            Self::Team => "Meet Our Team",
            Self::Resources => "Resources",
            Self::PrivacyPolicy => "Privacy Policy",
            Self::TermsOfService => "Terms of Service",
        }
    }

    /// Resolve a request path. Trailing slashes are ignored; query strings
    /// and fragments must already be stripped.
    #[cfg(test)]
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Self::ALL.into_iter().find(|page| page.path() == normalized)
    }
}

/// One entry of a navigation or footer link list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub title: &'static str,
    pub href: &'static str,
    pub description: &'static str,
}

impl NavLink {
    const fn to(page: SitePage, title: &'static str, description: &'static str) -> Self {
        Self { title, href: page.path(), description }
    }

    /// Placeholder link with no destination yet.
    const fn placeholder(title: &'static str, description: &'static str) -> Self {
        Self { title, href: "#", description }
    }

    /// Routed inside the app (as opposed to a placeholder or external URL).
    #[must_use]
    pub fn is_internal(&self) -> bool {
        self.href.starts_with('/') && !self.href.starts_with("//")
    }
}

pub const SERVICE_LINKS: [NavLink; 6] = [
    NavLink::to(SitePage::CitrixConsulting, "Citrix Consulting", "Effortless Citrix deployment and management."),
    NavLink::to(SitePage::CopilotHub, "Copilot Hub", "AI-powered productivity solutions."),
    NavLink::to(SitePage::AzureVirtualDesktopHub, "AVD Hub", "Cloud-native desktop virtualization."),
    NavLink::to(SitePage::BrandIdentityHub, "Brand Identity Hub", "Strategic design & consistency."),
    NavLink::to(SitePage::ConstructionHub, "Construction Hub", "Tech for the construction industry."),
    NavLink::to(SitePage::RealEstateHub, "Real Estate Hub", "Innovations for property sales."),
];

pub const COMPANY_LINKS: [NavLink; 2] = [
    NavLink::to(SitePage::Team, "Meet Our Team", "Get to know the experts at Tech Friends."),
    NavLink::to(SitePage::Contact, "Contact Us", "Reach out for consultations or support."),
];

pub const POLICY_LINKS: [NavLink; 7] = [
    NavLink::to(SitePage::PrivacyPolicy, "Tech Friends Privacy Policy", "Our main privacy policy."),
    NavLink::placeholder("Microsoft Privacy Policy", "For Microsoft services integration."),
    NavLink::placeholder("Marketplace Apps Policy", "Regarding apps from marketplaces."),
    NavLink::placeholder("Meta Privacy Policy", "For Meta platform integrations."),
    NavLink::placeholder("Stripe Privacy Policy", "Concerning payment processing."),
    NavLink::placeholder("Slack Bot Policy", "For our Slack bot interactions."),
    NavLink::to(SitePage::TermsOfService, "Terms of Service", "Read our terms and conditions."),
];

pub const FOOTER_QUICK_LINKS: [NavLink; 6] = [
    NavLink::to(SitePage::Team, "About Us (Team)", ""),
    NavLink::to(SitePage::PrivacyPolicy, "Privacy Policy", ""),
    NavLink::to(SitePage::TermsOfService, "Terms and Conditions", ""),
    NavLink::to(SitePage::Resources, "Resources", ""),
    NavLink::placeholder("Blog", ""),
    NavLink::to(SitePage::Contact, "Contact Us", ""),
];

pub const FOOTER_SERVICE_LINKS: [NavLink; 5] = [
    NavLink::to(SitePage::CopilotHub, "Copilot Hub", ""),
    NavLink::to(SitePage::AzureVirtualDesktopHub, "AVD Hub", ""),
    NavLink::to(SitePage::BrandIdentityHub, "Brand Identity Hub", ""),
    NavLink::to(SitePage::ConstructionHub, "Construction Hub", ""),
    NavLink::to(SitePage::RealEstateHub, "Real Estate Hub", ""),
];
