//! Typed descriptors for the static page copy.
//!
//! Pages declare their copy as `const` tables of these types and hand them to
//! the shared card components.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

/// Company contact details shown on the contact page.
pub const CONTACT_EMAIL: &str = "contact@techfriends.io";
pub const CONTACT_PHONE: &str = "+1 (555) 123-4567";
pub const CONTACT_PHONE_HREF: &str = "tel:+15551234567";
pub const CONTACT_ADDRESS: &str = "123 Tech Avenue, Innovation City, CA 90210";

/// Details shown in the site footer.
pub const FOOTER_LOCATION: &str = "Coconut Creek, FL 33066";
pub const FOOTER_HOURS: &str = "Monday – Friday, 8:00 a.m. - 5:00 p.m.";
pub const FOOTER_EMAIL: &str = "info@techfriends.io";
pub const FOOTER_PHONE: &str = "+1 (305) 334-8884";
pub const FOOTER_PHONE_HREF: &str = "tel:+13053348884";

pub const PRIVACY_EMAIL: &str = "privacy@techfriends.io";
pub const LEGAL_EMAIL: &str = "legal@techfriends.io";

/// Revision line printed under the legal page headings.
pub const POLICY_LAST_UPDATED: &str = "Last updated: June 1, 2025";

/// What a feature card's button does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeatureAction {
    /// No button.
    None,
    /// Button that raises a "not yet implemented" toast.
    Placeholder(&'static str),
    /// "Feature Coming Soon" badge instead of a button.
    ComingSoon,
}

/// A titled card with a short description.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub action: FeatureAction,
}

impl Feature {
    #[must_use]
    pub const fn new(title: &'static str, description: &'static str) -> Self {
        Self { title, description, action: FeatureAction::None }
    }

    #[must_use]
    pub const fn with_action(self, label: &'static str) -> Self {
        Self { action: FeatureAction::Placeholder(label), ..self }
    }

    #[must_use]
    pub const fn coming_soon(self) -> Self {
        Self { action: FeatureAction::ComingSoon, ..self }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
    pub highlights: &'static [&'static str],
    pub linkedin: &'static str,
}

impl TeamMember {
    /// Alt text for the member's portrait.
    #[must_use]
    pub fn portrait_alt(&self) -> String {
        format!("{}, {}", self.name, self.role)
    }
}

/// One headed block of a legal page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PolicySection {
    pub title: &'static str,
    pub body: &'static str,
}

/// A downloadable or linkable resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResourceItem {
    pub title: &'static str,
    /// Name used in the download toast; may be shorter than `title`.
    pub download_name: &'static str,
    pub description: &'static str,
    pub action_label: &'static str,
}

impl ResourceItem {
    /// Description for the simulated-download toast.
    #[must_use]
    pub fn download_message(&self) -> String {
        format!("🚧 {} download would start here. This feature isn't fully implemented yet! 🚀", self.download_name)
    }
}

/// Case study or insight teaser.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CaseStudy {
    pub title: &'static str,
    pub summary: &'static str,
}
