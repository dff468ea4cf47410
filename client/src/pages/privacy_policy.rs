use leptos::prelude::*;

use crate::components::cards::{PageHero, PageTitle, PolicyArticle};
use crate::content::{POLICY_LAST_UPDATED, PRIVACY_EMAIL, PolicySection};
use crate::routes::SitePage;

const SECTIONS: [PolicySection; 4] = [
    PolicySection {
        title: "Introduction",
        body: "Welcome to Tech Friends IO's Privacy Policy. We are committed to protecting your personal information and your right to privacy. If you have any questions or concerns about our policy, or our practices with regards to your personal information, please contact us at privacy@techfriends.io.",
    },
    PolicySection {
        title: "Information We Collect",
        body: "We collect personal information that you voluntarily provide to us when you register on the website, express an interest in obtaining information about us or our products and services, when you participate in activities on the website or otherwise when you contact us. The personal information that we collect depends on the context of your interactions with us and the website, the choices you make and the products and features you use.",
    },
    PolicySection {
        title: "How We Use Your Information",
        body: "We use personal information collected via our website for a variety of business purposes described below. We process your personal information for these purposes in reliance on our legitimate business interests, in order to enter into or perform a contract with you, with your consent, and/or for compliance with our legal obligations.",
    },
    PolicySection {
        title: "Data Security",
        body: "We have implemented appropriate technical and organizational security measures designed to protect the security of any personal information we process. However, despite our safeguards and efforts to secure your information, no electronic transmission over the Internet or information storage technology can be guaranteed to be 100% secure.",
    },
];

#[component]
pub fn PrivacyPolicyPage() -> impl IntoView {
    view! {
        <PageTitle page=SitePage::PrivacyPolicy/>
        <PageHero title="Privacy Policy" lede=POLICY_LAST_UPDATED/>
        <PolicyArticle sections=&SECTIONS>
            <p class="policy__body">
                "If you have questions or comments about this policy, you may email us at "
                <a href=format!("mailto:{PRIVACY_EMAIL}")>{PRIVACY_EMAIL}</a>
                " or by post to:"
            </p>
            <address class="policy__address">
                "Tech Friends IO, LLC"<br/>
                "Coconut Creek, FL 33066"<br/>
                "United States"
            </address>
        </PolicyArticle>
    }
}
