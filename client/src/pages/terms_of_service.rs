use leptos::prelude::*;

use crate::components::cards::{PageHero, PageTitle, PolicyArticle};
use crate::content::{LEGAL_EMAIL, POLICY_LAST_UPDATED, PolicySection};
use crate::routes::SitePage;

const SECTIONS: [PolicySection; 4] = [
    PolicySection {
        title: "Agreement to Terms",
        body: "By accessing or using our website and services, you agree to be bound by these Terms of Service. If you disagree with any part of the terms, then you may not access the service. These Terms apply to all visitors, users, and others who access or use the Service.",
    },
    PolicySection {
        title: "User Accounts",
        body: "When you create an account with us, you must provide us information that is accurate, complete, and current at all times. Failure to do so constitutes a breach of the Terms, which may result in immediate termination of your account on our Service. You are responsible for safeguarding the password that you use to access the Service and for any activities or actions under your password.",
    },
    PolicySection {
        title: "Intellectual Property",
        body: "The Service and its original content, features, and functionality are and will remain the exclusive property of Tech Friends IO, LLC and its licensors. The Service is protected by copyright, trademark, and other laws of both the United States and foreign countries. Our trademarks and trade dress may not be used in connection with any product or service without the prior written consent of Tech Friends IO, LLC.",
    },
    PolicySection {
        title: "Limitation of Liability",
        body: "In no event shall Tech Friends IO, LLC, nor its directors, employees, partners, agents, suppliers, or affiliates, be liable for any indirect, incidental, special, consequential or punitive damages, including without limitation, loss of profits, data, use, goodwill, or other intangible losses, resulting from (i) your access to or use of or inability to access or use the Service; (ii) any conduct or content of any third party on the Service; (iii) any content obtained from the Service; and (iv) unauthorized access, use or alteration of your transmissions or content, whether based on warranty, contract, tort (including negligence) or any other legal theory, whether or not we have been informed of the possibility of such damage, and even if a remedy set forth herein is found to have failed of its essential purpose.",
    },
];

#[component]
pub fn TermsOfServicePage() -> impl IntoView {
    view! {
        <PageTitle page=SitePage::TermsOfService/>
        <PageHero title="Terms of Service" lede=POLICY_LAST_UPDATED/>
        <PolicyArticle sections=&SECTIONS>
            <p class="policy__body">
                "If you have any questions about these Terms, please contact us at "
                <a href=format!("mailto:{LEGAL_EMAIL}")>{LEGAL_EMAIL}</a>
                "."
            </p>
        </PolicyArticle>
    }
}
