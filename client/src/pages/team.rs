use leptos::prelude::*;

use crate::components::cards::{PageHero, PageTitle};
use crate::content::TeamMember;
use crate::routes::SitePage;

const PORTRAIT_SRC: &str = "/assets/team-portrait.svg";

const TEAM: [TeamMember; 4] = [
    TeamMember {
        name: "Kelly Rodrigues",
        role: "Founder",
        bio: "Kelly Rodrigues is the driving force behind Tech Friends I/O, LLC. With nearly a decade of experience as a Systems Engineer, Kelly has a proven track record in designing, implementing, and supporting virtualization solutions for enterprise clients. Her expertise spans across Windows Server, Citrix products, and various cloud platforms including VMware, AWS, Google Cloud, Azure, and Microsoft 365. Kelly is passionate about staying ahead of the curve, holding multiple certifications in Microsoft and Citrix. She is known for her ability to troubleshoot complex technical problems and collaborate effectively with cross-functional teams and vendors. Kelly is also dedicated to knowledge sharing, contributing to internal technical articles and documentation. Fluent in Portuguese, English, and Spanish, Kelly brings a global perspective to her work. Her leadership and technical skills are the backbone of Tech Friends I/O, driving the company towards innovative solutions and excellence in IT infrastructure.",
        highlights: &[
            "Nearly 10 years in Systems Engineering",
            "Expert in Virtualization & Cloud Platforms",
            "Microsoft & Citrix Certified",
            "Trilingual: Portuguese, English, Spanish",
        ],
        linkedin: "#",
    },
    TeamMember {
        name: "Pedro Ferreira",
        role: "Principal Escalation Engineer",
        bio: "Pedro Ferreira is a seasoned Principal Escalation Engineer at Citrix/Cloud Software Group, bringing over a decade of experience in technical support and IT solutions. His career journey includes significant roles at Microsoft Support Group, FedEx Express LAC, and Stiles Corporation, where he honed his skills in troubleshooting and customer support. Pedro holds multiple Microsoft certifications, including MCSA, MCITP, and MCTS, as well as Citrix certifications such as CCA-V, CCP-V, and is currently pursuing CCE-V. His expertise in virtualization and cloud technologies makes him a valuable asset to the Tech Friends team. Fluent in English, Portuguese, and Spanish, Pedro excels in communicating complex technical issues to diverse audiences. His dedication to professional excellence and customer satisfaction is evident in his ability to handle top-priority cases and develop automated customer simulations. Pedro's technical acumen, combined with his personable and energetic approach, ensures that Tech Friends IO delivers top-notch IT solutions and support to its clients.",
        highlights: &[
            "Over 10 years in Technical Support & IT",
            "Multiple Microsoft & Citrix Certifications",
            "Expert in Escalation Management",
            "Trilingual: English, Portuguese, Spanish",
        ],
        linkedin: "#",
    },
    TeamMember {
        name: "Bruno Ferreira",
        role: "Senior Consultant - EUC - Horizon",
        bio: "Bruno Ferreira is a highly skilled and experienced professional with over 15 years of expertise in VMware Infrastructure Engineering. Currently serving as a Senior Consultant at Omnissa, Bruno has a rich background working with top international enterprise companies such as Petrobras, BULL, FedEx, Boeing, and VMware. Bruno holds multiple certifications, including Double VCIX 2022 DCV/DTM, VCIX5-DCV, VCIX6-DCV, VCIX7-DCV, and VCIX-DTM 2022. His technical acumen is complemented by his trilingual fluency in English, Portuguese, and Spanish, allowing him to effectively communicate and collaborate with diverse teams and clients. Known for his confidence, personable nature, and strong presentation skills, Bruno excels in representing Tech Friends I/O and delivering outstanding results. His extensive experience in network engineering and virtualization makes him an invaluable asset to the team, ensuring that Tech Friends I/O continues to provide top-notch IT solutions and support.",
        highlights: &[
            "Over 15 years in VMware Infrastructure",
            "Double VCIX Certified (DCV/DTM)",
            "Experience with Global Enterprises",
            "Trilingual: English, Portuguese, Spanish",
        ],
        linkedin: "#",
    },
    TeamMember {
        name: "Stephen Solari",
        role: "Senior Technical Support Engineer",
        bio: "Stephen Solari is a seasoned Senior Technical Support Engineer at Citrix, with a wealth of experience in managing and upgrading Citrix environments. His expertise spans across Citrix ADC (Netscaler), Citrix Gateway, Citrix ADM, and SDWAN support. Stephen has a proven track record of supporting multiple Citrix environments and managing PVS environments for large user bases. His previous roles include positions at the University of Miami Health System, Mallah Furman, and Hypower Inc., where he demonstrated his skills in network administration and IT management. Stephen's dedication to his work and his ability to handle complex technical challenges make him an invaluable asset to any team.",
        highlights: &[
            "Expert in Citrix ADC, Gateway, ADM, SDWAN",
            "Proven PVS Environment Management",
            "Extensive Network Administration Experience",
            "Dedicated Problem Solver",
        ],
        linkedin: "#",
    },
];

#[component]
fn MemberCard(member: TeamMember) -> impl IntoView {
    view! {
        <article class="member-card">
            <img class="member-card__portrait" src=PORTRAIT_SRC alt=member.portrait_alt()/>
            <div class="member-card__body">
                <h2 class="member-card__name">{member.name}</h2>
                <p class="member-card__role">{member.role}</p>
                <p class="member-card__bio">{member.bio}</p>
                <h4 class="member-card__highlights-title">"Key Highlights:"</h4>
                <ul class="member-card__highlights">
                    {member.highlights.iter().map(|h| view! { <li>{*h}</li> }).collect_view()}
                </ul>
                <a class="btn btn--primary" href=member.linkedin target="_blank" rel="noopener noreferrer">
                    "Connect on LinkedIn"
                </a>
            </div>
        </article>
    }
}

#[component]
pub fn TeamPage() -> impl IntoView {
    view! {
        <PageTitle page=SitePage::Team/>
        <PageHero
            title="Meet Our Team"
            lede="The passionate professionals dedicated to your success. We combine expertise with a collaborative spirit to deliver outstanding IT solutions."
        />
        <div class="member-list">
            {TEAM.iter().map(|member| view! { <MemberCard member=*member/> }).collect_view()}
        </div>
    }
}
